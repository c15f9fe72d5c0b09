//! Staged editing of column visibility.

use tracing::{debug, trace};

use crate::storage::KeyValueStore;
use crate::table::ColumnRegistry;

use super::{VisibilityMap, VisibilityStore};

/// One open editing session.
#[derive(Debug, Clone)]
struct Session {
    /// Working copy, explicit for every column known at open time.
    staged: VisibilityMap,
    /// The resolved committed map at open time.
    baseline: VisibilityMap,
}

/// The column visibility editor: `Closed -> Open(staged) -> Closed`.
///
/// Opening clones the committed map, resolved against the registry, into a
/// staged copy. Toggles only touch that copy. [`save`](Self::save) commits it
/// to the store when it differs from what was committed;
/// [`cancel`](Self::cancel) throws it away.
#[derive(Debug, Clone, Default)]
pub struct ColumnEditor {
    session: Option<Session>,
}

impl ColumnEditor {
    /// Create a closed editor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session from the latest committed map.
    ///
    /// Any session already open is replaced.
    pub fn open<S: KeyValueStore>(
        &mut self,
        store: &VisibilityStore<S>,
        registry: &ColumnRegistry,
    ) {
        let baseline = store.resolved(registry);
        debug!(columns = baseline.len(), "Opening column editor");
        self.session = Some(Session {
            staged: baseline.clone(),
            baseline,
        });
    }

    /// Check if a session is open.
    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    /// The staged map of the open session.
    pub fn staged(&self) -> Option<&VisibilityMap> {
        self.session.as_ref().map(|s| &s.staged)
    }

    /// Flip a column in the staged map.
    ///
    /// Returns false when closed or when the column was not known at open time.
    pub fn toggle(&mut self, id: &str) -> bool {
        let Some(session) = self.session.as_mut() else {
            return false;
        };
        let toggled = session.staged.toggle(id);
        trace!(column = id, toggled, "Toggled staged column");
        toggled
    }

    /// Mark every registered column visible in the staged map.
    pub fn show_all(&mut self, registry: &ColumnRegistry) {
        if let Some(session) = self.session.as_mut() {
            session.staged.show_all(registry);
        }
    }

    /// Whether the staged map differs from the committed one.
    pub fn is_dirty(&self) -> bool {
        self.session
            .as_ref()
            .is_some_and(|s| s.staged != s.baseline)
    }

    /// Commit the staged map and close the session.
    ///
    /// Does nothing, and keeps the session open, unless the editor is dirty.
    /// Returns true when a commit happened.
    pub fn save<S: KeyValueStore>(&mut self, store: &mut VisibilityStore<S>) -> bool {
        if !self.is_dirty() {
            return false;
        }
        if let Some(session) = self.session.take() {
            debug!("Committing staged column visibility");
            store.commit(session.staged);
        }
        true
    }

    /// Close the session without committing.
    pub fn cancel(&mut self) {
        if self.session.take().is_some() {
            debug!("Discarded staged column visibility");
        }
    }
}
