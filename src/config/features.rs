//! On/off switches for the table's optional features.

use serde::{Deserialize, Serialize};

/// A single optional feature of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feature {
    Pagination,
    BulkActions,
    RowCheckboxes,
    EditColumns,
    RowMenu,
    HoverAction,
}

impl Feature {
    /// All features, in switch order (keys `1` to `6`).
    pub const ALL: [Feature; 6] = [
        Feature::Pagination,
        Feature::BulkActions,
        Feature::RowCheckboxes,
        Feature::EditColumns,
        Feature::RowMenu,
        Feature::HoverAction,
    ];

    /// The feature bound to a digit key, if any.
    pub fn from_digit(digit: char) -> Option<Self> {
        let index = digit.to_digit(10)? as usize;
        index.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }

    /// Short label for the switch bar.
    pub fn label(&self) -> &'static str {
        match self {
            Feature::Pagination => "Pagination",
            Feature::BulkActions => "Bulk actions",
            Feature::RowCheckboxes => "Checkboxes",
            Feature::EditColumns => "Edit columns",
            Feature::RowMenu => "Row menu",
            Feature::HoverAction => "Hover action",
        }
    }
}

/// The current state of every feature switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Features {
    /// Show the pagination controls.
    pub pagination: bool,
    /// Show the bulk-action buttons in the toolbar.
    pub bulk_actions: bool,
    /// Show row checkboxes and allow selecting rows.
    pub row_checkboxes: bool,
    /// Allow opening the column editor.
    pub edit_columns: bool,
    /// Allow opening the per-row overflow menu.
    pub row_menu: bool,
    /// Reveal an action button on the cursor row.
    pub hover_action: bool,
}

impl Features {
    /// Whether a feature is on.
    pub fn is_enabled(&self, feature: Feature) -> bool {
        match feature {
            Feature::Pagination => self.pagination,
            Feature::BulkActions => self.bulk_actions,
            Feature::RowCheckboxes => self.row_checkboxes,
            Feature::EditColumns => self.edit_columns,
            Feature::RowMenu => self.row_menu,
            Feature::HoverAction => self.hover_action,
        }
    }

    /// Flip a feature and return its new state.
    pub fn toggle(&mut self, feature: Feature) -> bool {
        let flag = match feature {
            Feature::Pagination => &mut self.pagination,
            Feature::BulkActions => &mut self.bulk_actions,
            Feature::RowCheckboxes => &mut self.row_checkboxes,
            Feature::EditColumns => &mut self.edit_columns,
            Feature::RowMenu => &mut self.row_menu,
            Feature::HoverAction => &mut self.hover_action,
        };
        *flag = !*flag;
        *flag
    }
}

impl Default for Features {
    fn default() -> Self {
        Self {
            pagination: true,
            bulk_actions: true,
            row_checkboxes: true,
            edit_columns: true,
            row_menu: true,
            hover_action: true,
        }
    }
}
