//! Synthetic customer records for the demo table.

/// Number of rows generated when nothing else is configured.
pub const DEFAULT_ROW_COUNT: usize = 105;

const FIRST_NAMES: [&str; 5] = ["John", "Jane", "Joe", "Kevin", "Joshua"];
const LAST_NAMES: [&str; 5] = ["Doe", "Smith", "Johnson", "Williams", "Brown"];
const CITIES: [&str; 5] = ["New York", "Los Angeles", "Chicago", "Houston", "Phoenix"];
const STATES: [&str; 5] = ["NY", "CA", "IL", "TX", "AZ"];

/// A fake customer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub state: String,
}

impl Customer {
    /// Build the customer at position `index` of the generated list.
    pub fn synthetic(index: usize) -> Self {
        let slot = index % 5;
        Self {
            first_name: FIRST_NAMES[slot].to_string(),
            last_name: LAST_NAMES[slot].to_string(),
            email: format!("user{}@example.com", index),
            phone: format!("(555) {:03}-{:04}", index, index * 2),
            address: format!("{} Main Street", 100 + index),
            city: CITIES[slot].to_string(),
            state: STATES[slot].to_string(),
        }
    }

    /// Display text for a column, or `None` for an unknown column id.
    pub fn cell(&self, column_id: &str) -> Option<&str> {
        let value = match column_id {
            "firstName" => &self.first_name,
            "lastName" => &self.last_name,
            "email" => &self.email,
            "phone" => &self.phone,
            "address" => &self.address,
            "city" => &self.city,
            "state" => &self.state,
            _ => return None,
        };
        Some(value.as_str())
    }

    /// Full display name.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Generate `count` synthetic customers.
pub fn generate_customers(count: usize) -> Vec<Customer> {
    (0..count).map(Customer::synthetic).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::ColumnRegistry;

    #[test]
    fn test_generate_count() {
        assert_eq!(generate_customers(DEFAULT_ROW_COUNT).len(), 105);
        assert!(generate_customers(0).is_empty());
    }

    #[test]
    fn test_first_record() {
        let c = Customer::synthetic(0);
        assert_eq!(c.full_name(), "John Doe");
        assert_eq!(c.email, "user0@example.com");
        assert_eq!(c.phone, "(555) 000-0000");
        assert_eq!(c.address, "100 Main Street");
        assert_eq!(c.city, "New York");
        assert_eq!(c.state, "NY");
    }

    #[test]
    fn test_fields_cycle() {
        let c = Customer::synthetic(7);
        assert_eq!(c.first_name, "Joe");
        assert_eq!(c.last_name, "Johnson");
        assert_eq!(c.city, "Chicago");
        assert_eq!(c.phone, "(555) 007-0014");
        assert_eq!(c.address, "107 Main Street");
    }

    #[test]
    fn test_every_registered_column_has_a_cell() {
        let c = Customer::synthetic(3);
        for id in ColumnRegistry::customers().ids() {
            assert!(c.cell(id).is_some(), "missing cell for {}", id);
        }
        assert_eq!(c.cell("state"), Some("TX"));
        assert_eq!(c.cell("nope"), None);
    }
}
