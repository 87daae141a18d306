//! Decoded inventory data.
//!
//! An [`Inventory`] is built once by the reader and only read afterwards.
//! Roles iterate in lexicographic order, and items within a role do too.

use std::collections::BTreeMap;

/// One documented object from an inventory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryEntry {
    /// Role tag, e.g. "py:function"
    pub role: String,
    /// Object name, unique within its role
    pub name: String,
    /// Project name recorded in the inventory header
    pub domain: String,
    /// Project version recorded in the inventory header
    pub version: String,
    /// Documentation location, already joined with the base reference
    pub location: String,
    /// Display title; "" or "-" means the object has no title of its own
    pub title: String,
}

impl InventoryEntry {
    /// Whether the entry carries a real display title
    pub fn has_title(&self) -> bool {
        !(self.title.is_empty() || self.title == "-")
    }
}

/// Mapping of role -> item name -> entry
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    roles: BTreeMap<String, BTreeMap<String, InventoryEntry>>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry, replacing any earlier entry with the same role and name
    pub fn insert(&mut self, entry: InventoryEntry) {
        self.roles.entry(entry.role.clone()).or_default().insert(entry.name.clone(), entry);
    }

    pub fn contains(&self, role: &str, name: &str) -> bool {
        self.get(role, name).is_some()
    }

    pub fn get(&self, role: &str, name: &str) -> Option<&InventoryEntry> {
        self.roles.get(role).and_then(|items| items.get(name))
    }

    /// Iterate roles in order, each with its entries in order
    pub fn roles(&self) -> impl Iterator<Item = (&str, impl Iterator<Item = &InventoryEntry>)> {
        self.roles.iter().map(|(role, items)| (role.as_str(), items.values()))
    }

    /// Total number of entries across all roles
    pub fn len(&self) -> usize {
        self.roles.values().map(|items| items.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }

    /// Number of distinct roles
    pub fn role_count(&self) -> usize {
        self.roles.len()
    }
}

impl FromIterator<InventoryEntry> for Inventory {
    fn from_iter<T: IntoIterator<Item = InventoryEntry>>(iter: T) -> Self {
        let mut inventory = Inventory::new();
        for entry in iter {
            inventory.insert(entry);
        }
        inventory
    }
}
