//! Inventory decoding module.
//!
//! This module handles:
//! - Decoding Sphinx `objects.inv` streams (format versions 1 and 2)
//! - Joining each entry's location onto a base reference
//! - Holding the decoded role -> item -> entry mapping
//!
//! # Module Organization
//!
//! - `types` - `Inventory` and `InventoryEntry`
//! - `reader` - Header parsing and entry decoding

mod reader;
mod types;

pub use reader::{posix_join, read_inventory};
pub use types::{Inventory, InventoryEntry};
