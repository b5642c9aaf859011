//! Carted - a terminal grocery list manager
//!
//! Add, edit, check off, and filter short text items. The whole collection
//! persists as a single JSON document, rewritten on every mutation, so
//! state survives between runs with no database to set up.
//!
//! # Layers
//!
//! | Module | Purpose |
//! |--------|---------|
//! | `format` | Pure text truncation and status labels |
//! | `store` | Item model, JSON slot, storage trait |
//! | `manager` | The only owner/mutator of the collection |
//! | `tui` | Interactive terminal UI |
//!
//! # Quick Start
//!
//! ```no_run
//! use carted::{Filter, JsonFileStore, ListManager};
//!
//! let store = JsonFileStore::new(".carted/items.json");
//! let mut list = ListManager::open(store).unwrap();
//!
//! let apples = list.add_item("apples").unwrap();
//! list.toggle_item_status(&apples.id).unwrap();
//!
//! let in_cart = list.filter_items(Filter::Added);
//! println!("{} item(s) in the cart", in_cart.len());
//! ```

pub mod config;
pub mod format;
pub mod manager;
pub mod store;
pub mod tui;

pub use config::Config;
pub use manager::{Filter, ListManager};
pub use store::{Item, ItemStore, JsonFileStore, MemoryStore, StoreError};

#[cfg(test)]
mod tests {
    use super::*;

    // The Quick Start flow from the crate docs, run against an in-memory
    // store so it actually executes under `cargo test`
    #[test]
    fn test_quick_start_flow() {
        let mut list = ListManager::open(MemoryStore::new()).unwrap();

        let apples = list.add_item("apples").unwrap();
        list.toggle_item_status(&apples.id).unwrap();

        let in_cart = list.filter_items(Filter::Added);
        assert_eq!(in_cart.len(), 1);
        assert_eq!(in_cart[0].text, "apples");
    }
}
