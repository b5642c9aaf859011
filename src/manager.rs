//! List manager: the single owner of the item collection
//!
//! All mutations go through [`ListManager`]; the UI layers never touch
//! items directly. Every mutation that changes observable state rewrites
//! the whole collection to the injected store, synchronously.

use clap::ValueEnum;

use crate::format;
use crate::store::{Item, ItemStore, Result};

/// Completion-status filter criterion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Filter {
    /// Everything, insertion order preserved
    #[default]
    All,
    /// Only items already in the cart
    Added,
    /// Only items not yet in the cart
    NotAdded,
}

impl Filter {
    /// Parse a filter-control label, case-insensitively.
    ///
    /// Anything that is not one of the two status labels selects the full
    /// collection.
    pub fn from_label(label: &str) -> Self {
        let normalized = label.trim().to_lowercase();
        if normalized == format::ADDED_LABEL.to_lowercase() {
            Filter::Added
        } else if normalized == format::NOT_ADDED_LABEL.to_lowercase() {
            Filter::NotAdded
        } else {
            Filter::All
        }
    }

    /// Whether an item passes this filter
    pub fn matches(&self, item: &Item) -> bool {
        match self {
            Filter::All => true,
            Filter::Added => item.completed,
            Filter::NotAdded => !item.completed,
        }
    }
}

/// Owns the in-memory collection and is the only writer to the store
pub struct ListManager<S: ItemStore> {
    items: Vec<Item>,
    store: S,
}

impl<S: ItemStore> ListManager<S> {
    /// Restore the collection from the store. A missing or unusable slot
    /// starts the manager empty.
    pub fn open(store: S) -> Result<Self> {
        let items = store.load()?;
        Ok(Self { items, store })
    }

    /// Re-read the collection from the store, discarding in-memory state.
    /// Used when the slot was rewritten externally.
    pub fn reload(&mut self) -> Result<()> {
        self.items = self.store.load()?;
        Ok(())
    }

    /// Add a new item with generated id and default completion state.
    ///
    /// The text is truncated through the formatter before storage. No
    /// validation happens here - rejecting empty input is a UI concern.
    pub fn add_item(&mut self, text: &str) -> Result<Item> {
        let item = Item::new(format::format_item(text));
        self.items.push(item.clone());
        self.persist()?;
        Ok(item)
    }

    /// Replace the text of the first item matching `id`, verbatim.
    ///
    /// Returns `Ok(None)` without persisting when no item matches.
    pub fn edit_item(&mut self, id: &str, new_text: &str) -> Result<Option<Item>> {
        let Some(item) = self.items.iter_mut().find(|i| i.id == id) else {
            return Ok(None);
        };
        item.text = new_text.to_string();
        let updated = item.clone();
        self.persist()?;
        Ok(Some(updated))
    }

    /// Remove all items matching `id`. Persists unconditionally, even when
    /// nothing matched.
    pub fn delete_item(&mut self, id: &str) -> Result<()> {
        self.items.retain(|i| i.id != id);
        self.persist()
    }

    /// Flip the completion flag of the item matching `id`. No-op (no
    /// write) when missing.
    pub fn toggle_item_status(&mut self, id: &str) -> Result<()> {
        let Some(item) = self.items.iter_mut().find(|i| i.id == id) else {
            return Ok(());
        };
        item.completed = !item.completed;
        self.persist()
    }

    /// Empty the collection. Skips the write when already empty.
    pub fn clear_all_items(&mut self) -> Result<()> {
        if self.items.is_empty() {
            return Ok(());
        }
        self.items.clear();
        self.persist()
    }

    /// Items passing the filter, in insertion order. Never mutates.
    pub fn filter_items(&self, filter: Filter) -> Vec<Item> {
        self.items
            .iter()
            .filter(|i| filter.matches(i))
            .cloned()
            .collect()
    }

    /// The full collection, insertion order
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Find an item by id
    pub fn get(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|i| i.id == id)
    }

    fn persist(&mut self) -> Result<()> {
        self.store.save(&self.items)
    }
}
