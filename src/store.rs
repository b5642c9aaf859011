//! Item model and persisted storage
//!
//! The whole collection lives in a single slot: a JSON array of item
//! objects. Every mutation rewrites the full slot synchronously. The slot
//! is behind the [`ItemStore`] trait so the manager can be driven by a
//! real file in production and an in-memory double in tests.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use uuid::Uuid;

use crate::format;

/// Env var overriding the store file location
pub const STORE_PATH_ENV: &str = "CARTED_STORE_PATH";

/// Walk up the directory tree to find a .carted folder (like git finds .git).
/// Can be overridden with CARTED_STORE_PATH env var.
pub fn default_store_path() -> PathBuf {
    // Check env var first - always takes priority
    if let Ok(path) = std::env::var(STORE_PATH_ENV) {
        return PathBuf::from(path);
    }

    if let Ok(current_dir) = std::env::current_dir() {
        let mut dir = current_dir.as_path();
        loop {
            let carted_dir = dir.join(".carted");
            if carted_dir.is_dir() {
                return carted_dir.join("items.json");
            }
            match dir.parent() {
                Some(parent) => dir = parent,
                None => break,
            }
        }
    }

    // No .carted found - default to current directory
    PathBuf::from(".carted/items.json")
}

// ============================================================================
// Item Model
// ============================================================================

/// A single list entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    /// Opaque unique token, assigned at creation, immutable thereafter
    pub id: String,
    /// User-provided text content
    pub text: String,
    /// Whether the item has been added to the cart
    pub completed: bool,
}

impl Item {
    /// Create a fresh item with a generated id and default completion state
    pub fn new(text: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            text,
            completed: false,
        }
    }

    /// The status label derived from the completion flag
    pub fn status_label(&self) -> &'static str {
        format::format_status(self.completed)
    }
}

/// Wire form of an item as stored in the slot.
///
/// Matches the persisted schema: `{id, item, completed, status}`. The
/// `status` field is redundant with `completed`; it is written for
/// compatibility and ignored on load.
#[derive(Debug, Serialize, Deserialize)]
struct StoredItem {
    id: String,
    #[serde(rename = "item")]
    text: String,
    #[serde(default)]
    completed: bool,
    #[serde(default)]
    status: String,
}

impl From<&Item> for StoredItem {
    fn from(item: &Item) -> Self {
        Self {
            id: item.id.clone(),
            text: item.text.clone(),
            completed: item.completed,
            status: item.status_label().to_string(),
        }
    }
}

impl From<StoredItem> for Item {
    fn from(stored: StoredItem) -> Self {
        // status is derived state - recomputed from completed, never trusted
        Self {
            id: stored.id,
            text: stored.text,
            completed: stored.completed,
        }
    }
}

// ============================================================================
// Errors
// ============================================================================

/// Error type for store operations
#[derive(Debug)]
pub enum StoreError {
    Io(std::io::Error),
    Serde(serde_json::Error),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Io(e) => write!(f, "Store I/O error: {}", e),
            StoreError::Serde(e) => write!(f, "Store encoding error: {}", e),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<std::io::Error> for StoreError {
    fn from(e: std::io::Error) -> Self {
        StoreError::Io(e)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::Serde(e)
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;

// ============================================================================
// Storage Seam
// ============================================================================

/// The persisted slot holding the whole collection.
///
/// `save` rewrites the entire collection; there is no partial update.
pub trait ItemStore {
    /// Read the collection. Absence or corruption of the slot yields an
    /// empty collection, not an error.
    fn load(&self) -> Result<Vec<Item>>;

    /// Overwrite the slot with the full collection.
    fn save(&mut self, items: &[Item]) -> Result<()>;
}

/// File-backed store: one JSON document holding the serialized collection
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// Store at the default resolved location (env var, then .carted walk-up)
    pub fn open_default() -> Self {
        Self::new(default_store_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ItemStore for JsonFileStore {
    fn load(&self) -> Result<Vec<Item>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let contents = std::fs::read_to_string(&self.path)?;
        // Corrupt slot reads as empty - no migration, no versioning
        let stored: Vec<StoredItem> = match serde_json::from_str(&contents) {
            Ok(stored) => stored,
            Err(_) => return Ok(Vec::new()),
        };
        Ok(stored.into_iter().map(Item::from).collect())
    }

    fn save(&mut self, items: &[Item]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let stored: Vec<StoredItem> = items.iter().map(StoredItem::from).collect();
        let json = serde_json::to_string(&stored)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }
}

/// In-memory store with a write counter, for tests
#[derive(Default)]
pub struct MemoryStore {
    items: Vec<Item>,
    saves: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seed the slot, as if a previous session had written it
    pub fn with_items(items: Vec<Item>) -> Self {
        Self { items, saves: 0 }
    }

    /// How many times `save` has been called
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl ItemStore for MemoryStore {
    fn load(&self) -> Result<Vec<Item>> {
        Ok(self.items.clone())
    }

    fn save(&mut self, items: &[Item]) -> Result<()> {
        self.items = items.to_vec();
        self.saves += 1;
        Ok(())
    }
}
