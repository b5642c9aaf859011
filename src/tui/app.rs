//! Application state for the TUI (imperative shell)

use std::time::{Duration, Instant};

use crate::manager::{Filter, ListManager};
use crate::store::{Item, ItemStore};

use super::state::{clamp_selection, EditState, Notice, NoticeKind};

/// Current input focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// List navigation and per-item actions
    Normal,
    /// Typing into the input bar
    Input,
}

/// Main application state
///
/// Generic over the store so tests can drive it with `MemoryStore`.
pub struct App<S: ItemStore> {
    pub manager: ListManager<S>,

    // View state
    pub visible: Vec<Item>,
    pub selected: usize,
    pub filter: Filter,

    // Input bar
    pub input: String,
    pub mode: Mode,
    pub edit: EditState,

    // Notice region
    pub notice: Option<Notice>,
    notice_ttl: Duration,
}

impl<S: ItemStore> App<S> {
    pub fn new(store: S, notice_ttl: Duration) -> crate::store::Result<Self> {
        let manager = ListManager::open(store)?;
        let visible = manager.items().to_vec();
        Ok(Self {
            manager,
            visible,
            selected: 0,
            filter: Filter::All,
            input: String::new(),
            mode: Mode::Normal,
            edit: EditState::Idle,
            notice: None,
            notice_ttl,
        })
    }

    /// Re-derive the visible rows from the current filter
    pub fn refresh(&mut self) {
        self.visible = self.manager.filter_items(self.filter);
        self.selected = clamp_selection(self.selected, self.visible.len());
    }

    /// Reset to the full, unfiltered list.
    ///
    /// Every mutation routes through this: the view policy is that
    /// add/edit/toggle/delete/clear always drop back to showing everything,
    /// and filters are re-applied explicitly.
    pub fn reset_view(&mut self) {
        self.filter = Filter::All;
        self.refresh();
    }

    /// Re-read the collection after the store file changed externally
    pub fn reload_from_store(&mut self) -> crate::store::Result<()> {
        self.manager.reload()?;
        self.refresh();
        Ok(())
    }

    /// The item under the cursor, if any
    pub fn selected_item(&self) -> Option<&Item> {
        self.visible.get(self.selected)
    }

    pub fn notify_success(&mut self, text: impl Into<String>) {
        self.notice = Some(Notice::new(
            text.into(),
            NoticeKind::Success,
            Instant::now(),
            self.notice_ttl,
        ));
    }

    pub fn notify_error(&mut self, text: impl Into<String>) {
        self.notice = Some(Notice::new(
            text.into(),
            NoticeKind::Error,
            Instant::now(),
            self.notice_ttl,
        ));
    }

    /// Periodic tick: drop the notice once its deadline passes
    pub fn tick(&mut self) {
        let now = Instant::now();
        if let Some(notice) = &self.notice {
            if notice.is_expired(now) {
                self.notice = None;
            }
        }
    }
}
