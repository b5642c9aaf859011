//! The update function: one message in, one state transition out
//!
//! Every manager call the TUI makes lives here, so the mapping from user
//! action to list mutation is a single match. Store failures surface as
//! error notices instead of tearing the terminal down.

use crate::store::ItemStore;

use super::app::{App, Mode};
use super::msg::Msg;
use super::state::{move_selection_down, move_selection_up, EditState};

/// Process a message. Returns true when the app should quit.
pub fn update<S: ItemStore>(app: &mut App<S>, msg: Msg) -> bool {
    match msg {
        Msg::Quit => return true,

        Msg::Tick => app.tick(),

        Msg::Noop => {}

        // === Text input ===
        Msg::FocusInput => app.mode = Mode::Input,

        Msg::InputChar(c) => app.input.push(c),

        Msg::InputBackspace => {
            app.input.pop();
        }

        Msg::CancelInput => {
            app.input.clear();
            app.edit = EditState::Idle;
            app.mode = Mode::Normal;
        }

        Msg::Submit => submit(app),

        // === Navigation ===
        Msg::MoveUp => app.selected = move_selection_up(app.selected),

        Msg::MoveDown => {
            app.selected = move_selection_down(app.selected, app.visible.len());
        }

        Msg::JumpToTop => app.selected = 0,

        Msg::JumpToBottom => {
            app.selected = app.visible.len().saturating_sub(1);
        }

        // === Per-item actions ===
        Msg::BeginEdit => {
            // Last-initiated edit wins: any pending edit state is replaced
            if let Some(item) = app.selected_item() {
                let (id, text) = (item.id.clone(), item.text.clone());
                app.input = text;
                app.edit = EditState::Editing { id };
                app.mode = Mode::Input;
            }
        }

        Msg::ToggleSelected => {
            if let Some(item) = app.selected_item() {
                let id = item.id.clone();
                match app.manager.toggle_item_status(&id) {
                    Ok(()) => app.reset_view(),
                    Err(e) => app.notify_error(e.to_string()),
                }
            }
        }

        Msg::DeleteSelected => {
            if let Some(item) = app.selected_item() {
                let id = item.id.clone();
                match app.manager.delete_item(&id) {
                    Ok(()) => {
                        app.notify_success("Item deleted successfully");
                        app.reset_view();
                    }
                    Err(e) => app.notify_error(e.to_string()),
                }
            }
        }

        // === List-wide actions ===
        Msg::ClearAll => match app.manager.clear_all_items() {
            Ok(()) => {
                // Success is reported even when the list was already empty
                app.notify_success("All items cleared successfully");
                app.reset_view();
            }
            Err(e) => app.notify_error(e.to_string()),
        },

        Msg::SetFilter(filter) => {
            app.filter = filter;
            app.refresh();
        }
    }

    false
}

/// Commit the input bar: an update when an edit is pending, an add
/// otherwise.
fn submit<S: ItemStore>(app: &mut App<S>) {
    if let EditState::Editing { id } = app.edit.clone() {
        // Edits commit the input verbatim - no trimming, no re-truncation
        match app.manager.edit_item(&id, &app.input) {
            Ok(updated) => {
                // A vanished id (the store changed underneath the pending
                // edit) is absorbed silently, same as the CLI
                if updated.is_some() {
                    app.notify_success("Item updated successfully");
                }
                app.input.clear();
                app.edit = EditState::Idle;
                app.mode = Mode::Normal;
                app.reset_view();
            }
            Err(e) => app.notify_error(e.to_string()),
        }
        return;
    }

    let text = app.input.trim().to_string();
    if text.is_empty() {
        app.notify_error("Please enter an item");
        return;
    }

    match app.manager.add_item(&text) {
        Ok(_) => {
            app.input.clear();
            app.notify_success("Item added successfully");
            app.reset_view();
        }
        Err(e) => app.notify_error(e.to_string()),
    }
}
