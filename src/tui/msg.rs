//! Message types for the TUI
//!
//! Every user action is a [`Msg`], processed by the single update
//! function. This replaces per-widget callbacks with one explicit
//! dispatch table: messages describe what happened, not how to handle it.

use crossterm::event::{KeyCode, KeyModifiers};

use crate::manager::Filter;

/// All possible messages/actions in the TUI
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    // === Text input ===
    /// Add a character to the input buffer
    InputChar(char),
    /// Remove the last character from the input buffer
    InputBackspace,
    /// Commit the input buffer (add, or update when editing)
    Submit,
    /// Leave input mode, abandoning any pending edit
    CancelInput,
    /// Enter input mode
    FocusInput,

    // === Navigation ===
    /// Move selection up by one
    MoveUp,
    /// Move selection down by one
    MoveDown,
    /// Jump to first row
    JumpToTop,
    /// Jump to last row
    JumpToBottom,

    // === Per-item actions ===
    /// Load the selected item into the input for editing
    BeginEdit,
    /// Flip the selected item's completion flag
    ToggleSelected,
    /// Delete the selected item
    DeleteSelected,

    // === List-wide actions ===
    /// Delete every item
    ClearAll,
    /// Show only items matching the filter
    SetFilter(Filter),

    // === Lifecycle ===
    /// Quit the application
    Quit,
    /// Periodic tick (notice expiry)
    Tick,
    /// No operation (for unhandled keys)
    Noop,
}

/// Convert a key event to a message.
///
/// Pure function - the result describes what the user intended, given
/// whether the input bar currently has focus.
pub fn key_to_msg(code: KeyCode, modifiers: KeyModifiers, input_active: bool) -> Msg {
    if modifiers.contains(KeyModifiers::CONTROL) && code == KeyCode::Char('c') {
        return Msg::Quit;
    }

    if input_active {
        return match code {
            KeyCode::Enter => Msg::Submit,
            KeyCode::Esc => Msg::CancelInput,
            KeyCode::Backspace => Msg::InputBackspace,
            KeyCode::Char(c) => Msg::InputChar(c),
            _ => Msg::Noop,
        };
    }

    match code {
        KeyCode::Char('q') | KeyCode::Esc => Msg::Quit,
        KeyCode::Char('i') | KeyCode::Char('a') => Msg::FocusInput,
        KeyCode::Char('j') | KeyCode::Down => Msg::MoveDown,
        KeyCode::Char('k') | KeyCode::Up => Msg::MoveUp,
        KeyCode::Char('g') | KeyCode::Home => Msg::JumpToTop,
        KeyCode::Char('G') | KeyCode::End => Msg::JumpToBottom,
        KeyCode::Char('e') => Msg::BeginEdit,
        KeyCode::Char(' ') | KeyCode::Enter => Msg::ToggleSelected,
        KeyCode::Char('d') => Msg::DeleteSelected,
        KeyCode::Char('C') => Msg::ClearAll,
        KeyCode::Char('1') => Msg::SetFilter(Filter::All),
        KeyCode::Char('2') => Msg::SetFilter(Filter::Added),
        KeyCode::Char('3') => Msg::SetFilter(Filter::NotAdded),
        _ => Msg::Noop,
    }
}
