//! Display formatting for items
//!
//! Pure functions only - no state, no I/O. Both the CLI table and the TUI
//! run item text through [`format_item`] at render time, so over-long text
//! is truncated consistently everywhere it appears.

/// Maximum item text length shown before truncation
pub const MAX_ITEM_LEN: usize = 20;

/// Marker appended to truncated item text
pub const ELLIPSIS: &str = "...";

/// Label for items already in the cart
pub const ADDED_LABEL: &str = "Added to Cart";

/// Label for items not yet in the cart
pub const NOT_ADDED_LABEL: &str = "Not Added to Cart";

/// Truncate item text to [`MAX_ITEM_LEN`] characters, appending an ellipsis.
///
/// Text at or under the limit passes through unchanged. Length is counted
/// in code points, with no unicode-width or locale handling.
pub fn format_item(text: &str) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(MAX_ITEM_LEN).collect();
    if chars.next().is_some() {
        format!("{}{}", head, ELLIPSIS)
    } else {
        head
    }
}

/// Map a completion flag to its fixed status label.
pub fn format_status(completed: bool) -> &'static str {
    if completed {
        ADDED_LABEL
    } else {
        NOT_ADDED_LABEL
    }
}
