//! UI utility functions
//!
//! Helper functions for UI layout and rendering.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Creates a centered rectangle within a given area
///
/// Useful for creating modal dialogs and popups. Centers the rectangle
/// both horizontally and vertically.
///
/// # Arguments
/// - `percent_x` - Width as a percentage (0-100)
/// - `percent_y` - Height as a percentage (0-100)
/// - `r` - The parent rectangle to center within
///
/// # Returns
/// A Rect centered within the parent area
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Computes the screen slot for the toast at stack position `index`
///
/// Toasts are anchored to the top-right corner and stack downwards,
/// `height` rows each. Returns None once the stack runs off the bottom
/// of the area; older toasts simply wait for the newer ones to go.
///
/// # Arguments
/// - `index` - Position in the visible stack (0 = oldest rendered)
/// - `width` - Toast width in columns
/// - `height` - Toast height in rows
/// - `r` - The full frame area
pub(crate) fn toast_rect(index: usize, width: u16, height: u16, r: Rect) -> Option<Rect> {
    let width = width.min(r.width);
    let y = r.y + 1 + (index as u16) * height;
    if y + height > r.y + r.height {
        return None;
    }
    Some(Rect {
        x: r.x + r.width - width,
        y,
        width,
        height,
    })
}
