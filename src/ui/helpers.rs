//! Helpers for creating consistently styled blocks.

use ratatui::{
    layout::Alignment,
    symbols::border,
    widgets::{Block, Borders},
};

use crate::theme::Palette;

// ============================================================================
// Border Block Helpers
// ============================================================================

/// Creates a bordered panel block whose look follows the focus state.
///
/// Focused panels get a double border, a bullet before the title and the
/// primary color.
#[must_use]
pub fn create_border_block<'a>(title: &str, focused: bool, palette: &Palette) -> Block<'a> {
    let (border_set, border_style, title_style, display_title) = if focused {
        (
            border::DOUBLE,
            palette.focused_border_style(),
            palette.focused_title_style(),
            format!(" ● {title} "),
        )
    } else {
        (
            border::ROUNDED,
            palette.border_style(),
            palette.muted_style(),
            format!(" {title} "),
        )
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(border_set)
        .border_style(border_style)
        .style(palette.base_style());

    if title.is_empty() {
        block
    } else {
        block.title(display_title).title_style(title_style)
    }
}

/// Creates a popup block with a centered title and rounded borders.
#[must_use]
pub fn create_popup_block<'a>(title: &str, palette: &Palette) -> Block<'a> {
    Block::default()
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .title_style(palette.focused_title_style())
        .borders(Borders::ALL)
        .border_set(border::ROUNDED)
        .border_style(palette.focused_border_style())
        .style(palette.base_style())
}

// ============================================================================
// Tests
// ============================================================================
