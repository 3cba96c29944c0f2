//! Toast notification component.
//!
//! A non-blocking overlay in the bottom-right corner. The message prefix
//! picks the color: `[+]` for success, `[x]` for errors.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    symbols::border,
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::theme::Palette;

// ============================================================================
// Constants
// ============================================================================

const MIN_TOAST_WIDTH: u16 = 20;

const TOAST_HEIGHT: u16 = 3;

/// Horizontal padding from the right edge.
const TOAST_PADDING_RIGHT: u16 = 2;

/// Vertical padding from the bottom edge, clear of the footer.
const TOAST_PADDING_BOTTOM: u16 = 2;

/// Borders plus one space each side.
const TOAST_WIDTH_PADDING: u16 = 4;

// ============================================================================
// Public API
// ============================================================================

/// Renders `message` as a toast in the bottom-right corner of `area`.
pub fn render_toast(frame: &mut Frame, area: Rect, message: &str, palette: &Palette) {
    let toast_area = calculate_toast_position(area, message);

    frame.render_widget(Clear, toast_area);

    let toast_block = Block::default()
        .borders(Borders::ALL)
        .border_set(border::ROUNDED)
        .border_style(palette.border_style())
        .style(palette.base_style());
    let inner_area = toast_block.inner(toast_area);
    frame.render_widget(toast_block, toast_area);

    let toast_text = Paragraph::new(message)
        .style(Style::default().fg(text_color(message, palette)))
        .alignment(Alignment::Center);

    frame.render_widget(toast_text, inner_area);
}

// ============================================================================
// Internal Helpers
// ============================================================================

#[must_use]
fn calculate_toast_position(area: Rect, message: &str) -> Rect {
    let message_width = u16::try_from(unicode_width(message)).unwrap_or(u16::MAX);
    let toast_width = message_width
        .saturating_add(TOAST_WIDTH_PADDING)
        .min(area.width / 2)
        .max(MIN_TOAST_WIDTH)
        .min(area.width);
    let toast_height = TOAST_HEIGHT.min(area.height);

    let toast_x = area.x + area.width.saturating_sub(toast_width + TOAST_PADDING_RIGHT);
    let toast_y = area.y
        + area
            .height
            .saturating_sub(toast_height + TOAST_PADDING_BOTTOM);

    Rect::new(toast_x, toast_y, toast_width, toast_height)
}

fn unicode_width(message: &str) -> usize {
    ratatui::text::Line::raw(message).width()
}

#[must_use]
fn text_color(message: &str, palette: &Palette) -> Color {
    if message.starts_with("[+]") {
        palette.income
    } else if message.starts_with("[x]") {
        palette.error
    } else {
        palette.text
    }
}

// ============================================================================
// Tests
// ============================================================================
