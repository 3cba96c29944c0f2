//! Message popup for validation and submission errors.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    widgets::{Clear, Paragraph, Wrap},
};

use crate::theme::Palette;
use crate::ui::helpers::create_popup_block;
use crate::ui::layout::centered_popup_area;

// ============================================================================
// Public API
// ============================================================================

/// Renders `message` in a centered popup sized to its content.
pub fn render(frame: &mut Frame, area: Rect, message: &str, palette: &Palette) {
    let message_lines = u16::try_from(message.lines().count().max(1)).unwrap_or(u16::MAX);
    let longest_line = message
        .lines()
        .map(|line| ratatui::text::Line::raw(line).width())
        .max()
        .unwrap_or(0);
    let longest_line = u16::try_from(longest_line).unwrap_or(u16::MAX);

    let popup_width = 40
        .max(longest_line.saturating_add(6))
        .min(area.width * 8 / 10);
    let popup_height = 6.max(message_lines.saturating_add(4));
    let popup_area = centered_popup_area(area, popup_width, popup_height);

    let popup_block = create_popup_block("Message", palette);
    let inner_area = popup_block.inner(popup_area);
    frame.render_widget(Clear, popup_area);
    frame.render_widget(popup_block, popup_area);

    // Reserve the last two inner rows for separator and help.
    let message_area = Rect::new(
        inner_area.x,
        inner_area.y,
        inner_area.width,
        inner_area.height.saturating_sub(2),
    );
    let prompt = Paragraph::new(message)
        .style(palette.base_style())
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(prompt, message_area);

    if inner_area.height < 2 {
        return;
    }

    let separator = "─".repeat(usize::from(inner_area.width));
    let separator_area = Rect::new(inner_area.x, inner_area.bottom() - 2, inner_area.width, 1);
    frame.render_widget(
        Paragraph::new(separator).style(palette.border_style()),
        separator_area,
    );

    let help_area = Rect::new(inner_area.x, inner_area.bottom() - 1, inner_area.width, 1);
    frame.render_widget(
        Paragraph::new("Esc:Close  Enter:Close")
            .style(palette.muted_style())
            .alignment(Alignment::Center),
        help_area,
    );
}

// ============================================================================
// Tests
// ============================================================================
