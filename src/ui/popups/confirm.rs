//! Quit confirmation popup.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Clear, Paragraph},
};

use crate::theme::Palette;
use crate::ui::helpers::create_popup_block;
use crate::ui::layout::centered_popup_area;

const POPUP_WIDTH: u16 = 44;
const POPUP_HEIGHT: u16 = 7;

/// Renders the "quit Pocketbook?" popup with y/n hints.
pub fn render(frame: &mut Frame, area: Rect, palette: &Palette) {
    let popup_area = centered_popup_area(area, POPUP_WIDTH, POPUP_HEIGHT);

    let popup_block = create_popup_block("Confirm Quit", palette);
    let inner_area = popup_block.inner(popup_area);
    frame.render_widget(Clear, popup_area);
    frame.render_widget(popup_block, popup_area);

    let message_area = Rect::new(inner_area.x, inner_area.y + 1, inner_area.width, 1);
    frame.render_widget(
        Paragraph::new("Quit Pocketbook?")
            .style(palette.base_style())
            .alignment(Alignment::Center),
        message_area.intersection(inner_area),
    );

    if inner_area.height < 2 {
        return;
    }

    let key = palette.focused_title_style().add_modifier(Modifier::BOLD);
    let muted = palette.muted_style();
    let help = Line::from(vec![
        Span::styled("y", key),
        Span::styled(":Yes  ", muted),
        Span::styled("n", key),
        Span::styled("/", muted),
        Span::styled("Esc", key),
        Span::styled(":No", muted),
    ]);
    let help_area = Rect::new(inner_area.x, inner_area.bottom() - 1, inner_area.width, 1);
    frame.render_widget(Paragraph::new(help).alignment(Alignment::Center), help_area);
}
