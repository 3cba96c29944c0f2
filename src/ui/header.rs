//! Header and loading bar rendering.
//!
//! The header shows the app title, the running balance and the theme toggle
//! icon. The row above it carries the loading bar while a request is out.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Gauge, Paragraph},
};

use crate::state::App;

use super::helpers::create_border_block;

/// Render the application header.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let palette = app.theme.palette();
    let header_block = create_border_block("", false, &palette);
    frame.render_widget(Clear, area);
    let inner = header_block.inner(area);
    frame.render_widget(header_block, area);

    if inner.height == 0 {
        return;
    }

    let title = Line::from(vec![
        Span::styled(
            "Pocket",
            Style::default()
                .fg(palette.primary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("book", Style::default().fg(palette.text).add_modifier(Modifier::BOLD)),
    ]);
    frame.render_widget(
        Paragraph::new(title).alignment(Alignment::Left),
        Rect::new(inner.x + 1, inner.y, inner.width.saturating_sub(1), 1),
    );

    let balance_color = palette.amount(app.ledger.balance >= 0.0);
    let balance = Line::from(vec![
        Span::styled("Balance ", palette.muted_style()),
        Span::styled(
            app.ledger.balance_text(),
            Style::default()
                .fg(balance_color)
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(balance).alignment(Alignment::Center), inner);

    let toggle = Line::from(vec![
        Span::styled("t ", palette.muted_style()),
        Span::raw(app.theme.toggle_icon()),
    ]);
    frame.render_widget(
        Paragraph::new(toggle).alignment(Alignment::Right),
        Rect::new(inner.x, inner.y, inner.width.saturating_sub(1), 1),
    );
}

/// Render the loading bar; an idle bar leaves the row to the background.
pub fn render_loading_bar(frame: &mut Frame, area: Rect, app: &App) {
    if !app.ui.loading.is_visible() {
        return;
    }
    let palette = app.theme.palette();
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(palette.primary).bg(palette.background))
        .ratio(app.ui.loading.ratio())
        .label("")
        .use_unicode(true);
    frame.render_widget(Clear, area);
    frame.render_widget(gauge, area);
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{
        MockRepository, RecordMother, buffer_text, mock_app, test_terminal_80x24,
    };
    use crate::theme::Theme;
    use chrono::Local;
    use ratatui::{Terminal, backend::TestBackend};
    use rstest::rstest;
    use std::sync::Arc;

    #[rstest]
    fn test_header_shows_balance_and_icon(mut test_terminal_80x24: Terminal<TestBackend>) {
        let mut app = mock_app(Arc::new(MockRepository::default()));
        app.ledger =
            crate::ledger::LedgerView::build(&RecordMother::coffee_and_salary(), &Local);

        test_terminal_80x24
            .draw(|frame| render(frame, Rect::new(0, 0, 80, 3), &app))
            .unwrap();

        let text = buffer_text(&test_terminal_80x24);
        assert!(text.contains("Pocketbook"));
        assert!(text.contains("Balance $ 950"));
        assert!(text.contains("🌙"));
    }

    #[rstest]
    fn test_dark_header_shows_sun(mut test_terminal_80x24: Terminal<TestBackend>) {
        let mut app = mock_app(Arc::new(MockRepository::default()));
        app.theme = Theme::Dark;

        test_terminal_80x24
            .draw(|frame| render(frame, Rect::new(0, 0, 80, 3), &app))
            .unwrap();

        let text = buffer_text(&test_terminal_80x24);
        assert!(text.contains("☀"));
        assert!(text.contains("$ 0"));
    }

    #[rstest]
    fn test_loading_bar_hidden_when_idle(mut test_terminal_80x24: Terminal<TestBackend>) {
        let mut app = mock_app(Arc::new(MockRepository::default()));

        test_terminal_80x24
            .draw(|frame| render_loading_bar(frame, Rect::new(0, 0, 80, 1), &app))
            .unwrap();
        let idle: String = buffer_text(&test_terminal_80x24).lines().next().unwrap().to_string();
        assert!(idle.trim().is_empty());

        app.ui.start_loading();
        test_terminal_80x24
            .draw(|frame| render_loading_bar(frame, Rect::new(0, 0, 80, 1), &app))
            .unwrap();
        let busy: String = buffer_text(&test_terminal_80x24).lines().next().unwrap().to_string();
        let filled = busy.matches('█').count();
        assert!((55..=57).contains(&filled), "filled {filled} cells");
    }
}
