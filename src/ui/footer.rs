//! Footer bar with context-dependent key hints.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    widgets::Paragraph,
};

use crate::commands::InputContext;
use crate::state::App;

// ============================================================================
// Footer Rendering
// ============================================================================

/// Hints for the keys that do something in `context`.
#[must_use]
pub fn hints(context: InputContext) -> &'static str {
    match context {
        InputContext::List => "q:Quit  r:Refresh  a:Add  t:Theme  ↑↓:Scroll  g/G:Top/Bottom",
        InputContext::Form { picker: false } => {
            "Type to edit  Tab/↓:Next  Shift-Tab/↑:Prev  Enter:Save  Esc:Back"
        }
        InputContext::Form { picker: true } => {
            "←/→/Space:Change  Tab/↓:Next  Shift-Tab/↑:Prev  Enter:Save  Esc:Back"
        }
        InputContext::MessagePopup => "Esc/Enter:Close",
        InputContext::ConfirmQuit => "y:Quit  n:Cancel",
    }
}

/// Renders the footer bar.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let palette = app.theme.palette();
    let footer = Paragraph::new(hints(app.get_input_context()))
        .style(palette.muted_style().bg(palette.background))
        .alignment(Alignment::Center);

    frame.render_widget(footer, area);
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::AppCommand;
    use crate::test_utils::{MockRepository, buffer_text, mock_app};
    use ratatui::{Terminal, backend::TestBackend};
    use std::sync::Arc;

    #[test]
    fn test_footer_follows_focus() {
        let mut app = mock_app(Arc::new(MockRepository::default()));
        let mut terminal = Terminal::new(TestBackend::new(90, 1)).unwrap();

        terminal
            .draw(|frame| render(frame, frame.area(), &app))
            .unwrap();
        let content = buffer_text(&terminal);
        for shortcut in ["q:Quit", "r:Refresh", "a:Add", "t:Theme"] {
            assert!(content.contains(shortcut), "missing {shortcut}: {content}");
        }

        app.execute_command(AppCommand::FocusForm);
        terminal
            .draw(|frame| render(frame, frame.area(), &app))
            .unwrap();
        let content = buffer_text(&terminal);
        assert!(content.contains("Enter:Save"));
        assert!(!content.contains("q:Quit"));
    }

    #[test]
    fn test_every_context_has_hints() {
        for context in [
            InputContext::List,
            InputContext::Form { picker: false },
            InputContext::Form { picker: true },
            InputContext::MessagePopup,
            InputContext::ConfirmQuit,
        ] {
            assert!(!hints(context).is_empty());
        }
    }
}
