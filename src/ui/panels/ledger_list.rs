//! The ledger list panel: one two-line item per record, newest first.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Clear, List, ListItem, ListState, Paragraph, Wrap},
};

use crate::domain::Kind;
use crate::ledger::LedgerEntry;
use crate::state::{App, Focus};
use crate::theme::Palette;
use crate::ui::helpers::create_border_block;

const EMPTY_TEXT: &str = "No records yet. Press a to add one.";
const LOADING_TEXT: &str = "Loading records...";

// ============================================================================
// Panel
// ============================================================================

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let palette = app.theme.palette();
    let focused = app.ui.focus == Focus::List;

    frame.render_widget(Clear, area);
    let title = format!("Ledger ({})", app.ledger.len());
    let block = create_border_block(&title, focused, &palette);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if app.ledger.is_empty() {
        let text = if app.is_busy() { LOADING_TEXT } else { EMPTY_TEXT };
        let empty = Paragraph::new(text)
            .style(palette.muted_style())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        let message_area = Rect::new(inner.x, inner.y + inner.height / 2, inner.width, 1)
            .intersection(inner);
        frame.render_widget(empty, message_area);
        return;
    }

    let width = usize::from(inner.width);
    let items: Vec<ListItem> = app
        .ledger
        .entries
        .iter()
        .map(|entry| entry_item(entry, width, &palette))
        .collect();

    let list = List::new(items).highlight_style(if focused {
        palette.selected_style()
    } else {
        Style::new()
    });
    let mut state = ListState::default().with_selected(Some(app.ui.selected_index));

    frame.render_stateful_widget(list, inner, &mut state);
}

// ============================================================================
// Items
// ============================================================================

/// Builds `icon description ........ amount` over `category · date`.
fn entry_item<'a>(entry: &'a LedgerEntry, width: usize, palette: &Palette) -> ListItem<'a> {
    let left = Line::from(vec![
        Span::raw(format!(" {} ", entry.icon)),
        Span::styled(entry.description.as_str(), Style::new().fg(palette.text)),
    ]);
    let amount = Span::styled(
        format!("{} ", entry.amount_text),
        Style::new().fg(palette.amount(entry.kind == Kind::Income)),
    );

    let gap = width
        .saturating_sub(left.width() + amount.width())
        .max(1);
    let mut top_spans = left.spans;
    top_spans.push(Span::raw(" ".repeat(gap)));
    top_spans.push(amount);

    let detail = Line::from(Span::styled(
        format!("    {} · {}", entry.category, entry.date_text),
        palette.muted_style(),
    ));

    ListItem::new(vec![Line::from(top_spans), detail])
}

// ============================================================================
// Tests
// ============================================================================
