//! The "New Entry" form panel.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::domain::{Kind, icon_for};
use crate::state::{App, EntryForm, Focus, FormField};
use crate::theme::Palette;
use crate::ui::helpers::create_border_block;

/// Rows taken by one bordered field box.
const FIELD_HEIGHT: u16 = 3;

// ============================================================================
// Panel
// ============================================================================

/// Renders the form with its five fields and a save hint.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let palette = app.theme.palette();
    let focused = app.ui.focus == Focus::Form;

    frame.render_widget(Clear, area);
    let block = create_border_block("New Entry", focused, &palette);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut constraints = vec![Constraint::Length(FIELD_HEIGHT); FormField::ALL.len()];
    constraints.push(Constraint::Min(0));
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (field, row) in FormField::ALL.into_iter().zip(rows.iter()) {
        let active = focused && app.form.active_field == field;
        render_field(frame, *row, &app.form, field, active, &palette);
    }

    if let Some(hint_area) = rows.last() {
        let hint = if focused {
            "Enter to save · Esc to go back"
        } else {
            "Press a to add an entry"
        };
        frame.render_widget(
            Paragraph::new(hint).style(palette.muted_style()),
            *hint_area,
        );
    }
}

// ============================================================================
// Fields
// ============================================================================

fn render_field(
    frame: &mut Frame,
    area: Rect,
    form: &EntryForm,
    field: FormField,
    active: bool,
    palette: &Palette,
) {
    let border_style = if active {
        palette.focused_border_style().add_modifier(Modifier::BOLD)
    } else {
        palette.border_style()
    };
    let title_style = if active {
        palette.focused_title_style()
    } else {
        palette.muted_style()
    };

    let content = match form.text(field) {
        Some(value) => text_line(field, value, active, palette),
        None => picker_line(form, field, active, palette),
    };

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(Span::styled(field.label(), title_style))
            .style(palette.base_style()),
    );

    frame.render_widget(paragraph, area);
}

fn placeholder(field: FormField) -> &'static str {
    match field {
        FormField::Description => "What was it?",
        FormField::Amount => "0",
        FormField::Time => "YYYY-MM-DDTHH:MM",
        FormField::Category | FormField::Kind => "",
    }
}

fn text_line<'a>(field: FormField, value: &'a str, active: bool, palette: &Palette) -> Line<'a> {
    let cursor = if active { "_" } else { "" };
    if value.is_empty() {
        Line::from(vec![
            Span::styled(placeholder(field), palette.muted_style()),
            Span::styled(cursor, palette.focused_title_style()),
        ])
    } else {
        Line::from(vec![
            Span::raw(value),
            Span::styled(cursor, palette.focused_title_style()),
        ])
    }
}

/// `◀ value ▶` with arrows shown only while the picker is active.
fn picker_line(
    form: &EntryForm,
    field: FormField,
    active: bool,
    palette: &Palette,
) -> Line<'static> {
    let (value, style) = match field {
        FormField::Kind => (
            form.kind.label().to_string(),
            Style::new().fg(palette.amount(form.kind == Kind::Income)),
        ),
        _ => {
            let category = form.category();
            (
                format!("{category} {}", icon_for(category)),
                Style::new().fg(palette.text),
            )
        }
    };

    let arrow_style = if active {
        palette.focused_title_style()
    } else {
        palette.muted_style()
    };
    Line::from(vec![
        Span::styled("◀ ", arrow_style),
        Span::styled(value, style),
        Span::styled(" ▶", arrow_style),
    ])
}

// ============================================================================
// Tests
// ============================================================================
