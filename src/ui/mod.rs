//! UI rendering for Pocketbook.
//!
//! Draw order, back to front: background and particles, loading bar and
//! header, the two panels, footer, popups, then the toast.

pub mod background;
pub mod components;
pub mod footer;
pub mod header;
pub mod helpers;
pub mod layout;
pub mod panels;
pub mod popups;

use ratatui::{
    Frame,
    layout::Rect,
    widgets::{Block, Clear},
};

use crate::state::{App, PopupState};

use layout::AppLayout;

// ============================================================================
// Main Render Entry Point
// ============================================================================

/// Renders one full frame of the app.
pub fn render(app: &App, frame: &mut Frame) {
    let area = frame.area();
    let palette = app.theme.palette();

    frame.render_widget(Clear, area);
    frame.render_widget(Block::default().style(palette.base_style()), area);
    background::render(frame, area, &app.particles, &palette);

    let layout = AppLayout::new(area);
    header::render_loading_bar(frame, layout.loading, app);
    header::render(frame, layout.header, app);
    panels::render_entry_form(frame, layout.form, app);
    panels::render_ledger_list(frame, layout.list, app);
    footer::render(frame, layout.footer, app);

    render_popups(app, frame, area);

    if let Some((message, _)) = &app.ui.toast {
        components::render_toast(frame, area, message, &palette);
    }
}

fn render_popups(app: &App, frame: &mut Frame, area: Rect) {
    let palette = app.theme.palette();
    match &app.ui.popup_state {
        PopupState::None => {}
        PopupState::Message(message) => {
            popups::render_message_popup(frame, area, message, &palette);
        }
        PopupState::ConfirmQuit => popups::render_confirm_quit(frame, area, &palette),
    }
}

// ============================================================================
// Tests
// ============================================================================
