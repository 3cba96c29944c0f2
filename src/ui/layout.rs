//! Layout calculations for the Pocketbook TUI.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::constants::{FOOTER_HEIGHT, FORM_PANEL_WIDTH, HEADER_HEIGHT, LOADING_BAR_HEIGHT};

// ============================================================================
// Layout Structs
// ============================================================================

/// Main application layout areas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    /// Loading bar row above the header.
    pub loading: Rect,
    /// Title, balance and theme icon.
    pub header: Rect,
    /// Entry form panel (left).
    pub form: Rect,
    /// Ledger list panel (right).
    pub list: Rect,
    /// Key hints.
    pub footer: Rect,
}

impl AppLayout {
    /// Splits `area` into the app's regions.
    ///
    /// The body keeps a one-cell margin so the particle background shows
    /// around the panels. On narrow terminals the form takes at most half
    /// the width.
    #[must_use]
    pub fn new(area: Rect) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(LOADING_BAR_HEIGHT),
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Min(3),
                Constraint::Length(FOOTER_HEIGHT),
            ])
            .split(area);

        let body = rows[2].inner(ratatui::layout::Margin::new(1, 0));
        let form_width = FORM_PANEL_WIDTH.min(body.width / 2);
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(form_width),
                Constraint::Length(1),
                Constraint::Min(10),
            ])
            .split(body);

        Self {
            loading: rows[0],
            header: rows[1],
            form: columns[0],
            list: columns[2],
            footer: rows[3],
        }
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Centers a `width` × `height` rect in `parent`, leaving a small margin.
#[must_use]
pub fn centered_popup_area(parent: Rect, width: u16, height: u16) -> Rect {
    let popup_width = width.min(parent.width.saturating_sub(4));
    let popup_height = height.min(parent.height.saturating_sub(4));

    let popup_x = parent.x + (parent.width.saturating_sub(popup_width)) / 2;
    let popup_y = parent.y + (parent.height.saturating_sub(popup_height)) / 2;

    Rect::new(popup_x, popup_y, popup_width, popup_height)
}

// ============================================================================
// Tests
// ============================================================================
