//! UI presentation state: focus, popups, toasts, list selection and the
//! loading bar.
//!
//! Nothing here knows about records or the network; the app layer drives it.

use crate::constants::LOADING_FINISH_TICKS;

// ============================================================================
// Focus
// ============================================================================

/// Which panel receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The ledger list has focus.
    #[default]
    List,
    /// The entry form has focus.
    Form,
}

// ============================================================================
// Popups
// ============================================================================

/// Modal popup currently on screen.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PopupState {
    #[default]
    None,
    /// Blocking message (validation or submit failure).
    Message(String),
    /// Asks before quitting.
    ConfirmQuit,
}

// ============================================================================
// Loading Bar
// ============================================================================

/// Progress bar shown while a request is out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadingBar {
    #[default]
    Idle,
    /// Request in flight; the bar sits at 70%.
    Busy,
    /// Request done; the bar shows 100% for the remaining ticks.
    Finishing(u8),
}

impl LoadingBar {
    /// Fill ratio in `[0, 1]`.
    #[must_use]
    pub const fn ratio(self) -> f64 {
        match self {
            Self::Idle => 0.0,
            Self::Busy => 0.7,
            Self::Finishing(_) => 1.0,
        }
    }

    #[must_use]
    pub const fn is_visible(self) -> bool {
        !matches!(self, Self::Idle)
    }
}

// ============================================================================
// UI State
// ============================================================================

/// UI state container.
///
/// # Example
///
/// ```ignore
/// let mut ui = UiState::default();
/// ui.show_toast("[+] Saved", 20);
/// ui.tick_toast();
/// ```
#[derive(Debug, Default)]
pub struct UiState {
    pub focus: Focus,
    pub popup_state: PopupState,
    /// Toast message and remaining ticks (non-blocking overlay).
    pub toast: Option<(String, u8)>,
    /// Selected row of the ledger list.
    pub selected_index: usize,
    pub loading: LoadingBar,
}

impl UiState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Popups
    // ========================================================================

    pub fn show_message(&mut self, message: impl Into<String>) {
        self.popup_state = PopupState::Message(message.into());
    }

    pub fn dismiss_popup(&mut self) {
        self.popup_state = PopupState::None;
    }

    // ========================================================================
    // Toast Notifications
    // ========================================================================

    /// Shows a toast notification that auto-dismisses after `ticks` ticks.
    pub fn show_toast(&mut self, message: impl Into<String>, ticks: u8) {
        self.toast = Some((message.into(), ticks));
    }

    /// Decrements the toast countdown.
    ///
    /// # Returns
    ///
    /// `true` if the toast was removed (countdown reached zero).
    pub fn tick_toast(&mut self) -> bool {
        if let Some((_, ref mut ticks)) = self.toast {
            if *ticks > 1 {
                *ticks -= 1;
                false
            } else {
                self.toast = None;
                true
            }
        } else {
            false
        }
    }

    // ========================================================================
    // Loading Bar
    // ========================================================================

    pub fn start_loading(&mut self) {
        self.loading = LoadingBar::Busy;
    }

    pub fn finish_loading(&mut self) {
        self.loading = LoadingBar::Finishing(LOADING_FINISH_TICKS);
    }

    /// Counts down the 100% phase and hides the bar when it ends.
    pub fn tick_loading(&mut self) {
        if let LoadingBar::Finishing(ticks) = self.loading {
            self.loading = if ticks > 1 {
                LoadingBar::Finishing(ticks - 1)
            } else {
                LoadingBar::Idle
            };
        }
    }

    // ========================================================================
    // List Selection
    // ========================================================================

    pub fn select_previous(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    pub fn select_next(&mut self, len: usize) {
        if self.selected_index + 1 < len {
            self.selected_index += 1;
        }
    }

    pub fn select_last(&mut self, len: usize) {
        self.selected_index = len.saturating_sub(1);
    }

    /// Keeps the selection inside a list of `len` rows.
    pub fn clamp_selection(&mut self, len: usize) {
        self.selected_index = self.selected_index.min(len.saturating_sub(1));
    }
}

// ============================================================================
// Tests
// ============================================================================
