//! State management for the Pocketbook TUI.
//!
//! - [`App`] - the single owned context the event loop mutates
//! - [`EntryForm`] - raw input of the new-entry form and its validation
//! - [`UiState`] - focus, popups, toasts, selection, loading bar
//! - [`AppConfig`] / [`ConfigStore`] - persisted settings
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                         App                          │
//! ├──────────────┬─────────────┬────────────┬────────────┤
//! │ records      │ EntryForm   │ UiState    │ Theme      │
//! │ LedgerView   │  - fields   │  - focus   │ Particles  │
//! │              │  - validate │  - popups  │ AppConfig  │
//! └──────────────┴─────────────┴────────────┴────────────┘
//!          ▲
//!          │ AppMessage (mpsc)
//!   spawned fetch / submit tasks
//! ```
//!
//! Network work runs in spawned tasks that report back over a channel, so
//! `App` is only ever touched from the event loop.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::client::RecordRepository;
use crate::domain::TransactionRecord;
use crate::ledger::LedgerView;
use crate::particles::{PARTICLE_COUNT, ParticleField};
use crate::theme::Theme;

// ============================================================================
// Module Declarations
// ============================================================================

mod app_actions;
mod app_commands;
mod app_lifecycle;
mod app_messages;

pub mod config;
pub mod form;
pub mod paths;
pub mod ui_state;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::{AppConfig, ConfigStore};
pub use form::{EntryForm, FormField};
pub use paths::AppPaths;
pub use ui_state::{Focus, PopupState, UiState};

// ============================================================================
// App Message Types
// ============================================================================

/// Results sent from spawned network tasks back to the event loop.
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// A fetch finished.
    RecordsLoaded(Result<Vec<TransactionRecord>, String>),
    /// A submit finished.
    SubmitCompleted(Result<(), String>),
}

/// The network operation currently out, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Fetch,
    Submit,
}

// ============================================================================
// Startup Options
// ============================================================================

/// Everything [`App::new`] needs from the outside world.
#[derive(Debug)]
pub struct AppOptions {
    pub config: AppConfig,
    pub config_store: ConfigStore,
    pub repository: Arc<dyn RecordRepository>,
    /// Theme for this run only; the saved preference is left alone.
    pub theme_override: Option<Theme>,
    pub particle_seed: u64,
}

// ============================================================================
// Main App State
// ============================================================================

/// The main application state container.
#[derive(Debug)]
pub struct App {
    // ========================================================================
    // Data
    // ========================================================================
    /// Records from the last successful fetch.
    pub records: Vec<TransactionRecord>,

    /// Balance and display rows derived from `records`.
    pub ledger: LedgerView,

    // ========================================================================
    // Sub-states
    // ========================================================================
    pub form: EntryForm,

    pub ui: UiState,

    pub theme: Theme,

    pub particles: ParticleField,

    pub config: AppConfig,

    pub(crate) config_store: ConfigStore,

    // ========================================================================
    // App-level state
    // ========================================================================
    /// Whether the application should exit.
    pub exit: bool,

    /// Animation tick counter.
    pub animation_tick: u64,

    /// At most one fetch or submit is out at a time.
    pub in_flight: Option<Operation>,

    // ========================================================================
    // Async Communication
    // ========================================================================
    // Sends use `let _ = tx.send(...)`: the receiver only goes away on shutdown.
    pub(crate) message_tx: mpsc::UnboundedSender<AppMessage>,

    pub(crate) message_rx: mpsc::UnboundedReceiver<AppMessage>,

    pub(crate) repository: Arc<dyn RecordRepository>,
}

impl App {
    /// Whether a fetch or submit is in flight.
    #[must_use]
    pub const fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Default particle field size before the first resize event.
    const INITIAL_FIELD: (f64, f64) = (80.0, 24.0);

    /// Creates the app. Performs no I/O; call [`App::run`] to start.
    #[must_use]
    pub fn new(options: AppOptions) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        let theme = options.theme_override.unwrap_or(options.config.theme);
        let (width, height) = Self::INITIAL_FIELD;

        Self {
            records: Vec::new(),
            ledger: LedgerView::default(),
            form: EntryForm::default(),
            ui: UiState::new(),
            theme,
            particles: ParticleField::new(PARTICLE_COUNT, width, height, options.particle_seed),
            config: options.config,
            config_store: options.config_store,
            exit: false,
            animation_tick: 0,
            in_flight: None,
            message_tx,
            message_rx,
            repository: options.repository,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
