//! Actions that reach outside the app: network requests and config writes.

use std::sync::Arc;

use super::{App, AppMessage, Operation};
use crate::constants::TOAST_TICKS;

impl App {
    // ========================================================================
    // Fetch
    // ========================================================================

    /// User-requested refresh. Refused with a toast while busy.
    pub(crate) fn refresh(&mut self) {
        if self.is_busy() {
            self.ui.show_toast("[x] Still loading, try again shortly", TOAST_TICKS);
            return;
        }
        self.start_fetch();
    }

    /// Spawns a fetch of every record. No-op if an operation is already out.
    pub(crate) fn start_fetch(&mut self) {
        if self.is_busy() {
            return;
        }
        self.in_flight = Some(Operation::Fetch);
        self.ui.start_loading();

        let repository = Arc::clone(&self.repository);
        let message_tx = self.message_tx.clone();
        tokio::spawn(async move {
            let result = repository.fetch_all().await.map_err(|e| e.to_string());
            let _ = message_tx.send(AppMessage::RecordsLoaded(result));
        });
    }

    // ========================================================================
    // Submit
    // ========================================================================

    /// Validates the form and, if it passes, spawns the submit.
    ///
    /// A validation failure shows a message popup and never reaches the
    /// repository.
    pub(crate) fn submit_entry(&mut self) {
        let record = match self.form.validate() {
            Ok(record) => record,
            Err(err) => {
                tracing::debug!("form rejected: {err}");
                self.ui.show_message(err.to_string());
                return;
            }
        };

        if self.is_busy() {
            self.ui.show_toast("[x] Still loading, try again shortly", TOAST_TICKS);
            return;
        }

        tracing::info!(
            description = %record.description,
            amount = record.amount,
            kind = record.kind.as_str(),
            "submitting entry"
        );
        self.in_flight = Some(Operation::Submit);
        self.ui.start_loading();

        let repository = Arc::clone(&self.repository);
        let message_tx = self.message_tx.clone();
        tokio::spawn(async move {
            let result = repository.submit(&record).await.map_err(|e| e.to_string());
            let _ = message_tx.send(AppMessage::SubmitCompleted(result));
        });
    }

    // ========================================================================
    // Theme
    // ========================================================================

    /// Flips the theme and saves it. A failed save only warns.
    pub(crate) fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        self.config.theme = self.theme;
        tracing::info!(theme = self.theme.as_str(), "theme toggled");

        if let Err(err) = self.config_store.save(&self.config) {
            tracing::warn!("Failed to save theme preference: {err}");
            self.ui
                .show_toast("[x] Could not save theme preference", TOAST_TICKS);
        }
    }
}
