//! Handling of results coming back from spawned network tasks.

use chrono::Local;

use super::{App, AppMessage};
use crate::constants::TOAST_TICKS;
use crate::ledger::LedgerView;

impl App {
    /// Drains every pending message without blocking.
    pub(crate) fn process_messages(&mut self) {
        while let Ok(message) = self.message_rx.try_recv() {
            self.handle_message(message);
        }
    }

    pub(crate) fn handle_message(&mut self, message: AppMessage) {
        self.in_flight = None;
        self.ui.finish_loading();

        match message {
            AppMessage::RecordsLoaded(Ok(records)) => {
                tracing::info!(count = records.len(), "records loaded");
                self.ledger = LedgerView::build(&records, &Local);
                self.records = records;
                self.ui.clamp_selection(self.ledger.len());
            }
            AppMessage::RecordsLoaded(Err(error)) => {
                // previous records stay on screen
                tracing::error!("Failed to load records: {error}");
                self.ui
                    .show_toast(format!("[x] Could not load records: {error}"), TOAST_TICKS);
            }
            AppMessage::SubmitCompleted(Ok(())) => {
                tracing::info!("entry saved");
                self.form.reset_after_submit(Local::now());
                self.ui.show_toast("[+] Saved", TOAST_TICKS);
                self.start_fetch();
            }
            AppMessage::SubmitCompleted(Err(error)) => {
                tracing::error!("Failed to save entry: {error}");
                self.ui.show_message(format!("Could not save entry: {error}"));
            }
        }
    }
}
