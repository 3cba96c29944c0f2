//! Shared test utilities and Mother pattern factories.
//!
//! Use these helpers instead of copy-pasting setup code across tests.
#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use ratatui::{Terminal, backend::TestBackend, text::Span};
use rstest::fixture;

use crate::client::RecordRepository;
use crate::domain::record::parse_timestamp;
use crate::domain::{Kind, LedgerError, NewRecord, TransactionRecord};
use crate::state::{App, AppConfig, AppOptions, ConfigStore};

// ============================================================================
// Mother Pattern Factories
// ============================================================================

pub struct RecordMother;

impl RecordMother {
    #[must_use]
    pub fn income(
        description: &str,
        amount: f64,
        timestamp: Option<DateTime<Utc>>,
    ) -> TransactionRecord {
        TransactionRecord::new(description, amount, Kind::Income, "薪資", timestamp)
    }

    #[must_use]
    pub fn expense(
        description: &str,
        amount: f64,
        timestamp: Option<DateTime<Utc>>,
    ) -> TransactionRecord {
        TransactionRecord::new(description, amount, Kind::Expense, "飲食", timestamp)
    }

    /// Coffee and salary, the canonical two-row ledger (balance 950).
    #[must_use]
    pub fn coffee_and_salary() -> Vec<TransactionRecord> {
        vec![
            TransactionRecord::new(
                "Coffee",
                50.0,
                Kind::Expense,
                "飲料",
                "2024-05-01T08:00:00Z".parse().ok(),
            ),
            TransactionRecord::new(
                "Salary",
                1000.0,
                Kind::Income,
                "薪資",
                "2024-05-02T08:00:00Z".parse().ok(),
            ),
        ]
    }
}

// ============================================================================
// In-memory Repository
// ============================================================================

/// [`RecordRepository`] double that keeps records in memory and counts calls.
///
/// A successful submit appends the record, so the chained fetch sees it.
#[derive(Debug, Default)]
pub struct MockRepository {
    records: Mutex<Vec<TransactionRecord>>,
    submitted: Mutex<Vec<NewRecord>>,
    fail_fetch: AtomicBool,
    fail_submit: AtomicBool,
    fetch_calls: AtomicUsize,
    submit_calls: AtomicUsize,
}

impl MockRepository {
    #[must_use]
    pub fn with_records(records: Vec<TransactionRecord>) -> Self {
        Self {
            records: Mutex::new(records),
            ..Self::default()
        }
    }

    pub fn set_fail_fetch(&self, fail: bool) {
        self.fail_fetch.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_submit(&self, fail: bool) {
        self.fail_submit.store(fail, Ordering::SeqCst);
    }

    #[must_use]
    pub fn fetch_calls(&self) -> usize {
        self.fetch_calls.load(Ordering::SeqCst)
    }

    #[must_use]
    pub fn submit_calls(&self) -> usize {
        self.submit_calls.load(Ordering::SeqCst)
    }

    #[must_use]
    pub fn submitted(&self) -> Vec<NewRecord> {
        self.submitted.lock().unwrap().clone()
    }
}

#[async_trait]
impl RecordRepository for MockRepository {
    async fn fetch_all(&self) -> Result<Vec<TransactionRecord>, LedgerError> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_fetch.load(Ordering::SeqCst) {
            return Err(LedgerError::http(503, "service unavailable"));
        }
        Ok(self.records.lock().unwrap().clone())
    }

    async fn submit(&self, record: &NewRecord) -> Result<(), LedgerError> {
        self.submit_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_submit.load(Ordering::SeqCst) {
            return Err(LedgerError::http(500, "script error"));
        }
        self.submitted.lock().unwrap().push(record.clone());
        self.records.lock().unwrap().push(TransactionRecord::new(
            record.description.clone(),
            record.amount,
            record.kind,
            record.category.clone(),
            parse_timestamp(&record.custom_date),
        ));
        Ok(())
    }
}

// ============================================================================
// App Helpers
// ============================================================================

/// App wired to `repository` with a config store that never touches disk.
#[must_use]
pub fn mock_app(repository: Arc<MockRepository>) -> App {
    mock_app_with_store(repository, ConfigStore::ephemeral())
}

#[must_use]
pub fn mock_app_with_store(repository: Arc<MockRepository>, config_store: ConfigStore) -> App {
    App::new(AppOptions {
        config: AppConfig::default(),
        config_store,
        repository,
        theme_override: None,
        particle_seed: 7,
    })
}

/// Waits for the next message from a spawned task and applies it.
pub async fn settle_next(app: &mut App) {
    let message = app
        .message_rx
        .recv()
        .await
        .expect("message channel should stay open");
    app.handle_message(message);
}

// ============================================================================
// Terminal Fixtures
// ============================================================================

#[fixture]
pub fn test_terminal() -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(100, 40)).expect("terminal creation should succeed")
}

#[fixture]
pub fn test_terminal_80x24() -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(80, 24)).expect("terminal creation should succeed")
}

/// Flattens a rendered buffer into one string, row by row.
///
/// Cells hidden behind a wide glyph are skipped, so `飲食` reads back as
/// written.
#[must_use]
pub fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
    let buffer = terminal.backend().buffer();
    let area = buffer.area;
    let mut text = String::new();
    for y in area.top()..area.bottom() {
        let mut hidden = 0;
        for x in area.left()..area.right() {
            if hidden > 0 {
                hidden -= 1;
                continue;
            }
            let symbol = buffer[(x, y)].symbol();
            text.push_str(symbol);
            hidden = Span::raw(symbol).width().saturating_sub(1);
        }
        text.push('\n');
    }
    text
}
