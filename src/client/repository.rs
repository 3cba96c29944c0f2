//! Record repository backed by the spreadsheet web script.
//!
//! The script answers `GET` with a JSON array of rows and accepts a `POST`
//! of one [`NewRecord`] to append a row. [`RecordRepository`] is the seam the
//! app state talks to, so tests can swap in an in-memory double.

use async_trait::async_trait;
use serde_json::Value;

use super::http::{HttpClient, HttpConfig};
use crate::domain::{LedgerError, NewRecord, TransactionRecord};

// ============================================================================
// Trait
// ============================================================================

/// Fetches and appends ledger records.
#[async_trait]
pub trait RecordRepository: Send + Sync + std::fmt::Debug {
    /// Returns every stored record, in whatever order the service keeps them.
    async fn fetch_all(&self) -> Result<Vec<TransactionRecord>, LedgerError>;

    /// Appends one record. The new row only shows up on the next fetch.
    async fn submit(&self, record: &NewRecord) -> Result<(), LedgerError>;
}

// ============================================================================
// Remote Repository
// ============================================================================

/// [`RecordRepository`] talking to the web script over HTTP.
#[derive(Debug, Clone)]
pub struct RemoteRepository {
    http: HttpClient,
    endpoint: String,
}

impl RemoteRepository {
    /// Creates a repository for `endpoint`.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::InvalidInput`] unless the endpoint is an
    /// `http://` or `https://` URL.
    pub fn new(endpoint: impl Into<String>, config: HttpConfig) -> Result<Self, LedgerError> {
        let endpoint = endpoint.into().trim().to_string();
        if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
            return Err(LedgerError::invalid_input(format!(
                "endpoint must be an http(s) URL, got '{endpoint}'"
            )));
        }

        Ok(Self {
            http: HttpClient::with_config(config),
            endpoint,
        })
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl RecordRepository for RemoteRepository {
    async fn fetch_all(&self) -> Result<Vec<TransactionRecord>, LedgerError> {
        tracing::debug!(endpoint = %self.endpoint, "fetching records");

        let response = self.http.get(&self.endpoint).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LedgerError::http(status.as_u16(), body));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| LedgerError::parse(format!("response is not JSON: {e}")))?;
        let records = decode_records(body)?;

        tracing::debug!(count = records.len(), "records fetched");
        Ok(records)
    }

    async fn submit(&self, record: &NewRecord) -> Result<(), LedgerError> {
        let body = serde_json::to_string(record)
            .map_err(|e| LedgerError::parse(format!("cannot encode record: {e}")))?;
        tracing::debug!(endpoint = %self.endpoint, "submitting record");

        let response = self.http.post_text(&self.endpoint, body).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LedgerError::http(status.as_u16(), body));
        }

        Ok(())
    }
}

/// Decodes a fetched body into records, skipping rows that are not objects.
///
/// # Errors
///
/// Returns [`LedgerError::Parse`] if the body is not a JSON array.
pub fn decode_records(body: Value) -> Result<Vec<TransactionRecord>, LedgerError> {
    let Value::Array(rows) = body else {
        return Err(LedgerError::parse("expected a JSON array of records"));
    };

    let records = rows
        .into_iter()
        .enumerate()
        .filter_map(|(index, row)| {
            if !row.is_object() {
                tracing::debug!(index, "skipping non-object row");
                return None;
            }
            serde_json::from_value::<TransactionRecord>(row)
                .inspect_err(|e| tracing::debug!(index, "skipping undecodable row: {e}"))
                .ok()
        })
        .collect();

    Ok(records)
}

// ============================================================================
// Tests
// ============================================================================
