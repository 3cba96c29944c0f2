//! HTTP access to the remote ledger service.
//!
//! - [`http`] - thin `reqwest` wrapper with shared timeouts and headers
//! - [`repository`] - the [`RecordRepository`] seam and its HTTP implementation

pub mod http;
pub mod repository;

// ============================================================================
// Re-exports
// ============================================================================

pub use http::HttpConfig;
pub use repository::{RecordRepository, RemoteRepository};
