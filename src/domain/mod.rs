//! Domain types for Pocketbook.
//!
//! # Module Organization
//!
//! - [`error`] - Error type for repository operations
//! - [`record`] - Transaction records, their kind, and wire coercion
//! - [`category`] - Category tags and icon lookup

// ============================================================================
// Module Declarations
// ============================================================================

pub mod category;
pub mod error;
pub mod record;

// ============================================================================
// Re-exports
// ============================================================================

pub use category::{CATEGORIES, category_at, icon_for};
pub use error::LedgerError;
pub use record::{Kind, NewRecord, TransactionRecord};
