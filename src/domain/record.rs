//! Transaction records as exchanged with the remote ledger service.
//!
//! The service is a spreadsheet behind a web script, so the payload is loose:
//! amounts arrive as numbers or strings, dates in several shapes, and extra
//! columns come and go. Decoding goes through [`RawRecord`] and coerces each
//! field instead of rejecting the whole list.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

// ============================================================================
// Kind
// ============================================================================

/// Direction of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    /// Money coming in; adds to the balance.
    Income,
    /// Money going out; subtracts from the balance.
    #[default]
    Expense,
}

impl Kind {
    /// Wire name of the kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::Expense => "Expense",
        }
    }

    /// Multiplier applied to the magnitude when summing the balance.
    #[must_use]
    pub const fn sign(self) -> f64 {
        match self {
            Self::Income => 1.0,
            Self::Expense => -1.0,
        }
    }

    /// Display prefix for amounts of this kind.
    #[must_use]
    pub const fn prefix(self) -> char {
        match self {
            Self::Income => '+',
            Self::Expense => '-',
        }
    }

    /// The other kind.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Income => Self::Expense,
            Self::Expense => Self::Income,
        }
    }

    /// Only the exact string `"income"` is income; anything else, including
    /// `"Income"` or a padded value, counts as an expense.
    fn from_value(value: Option<&Value>) -> Self {
        match value.and_then(Value::as_str) {
            Some("income") => Self::Income,
            _ => Self::Expense,
        }
    }
}

// ============================================================================
// Transaction Record
// ============================================================================

/// One income or expense entry read back from the service.
///
/// `amount` is always a finite, non-negative magnitude; the sign comes from
/// `kind`. A `timestamp` of `None` means the service sent no usable date.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawRecord")]
pub struct TransactionRecord {
    pub description: String,
    pub amount: f64,
    pub kind: Kind,
    pub category: String,
    pub timestamp: Option<DateTime<Utc>>,
}

impl TransactionRecord {
    /// Builds a record, coercing the amount into a valid magnitude.
    #[must_use]
    pub fn new(
        description: impl Into<String>,
        amount: f64,
        kind: Kind,
        category: impl Into<String>,
        timestamp: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            description: description.into(),
            amount: sanitize_amount(amount),
            kind,
            category: category.into(),
            timestamp,
        }
    }

    /// Contribution of this record to the balance.
    #[must_use]
    pub fn signed_amount(&self) -> f64 {
        self.kind.sign() * sanitize_amount(self.amount)
    }
}

/// Field-by-field view of a record as it appears on the wire.
///
/// Every field is optional and untyped so that one odd cell never fails the
/// whole list. Aliases cover the column names used by older sheets.
#[derive(Debug, Default, Deserialize)]
struct RawRecord {
    desc: Option<Value>,
    description: Option<Value>,
    amount: Option<Value>,
    #[serde(rename = "type")]
    kind_type: Option<Value>,
    kind: Option<Value>,
    category: Option<Value>,
    date: Option<Value>,
    #[serde(rename = "customDate")]
    custom_date: Option<Value>,
    timestamp: Option<Value>,
}

impl From<RawRecord> for TransactionRecord {
    fn from(raw: RawRecord) -> Self {
        let description = raw
            .desc
            .as_ref()
            .or(raw.description.as_ref())
            .map(coerce_text)
            .unwrap_or_default();
        let kind = Kind::from_value(raw.kind_type.as_ref().or(raw.kind.as_ref()));
        let timestamp = [&raw.date, &raw.custom_date, &raw.timestamp]
            .into_iter()
            .flatten()
            .find_map(coerce_timestamp);

        Self::new(
            description,
            raw.amount.as_ref().map_or(0.0, coerce_amount),
            kind,
            raw.category.as_ref().map(coerce_text).unwrap_or_default(),
            timestamp,
        )
    }
}

// ============================================================================
// New Record (outgoing)
// ============================================================================

/// Body of the POST that appends one record.
///
/// Serializes to `{desc, amount, type, customDate, category}`, the shape the
/// spreadsheet script expects.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewRecord {
    #[serde(rename = "desc")]
    pub description: String,
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: Kind,
    #[serde(rename = "customDate")]
    pub custom_date: String,
    pub category: String,
}

// ============================================================================
// Coercion Helpers
// ============================================================================

fn sanitize_amount(amount: f64) -> f64 {
    if amount.is_finite() { amount.abs() } else { 0.0 }
}

/// Coerces a JSON value into an amount magnitude.
///
/// Numbers and numeric strings are accepted; everything else is `0`.
#[must_use]
pub fn coerce_amount(value: &Value) -> f64 {
    let parsed = match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse::<f64>().unwrap_or(0.0),
        Value::Bool(true) => 1.0,
        _ => 0.0,
    };
    sanitize_amount(parsed)
}

fn coerce_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn coerce_timestamp(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::String(s) => parse_timestamp(s),
        Value::Number(n) => n.as_i64().and_then(DateTime::from_timestamp_millis),
        _ => None,
    }
}

const NAIVE_DATETIME_FORMATS: [&str; 7] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
];

/// Parses a timestamp string, reading zone-less values as local time.
#[must_use]
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    parse_timestamp_in(raw, &Local)
}

/// Parses a timestamp string, reading zone-less values in `tz`.
///
/// RFC 3339 strings carry their own offset and ignore `tz`.
#[must_use]
pub fn parse_timestamp_in<Tz: TimeZone>(raw: &str, tz: &Tz) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    let naive = NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })?;

    tz.from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
}

// ============================================================================
// Tests
// ============================================================================
