//! Ledger aggregation and display formatting.
//!
//! [`LedgerView::build`] turns the unordered record list returned by the
//! service into a balance and a newest-first list of display rows. It does
//! no I/O and reads no clock, so the UI layer only has to draw its output.

use std::cmp::Ordering;

use chrono::{DateTime, Datelike, TimeZone, Timelike, Utc};

use crate::domain::{Kind, TransactionRecord, icon_for};

/// Shown in place of a date when a record has no usable timestamp.
pub const UNKNOWN_DATE: &str = "--/-- --:--";

// ============================================================================
// View Types
// ============================================================================

/// One formatted row of the ledger list.
#[derive(Debug, Clone, PartialEq)]
pub struct LedgerEntry {
    pub icon: &'static str,
    pub description: String,
    pub category: String,
    pub kind: Kind,
    /// Signed, grouped amount such as `+$1,000` or `-$50`.
    pub amount_text: String,
    /// Short `M/D HH:MM` date in the display time zone.
    pub date_text: String,
    pub timestamp: Option<DateTime<Utc>>,
}

/// Balance plus ordered display rows derived from a record list.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LedgerView {
    pub balance: f64,
    pub entries: Vec<LedgerEntry>,
}

impl LedgerView {
    /// Builds the view for `records`, formatting dates in `tz`.
    #[must_use]
    pub fn build<Tz: TimeZone>(records: &[TransactionRecord], tz: &Tz) -> Self {
        let entries = ordered(records)
            .into_iter()
            .map(|record| LedgerEntry {
                icon: icon_for(&record.category),
                description: record.description.clone(),
                category: record.category.clone(),
                kind: record.kind,
                amount_text: format_signed_amount(record.kind, record.amount),
                date_text: format_short_date(record.timestamp, tz),
                timestamp: record.timestamp,
            })
            .collect();

        Self {
            balance: balance(records),
            entries,
        }
    }

    /// Balance as shown in the header, e.g. `$ 950`.
    #[must_use]
    pub fn balance_text(&self) -> String {
        format!("$ {}", format_amount(self.balance))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

// ============================================================================
// Aggregation
// ============================================================================

/// Sum of signed contributions. Zero for an empty slice.
///
/// Each step saturates at `±f64::MAX`, so the balance is always finite.
#[must_use]
pub fn balance(records: &[TransactionRecord]) -> f64 {
    records
        .iter()
        .map(TransactionRecord::signed_amount)
        .fold(0.0, |total, amount| (total + amount).clamp(-f64::MAX, f64::MAX))
}

/// Records sorted newest first.
///
/// The sort is stable, so equal timestamps keep arrival order. Records
/// without a timestamp go last.
#[must_use]
pub fn ordered(records: &[TransactionRecord]) -> Vec<&TransactionRecord> {
    let mut sorted: Vec<&TransactionRecord> = records.iter().collect();
    sorted.sort_by(|a, b| newest_first(a.timestamp, b.timestamp));
    sorted
}

fn newest_first(a: Option<DateTime<Utc>>, b: Option<DateTime<Utc>>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

// ============================================================================
// Formatting
// ============================================================================

/// Formats a number with comma grouping and at most three decimals.
///
/// Trailing zeros are dropped, so `1000.0` is `1,000` and `1234.5` is
/// `1,234.5`. Infinities format as `∞`/`-∞` and NaN as `NaN`.
#[must_use]
pub fn format_amount(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value < 0.0 { "-∞" } else { "∞" }.to_string();
    }

    let fixed = format!("{:.3}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');
    let is_zero = frac_part.is_empty() && int_part.bytes().all(|b| b == b'0');

    let sign = if value < 0.0 && !is_zero { "-" } else { "" };
    let grouped = group_thousands(int_part);

    if frac_part.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{frac_part}")
    }
}

fn group_thousands(digits: &str) -> String {
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Formats a magnitude with its kind prefix, e.g. `+$1,000`.
#[must_use]
pub fn format_signed_amount(kind: Kind, amount: f64) -> String {
    format!("{}${}", kind.prefix(), format_amount(amount.abs()))
}

/// Formats a timestamp as `M/D HH:MM` in `tz`.
#[must_use]
pub fn format_short_date<Tz: TimeZone>(timestamp: Option<DateTime<Utc>>, tz: &Tz) -> String {
    match timestamp {
        Some(ts) => {
            let local = ts.with_timezone(tz);
            format!(
                "{}/{} {:02}:{:02}",
                local.month(),
                local.day(),
                local.hour(),
                local.minute()
            )
        }
        None => UNKNOWN_DATE.to_string(),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::category::DEFAULT_ICON;
    use crate::test_utils::RecordMother;
    use chrono::FixedOffset;
    use rstest::rstest;
    use serde_json::json;

    fn at(day: u32, hour: u32) -> Option<DateTime<Utc>> {
        Utc.with_ymd_and_hms(2024, 5, day, hour, 0, 0).single()
    }

    #[test]
    fn coffee_and_salary_example() {
        let records: Vec<TransactionRecord> = serde_json::from_value(json!([
            { "desc": "Coffee", "amount": "50", "type": "expense", "category": "飲料",
              "date": "2024-05-01T08:00:00Z" },
            { "desc": "Salary", "amount": "1000", "type": "income", "category": "薪資",
              "date": "2024-05-02T08:00:00Z" }
        ]))
        .unwrap();

        let view = LedgerView::build(&records, &Utc);

        assert_eq!(view.balance, 950.0);
        assert_eq!(view.balance_text(), "$ 950");
        let rows: Vec<(&str, &str)> = view
            .entries
            .iter()
            .map(|e| (e.description.as_str(), e.amount_text.as_str()))
            .collect();
        assert_eq!(rows, vec![("Salary", "+$1,000"), ("Coffee", "-$50")]);
        assert_eq!(view.entries[0].icon, "💰");
        assert_eq!(view.entries[1].icon, "🥤");
    }

    #[test]
    fn empty_ledger_has_zero_balance() {
        let view = LedgerView::build(&[], &Utc);
        assert_eq!(view.balance, 0.0);
        assert!(view.is_empty());
        assert_eq!(view.balance_text(), "$ 0");
    }

    #[test]
    fn balance_ignores_input_order() {
        let records = vec![
            RecordMother::income("Salary", 32_000.0, at(1, 9)),
            RecordMother::expense("Rent", 12_500.0, at(2, 9)),
            RecordMother::expense("Lunch", 135.5, at(3, 12)),
            RecordMother::income("Refund", 99.25, at(4, 15)),
            RecordMother::expense("Bus", 15.0, None),
        ];
        let expected = 32_000.0 - 12_500.0 - 135.5 + 99.25 - 15.0;

        let mut permuted = records.clone();
        for _ in 0..records.len() {
            permuted.rotate_left(1);
            assert!((balance(&permuted) - expected).abs() < 1e-9);
        }
        permuted.reverse();
        assert!((balance(&permuted) - expected).abs() < 1e-9);
    }

    #[test]
    fn orders_newest_first() {
        let records = vec![
            RecordMother::expense("T2", 1.0, at(2, 0)),
            RecordMother::expense("T1", 1.0, at(1, 0)),
            RecordMother::expense("T3", 1.0, at(3, 0)),
        ];

        let names: Vec<&str> = ordered(&records)
            .iter()
            .map(|r| r.description.as_str())
            .collect();
        assert_eq!(names, vec!["T3", "T2", "T1"]);
    }

    #[test]
    fn undated_records_sort_last_and_ties_keep_arrival_order() {
        let records = vec![
            RecordMother::expense("undated-a", 1.0, None),
            RecordMother::expense("tie-a", 1.0, at(5, 10)),
            RecordMother::expense("older", 1.0, at(1, 10)),
            RecordMother::expense("tie-b", 1.0, at(5, 10)),
            RecordMother::expense("undated-b", 1.0, None),
        ];

        let names: Vec<&str> = ordered(&records)
            .iter()
            .map(|r| r.description.as_str())
            .collect();
        assert_eq!(
            names,
            vec!["tie-a", "tie-b", "older", "undated-a", "undated-b"]
        );
    }

    #[test]
    fn unmapped_category_gets_fallback_icon() {
        let records = vec![TransactionRecord::new(
            "Mystery",
            10.0,
            Kind::Expense,
            "Something new",
            at(1, 0),
        )];
        let view = LedgerView::build(&records, &Utc);
        assert_eq!(view.entries[0].icon, DEFAULT_ICON);
    }

    #[test]
    fn non_numeric_amount_contributes_zero() {
        let records: Vec<TransactionRecord> = serde_json::from_value(json!([
            { "desc": "Broken", "amount": "abc", "type": "income" },
            { "desc": "Missing", "type": "expense" },
            { "desc": "Fine", "amount": 20, "type": "income" }
        ]))
        .unwrap();

        let view = LedgerView::build(&records, &Utc);
        assert_eq!(view.balance, 20.0);
        assert!(!view.balance.is_nan());
        assert_eq!(view.entries[0].amount_text, "+$0");
    }

    #[test]
    fn dates_are_formatted_in_display_zone() {
        let tz = FixedOffset::east_opt(8 * 3600).unwrap();
        let ts = Utc.with_ymd_and_hms(2024, 12, 31, 20, 5, 0).single();
        assert_eq!(format_short_date(ts, &Utc), "12/31 20:05");
        assert_eq!(format_short_date(ts, &tz), "1/1 04:05");
        assert_eq!(format_short_date(None, &tz), UNKNOWN_DATE);
    }

    #[rstest]
    #[case::zero(0.0, "0")]
    #[case::small(950.0, "950")]
    #[case::thousand(1000.0, "1,000")]
    #[case::million(1_234_567.0, "1,234,567")]
    #[case::fraction(1234.5, "1,234.5")]
    #[case::three_decimals(0.1236, "0.124")]
    #[case::float_noise(0.1 + 0.2, "0.3")]
    #[case::negative(-1250.5, "-1,250.5")]
    #[case::negative_rounds_to_zero(-0.0001, "0")]
    #[case::nan(f64::NAN, "NaN")]
    #[case::infinite(f64::NEG_INFINITY, "-∞")]
    #[case::huge(1e20, "100,000,000,000,000,000,000")]
    fn formats_amounts(#[case] value: f64, #[case] expected: &str) {
        assert_eq!(format_amount(value), expected);
    }

    #[test]
    fn negative_balance_text() {
        let records = vec![RecordMother::expense("Rent", 1250.5, at(1, 0))];
        let view = LedgerView::build(&records, &Utc);
        assert_eq!(view.balance_text(), "$ -1,250.5");
    }

    #[test]
    fn huge_amounts_stay_finite() {
        let records = vec![
            RecordMother::income("Windfall", 1e308, at(1, 8)),
            RecordMother::income("Windfall", 1e308, at(2, 8)),
        ];

        let view = LedgerView::build(&records, &Utc);

        assert_eq!(view.balance, f64::MAX);
        assert!(view.balance_text().starts_with("$ 179,769,313,486,231,57"));
        assert!(view.entries[0].amount_text.starts_with("+$100,000,000,000"));
        assert!(!view.entries[0].amount_text.contains("inf"));
    }

    #[test]
    fn saturated_balance_comes_back_down() {
        let records = vec![
            RecordMother::income("Windfall", 1e308, at(1, 8)),
            RecordMother::income("Windfall", 1e308, at(2, 8)),
            RecordMother::expense("Spree", 1e308, at(3, 8)),
        ];

        let total = balance(&records);
        assert!(total.is_finite());
        assert!(total > 0.0);
    }
}
