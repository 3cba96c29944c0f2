//! Entry form state and validation.
//!
//! The form holds raw text exactly as typed. Nothing is parsed until
//! [`EntryForm::validate`] turns it into a [`NewRecord`] or a [`FormError`].

use chrono::{DateTime, Local, NaiveDateTime, TimeZone};
use thiserror::Error;

use crate::domain::{CATEGORIES, Kind, NewRecord};

/// Format of the time field, matching an HTML `datetime-local` value.
pub const TIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

// ============================================================================
// Errors
// ============================================================================

/// Validation failures, reported for the first failing field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Please enter a description")]
    MissingDescription,

    #[error("Please enter an amount")]
    MissingAmount,

    #[error("Amount must be a number greater than zero, got '{0}'")]
    InvalidAmount(String),

    #[error("Please enter a time")]
    MissingTime,

    #[error("Time must look like YYYY-MM-DDTHH:MM, got '{0}'")]
    InvalidTime(String),
}

// ============================================================================
// Fields
// ============================================================================

/// Fields of the entry form, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Description,
    Amount,
    Time,
    Category,
    Kind,
}

impl FormField {
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Description => Self::Amount,
            Self::Amount => Self::Time,
            Self::Time => Self::Category,
            Self::Category => Self::Kind,
            Self::Kind => Self::Description,
        }
    }

    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::Description => Self::Kind,
            Self::Amount => Self::Description,
            Self::Time => Self::Amount,
            Self::Category => Self::Time,
            Self::Kind => Self::Category,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Description => "Description",
            Self::Amount => "Amount",
            Self::Time => "Time",
            Self::Category => "Category",
            Self::Kind => "Type",
        }
    }

    /// Picker fields cycle through options instead of taking text.
    #[must_use]
    pub const fn is_picker(self) -> bool {
        matches!(self, Self::Category | Self::Kind)
    }

    pub const ALL: [Self; 5] = [
        Self::Description,
        Self::Amount,
        Self::Time,
        Self::Category,
        Self::Kind,
    ];
}

// ============================================================================
// Entry Form
// ============================================================================

/// Input state of the new-entry form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryForm {
    pub description: String,
    pub amount: String,
    pub time: String,
    /// Index into [`CATEGORIES`].
    pub category_index: usize,
    pub kind: Kind,
    pub active_field: FormField,
}

impl EntryForm {
    /// Empty form with the time pre-filled from `now`.
    #[must_use]
    pub fn new<Tz: TimeZone>(now: DateTime<Tz>) -> Self
    where
        Tz::Offset: std::fmt::Display,
    {
        Self {
            description: String::new(),
            amount: String::new(),
            time: default_time(&now),
            category_index: 0,
            kind: Kind::Expense,
            active_field: FormField::Description,
        }
    }

    /// Category name currently selected.
    #[must_use]
    pub fn category(&self) -> &'static str {
        crate::domain::category_at(self.category_index)
    }

    /// Text of a text field, `None` for pickers.
    #[must_use]
    pub fn text(&self, field: FormField) -> Option<&str> {
        match field {
            FormField::Description => Some(&self.description),
            FormField::Amount => Some(&self.amount),
            FormField::Time => Some(&self.time),
            FormField::Category | FormField::Kind => None,
        }
    }

    // ========================================================================
    // Editing
    // ========================================================================

    /// Appends a character to the active text field.
    ///
    /// Amount accepts digits and one `.`; time accepts digits, `-`, `T`
    /// and `:`. Pickers ignore typing.
    pub fn push_char(&mut self, c: char) {
        match self.active_field {
            FormField::Description => self.description.push(c),
            FormField::Amount => {
                if c.is_ascii_digit() || (c == '.' && !self.amount.contains('.')) {
                    self.amount.push(c);
                }
            }
            FormField::Time => {
                if c.is_ascii_digit() || matches!(c, '-' | 'T' | ':') {
                    self.time.push(c);
                }
            }
            FormField::Category | FormField::Kind => {}
        }
    }

    /// Deletes the last character of the active text field.
    pub fn backspace(&mut self) {
        match self.active_field {
            FormField::Description => {
                self.description.pop();
            }
            FormField::Amount => {
                self.amount.pop();
            }
            FormField::Time => {
                self.time.pop();
            }
            FormField::Category | FormField::Kind => {}
        }
    }

    pub fn next_field(&mut self) {
        self.active_field = self.active_field.next();
    }

    pub fn prev_field(&mut self) {
        self.active_field = self.active_field.prev();
    }

    /// Steps the active picker forward or backward.
    pub fn cycle_option(&mut self, forward: bool) {
        match self.active_field {
            FormField::Category => {
                let len = CATEGORIES.len();
                self.category_index = if forward {
                    (self.category_index + 1) % len
                } else {
                    (self.category_index + len - 1) % len
                };
            }
            FormField::Kind => self.kind = self.kind.toggled(),
            _ => {}
        }
    }

    // ========================================================================
    // Validation
    // ========================================================================

    /// Checks description, amount, then time, and builds the outgoing record.
    ///
    /// # Errors
    ///
    /// Returns the [`FormError`] of the first field that fails.
    pub fn validate(&self) -> Result<NewRecord, FormError> {
        let description = self.description.trim();
        if description.is_empty() {
            return Err(FormError::MissingDescription);
        }

        let amount_text = self.amount.trim();
        if amount_text.is_empty() {
            return Err(FormError::MissingAmount);
        }
        let amount = amount_text
            .parse::<f64>()
            .ok()
            .filter(|a| a.is_finite() && *a > 0.0)
            .ok_or_else(|| FormError::InvalidAmount(amount_text.to_string()))?;

        let time = self.time.trim();
        if time.is_empty() {
            return Err(FormError::MissingTime);
        }
        if NaiveDateTime::parse_from_str(time, TIME_FORMAT).is_err() {
            return Err(FormError::InvalidTime(time.to_string()));
        }

        Ok(NewRecord {
            description: description.to_string(),
            amount,
            kind: self.kind,
            custom_date: time.to_string(),
            category: self.category().to_string(),
        })
    }

    /// Clears description and amount and resets the time to `now`.
    ///
    /// Category, kind and the active field stay as they were.
    pub fn reset_after_submit<Tz: TimeZone>(&mut self, now: DateTime<Tz>)
    where
        Tz::Offset: std::fmt::Display,
    {
        self.description.clear();
        self.amount.clear();
        self.time = default_time(&now);
        self.active_field = FormField::Description;
    }
}

impl Default for EntryForm {
    fn default() -> Self {
        Self::new(Local::now())
    }
}

/// `now` formatted for the time field.
#[must_use]
pub fn default_time<Tz: TimeZone>(now: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    now.format(TIME_FORMAT).to_string()
}

// ============================================================================
// Tests
// ============================================================================
