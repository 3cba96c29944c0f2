//! Application constants for Pocketbook.
//!
//! Grouped here so layout math and timing live in one place.

use std::time::Duration;

// ============================================================================
// Service
// ============================================================================

/// Web-script endpoint used when neither the CLI nor the config names one.
pub const DEFAULT_API_URL: &str = "https://script.google.com/macros/s/AKfycbzLAWeTRW4efS5NHRXrYD9Hd5qZGsBeV7U6IMRf-EOxLPP9IO4cVPjpSzyGntwRjwd1eg/exec";

// ============================================================================
// Timing
// ============================================================================

/// Interval between frames of the main loop.
pub const TICK_RATE: Duration = Duration::from_millis(100);

/// How long a toast stays up, in ticks.
pub const TOAST_TICKS: u8 = 25;

/// How many ticks the loading bar lingers at 100% before hiding.
pub const LOADING_FINISH_TICKS: u8 = 5;

// ============================================================================
// Layout
// ============================================================================

/// Height of the header (title, balance, theme toggle).
pub const HEADER_HEIGHT: u16 = 3;

/// Height of the loading bar row above the header.
pub const LOADING_BAR_HEIGHT: u16 = 1;

/// Height of the key hint footer.
pub const FOOTER_HEIGHT: u16 = 1;

/// Width of the entry form column.
pub const FORM_PANEL_WIDTH: u16 = 38;
