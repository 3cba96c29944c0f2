//! Reusable overlay components.

pub mod toast;

pub use toast::render_toast;
