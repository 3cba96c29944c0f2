//! Modal popups drawn over the main UI.

pub mod confirm;
pub mod message;

pub use confirm::render as render_confirm_quit;
pub use message::render as render_message_popup;
