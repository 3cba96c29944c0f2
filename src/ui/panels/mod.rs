//! Main content panels: the entry form on the left, the ledger on the right.

pub mod entry_form;
pub mod ledger_list;

pub use entry_form::render as render_entry_form;
pub use ledger_list::render as render_ledger_list;
