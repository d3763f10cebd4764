//! GUI module - User interface components

mod app;
mod entry_panel;
mod expense_table;

pub use app::SpendviewApp;
pub use entry_panel::{EntryPanel, EntryPanelAction};
pub use expense_table::ExpenseTable;
