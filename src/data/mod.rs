//! Data module - Expense rows and the backing table model

mod book;
mod entry;

pub use book::ExpenseBook;
pub use entry::{example_expenses, parse_price, EntryError, Expense};
