//! Expense Book Module
//! The backing row collection behind the table widget. egui widgets hold no
//! state between frames, so this Vec is the table model.

use crate::data::entry::{example_expenses, parse_price, EntryError, Expense};

/// Holds the expense rows in on-screen order.
#[derive(Debug, Default)]
pub struct ExpenseBook {
    rows: Vec<Expense>,
}

impl ExpenseBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Book pre-filled with the startup example data.
    pub fn with_examples() -> Self {
        Self {
            rows: example_expenses(),
        }
    }

    /// Parse the price text and append a row. On parse failure nothing is
    /// appended and the caller decides what to do with the error.
    pub fn add(&mut self, description: &str, price_text: &str) -> Result<(), EntryError> {
        let price = parse_price(price_text)?;
        self.rows.push(Expense::new(description, price));
        Ok(())
    }

    /// Remove all rows at once. Rows are never edited or deleted individually.
    pub fn clear(&mut self) {
        self.rows.clear();
    }

    /// Rows top-to-bottom, the order the table and the pie use.
    pub fn rows(&self) -> &[Expense] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
