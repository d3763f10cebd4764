//! Expense Entry Module
//! The row type shown in the table, plus price parsing and formatting.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EntryError {
    #[error("price is not a number: {0:?}")]
    InvalidPrice(String),
}

/// One (description, price) row.
#[derive(Debug, Clone, PartialEq)]
pub struct Expense {
    pub description: String,
    pub price: f64,
}

impl Expense {
    pub fn new(description: impl Into<String>, price: f64) -> Self {
        Self {
            description: description.into(),
            price,
        }
    }

    /// Price as shown in the table and legend, always two decimals.
    pub fn price_label(&self) -> String {
        format!("{:.2}", self.price)
    }
}

/// Parse a price field. Parse success is the only validation gate;
/// any float the user manages to type is accepted.
pub fn parse_price(text: &str) -> Result<f64, EntryError> {
    text.trim()
        .parse::<f64>()
        .map_err(|_| EntryError::InvalidPrice(text.to_string()))
}

/// Fixed example data shown at startup.
pub fn example_expenses() -> Vec<Expense> {
    [
        ("Water", 24.5),
        ("Electricity", 55.1),
        ("Rent", 850.0),
        ("Supermarket", 230.4),
        ("Internet", 29.99),
        ("Bars", 21.85),
        ("Public transportation", 60.0),
        ("Coffee", 22.45),
        ("Restaurants", 120.0),
    ]
    .into_iter()
    .map(|(description, price)| Expense::new(description, price))
    .collect()
}
