//! Pie Chart Module
//! Builds the pie series from expense rows: one slice per row, slice value
//! equal to the row's price.

use crate::data::Expense;
use egui::Color32;
use std::f64::consts::TAU;

/// Color palette for slices
pub const PALETTE: [Color32; 10] = [
    Color32::from_rgb(231, 76, 60),  // Red
    Color32::from_rgb(46, 204, 113), // Green
    Color32::from_rgb(52, 152, 219), // Blue
    Color32::from_rgb(155, 89, 182), // Purple
    Color32::from_rgb(243, 156, 18), // Orange
    Color32::from_rgb(26, 188, 156), // Teal
    Color32::from_rgb(233, 30, 99),  // Pink
    Color32::from_rgb(0, 188, 212),  // Cyan
    Color32::from_rgb(255, 87, 34),  // Deep Orange
    Color32::from_rgb(121, 85, 72),  // Brown
];

/// One sector of the pie. Angles are in radians; the pie starts at
/// 12 o'clock and runs clockwise, so `end_angle <= start_angle`.
#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub label: String,
    pub value: f64,
    pub fraction: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    pub color: Color32,
}

/// Pie series built from the rows currently in the table.
#[derive(Debug, Clone, Default)]
pub struct PieChart {
    pub slices: Vec<PieSlice>,
}

impl PieChart {
    /// Build the series from rows in on-screen order. A row whose price is
    /// not positive still gets a slice, with a zero-width sector.
    pub fn from_expenses(rows: &[Expense]) -> Self {
        let total: f64 = rows.iter().map(|e| e.price.max(0.0)).sum();

        let mut cursor = TAU / 4.0; // 12 o'clock
        let slices = rows
            .iter()
            .enumerate()
            .map(|(i, row)| {
                let fraction = if total > 0.0 {
                    row.price.max(0.0) / total
                } else {
                    0.0
                };
                let start_angle = cursor;
                cursor -= fraction * TAU;
                PieSlice {
                    label: row.description.clone(),
                    value: row.price,
                    fraction,
                    start_angle,
                    end_angle: cursor,
                    color: PALETTE[i % PALETTE.len()],
                }
            })
            .collect();

        Self { slices }
    }

    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }
}
