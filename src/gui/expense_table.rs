//! Expense Table Widget
//! Two-column Description/Price table over the backing rows.

use crate::data::Expense;
use egui_extras::{Column, TableBuilder};

const HEADER_HEIGHT: f32 = 24.0;
const ROW_HEIGHT: f32 = 20.0;

/// Draws the expense rows as a striped two-column table, columns sharing
/// the available width.
pub struct ExpenseTable;

impl ExpenseTable {
    pub fn show(ui: &mut egui::Ui, rows: &[Expense]) {
        TableBuilder::new(ui)
            .striped(true)
            .column(Column::remainder())
            .column(Column::remainder())
            .header(HEADER_HEIGHT, |mut header| {
                header.col(|ui| {
                    ui.strong("Description");
                });
                header.col(|ui| {
                    ui.strong("Price");
                });
            })
            .body(|mut body| {
                for expense in rows {
                    body.row(ROW_HEIGHT, |mut row| {
                        row.col(|ui| {
                            ui.label(&expense.description);
                        });
                        row.col(|ui| {
                            // Prices are right-aligned, two decimals
                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::Center),
                                |ui| {
                                    ui.label(expense.price_label());
                                },
                            );
                        });
                    });
                }
            });
    }
}
