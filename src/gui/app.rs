//! Spendview Main Application
//! Main window with the menu bar, expense table and entry panel.

use crate::charts::PieChart;
use crate::data::ExpenseBook;
use crate::gui::{EntryPanel, EntryPanelAction, ExpenseTable};
use egui::{CentralPanel, SidePanel, TopBottomPanel, ViewportCommand};
use log::{info, warn};

const EXIT_SHORTCUT: egui::KeyboardShortcut =
    egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q);

/// Main application window.
pub struct SpendviewApp {
    book: ExpenseBook,
    entry_panel: EntryPanel,
    chart: Option<PieChart>,
}

impl SpendviewApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self {
            book: ExpenseBook::with_examples(),
            entry_panel: EntryPanel::new(),
            chart: None,
        }
    }

    /// Append a row from the input fields, clearing them on success.
    /// A price that fails to parse is discarded with a log line only.
    fn handle_add(&mut self) {
        let description = self.entry_panel.description.clone();
        let price_text = self.entry_panel.price.clone();

        match self.book.add(&description, &price_text) {
            Ok(()) => self.entry_panel.clear_inputs(),
            Err(e) => warn!("discarding row: {e}"),
        }
    }

    /// Rebuild the pie from the current rows, replacing any previous chart.
    fn handle_plot(&mut self) {
        info!("plotting {} rows", self.book.len());
        self.chart = Some(PieChart::from_expenses(self.book.rows()));
    }

    fn handle_clear(&mut self) {
        self.book.clear();
    }

    fn show_menu_bar(&mut self, ctx: &egui::Context, ui: &mut egui::Ui) {
        egui::menu::bar(ui, |ui| {
            ui.menu_button("File", |ui| {
                let exit =
                    egui::Button::new("Exit").shortcut_text(ctx.format_shortcut(&EXIT_SHORTCUT));
                if ui.add(exit).clicked() {
                    ctx.send_viewport_cmd(ViewportCommand::Close);
                }
            });
            ui.menu_button("Help", |_ui| {});
        });
    }
}

impl eframe::App for SpendviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if ctx.input_mut(|i| i.consume_shortcut(&EXIT_SHORTCUT)) {
            ctx.send_viewport_cmd(ViewportCommand::Close);
        }

        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            self.show_menu_bar(ctx, ui);
        });

        // Right panel - inputs, buttons and the chart view
        SidePanel::right("entry_panel")
            .min_width(320.0)
            .max_width(420.0)
            .show(ctx, |ui| {
                let action = self.entry_panel.show(ui, self.chart.as_ref());

                match action {
                    EntryPanelAction::Add => self.handle_add(),
                    EntryPanelAction::Plot => self.handle_plot(),
                    EntryPanelAction::Clear => self.handle_clear(),
                    EntryPanelAction::Quit => ctx.send_viewport_cmd(ViewportCommand::Close),
                    EntryPanelAction::None => {}
                }
            });

        // Central panel - the expense table
        CentralPanel::default().show(ctx, |ui| {
            ExpenseTable::show(ui, self.book.rows());
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> SpendviewApp {
        SpendviewApp {
            book: ExpenseBook::new(),
            entry_panel: EntryPanel::new(),
            chart: None,
        }
    }

    #[test]
    fn add_appends_a_row_and_clears_the_inputs() {
        let mut app = app();
        app.entry_panel.description = "Taxi".to_string();
        app.entry_panel.price = "12.5".to_string();

        app.handle_add();

        assert_eq!(app.book.len(), 1);
        assert_eq!(app.book.rows()[0].description, "Taxi");
        assert_eq!(app.book.rows()[0].price, 12.5);
        assert!(app.entry_panel.description.is_empty());
        assert!(app.entry_panel.price.is_empty());
    }

    #[test]
    fn add_with_non_numeric_price_changes_nothing() {
        let mut app = app();
        app.entry_panel.description = "Taxi".to_string();
        app.entry_panel.price = "twelve".to_string();

        app.handle_add();

        assert_eq!(app.book.len(), 0);
        // Inputs stay untouched on a rejected row
        assert_eq!(app.entry_panel.description, "Taxi");
        assert_eq!(app.entry_panel.price, "twelve");
    }

    #[test]
    fn plot_builds_one_slice_per_row() {
        let mut app = app();
        app.book.add("Rent", "850").unwrap();
        app.book.add("Water", "24.5").unwrap();

        app.handle_plot();

        let chart = app.chart.as_ref().unwrap();
        assert_eq!(chart.slices.len(), 2);
        assert_eq!(chart.slices[0].value, 850.0);
        assert_eq!(chart.slices[1].value, 24.5);
    }

    #[test]
    fn plot_replaces_the_previous_chart() {
        let mut app = app();
        app.book.add("Rent", "850").unwrap();
        app.handle_plot();
        assert_eq!(app.chart.as_ref().unwrap().slices.len(), 1);

        app.handle_clear();
        app.handle_plot();
        assert!(app.chart.as_ref().unwrap().is_empty());
    }

    #[test]
    fn clear_empties_the_book_but_keeps_the_chart() {
        let mut app = app();
        app.book.add("Rent", "850").unwrap();
        app.handle_plot();

        app.handle_clear();

        assert!(app.book.is_empty());
        assert_eq!(app.chart.as_ref().unwrap().slices.len(), 1);
    }
}
