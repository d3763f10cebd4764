//! Entry Panel Widget
//! Right side panel with the input fields, action buttons and the chart view.

use crate::charts::{ChartPlotter, PieChart};
use egui::{Color32, RichText};

const CHART_HEIGHT: f32 = 300.0;

/// Input state for the two text fields.
#[derive(Default)]
pub struct EntryPanel {
    pub description: String,
    pub price: String,
}

impl EntryPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add is clickable only while both fields hold text; numeric validity
    /// is checked at click time.
    pub fn is_complete(&self) -> bool {
        !self.description.is_empty() && !self.price.is_empty()
    }

    /// Empty both input fields after a successful Add.
    pub fn clear_inputs(&mut self) {
        self.description.clear();
        self.price.clear();
    }

    /// Draw the panel
    pub fn show(&mut self, ui: &mut egui::Ui, chart: Option<&PieChart>) -> EntryPanelAction {
        let mut action = EntryPanelAction::None;

        ui.add_space(5.0);
        ui.label("Description");
        ui.text_edit_singleline(&mut self.description);
        ui.add_space(5.0);
        ui.label("Price");
        ui.text_edit_singleline(&mut self.price);
        ui.add_space(10.0);

        ui.vertical_centered_justified(|ui| {
            ui.add_enabled_ui(self.is_complete(), |ui| {
                if ui.button("Add").clicked() {
                    action = EntryPanelAction::Add;
                }
            });
            if ui.button("Plot").clicked() {
                action = EntryPanelAction::Plot;
            }
        });

        ui.add_space(10.0);

        // Chart view sits between Plot and Clear
        match chart {
            Some(chart) if !chart.is_empty() => {
                ChartPlotter::draw_pie_chart(ui, chart, CHART_HEIGHT);
            }
            _ => {
                egui::Frame::none()
                    .fill(ui.visuals().widgets.noninteractive.bg_fill)
                    .rounding(5.0)
                    .show(ui, |ui| {
                        ui.set_min_size(egui::vec2(ui.available_width(), CHART_HEIGHT));
                        ui.centered_and_justified(|ui| {
                            ui.label(RichText::new("No chart").size(16.0).color(Color32::GRAY));
                        });
                    });
            }
        }

        ui.add_space(10.0);

        ui.vertical_centered_justified(|ui| {
            if ui.button("Clear").clicked() {
                action = EntryPanelAction::Clear;
            }
            if ui.button("Quit").clicked() {
                action = EntryPanelAction::Quit;
            }
        });

        action
    }
}

/// Actions triggered by the entry panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryPanelAction {
    None,
    Add,
    Plot,
    Clear,
    Quit,
}
