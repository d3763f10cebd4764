//! Chart Plotter Module
//! Draws the pie chart using egui_plot.

use crate::charts::pie::{PieChart, PieSlice};
use egui_plot::{Corner, Legend, Plot, PlotPoints, Polygon};

/// Points sampled along a full-circle arc; sectors use a proportional share.
const ARC_RESOLUTION: usize = 128;

/// Renders pie charts into an egui Ui.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Draw the pie with one filled sector per slice and a legend on the
    /// left naming each slice.
    pub fn draw_pie_chart(ui: &mut egui::Ui, chart: &PieChart, height: f32) {
        Plot::new("expense_pie")
            .height(height)
            .data_aspect(1.0)
            .show_axes(false)
            .show_grid(false)
            .show_x(false)
            .show_y(false)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .allow_boxed_zoom(false)
            .legend(Legend::default().position(Corner::LeftTop))
            .show(ui, |plot_ui| {
                for slice in &chart.slices {
                    let points = Self::sector_points(slice);
                    if points.len() < 3 {
                        continue;
                    }

                    plot_ui.polygon(
                        Polygon::new(PlotPoints::from(points))
                            .fill_color(slice.color.gamma_multiply(0.85))
                            .stroke(egui::Stroke::new(1.0, slice.color))
                            .name(format!("{} ({:.2})", slice.label, slice.value)),
                    );
                }
            });
    }

    /// Sector outline on the unit circle: center, then the arc from the
    /// slice's start angle to its end angle.
    fn sector_points(slice: &PieSlice) -> Vec<[f64; 2]> {
        if slice.fraction <= 0.0 {
            return Vec::new();
        }

        let steps = ((slice.fraction * ARC_RESOLUTION as f64).ceil() as usize).max(2);
        let sweep = slice.end_angle - slice.start_angle;

        let mut points = Vec::with_capacity(steps + 2);
        points.push([0.0, 0.0]);
        for i in 0..=steps {
            let angle = slice.start_angle + sweep * (i as f64 / steps as f64);
            points.push([angle.cos(), angle.sin()]);
        }
        points
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Expense;

    #[test]
    fn sector_outline_starts_at_center_and_follows_the_arc() {
        let chart = PieChart::from_expenses(&[
            Expense::new("Half", 1.0),
            Expense::new("Other half", 1.0),
        ]);
        let points = ChartPlotter::sector_points(&chart.slices[0]);

        assert_eq!(points[0], [0.0, 0.0]);
        // Starts at 12 o'clock
        assert!((points[1][0]).abs() < 1e-9);
        assert!((points[1][1] - 1.0).abs() < 1e-9);
        // Ends at 6 o'clock after a clockwise half turn
        let last = points.last().unwrap();
        assert!((last[0]).abs() < 1e-9);
        assert!((last[1] + 1.0).abs() < 1e-9);
        // Every arc point sits on the unit circle
        for p in &points[1..] {
            assert!(((p[0].powi(2) + p[1].powi(2)).sqrt() - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn zero_width_sector_has_no_outline() {
        let chart = PieChart::from_expenses(&[
            Expense::new("Refund", -5.0),
            Expense::new("Rent", 850.0),
        ]);
        assert!(ChartPlotter::sector_points(&chart.slices[0]).is_empty());
    }
}
