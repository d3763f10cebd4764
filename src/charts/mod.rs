//! Charts module - Pie chart data and rendering

mod pie;
mod plotter;

pub use pie::{PieChart, PieSlice};
pub use plotter::ChartPlotter;
