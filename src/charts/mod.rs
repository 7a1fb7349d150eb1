//! Charts module - Chart rendering

mod palette;
mod plotter;
mod wedges;

pub use palette::{murky_color, series_color};
pub use plotter::ChartPlotter;
pub use wedges::{draw_pie_chart, PieSlice};
