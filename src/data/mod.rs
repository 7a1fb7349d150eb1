//! Data module - CSV loading and per-mode preparation

mod loader;
mod prepare;

pub use loader::DataLoader;
pub use prepare::{
    category_totals, first_numeric_series, line_series, map_points, missing_columns,
    CategoryTotal, LineSeries, MapData, MapPoint, PrepError,
};
