//! Data Preparation Module
//! Pure per-mode transforms from the loaded DataFrame to plottable shapes.
//! Each good panel checks its required columns before calling in here; a
//! failure only takes down the panel it belongs to.

use polars::prelude::*;
use thiserror::Error;

pub const CATEGORY_COL: &str = "Category";
pub const VALUE_COL: &str = "Value";
pub const YEAR_COL: &str = "Year";
pub const LATITUDE_COL: &str = "Latitude";
pub const LONGITUDE_COL: &str = "Longitude";

#[derive(Error, Debug)]
pub enum PrepError {
    #[error("Polars error: {0}")]
    PolarsError(#[from] PolarsError),
    #[error("No numeric column in dataset")]
    NoNumericColumn,
    #[error("Required column '{0}' not found")]
    MissingColumn(&'static str),
    #[error("No plottable rows")]
    NoRows,
}

/// Summed value per category, in first-appearance order.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub category: String,
    pub total: f64,
}

/// One line per category, points already sorted by year.
#[derive(Debug, Clone, PartialEq)]
pub struct LineSeries {
    pub category: String,
    /// `[year, value]` pairs.
    pub points: Vec<[f64; 2]>,
}

/// One geographic marker.
#[derive(Debug, Clone, PartialEq)]
pub struct MapPoint {
    pub latitude: f64,
    pub longitude: f64,
    pub category: Option<String>,
    pub value: Option<f64>,
}

/// Markers plus the view center (mean latitude/longitude).
#[derive(Debug, Clone, PartialEq)]
pub struct MapData {
    pub points: Vec<MapPoint>,
    pub center_latitude: f64,
    pub center_longitude: f64,
}

fn is_numeric_dtype(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Float32
            | DataType::Float64
            | DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
    )
}

fn cell_to_string(value: &AnyValue) -> String {
    value.to_string().trim_matches('"').to_string()
}

/// Which of `required` are absent from the DataFrame.
pub fn missing_columns(df: &DataFrame, required: &[&'static str]) -> Vec<&'static str> {
    let names: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|s| s.to_string())
        .collect();
    required
        .iter()
        .copied()
        .filter(|r| !names.iter().any(|n| n == r))
        .collect()
}

fn require(df: &DataFrame, required: &[&'static str]) -> Result<(), PrepError> {
    match missing_columns(df, required).first().copied() {
        Some(name) => Err(PrepError::MissingColumn(name)),
        None => Ok(()),
    }
}

/// First numeric column as plain values, nulls dropped.
/// This is all any of the bad panels gets to see.
pub fn first_numeric_series(df: &DataFrame) -> Result<Vec<f64>, PrepError> {
    let column = df
        .get_columns()
        .iter()
        .find(|c| is_numeric_dtype(c.dtype()))
        .ok_or(PrepError::NoNumericColumn)?;

    let as_f64 = column.cast(&DataType::Float64)?;
    let ca = as_f64.f64()?;
    Ok(ca.iter().flatten().filter(|v| !v.is_nan()).collect())
}

/// Sum `Value` per `Category`, preserving first-appearance order.
pub fn category_totals(df: &DataFrame) -> Result<Vec<CategoryTotal>, PrepError> {
    require(df, &[CATEGORY_COL, VALUE_COL])?;

    let cat_series = df.column(CATEGORY_COL)?;
    let value_f64 = df.column(VALUE_COL)?.cast(&DataType::Float64)?;
    let value_ca = value_f64.f64()?;

    let mut totals: Vec<CategoryTotal> = Vec::new();
    for i in 0..df.height() {
        if let (Ok(c), Some(v)) = (cat_series.get(i), value_ca.get(i)) {
            if c.is_null() || v.is_nan() {
                continue;
            }
            let category = cell_to_string(&c);
            match totals.iter().position(|t| t.category == category) {
                Some(idx) => totals[idx].total += v,
                None => totals.push(CategoryTotal {
                    category,
                    total: v,
                }),
            }
        }
    }

    if totals.is_empty() {
        return Err(PrepError::NoRows);
    }
    Ok(totals)
}

/// Build per-category line runs: coerce `Year` to numeric (unparseable rows
/// are dropped), then sort by (Category, Year).
pub fn line_series(df: &DataFrame) -> Result<Vec<LineSeries>, PrepError> {
    require(df, &[YEAR_COL, CATEGORY_COL, VALUE_COL])?;

    let sorted = df
        .clone()
        .lazy()
        .with_column(col(YEAR_COL).cast(DataType::Float64))
        .with_column(col(VALUE_COL).cast(DataType::Float64))
        .drop_nulls(Some(vec![
            col(YEAR_COL),
            col(CATEGORY_COL),
            col(VALUE_COL),
        ]))
        .sort([CATEGORY_COL, YEAR_COL], Default::default())
        .collect()?;

    let cat_series = sorted.column(CATEGORY_COL)?;
    let year_ca = sorted.column(YEAR_COL)?.f64()?.clone();
    let value_ca = sorted.column(VALUE_COL)?.f64()?.clone();

    let mut series: Vec<LineSeries> = Vec::new();
    for i in 0..sorted.height() {
        let (Ok(c), Some(year), Some(value)) =
            (cat_series.get(i), year_ca.get(i), value_ca.get(i))
        else {
            continue;
        };
        let category = cell_to_string(&c);
        // Rows are sorted, so each category arrives as one contiguous run
        let new_run = series.last().map(|s| s.category != category).unwrap_or(true);
        if new_run {
            series.push(LineSeries {
                category,
                points: Vec::new(),
            });
        }
        if let Some(run) = series.last_mut() {
            run.points.push([year, value]);
        }
    }

    if series.is_empty() {
        return Err(PrepError::NoRows);
    }
    Ok(series)
}

/// Extract geographic markers and the mean-of-coordinates view center.
pub fn map_points(df: &DataFrame) -> Result<MapData, PrepError> {
    require(df, &[LATITUDE_COL, LONGITUDE_COL])?;

    let lat_f64 = df.column(LATITUDE_COL)?.cast(&DataType::Float64)?;
    let lat_ca = lat_f64.f64()?;
    let lon_f64 = df.column(LONGITUDE_COL)?.cast(&DataType::Float64)?;
    let lon_ca = lon_f64.f64()?;

    let cat_series = df.column(CATEGORY_COL).ok();
    let value_ca = match df.column(VALUE_COL) {
        Ok(c) => Some(c.cast(&DataType::Float64)?.f64()?.clone()),
        Err(_) => None,
    };

    let mut points: Vec<MapPoint> = Vec::new();
    for i in 0..df.height() {
        let (Some(latitude), Some(longitude)) = (lat_ca.get(i), lon_ca.get(i)) else {
            continue;
        };
        if !latitude.is_finite() || !longitude.is_finite() {
            continue;
        }

        let category = cat_series
            .and_then(|s| s.get(i).ok())
            .filter(|v| !v.is_null())
            .map(|v| cell_to_string(&v));
        let value = value_ca
            .as_ref()
            .and_then(|ca| ca.get(i))
            .filter(|v| !v.is_nan());

        points.push(MapPoint {
            latitude,
            longitude,
            category,
            value,
        });
    }

    if points.is_empty() {
        return Err(PrepError::NoRows);
    }

    let n = points.len() as f64;
    let center_latitude = points.iter().map(|p| p.latitude).sum::<f64>() / n;
    let center_longitude = points.iter().map(|p| p.longitude).sum::<f64>() / n;

    Ok(MapData {
        points,
        center_latitude,
        center_longitude,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::df;

    #[test]
    fn missing_columns_are_reported() {
        let df = df!("Name" => &["a", "b"], "Count" => &[1i64, 2]).unwrap();
        assert_eq!(
            missing_columns(&df, &[CATEGORY_COL, VALUE_COL]),
            vec![CATEGORY_COL, VALUE_COL]
        );
        match category_totals(&df) {
            Err(PrepError::MissingColumn(col)) => assert_eq!(col, CATEGORY_COL),
            other => panic!("expected missing-column error, got {other:?}"),
        }
    }

    #[test]
    fn first_numeric_column_skips_strings() {
        let df = df!(
            "Label" => &["a", "b", "c"],
            "Count" => &[3i64, 1, 2],
            "Other" => &[9.0f64, 9.0, 9.0],
        )
        .unwrap();
        assert_eq!(first_numeric_series(&df).unwrap(), vec![3.0, 1.0, 2.0]);
    }

    #[test]
    fn totals_sum_per_category_in_first_appearance_order() {
        let df = df!(
            "Category" => &["b", "a", "b"],
            "Value" => &[1.0f64, 2.0, 3.0],
        )
        .unwrap();
        let totals = category_totals(&df).unwrap();
        assert_eq!(totals.len(), 2);
        assert_eq!(totals[0].category, "b");
        assert_eq!(totals[0].total, 4.0);
        assert_eq!(totals[1].category, "a");
        assert_eq!(totals[1].total, 2.0);
    }

    #[test]
    fn unparseable_years_are_dropped_and_rows_sorted() {
        let df = df!(
            "Year" => &["2020", "oops", "2019"],
            "Category" => &["B", "A", "A"],
            "Value" => &[1.0f64, 2.0, 3.0],
        )
        .unwrap();
        let series = line_series(&df).unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].category, "A");
        assert_eq!(series[0].points, vec![[2019.0, 3.0]]);
        assert_eq!(series[1].category, "B");
        assert_eq!(series[1].points, vec![[2020.0, 1.0]]);
    }

    #[test]
    fn line_points_sorted_by_year_within_category() {
        let df = df!(
            "Year" => &[2021i64, 2019, 2020],
            "Category" => &["A", "A", "A"],
            "Value" => &[3.0f64, 1.0, 2.0],
        )
        .unwrap();
        let series = line_series(&df).unwrap();
        assert_eq!(series.len(), 1);
        assert_eq!(
            series[0].points,
            vec![[2019.0, 1.0], [2020.0, 2.0], [2021.0, 3.0]]
        );
    }

    #[test]
    fn map_center_is_mean_of_coordinates() {
        let df = df!(
            "Latitude" => &[0.0f64, 10.0],
            "Longitude" => &[10.0f64, 20.0],
        )
        .unwrap();
        let map = map_points(&df).unwrap();
        assert_eq!(map.points.len(), 2);
        assert_eq!(map.center_latitude, 5.0);
        assert_eq!(map.center_longitude, 15.0);
        assert!(map.points[0].category.is_none());
    }

    #[test]
    fn map_points_carry_annotations_when_present() {
        let df = df!(
            "Latitude" => &[1.0f64],
            "Longitude" => &[2.0f64],
            "Category" => &["Penang"],
            "Value" => &[88.0f64],
        )
        .unwrap();
        let map = map_points(&df).unwrap();
        assert_eq!(map.points[0].category.as_deref(), Some("Penang"));
        assert_eq!(map.points[0].value, Some(88.0));
    }
}
