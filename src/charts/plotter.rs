//! Chart Plotter Module
//! Bar, line, and map renderings using egui_plot. Each chart exists in a
//! deliberately flawed form and a corrected form; the bad variants only ever
//! see the first numeric column.

use crate::charts::palette;
use crate::data::{CategoryTotal, LineSeries, MapData};
use egui_plot::{Bar, BarChart, Legend, Line, Plot, PlotPoints, Points};

const CHART_HEIGHT: f32 = 300.0;

/// Uniform marker color of the bad map, everything the same on purpose.
const BAD_MARKER: egui::Color32 = egui::Color32::from_rgb(140, 140, 160);

/// Draws the paired chart variants.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Bad bar chart: anonymous bars of the first numeric column. No axis
    /// labels, no title, one flat color.
    pub fn draw_bad_bar(ui: &mut egui::Ui, values: &[f64]) {
        let bars: Vec<Bar> = values
            .iter()
            .enumerate()
            .map(|(i, &v)| Bar::new(i as f64, v).width(0.7))
            .collect();

        Plot::new("bad_bar")
            .height(CHART_HEIGHT)
            .allow_scroll(false)
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(BarChart::new(bars).color(egui::Color32::GRAY));
            });
    }

    /// Fixed bar chart: one steelblue bar per category with category names on
    /// the x-axis and labeled axes.
    pub fn draw_good_bar(ui: &mut egui::Ui, totals: &[CategoryTotal]) {
        let bars: Vec<Bar> = totals
            .iter()
            .enumerate()
            .map(|(i, t)| Bar::new(i as f64, t.total).width(0.7).name(&t.category))
            .collect();

        let x_labels: Vec<String> = totals.iter().map(|t| t.category.clone()).collect();

        Plot::new("good_bar")
            .height(CHART_HEIGHT)
            .allow_scroll(false)
            .x_axis_label("Category")
            .y_axis_label("Value")
            .x_axis_formatter(move |mark, _range| {
                let idx = mark.value.round() as usize;
                if (mark.value - idx as f64).abs() < 1e-6 && idx < x_labels.len() {
                    x_labels[idx].clone()
                } else {
                    String::new()
                }
            })
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(BarChart::new(bars).color(palette::STEELBLUE));
            });
    }

    /// Bad line chart: the first numeric column over row index. No time axis,
    /// no grouping, no markers.
    pub fn draw_bad_line(ui: &mut egui::Ui, values: &[f64]) {
        let points: PlotPoints = values
            .iter()
            .enumerate()
            .map(|(i, &v)| [i as f64, v])
            .collect();

        Plot::new("bad_line")
            .height(CHART_HEIGHT)
            .allow_scroll(false)
            .show(ui, |plot_ui| {
                plot_ui.line(Line::new(points).color(egui::Color32::GRAY));
            });
    }

    /// Fixed line chart: one colored, markered line per category over year,
    /// with labeled axes and a legend.
    pub fn draw_good_line(ui: &mut egui::Ui, series: &[LineSeries]) {
        Plot::new("good_line")
            .height(CHART_HEIGHT)
            .allow_scroll(false)
            .x_axis_label("Year")
            .y_axis_label("Value")
            .legend(Legend::default())
            .show(ui, |plot_ui| {
                for (i, run) in series.iter().enumerate() {
                    let color = palette::series_color(i);

                    let line_points: PlotPoints =
                        run.points.iter().copied().collect();
                    plot_ui.line(
                        Line::new(line_points)
                            .color(color)
                            .width(2.0)
                            .name(&run.category),
                    );

                    let marker_points: PlotPoints =
                        run.points.iter().copied().collect();
                    plot_ui.points(
                        Points::new(marker_points)
                            .radius(3.5)
                            .color(color)
                            .name(&run.category),
                    );
                }
            });
    }

    /// Bad map: raw longitude/latitude scatter. Uniform color, no legend,
    /// zoom and pan disabled.
    pub fn draw_bad_map(ui: &mut egui::Ui, map: &MapData) {
        let points: PlotPoints = map
            .points
            .iter()
            .map(|p| [p.longitude, p.latitude])
            .collect();

        Plot::new("bad_map")
            .height(CHART_HEIGHT)
            .data_aspect(1.0)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .show(ui, |plot_ui| {
                plot_ui.points(Points::new(points).radius(2.5).color(BAD_MARKER));
            });
    }

    /// Fixed map: markers colored per category by the stable hash color, a
    /// legend of `Category: total` entries, and a view centered on the mean
    /// coordinate. Zoom and pan stay enabled for exploration.
    pub fn draw_good_map(ui: &mut egui::Ui, map: &MapData) {
        // Group markers per category, first appearance first
        let mut groups: Vec<(String, Vec<[f64; 2]>, f64)> = Vec::new();
        for point in &map.points {
            let name = point
                .category
                .clone()
                .unwrap_or_else(|| "(uncategorized)".to_string());
            let idx = match groups.iter().position(|(g, _, _)| *g == name) {
                Some(idx) => idx,
                None => {
                    groups.push((name, Vec::new(), 0.0));
                    groups.len() - 1
                }
            };
            groups[idx].1.push([point.longitude, point.latitude]);
            groups[idx].2 += point.value.unwrap_or(0.0);
        }

        Plot::new("good_map")
            .height(CHART_HEIGHT)
            .data_aspect(1.0)
            .allow_scroll(false)
            .x_axis_label("Longitude")
            .y_axis_label("Latitude")
            .legend(Legend::default())
            .include_x(map.center_longitude)
            .include_y(map.center_latitude)
            .show(ui, |plot_ui| {
                for (name, coords, total) in &groups {
                    let color = palette::category_color(name);
                    let points: PlotPoints = coords.iter().copied().collect();
                    plot_ui.points(
                        Points::new(points)
                            .radius(4.5)
                            .color(color)
                            .name(format!("{}: {}", name, total)),
                    );
                }
            });
    }
}
