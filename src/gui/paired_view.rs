//! Paired View Widget
//! Central panel showing the bad and good renderings side by side for the
//! selected chart mode. The bad card carries the five critique strings; the
//! good card checks required columns first and degrades to an inline warning.

use crate::charts::{self, ChartPlotter, PieSlice};
use crate::data::{self, PrepError};
use crate::mode::ChartMode;
use egui::{Color32, RichText, ScrollArea};
use polars::prelude::DataFrame;

const BAD_ACCENT: Color32 = Color32::from_rgb(220, 53, 69);
const GOOD_ACCENT: Color32 = Color32::from_rgb(40, 167, 69);
const WARN_COLOR: Color32 = Color32::from_rgb(255, 193, 7);

/// Paired bad/good chart display.
pub struct PairedView;

impl Default for PairedView {
    fn default() -> Self {
        Self
    }
}

impl PairedView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw the paired panels, or the halting notice when no dataset exists.
    pub fn show(&mut self, ui: &mut egui::Ui, df: Option<&DataFrame>, mode: ChartMode) {
        let Some(df) = df else {
            ui.centered_and_justified(|ui| {
                ui.label(RichText::new("Please upload a CSV file to begin.").size(20.0));
            });
            return;
        };

        ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
            ui.heading(mode.heading());
            ui.add_space(8.0);

            ui.columns(2, |columns| {
                Self::draw_card(&mut columns[0], mode.bad_title(), BAD_ACCENT, |ui| {
                    Self::draw_bad_panel(ui, df, mode);
                    ui.add_space(8.0);
                    Self::draw_critiques(ui, mode);
                });
                Self::draw_card(&mut columns[1], mode.good_title(), GOOD_ACCENT, |ui| {
                    Self::draw_good_panel(ui, df, mode);
                });
            });
        });
    }

    /// Framed card with a colored accent border and title.
    fn draw_card(
        ui: &mut egui::Ui,
        title: &str,
        accent: Color32,
        add_contents: impl FnOnce(&mut egui::Ui),
    ) {
        egui::Frame::none()
            .rounding(8.0)
            .stroke(egui::Stroke::new(2.0, accent))
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.label(RichText::new(title).size(16.0).strong().color(accent));
                ui.add_space(8.0);
                add_contents(ui);
            });
    }

    /// The intentionally flawed rendering: minimal chart calls with no
    /// labels, titles, or color coding.
    fn draw_bad_panel(ui: &mut egui::Ui, df: &DataFrame, mode: ChartMode) {
        match mode {
            ChartMode::Bar => match data::first_numeric_series(df) {
                Ok(values) => ChartPlotter::draw_bad_bar(ui, &values),
                Err(e) => Self::error_label(ui, &e),
            },
            ChartMode::Pie => match data::first_numeric_series(df) {
                Ok(values) => {
                    let slices: Vec<PieSlice> = values
                        .iter()
                        .enumerate()
                        .map(|(i, &v)| PieSlice {
                            label: String::new(),
                            value: v,
                            color: charts::murky_color(i),
                        })
                        .collect();
                    charts::draw_pie_chart(ui, &slices, 0.0, false);
                }
                Err(e) => Self::error_label(ui, &e),
            },
            ChartMode::Line => match data::first_numeric_series(df) {
                Ok(values) => ChartPlotter::draw_bad_line(ui, &values),
                Err(e) => Self::error_label(ui, &e),
            },
            ChartMode::Map => match data::map_points(df) {
                Ok(map) => ChartPlotter::draw_bad_map(ui, &map),
                Err(e) => Self::error_label(ui, &e),
            },
            // The bad donut is a plain pie of the category totals
            ChartMode::Donut => match data::category_totals(df) {
                Ok(totals) => {
                    let slices = Self::total_slices(&totals);
                    charts::draw_pie_chart(ui, &slices, 0.0, false);
                }
                Err(e) => Self::error_label(ui, &e),
            },
        }
    }

    /// The corrected rendering, guarded by the column presence check.
    fn draw_good_panel(ui: &mut egui::Ui, df: &DataFrame, mode: ChartMode) {
        if !data::missing_columns(df, mode.required_columns()).is_empty() {
            ui.label(RichText::new(mode.columns_warning()).color(WARN_COLOR));
            return;
        }

        match mode {
            ChartMode::Bar => match data::category_totals(df) {
                Ok(totals) => {
                    Self::chart_title(ui, "Bar Chart of Values by Category");
                    ChartPlotter::draw_good_bar(ui, &totals);
                }
                Err(e) => Self::error_label(ui, &e),
            },
            ChartMode::Pie => match data::category_totals(df) {
                Ok(totals) => {
                    Self::chart_title(ui, "Pie Chart of Values");
                    charts::draw_pie_chart(ui, &Self::total_slices(&totals), 0.0, true);
                }
                Err(e) => Self::error_label(ui, &e),
            },
            ChartMode::Line => match data::line_series(df) {
                Ok(series) => {
                    Self::chart_title(ui, "Line Chart: Values by Year and Category");
                    ChartPlotter::draw_good_line(ui, &series);
                }
                Err(e) => Self::error_label(ui, &e),
            },
            ChartMode::Map => match data::map_points(df) {
                Ok(map) => ChartPlotter::draw_good_map(ui, &map),
                Err(e) => Self::error_label(ui, &e),
            },
            ChartMode::Donut => match data::category_totals(df) {
                Ok(totals) => {
                    Self::chart_title(ui, "Donut Chart of Values by Category");
                    charts::draw_pie_chart(ui, &Self::total_slices(&totals), 0.4, true);
                }
                Err(e) => Self::error_label(ui, &e),
            },
        }
    }

    /// Collapsible list of the five hard-coded mistakes.
    fn draw_critiques(ui: &mut egui::Ui, mode: ChartMode) {
        egui::CollapsingHeader::new("❗ 5 Common Mistakes in Bad Chart")
            .id_salt(("critiques", mode.label()))
            .show(ui, |ui| {
                for (i, (title, reason)) in mode.critiques().iter().enumerate() {
                    ui.horizontal_wrapped(|ui| {
                        ui.label(RichText::new(format!("{}. {}:", i + 1, title)).strong());
                        ui.label(*reason);
                    });
                }
            });
    }

    fn total_slices(totals: &[data::CategoryTotal]) -> Vec<PieSlice> {
        totals
            .iter()
            .enumerate()
            .map(|(i, t)| PieSlice {
                label: t.category.clone(),
                value: t.total,
                color: charts::series_color(i),
            })
            .collect()
    }

    fn chart_title(ui: &mut egui::Ui, title: &str) {
        ui.label(RichText::new(title).size(14.0).strong());
        ui.add_space(4.0);
    }

    fn error_label(ui: &mut egui::Ui, error: &PrepError) {
        ui.label(RichText::new(format!("Error: {}", error)).color(BAD_ACCENT));
    }
}
