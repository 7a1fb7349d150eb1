//! Chart Coach Main Application
//! Main window with control panel and the paired bad/good viewer.

use crate::data::DataLoader;
use crate::gui::{ControlPanel, ControlPanelAction, PairedView};
use egui::SidePanel;
use polars::prelude::*;
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver};
use std::thread;

/// CSV loading result from background thread
enum LoadResult {
    Progress(String),
    Complete {
        df: DataFrame,
        row_count: usize,
        column_count: usize,
    },
    Error(String),
}

/// Main application window.
pub struct ChartCoachApp {
    loader: DataLoader,
    control_panel: ControlPanel,
    viewer: PairedView,

    // Async CSV loading
    load_rx: Option<Receiver<LoadResult>>,
    is_loading: bool,
}

impl ChartCoachApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let mut app = Self {
            loader: DataLoader::new(),
            control_panel: ControlPanel::new(),
            viewer: PairedView::new(),
            load_rx: None,
            is_loading: false,
        };

        // No upload yet: fall back to the bundled sample, or halt with a
        // warning when the app ships without one.
        match DataLoader::find_sample_csv() {
            Ok(path) => app.spawn_load(path),
            Err(e) => app
                .control_panel
                .set_status(&format!("No dataset: {}. Upload a CSV to begin.", e)),
        }

        app
    }

    /// Handle CSV file selection
    fn handle_browse_csv(&mut self) {
        if self.is_loading {
            return; // Already loading
        }

        if let Some(path) = rfd::FileDialog::new()
            .add_filter("CSV Files", &["csv"])
            .pick_file()
        {
            self.spawn_load(path);
        }
    }

    /// Load a CSV in a background thread, last load wins
    fn spawn_load(&mut self, path: PathBuf) {
        self.control_panel.csv_path = Some(path.clone());
        self.control_panel.set_status("Loading CSV file...");
        self.is_loading = true;

        let (tx, rx) = channel();
        self.load_rx = Some(rx);

        thread::spawn(move || {
            let _ = tx.send(LoadResult::Progress("Reading CSV file...".to_string()));

            let result = LazyCsvReader::new(&path)
                .with_infer_schema_length(Some(10000))
                .with_ignore_errors(true)
                .finish()
                .and_then(|lazy| lazy.collect());

            match result {
                Ok(df) => {
                    let row_count = df.height();
                    let column_count = df.width();
                    let _ = tx.send(LoadResult::Complete {
                        df,
                        row_count,
                        column_count,
                    });
                }
                Err(e) => {
                    let _ = tx.send(LoadResult::Error(e.to_string()));
                }
            }
        });
    }

    /// Check for CSV loading results
    fn check_load_results(&mut self) {
        let rx = self.load_rx.take();
        if let Some(rx) = rx {
            let mut should_keep_receiver = true;

            while let Ok(result) = rx.try_recv() {
                match result {
                    LoadResult::Progress(status) => {
                        self.control_panel.set_status(&status);
                    }
                    LoadResult::Complete {
                        df,
                        row_count,
                        column_count,
                    } => {
                        self.loader.set_dataframe(df);
                        self.control_panel.set_status(&format!(
                            "Loaded {} rows, {} columns",
                            row_count, column_count
                        ));
                        self.is_loading = false;
                        should_keep_receiver = false;
                    }
                    LoadResult::Error(error) => {
                        self.control_panel.set_status(&format!("Error: {}", error));
                        self.is_loading = false;
                        should_keep_receiver = false;
                    }
                }
            }

            if should_keep_receiver {
                self.load_rx = Some(rx);
            }
        }
    }
}

impl eframe::App for ChartCoachApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Check for background results
        self.check_load_results();

        // Request repaint while loading
        if self.is_loading {
            ctx.request_repaint();
        }

        // Left panel - Control Panel
        SidePanel::left("control_panel")
            .min_width(280.0)
            .max_width(330.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    let action = self.control_panel.show(ui);

                    match action {
                        ControlPanelAction::BrowseCsv => self.handle_browse_csv(),
                        ControlPanelAction::None => {}
                    }
                });
            });

        // Central panel - Paired bad/good viewer
        let mode = self.control_panel.mode;
        egui::CentralPanel::default().show(ctx, |ui| {
            self.viewer.show(ui, self.loader.get_dataframe(), mode);
        });
    }
}
