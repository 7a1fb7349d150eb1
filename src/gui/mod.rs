//! GUI module - User interface components

mod app;
mod control_panel;
mod paired_view;

pub use app::ChartCoachApp;
pub use control_panel::{ControlPanel, ControlPanelAction};
pub use paired_view::PairedView;
