//! GUI module - User interface components

mod app;
mod chart_viewer;
mod control_panel;
mod data_editor;

pub use app::StackChartApp;
pub use chart_viewer::ChartViewer;
pub use control_panel::{ControlPanel, ControlPanelAction, EditorSettings, StatusLevel};
pub use data_editor::{DataEditor, EditorNotice};
