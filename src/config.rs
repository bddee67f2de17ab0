//! Application defaults
//! In-code settings for the editor view and the export pipeline.

pub const DEFAULT_CHART_TITLE: &str = "Microorganism Distribution";
pub const DEFAULT_Y_AXIS_LABEL: &str = "Percent of Total Isolates (%)";

/// Export pipeline settings
#[derive(Debug, Clone, PartialEq)]
pub struct ExportSettings {
    /// Output pixels per logical pixel
    pub scale: f32,
    /// Painted under the chart artwork, which is transparent on its own
    pub chart_background: String,
    pub legend_background: String,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            scale: 2.0,
            chart_background: "#f9fafb".to_string(),
            legend_background: "#ffffff".to_string(),
        }
    }
}

/// On-screen layout settings
#[derive(Debug, Clone, PartialEq)]
pub struct ViewSettings {
    pub chart_height: f32,
    pub legend_width: f32,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            chart_height: 500.0,
            legend_width: 220.0,
        }
    }
}
