//! Control Panel Widget
//! Left side panel with chart settings, editor toggle, export buttons and status.

use crate::charts::ChartKind;
use crate::config::{DEFAULT_CHART_TITLE, DEFAULT_Y_AXIS_LABEL};
use egui::{Color32, ComboBox, RichText};
use std::path::PathBuf;

/// User-editable chart settings
#[derive(Debug, Clone, PartialEq)]
pub struct EditorSettings {
    pub chart_kind: ChartKind,
    pub title: String,
    pub y_label: String,
    pub show_editor: bool,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            chart_kind: ChartKind::default(),
            title: DEFAULT_CHART_TITLE.to_string(),
            y_label: DEFAULT_Y_AXIS_LABEL.to_string(),
            show_editor: false,
        }
    }
}

/// Severity of the status line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl StatusLevel {
    fn color(&self) -> Color32 {
        match self {
            StatusLevel::Info => Color32::GRAY,
            StatusLevel::Success => Color32::from_rgb(40, 167, 69),
            StatusLevel::Warning => Color32::from_rgb(255, 193, 7),
            StatusLevel::Error => Color32::from_rgb(220, 53, 69),
        }
    }
}

/// Left side control panel.
pub struct ControlPanel {
    pub settings: EditorSettings,
    pub status: String,
    pub status_level: StatusLevel,
    /// Most recent successfully written export
    pub last_export: Option<PathBuf>,
    pub exporting: bool,
}

impl Default for ControlPanel {
    fn default() -> Self {
        Self {
            settings: EditorSettings::default(),
            status: "Ready".to_string(),
            status_level: StatusLevel::Info,
            last_export: None,
            exporting: false,
        }
    }
}

impl ControlPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw the control panel
    pub fn show(&mut self, ui: &mut egui::Ui) -> ControlPanelAction {
        let mut action = ControlPanelAction::None;

        // Title
        ui.vertical_centered(|ui| {
            ui.add_space(5.0);
            ui.label(
                RichText::new("📊 Stackchart Studio")
                    .size(22.0)
                    .color(Color32::from_rgb(100, 149, 237)),
            );
        });
        ui.add_space(10.0);
        ui.separator();
        ui.add_space(5.0);

        // ===== Chart Settings Section =====
        ui.label(RichText::new("⚙️ Chart Settings").size(14.0).strong());
        ui.add_space(8.0);

        let label_width = 90.0;
        let field_width = 190.0;

        ui.horizontal(|ui| {
            ui.add_sized([label_width, 20.0], egui::Label::new("Chart Type:"));
            ComboBox::from_id_salt("chart_kind")
                .width(field_width)
                .selected_text(self.settings.chart_kind.display_name())
                .show_ui(ui, |ui| {
                    for kind in ChartKind::ALL {
                        ui.selectable_value(&mut self.settings.chart_kind, kind, kind.display_name());
                    }
                });
        });

        ui.add_space(5.0);

        ui.horizontal(|ui| {
            ui.add_sized([label_width, 20.0], egui::Label::new("Chart Title:"));
            ui.add(egui::TextEdit::singleline(&mut self.settings.title).desired_width(field_width));
        });

        ui.add_space(5.0);

        ui.horizontal(|ui| {
            ui.add_sized([label_width, 20.0], egui::Label::new("Y-Axis Label:"));
            ui.add(egui::TextEdit::singleline(&mut self.settings.y_label).desired_width(field_width));
        });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Action Buttons =====
        ui.vertical_centered(|ui| {
            let editor_text = if self.settings.show_editor {
                "✏ Hide Editor"
            } else {
                "✏ Edit Data"
            };
            let editor_button = egui::Button::new(RichText::new(editor_text).size(14.0))
                .min_size(egui::vec2(200.0, 30.0));
            if ui.add(editor_button).clicked() {
                self.settings.show_editor = !self.settings.show_editor;
            }

            ui.add_space(8.0);

            ui.add_enabled_ui(!self.exporting, |ui| {
                let chart_button = egui::Button::new(RichText::new("📥 Download Chart").size(14.0))
                    .min_size(egui::vec2(200.0, 30.0));
                if ui.add(chart_button).clicked() {
                    action = ControlPanelAction::ExportChart;
                }

                ui.add_space(8.0);

                let legend_button =
                    egui::Button::new(RichText::new("📥 Download Legend").size(14.0))
                        .min_size(egui::vec2(200.0, 30.0));
                if ui.add(legend_button).clicked() {
                    action = ControlPanelAction::ExportLegend;
                }
            });
        });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Status Section =====
        ui.label(RichText::new("📋 Status").size(14.0).strong());
        ui.add_space(5.0);

        if self.exporting {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label(RichText::new(&self.status).size(11.0).color(self.status_level.color()));
            });
        } else {
            ui.label(RichText::new(&self.status).size(11.0).color(self.status_level.color()));
        }

        if let Some(path) = &self.last_export {
            ui.horizontal(|ui| {
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_default();
                ui.label(RichText::new(name).size(11.0).color(Color32::GRAY));
                if ui.small_button("Open").clicked() {
                    action = ControlPanelAction::OpenLastExport;
                }
            });
        }

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(5.0);

        egui::CollapsingHeader::new(RichText::new("❓ Quick Guide").size(14.0).strong())
            .default_open(false)
            .show(ui, |ui| {
                for line in QUICK_GUIDE {
                    ui.label(RichText::new(format!("• {}", line)).size(11.0));
                }
            });

        action
    }

    /// Set the status line
    pub fn set_status(&mut self, level: StatusLevel, status: impl Into<String>) {
        self.status_level = level;
        self.status = status.into();
    }
}

const QUICK_GUIDE: [&str; 7] = [
    "Click \"Edit Data\" to customize organisms, categories, and values",
    "Add/remove organisms and categories as needed",
    "Change organism colors by clicking the color swatch",
    "Switch between Area and Bar chart types",
    "Customize chart title and Y-axis label",
    "Click \"Download Chart\" to save the chart as a PNG image",
    "Click \"Download Legend\" to save the legend as a separate PNG image",
];

/// Actions triggered by control panel
#[derive(Debug, Clone, PartialEq)]
pub enum ControlPanelAction {
    None,
    ExportChart,
    ExportLegend,
    OpenLastExport,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let panel = ControlPanel::new();
        assert_eq!(panel.settings.chart_kind, ChartKind::Bar);
        assert_eq!(panel.settings.title, "Microorganism Distribution");
        assert_eq!(panel.settings.y_label, "Percent of Total Isolates (%)");
        assert!(!panel.settings.show_editor);
        assert_eq!(panel.status_level, StatusLevel::Info);
    }

    #[test]
    fn test_set_status() {
        let mut panel = ControlPanel::new();
        panel.set_status(StatusLevel::Error, "No chart is on screen to export");
        assert_eq!(panel.status_level, StatusLevel::Error);
        assert_eq!(panel.status, "No chart is on screen to export");
    }
}
