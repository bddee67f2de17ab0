//! Stackchart Studio Main Application
//! Main window with control panel, data editor and chart viewer.

use crate::charts::ChartSpec;
use crate::config::ExportSettings;
use crate::data::{project, series_descriptors, Dataset};
use crate::export::{capture_chart, capture_legend, ArtifactKind, VectorSnapshot};
use crate::gui::{ChartViewer, ControlPanel, ControlPanelAction, DataEditor, EditorNotice, StatusLevel};
use anyhow::Context;
use egui::SidePanel;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver, Sender};
use std::thread;
use tracing::{error, info, warn};

/// Export result from background thread
enum ExportResult {
    Complete { kind: ArtifactKind, path: PathBuf },
    Error { kind: ArtifactKind, message: String },
}

/// Main application window.
pub struct StackChartApp {
    dataset: Dataset,
    control_panel: ControlPanel,
    data_editor: DataEditor,
    chart_viewer: ChartViewer,
    export_settings: ExportSettings,

    // Background export
    export_tx: Sender<ExportResult>,
    export_rx: Receiver<ExportResult>,
    pending_exports: usize,
}

impl StackChartApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let (export_tx, export_rx) = channel();
        let dataset = Dataset::seed();
        info!(
            series = dataset.series().len(),
            categories = dataset.categories().len(),
            "editor started with seed dataset"
        );

        Self {
            dataset,
            control_panel: ControlPanel::new(),
            data_editor: DataEditor::new(),
            chart_viewer: ChartViewer::new(),
            export_settings: ExportSettings::default(),
            export_tx,
            export_rx,
            pending_exports: 0,
        }
    }

    /// Capture the artwork now, then write the PNG off the UI thread
    fn handle_export(&mut self, kind: ArtifactKind) {
        let series = series_descriptors(&self.dataset);
        let snapshot = match kind {
            ArtifactKind::Chart => {
                let rows = project(&self.dataset);
                let settings = &self.control_panel.settings;
                let spec = ChartSpec {
                    kind: settings.chart_kind,
                    rows: &rows,
                    series: &series,
                    y_label: &settings.y_label,
                };
                capture_chart(&spec, self.chart_viewer.displayed_size(), &self.export_settings)
            }
            ArtifactKind::Legend => capture_legend(&series, &self.export_settings),
        };

        let snapshot = match snapshot {
            Ok(snapshot) => snapshot,
            Err(e) => {
                error!(kind = kind.display_name(), "export capture failed: {}", e);
                self.control_panel
                    .set_status(StatusLevel::Error, format!("Export failed: {}", e));
                return;
            }
        };

        // Ask user for output location
        let output_path = match rfd::FileDialog::new()
            .add_filter("PNG Image", &["png"])
            .set_file_name(kind.file_name(&self.control_panel.settings.title))
            .save_file()
        {
            Some(path) => path,
            None => return, // User cancelled
        };

        info!(kind = kind.display_name(), path = %output_path.display(), "export started");
        self.pending_exports += 1;
        self.control_panel.exporting = true;
        self.control_panel.set_status(
            StatusLevel::Info,
            format!("Exporting {}...", kind.display_name()),
        );

        let tx = self.export_tx.clone();
        thread::spawn(move || {
            let result = match write_snapshot(&snapshot, &output_path) {
                Ok(()) => ExportResult::Complete {
                    kind,
                    path: output_path,
                },
                Err(e) => ExportResult::Error {
                    kind,
                    message: format!("{:#}", e),
                },
            };
            let _ = tx.send(result);
        });
    }

    /// Check for export results
    fn check_export_results(&mut self) {
        while let Ok(result) = self.export_rx.try_recv() {
            self.pending_exports = self.pending_exports.saturating_sub(1);
            match result {
                ExportResult::Complete { kind, path } => {
                    info!(kind = kind.display_name(), path = %path.display(), "export written");
                    self.control_panel.set_status(
                        StatusLevel::Success,
                        format!("Saved {} to {}", kind.display_name(), path.display()),
                    );
                    self.control_panel.last_export = Some(path);
                }
                ExportResult::Error { kind, message } => {
                    error!(kind = kind.display_name(), "export failed: {}", message);
                    self.control_panel
                        .set_status(StatusLevel::Error, format!("Export failed: {}", message));
                }
            }
        }
        self.control_panel.exporting = self.pending_exports > 0;
    }

    fn handle_open_last_export(&mut self) {
        let Some(path) = self.control_panel.last_export.clone() else {
            return;
        };
        if let Err(e) = open::that(&path) {
            warn!(path = %path.display(), "could not open export: {}", e);
            self.control_panel
                .set_status(StatusLevel::Warning, format!("Could not open file: {}", e));
        }
    }

    fn report_editor_notices(&mut self, notices: Vec<EditorNotice>) {
        for notice in notices {
            match notice {
                EditorNotice::Coerced { raw } => {
                    self.control_panel.set_status(
                        StatusLevel::Warning,
                        format!("\"{}\" is not a number, stored as 0", raw),
                    );
                }
                EditorNotice::Rejected(e) => {
                    self.control_panel
                        .set_status(StatusLevel::Error, format!("Edit rejected: {}", e));
                }
            }
        }
    }
}

/// Rasterize and write one export artifact
fn write_snapshot(snapshot: &VectorSnapshot, path: &Path) -> anyhow::Result<()> {
    let png = snapshot
        .to_png()
        .with_context(|| format!("failed to render {}", snapshot.kind.display_name()))?;
    std::fs::write(path, png)
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

impl eframe::App for StackChartApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.check_export_results();

        // Request repaint while exporting
        if self.pending_exports > 0 {
            ctx.request_repaint();
        }

        // Left panel - Control Panel
        SidePanel::left("control_panel")
            .min_width(300.0)
            .max_width(350.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    let action = self.control_panel.show(ui);

                    match action {
                        ControlPanelAction::ExportChart => self.handle_export(ArtifactKind::Chart),
                        ControlPanelAction::ExportLegend => {
                            self.handle_export(ArtifactKind::Legend)
                        }
                        ControlPanelAction::OpenLastExport => self.handle_open_last_export(),
                        ControlPanelAction::None => {}
                    }
                });
            });

        // Central panel - editor and chart
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    if self.control_panel.settings.show_editor {
                        let notices = self.data_editor.show(ui, &mut self.dataset);
                        self.report_editor_notices(notices);
                        ui.add_space(15.0);
                    }
                    self.chart_viewer
                        .show(ui, &self.dataset, &self.control_panel.settings);
                });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_snapshot_creates_png() {
        let series = series_descriptors(&Dataset::seed());
        let snapshot = capture_legend(&series, &ExportSettings::default()).unwrap();
        let path = std::env::temp_dir().join(format!(
            "stackchart_studio_{}_legend.png",
            std::process::id()
        ));

        write_snapshot(&snapshot, &path).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(&bytes[1..4], b"PNG");
    }

    #[test]
    fn test_write_snapshot_reports_bad_path() {
        let series = series_descriptors(&Dataset::seed());
        let snapshot = capture_legend(&series, &ExportSettings::default()).unwrap();
        let path = std::env::temp_dir()
            .join("stackchart_studio_missing_dir")
            .join("nested")
            .join("legend.png");

        let err = write_snapshot(&snapshot, &path).unwrap_err();
        assert!(format!("{:#}", err).contains("failed to write"));
    }
}
