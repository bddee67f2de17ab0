//! Chart Viewer Widget
//! Chart card with title, interactive stacked chart and a side legend.

use crate::charts::{palette, ChartSpec, ChartSurface, PlotSurface};
use crate::config::ViewSettings;
use crate::data::{Dataset, ProjectionCache};
use crate::gui::EditorSettings;
use egui::{Color32, RichText};
use tracing::debug;

const CHART_FILL: Color32 = Color32::from_rgb(249, 250, 251);
const SWATCH_SIZE: f32 = 16.0;

/// Displays the current chart and remembers where it was drawn.
pub struct ChartViewer {
    cache: ProjectionCache,
    /// Pixel size of the chart last frame; `None` until first drawn
    displayed_size: Option<(u32, u32)>,
    view: ViewSettings,
}

impl Default for ChartViewer {
    fn default() -> Self {
        Self {
            cache: ProjectionCache::new(),
            displayed_size: None,
            view: ViewSettings::default(),
        }
    }
}

impl ChartViewer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn displayed_size(&self) -> Option<(u32, u32)> {
        self.displayed_size
    }

    /// Draw the chart card
    pub fn show(&mut self, ui: &mut egui::Ui, dataset: &Dataset, settings: &EditorSettings) {
        if self.cache.refresh(dataset) {
            debug!(
                revision = dataset.revision(),
                rows = self.cache.rows().len(),
                "chart projection rebuilt"
            );
        }

        egui::Frame::none()
            .rounding(8.0)
            .stroke(egui::Stroke::new(1.0, ui.visuals().widgets.noninteractive.bg_stroke.color))
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new(&settings.title).size(20.0).strong());
                });
                ui.add_space(10.0);

                let spec = ChartSpec {
                    kind: settings.chart_kind,
                    rows: self.cache.rows(),
                    series: self.cache.series(),
                    y_label: &settings.y_label,
                };

                let legend_width = self.view.legend_width;
                let chart_height = self.view.chart_height;
                let mut displayed = None;

                ui.horizontal_top(|ui| {
                    let chart_width = (ui.available_width() - legend_width - 12.0).max(200.0);

                    ui.vertical(|ui| {
                        ui.set_width(chart_width);
                        egui::Frame::none()
                            .fill(CHART_FILL)
                            .rounding(6.0)
                            .inner_margin(8.0)
                            .show(ui, |ui| {
                                let outcome = PlotSurface::new(ui, chart_height).render(&spec);
                                let size = outcome.rect.size();
                                displayed = Some((size.x.round() as u32, size.y.round() as u32));
                            });
                    });

                    ui.add_space(12.0);

                    ui.vertical(|ui| {
                        ui.set_width(legend_width);
                        Self::draw_side_legend(ui, &spec);
                    });
                });

                self.displayed_size = displayed;
            });
    }

    /// Swatch and name for every series, in dataset order
    fn draw_side_legend(ui: &mut egui::Ui, spec: &ChartSpec<'_>) {
        ui.label(RichText::new("Legend").size(14.0).strong());
        ui.add_space(6.0);

        for desc in spec.series {
            ui.horizontal(|ui| {
                let (rect, _) =
                    ui.allocate_exact_size(egui::vec2(SWATCH_SIZE, SWATCH_SIZE), egui::Sense::hover());
                ui.painter().rect_filled(rect, 3.0, palette::color32(&desc.color));
                ui.label(RichText::new(&desc.key).size(13.0));
            });
        }
    }
}
