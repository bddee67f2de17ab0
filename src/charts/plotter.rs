//! Chart Plotter Module
//! Interactive stacked bar / area chart drawn with egui_plot, with a custom hover tooltip.

use crate::charts::palette;
use crate::charts::stacking::{axis_max, axis_min, monotone_curve, stack_bands, StackBand, CURVE_STEPS};
use crate::charts::tooltip::{format_value, tooltip_entries};
use crate::charts::{ChartKind, ChartSpec, ChartSurface};
use crate::data::SeriesDescriptor;
use egui::{RichText, Stroke};
use egui_plot::{Bar, BarChart, Corner, GridMark, Legend, Line, Plot, PlotPoints, PlotUi, Polygon};

const BAR_WIDTH: f64 = 0.6;
const AREA_FILL_OPACITY: f32 = 0.8;

/// What the on-screen chart reports back after a frame.
#[derive(Debug, Clone, Copy)]
pub struct PlotOutcome {
    /// Screen area the chart occupied this frame
    pub rect: egui::Rect,
}

/// Renders a chart spec into the current egui `Ui`.
pub struct PlotSurface<'u> {
    ui: &'u mut egui::Ui,
    height: f32,
}

impl<'u> PlotSurface<'u> {
    pub fn new(ui: &'u mut egui::Ui, height: f32) -> Self {
        Self { ui, height }
    }
}

impl ChartSurface for PlotSurface<'_> {
    type Output = PlotOutcome;

    fn render(&mut self, spec: &ChartSpec<'_>) -> PlotOutcome {
        let labels = spec.category_labels();
        let n = spec.rows.len();
        let bands = stack_bands(spec.rows, spec.series);
        let y_min = axis_min(&bands);
        let y_max = axis_max(&bands);

        let response = Plot::new("stacked_chart")
            .height(self.height)
            .legend(Legend::default().position(Corner::RightTop))
            .show_x(false)
            .show_y(false)
            .allow_scroll(false)
            .y_axis_label(spec.y_label)
            .include_y(y_min)
            .include_y(y_max)
            .include_x(-0.5)
            .include_x(n as f64 - 0.5)
            // One tick per category
            .x_grid_spacer(move |_input| {
                (0..n)
                    .map(|i| GridMark {
                        value: i as f64,
                        step_size: 1.0,
                    })
                    .collect()
            })
            .x_axis_formatter(move |mark, _range| category_label(&labels, mark.value))
            .show(self.ui, |plot_ui| {
                match spec.kind {
                    ChartKind::Bar => draw_bars(plot_ui, spec.series, &bands),
                    ChartKind::Area => draw_areas(plot_ui, spec.series, &bands),
                }
                plot_ui
                    .pointer_coordinate()
                    .and_then(|point| nearest_category(point.x, n))
            });

        let hovered = response.inner;
        let rect = response.response.rect;

        if let Some(row) = hovered.and_then(|idx| spec.rows.get(idx)) {
            let entries = tooltip_entries(row, spec.series);
            response.response.on_hover_ui_at_pointer(|ui| {
                ui.label(RichText::new(&row.label).strong());
                ui.add_space(4.0);
                for entry in &entries {
                    ui.label(
                        RichText::new(entry.text())
                            .size(12.0)
                            .color(palette::color32(&entry.color)),
                    );
                }
                ui.separator();
                ui.label(RichText::new(format!("Total: {}%", format_value(row.total()))).size(12.0));
            });
        }

        PlotOutcome { rect }
    }
}

/// One bar chart per series, each bar lifted onto the stack below it.
fn draw_bars(plot_ui: &mut PlotUi, series: &[SeriesDescriptor], bands: &[StackBand]) {
    for (desc, band) in series.iter().zip(bands) {
        let color = palette::color32(&desc.color);
        let bars: Vec<Bar> = band
            .lower
            .iter()
            .zip(&band.upper)
            .enumerate()
            .map(|(i, (&lo, &hi))| {
                Bar::new(i as f64, hi - lo)
                    .base_offset(lo)
                    .width(BAR_WIDTH)
                    .fill(color)
            })
            .collect();

        plot_ui.bar_chart(BarChart::new(bars).name(&desc.key).color(color));
    }
}

/// Filled bands between consecutive stack levels, both edges curved.
///
/// Each sampled slice is drawn as its own quad since egui only fills convex shapes.
fn draw_areas(plot_ui: &mut PlotUi, series: &[SeriesDescriptor], bands: &[StackBand]) {
    for (desc, band) in series.iter().zip(bands) {
        let color = palette::color32(&desc.color);
        let fill = color.gamma_multiply(AREA_FILL_OPACITY);
        let upper = monotone_curve(&band.upper, CURVE_STEPS);
        let lower = monotone_curve(&band.lower, CURVE_STEPS);

        for (lo, hi) in lower.windows(2).zip(upper.windows(2)) {
            let quad = vec![lo[0], lo[1], hi[1], hi[0]];
            plot_ui.polygon(
                Polygon::new(PlotPoints::new(quad))
                    .fill_color(fill)
                    .stroke(Stroke::new(0.0, fill))
                    .name(&desc.key),
            );
        }

        plot_ui.line(Line::new(PlotPoints::new(upper)).color(color).width(1.5).name(&desc.key));
    }
}

/// Category index closest to a plot x coordinate.
fn nearest_category(x: f64, count: usize) -> Option<usize> {
    let idx = x.round();
    if idx < 0.0 || idx >= count as f64 {
        None
    } else {
        Some(idx as usize)
    }
}

/// Axis text for a tick; blank between categories.
fn category_label(labels: &[String], value: f64) -> String {
    if (value - value.round()).abs() > 1e-6 || value < -0.5 {
        return String::new();
    }
    labels.get(value.round() as usize).cloned().unwrap_or_default()
}
