//! Static Chart Renderer
//! Draws the same stacked chart as the on-screen view into SVG markup with plotters.
//!
//! Layout mirrors the interactive chart:
//! 1. Value axis on the left with the Y-axis label
//! 2. One tick per category along the bottom
//! 3. Stacked bars (or curved area bands) in series order, first series at the bottom
//! 4. Series legend in the upper right corner
//!
//! The background is left transparent; the exporter paints it.

use crate::charts::palette;
use crate::charts::stacking::{axis_max, axis_min, monotone_curve, stack_bands, StackBand, CURVE_STEPS};
use crate::charts::{ChartKind, ChartSpec, ChartSurface};
use crate::export::ExportError;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::ops::Range;

const BAR_MARGIN: u32 = 12;
const AREA_FILL_OPACITY: f64 = 0.8;
const GRID_COLOR: RGBColor = RGBColor(204, 204, 204);
const AXIS_TEXT: RGBColor = RGBColor(102, 102, 102);

/// Renders chart specs to SVG markup at a fixed logical size.
pub struct SvgChartRenderer {
    width: u32,
    height: u32,
}

impl SvgChartRenderer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width.max(1),
            height: height.max(1),
        }
    }

    fn draw(&self, root: &DrawingArea<SVGBackend<'_>, Shift>, spec: &ChartSpec<'_>) -> Result<(), ExportError> {
        let bands = stack_bands(spec.rows, spec.series);
        let y_range = axis_min(&bands)..axis_max(&bands);
        let labels = spec.category_labels();

        match spec.kind {
            ChartKind::Bar => draw_bar_chart(root, spec, &labels, &bands, y_range),
            ChartKind::Area => draw_area_chart(root, spec, &labels, &bands, y_range),
        }?;

        root.present().map_err(render_error)
    }
}

impl ChartSurface for SvgChartRenderer {
    type Output = Result<String, ExportError>;

    fn render(&mut self, spec: &ChartSpec<'_>) -> Result<String, ExportError> {
        let mut svg = String::new();
        {
            let root = SVGBackend::with_string(&mut svg, (self.width, self.height)).into_drawing_area();
            self.draw(&root, spec)?;
        }
        Ok(svg)
    }
}

fn render_error<E: std::fmt::Display>(e: E) -> ExportError {
    ExportError::Render(e.to_string())
}

fn draw_bar_chart(
    root: &DrawingArea<SVGBackend<'_>, Shift>,
    spec: &ChartSpec<'_>,
    labels: &[String],
    bands: &[StackBand],
    y_range: Range<f64>,
) -> Result<(), ExportError> {
    let n = labels.len().max(1);

    let mut chart = ChartBuilder::on(root)
        .margin(16)
        .x_label_area_size(36)
        .y_label_area_size(64)
        .build_cartesian_2d((0..n).into_segmented(), y_range)
        .map_err(render_error)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .light_line_style(TRANSPARENT)
        .bold_line_style(GRID_COLOR.stroke_width(1))
        .axis_style(AXIS_TEXT)
        .x_labels(n)
        .x_label_formatter(&|v| match v {
            SegmentValue::CenterOf(i) => labels.get(*i).cloned().unwrap_or_default(),
            _ => String::new(),
        })
        .y_desc(spec.y_label)
        .label_style(("sans-serif", 14).into_font().color(&AXIS_TEXT))
        .draw()
        .map_err(render_error)?;

    for (desc, band) in spec.series.iter().zip(bands) {
        let color = palette::plotters_rgb(&desc.color);
        chart
            .draw_series(band.lower.iter().zip(&band.upper).enumerate().map(|(i, (&lo, &hi))| {
                let mut bar = Rectangle::new(
                    [(SegmentValue::Exact(i), lo), (SegmentValue::Exact(i + 1), hi)],
                    color.filled(),
                );
                bar.set_margin(0, 0, BAR_MARGIN, BAR_MARGIN);
                bar
            }))
            .map_err(render_error)?
            .label(desc.key.as_str())
            .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], color.filled()));
    }

    if !spec.series.is_empty() {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(WHITE.mix(0.85))
            .border_style(GRID_COLOR)
            .label_font(("sans-serif", 13).into_font().color(&BLACK))
            .draw()
            .map_err(render_error)?;
    }

    Ok(())
}

fn draw_area_chart(
    root: &DrawingArea<SVGBackend<'_>, Shift>,
    spec: &ChartSpec<'_>,
    labels: &[String],
    bands: &[StackBand],
    y_range: Range<f64>,
) -> Result<(), ExportError> {
    let n = labels.len();
    let x_range = if n > 1 {
        0.0..(n - 1) as f64
    } else {
        -0.5..0.5
    };

    let mut chart = ChartBuilder::on(root)
        .margin(16)
        .x_label_area_size(36)
        .y_label_area_size(64)
        .build_cartesian_2d(x_range, y_range)
        .map_err(render_error)?;

    chart
        .configure_mesh()
        .light_line_style(TRANSPARENT)
        .bold_line_style(GRID_COLOR.stroke_width(1))
        .axis_style(AXIS_TEXT)
        .x_labels(n.max(1))
        .x_label_formatter(&|x| {
            if (x - x.round()).abs() > 1e-6 || *x < -0.5 {
                return String::new();
            }
            labels.get(x.round() as usize).cloned().unwrap_or_default()
        })
        .y_desc(spec.y_label)
        .label_style(("sans-serif", 14).into_font().color(&AXIS_TEXT))
        .draw()
        .map_err(render_error)?;

    for (desc, band) in spec.series.iter().zip(bands) {
        let color = palette::plotters_rgb(&desc.color);

        let upper: Vec<(f64, f64)> = monotone_curve(&band.upper, CURVE_STEPS)
            .into_iter()
            .map(|[x, y]| (x, y))
            .collect();
        let mut outline = upper.clone();
        outline.extend(
            monotone_curve(&band.lower, CURVE_STEPS)
                .into_iter()
                .rev()
                .map(|[x, y]| (x, y)),
        );

        chart
            .draw_series(std::iter::once(Polygon::new(
                outline,
                color.mix(AREA_FILL_OPACITY).filled(),
            )))
            .map_err(render_error)?
            .label(desc.key.as_str())
            .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], color.filled()));

        chart
            .draw_series(LineSeries::new(upper, color.stroke_width(2)))
            .map_err(render_error)?;
    }

    if !spec.series.is_empty() {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(WHITE.mix(0.85))
            .border_style(GRID_COLOR)
            .label_font(("sans-serif", 13).into_font().color(&BLACK))
            .draw()
            .map_err(render_error)?;
    }

    Ok(())
}
