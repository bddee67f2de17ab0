//! Export module - Chart and legend PNG export
//!
//! Both exports run in two steps. The vector artwork is captured on the UI
//! thread as an owned [`VectorSnapshot`], so later edits cannot leak into it.
//! The snapshot is then rasterized at the configured scale over an opaque
//! background and encoded as PNG, typically on a worker thread.

mod legend;
mod naming;
pub mod raster;

use legend::legend_svg;
use naming::{chart_file_name, legend_file_name};

use crate::charts::{palette, ChartSpec, ChartSurface, SvgChartRenderer};
use crate::config::ExportSettings;
use crate::data::SeriesDescriptor;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("No chart is on screen to export")]
    NoRenderTarget,
    #[error("Rendering error: {0}")]
    Render(String),
    #[error("SVG decode error: {0}")]
    Svg(#[from] usvg::Error),
    #[error("Cannot allocate a {width}x{height} image")]
    EmptyCanvas { width: u32, height: u32 },
    #[error("PNG encode error: {0}")]
    Encode(#[from] image::ImageError),
}

/// Which artwork an export produces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    Chart,
    Legend,
}

impl ArtifactKind {
    pub fn file_name(&self, title: &str) -> String {
        match self {
            ArtifactKind::Chart => chart_file_name(title),
            ArtifactKind::Legend => legend_file_name(title),
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ArtifactKind::Chart => "chart",
            ArtifactKind::Legend => "legend",
        }
    }
}

/// Vector artwork captured for export, plus how to rasterize it.
#[derive(Debug, Clone)]
pub struct VectorSnapshot {
    pub kind: ArtifactKind,
    pub markup: String,
    pub background: [u8; 3],
    pub scale: f32,
}

impl VectorSnapshot {
    pub fn to_png(&self) -> Result<Vec<u8>, ExportError> {
        raster::svg_to_png(&self.markup, self.scale, self.background)
    }
}

/// Capture the chart as SVG at the size it is displayed on screen.
///
/// `displayed` is `None` when the chart has not been laid out yet.
pub fn capture_chart(
    spec: &ChartSpec<'_>,
    displayed: Option<(u32, u32)>,
    settings: &ExportSettings,
) -> Result<VectorSnapshot, ExportError> {
    let (width, height) = displayed.ok_or(ExportError::NoRenderTarget)?;
    if width == 0 || height == 0 {
        return Err(ExportError::NoRenderTarget);
    }

    let markup = SvgChartRenderer::new(width, height).render(spec)?;
    debug!(width, height, bytes = markup.len(), "chart captured");

    Ok(VectorSnapshot {
        kind: ArtifactKind::Chart,
        markup,
        background: palette::rgb_or_fallback(&settings.chart_background),
        scale: settings.scale,
    })
}

/// Capture the standalone legend for the given series.
pub fn capture_legend(
    series: &[SeriesDescriptor],
    settings: &ExportSettings,
) -> Result<VectorSnapshot, ExportError> {
    let background = palette::rgb_or_fallback(&settings.legend_background);
    let markup = legend_svg(series, background)?;
    debug!(rows = series.len(), bytes = markup.len(), "legend captured");

    Ok(VectorSnapshot {
        kind: ArtifactKind::Legend,
        markup,
        background,
        scale: settings.scale,
    })
}
