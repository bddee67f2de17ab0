//! Charts module - Chart surfaces and shared chart geometry

pub mod palette;
mod plotter;
mod renderer;
pub mod stacking;
mod surface;
pub mod tooltip;

pub use plotter::PlotSurface;
pub use renderer::SvgChartRenderer;
pub use surface::{ChartKind, ChartSpec, ChartSurface};
