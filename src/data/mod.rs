//! Data module - Dataset store and chart projection

mod dataset;
mod projector;

pub use dataset::{Category, Dataset, DatasetError, Series, ValueEntry};
pub use projector::{project, series_descriptors, ChartRow, ProjectionCache, SeriesDescriptor};
