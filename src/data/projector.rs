//! Chart Projector Module
//! Turns the dataset into the row-oriented shape the chart surfaces consume.

use crate::data::Dataset;
use indexmap::IndexMap;

/// One chart row per category: the label plus `series name -> value` fields.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartRow {
    pub label: String,
    pub fields: IndexMap<String, f64>,
}

impl ChartRow {
    /// Field value for a series key, `0` when absent.
    pub fn value(&self, key: &str) -> f64 {
        self.fields.get(key).copied().unwrap_or(0.0)
    }

    /// Sum of all fields (top of the stack)
    pub fn total(&self) -> f64 {
        self.fields.values().sum()
    }
}

/// A stacked layer as the chart surfaces see it.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesDescriptor {
    pub key: String,
    pub color: String,
}

/// Build one row per category, fields in series order.
pub fn project(dataset: &Dataset) -> Vec<ChartRow> {
    dataset
        .categories()
        .iter()
        .map(|category| {
            let mut fields = IndexMap::with_capacity(dataset.series().len());
            for (idx, series) in dataset.series().iter().enumerate() {
                let value = category.values().get(idx).copied().unwrap_or(0.0);
                fields.insert(series.name().to_string(), value);
            }
            ChartRow {
                label: category.label().to_string(),
                fields,
            }
        })
        .collect()
}

pub fn series_descriptors(dataset: &Dataset) -> Vec<SeriesDescriptor> {
    dataset
        .series()
        .iter()
        .map(|s| SeriesDescriptor {
            key: s.name().to_string(),
            color: s.color().to_string(),
        })
        .collect()
}

/// Cached projection, recomputed only when the dataset revision moves.
#[derive(Debug, Default)]
pub struct ProjectionCache {
    revision: Option<u64>,
    rows: Vec<ChartRow>,
    series: Vec<SeriesDescriptor>,
}

impl ProjectionCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-project if the dataset changed since the last call. Returns true when it did.
    pub fn refresh(&mut self, dataset: &Dataset) -> bool {
        if self.revision == Some(dataset.revision()) {
            return false;
        }

        self.rows = project(dataset);
        self.series = series_descriptors(dataset);
        self.revision = Some(dataset.revision());
        true
    }

    pub fn rows(&self) -> &[ChartRow] {
        &self.rows
    }

    pub fn series(&self) -> &[SeriesDescriptor] {
        &self.series
    }
}
