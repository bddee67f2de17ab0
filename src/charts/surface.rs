//! Chart surface contract: rows + stacked series descriptors + chart kind in, a rendering out.

use crate::data::{ChartRow, SeriesDescriptor};

/// Chart render mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChartKind {
    Area,
    #[default]
    Bar,
}

impl ChartKind {
    pub const ALL: [ChartKind; 2] = [ChartKind::Area, ChartKind::Bar];

    pub fn display_name(&self) -> &'static str {
        match self {
            ChartKind::Area => "Stacked Area",
            ChartKind::Bar => "Stacked Bar",
        }
    }
}

/// Everything a surface needs to draw one chart.
#[derive(Debug, Clone, Copy)]
pub struct ChartSpec<'a> {
    pub kind: ChartKind,
    pub rows: &'a [ChartRow],
    pub series: &'a [SeriesDescriptor],
    pub y_label: &'a str,
}

impl<'a> ChartSpec<'a> {
    pub fn category_labels(&self) -> Vec<String> {
        self.rows.iter().map(|r| r.label.clone()).collect()
    }
}

/// Anything that can draw a stacked chart.
pub trait ChartSurface {
    type Output;

    fn render(&mut self, spec: &ChartSpec<'_>) -> Self::Output;
}
