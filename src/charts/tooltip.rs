//! Hover tooltip content for a category.

use crate::data::{ChartRow, SeriesDescriptor};

#[derive(Debug, Clone, PartialEq)]
pub struct TooltipEntry {
    pub name: String,
    pub color: String,
    pub value: f64,
}

impl TooltipEntry {
    pub fn text(&self) -> String {
        format!("{}: {}%", self.name, format_value(self.value))
    }
}

/// Per-series values of a row, top of the stack first (reverse series order).
pub fn tooltip_entries(row: &ChartRow, series: &[SeriesDescriptor]) -> Vec<TooltipEntry> {
    series
        .iter()
        .rev()
        .map(|desc| TooltipEntry {
            name: desc.key.clone(),
            color: desc.color.clone(),
            value: row.value(&desc.key),
        })
        .collect()
}

/// Shortest plain rendering of a value (`25`, `12.5`).
pub fn format_value(value: f64) -> String {
    format!("{}", value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{project, series_descriptors, Category, Dataset, Series};

    #[test]
    fn test_entries_are_top_of_stack_first() {
        let dataset = Dataset::new(
            vec![
                Series::new("A", "#aa0000"),
                Series::new("B", "#00bb00"),
                Series::new("C", "#0000cc"),
            ],
            vec![Category::new("row", vec![1.0, 2.0, 3.5])],
        )
        .unwrap();
        let rows = project(&dataset);
        let entries = tooltip_entries(&rows[0], &series_descriptors(&dataset));

        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["C", "B", "A"]);
        assert_eq!(entries[0].value, 3.5);
        assert_eq!(entries[0].color, "#0000cc");
        assert_eq!(entries[0].text(), "C: 3.5%");
        assert_eq!(entries[2].text(), "A: 1%");
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(25.0), "25");
        assert_eq!(format_value(12.5), "12.5");
        assert_eq!(format_value(0.0), "0");
    }
}
