//! Dataset Store Module
//! Owns the series list and the per-category value rows behind one mutation API.

use thiserror::Error;
use tracing::{debug, warn};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DatasetError {
    #[error("Series index {index} out of range (series count: {len})")]
    SeriesOutOfRange { index: usize, len: usize },
    #[error("Category index {index} out of range (category count: {len})")]
    CategoryOutOfRange { index: usize, len: usize },
    #[error("Category '{label}' has {found} values, expected {expected}")]
    ValueCountMismatch {
        label: String,
        expected: usize,
        found: usize,
    },
}

/// Colors handed out round-robin to newly added series
pub const APPEND_PALETTE: [&str; 10] = [
    "#FF6B6B", "#4ECDC4", "#45B7D1", "#FFA07A", "#98D8C8", "#F7DC6F", "#BB8FCE", "#85C1E2",
    "#F8B739", "#52B788",
];

const SEED_SERIES: [(&str, &str); 10] = [
    ("E. coli", "#808080"),
    ("CONS", "#87CEEB"),
    ("S. aureus", "#FF6B9D"),
    ("Streptococcus spp.", "#CD5C5C"),
    ("Klebsiella spp.", "#90EE90"),
    ("Enterococcus spp.", "#4169E1"),
    ("Pseudomonas spp.", "#DDA0DD"),
    ("Candida spp.", "#FFD700"),
    ("Enterobacter spp.", "#FF8C00"),
    ("Others", "#FFA07A"),
];

const SEED_CATEGORIES: [(&str, [f64; 10]); 4] = [
    ("Category 1", [25.0, 15.0, 12.0, 10.0, 10.0, 8.0, 6.0, 5.0, 6.0, 3.0]),
    ("Category 2", [22.0, 18.0, 13.0, 11.0, 11.0, 9.0, 5.0, 5.0, 4.0, 2.0]),
    ("Category 3", [20.0, 20.0, 12.0, 10.0, 12.0, 10.0, 6.0, 5.0, 4.0, 1.0]),
    ("Category 4", [18.0, 22.0, 11.0, 9.0, 13.0, 11.0, 6.0, 5.0, 4.0, 1.0]),
];

/// A named, colored stack layer. Identity is its position in the dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    name: String,
    color: String,
}

impl Series {
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Hex color string, e.g. `#FF6B9D`
    pub fn color(&self) -> &str {
        &self.color
    }
}

/// A labeled row holding one value per series, by position.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    label: String,
    values: Vec<f64>,
}

impl Category {
    pub fn new(label: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            label: label.into(),
            values,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }
}

/// Outcome of a raw value entry.
#[derive(Debug, Clone, PartialEq)]
pub enum ValueEntry {
    /// Input parsed as a finite number and stored as-is
    Parsed(f64),
    /// Input was not a finite number; `0` was stored instead
    Coerced { raw: String },
}

impl ValueEntry {
    /// Parse user input the lenient way: anything that is not a finite number becomes `0`.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().parse::<f64>() {
            Ok(v) if v.is_finite() => ValueEntry::Parsed(v),
            _ => ValueEntry::Coerced {
                raw: raw.to_string(),
            },
        }
    }

    /// The value that gets stored
    pub fn value(&self) -> f64 {
        match self {
            ValueEntry::Parsed(v) => *v,
            ValueEntry::Coerced { .. } => 0.0,
        }
    }

    pub fn is_coerced(&self) -> bool {
        matches!(self, ValueEntry::Coerced { .. })
    }
}

/// Series definitions plus categories, kept positionally aligned.
///
/// Every category always holds exactly one value per series. The only way to
/// change either collection is through the methods below, each of which
/// updates both sides together and bumps [`Dataset::revision`].
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    series: Vec<Series>,
    categories: Vec<Category>,
    revision: u64,
}

impl Default for Dataset {
    fn default() -> Self {
        Self::seed()
    }
}

impl Dataset {
    /// Build a dataset, checking that every category has one value per series.
    #[cfg(test)]
    pub fn new(series: Vec<Series>, categories: Vec<Category>) -> Result<Self, DatasetError> {
        if let Some(bad) = categories.iter().find(|c| c.values.len() != series.len()) {
            return Err(DatasetError::ValueCountMismatch {
                label: bad.label.clone(),
                expected: series.len(),
                found: bad.values.len(),
            });
        }

        Ok(Self {
            series,
            categories,
            revision: 0,
        })
    }

    /// Default startup data: 10 organisms across 4 categories.
    pub fn seed() -> Self {
        Self {
            series: SEED_SERIES
                .iter()
                .map(|(name, color)| Series::new(*name, *color))
                .collect(),
            categories: SEED_CATEGORIES
                .iter()
                .map(|(label, values)| Category::new(*label, values.to_vec()))
                .collect(),
            revision: 0,
        }
    }

    pub fn series(&self) -> &[Series] {
        &self.series
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Bumped on every successful mutation
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Append a series with a generated name and palette color, and a `0` in every category.
    pub fn add_series(&mut self) -> usize {
        let index = self.series.len();
        let name = format!("Organism {}", index + 1);
        let color = APPEND_PALETTE[index % APPEND_PALETTE.len()];

        self.series.push(Series::new(name, color));
        for category in &mut self.categories {
            category.values.push(0.0);
        }
        self.touch();

        debug!(index, color, "series added");
        index
    }

    /// Remove a series and its value column from every category.
    pub fn remove_series(&mut self, index: usize) -> Result<Series, DatasetError> {
        self.check_series(index)?;

        let removed = self.series.remove(index);
        for category in &mut self.categories {
            category.values.remove(index);
        }
        self.touch();

        debug!(index, name = %removed.name, "series removed");
        Ok(removed)
    }

    pub fn rename_series(&mut self, index: usize, name: impl Into<String>) -> Result<(), DatasetError> {
        self.check_series(index)?;
        self.series[index].name = name.into();
        self.touch();
        Ok(())
    }

    pub fn recolor_series(&mut self, index: usize, color: impl Into<String>) -> Result<(), DatasetError> {
        self.check_series(index)?;
        self.series[index].color = color.into();
        self.touch();
        Ok(())
    }

    /// Append a category with a generated label and all-zero values.
    pub fn add_category(&mut self) -> usize {
        let index = self.categories.len();
        self.categories.push(Category::new(
            format!("Category {}", index + 1),
            vec![0.0; self.series.len()],
        ));
        self.touch();

        debug!(index, "category added");
        index
    }

    pub fn remove_category(&mut self, index: usize) -> Result<Category, DatasetError> {
        self.check_category(index)?;

        let removed = self.categories.remove(index);
        self.touch();

        debug!(index, label = %removed.label, "category removed");
        Ok(removed)
    }

    pub fn rename_category(&mut self, index: usize, label: impl Into<String>) -> Result<(), DatasetError> {
        self.check_category(index)?;
        self.categories[index].label = label.into();
        self.touch();
        Ok(())
    }

    /// Store a raw user entry. Non-numeric input stores `0` and is reported as coerced.
    pub fn set_value(
        &mut self,
        category: usize,
        series: usize,
        raw: &str,
    ) -> Result<ValueEntry, DatasetError> {
        self.check_category(category)?;
        self.check_series(series)?;

        let entry = ValueEntry::parse(raw);
        if entry.is_coerced() {
            warn!(category, series, raw, "non-numeric value entry stored as 0");
        }

        self.categories[category].values[series] = entry.value();
        self.touch();
        Ok(entry)
    }

    /// Value at a cell, if both indices exist
    pub fn value(&self, category: usize, series: usize) -> Option<f64> {
        self.categories.get(category)?.values.get(series).copied()
    }

    fn check_series(&self, index: usize) -> Result<(), DatasetError> {
        if index < self.series.len() {
            Ok(())
        } else {
            warn!(index, len = self.series.len(), "series index rejected");
            Err(DatasetError::SeriesOutOfRange {
                index,
                len: self.series.len(),
            })
        }
    }

    fn check_category(&self, index: usize) -> Result<(), DatasetError> {
        if index < self.categories.len() {
            Ok(())
        } else {
            warn!(index, len = self.categories.len(), "category index rejected");
            Err(DatasetError::CategoryOutOfRange {
                index,
                len: self.categories.len(),
            })
        }
    }

    fn touch(&mut self) {
        self.revision += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_aligned(dataset: &Dataset) {
        for category in dataset.categories() {
            assert_eq!(category.values().len(), dataset.series().len());
        }
    }

    fn small() -> Dataset {
        Dataset::new(
            vec![
                Series::new("A", "#111111"),
                Series::new("B", "#222222"),
                Series::new("C", "#333333"),
            ],
            vec![
                Category::new("x", vec![1.0, 2.0, 3.0]),
                Category::new("y", vec![4.0, 5.0, 6.0]),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_seed_shape() {
        let dataset = Dataset::seed();
        assert_eq!(dataset.series().len(), 10);
        assert_eq!(dataset.categories().len(), 4);
        assert_eq!(dataset.series()[0].name(), "E. coli");
        assert_eq!(dataset.categories()[3].values()[1], 22.0);
        assert_aligned(&dataset);
    }

    #[test]
    fn test_seed_passes_construction_check() {
        let seed = Dataset::seed();
        let rebuilt = Dataset::new(seed.series().to_vec(), seed.categories().to_vec()).unwrap();
        assert_eq!(rebuilt, seed);
    }

    #[test]
    fn test_add_series_to_seed() {
        let mut dataset = Dataset::seed();
        let index = dataset.add_series();

        assert_eq!(index, 10);
        assert_eq!(dataset.series().len(), 11);
        assert_eq!(dataset.series()[10].name(), "Organism 11");
        assert_eq!(dataset.series()[10].color(), APPEND_PALETTE[0]);
        for category in dataset.categories() {
            assert_eq!(category.values().len(), 11);
            assert_eq!(category.values()[10], 0.0);
        }
    }

    #[test]
    fn test_add_series_palette_wraps() {
        let mut dataset = Dataset::new(Vec::new(), Vec::new()).unwrap();
        for _ in 0..11 {
            dataset.add_series();
        }
        assert_eq!(dataset.series()[9].color(), "#52B788");
        assert_eq!(dataset.series()[10].color(), "#FF6B6B");
    }

    #[test]
    fn test_remove_series_keeps_order() {
        let mut dataset = small();
        let removed = dataset.remove_series(1).unwrap();

        assert_eq!(removed.name(), "B");
        let names: Vec<&str> = dataset.series().iter().map(|s| s.name()).collect();
        assert_eq!(names, vec!["A", "C"]);
        assert_eq!(dataset.categories()[0].values(), &[1.0, 3.0]);
        assert_eq!(dataset.categories()[1].values(), &[4.0, 6.0]);
    }

    #[test]
    fn test_out_of_range_is_rejected_without_change() {
        let mut dataset = small();
        let before = dataset.clone();

        assert_eq!(
            dataset.remove_series(3),
            Err(DatasetError::SeriesOutOfRange { index: 3, len: 3 })
        );
        assert_eq!(
            dataset.remove_category(2),
            Err(DatasetError::CategoryOutOfRange { index: 2, len: 2 })
        );
        assert!(dataset.rename_series(9, "Z").is_err());
        assert!(dataset.recolor_series(9, "#000000").is_err());
        assert!(dataset.rename_category(9, "z").is_err());
        assert!(dataset.set_value(0, 7, "1").is_err());
        assert!(dataset.set_value(7, 0, "1").is_err());

        assert_eq!(dataset, before);
    }

    #[test]
    fn test_add_and_remove_category() {
        let mut dataset = small();
        let index = dataset.add_category();

        assert_eq!(index, 2);
        assert_eq!(dataset.categories()[2].label(), "Category 3");
        assert_eq!(dataset.categories()[2].values(), &[0.0, 0.0, 0.0]);

        let removed = dataset.remove_category(0).unwrap();
        assert_eq!(removed.label(), "x");
        assert_eq!(dataset.categories()[0].label(), "y");
    }

    #[test]
    fn test_set_value_parses_and_coerces() {
        let mut dataset = small();

        let entry = dataset.set_value(1, 2, "12.5").unwrap();
        assert_eq!(entry, ValueEntry::Parsed(12.5));
        assert_eq!(dataset.value(1, 2), Some(12.5));

        let entry = dataset.set_value(1, 2, "abc").unwrap();
        assert!(entry.is_coerced());
        assert_eq!(dataset.value(1, 2), Some(0.0));

        assert_eq!(dataset.set_value(0, 0, " 7 ").unwrap(), ValueEntry::Parsed(7.0));
        assert!(dataset.set_value(0, 0, "NaN").unwrap().is_coerced());
        assert!(dataset.set_value(0, 0, "").unwrap().is_coerced());
        assert_eq!(dataset.value(0, 0), Some(0.0));
    }

    #[test]
    fn test_renames_and_recolor() {
        let mut dataset = small();
        dataset.rename_series(0, "").unwrap();
        dataset.recolor_series(0, "not-a-color").unwrap();
        dataset.rename_category(1, "Week 2").unwrap();

        assert_eq!(dataset.series()[0].name(), "");
        assert_eq!(dataset.series()[0].color(), "not-a-color");
        assert_eq!(dataset.categories()[1].label(), "Week 2");
    }

    #[test]
    fn test_revision_tracks_successful_mutations() {
        let mut dataset = small();
        assert_eq!(dataset.revision(), 0);

        dataset.add_series();
        dataset.set_value(0, 0, "3").unwrap();
        assert_eq!(dataset.revision(), 2);

        let _ = dataset.remove_series(99);
        assert_eq!(dataset.revision(), 2);
    }

    #[test]
    fn test_new_rejects_misaligned_rows() {
        let result = Dataset::new(
            vec![Series::new("A", "#000000")],
            vec![Category::new("bad", vec![1.0, 2.0])],
        );
        assert_eq!(
            result,
            Err(DatasetError::ValueCountMismatch {
                label: "bad".to_string(),
                expected: 1,
                found: 2,
            })
        );
    }

    #[test]
    fn test_alignment_survives_mixed_edits() {
        let mut dataset = Dataset::seed();
        dataset.add_series();
        dataset.remove_series(0).unwrap();
        dataset.add_category();
        dataset.add_series();
        dataset.remove_category(1).unwrap();
        dataset.remove_series(5).unwrap();
        assert_aligned(&dataset);

        while !dataset.series().is_empty() {
            dataset.remove_series(0).unwrap();
        }
        assert_aligned(&dataset);
        dataset.add_category();
        assert!(dataset.categories().last().unwrap().values().is_empty());
    }
}
