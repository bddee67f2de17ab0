//! Data Editor Widget
//! Series list (name, color, remove) and per-category value grids.

use crate::charts::palette;
use crate::charts::tooltip::format_value;
use crate::data::{Dataset, DatasetError, ValueEntry};
use egui::{Color32, RichText};

const VALUE_COLUMNS: usize = 5;
const VALUE_FIELD_WIDTH: f32 = 90.0;
const REMOVE_RED: Color32 = Color32::from_rgb(220, 38, 38);
const ADD_GREEN: Color32 = Color32::from_rgb(22, 163, 74);

/// One edit requested from the editor UI this frame
#[derive(Debug, Clone, PartialEq)]
pub enum EditorAction {
    AddSeries,
    RemoveSeries(usize),
    RenameSeries(usize, String),
    RecolorSeries(usize, String),
    AddCategory,
    RemoveCategory(usize),
    RenameCategory(usize, String),
    SetValue {
        category: usize,
        series: usize,
        raw: String,
    },
}

/// Something the status line should show after an edit
#[derive(Debug, Clone, PartialEq)]
pub enum EditorNotice {
    Coerced { raw: String },
    Rejected(DatasetError),
}

/// Editing form bound to the dataset.
#[derive(Default)]
pub struct DataEditor {
    /// Text of the value cell being typed into, kept verbatim until focus leaves
    draft: Option<((usize, usize), String)>,
}

impl DataEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw the editor and apply any edits to the dataset.
    pub fn show(&mut self, ui: &mut egui::Ui, dataset: &mut Dataset) -> Vec<EditorNotice> {
        let mut actions = Vec::new();

        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(8.0)
            .inner_margin(12.0)
            .show(ui, |ui| {
                self.series_section(ui, dataset, &mut actions);
                ui.add_space(15.0);
                ui.separator();
                ui.add_space(10.0);
                self.category_section(ui, dataset, &mut actions);
            });

        let mut notices = Vec::new();
        for action in actions {
            if matches!(action, EditorAction::RemoveSeries(_) | EditorAction::RemoveCategory(_)) {
                self.draft = None;
            }
            match Self::apply(dataset, action) {
                Ok(Some(notice)) => notices.push(notice),
                Ok(None) => {}
                Err(e) => notices.push(EditorNotice::Rejected(e)),
            }
        }
        notices
    }

    /// Apply one edit to the dataset.
    pub fn apply(dataset: &mut Dataset, action: EditorAction) -> Result<Option<EditorNotice>, DatasetError> {
        match action {
            EditorAction::AddSeries => {
                dataset.add_series();
            }
            EditorAction::RemoveSeries(idx) => {
                dataset.remove_series(idx)?;
            }
            EditorAction::RenameSeries(idx, name) => dataset.rename_series(idx, name)?,
            EditorAction::RecolorSeries(idx, color) => dataset.recolor_series(idx, color)?,
            EditorAction::AddCategory => {
                dataset.add_category();
            }
            EditorAction::RemoveCategory(idx) => {
                dataset.remove_category(idx)?;
            }
            EditorAction::RenameCategory(idx, label) => dataset.rename_category(idx, label)?,
            EditorAction::SetValue {
                category,
                series,
                raw,
            } => {
                if let ValueEntry::Coerced { raw } = dataset.set_value(category, series, &raw)? {
                    return Ok(Some(EditorNotice::Coerced { raw }));
                }
            }
        }
        Ok(None)
    }

    fn series_section(&self, ui: &mut egui::Ui, dataset: &Dataset, actions: &mut Vec<EditorAction>) {
        ui.horizontal(|ui| {
            ui.label(RichText::new("Organisms").size(16.0).strong());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button(RichText::new("+ Add Organism").color(ADD_GREEN)).clicked() {
                    actions.push(EditorAction::AddSeries);
                }
            });
        });
        ui.add_space(8.0);

        for (idx, series) in dataset.series().iter().enumerate() {
            ui.horizontal(|ui| {
                let mut name = series.name().to_string();
                let name_edit = egui::TextEdit::singleline(&mut name)
                    .hint_text("Organism name")
                    .desired_width(260.0);
                if ui.add(name_edit).changed() {
                    actions.push(EditorAction::RenameSeries(idx, name));
                }

                let mut rgb = palette::rgb_or_fallback(series.color());
                if ui.color_edit_button_srgb(&mut rgb).changed() {
                    actions.push(EditorAction::RecolorSeries(idx, palette::to_hex(rgb)));
                }

                if ui.button(RichText::new("Remove").color(REMOVE_RED)).clicked() {
                    actions.push(EditorAction::RemoveSeries(idx));
                }
            });
        }
    }

    fn category_section(&mut self, ui: &mut egui::Ui, dataset: &Dataset, actions: &mut Vec<EditorAction>) {
        ui.horizontal(|ui| {
            ui.label(RichText::new("Categories & Values").size(16.0).strong());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button(RichText::new("+ Add Category").color(ADD_GREEN)).clicked() {
                    actions.push(EditorAction::AddCategory);
                }
            });
        });
        ui.add_space(8.0);

        for (cat_idx, category) in dataset.categories().iter().enumerate() {
            egui::Frame::none()
                .stroke(egui::Stroke::new(1.0, ui.visuals().widgets.noninteractive.bg_stroke.color))
                .rounding(5.0)
                .inner_margin(8.0)
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        let mut label = category.label().to_string();
                        let label_edit = egui::TextEdit::singleline(&mut label)
                            .hint_text("Category name")
                            .desired_width(260.0);
                        if ui.add(label_edit).changed() {
                            actions.push(EditorAction::RenameCategory(cat_idx, label));
                        }
                        if ui.button(RichText::new("Remove").color(REMOVE_RED)).clicked() {
                            actions.push(EditorAction::RemoveCategory(cat_idx));
                        }
                    });

                    ui.add_space(5.0);

                    egui::Grid::new(("category_values", cat_idx))
                        .num_columns(VALUE_COLUMNS)
                        .spacing([8.0, 6.0])
                        .show(ui, |ui| {
                            for (series_idx, series) in dataset.series().iter().enumerate() {
                                let value = dataset.value(cat_idx, series_idx).unwrap_or(0.0);
                                ui.vertical(|ui| {
                                    ui.label(RichText::new(series.name()).size(11.0).color(Color32::GRAY));
                                    self.value_cell(ui, (cat_idx, series_idx), value, actions);
                                });
                                if (series_idx + 1) % VALUE_COLUMNS == 0 {
                                    ui.end_row();
                                }
                            }
                        });
                });
            ui.add_space(8.0);
        }
    }

    /// A value field. While focused it shows exactly what was typed.
    fn value_cell(
        &mut self,
        ui: &mut egui::Ui,
        cell: (usize, usize),
        value: f64,
        actions: &mut Vec<EditorAction>,
    ) {
        let mut text = match &self.draft {
            Some((key, draft)) if *key == cell => draft.clone(),
            _ => format_value(value),
        };

        let response = ui.add(egui::TextEdit::singleline(&mut text).desired_width(VALUE_FIELD_WIDTH));

        if response.changed() {
            actions.push(EditorAction::SetValue {
                category: cell.0,
                series: cell.1,
                raw: text.clone(),
            });
            self.draft = Some((cell, text));
        } else if response.gained_focus() {
            self.draft = Some((cell, text));
        } else if response.lost_focus() && matches!(&self.draft, Some((key, _)) if *key == cell) {
            self.draft = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_add_and_remove() {
        let mut dataset = Dataset::seed();

        DataEditor::apply(&mut dataset, EditorAction::AddSeries).unwrap();
        DataEditor::apply(&mut dataset, EditorAction::AddCategory).unwrap();
        assert_eq!(dataset.series().len(), 11);
        assert_eq!(dataset.categories().len(), 5);
        assert_eq!(dataset.categories()[4].values().len(), 11);

        DataEditor::apply(&mut dataset, EditorAction::RemoveSeries(0)).unwrap();
        DataEditor::apply(&mut dataset, EditorAction::RemoveCategory(4)).unwrap();
        assert_eq!(dataset.series()[0].name(), "CONS");
        assert_eq!(dataset.categories().len(), 4);
    }

    #[test]
    fn test_apply_coerced_value_reports_notice() {
        let mut dataset = Dataset::seed();
        let notice = DataEditor::apply(
            &mut dataset,
            EditorAction::SetValue {
                category: 0,
                series: 1,
                raw: "abc".to_string(),
            },
        )
        .unwrap();

        assert_eq!(
            notice,
            Some(EditorNotice::Coerced {
                raw: "abc".to_string()
            })
        );
        assert_eq!(dataset.value(0, 1), Some(0.0));
    }

    #[test]
    fn test_apply_rejects_stale_index() {
        let mut dataset = Dataset::seed();
        let result = DataEditor::apply(&mut dataset, EditorAction::RemoveSeries(10));
        assert_eq!(result, Err(DatasetError::SeriesOutOfRange { index: 10, len: 10 }));
    }

    #[test]
    fn test_apply_metadata_edits() {
        let mut dataset = Dataset::seed();
        DataEditor::apply(&mut dataset, EditorAction::RenameSeries(2, "MRSA".to_string())).unwrap();
        DataEditor::apply(&mut dataset, EditorAction::RecolorSeries(2, "#123456".to_string())).unwrap();
        DataEditor::apply(&mut dataset, EditorAction::RenameCategory(0, "Ward A".to_string())).unwrap();

        assert_eq!(dataset.series()[2].name(), "MRSA");
        assert_eq!(dataset.series()[2].color(), "#123456");
        assert_eq!(dataset.categories()[0].label(), "Ward A");
    }
}
