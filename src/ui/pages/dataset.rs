// BiasViz - GPL-3.0-or-later
// This file is part of BiasViz.
//
// Copyright (C) 2025 BiasViz Authors
//
// BiasViz is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// BiasViz is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with BiasViz.  If not, see <https://www.gnu.org/licenses/>.

use crate::core::scoring::{color_bucket, displayed_bias};
use crate::model::{Dataset, MAX_SCORE};
use crate::state::Event;
use crate::ui::components::{bucket_color, BarChart, BarEntry, BiasBar};
use crate::ui::UiAction;

/// Bars for "Bias Detected by Category"
pub(crate) fn category_bias_entries(dataset: &Dataset) -> Vec<BarEntry> {
    dataset
        .categories
        .iter()
        .map(|c| BarEntry::new(&c.name, displayed_bias(c.fpr_score)))
        .collect()
}

pub fn render_dataset_page(ui: &mut egui::Ui, dataset: &Dataset, actions: &mut Vec<UiAction>) {
    egui::ScrollArea::vertical().show(ui, |ui| {
        ui.horizontal(|ui| {
            ui.heading(&dataset.name);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui
                    .button("Copy link")
                    .on_hover_text("Copy link to this dataset")
                    .clicked()
                {
                    actions.push(UiAction::CopyLink(dataset.id.clone()));
                }
                if ui.button("Categories").clicked() {
                    actions.push(Event::OpenCategoryPicker.into());
                }
            });
        });

        ui.vertical_centered(|ui| {
            ui.add_space(10.0);
            ui.label(egui::RichText::new("Overall Bias Detected:").size(16.0))
                .on_hover_text(
                    "The overall bias is calculated by taking the mean of all the bias' \
                     detected by each category.",
                );
            BiasBar::new(displayed_bias(dataset.score)).show(ui);

            if let Some(description) = &dataset.description {
                ui.add_space(10.0);
                ui.label(description);
            }
            ui.add_space(20.0);

            let entries = category_bias_entries(dataset);
            let clicked = BarChart::new("Bias Detected by Category", &entries, (0.0, MAX_SCORE))
                .labels("High (10)", "Low (0)")
                .color(|v| bucket_color(color_bucket(v)))
                .show(ui);
            if let Some(index) = clicked {
                actions.push(Event::OpenCategory(entries[index].name.clone()).into());
            }
        });
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::{category, dataset};

    #[test]
    fn test_category_entries_show_inverted_scores() {
        let ds = dataset("d", 5.0, vec![category("race", 8.0), category("age", 2.5)]);
        let entries = category_bias_entries(&ds);
        assert_eq!(
            entries,
            vec![BarEntry::new("race", 2.0), BarEntry::new("age", 7.5)]
        );
    }
}
