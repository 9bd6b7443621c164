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

use crate::core::comparison::{
    category_deltas, overall_difference, trend_label, CategoryDelta, DELTA_DOMAIN,
};
use crate::core::BiasTrend;
use crate::gateway::RequestKind;
use crate::model::{Comparison, Dataset};
use crate::state::{AppState, CompareSlot, Event};
use crate::ui::components::{trend_color, BarChart, BarEntry, RED};
use crate::ui::UiAction;

pub fn render_compare_page(ui: &mut egui::Ui, state: &AppState, actions: &mut Vec<UiAction>) {
    egui::ScrollArea::vertical().show(ui, |ui| {
        ui.horizontal(|ui| {
            ui.heading("Compare bias detected between datasets");
            if let Some((first, second)) = state.compare_pair() {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui
                        .button("Copy link")
                        .on_hover_text("Copy comparison link")
                        .clicked()
                    {
                        let comparison = Comparison::new(first.clone(), second.clone());
                        actions.push(UiAction::Start(RequestKind::SaveComparison(comparison)));
                    }
                });
            }
        });
        ui.add_space(16.0);

        ui.horizontal(|ui| {
            render_selector(ui, state, CompareSlot::First, actions);
            ui.add_space(40.0);
            render_selector(ui, state, CompareSlot::Second, actions);
        });

        let Some((first, second)) = state.compare_pair() else {
            ui.add_space(20.0);
            ui.label("Pick two datasets to compare.");
            return;
        };

        ui.add_space(16.0);
        render_trend(ui, first, second);
        ui.add_space(16.0);

        match category_deltas(first, second) {
            Ok(deltas) => {
                let entries = delta_entries(&deltas);
                let clicked = BarChart::new(
                    "Change in Bias Detected by Category",
                    &entries,
                    DELTA_DOMAIN,
                )
                .labels("More bias (10)", "No change (0)")
                .min_label("Less bias (-10)")
                .color(|v| trend_color(BiasTrend::from_difference(v)))
                .value_text(|v| format!("{v:+.1}"))
                .show(ui);
                if let Some(index) = clicked {
                    actions.push(Event::OpenCategory(entries[index].name.clone()).into());
                }
            }
            Err(e) => {
                tracing::warn!("Cannot chart comparison: {e}");
                ui.colored_label(RED, e.to_string());
            }
        }
    });
}

fn render_selector(
    ui: &mut egui::Ui,
    state: &AppState,
    slot: CompareSlot,
    actions: &mut Vec<UiAction>,
) {
    let (label, salt) = match slot {
        CompareSlot::First => ("Choose dataset 1", "compare_first"),
        CompareSlot::Second => ("Choose dataset 2", "compare_second"),
    };
    let current = state.compare_dataset(slot);

    ui.vertical(|ui| {
        ui.label(label);
        egui::ComboBox::from_id_salt(salt)
            .selected_text(current.map_or("Pick dataset", |d| d.name.as_str()))
            .show_ui(ui, |ui| {
                for dataset in state.repository().list() {
                    let is_current = current.is_some_and(|c| c.id == dataset.id);
                    if ui.selectable_label(is_current, &dataset.name).clicked() && !is_current {
                        actions.push(
                            Event::SetCompareSlot {
                                slot,
                                id: Some(dataset.id.clone()),
                            }
                            .into(),
                        );
                    }
                }
            });
    });
}

fn render_trend(ui: &mut egui::Ui, first: &Dataset, second: &Dataset) {
    let trend = BiasTrend::from_difference(overall_difference(first, second));
    ui.horizontal_wrapped(|ui| {
        ui.label("Overall bias");
        ui.colored_label(trend_color(trend), trend_label(first, second));
        ui.label("from");
        ui.strong(&first.name);
        ui.label("to");
        ui.strong(&second.name);
    });
}

fn delta_entries(deltas: &[CategoryDelta]) -> Vec<BarEntry> {
    deltas
        .iter()
        .map(|d| BarEntry::new(&d.name, d.value))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::components::GREEN;

    use crate::model::fixtures::{category, dataset};

    #[test]
    fn test_delta_entries_keep_order_and_sign() {
        let a = dataset("a", 5.0, vec![category("race", 4.0), category("age", 6.0)]);
        let b = dataset("b", 5.0, vec![category("age", 8.0), category("race", 2.0)]);
        let entries = delta_entries(&category_deltas(&a, &b).unwrap());
        assert_eq!(
            entries,
            vec![BarEntry::new("race", 2.0), BarEntry::new("age", -2.0)]
        );
        assert_eq!(trend_color(BiasTrend::from_difference(entries[1].value)), GREEN);
    }
}
