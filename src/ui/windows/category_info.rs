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

use crate::core::scoring::displayed_bias;
use crate::model::{Category, Trait};
use crate::ui::components::{capitalize, BarChart, BarEntry, BiasBar, BLUE};

const FPR_EXPLANATION: &str = "False positive rate is the share of negative cases the model \
     wrongly predicted as positive. When this rate differs a lot between the traits of a \
     category, the model treats those groups unequally.";

/// Trait bars for the false positive rate chart, domain 0..1
pub(crate) fn trait_entries(traits: &[Trait]) -> Vec<BarEntry> {
    traits
        .iter()
        .map(|t| BarEntry::new(&t.name, t.fpr_mean))
        .collect()
}

fn percent(value: f64) -> String {
    format!("{:.1}%", value * 100.0)
}

/// Render the drill-down for one category of a dataset.
///
/// Returns false once the user closed the window.
pub fn render_category_window(ctx: &egui::Context, category: &Category) -> bool {
    let mut open = true;
    let title = capitalize(&category.name);

    egui::Window::new(format!("{title} Bias"))
        .id(egui::Id::new("category_window"))
        .collapsible(false)
        .resizable(false)
        .default_width(460.0)
        .open(&mut open)
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new(format!("{title} Bias Detected:")).size(16.0));
                BiasBar::new(displayed_bias(category.fpr_score)).show(ui);
                ui.add_space(8.0);
                ui.label(FPR_EXPLANATION);
                ui.add_space(12.0);

                let entries = trait_entries(&category.traits);
                BarChart::new(
                    format!("False Positive Rate V.S. {title}"),
                    &entries,
                    (0.0, 1.0),
                )
                .labels("100%", "0%")
                .color(|_| BLUE)
                .value_text(percent)
                .show(ui);

                ui.add_space(8.0);
                egui::Grid::new("category_counts")
                    .num_columns(2)
                    .striped(true)
                    .show(ui, |ui| {
                        for t in &category.traits {
                            ui.label(&t.name);
                            ui.label(format!("{} samples", t.count));
                            ui.end_row();
                        }
                        ui.strong("Total");
                        ui.strong(format!("{} samples", category.total_count()));
                        ui.end_row();
                    });
            });
        });

    open
}
