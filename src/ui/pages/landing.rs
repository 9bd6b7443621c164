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

use crate::state::Event;
use crate::ui::UiAction;

pub fn render_landing_page(ui: &mut egui::Ui, actions: &mut Vec<UiAction>) {
    egui::ScrollArea::vertical().show(ui, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(80.0);
            ui.heading(egui::RichText::new("Welcome to Bias Visualizer!").size(32.0));
            ui.add_space(20.0);
            ui.label(
                "Today we spot bias and together provide an ethical environment. \
                 Use this to get a better sense of your ML model and protect people \
                 from undesired harms!",
            );
            ui.add_space(30.0);

            if ui
                .add(egui::Button::new(egui::RichText::new("Get Started").size(18.0)))
                .clicked()
            {
                actions.push(Event::GetStarted.into());
            }
            ui.add_space(60.0);
        });

        ui.separator();
        render_about_section(ui);
    });
}

fn render_about_section(ui: &mut egui::Ui) {
    ui.add_space(10.0);
    ui.heading("How bias is measured");
    ui.add_space(6.0);
    ui.label(
        "Each uploaded dataset is scored by the bias service. For every protected \
         category (race, age, sex, ...) it computes the false positive rate of each \
         trait. The more these rates differ between traits, the higher the bias \
         detected for that category.",
    );
    ui.add_space(6.0);
    ui.label("The overall bias is the mean of the bias detected by each category.");
    ui.add_space(10.0);

    ui.heading("Reading the charts");
    ui.add_space(6.0);
    ui.horizontal(|ui| {
        ui.colored_label(crate::ui::components::GREEN, "■");
        ui.label("Low bias (below 3.3)");
    });
    ui.horizontal(|ui| {
        ui.colored_label(crate::ui::components::YELLOW, "■");
        ui.label("Moderate bias (3.3 to 6.6)");
    });
    ui.horizontal(|ui| {
        ui.colored_label(crate::ui::components::RED, "■");
        ui.label("High bias (6.6 and above)");
    });
}
