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

/// Version from Cargo.toml
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Git hash embedded at compile time
const GIT_HASH: &str = env!("GIT_HASH");

/// Render the About window
pub fn render_about_window(ctx: &egui::Context, open: &mut bool, api_base_url: &str) {
    egui::Window::new("About BiasViz")
        .collapsible(false)
        .resizable(false)
        .default_width(350.0)
        .open(open)
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(10.0);
                ui.heading("Bias Visualizer");
                ui.add_space(5.0);
                ui.label("Explore the bias detected in your model's predictions");
                ui.add_space(15.0);

                egui::Grid::new("about_grid")
                    .num_columns(2)
                    .spacing([20.0, 8.0])
                    .show(ui, |ui| {
                        ui.label("Version:");
                        ui.label(egui::RichText::new(VERSION).strong());
                        ui.end_row();

                        ui.label("Git:");
                        ui.label(egui::RichText::new(GIT_HASH).code());
                        ui.end_row();

                        ui.label("Service:");
                        ui.label(egui::RichText::new(api_base_url).code());
                        ui.end_row();

                        ui.label("License:");
                        ui.label("GPL-3.0-or-later");
                        ui.end_row();
                    });

                ui.add_space(10.0);
            });
        });
}
