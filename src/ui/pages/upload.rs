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

use crate::gateway::RequestKind;
use crate::state::{AppState, Event};
use crate::ui::UiAction;

pub fn render_upload_page(ui: &mut egui::Ui, state: &AppState, actions: &mut Vec<UiAction>) {
    ui.vertical_centered(|ui| {
        ui.add_space(100.0);
        ui.heading("Import Data Set");
        ui.add_space(24.0);

        egui::Frame::group(ui.style())
            .inner_margin(egui::Margin::same(16))
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    if ui.button("CHOOSE FILE").clicked() {
                        if let Some(path) = rfd::FileDialog::new()
                            .add_filter("CSV Files", &["csv"])
                            .add_filter("All Files", &["*"])
                            .pick_file()
                        {
                            actions.push(Event::FileChosen(path).into());
                        }
                    }

                    let file_label = state
                        .chosen_file()
                        .and_then(|p| p.file_name())
                        .map_or_else(
                            || "No file selected".to_string(),
                            |name| name.to_string_lossy().into_owned(),
                        );
                    ui.label(file_label);

                    if ui.button("Submit").clicked() {
                        actions.push(submit_action(state));
                    }
                });
            });

        if let Some(status) = state.status() {
            ui.add_space(12.0);
            ui.colored_label(ui.visuals().warn_fg_color, status);
        }
    });
}

/// Upload the chosen file, or complain that there is none
fn submit_action(state: &AppState) -> UiAction {
    state.chosen_file().map_or_else(
        || Event::UploadWithoutFile.into(),
        |path| UiAction::Start(RequestKind::Upload(path.clone())),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_without_file() {
        let state = AppState::new().reduce(Event::GetStarted);
        assert_eq!(
            submit_action(&state),
            UiAction::Dispatch(Event::UploadWithoutFile)
        );
    }

    #[test]
    fn test_submit_with_file() {
        let state = AppState::new()
            .reduce(Event::GetStarted)
            .reduce(Event::FileChosen("data/loans.csv".into()));
        assert_eq!(
            submit_action(&state),
            UiAction::Start(RequestKind::Upload("data/loans.csv".into()))
        );
    }
}
