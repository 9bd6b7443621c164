use super::UiAction;
use crate::state::{AppState, Event, Page};

/// Top bar: home, one button per dataset, compare and "+"
pub fn render_navbar(ui: &mut egui::Ui, state: &AppState, actions: &mut Vec<UiAction>) {
    ui.horizontal(|ui| {
        if ui
            .button(egui::RichText::new("⚖ Bias Visualizer").strong())
            .on_hover_text("Go to landing page")
            .clicked()
        {
            actions.push(Event::GoHome.into());
        }

        ui.separator();

        let selected_id = state.selected_dataset().map(|d| d.id.as_str());
        for dataset in state.repository().list() {
            let is_current =
                state.page() == Page::Graph && selected_id == Some(dataset.id.as_str());
            if ui.selectable_label(is_current, &dataset.name).clicked() {
                actions.push(Event::SelectDataset(dataset.id.clone()).into());
            }
        }

        if ui
            .selectable_label(state.page() == Page::Compare, "Compare")
            .clicked()
        {
            actions.push(Event::OpenCompare.into());
        }
        if ui
            .selectable_label(state.page() == Page::Upload, "+")
            .on_hover_text("Upload a new dataset")
            .clicked()
        {
            actions.push(Event::NewDataset.into());
        }
    });
}
