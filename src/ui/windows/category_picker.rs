use crate::core::scoring::warning_glyph;
use crate::model::Dataset;
use crate::state::Event;
use crate::ui::components::capitalize;
use crate::ui::UiAction;

/// Picker row text, e.g. `Race !!`
fn picker_label(name: &str, fpr_score: f64) -> String {
    let glyph = warning_glyph(fpr_score);
    if glyph.is_empty() {
        capitalize(name)
    } else {
        format!("{} {glyph}", capitalize(name))
    }
}

/// List the categories of a dataset, with warning marks for the biased ones
pub fn render_category_picker(
    ctx: &egui::Context,
    dataset: &Dataset,
    actions: &mut Vec<UiAction>,
) {
    let mut open = true;
    egui::Window::new("Choose category")
        .collapsible(false)
        .resizable(false)
        .default_width(220.0)
        .open(&mut open)
        .show(ctx, |ui| {
            for category in &dataset.categories {
                if ui
                    .selectable_label(false, picker_label(&category.name, category.fpr_score))
                    .clicked()
                {
                    actions.push(Event::OpenCategory(category.name.clone()).into());
                }
            }
        });

    if !open {
        actions.push(Event::CloseCategoryPicker.into());
    }
}
