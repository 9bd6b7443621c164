use crate::core::comparison::category_scores;
use crate::core::scoring::{color_bucket, displayed_bias};
use crate::model::{Dataset, MAX_SCORE};
use crate::ui::components::{bucket_color, capitalize, BarChart, BarEntry, RED};

/// One bar per dataset holding its raw score for the category
fn score_entries(a: &Dataset, b: &Dataset, scores: (f64, f64)) -> Vec<BarEntry> {
    vec![
        BarEntry::new(&a.name, scores.0),
        BarEntry::new(&b.name, scores.1),
    ]
}

/// Two-bar drill-down for one category on the compare page.
///
/// Returns false once the user closed the window.
pub fn render_category_compare_window(
    ctx: &egui::Context,
    first: &Dataset,
    second: &Dataset,
    category: &str,
) -> bool {
    let mut open = true;
    let title = capitalize(category);

    egui::Window::new(format!("{title} Bias"))
        .id(egui::Id::new("category_compare_window"))
        .collapsible(false)
        .resizable(false)
        .default_width(420.0)
        .open(&mut open)
        .show(ctx, |ui| match category_scores(first, second, category) {
            Ok(scores) => {
                let entries = score_entries(first, second, scores);
                BarChart::new(
                    format!("Dataset V.S. {title} Bias Score"),
                    &entries,
                    (0.0, MAX_SCORE),
                )
                .labels("10 (High)", "0 (Low)")
                .color(|v| bucket_color(color_bucket(displayed_bias(v))))
                .show(ui);
            }
            Err(e) => {
                ui.colored_label(RED, e.to_string());
            }
        });

    open
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::{category, dataset};

    #[test]
    fn test_score_entries_follow_dataset_order() {
        let a = dataset("a", 5.0, vec![category("race", 4.0)]);
        let b = dataset("b", 5.0, vec![category("race", 7.0)]);
        let scores = category_scores(&a, &b, "race").unwrap();
        assert_eq!(
            score_entries(&a, &b, scores),
            vec![BarEntry::new("a.csv", 4.0), BarEntry::new("b.csv", 7.0)]
        );
    }
}
