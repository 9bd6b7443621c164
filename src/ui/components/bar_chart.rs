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

use egui::{Align2, Color32, FontId, Sense, Stroke, Ui};

const CHART_HEIGHT: f32 = 220.0;
const AXIS_WIDTH: f32 = 110.0;
const BAR_WIDTH: f32 = 40.0;
const BAR_GAP: f32 = 10.0;
const NAME_HEIGHT: f32 = 20.0;

/// One bar of a chart
#[derive(Debug, Clone, PartialEq)]
pub struct BarEntry {
    pub name: String,
    pub value: f64,
}

impl BarEntry {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// Vertical bar chart over a fixed value domain.
///
/// Bars grow from zero, so a domain with a negative minimum renders a
/// signed (up/down) chart.
pub struct BarChart<'a> {
    title: String,
    entries: &'a [BarEntry],
    domain: (f64, f64),
    max_label: String,
    zero_label: String,
    min_label: Option<String>,
    color: Box<dyn Fn(f64) -> Color32 + 'a>,
    value_text: Box<dyn Fn(f64) -> String + 'a>,
}

impl<'a> BarChart<'a> {
    pub fn new(title: impl Into<String>, entries: &'a [BarEntry], domain: (f64, f64)) -> Self {
        Self {
            title: title.into(),
            entries,
            domain,
            max_label: format!("{:.0}", domain.1),
            zero_label: "0".to_string(),
            min_label: None,
            color: Box::new(|_| super::BLUE),
            value_text: Box::new(|v| format!("{v:.1}")),
        }
    }

    #[must_use]
    pub fn labels(mut self, max: impl Into<String>, zero: impl Into<String>) -> Self {
        self.max_label = max.into();
        self.zero_label = zero.into();
        self
    }

    #[must_use]
    pub fn min_label(mut self, min: impl Into<String>) -> Self {
        self.min_label = Some(min.into());
        self
    }

    #[must_use]
    pub fn color(mut self, color: impl Fn(f64) -> Color32 + 'a) -> Self {
        self.color = Box::new(color);
        self
    }

    #[must_use]
    pub fn value_text(mut self, text: impl Fn(f64) -> String + 'a) -> Self {
        self.value_text = Box::new(text);
        self
    }

    /// Render the chart. Returns the index of a clicked bar.
    pub fn show(self, ui: &mut Ui) -> Option<usize> {
        ui.vertical_centered(|ui| ui.label(egui::RichText::new(&self.title).size(16.0)));
        ui.add_space(6.0);

        if self.entries.is_empty() {
            ui.label("No categories to display");
            return None;
        }

        let plot_width = self.entries.len() as f32 * (BAR_WIDTH + BAR_GAP) + BAR_GAP;
        let desired = egui::vec2(AXIS_WIDTH + plot_width, CHART_HEIGHT + NAME_HEIGHT);
        let (response, painter) = ui.allocate_painter(desired, Sense::click());
        let rect = response.rect;

        let text_color = ui.visuals().text_color();
        let axis_stroke = Stroke::new(2.0, text_color);
        let font = FontId::proportional(12.0);

        let plot_left = rect.min.x + AXIS_WIDTH;
        let plot_top = rect.min.y;
        let plot_bottom = rect.min.y + CHART_HEIGHT;
        let y_of = |value: f64| -> f32 {
            let t = value_fraction(value, self.domain);
            plot_bottom - t * CHART_HEIGHT
        };
        let zero_y = y_of(0.0);

        // Axes
        painter.line_segment(
            [egui::pos2(plot_left, plot_top), egui::pos2(plot_left, plot_bottom)],
            axis_stroke,
        );
        painter.line_segment(
            [egui::pos2(plot_left, zero_y), egui::pos2(rect.max.x, zero_y)],
            axis_stroke,
        );
        painter.text(
            egui::pos2(plot_left - 6.0, plot_top),
            Align2::RIGHT_TOP,
            &self.max_label,
            font.clone(),
            text_color,
        );
        painter.text(
            egui::pos2(plot_left - 6.0, zero_y),
            Align2::RIGHT_CENTER,
            &self.zero_label,
            font.clone(),
            text_color,
        );
        if let Some(min_label) = &self.min_label {
            painter.text(
                egui::pos2(plot_left - 6.0, plot_bottom),
                Align2::RIGHT_BOTTOM,
                min_label,
                font.clone(),
                text_color,
            );
        }

        let hover_pos = response.hover_pos();
        let mut hovered = None;

        for (i, entry) in self.entries.iter().enumerate() {
            let x = plot_left + BAR_GAP + i as f32 * (BAR_WIDTH + BAR_GAP);
            let column = egui::Rect::from_min_max(
                egui::pos2(x, plot_top),
                egui::pos2(x + BAR_WIDTH, plot_bottom),
            );

            let is_hovered = hover_pos.is_some_and(|p| column.contains(p));
            if is_hovered {
                hovered = Some(i);
                painter.rect_filled(column, 2.0, ui.visuals().faint_bg_color);
            }

            let value_y = y_of(entry.value);
            let bar = egui::Rect::from_two_pos(
                egui::pos2(x, zero_y),
                egui::pos2(x + BAR_WIDTH, value_y),
            );
            painter.rect_filled(bar, 0.0, (self.color)(entry.value));

            if is_hovered {
                let anchor = if entry.value < 0.0 {
                    (Align2::CENTER_TOP, bar.max.y + 2.0)
                } else {
                    (Align2::CENTER_BOTTOM, bar.min.y - 2.0)
                };
                painter.text(
                    egui::pos2(bar.center().x, anchor.1),
                    anchor.0,
                    (self.value_text)(entry.value),
                    font.clone(),
                    text_color,
                );
            }

            painter.text(
                egui::pos2(x + BAR_WIDTH / 2.0, plot_bottom + 4.0),
                Align2::CENTER_TOP,
                truncate(&entry.name, 8),
                font.clone(),
                text_color,
            );
        }

        if hovered.is_some() {
            ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
        }

        if response.clicked() {
            hovered.map(|i| {
                tracing::debug!("Bar '{}' clicked", self.entries[i].name);
                i
            })
        } else {
            None
        }
    }
}

/// Position of `value` within `domain` as 0..=1, clamped
fn value_fraction(value: f64, domain: (f64, f64)) -> f32 {
    let (min, max) = domain;
    if max <= min {
        return 0.0;
    }
    (((value - min) / (max - min)).clamp(0.0, 1.0)) as f32
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() > max_chars {
        let mut short: String = text.chars().take(max_chars).collect();
        short.push('…');
        short
    } else {
        text.to_string()
    }
}
