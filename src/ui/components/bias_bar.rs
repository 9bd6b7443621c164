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

use crate::core::scoring::{color_bucket, format_score};
use crate::model::MAX_SCORE;
use egui::{Sense, Stroke, StrokeKind, Ui};

/// Horizontal "Low ... High" bar filled up to a bias value
pub struct BiasBar {
    bias: f64,
}

impl BiasBar {
    pub const fn new(bias: f64) -> Self {
        Self { bias }
    }

    pub fn show(&self, ui: &mut Ui) {
        let fraction = (self.bias / MAX_SCORE).clamp(0.0, 1.0) as f32;
        let fill = super::bucket_color(color_bucket(self.bias));

        ui.horizontal(|ui| {
            ui.label("Low");
            ui.vertical(|ui| {
                let (response, painter) =
                    ui.allocate_painter(egui::vec2(320.0, 28.0), Sense::hover());
                let rect = response.rect;

                let filled = egui::Rect::from_min_size(
                    rect.min,
                    egui::vec2(rect.width() * fraction, rect.height()),
                );
                painter.rect_filled(filled, 4.0, fill);
                painter.rect_stroke(
                    rect,
                    4.0,
                    Stroke::new(2.0, ui.visuals().text_color()),
                    StrokeKind::Inside,
                );

                response.on_hover_text(format!(
                    "Bias value is {:.1} out of {MAX_SCORE:.0}",
                    self.bias
                ));
                ui.label(egui::RichText::new(format_score(self.bias)).small());
            });
            ui.label("High");
        });
    }
}
