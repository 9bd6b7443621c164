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

pub mod bar_chart;
pub mod bias_bar;

pub use bar_chart::{BarChart, BarEntry};
pub use bias_bar::BiasBar;

use crate::core::{BiasTrend, ColorBucket};
use egui::Color32;

pub const GREEN: Color32 = Color32::from_rgb(34, 197, 94);
pub const YELLOW: Color32 = Color32::from_rgb(253, 224, 71);
pub const RED: Color32 = Color32::from_rgb(239, 68, 68);
pub const BLUE: Color32 = Color32::from_rgb(59, 130, 246);

pub const fn bucket_color(bucket: ColorBucket) -> Color32 {
    match bucket {
        ColorBucket::Green => GREEN,
        ColorBucket::Yellow => YELLOW,
        ColorBucket::Red => RED,
    }
}

pub const fn trend_color(trend: BiasTrend) -> Color32 {
    match trend {
        BiasTrend::Decreased => GREEN,
        BiasTrend::Unchanged => YELLOW,
        BiasTrend::Increased => RED,
    }
}

/// Capitalize the first letter of a category name for headings
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("race"), "Race");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("äge"), "Äge");
    }

    #[test]
    fn test_trend_colors() {
        assert_eq!(trend_color(BiasTrend::Decreased), GREEN);
        assert_eq!(trend_color(BiasTrend::Unchanged), YELLOW);
        assert_eq!(trend_color(BiasTrend::Increased), RED);
    }
}
