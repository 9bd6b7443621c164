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

//! Mapping from 0-10 scores to colors and warning glyphs.

use crate::model::MAX_SCORE;

/// Scores below this are green
pub const LOW_THRESHOLD: f64 = 3.3;

/// Scores at or above this are red
pub const HIGH_THRESHOLD: f64 = 6.6;

/// Three-way color bucket for a bias value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorBucket {
    Green,
    Yellow,
    Red,
}

/// Bucket a bias value: lower bias is green.
pub fn color_bucket(bias: f64) -> ColorBucket {
    if bias < LOW_THRESHOLD {
        ColorBucket::Green
    } else if bias < HIGH_THRESHOLD {
        ColorBucket::Yellow
    } else {
        ColorBucket::Red
    }
}

/// Convert a service score (10 = fair) into the bias shown to the user (10 = most biased).
pub fn displayed_bias(goodness: f64) -> f64 {
    MAX_SCORE - goodness
}

/// Warning marker for a raw service score. Low scores mean more bias, so they get more marks.
pub fn warning_glyph(score: f64) -> &'static str {
    if score < LOW_THRESHOLD {
        "!!"
    } else if score < HIGH_THRESHOLD {
        "!"
    } else {
        ""
    }
}

/// Format a value on the 0-10 scale, e.g. `4.2/10.0`
pub fn format_score(value: f64) -> String {
    format!("{value:.1}/{MAX_SCORE:.1}")
}
