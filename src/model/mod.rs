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

//! Wire types exchanged with the scoring service.
//!
//! Scores arrive as "goodness" values: `10.0` means no disparity was found.
//! Use [`crate::core::scoring::displayed_bias`] before coloring anything.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Upper bound of the 0-10 score scale
pub const MAX_SCORE: f64 = 10.0;

/// A scored dataset as returned by the service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    /// Server-assigned identity, also used in share links
    pub id: String,
    pub name: String,
    pub categories: Vec<Category>,
    pub score: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// One protected attribute (e.g. "race") and its traits
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub name: String,
    pub fpr_score: f64,
    pub traits: Vec<Trait>,
}

/// A single value within a category with its false positive rate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trait {
    pub name: String,
    pub fpr_mean: f64,
    pub count: u64,
}

/// Two datasets paired for side-by-side viewing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    pub dataset1: Dataset,
    pub dataset2: Dataset,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    #[error("dataset has an empty id")]
    EmptyId,

    #[error("dataset score {0} is outside 0-10")]
    ScoreOutOfRange(f64),

    #[error("category '{category}' has score {score} outside 0-10")]
    CategoryScoreOutOfRange { category: String, score: f64 },

    #[error("trait '{name}' in '{category}' has false positive rate {fpr} outside 0-1")]
    FprOutOfRange {
        category: String,
        name: String,
        fpr: f64,
    },
}

fn in_range(value: f64, max: f64) -> bool {
    value.is_finite() && (0.0..=max).contains(&value)
}

impl Dataset {
    /// Look up a category by name
    pub fn find_category(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// Check the score ranges the service promises
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.id.trim().is_empty() {
            return Err(ModelError::EmptyId);
        }
        if !in_range(self.score, MAX_SCORE) {
            return Err(ModelError::ScoreOutOfRange(self.score));
        }
        for category in &self.categories {
            if !in_range(category.fpr_score, MAX_SCORE) {
                return Err(ModelError::CategoryScoreOutOfRange {
                    category: category.name.clone(),
                    score: category.fpr_score,
                });
            }
            if let Some(t) = category.traits.iter().find(|t| !in_range(t.fpr_mean, 1.0)) {
                return Err(ModelError::FprOutOfRange {
                    category: category.name.clone(),
                    name: t.name.clone(),
                    fpr: t.fpr_mean,
                });
            }
        }
        Ok(())
    }
}

impl Category {
    /// Total number of samples across all traits
    pub fn total_count(&self) -> u64 {
        self.traits.iter().map(|t| t.count).sum()
    }
}

impl Comparison {
    pub const fn new(dataset1: Dataset, dataset2: Dataset) -> Self {
        Self { dataset1, dataset2 }
    }

    pub fn validate(&self) -> Result<(), ModelError> {
        self.dataset1.validate()?;
        self.dataset2.validate()
    }
}
