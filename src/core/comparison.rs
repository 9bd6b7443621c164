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

//! Bias deltas between two datasets.
//!
//! Sign convention everywhere: negative means bias went down from the
//! first dataset to the second.

use crate::core::scoring::displayed_bias;
use crate::model::Dataset;
use thiserror::Error;

/// Fixed value domain of the per-category delta chart
pub const DELTA_DOMAIN: (f64, f64) = (-10.0, 10.0);

/// Differences smaller than this are reported as unchanged
const UNCHANGED_EPSILON: f64 = 1e-9;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComparisonError {
    #[error("incompatible datasets: category '{category}' is missing from '{dataset}'")]
    MissingCategory { category: String, dataset: String },
}

/// Direction of change between two datasets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BiasTrend {
    Decreased,
    Unchanged,
    Increased,
}

impl BiasTrend {
    pub fn from_difference(difference: f64) -> Self {
        if difference.abs() < UNCHANGED_EPSILON {
            Self::Unchanged
        } else if difference < 0.0 {
            Self::Decreased
        } else {
            Self::Increased
        }
    }
}

/// One bar of the delta chart
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryDelta {
    pub name: String,
    pub value: f64,
}

/// Change in overall bias from `a` to `b`.
pub fn overall_difference(a: &Dataset, b: &Dataset) -> f64 {
    displayed_bias(b.score) - displayed_bias(a.score)
}

/// Human readable summary, e.g. "decreased by 2.0/10"
pub fn trend_label(a: &Dataset, b: &Dataset) -> String {
    let difference = overall_difference(a, b);
    match BiasTrend::from_difference(difference) {
        BiasTrend::Decreased => format!("decreased by {:.1}/10", difference.abs()),
        BiasTrend::Unchanged => "unchanged".to_string(),
        BiasTrend::Increased => format!("increased by {:.1}/10", difference.abs()),
    }
}

/// Per-category change in bias, ordered like `a`'s categories.
///
/// Every category of `a` must exist in `b`.
pub fn category_deltas(a: &Dataset, b: &Dataset) -> Result<Vec<CategoryDelta>, ComparisonError> {
    a.categories
        .iter()
        .map(|category| {
            let other = b
                .find_category(&category.name)
                .ok_or_else(|| missing(&category.name, b))?;
            Ok(CategoryDelta {
                name: category.name.clone(),
                value: displayed_bias(other.fpr_score) - displayed_bias(category.fpr_score),
            })
        })
        .collect()
}

/// Raw scores of one category in both datasets, for the drill-down chart
pub fn category_scores(
    a: &Dataset,
    b: &Dataset,
    name: &str,
) -> Result<(f64, f64), ComparisonError> {
    let first = a.find_category(name).ok_or_else(|| missing(name, a))?;
    let second = b.find_category(name).ok_or_else(|| missing(name, b))?;
    Ok((first.fpr_score, second.fpr_score))
}

fn missing(category: &str, dataset: &Dataset) -> ComparisonError {
    ComparisonError::MissingCategory {
        category: category.to_string(),
        dataset: dataset.name.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::{category, dataset};

    #[test]
    fn test_overall_difference_equals_score_difference() {
        let pairs = [(3.0, 5.0), (5.0, 5.0), (5.0, 3.0), (0.0, 10.0), (7.5, 1.25)];
        for (sa, sb) in pairs {
            let a = dataset("a", sa, vec![]);
            let b = dataset("b", sb, vec![]);
            assert!((overall_difference(&a, &b) - (sa - sb)).abs() < 1e-12);
            assert_eq!(overall_difference(&a, &a), 0.0);
        }
    }

    #[test]
    fn test_decrease_is_green_direction() {
        let a = dataset("a", 3.0, vec![]);
        let b = dataset("b", 5.0, vec![]);
        let d = overall_difference(&a, &b);
        assert_eq!(d, -2.0);
        assert_eq!(BiasTrend::from_difference(d), BiasTrend::Decreased);
        assert_eq!(trend_label(&a, &b), "decreased by 2.0/10");
    }

    #[test]
    fn test_equal_scores_are_unchanged() {
        let a = dataset("a", 5.0, vec![]);
        let b = dataset("b", 5.0, vec![]);
        assert_eq!(overall_difference(&a, &b), 0.0);
        assert_eq!(BiasTrend::from_difference(0.0), BiasTrend::Unchanged);
        assert_eq!(trend_label(&a, &b), "unchanged");
    }

    #[test]
    fn test_increase_is_red_direction() {
        let a = dataset("a", 5.0, vec![]);
        let b = dataset("b", 3.0, vec![]);
        let d = overall_difference(&a, &b);
        assert_eq!(d, 2.0);
        assert_eq!(BiasTrend::from_difference(d), BiasTrend::Increased);
        assert_eq!(trend_label(&a, &b), "increased by 2.0/10");
    }

    #[test]
    fn test_float_noise_counts_as_unchanged() {
        assert_eq!(
            BiasTrend::from_difference((0.1 + 0.2) - 0.3),
            BiasTrend::Unchanged
        );
    }

    #[test]
    fn test_category_deltas_follow_first_dataset_order() {
        let a = dataset(
            "a",
            5.0,
            vec![category("race", 4.0), category("age", 8.0), category("sex", 5.0)],
        );
        let b = dataset(
            "b",
            5.0,
            vec![category("sex", 5.0), category("race", 6.0), category("age", 7.0)],
        );

        let deltas = category_deltas(&a, &b).unwrap();
        let names: Vec<&str> = deltas.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["race", "age", "sex"]);
        assert_eq!(deltas[0].value, -2.0);
        assert_eq!(deltas[1].value, 1.0);
        assert_eq!(deltas[2].value, 0.0);
    }

    #[test]
    fn test_category_delta_sign_matches_overall() {
        // Same movement at both levels must produce the same sign
        let a = dataset("a", 3.0, vec![category("race", 3.0)]);
        let b = dataset("b", 5.0, vec![category("race", 5.0)]);
        let overall = overall_difference(&a, &b);
        let delta = category_deltas(&a, &b).unwrap()[0].value;
        assert_eq!(overall, delta);
    }

    #[test]
    fn test_missing_category_is_an_error() {
        let a = dataset("a", 5.0, vec![category("race", 4.0), category("age", 4.0)]);
        let b = dataset("b", 5.0, vec![category("race", 4.0)]);

        let err = category_deltas(&a, &b).unwrap_err();
        assert_eq!(
            err,
            ComparisonError::MissingCategory {
                category: "age".to_string(),
                dataset: "b.csv".to_string(),
            }
        );
        assert!(err.to_string().starts_with("incompatible datasets"));
    }

    #[test]
    fn test_extra_categories_in_second_dataset_are_ignored() {
        let a = dataset("a", 5.0, vec![category("race", 4.0)]);
        let b = dataset("b", 5.0, vec![category("age", 1.0), category("race", 4.5)]);
        let deltas = category_deltas(&a, &b).unwrap();
        assert_eq!(deltas.len(), 1);
        assert_eq!(deltas[0].value, -0.5);
    }

    #[test]
    fn test_category_scores() {
        let a = dataset("a", 5.0, vec![category("race", 4.0)]);
        let b = dataset("b", 5.0, vec![category("race", 6.5)]);
        assert_eq!(category_scores(&a, &b, "race"), Ok((4.0, 6.5)));
        assert!(category_scores(&a, &b, "age").is_err());
    }
}
