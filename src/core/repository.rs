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

//! In-memory collection of every dataset received during the session.

use crate::model::Dataset;
use indexmap::IndexMap;

/// Datasets keyed by id, iterated in the order they first arrived.
///
/// Nothing is ever evicted. Appending an id that is already present
/// replaces the stored dataset but keeps its position, so pickers never
/// show the same dataset twice.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DatasetRepository {
    datasets: IndexMap<String, Dataset>,
}

impl DatasetRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a dataset. Returns true if its id was not present before.
    pub fn append(&mut self, dataset: Dataset) -> bool {
        let is_new = !self.datasets.contains_key(&dataset.id);
        if !is_new {
            tracing::debug!("Replacing dataset {} already in repository", dataset.id);
        }
        self.datasets.insert(dataset.id.clone(), dataset);
        is_new
    }

    /// All datasets in insertion order
    pub fn list(&self) -> impl Iterator<Item = &Dataset> {
        self.datasets.values()
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Dataset> {
        self.datasets.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.datasets.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.datasets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.datasets.is_empty()
    }
}
