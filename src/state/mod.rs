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

//! Application state and its transitions.
//!
//! All navigation, selection and loading changes go through
//! [`AppState::reduce`]. The UI only reads the state and emits [`Event`]s.

use crate::core::DatasetRepository;
use crate::gateway::{LoadMessage, LoadOutcome, RequestTag};
use crate::model::{Comparison, Dataset};
use std::path::PathBuf;

pub const NO_FILE_MESSAGE: &str = "No file selected. Please choose a file to upload.";
pub const UPLOAD_FAILED_MESSAGE: &str = "File upload failed. Please try again.";
pub const SAVE_FAILED_MESSAGE: &str = "Could not create a comparison link. Please try again.";

/// Top-level page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Landing,
    Upload,
    Graph,
    Compare,
}

impl Page {
    pub const fn title(self) -> &'static str {
        match self {
            Self::Landing => "Welcome to Bias Visualizer",
            Self::Upload => "Upload Dataset",
            Self::Graph => "Data Visualization",
            Self::Compare => "Compare Datasets",
        }
    }
}

/// Which of the two datasets on the compare page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareSlot {
    First,
    Second,
}

/// Everything that can change the state
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    GetStarted,
    NewDataset,
    GoHome,
    OpenCompare,
    SelectDataset(String),
    SetCompareSlot {
        slot: CompareSlot,
        id: Option<String>,
    },
    FileChosen(PathBuf),
    /// Submit pressed without a chosen file
    UploadWithoutFile,
    RequestStarted(RequestTag),
    DatasetReceived {
        generation: u64,
        dataset: Dataset,
    },
    ComparisonReceived {
        generation: u64,
        comparison: Comparison,
    },
    ComparisonSaved {
        generation: u64,
        id: String,
    },
    LookupMissed {
        generation: u64,
    },
    RequestFailed {
        generation: u64,
        tag: RequestTag,
        error: String,
    },
    OpenCategory(String),
    CloseCategory,
    OpenCategoryPicker,
    CloseCategoryPicker,
    ClearShareLink,
}

impl From<LoadMessage> for Event {
    fn from(msg: LoadMessage) -> Self {
        let generation = msg.generation;
        match msg.outcome {
            LoadOutcome::Dataset(dataset) => Self::DatasetReceived {
                generation,
                dataset,
            },
            LoadOutcome::Comparison(comparison) => Self::ComparisonReceived {
                generation,
                comparison,
            },
            LoadOutcome::ComparisonSaved(id) => Self::ComparisonSaved { generation, id },
            LoadOutcome::NotFound => Self::LookupMissed { generation },
            LoadOutcome::Failed { tag, error } => Self::RequestFailed {
                generation,
                tag,
                error,
            },
        }
    }
}

/// The whole application state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    page: Page,
    repository: DatasetRepository,
    selected: Option<String>,
    compare_first: Option<String>,
    compare_second: Option<String>,
    /// Request currently awaited, if any
    pending: Option<RequestTag>,
    /// Incremented for every started request; only the latest one is applied
    generation: u64,
    chosen_file: Option<PathBuf>,
    status: Option<String>,
    open_category: Option<String>,
    category_picker_open: bool,
    share_link_id: Option<String>,
}

impl AppState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn page(&self) -> Page {
        self.page
    }

    pub const fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    pub const fn pending(&self) -> Option<RequestTag> {
        self.pending
    }

    pub const fn generation(&self) -> u64 {
        self.generation
    }

    pub const fn repository(&self) -> &DatasetRepository {
        &self.repository
    }

    pub fn selected_dataset(&self) -> Option<&Dataset> {
        self.selected
            .as_deref()
            .and_then(|id| self.repository.find_by_id(id))
    }

    pub fn compare_dataset(&self, slot: CompareSlot) -> Option<&Dataset> {
        let id = match slot {
            CompareSlot::First => self.compare_first.as_deref(),
            CompareSlot::Second => self.compare_second.as_deref(),
        };
        id.and_then(|id| self.repository.find_by_id(id))
    }

    /// Both compare datasets, once both are picked
    pub fn compare_pair(&self) -> Option<(&Dataset, &Dataset)> {
        Some((
            self.compare_dataset(CompareSlot::First)?,
            self.compare_dataset(CompareSlot::Second)?,
        ))
    }

    pub fn chosen_file(&self) -> Option<&PathBuf> {
        self.chosen_file.as_ref()
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn open_category(&self) -> Option<&str> {
        self.open_category.as_deref()
    }

    pub const fn is_category_picker_open(&self) -> bool {
        self.category_picker_open
    }

    /// Id of a freshly saved comparison waiting to be copied
    pub fn share_link_id(&self) -> Option<&str> {
        self.share_link_id.as_deref()
    }

    pub const fn window_title(&self) -> &'static str {
        self.page.title()
    }

    /// Apply one event and return the next state
    #[must_use]
    pub fn reduce(mut self, event: Event) -> Self {
        tracing::debug!("{:?} <- {event:?}", self.page);
        match event {
            Event::GetStarted => {
                self.supersede();
                self.goto(Page::Upload);
            }
            Event::NewDataset => {
                self.supersede();
                self.goto(Page::Upload);
                self.selected = None;
                self.chosen_file = None;
                self.status = None;
            }
            Event::GoHome => {
                self.supersede();
                self.goto(Page::Landing);
            }
            Event::OpenCompare => {
                self.supersede();
                self.goto(Page::Compare);
            }
            Event::SelectDataset(id) => {
                if self.repository.contains(&id) {
                    self.supersede();
                    self.goto(Page::Graph);
                    self.selected = Some(id);
                } else {
                    tracing::warn!("Ignoring selection of unknown dataset {id}");
                }
            }
            Event::SetCompareSlot { slot, id } => {
                let id = id.filter(|id| self.repository.contains(id));
                self.open_category = None;
                match slot {
                    CompareSlot::First => self.compare_first = id,
                    CompareSlot::Second => self.compare_second = id,
                }
            }
            Event::FileChosen(path) => {
                self.chosen_file = Some(path);
                self.status = None;
            }
            Event::UploadWithoutFile => {
                self.status = Some(NO_FILE_MESSAGE.to_string());
            }
            Event::RequestStarted(tag) => {
                self.generation += 1;
                self.pending = Some(tag);
                if tag == RequestTag::Upload {
                    self.status = None;
                }
            }
            Event::DatasetReceived {
                generation,
                dataset,
            } => {
                if self.accept(generation) {
                    let id = dataset.id.clone();
                    tracing::info!("Showing dataset {} ({id})", dataset.name);
                    self.repository.append(dataset);
                    self.goto(Page::Graph);
                    self.selected = Some(id);
                    self.chosen_file = None;
                    self.status = None;
                }
            }
            Event::ComparisonReceived {
                generation,
                comparison,
            } => {
                if self.accept(generation) {
                    let Comparison { dataset1, dataset2 } = comparison;
                    self.compare_first = Some(dataset1.id.clone());
                    self.compare_second = Some(dataset2.id.clone());
                    self.repository.append(dataset1);
                    self.repository.append(dataset2);
                    self.goto(Page::Compare);
                }
            }
            Event::ComparisonSaved { generation, id } => {
                if self.accept(generation) {
                    self.share_link_id = Some(id);
                }
            }
            Event::LookupMissed { generation } => {
                if self.accept(generation) {
                    self.goto(Page::Landing);
                }
            }
            Event::RequestFailed {
                generation,
                tag,
                error,
            } => {
                if self.accept(generation) {
                    tracing::warn!("{tag:?} request failed: {error}");
                    match tag {
                        RequestTag::Upload => self.status = Some(UPLOAD_FAILED_MESSAGE.to_string()),
                        RequestTag::SaveComparison => {
                            self.status = Some(SAVE_FAILED_MESSAGE.to_string());
                        }
                        // Treated like a miss
                        RequestTag::ResolveLink => self.goto(Page::Landing),
                    }
                }
            }
            Event::OpenCategory(name) => {
                self.category_picker_open = false;
                self.open_category = Some(name);
            }
            Event::CloseCategory => self.open_category = None,
            Event::OpenCategoryPicker => self.category_picker_open = true,
            Event::CloseCategoryPicker => self.category_picker_open = false,
            Event::ClearShareLink => self.share_link_id = None,
        }
        self
    }

    /// Clear the loading flag if `generation` is the latest request.
    fn accept(&mut self, generation: u64) -> bool {
        if generation != self.generation || self.pending.is_none() {
            tracing::warn!(
                "Dropping stale response for request {generation} (current {})",
                self.generation
            );
            return false;
        }
        self.pending = None;
        true
    }

    /// Abandon the pending request so its answer no longer moves the user.
    fn supersede(&mut self) {
        if let Some(tag) = self.pending.take() {
            self.generation += 1;
            tracing::info!("{tag:?} request superseded by navigation");
        }
    }

    fn goto(&mut self, page: Page) {
        if self.page != page {
            self.open_category = None;
            self.category_picker_open = false;
        }
        self.page = page;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::{category, dataset};

    fn receive(state: AppState, ds: Dataset) -> AppState {
        let state = state.reduce(Event::RequestStarted(RequestTag::Upload));
        let generation = state.generation();
        state.reduce(Event::DatasetReceived {
            generation,
            dataset: ds,
        })
    }

    #[test]
    fn test_initial_state() {
        let state = AppState::new();
        assert_eq!(state.page(), Page::Landing);
        assert!(!state.is_loading());
        assert!(state.repository().is_empty());
        assert!(state.selected_dataset().is_none());
        assert_eq!(state.window_title(), "Welcome to Bias Visualizer");
    }

    #[test]
    fn test_get_started_goes_to_upload() {
        let state = AppState::new().reduce(Event::GetStarted);
        assert_eq!(state.page(), Page::Upload);
    }

    #[test]
    fn test_upload_success_selects_dataset() {
        let ds = dataset("d1", 4.0, vec![category("race", 5.0)]);
        let state = AppState::new()
            .reduce(Event::GetStarted)
            .reduce(Event::FileChosen("loans.csv".into()));

        let state = state.reduce(Event::RequestStarted(RequestTag::Upload));
        assert!(state.is_loading());
        assert_eq!(state.page(), Page::Upload);

        let generation = state.generation();
        let state = state.reduce(Event::DatasetReceived {
            generation,
            dataset: ds.clone(),
        });
        assert_eq!(state.page(), Page::Graph);
        assert_eq!(state.selected_dataset(), Some(&ds));
        assert!(!state.is_loading());
        assert!(state.chosen_file().is_none());
    }

    #[test]
    fn test_upload_failure_clears_loading_and_stays() {
        let state = AppState::new()
            .reduce(Event::GetStarted)
            .reduce(Event::FileChosen("bad.csv".into()))
            .reduce(Event::RequestStarted(RequestTag::Upload));
        assert!(state.is_loading());

        let generation = state.generation();
        let state = state.reduce(Event::RequestFailed {
            generation,
            tag: RequestTag::Upload,
            error: "500".to_string(),
        });
        assert!(!state.is_loading());
        assert_eq!(state.page(), Page::Upload);
        assert_eq!(state.status(), Some(UPLOAD_FAILED_MESSAGE));
        // The chosen file survives so the user can retry
        assert!(state.chosen_file().is_some());
    }

    #[test]
    fn test_submit_without_file() {
        let state = AppState::new()
            .reduce(Event::GetStarted)
            .reduce(Event::UploadWithoutFile);
        assert_eq!(state.status(), Some(NO_FILE_MESSAGE));
        assert!(!state.is_loading());

        let state = state.reduce(Event::FileChosen("x.csv".into()));
        assert_eq!(state.status(), None);
    }

    #[test]
    fn test_stale_response_is_ignored() {
        let first = dataset("first", 2.0, vec![]);
        let second = dataset("second", 3.0, vec![]);

        let state = AppState::new()
            .reduce(Event::GetStarted)
            .reduce(Event::RequestStarted(RequestTag::Upload));
        let old_generation = state.generation();
        let state = state.reduce(Event::RequestStarted(RequestTag::Upload));
        let new_generation = state.generation();
        assert_ne!(old_generation, new_generation);

        // The superseded upload answers first
        let state = state.reduce(Event::DatasetReceived {
            generation: old_generation,
            dataset: first,
        });
        assert!(state.is_loading());
        assert!(state.repository().is_empty());
        assert_eq!(state.page(), Page::Upload);

        let state = state.reduce(Event::DatasetReceived {
            generation: new_generation,
            dataset: second,
        });
        assert!(!state.is_loading());
        assert_eq!(state.selected_dataset().map(|d| d.id.as_str()), Some("second"));
        assert_eq!(state.repository().len(), 1);
    }

    #[test]
    fn test_duplicate_response_is_ignored() {
        let ds = dataset("d", 2.0, vec![]);
        let state = receive(AppState::new(), ds.clone());
        let generation = state.generation();
        let state = state.reduce(Event::GoHome).reduce(Event::DatasetReceived {
            generation,
            dataset: ds,
        });
        assert_eq!(state.page(), Page::Landing);
    }

    #[test]
    fn test_select_dataset() {
        let state = receive(AppState::new(), dataset("a", 2.0, vec![]));
        let state = receive(state, dataset("b", 3.0, vec![]));
        let state = state.reduce(Event::OpenCompare);

        let state = state.reduce(Event::SelectDataset("a".to_string()));
        assert_eq!(state.page(), Page::Graph);
        assert_eq!(state.selected_dataset().map(|d| d.id.as_str()), Some("a"));
    }

    #[test]
    fn test_select_unknown_dataset_is_noop() {
        let state = receive(AppState::new(), dataset("a", 2.0, vec![]))
            .reduce(Event::OpenCompare);
        let before = state.clone();
        let after = state.reduce(Event::SelectDataset("ghost".to_string()));
        assert_eq!(after, before);
    }

    #[test]
    fn test_navigation_from_anywhere() {
        let state = receive(AppState::new(), dataset("a", 2.0, vec![]));
        assert_eq!(state.clone().reduce(Event::GoHome).page(), Page::Landing);
        assert_eq!(state.clone().reduce(Event::OpenCompare).page(), Page::Compare);

        let state = state.reduce(Event::NewDataset);
        assert_eq!(state.page(), Page::Upload);
        assert!(state.selected_dataset().is_none());
    }

    #[test]
    fn test_compare_slots() {
        let state = receive(AppState::new(), dataset("a", 3.0, vec![]));
        let state = receive(state, dataset("b", 5.0, vec![]))
            .reduce(Event::OpenCompare)
            .reduce(Event::SetCompareSlot {
                slot: CompareSlot::First,
                id: Some("a".to_string()),
            });
        assert!(state.compare_pair().is_none());

        let state = state.reduce(Event::SetCompareSlot {
            slot: CompareSlot::Second,
            id: Some("b".to_string()),
        });
        let (first, second) = state.compare_pair().unwrap();
        assert_eq!((first.id.as_str(), second.id.as_str()), ("a", "b"));

        let state = state.reduce(Event::SetCompareSlot {
            slot: CompareSlot::Second,
            id: Some("ghost".to_string()),
        });
        assert!(state.compare_dataset(CompareSlot::Second).is_none());
    }

    #[test]
    fn test_comparison_link_fills_slots() {
        let comparison = Comparison::new(dataset("x", 3.0, vec![]), dataset("y", 5.0, vec![]));
        let state = AppState::new().reduce(Event::RequestStarted(RequestTag::ResolveLink));
        let generation = state.generation();
        let state = state.reduce(Event::ComparisonReceived {
            generation,
            comparison,
        });

        assert_eq!(state.page(), Page::Compare);
        assert!(!state.is_loading());
        assert_eq!(state.repository().len(), 2);
        let (first, second) = state.compare_pair().unwrap();
        assert_eq!((first.id.as_str(), second.id.as_str()), ("x", "y"));
    }

    #[test]
    fn test_lookup_miss_lands_on_landing() {
        let state = AppState::new().reduce(Event::RequestStarted(RequestTag::ResolveLink));
        assert!(state.is_loading());
        let generation = state.generation();
        let state = state.reduce(Event::LookupMissed { generation });
        assert_eq!(state.page(), Page::Landing);
        assert!(!state.is_loading());
    }

    #[test]
    fn test_comparison_saved() {
        let state = AppState::new().reduce(Event::RequestStarted(RequestTag::SaveComparison));
        let generation = state.generation();
        let state = state.reduce(Event::ComparisonSaved {
            generation,
            id: "c-9".to_string(),
        });
        assert!(!state.is_loading());
        assert_eq!(state.share_link_id(), Some("c-9"));
        assert!(state.reduce(Event::ClearShareLink).share_link_id().is_none());
    }

    #[test]
    fn test_category_modals() {
        let state = receive(
            AppState::new(),
            dataset("a", 2.0, vec![category("race", 4.0)]),
        )
        .reduce(Event::OpenCategoryPicker);
        assert!(state.is_category_picker_open());

        let state = state.reduce(Event::OpenCategory("race".to_string()));
        assert!(!state.is_category_picker_open());
        assert_eq!(state.open_category(), Some("race"));

        // Leaving the page closes the modal
        let state = state.reduce(Event::GoHome);
        assert_eq!(state.open_category(), None);
    }

    #[test]
    fn test_navigating_away_drops_pending_upload() {
        let state = AppState::new()
            .reduce(Event::GetStarted)
            .reduce(Event::FileChosen("loans.csv".into()))
            .reduce(Event::RequestStarted(RequestTag::Upload));
        let generation = state.generation();

        let state = state.reduce(Event::GoHome);
        assert_eq!(state.page(), Page::Landing);
        assert!(!state.is_loading());

        let state = state.reduce(Event::DatasetReceived {
            generation,
            dataset: dataset("late", 4.0, vec![]),
        });
        assert_eq!(state.page(), Page::Landing);
        assert!(state.repository().is_empty());
        assert!(state.selected_dataset().is_none());
    }

    #[test]
    fn test_selecting_dataset_drops_pending_link() {
        let first = dataset("d1", 4.0, vec![]);
        let state = receive(AppState::new(), first.clone())
            .reduce(Event::RequestStarted(RequestTag::ResolveLink));
        let generation = state.generation();

        let state = state.reduce(Event::OpenCompare).reduce(Event::SelectDataset("d1".into()));
        let state = state.reduce(Event::LookupMissed { generation });
        assert_eq!(state.page(), Page::Graph);
        assert_eq!(state.selected_dataset(), Some(&first));
    }

    #[test]
    fn test_navigation_without_pending_keeps_generation() {
        let state = AppState::new().reduce(Event::RequestStarted(RequestTag::Upload));
        let generation = state.generation();
        let state = state.reduce(Event::RequestFailed {
            generation,
            tag: RequestTag::Upload,
            error: "timeout".to_string(),
        });
        let state = state.reduce(Event::GoHome).reduce(Event::OpenCompare);
        assert_eq!(state.generation(), generation);
    }

    #[test]
    fn test_failed_link_resolution_lands_on_landing() {
        let state = AppState::new()
            .reduce(Event::GetStarted)
            .reduce(Event::RequestStarted(RequestTag::ResolveLink));
        let generation = state.generation();
        let state = state.reduce(Event::RequestFailed {
            generation,
            tag: RequestTag::ResolveLink,
            error: "connection refused".to_string(),
        });
        assert_eq!(state.page(), Page::Landing);
        assert!(!state.is_loading());
        assert!(state.status().is_none());
    }

    #[test]
    fn test_event_from_load_message() {
        let msg = LoadMessage {
            generation: 3,
            outcome: LoadOutcome::NotFound,
        };
        assert_eq!(Event::from(msg), Event::LookupMissed { generation: 3 });
    }

    #[test]
    fn test_selection_always_in_repository() {
        let events = vec![
            Event::SelectDataset("nope".to_string()),
            Event::SetCompareSlot {
                slot: CompareSlot::First,
                id: Some("nope".to_string()),
            },
            Event::GetStarted,
            Event::OpenCompare,
            Event::GoHome,
        ];
        let mut state = AppState::new();
        for event in events {
            state = state.reduce(event);
            assert!(state.selected_dataset().is_none());
            assert!(state.compare_dataset(CompareSlot::First).is_none());
        }
    }
}
