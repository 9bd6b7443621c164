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

//! Runs service requests off the UI thread.
//!
//! Every request gets its own background thread. All results go through
//! one channel, each tagged with the generation the state machine handed
//! out when the request started, so late answers to superseded requests
//! can be recognized and dropped.

use super::{resolve_link, BiasApi, Resolution};
use crate::model::{Comparison, Dataset};
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Arc;
use std::thread;
use std::time::Instant;

/// A request to run against the service
#[derive(Debug, Clone, PartialEq)]
pub enum RequestKind {
    /// Upload a file for scoring
    Upload(PathBuf),
    /// Resolve an id from a share link
    ResolveLink(String),
    /// Persist a comparison for sharing
    SaveComparison(Comparison),
}

/// Payload-free tag of a [`RequestKind`], kept in the application state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestTag {
    Upload,
    ResolveLink,
    SaveComparison,
}

impl RequestKind {
    pub const fn tag(&self) -> RequestTag {
        match self {
            Self::Upload(_) => RequestTag::Upload,
            Self::ResolveLink(_) => RequestTag::ResolveLink,
            Self::SaveComparison(_) => RequestTag::SaveComparison,
        }
    }
}

/// Result of a finished request
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    Dataset(Dataset),
    Comparison(Comparison),
    ComparisonSaved(String),
    NotFound,
    Failed { tag: RequestTag, error: String },
}

/// Message sent from a request thread back to the UI
#[derive(Debug, Clone, PartialEq)]
pub struct LoadMessage {
    pub generation: u64,
    pub outcome: LoadOutcome,
}

/// Spawns requests and funnels their results into a single receiver
pub struct RequestLoader {
    api: Arc<dyn BiasApi>,
    tx: Sender<LoadMessage>,
    ctx: Option<egui::Context>,
}

impl RequestLoader {
    /// Create a loader and the receiver its results arrive on
    pub fn new(api: Arc<dyn BiasApi>) -> (Self, Receiver<LoadMessage>) {
        let (tx, rx) = channel();
        (Self { api, tx, ctx: None }, rx)
    }

    /// Wake the UI whenever a result is sent
    #[must_use]
    pub fn with_repaint(mut self, ctx: egui::Context) -> Self {
        self.ctx = Some(ctx);
        self
    }

    /// Start a request in the background
    pub fn spawn(&self, generation: u64, kind: RequestKind) {
        let api = Arc::clone(&self.api);
        let tx = self.tx.clone();
        let ctx = self.ctx.clone();

        thread::spawn(move || {
            let outcome = Self::run(api.as_ref(), kind);
            if tx.send(LoadMessage { generation, outcome }).is_err() {
                tracing::debug!("Receiver gone, dropping result of request {generation}");
            }
            if let Some(ctx) = ctx {
                ctx.request_repaint();
            }
        });
    }

    /// Execute a request synchronously
    pub fn run(api: &dyn BiasApi, kind: RequestKind) -> LoadOutcome {
        let start = Instant::now();
        let tag = kind.tag();
        let outcome = match kind {
            RequestKind::Upload(path) => match api.generate_dataset(&path) {
                Ok(dataset) => LoadOutcome::Dataset(dataset),
                Err(e) => {
                    tracing::error!("Upload of {} failed: {e}", path.display());
                    LoadOutcome::Failed {
                        tag,
                        error: e.to_string(),
                    }
                }
            },
            RequestKind::ResolveLink(id) => match resolve_link(api, &id) {
                Resolution::Dataset(dataset) => LoadOutcome::Dataset(dataset),
                Resolution::Comparison(comparison) => LoadOutcome::Comparison(comparison),
                Resolution::NotFound => LoadOutcome::NotFound,
            },
            RequestKind::SaveComparison(comparison) => match api.save_comparison(&comparison) {
                Ok(id) => LoadOutcome::ComparisonSaved(id),
                Err(e) => {
                    tracing::error!("Saving comparison failed: {e}");
                    LoadOutcome::Failed {
                        tag,
                        error: e.to_string(),
                    }
                }
            },
        };
        tracing::debug!("{tag:?} request finished in {:?}", start.elapsed());
        outcome
    }
}
