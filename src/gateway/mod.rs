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

//! Client for the bias-scoring service.
//!
//! The service computes all scores. This module only moves files and ids
//! over HTTP and decodes what comes back.

pub mod loader;

use crate::model::{Comparison, Dataset, ModelError};
use reqwest::blocking::{multipart, Client};
use serde::Serialize;
use serde_json::Value;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

pub use loader::{LoadMessage, LoadOutcome, RequestKind, RequestLoader, RequestTag};

/// Body the service sends when nothing matches the requested id
const MISSING_SENTINEL: &str = "Missing";

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("server responded with status {0}")]
    Status(reqwest::StatusCode),

    #[error("could not decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("unexpected response: {0}")]
    Unexpected(String),

    #[error("invalid dataset: {0}")]
    InvalidDataset(#[from] ModelError),

    #[error("could not read upload file: {0}")]
    Io(#[from] std::io::Error),
}

/// Operations offered by the scoring service
pub trait BiasApi: Send + Sync {
    /// Upload a file and receive its scored dataset
    fn generate_dataset(&self, path: &Path) -> Result<Dataset, GatewayError>;

    /// Fetch a previously scored dataset, `None` if the id is unknown
    fn get_dataset(&self, id: &str) -> Result<Option<Dataset>, GatewayError>;

    /// Fetch a saved comparison, `None` if the id is unknown
    fn get_comparison(&self, id: &str) -> Result<Option<Comparison>, GatewayError>;

    /// Store a comparison and return its new id
    fn save_comparison(&self, comparison: &Comparison) -> Result<String, GatewayError>;
}

/// What a share-link id turned out to be
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    Dataset(Dataset),
    Comparison(Comparison),
    NotFound,
}

/// Resolve an id from a share link: dataset first, then comparison.
///
/// A failed lookup is logged and treated like a miss so the next step still runs.
pub fn resolve_link(api: &dyn BiasApi, id: &str) -> Resolution {
    match api.get_dataset(id) {
        Ok(Some(dataset)) => return Resolution::Dataset(dataset),
        Ok(None) => tracing::debug!("No dataset with id {id}, trying comparisons"),
        Err(e) => tracing::warn!("Dataset lookup for {id} failed: {e}"),
    }

    match api.get_comparison(id) {
        Ok(Some(comparison)) => Resolution::Comparison(comparison),
        Ok(None) => {
            tracing::info!("Nothing found for id {id}");
            Resolution::NotFound
        }
        Err(e) => {
            tracing::warn!("Comparison lookup for {id} failed: {e}");
            Resolution::NotFound
        }
    }
}

/// True for bodies that mean "no such id"
fn is_absent(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty() || s == MISSING_SENTINEL,
        Value::Bool(_) | Value::Number(_) | Value::Array(_) | Value::Object(_) => false,
    }
}

fn parse_body(body: &str) -> Result<Option<Value>, GatewayError> {
    let body = body.trim();
    if body.is_empty() || body == MISSING_SENTINEL {
        return Ok(None);
    }
    let value: Value = serde_json::from_str(body)?;
    Ok((!is_absent(&value)).then_some(value))
}

/// Decode a `getDataset` or `generateDataset` body
pub fn decode_dataset(body: &str) -> Result<Option<Dataset>, GatewayError> {
    let Some(value) = parse_body(body)? else {
        return Ok(None);
    };
    let dataset: Dataset = serde_json::from_value(value)?;
    dataset.validate()?;
    Ok(Some(dataset))
}

/// Decode a `getComparison` body.
///
/// The service stores the comparison as the JSON text it was saved with,
/// so the body is usually a JSON string holding another JSON document.
pub fn decode_comparison(body: &str) -> Result<Option<Comparison>, GatewayError> {
    let Some(value) = parse_body(body)? else {
        return Ok(None);
    };
    let comparison: Comparison = match value {
        Value::String(inner) => serde_json::from_str(&inner)?,
        other => serde_json::from_value(other)?,
    };
    comparison.validate()?;
    Ok(Some(comparison))
}

/// Decode the id returned by `saveComparison`, quoted or bare
pub fn decode_saved_id(body: &str) -> Result<String, GatewayError> {
    let body = body.trim();
    let id = match serde_json::from_str::<Value>(body) {
        Ok(Value::String(s)) => s,
        Ok(other) => return Err(GatewayError::Unexpected(other.to_string())),
        Err(_) => body.to_string(),
    };
    if id.is_empty() {
        return Err(GatewayError::Unexpected("empty comparison id".to_string()));
    }
    Ok(id)
}

#[derive(Serialize)]
struct SaveComparisonBody {
    data: String,
}

/// [`BiasApi`] over HTTP
pub struct HttpGateway {
    client: Client,
    base_url: String,
}

impl HttpGateway {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, GatewayError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/api/{path}", self.base_url)
    }

    fn read_body(response: reqwest::blocking::Response) -> Result<String, GatewayError> {
        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::Status(status));
        }
        Ok(response.text()?)
    }

    fn get_by_id(&self, path: &str, id: &str) -> Result<String, GatewayError> {
        let url = self.endpoint(path);
        tracing::debug!("GET {url} id={id}");
        let response = self.client.get(&url).query(&[("id", id)]).send()?;
        Self::read_body(response)
    }
}

impl BiasApi for HttpGateway {
    fn generate_dataset(&self, path: &Path) -> Result<Dataset, GatewayError> {
        let url = self.endpoint("generateDataset");
        tracing::info!("Uploading {} to {url}", path.display());

        let form = multipart::Form::new().file("file", path)?;
        let response = self.client.post(&url).multipart(form).send()?;
        let body = Self::read_body(response)?;

        let dataset = decode_dataset(&body)?
            .ok_or_else(|| GatewayError::Unexpected("empty dataset in upload response".into()))?;
        tracing::info!(
            "Received dataset {} ({}) with {} categories",
            dataset.name,
            dataset.id,
            dataset.categories.len()
        );
        Ok(dataset)
    }

    fn get_dataset(&self, id: &str) -> Result<Option<Dataset>, GatewayError> {
        let body = self.get_by_id("getDataset", id)?;
        decode_dataset(&body)
    }

    fn get_comparison(&self, id: &str) -> Result<Option<Comparison>, GatewayError> {
        let body = self.get_by_id("getComparison", id)?;
        decode_comparison(&body)
    }

    fn save_comparison(&self, comparison: &Comparison) -> Result<String, GatewayError> {
        let url = self.endpoint("saveComparison");
        let payload = SaveComparisonBody {
            data: serde_json::to_string(comparison)?,
        };
        tracing::debug!("POST {url}");
        let response = self.client.post(&url).json(&payload).send()?;
        let id = decode_saved_id(&Self::read_body(response)?)?;
        tracing::info!("Saved comparison as {id}");
        Ok(id)
    }
}

#[cfg(test)]
pub(crate) mod fake {
    use super::{BiasApi, GatewayError};
    use crate::model::{Comparison, Dataset};
    use std::collections::HashMap;
    use std::path::Path;
    use std::sync::Mutex;

    /// In-memory service used by tests
    #[derive(Default)]
    pub struct FakeApi {
        pub datasets: HashMap<String, Dataset>,
        pub comparisons: HashMap<String, Comparison>,
        pub upload_result: Option<Dataset>,
        pub fail_dataset_lookup: bool,
        pub saved: Mutex<Vec<Comparison>>,
    }

    impl BiasApi for FakeApi {
        fn generate_dataset(&self, _path: &Path) -> Result<Dataset, GatewayError> {
            self.upload_result
                .clone()
                .ok_or_else(|| GatewayError::Unexpected("upload rejected".to_string()))
        }

        fn get_dataset(&self, id: &str) -> Result<Option<Dataset>, GatewayError> {
            if self.fail_dataset_lookup {
                return Err(GatewayError::Unexpected("connection reset".to_string()));
            }
            Ok(self.datasets.get(id).cloned())
        }

        fn get_comparison(&self, id: &str) -> Result<Option<Comparison>, GatewayError> {
            Ok(self.comparisons.get(id).cloned())
        }

        fn save_comparison(&self, comparison: &Comparison) -> Result<String, GatewayError> {
            let mut saved = self
                .saved
                .lock()
                .map_err(|_| GatewayError::Unexpected("poisoned".to_string()))?;
            saved.push(comparison.clone());
            Ok(format!("cmp-{}", saved.len()))
        }
    }
}
