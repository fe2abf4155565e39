// Copyright 2025 Govsim Maintainers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use serde_json::Value;
use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

/// Simulation parameters, as found in a parameters file: a flat JSON object mapping parameter
/// keys to values. Only the keys a component asks for are ever decoded.
#[derive(Debug, Clone, Default, PartialEq, serde::Deserialize)]
#[serde(transparent)]
pub struct AppParams(BTreeMap<String, Value>);

impl AppParams {
    pub fn from_json(json: &str) -> Result<Self, ParamsError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: &Path) -> Result<Self, ParamsError> {
        let json = fs::read_to_string(path).map_err(|source| ParamsError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.0.insert(key.into(), value);
    }

    /// The weight configured under `key`, or `default` when the key is absent.
    pub fn weight(&self, key: &str, default: u32) -> Result<u32, ParamsError> {
        match self.0.get(key) {
            None => Ok(default),
            Some(value) => value
                .as_u64()
                .and_then(|weight| u32::try_from(weight).ok())
                .ok_or_else(|| ParamsError::InvalidWeight {
                    key: key.to_string(),
                    value: value.clone(),
                }),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ParamsError {
    #[error("unable to read parameters file {path}: {source}")]
    Unreadable {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("malformed parameters: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("invalid weight for {key}: {value}")]
    InvalidWeight { key: String, value: Value },
}
