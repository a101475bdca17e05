// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! The JSON input record.
//!
//! ```json
//! {
//!   "keys": { "n": 4, "k": 3 },
//!   "1": { "base": "10", "value": "4" },
//!   "2": { "base": "2", "value": "111" }
//! }
//! ```
//!
//! Counts and bases may be JSON numbers or numeric strings. Entries are
//! keyed by the decimal form of their index and any of them may be absent.

use crate::errors::SolverError;
use num_bigint::BigInt;
use polyroot_radix::{Radix, RadixError};
use serde::de::{self, Deserializer, Unexpected};
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(serde_json::Number),
    Text(String),
}

fn lenient_integer<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: std::str::FromStr,
{
    let text = match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(number) => number.to_string(),
        NumberOrString::Text(text) => text,
    };
    text.trim()
        .parse()
        .map_err(|_| de::Error::invalid_value(Unexpected::Str(&text), &"an integer"))
}

fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(number) => number.to_string(),
        NumberOrString::Text(text) => text,
    })
}

/// The `keys` object: how many roots exist and the threshold `k`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Keys {
    #[serde(deserialize_with = "lenient_integer")]
    pub n: u64,
    #[serde(deserialize_with = "lenient_integer")]
    pub k: u64,
}

/// One root written as a digit string in some base.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RootEntry {
    #[serde(deserialize_with = "lenient_integer")]
    pub base: i64,
    #[serde(deserialize_with = "lenient_text")]
    pub value: String,
}

impl RootEntry {
    pub fn new(base: i64, value: impl Into<String>) -> Self {
        Self {
            base,
            value: value.into(),
        }
    }

    /// Parses the value in its base.
    pub fn parse(&self) -> Result<BigInt, RadixError> {
        Radix::try_from(self.base)?.parse(&self.value)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct InputRecord {
    pub keys: Keys,
    /// Every other top-level member. Only `"1"..="n"` are ever decoded.
    #[serde(flatten)]
    entries: BTreeMap<String, Value>,
}

impl InputRecord {
    pub fn new(n: u64, k: u64) -> Self {
        Self {
            keys: Keys { n, k },
            entries: BTreeMap::new(),
        }
    }

    pub fn with_root(mut self, index: u64, entry: RootEntry) -> Self {
        self.entries.insert(
            index.to_string(),
            serde_json::json!({ "base": entry.base, "value": entry.value }),
        );
        self
    }

    pub fn from_json_str(json: &str) -> Result<Self, SolverError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, SolverError> {
        let raw = fs::read_to_string(path).map_err(|source| SolverError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    /// Entries with an index in `1..=n`, in ascending index order.
    ///
    /// A member only counts when its key is exactly the decimal form of the
    /// index, so `"01"` or `" 1"` are ignored like any other unrelated key.
    /// A `null` entry counts as absent.
    pub fn indexed_entries(
        &self,
    ) -> impl Iterator<Item = (u64, Result<RootEntry, SolverError>)> + '_ {
        let n = self.keys.n;
        let mut indexed: Vec<(u64, &Value)> = self
            .entries
            .iter()
            .filter(|(_, value)| !value.is_null())
            .filter_map(|(key, value)| {
                let index: u64 = key.parse().ok()?;
                (index >= 1 && index <= n && index.to_string() == *key).then_some((index, value))
            })
            .collect();
        indexed.sort_by_key(|(index, _)| *index);

        indexed.into_iter().map(|(index, value)| {
            let entry = RootEntry::deserialize(value)
                .map_err(|source| SolverError::MalformedEntry { index, source });
            (index, entry)
        })
    }
}
