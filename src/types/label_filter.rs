// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::error::{DemoError, Result};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// A single `key=value` label, used both as the label set of the demo pod
/// and as the selector when listing pods.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LabelFilter {
    key: String,
    value: String,
}

impl LabelFilter {
    /// Parse a `key=value` expression. Exactly one `=` and a non-empty key are required.
    pub fn parse(filter: &str) -> Result<Self> {
        let filter = filter.trim();
        let mut parts = filter.split('=');

        let (Some(key), Some(value), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(DemoError::InvalidLabelFilter(format!(
                "'{}' must be of the form key=value",
                filter
            )));
        };

        let key = key.trim();
        if key.is_empty() {
            return Err(DemoError::InvalidLabelFilter(format!(
                "'{}' has an empty key",
                filter
            )));
        }

        Ok(LabelFilter {
            key: key.to_string(),
            value: value.trim().to_string(),
        })
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// The label map carried by resources created with this filter
    pub fn labels(&self) -> BTreeMap<String, String> {
        BTreeMap::from([(self.key.clone(), self.value.clone())])
    }

    /// Equality-based label selector understood by the API server
    pub fn selector(&self) -> String {
        format!("{}={}", self.key, self.value)
    }
}

impl FromStr for LabelFilter {
    type Err = DemoError;

    fn from_str(s: &str) -> Result<Self> {
        LabelFilter::parse(s)
    }
}

impl fmt::Display for LabelFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.selector())
    }
}
