// SPDX-License-Identifier: MPL-2.0
//! Camera metadata model.
//!
//! A [`MetadataRecord`] is the read-only bag of EXIF-style values attached to
//! a photo. Producers differ in how they lay the bag out: some put fields at
//! the top level, others group them under a `"TIFF"` or `"Exif"` sub-record.
//! The record stores whatever shape it was given; key precedence is resolved
//! at display time by [`crate::metadata::format`].

pub mod format;

pub use format::{format_value, formatted_fields, FormattedField};

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Namespace sub-record holding camera make/model fields.
pub const TIFF_NAMESPACE: &str = "TIFF";
/// Namespace sub-record holding exposure and lens fields.
pub const EXIF_NAMESPACE: &str = "Exif";

/// A single raw metadata value.
///
/// Serialization is untagged so the JSON fallback rendering of nested values
/// matches their natural shape (`{"Make": "Canon"}`, `[100, 200]`).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MetadataValue {
    Number(f64),
    Text(String),
    List(Vec<MetadataValue>),
    Record(MetadataRecord),
}

impl MetadataValue {
    /// Lossless JSON-like textual form, used when no display rule applies.
    #[must_use]
    pub fn serialized(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "null".to_string())
    }
}

impl fmt::Display for MetadataValue {
    /// Plain string representation. Whole numbers render without a decimal
    /// point (`50`, not `50.0`); nested shapes fall back to their serialized
    /// form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetadataValue::Number(n) => write!(f, "{n}"),
            MetadataValue::Text(s) => f.write_str(s),
            MetadataValue::List(_) | MetadataValue::Record(_) => f.write_str(&self.serialized()),
        }
    }
}

/// Read-only mapping from metadata keys to raw values.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct MetadataRecord(BTreeMap<String, MetadataValue>);

impl MetadataRecord {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: MetadataValue) {
        self.0.insert(key.into(), value);
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&MetadataValue> {
        self.0.get(key)
    }

    /// Returns the nested sub-record stored under `name`, if present.
    #[must_use]
    pub fn namespace(&self, name: &str) -> Option<&MetadataRecord> {
        match self.0.get(name) {
            Some(MetadataValue::Record(record)) => Some(record),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, MetadataValue)> for MetadataRecord {
    fn from_iter<I: IntoIterator<Item = (String, MetadataValue)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
