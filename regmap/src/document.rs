//! JSON-backed register map documents
//!
//! This is the host-side representation the validation core operates on.
//! Shape checking happens once at load time, so the pure checks can assume
//! numeric attributes without carrying an error path of their own.

use std::path::Path;

use regmap_core::{validation, Region};
use serde_json::{Map, Value};

use crate::error::DocumentError;

/// Ordered register map document
///
/// Wraps the parsed JSON object. Iteration follows the order regions appear
/// in the source text, which fixes the tie-break for overlap reporting.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    regions: Map<String, Value>,
}

impl Document {
    /// Parse a document from JSON text
    pub fn parse(text: &str) -> Result<Self, DocumentError> {
        Self::from_value(serde_json::from_str(text)?)
    }

    /// Read and parse a document from a file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DocumentError> {
        let text = std::fs::read_to_string(path)?;
        Self::parse(&text)
    }

    /// Build a document from an already-parsed JSON value
    ///
    /// Rejects anything without the document shape: the root and every
    /// region must be objects, `baseAddress` and `sizeBytes` must be
    /// non-negative integers when present, `widthBits` an integer and
    /// `protocol` a string. Missing attributes are accepted here; they are
    /// a schema-validation result, not a load failure.
    pub fn from_value(value: Value) -> Result<Self, DocumentError> {
        let regions = match value {
            Value::Object(map) => map,
            _ => return Err(DocumentError::RootNotAnObject),
        };

        for (name, spec) in &regions {
            let attributes = spec
                .as_object()
                .ok_or_else(|| DocumentError::RegionNotAnObject(name.clone()))?;

            check_attribute(name, attributes, "baseAddress", Value::is_u64)?;
            check_attribute(name, attributes, "sizeBytes", Value::is_u64)?;
            check_attribute(name, attributes, "widthBits", |v| v.is_i64() || v.is_u64())?;
            check_attribute(name, attributes, "protocol", Value::is_string)?;
        }

        tracing::debug!(regions = regions.len(), "loaded register map document");
        Ok(Self { regions })
    }

    /// Number of regions in the document
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    /// Whether the document has no regions
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Iterate regions in document order
    pub fn iter(&self) -> impl Iterator<Item = RegionEntry<'_>> {
        self.regions.iter().filter_map(|(name, spec)| {
            spec.as_object()
                .map(|attributes| RegionEntry { name, attributes })
        })
    }

    /// Check that every region carries the required attribute set
    ///
    /// Pure predicate: `true` for an empty document, `false` as soon as any
    /// region misses any of [`regmap_core::REQUIRED_ATTRIBUTES`].
    pub fn validate_schema(&self) -> bool {
        validation::validate_schema(self.iter())
    }

    /// Report the first pair of regions with overlapping address ranges
    ///
    /// Ranges are half-open, built from `baseAddress` and `sizeBytes` as
    /// given. Returns the formatted description
    /// `"<a> (<start>-<end>) overlaps with <b> (<start>-<end>)"`, or `None`
    /// when all ranges are disjoint. The pipeline in
    /// [`Document::validate`] only runs this after schema validation
    /// passes.
    pub fn check_overlap(&self) -> Option<String> {
        let ranges = validation::collect_ranges(self.iter().map(|entry| (entry.name(), entry)));
        validation::find_overlap(&ranges).map(|overlap| overlap.to_string())
    }
}

/// View of a single region inside a document
#[derive(Debug, Clone, Copy)]
pub struct RegionEntry<'a> {
    name: &'a str,
    attributes: &'a Map<String, Value>,
}

impl<'a> RegionEntry<'a> {
    /// Name of the region (the document key)
    pub fn name(&self) -> &'a str {
        self.name
    }

    /// Look up a raw attribute value
    pub fn attribute(&self, key: &str) -> Option<&'a Value> {
        self.attributes.get(key)
    }
}

impl Region for RegionEntry<'_> {
    fn has_attribute(&self, key: &str) -> bool {
        self.attributes.contains_key(key)
    }

    // Shape checking at load time guarantees these are non-negative
    // integers when present. A missing attribute reads as zero, which is
    // only observable after schema validation has already failed.
    fn base_address(&self) -> u64 {
        self.attributes
            .get("baseAddress")
            .and_then(Value::as_u64)
            .unwrap_or(0)
    }

    fn size_bytes(&self) -> u64 {
        self.attributes
            .get("sizeBytes")
            .and_then(Value::as_u64)
            .unwrap_or(0)
    }
}

fn check_attribute<F>(
    region: &str,
    attributes: &Map<String, Value>,
    key: &'static str,
    is_valid: F,
) -> Result<(), DocumentError>
where
    F: Fn(&Value) -> bool,
{
    match attributes.get(key) {
        Some(value) if !is_valid(value) => Err(DocumentError::InvalidAttribute {
            region: region.to_string(),
            attribute: key,
        }),
        _ => Ok(()),
    }
}
