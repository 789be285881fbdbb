//! Required-attribute checking for region descriptions

use crate::region::{Region, REQUIRED_ATTRIBUTES};

/// Check that every region carries the full required attribute set
///
/// This is a presence check only; attribute values are not inspected.
/// Required keys are a floor, not a ceiling: extra attributes never cause
/// failure, and an empty document is trivially valid.
pub fn validate_schema<R, I>(regions: I) -> bool
where
    R: Region,
    I: IntoIterator<Item = R>,
{
    regions.into_iter().all(|region| {
        REQUIRED_ATTRIBUTES
            .iter()
            .copied()
            .all(|key| region.has_attribute(key))
    })
}
