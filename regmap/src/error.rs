//! Error types for document loading

use thiserror::Error;

/// Failures raised while reading a register map document
///
/// Every variant means the document could not be read. Validation itself
/// never produces these; schema violations and overlaps are reported
/// through return values once a document has been constructed.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// The file could not be read
    #[error("failed to read document: {0}")]
    Io(#[from] std::io::Error),

    /// The text was not valid JSON
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The top level of the document is not a mapping
    #[error("document root must be an object")]
    RootNotAnObject,

    /// A region entry is not a mapping of attributes
    #[error("region `{0}` is not an object")]
    RegionNotAnObject(String),

    /// An attribute is present but has the wrong type
    #[error("region `{region}` has a malformed `{attribute}` attribute")]
    InvalidAttribute {
        /// Name of the offending region
        region: String,
        /// Wire-format key of the offending attribute
        attribute: &'static str,
    },
}
