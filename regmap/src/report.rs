//! Validation pipeline and user-facing report

use crate::document::Document;

/// Outcome of running the full validation pipeline over a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationReport {
    /// Every region is well-formed and all ranges are disjoint
    Clean,
    /// At least one region is missing a required attribute
    SchemaViolation,
    /// Description of the first conflicting pair, in document order
    Overlap(String),
}

impl ValidationReport {
    /// Whether the document passed both checks
    pub fn is_clean(&self) -> bool {
        matches!(self, ValidationReport::Clean)
    }
}

impl std::fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationReport::Clean => write!(f, "No overlap found."),
            ValidationReport::SchemaViolation => {
                write!(f, "Schema validation failed: a region is missing required attributes.")
            }
            ValidationReport::Overlap(description) => {
                write!(f, "Overlap found in region: {description}")
            }
        }
    }
}

impl Document {
    /// Run schema validation, then overlap detection
    ///
    /// Overlap checking is skipped when schema validation fails, so an
    /// overlap report never describes a region with missing attributes.
    pub fn validate(&self) -> ValidationReport {
        if !self.validate_schema() {
            tracing::debug!("schema validation failed");
            return ValidationReport::SchemaViolation;
        }
        match self.check_overlap() {
            Some(description) => ValidationReport::Overlap(description),
            None => ValidationReport::Clean,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(text: &str) -> Document {
        Document::parse(text).unwrap()
    }

    #[test]
    fn clean_document_reports_no_overlap() {
        let report = doc(r#"{
            "port1": { "baseAddress": 1000, "protocol": "TCP", "sizeBytes": 50, "widthBits": 32 },
            "port2": { "baseAddress": 1100, "protocol": "UDP", "sizeBytes": 50, "widthBits": 16 }
        }"#)
        .validate();

        assert!(report.is_clean());
        assert_eq!(report.to_string(), "No overlap found.");
    }

    #[test]
    fn overlap_report_carries_description() {
        let report = doc(r#"{
            "port1": { "baseAddress": 1000, "protocol": "TCP", "sizeBytes": 200, "widthBits": 32 },
            "port2": { "baseAddress": 1100, "protocol": "UDP", "sizeBytes": 50, "widthBits": 16 }
        }"#)
        .validate();

        assert_eq!(
            report,
            ValidationReport::Overlap("port1 (1000-1200) overlaps with port2 (1100-1150)".into())
        );
        assert_eq!(
            report.to_string(),
            "Overlap found in region: port1 (1000-1200) overlaps with port2 (1100-1150)"
        );
    }

    #[test]
    fn schema_failure_skips_overlap_check() {
        // port1 and port2 would overlap, but port2 is missing widthBits
        let report = doc(r#"{
            "port1": { "baseAddress": 1000, "protocol": "TCP", "sizeBytes": 200, "widthBits": 32 },
            "port2": { "baseAddress": 1100, "protocol": "UDP", "sizeBytes": 50 }
        }"#)
        .validate();

        assert_eq!(report, ValidationReport::SchemaViolation);
        assert!(!report.is_clean());
    }

    #[test]
    fn empty_document_is_clean() {
        assert_eq!(doc("{}").validate(), ValidationReport::Clean);
    }
}
