//! Regmap - Register Map Document Validation
//!
//! This library loads declarative register map documents (named regions
//! with a base address and size) and checks them for schema completeness
//! and address range overlap.
//!
//! ## Architecture
//!
//! Regmap follows a clean specification/implementation separation:
//!
//! - **regmap-core**: Pure region model, range math, and validation (no I/O)
//! - **regmap**: JSON document loading, the validation pipeline, and host glue
//!
//! ## Quick Start
//!
//! ```rust
//! use regmap::Document;
//!
//! fn example() -> Result<(), regmap::DocumentError> {
//!     let doc = Document::parse(
//!         r#"{
//!             "uart0": { "baseAddress": 4096, "protocol": "APB", "sizeBytes": 256, "widthBits": 32 },
//!             "spi0":  { "baseAddress": 8192, "protocol": "APB", "sizeBytes": 256, "widthBits": 32 }
//!         }"#,
//!     )?;
//!
//!     assert!(doc.validate_schema());
//!     assert_eq!(doc.check_overlap(), None);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

// Re-export core abstractions
pub use regmap_core::{
    // Region model
    Region, RegionSpec, REQUIRED_ATTRIBUTES,
    // Range math
    AddressRange, Overlap,
    // Validation
    find_overlap, validate_schema,
};

pub mod document;
pub mod error;
pub mod report;

pub use document::{Document, RegionEntry};
pub use error::DocumentError;
pub use report::ValidationReport;
