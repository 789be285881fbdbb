//! Validation for register map documents
//!
//! This module contains pure validation functions with no I/O dependencies.
//! Both checks report through return values: a schema violation is `false`,
//! an overlap is `Some`, and neither check can fail any other way.

pub mod overlap;
pub mod schema;

pub use overlap::find_overlap;
pub use schema::validate_schema;

#[cfg(feature = "alloc")]
pub use overlap::collect_ranges;
