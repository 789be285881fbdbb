#![no_std]

//! Regmap Core - Register Map Region Model and Validation
//!
//! This crate provides the region data model and pure validation logic for
//! declarative register map descriptions: schema checking over required
//! attributes and first-overlap detection over half-open address ranges.
//! There is no I/O here; document loading lives in the `regmap` crate.

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod range;
pub mod region;
pub mod validation;

pub use range::*;
pub use region::*;
pub use validation::*;
