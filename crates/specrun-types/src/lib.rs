//! Core data model for specrun.
//!
//! specrun consumes externally maintained specification documents — JSON
//! bodies of the shape `{"tests": [ <record>, ... ]}` — and turns each
//! declarative test record into an executable case.
//!
//! # Key Concepts
//!
//! - **TestRecord**: one declarative test description, a JSON object with
//!   required `name` and `expected` fields.
//! - **CaseFields**: the pure decomposition of one record into display name,
//!   description, oracle, positional arguments, and residual keyword inputs.
//! - **SpecDocument**: the ordered records of one named group, as fetched.
//! - **CaseOutcome**: pass, fail (wrong value), or error (subject misbehaved).
//!
//! Decomposition never mutates its input record: it clones and removes fields
//! in a fixed order (`name`, `desc`, `expected`, `args`, then the residual),
//! so consumed fields can never leak into the keyword mapping.

#![deny(unsafe_code)]

mod document;
mod errors;
mod outcome;
mod record;

pub use document::*;
pub use errors::*;
pub use outcome::*;
pub use record::*;
