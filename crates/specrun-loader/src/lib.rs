//! Specification document retrieval and parsing.
//!
//! A [`DocumentProvider`] resolves a group name to a [`SpecDocument`]:
//! the shipped [`HttpDocumentProvider`] substitutes the group name into a
//! templated URL and fetches the JSON body with a single blocking request
//! (no retries, no caching); [`StaticProvider`] serves documents from
//! memory for tests and offline runs.
//!
//! Retrieval and parsing failures are kept distinct: see [`LoadError`].

#![deny(unsafe_code)]

mod errors;
mod http;
mod provider;

pub use errors::*;
pub use http::*;
pub use provider::*;
