//! Case execution, suite building, and batch running.
//!
//! # Key Concepts
//!
//! - **Subject**: the implementation under test, behind one of two seams —
//!   a plain callable ([`Subject`]) or a configure-then-invoke factory
//!   ([`SubjectFactory`] producing a [`RenderInstance`]).
//! - **SpecCase**: one executable test case, either a [`GenericCase`]
//!   (call the subject with the record's args/keywords) or an
//!   [`AdapterCase`] (configure an instance from `partials`, then render
//!   `template` against `data`).
//! - **Suite**: the cases of one group, built fail-fast from one document
//!   fetch.
//! - **BatchRunner**: builds and runs suites for a set of groups, forwarding
//!   every outcome to a [`ResultSink`]; a build failure abandons only the
//!   affected group.
//!
//! Execution is strictly sequential: one case at a time, in suite order.

#![deny(unsafe_code)]

mod batch;
mod case;
mod report;
mod sink;
mod subject;
mod suite;

pub use batch::*;
pub use case::*;
pub use report::*;
pub use sink::*;
pub use subject::*;
pub use suite::*;
