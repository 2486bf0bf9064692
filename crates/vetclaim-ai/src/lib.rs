//! Veteran disability claim analysis.
//!
//! The [`claims`] module holds the reference catalog, the VA combined-rating
//! math, the evidence scoring model and the analyzer that ties them together.
//! [`caselaw`] provides a small searchable index of precedential decisions.

pub mod caselaw;
pub mod claims;
pub mod config;
pub mod error;
pub mod telemetry;
