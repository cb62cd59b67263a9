//! Opportunity matching for the student and alumni portal.
//!
//! The [`matching`] module holds the scoring, eligibility, ranking and recommendation engine.
//! [`config`], [`telemetry`] and [`error`] carry the ambient service concerns shared with the
//! API binary.

pub mod config;
pub mod error;
pub mod matching;
pub mod telemetry;
