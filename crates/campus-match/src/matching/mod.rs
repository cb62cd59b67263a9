//! Opportunity matching: weighted scoring, hard eligibility, ranking and recommendations.
//!
//! The free functions are pure and infallible over typed input. [`MatchingEngine`] wraps them
//! with a validation boundary for payloads arriving from outside the process, and
//! [`matching_router`] exposes that engine over HTTP.

pub mod domain;
mod eligibility;
mod engine;
mod normalize;
mod ranking;
mod recommend;
pub mod router;
mod scoring;
mod validation;

#[cfg(test)]
mod tests;

pub use domain::{
    Badge, CandidateProfile, EligibilityResult, MatchBreakdown, MatchResult, OpportunityPosting,
    RankedPosting, ScoreDimension,
};
pub use eligibility::check_eligibility;
pub use engine::MatchingEngine;
pub use ranking::{filter_eligible_jobs, sort_jobs_by_match};
pub use recommend::{clamp_limit, get_top_recommendations, DEFAULT_RECOMMENDATION_LIMIT};
pub use router::matching_router;
pub use scoring::{calculate_match_score, ScoreWeights, MATCH_WEIGHTS};
pub use validation::{validate_posting, validate_postings, validate_profile, ValidationError};
