use tracing::debug;

use super::domain::{
    CandidateProfile, EligibilityResult, MatchResult, OpportunityPosting, RankedPosting,
};
use super::validation::{validate_posting, validate_postings, validate_profile, ValidationError};
use super::{
    calculate_match_score, check_eligibility, filter_eligible_jobs, get_top_recommendations,
    sort_jobs_by_match,
};
use crate::config::MatchingConfig;

/// Validating façade over the matching functions.
///
/// Inputs are checked once here; past this point the scoring and eligibility rules assume
/// well-formed values.
#[derive(Debug, Clone, Default)]
pub struct MatchingEngine {
    config: MatchingConfig,
}

impl MatchingEngine {
    pub fn new(config: MatchingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MatchingConfig {
        &self.config
    }

    pub fn score(
        &self,
        profile: &CandidateProfile,
        posting: &OpportunityPosting,
    ) -> Result<MatchResult, ValidationError> {
        validate_profile(profile)?;
        validate_posting(posting)?;
        Ok(calculate_match_score(profile, posting))
    }

    pub fn eligibility(
        &self,
        profile: &CandidateProfile,
        posting: &OpportunityPosting,
    ) -> Result<EligibilityResult, ValidationError> {
        validate_profile(profile)?;
        validate_posting(posting)?;
        Ok(check_eligibility(profile, posting))
    }

    pub fn filter_eligible(
        &self,
        profile: &CandidateProfile,
        postings: &[OpportunityPosting],
    ) -> Result<Vec<OpportunityPosting>, ValidationError> {
        validate_profile(profile)?;
        validate_postings(postings)?;
        Ok(filter_eligible_jobs(profile, postings))
    }

    pub fn rank(
        &self,
        profile: &CandidateProfile,
        postings: &[OpportunityPosting],
    ) -> Result<Vec<RankedPosting>, ValidationError> {
        validate_profile(profile)?;
        validate_postings(postings)?;
        Ok(sort_jobs_by_match(profile, postings))
    }

    /// Top picks; `limit` falls back to the configured default.
    pub fn recommend(
        &self,
        profile: &CandidateProfile,
        postings: &[OpportunityPosting],
        limit: Option<usize>,
    ) -> Result<Vec<RankedPosting>, ValidationError> {
        validate_profile(profile)?;
        validate_postings(postings)?;

        let limit = limit.unwrap_or(self.config.default_limit);
        let picks = get_top_recommendations(profile, postings, limit);
        debug!(
            candidate = profile.id.as_deref().unwrap_or("anonymous"),
            catalog = postings.len(),
            limit,
            returned = picks.len(),
            "computed recommendations"
        );
        Ok(picks)
    }
}
