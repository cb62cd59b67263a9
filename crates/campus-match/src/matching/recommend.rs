use super::domain::{CandidateProfile, OpportunityPosting, RankedPosting};
use super::normalize::NormalizedProfile;
use super::ranking::{eligible, rank};

/// Number of picks shown on "recommended for you" surfaces when no count is requested.
pub const DEFAULT_RECOMMENDATION_LIMIT: usize = 5;

/// Eligible postings ranked by match score, truncated to `limit`.
///
/// Ineligible postings are dropped before ranking, so a high-scoring posting the candidate
/// cannot apply to never displaces an eligible one.
pub fn get_top_recommendations(
    profile: &CandidateProfile,
    postings: &[OpportunityPosting],
    limit: usize,
) -> Vec<RankedPosting> {
    if limit == 0 {
        return Vec::new();
    }

    let candidate = NormalizedProfile::new(profile);
    let mut ranked = rank(&candidate, eligible(&candidate, postings));
    ranked.truncate(limit);
    ranked
}

/// Converts a caller-supplied signed count; anything at or below zero means no picks.
pub fn clamp_limit(limit: i64) -> usize {
    usize::try_from(limit).unwrap_or(0)
}
