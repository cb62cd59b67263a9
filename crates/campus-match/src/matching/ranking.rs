use tracing::debug;

use super::domain::{CandidateProfile, OpportunityPosting, RankedPosting};
use super::eligibility::eligibility_normalized;
use super::normalize::{NormalizedPosting, NormalizedProfile};
use super::scoring::score_normalized;

/// Postings the candidate is hard-eligible for, in their original order.
pub fn filter_eligible_jobs(
    profile: &CandidateProfile,
    postings: &[OpportunityPosting],
) -> Vec<OpportunityPosting> {
    let candidate = NormalizedProfile::new(profile);
    eligible(&candidate, postings).cloned().collect()
}

/// Every posting annotated with its match score, best first.
pub fn sort_jobs_by_match(
    profile: &CandidateProfile,
    postings: &[OpportunityPosting],
) -> Vec<RankedPosting> {
    let candidate = NormalizedProfile::new(profile);
    rank(&candidate, postings.iter())
}

pub(crate) fn eligible<'a>(
    candidate: &'a NormalizedProfile,
    postings: &'a [OpportunityPosting],
) -> impl Iterator<Item = &'a OpportunityPosting> + 'a {
    postings.iter().filter(move |posting| {
        let verdict = eligibility_normalized(candidate, &NormalizedPosting::new(posting));
        if !verdict.is_eligible {
            debug!(
                posting_id = %posting.id,
                issues = verdict.issues.len(),
                "posting filtered as ineligible"
            );
        }
        verdict.is_eligible
    })
}

/// Scores and orders postings. `sort_by` is stable, so equal scores keep their input order
/// and ranked lists do not reshuffle between renders.
pub(crate) fn rank<'a, I>(candidate: &NormalizedProfile, postings: I) -> Vec<RankedPosting>
where
    I: IntoIterator<Item = &'a OpportunityPosting>,
{
    let mut ranked: Vec<RankedPosting> = postings
        .into_iter()
        .map(|posting| {
            let details = score_normalized(candidate, &NormalizedPosting::new(posting));
            RankedPosting::new(posting.clone(), details)
        })
        .collect();

    ranked.sort_by(|a, b| b.match_score.cmp(&a.match_score));

    debug!(
        ranked = ranked.len(),
        top_score = ?ranked.first().map(|entry| entry.match_score),
        "ranked postings by match score"
    );

    ranked
}
