use super::domain::{CandidateProfile, MatchBreakdown, MatchResult, OpportunityPosting};
use super::normalize::{closeness, Closeness, NormalizedPosting, NormalizedProfile};

/// Point allocation across the six scoring dimensions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreWeights {
    pub required_skills: f64,
    pub preferred_skills: f64,
    pub badges: f64,
    pub projects: f64,
    pub experience: f64,
    pub location_exact: f64,
    pub location_partial: f64,
    pub college_exact: f64,
    pub college_partial: f64,
}

impl ScoreWeights {
    /// Best achievable total; the partial-match tiers never add on top of the exact ones.
    #[cfg(test)]
    pub(crate) fn max_total(&self) -> f64 {
        self.required_skills
            + self.preferred_skills
            + self.badges
            + self.projects
            + self.experience
            + self.location_exact
            + self.college_exact
    }
}

pub const MATCH_WEIGHTS: ScoreWeights = ScoreWeights {
    required_skills: 30.0,
    preferred_skills: 10.0,
    badges: 20.0,
    projects: 15.0,
    experience: 10.0,
    location_exact: 10.0,
    location_partial: 5.0,
    college_exact: 5.0,
    college_partial: 3.0,
};

/// Unrounded sub-scores, kept separate so the total is rounded once.
#[derive(Debug, Clone, Copy, Default)]
struct RawScores {
    skills: f64,
    badges: f64,
    projects: f64,
    experience: f64,
    location: f64,
    college: f64,
}

impl RawScores {
    fn total(&self) -> f64 {
        self.skills + self.badges + self.projects + self.experience + self.location + self.college
    }
}

/// Weighted compatibility score for one candidate against one posting.
pub fn calculate_match_score(
    profile: &CandidateProfile,
    posting: &OpportunityPosting,
) -> MatchResult {
    score_normalized(
        &NormalizedProfile::new(profile),
        &NormalizedPosting::new(posting),
    )
}

pub(crate) fn score_normalized(
    profile: &NormalizedProfile,
    posting: &NormalizedPosting,
) -> MatchResult {
    let weights = &MATCH_WEIGHTS;
    let raw = RawScores {
        skills: skills_points(profile, posting, weights),
        badges: badge_points(profile, posting, weights),
        projects: fulfilment(
            f64::from(profile.projects_completed),
            f64::from(posting.min_projects),
        ) * weights.projects,
        experience: fulfilment(profile.years_experience, posting.min_experience)
            * weights.experience,
        location: tiered_points(
            closeness(posting.location.as_deref(), profile.location.as_deref()),
            weights.location_exact,
            weights.location_partial,
        ),
        college: tiered_points(
            closeness(
                posting.college_preference.as_deref(),
                profile.college.as_deref(),
            ),
            weights.college_exact,
            weights.college_partial,
        ),
    };

    MatchResult {
        score: raw.total().round().clamp(0.0, 100.0) as u8,
        breakdown: MatchBreakdown {
            skills: round_points(raw.skills),
            badges: round_points(raw.badges),
            projects: round_points(raw.projects),
            experience: round_points(raw.experience),
            location: round_points(raw.location),
            college: round_points(raw.college),
        },
    }
}

fn round_points(value: f64) -> u8 {
    value.round().clamp(0.0, f64::from(u8::MAX)) as u8
}

/// Share of a threshold met, capped at 1. A zero threshold counts as 1 so that any progress
/// is still rewarded.
fn fulfilment(actual: f64, minimum: f64) -> f64 {
    (actual / minimum.max(1.0)).min(1.0)
}

// The preferred-skills bonus is only reachable when the posting lists required skills; a
// posting with preferred skills alone scores 0 here. Ranking depends on this, keep it.
fn skills_points(
    profile: &NormalizedProfile,
    posting: &NormalizedPosting,
    weights: &ScoreWeights,
) -> f64 {
    if posting.required_skills.is_empty() {
        return 0.0;
    }

    let required = posting.required_skills.matched_in(&profile.skills) as f64
        / posting.required_skills.len() as f64;
    let preferred = posting.preferred_skills.matched_in(&profile.skills) as f64
        / posting.preferred_skills.len().max(1) as f64;

    required * weights.required_skills + preferred * weights.preferred_skills
}

fn badge_points(
    profile: &NormalizedProfile,
    posting: &NormalizedPosting,
    weights: &ScoreWeights,
) -> f64 {
    if posting.required_badges.is_empty() {
        return 0.0;
    }

    posting.required_badges.matched_in(&profile.badges) as f64
        / posting.required_badges.len() as f64
        * weights.badges
}

fn tiered_points(closeness: Closeness, exact: f64, partial: f64) -> f64 {
    match closeness {
        Closeness::Exact => exact,
        Closeness::Partial => partial,
        Closeness::Unrelated => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::domain::ScoreDimension;

    #[test]
    fn weights_sum_to_one_hundred() {
        assert!((MATCH_WEIGHTS.max_total() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn dimension_caps_agree_with_weights() {
        assert_eq!(
            f64::from(ScoreDimension::Skills.max_points()),
            MATCH_WEIGHTS.required_skills + MATCH_WEIGHTS.preferred_skills
        );
        assert_eq!(
            f64::from(ScoreDimension::Badges.max_points()),
            MATCH_WEIGHTS.badges
        );
        assert_eq!(
            f64::from(ScoreDimension::Location.max_points()),
            MATCH_WEIGHTS.location_exact
        );
        assert_eq!(
            f64::from(ScoreDimension::College.max_points()),
            MATCH_WEIGHTS.college_exact
        );
        let caps: u16 = ScoreDimension::ALL
            .iter()
            .map(|dimension| u16::from(dimension.max_points()))
            .sum();
        assert_eq!(caps, 100);
    }

    #[test]
    fn fulfilment_floors_threshold_at_one() {
        assert_eq!(fulfilment(0.0, 0.0), 0.0);
        assert_eq!(fulfilment(1.0, 0.0), 1.0);
        assert_eq!(fulfilment(3.0, 0.5), 1.0);
        assert_eq!(fulfilment(1.0, 4.0), 0.25);
    }

    #[test]
    fn rounding_goes_half_away_from_zero() {
        assert_eq!(round_points(7.5), 8);
        assert_eq!(round_points(3.49), 3);
        assert_eq!(round_points(-0.4), 0);
    }
}
