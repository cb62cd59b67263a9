use super::domain::{CandidateProfile, EligibilityResult, OpportunityPosting};
use super::normalize::{NormalizedPosting, NormalizedProfile};

/// One unmet hard requirement.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum EligibilityIssue {
    InsufficientProjects { required: u32 },
    MissingSkills(Vec<String>),
    MissingBadges(Vec<String>),
    InsufficientExperience { required: f64 },
}

impl EligibilityIssue {
    /// Banner text shown to the candidate.
    pub(crate) fn summary(&self) -> String {
        match self {
            EligibilityIssue::InsufficientProjects { required } => format!(
                "You need at least {required} completed project{}",
                plural_suffix(f64::from(*required))
            ),
            EligibilityIssue::MissingSkills(skills) => {
                format!("Missing required skills: {}", skills.join(", "))
            }
            EligibilityIssue::MissingBadges(badges) => {
                format!("Missing required badges: {}", badges.join(", "))
            }
            EligibilityIssue::InsufficientExperience { required } => format!(
                "You need at least {required} year{} of experience",
                plural_suffix(*required)
            ),
        }
    }
}

fn plural_suffix(count: f64) -> &'static str {
    if count == 1.0 {
        ""
    } else {
        "s"
    }
}

/// Hard eligibility of a candidate for a posting, independent of the match score.
pub fn check_eligibility(
    profile: &CandidateProfile,
    posting: &OpportunityPosting,
) -> EligibilityResult {
    eligibility_normalized(
        &NormalizedProfile::new(profile),
        &NormalizedPosting::new(posting),
    )
}

pub(crate) fn eligibility_normalized(
    profile: &NormalizedProfile,
    posting: &NormalizedPosting,
) -> EligibilityResult {
    let issues = collect_issues(profile, posting)
        .iter()
        .map(EligibilityIssue::summary)
        .collect();
    EligibilityResult::from_issues(issues)
}

/// Every rule runs; the order here is the order issues are reported in.
pub(crate) fn collect_issues(
    profile: &NormalizedProfile,
    posting: &NormalizedPosting,
) -> Vec<EligibilityIssue> {
    let mut issues = Vec::new();

    if posting.min_projects > 0 && profile.projects_completed < posting.min_projects {
        issues.push(EligibilityIssue::InsufficientProjects {
            required: posting.min_projects,
        });
    }

    let missing_skills = posting.required_skills.missing_from(&profile.skills);
    if !missing_skills.is_empty() {
        issues.push(EligibilityIssue::MissingSkills(missing_skills));
    }

    let missing_badges = posting.required_badges.missing_from(&profile.badges);
    if !missing_badges.is_empty() {
        issues.push(EligibilityIssue::MissingBadges(missing_badges));
    }

    if posting.min_experience > 0.0 && profile.years_experience < posting.min_experience {
        issues.push(EligibilityIssue::InsufficientExperience {
            required: posting.min_experience,
        });
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summaries_pluralize_counts() {
        assert_eq!(
            EligibilityIssue::InsufficientProjects { required: 1 }.summary(),
            "You need at least 1 completed project"
        );
        assert_eq!(
            EligibilityIssue::InsufficientProjects { required: 3 }.summary(),
            "You need at least 3 completed projects"
        );
        assert_eq!(
            EligibilityIssue::InsufficientExperience { required: 1.0 }.summary(),
            "You need at least 1 year of experience"
        );
        assert_eq!(
            EligibilityIssue::InsufficientExperience { required: 2.5 }.summary(),
            "You need at least 2.5 years of experience"
        );
    }

    #[test]
    fn missing_lists_are_comma_joined() {
        let issue = EligibilityIssue::MissingBadges(vec![
            "Cloud Practitioner".to_string(),
            "Mentor".to_string(),
        ]);
        assert_eq!(
            issue.summary(),
            "Missing required badges: Cloud Practitioner, Mentor"
        );
    }
}
