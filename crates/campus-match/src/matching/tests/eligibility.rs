use super::common::*;
use crate::matching::domain::{Badge, OpportunityPosting};
use crate::matching::check_eligibility;

#[test]
fn reports_project_and_skill_gaps_in_rule_order() {
    let candidate = profile(&["React"], 0, 0.0);
    let job = OpportunityPosting {
        min_projects: 1,
        ..posting("react-node", &["React", "Node"])
    };

    let result = check_eligibility(&candidate, &job);

    assert!(!result.is_eligible);
    assert_eq!(
        result.issues,
        vec![
            "You need at least 1 completed project".to_string(),
            "Missing required skills: Node".to_string(),
        ]
    );
}

#[test]
fn qualified_candidate_has_no_issues() {
    let candidate = profile(&["React", "Node"], 2, 1.0);
    let job = OpportunityPosting {
        min_projects: 1,
        min_experience: 0.0,
        ..posting("react-node", &["React", "Node"])
    };

    let result = check_eligibility(&candidate, &job);

    assert!(result.is_eligible);
    assert!(result.issues.is_empty());
}

#[test]
fn evaluates_every_rule_without_short_circuit() {
    let mut candidate = profile(&["python"], 1, 0.5);
    candidate.badges = vec![Badge::new("Mentor", "bronze")];
    let job = OpportunityPosting {
        required_badges: terms(&["Mentor", "Cloud Practitioner", "Team Lead"]),
        min_projects: 4,
        min_experience: 2.0,
        ..posting("lead", &["Go", "Python", "Kafka"])
    };

    let result = check_eligibility(&candidate, &job);

    assert!(!result.is_eligible);
    assert_eq!(
        result.issues,
        vec![
            "You need at least 4 completed projects".to_string(),
            "Missing required skills: Go, Kafka".to_string(),
            "Missing required badges: Cloud Practitioner, Team Lead".to_string(),
            "You need at least 2 years of experience".to_string(),
        ]
    );
}

#[test]
fn empty_requirements_mean_no_requirement() {
    let result = check_eligibility(&profile(&[], 0, 0.0), &OpportunityPosting::default());

    assert!(result.is_eligible);
    assert!(result.issues.is_empty());
}

#[test]
fn skill_names_compare_case_insensitively() {
    let candidate = profile(&["  typescript", "NODE"], 0, 0.0);
    let job = posting("ts", &["TypeScript", "node"]);

    assert!(check_eligibility(&candidate, &job).is_eligible);
}

#[test]
fn fractional_experience_threshold_is_reported_verbatim() {
    let job = OpportunityPosting {
        min_experience: 1.5,
        ..posting("intern", &[])
    };

    let result = check_eligibility(&profile(&[], 0, 1.0), &job);

    assert_eq!(
        result.issues,
        vec!["You need at least 1.5 years of experience".to_string()]
    );
    assert!(check_eligibility(&profile(&[], 0, 1.5), &job).is_eligible);
}

#[test]
fn eligibility_is_independent_of_score() {
    let candidate = seasoned_profile();
    let catalog = recommendation_catalog();
    let high_scorer = &catalog[1];

    let result = check_eligibility(&candidate, high_scorer);

    assert!(!result.is_eligible);
    assert_eq!(
        result.issues,
        vec!["You need at least 3 years of experience".to_string()]
    );
}

/// Loosening any single requirement of an eligible posting keeps it eligible.
#[test]
fn relaxing_requirements_never_revokes_eligibility() {
    for candidate in profile_grid() {
        for job in posting_grid() {
            if !check_eligibility(&candidate, &job).is_eligible {
                continue;
            }

            let mut relaxed = Vec::new();
            relaxed.push(OpportunityPosting {
                min_projects: job.min_projects.saturating_sub(1),
                ..job.clone()
            });
            relaxed.push(OpportunityPosting {
                min_experience: (job.min_experience - 0.5).max(0.0),
                ..job.clone()
            });
            for index in 0..job.required_skills.len() {
                let mut fewer = job.clone();
                fewer.required_skills.remove(index);
                relaxed.push(fewer);
            }
            for index in 0..job.required_badges.len() {
                let mut fewer = job.clone();
                fewer.required_badges.remove(index);
                relaxed.push(fewer);
            }

            for variant in relaxed {
                assert!(
                    check_eligibility(&candidate, &variant).is_eligible,
                    "relaxing {} revoked eligibility",
                    job.id
                );
            }
        }
    }
}

/// Tightening is the mirror image: an ineligible verdict survives stricter requirements.
#[test]
fn tightening_requirements_never_grants_eligibility() {
    for candidate in profile_grid() {
        for job in posting_grid() {
            if check_eligibility(&candidate, &job).is_eligible {
                continue;
            }

            let stricter = OpportunityPosting {
                min_projects: job.min_projects + 1,
                min_experience: job.min_experience + 1.0,
                ..job.clone()
            };
            assert!(!check_eligibility(&candidate, &stricter).is_eligible);
        }
    }
}
