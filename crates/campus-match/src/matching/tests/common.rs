use axum::response::Response;
use serde_json::Value;

use crate::matching::domain::{Badge, CandidateProfile, OpportunityPosting};

pub(super) fn terms(list: &[&str]) -> Vec<String> {
    list.iter().map(|term| term.to_string()).collect()
}

pub(super) fn profile(
    skills: &[&str],
    projects_completed: u32,
    years_experience: f64,
) -> CandidateProfile {
    CandidateProfile {
        skills: terms(skills),
        projects_completed,
        years_experience,
        ..CandidateProfile::default()
    }
}

pub(super) fn posting(id: &str, required_skills: &[&str]) -> OpportunityPosting {
    OpportunityPosting {
        id: id.to_string(),
        title: format!("{id} role"),
        required_skills: terms(required_skills),
        ..OpportunityPosting::default()
    }
}

/// Third-year student with a couple of shipped projects and one badge.
pub(super) fn seasoned_profile() -> CandidateProfile {
    CandidateProfile {
        id: Some("stu-042".to_string()),
        name: Some("Asha Rao".to_string()),
        skills: terms(&["Rust", "SQL", "Docker"]),
        badges: vec![Badge::new("Cloud Practitioner", "associate")],
        projects_completed: 3,
        college: Some("IIT Delhi".to_string()),
        location: Some("Bangalore".to_string()),
        years_experience: 2.0,
    }
}

/// Postings A (90, eligible), B (97, too little experience) and C (75, eligible) for
/// [`seasoned_profile`].
pub(super) fn recommendation_catalog() -> Vec<OpportunityPosting> {
    vec![
        OpportunityPosting {
            preferred_skills: terms(&["Docker"]),
            required_badges: terms(&["Cloud Practitioner"]),
            min_projects: 2,
            min_experience: 1.0,
            location: Some("Bangalore Urban".to_string()),
            ..posting("A", &["Rust", "SQL"])
        },
        OpportunityPosting {
            preferred_skills: terms(&["Docker"]),
            required_badges: terms(&["Cloud Practitioner"]),
            min_projects: 2,
            min_experience: 3.0,
            location: Some("Bangalore".to_string()),
            college_preference: Some("IIT Delhi".to_string()),
            ..posting("B", &["Rust", "SQL"])
        },
        OpportunityPosting {
            preferred_skills: terms(&["Kubernetes", "Docker"]),
            location: Some("Bangalore".to_string()),
            college_preference: Some("IIT Delhi".to_string()),
            ..posting("C", &["Rust", "SQL"])
        },
    ]
}

pub(super) fn profile_grid() -> Vec<CandidateProfile> {
    let mut grid = vec![
        CandidateProfile::default(),
        profile(&["react"], 0, 0.0),
        profile(&["React", "Node", "Docker"], 2, 1.0),
        profile(&["Python", "SQL"], 12, 7.5),
        seasoned_profile(),
    ];
    grid.push(CandidateProfile {
        badges: vec![Badge::new("Mentor", "gold"), Badge::new("hackathon winner", "")],
        location: Some("Mumbai".to_string()),
        college: Some("NIT Trichy".to_string()),
        ..profile(&["Go", "Rust", "SQL"], 1, 0.5)
    });
    grid
}

pub(super) fn posting_grid() -> Vec<OpportunityPosting> {
    vec![
        OpportunityPosting::default(),
        posting("preferred-only", &[]),
        OpportunityPosting {
            min_projects: 1,
            ..posting("react-node", &["React", "Node"])
        },
        OpportunityPosting {
            preferred_skills: terms(&["Docker", "AWS"]),
            required_badges: terms(&["Mentor", "Hackathon Winner"]),
            min_projects: 3,
            min_experience: 2.0,
            location: Some("Mumbai, India".to_string()),
            college_preference: Some("NIT".to_string()),
            ..posting("full", &["Rust", "SQL"])
        },
        OpportunityPosting {
            min_experience: 0.5,
            location: Some("bangalore".to_string()),
            college_preference: Some("iit delhi".to_string()),
            ..posting("python", &["python"])
        },
        OpportunityPosting {
            preferred_skills: terms(&["Docker"]),
            required_badges: terms(&["Cloud Practitioner"]),
            min_projects: 20,
            min_experience: 10.0,
            ..posting("senior", &["Rust", "SQL", "Docker", "Kubernetes"])
        },
    ]
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
