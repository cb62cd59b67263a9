use crate::infra::load_json;
use campus_match::config::AppConfig;
use campus_match::error::AppError;
use campus_match::matching::{
    clamp_limit, Badge, CandidateProfile, EligibilityResult, MatchingEngine, OpportunityPosting,
    RankedPosting, ScoreDimension,
};
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct RecommendArgs {
    /// JSON file holding the candidate profile
    #[arg(long)]
    pub(crate) profile: PathBuf,
    /// JSON file holding an array of postings
    #[arg(long)]
    pub(crate) postings: PathBuf,
    /// Number of picks (defaults to MATCH_DEFAULT_LIMIT); zero or negative returns none
    #[arg(long)]
    pub(crate) limit: Option<i64>,
    /// Print every posting ranked with its eligibility instead of the top picks
    #[arg(long)]
    pub(crate) all: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Number of top picks to show (defaults to MATCH_DEFAULT_LIMIT)
    #[arg(long)]
    pub(crate) limit: Option<usize>,
}

/// Ranked posting paired with its eligibility verdict for the `--all` listing.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RankedEligibilityView {
    #[serde(flatten)]
    pub(crate) ranked: RankedPosting,
    pub(crate) eligibility: EligibilityResult,
}

pub(crate) fn run_recommend(args: RecommendArgs) -> Result<(), AppError> {
    let RecommendArgs {
        profile,
        postings,
        limit,
        all,
    } = args;

    let config = AppConfig::load()?;
    let engine = MatchingEngine::new(config.matching);
    let profile: CandidateProfile = load_json(&profile)?;
    let postings: Vec<OpportunityPosting> = load_json(&postings)?;

    let rendered = if all {
        let views = ranked_with_eligibility(&engine, &profile, &postings)?;
        serde_json::to_string_pretty(&views)?
    } else {
        let picks = engine.recommend(&profile, &postings, limit.map(clamp_limit))?;
        serde_json::to_string_pretty(&picks)?
    };

    println!("{rendered}");
    Ok(())
}

pub(crate) fn ranked_with_eligibility(
    engine: &MatchingEngine,
    profile: &CandidateProfile,
    postings: &[OpportunityPosting],
) -> Result<Vec<RankedEligibilityView>, AppError> {
    engine
        .rank(profile, postings)?
        .into_iter()
        .map(|ranked| -> Result<RankedEligibilityView, AppError> {
            let eligibility = engine.eligibility(profile, &ranked.posting)?;
            Ok(RankedEligibilityView {
                ranked,
                eligibility,
            })
        })
        .collect()
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let engine = MatchingEngine::new(config.matching);
    let profile = sample_profile();
    let catalog = sample_catalog();

    println!("Opportunity matching demo");
    println!(
        "Candidate: {} ({} skills, {} badge(s), {} project(s), {} year(s) experience)",
        profile.name.as_deref().unwrap_or("anonymous"),
        profile.skills.len(),
        profile.badges.len(),
        profile.projects_completed,
        profile.years_experience
    );

    println!("\nAll postings by match score");
    for view in ranked_with_eligibility(&engine, &profile, &catalog)? {
        let breakdown = ScoreDimension::ALL
            .iter()
            .map(|dimension| {
                format!(
                    "{} {}/{}",
                    dimension.label(),
                    view.ranked.match_details.breakdown.get(*dimension),
                    dimension.max_points()
                )
            })
            .collect::<Vec<_>>()
            .join(", ");
        println!(
            "- [{:>3}] {} ({})",
            view.ranked.match_score, view.ranked.posting.title, breakdown
        );
        if view.eligibility.is_eligible {
            println!("        eligible");
        } else {
            for issue in &view.eligibility.issues {
                println!("        ! {issue}");
            }
        }
    }

    let limit = demo_limit(&engine, args.limit);
    let picks = engine.recommend(&profile, &catalog, Some(limit))?;
    println!(
        "\nRecommended for you (top {limit}, {} pick(s))",
        picks.len()
    );
    for (position, pick) in picks.iter().enumerate() {
        println!(
            "{}. {} at {} (score {})",
            position + 1,
            pick.posting.title,
            pick.posting.company.as_deref().unwrap_or("unlisted company"),
            pick.match_score
        );
    }

    Ok(())
}

/// `--limit` when given, otherwise the engine's configured default.
pub(crate) fn demo_limit(engine: &MatchingEngine, requested: Option<usize>) -> usize {
    requested.unwrap_or(engine.config().default_limit)
}

pub(crate) fn sample_profile() -> CandidateProfile {
    CandidateProfile {
        id: Some("stu-1187".to_string()),
        name: Some("Demo Student".to_string()),
        skills: vec![
            "JavaScript".to_string(),
            "React".to_string(),
            "Node".to_string(),
            "SQL".to_string(),
        ],
        badges: vec![
            Badge::new("Hackathon Finalist", "silver"),
            Badge::new("Open Source Contributor", "bronze"),
        ],
        projects_completed: 3,
        college: Some("Anna University".to_string()),
        location: Some("Chennai, India".to_string()),
        years_experience: 1.0,
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

pub(crate) fn sample_catalog() -> Vec<OpportunityPosting> {
    vec![
        OpportunityPosting {
            id: "fe-intern".to_string(),
            title: "Frontend Intern".to_string(),
            company: Some("Brightline Labs".to_string()),
            required_skills: strings(&["React", "JavaScript"]),
            preferred_skills: strings(&["TypeScript"]),
            min_projects: 1,
            location: Some("Chennai".to_string()),
            ..OpportunityPosting::default()
        },
        OpportunityPosting {
            id: "fullstack".to_string(),
            title: "Full Stack Developer".to_string(),
            company: Some("Kite Commerce".to_string()),
            required_skills: strings(&["React", "Node", "SQL"]),
            preferred_skills: strings(&["Docker", "AWS"]),
            required_badges: strings(&["Open Source Contributor"]),
            min_projects: 2,
            min_experience: 1.0,
            location: Some("Chennai, India".to_string()),
            college_preference: Some("Anna University".to_string()),
        },
        OpportunityPosting {
            id: "platform".to_string(),
            title: "Platform Engineer".to_string(),
            company: Some("Northwind Cloud".to_string()),
            required_skills: strings(&["Go", "Kubernetes"]),
            required_badges: strings(&["Cloud Practitioner"]),
            min_projects: 4,
            min_experience: 3.0,
            location: Some("Bangalore".to_string()),
            ..OpportunityPosting::default()
        },
        OpportunityPosting {
            id: "ambassador".to_string(),
            title: "Campus Ambassador".to_string(),
            company: None,
            preferred_skills: strings(&["Public Speaking"]),
            ..OpportunityPosting::default()
        },
    ]
}
