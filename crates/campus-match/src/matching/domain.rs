use serde::{Deserialize, Serialize};

/// Earned credential listed on a candidate profile.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Badge {
    pub name: String,
    #[serde(default)]
    pub level: String,
}

impl Badge {
    pub fn new(name: impl Into<String>, level: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            level: level.into(),
        }
    }
}

/// Skills and experience record of the person being matched.
///
/// Owned by the profile subsystem; the engine only reads it. `skills` is the one field a
/// payload must carry, everything else falls back to an empty or zero value.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub skills: Vec<String>,
    #[serde(default)]
    pub badges: Vec<Badge>,
    #[serde(default)]
    pub projects_completed: u32,
    #[serde(default)]
    pub college: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub years_experience: f64,
}

/// Job or internship listing with its required and preferred criteria.
///
/// `id`, `title` and `company` are carried for display only and never influence matching.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpportunityPosting {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default)]
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub preferred_skills: Vec<String>,
    #[serde(default)]
    pub required_badges: Vec<String>,
    #[serde(default)]
    pub min_projects: u32,
    #[serde(default)]
    pub min_experience: f64,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub college_preference: Option<String>,
}

/// The six weighted scoring axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreDimension {
    Skills,
    Badges,
    Projects,
    Experience,
    Location,
    College,
}

impl ScoreDimension {
    pub const ALL: [ScoreDimension; 6] = [
        ScoreDimension::Skills,
        ScoreDimension::Badges,
        ScoreDimension::Projects,
        ScoreDimension::Experience,
        ScoreDimension::Location,
        ScoreDimension::College,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            ScoreDimension::Skills => "skills",
            ScoreDimension::Badges => "badges",
            ScoreDimension::Projects => "projects",
            ScoreDimension::Experience => "experience",
            ScoreDimension::Location => "location",
            ScoreDimension::College => "college",
        }
    }

    /// Maximum contribution of the dimension to the 0–100 total.
    pub const fn max_points(self) -> u8 {
        match self {
            ScoreDimension::Skills => 40,
            ScoreDimension::Badges => 20,
            ScoreDimension::Projects => 15,
            ScoreDimension::Experience => 10,
            ScoreDimension::Location => 10,
            ScoreDimension::College => 5,
        }
    }
}

/// Rounded per-dimension sub-scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MatchBreakdown {
    pub skills: u8,
    pub badges: u8,
    pub projects: u8,
    pub experience: u8,
    pub location: u8,
    pub college: u8,
}

impl MatchBreakdown {
    pub fn get(&self, dimension: ScoreDimension) -> u8 {
        match dimension {
            ScoreDimension::Skills => self.skills,
            ScoreDimension::Badges => self.badges,
            ScoreDimension::Projects => self.projects,
            ScoreDimension::Experience => self.experience,
            ScoreDimension::Location => self.location,
            ScoreDimension::College => self.college,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (ScoreDimension, u8)> + '_ {
        ScoreDimension::ALL
            .into_iter()
            .map(move |dimension| (dimension, self.get(dimension)))
    }

    /// Sum of the rounded entries. May differ from [`MatchResult::score`] by rounding drift.
    pub fn total(&self) -> u16 {
        self.iter().map(|(_, points)| u16::from(points)).sum()
    }
}

/// Compatibility score for one (candidate, posting) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub score: u8,
    pub breakdown: MatchBreakdown,
}

/// Hard eligibility verdict with one human-readable line per unmet requirement.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EligibilityResult {
    pub is_eligible: bool,
    pub issues: Vec<String>,
}

impl EligibilityResult {
    pub fn from_issues(issues: Vec<String>) -> Self {
        Self {
            is_eligible: issues.is_empty(),
            issues,
        }
    }
}

/// Posting annotated with its match score, as handed to ranked displays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedPosting {
    #[serde(flatten)]
    pub posting: OpportunityPosting,
    pub match_score: u8,
    pub match_details: MatchResult,
}

impl RankedPosting {
    pub fn new(posting: OpportunityPosting, details: MatchResult) -> Self {
        Self {
            posting,
            match_score: details.score,
            match_details: details,
        }
    }
}
