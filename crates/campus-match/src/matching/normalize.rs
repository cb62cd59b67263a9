use std::collections::HashSet;

use super::domain::{CandidateProfile, OpportunityPosting};

/// Canonical comparison form: trimmed and lowercased.
pub(crate) fn canonical(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Clamp thresholds and counts to finite, non-negative values.
pub(crate) fn non_negative(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

fn canonical_field(value: Option<&str>) -> Option<String> {
    value.map(canonical).filter(|value| !value.is_empty())
}

/// Case-insensitive term set that keeps the first spelling of each term in insertion order.
///
/// Blank entries are dropped and duplicates collapse, so a requirement listed twice in
/// different casing counts once.
#[derive(Debug, Clone, Default)]
pub(crate) struct TermSet {
    ordered: Vec<(String, String)>,
    index: HashSet<String>,
}

impl TermSet {
    pub(crate) fn from_terms<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::default();
        for term in terms {
            let original = term.as_ref();
            let key = canonical(original);
            if key.is_empty() || !set.index.insert(key.clone()) {
                continue;
            }
            set.ordered.push((key, original.trim().to_string()));
        }
        set
    }

    pub(crate) fn len(&self) -> usize {
        self.ordered.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    pub(crate) fn contains(&self, key: &str) -> bool {
        self.index.contains(key)
    }

    /// Number of terms of `self` also present in `other`.
    pub(crate) fn matched_in(&self, other: &TermSet) -> usize {
        self.ordered
            .iter()
            .filter(|(key, _)| other.contains(key))
            .count()
    }

    /// Original spellings of terms of `self` absent from `other`, in insertion order.
    pub(crate) fn missing_from(&self, other: &TermSet) -> Vec<String> {
        self.ordered
            .iter()
            .filter(|(key, _)| !other.contains(key))
            .map(|(_, original)| original.clone())
            .collect()
    }
}

/// How closely two free-text fields (location, college) agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Closeness {
    Exact,
    Partial,
    Unrelated,
}

/// Exact match, substring in either direction, or nothing. Absent sides are unrelated.
pub(crate) fn closeness(left: Option<&str>, right: Option<&str>) -> Closeness {
    match (left, right) {
        (Some(left), Some(right)) if left == right => Closeness::Exact,
        (Some(left), Some(right)) if left.contains(right) || right.contains(left) => {
            Closeness::Partial
        }
        _ => Closeness::Unrelated,
    }
}

/// Candidate profile in canonical form, computed once per engine call.
#[derive(Debug, Clone)]
pub(crate) struct NormalizedProfile {
    pub skills: TermSet,
    pub badges: TermSet,
    pub projects_completed: u32,
    pub years_experience: f64,
    pub location: Option<String>,
    pub college: Option<String>,
}

impl NormalizedProfile {
    pub(crate) fn new(profile: &CandidateProfile) -> Self {
        Self {
            skills: TermSet::from_terms(&profile.skills),
            badges: TermSet::from_terms(profile.badges.iter().map(|badge| badge.name.as_str())),
            projects_completed: profile.projects_completed,
            years_experience: non_negative(profile.years_experience),
            location: canonical_field(profile.location.as_deref()),
            college: canonical_field(profile.college.as_deref()),
        }
    }
}

/// Posting requirements in canonical form.
#[derive(Debug, Clone)]
pub(crate) struct NormalizedPosting {
    pub required_skills: TermSet,
    pub preferred_skills: TermSet,
    pub required_badges: TermSet,
    pub min_projects: u32,
    pub min_experience: f64,
    pub location: Option<String>,
    pub college_preference: Option<String>,
}

impl NormalizedPosting {
    pub(crate) fn new(posting: &OpportunityPosting) -> Self {
        Self {
            required_skills: TermSet::from_terms(&posting.required_skills),
            preferred_skills: TermSet::from_terms(&posting.preferred_skills),
            required_badges: TermSet::from_terms(&posting.required_badges),
            min_projects: posting.min_projects,
            min_experience: non_negative(posting.min_experience),
            location: canonical_field(posting.location.as_deref()),
            college_preference: canonical_field(posting.college_preference.as_deref()),
        }
    }
}
