use super::domain::{CandidateProfile, OpportunityPosting};

/// Structural problems rejected at the engine boundary.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("{field} must be a finite, non-negative number (found {value})")]
    InvalidNumber { field: &'static str, value: f64 },
    #[error("{field}[{index}] must not be blank")]
    BlankEntry { field: &'static str, index: usize },
    #[error("posting #{index} '{id}' rejected: {source}")]
    Posting {
        index: usize,
        id: String,
        #[source]
        source: Box<ValidationError>,
    },
}

fn check_number(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ValidationError::InvalidNumber { field, value })
    }
}

fn check_entries<'a, I>(field: &'static str, entries: I) -> Result<(), ValidationError>
where
    I: IntoIterator<Item = &'a str>,
{
    match entries
        .into_iter()
        .position(|entry| entry.trim().is_empty())
    {
        Some(index) => Err(ValidationError::BlankEntry { field, index }),
        None => Ok(()),
    }
}

pub fn validate_profile(profile: &CandidateProfile) -> Result<(), ValidationError> {
    check_number("yearsExperience", profile.years_experience)?;
    check_entries("skills", profile.skills.iter().map(String::as_str))?;
    check_entries(
        "badges",
        profile.badges.iter().map(|badge| badge.name.as_str()),
    )?;
    Ok(())
}

pub fn validate_posting(posting: &OpportunityPosting) -> Result<(), ValidationError> {
    check_number("minExperience", posting.min_experience)?;
    check_entries("requiredSkills", posting.required_skills.iter().map(String::as_str))?;
    check_entries(
        "preferredSkills",
        posting.preferred_skills.iter().map(String::as_str),
    )?;
    check_entries("requiredBadges", posting.required_badges.iter().map(String::as_str))?;
    Ok(())
}

/// Validate a catalog, tagging the first failure with the posting's position.
pub fn validate_postings(postings: &[OpportunityPosting]) -> Result<(), ValidationError> {
    for (index, posting) in postings.iter().enumerate() {
        validate_posting(posting).map_err(|source| ValidationError::Posting {
            index,
            id: posting.id.clone(),
            source: Box::new(source),
        })?;
    }
    Ok(())
}
