//! Folder name validation within one sibling scope.
//!
//! # Responsibility
//! - Reject blank names.
//! - Reject names colliding with siblings or externally reserved names.
//!
//! # Invariants
//! - Comparison trims surrounding whitespace and ignores case.
//! - The folder being renamed is excluded from its own sibling set by callers.

use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Folder name validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameError {
    /// Candidate is blank after trim.
    Empty,
    /// Candidate collides with a sibling or reserved name.
    Duplicate(String),
}

impl Display for NameError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "folder name must not be blank"),
            Self::Duplicate(name) => write!(f, "folder name already in use: {name}"),
        }
    }
}

impl Error for NameError {}

/// Names claimed by entities outside the tree (for example a backend catalog).
///
/// Stored normalized, so lookups are case-insensitive and trim-insensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReservedNames {
    names: HashSet<String>,
}

impl ReservedNames {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            names: names
                .into_iter()
                .map(|name| comparison_key(name.as_ref()))
                .filter(|key| !key.is_empty())
                .collect(),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(&comparison_key(name))
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for ReservedNames {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// Normalized form used for every name comparison.
pub fn comparison_key(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Returns whether `candidate` collides with a sibling or reserved name.
///
/// Blank candidates are never reported as duplicates; use [`validate_name`]
/// to reject them.
pub fn is_duplicate<'a, I>(candidate: &str, sibling_names: I, reserved: &ReservedNames) -> bool
where
    I: IntoIterator<Item = &'a str>,
{
    let key = comparison_key(candidate);
    if key.is_empty() {
        return false;
    }
    reserved.names.contains(&key)
        || sibling_names
            .into_iter()
            .any(|sibling| comparison_key(sibling) == key)
}

/// Validates one candidate and returns the trimmed name to store.
///
/// # Errors
/// - `NameError::Empty` when the candidate is blank after trim.
/// - `NameError::Duplicate` when it matches a sibling or reserved name.
pub fn validate_name<'a, I>(
    candidate: &str,
    sibling_names: I,
    reserved: &ReservedNames,
) -> Result<String, NameError>
where
    I: IntoIterator<Item = &'a str>,
{
    let trimmed = candidate.trim();
    if trimmed.is_empty() {
        return Err(NameError::Empty);
    }
    if is_duplicate(trimmed, sibling_names, reserved) {
        return Err(NameError::Duplicate(trimmed.to_string()));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::{is_duplicate, validate_name, NameError, ReservedNames};

    #[test]
    fn duplicate_check_ignores_case_and_whitespace() {
        let reserved = ReservedNames::empty();
        assert!(is_duplicate("  reports ", ["Reports"], &reserved));
        assert!(!is_duplicate("Reports 2024", ["Reports"], &reserved));
    }

    #[test]
    fn reserved_names_count_against_candidate() {
        let reserved: ReservedNames = ["Archive", "  Inbox "].into_iter().collect();
        assert!(is_duplicate("inbox", std::iter::empty(), &reserved));
        assert!(is_duplicate("ARCHIVE", std::iter::empty(), &reserved));
        assert_eq!(reserved.len(), 2);
    }

    #[test]
    fn blank_candidate_is_empty_not_duplicate() {
        let reserved = ReservedNames::new(["x"]);
        assert!(!is_duplicate("   ", ["   "], &reserved));
        assert_eq!(
            validate_name("   ", ["Other"], &reserved),
            Err(NameError::Empty)
        );
    }

    #[test]
    fn validate_name_returns_trimmed_value() {
        let name = validate_name("  Q3 Reports ", ["Q2 Reports"], &ReservedNames::empty())
            .expect("name should be accepted");
        assert_eq!(name, "Q3 Reports");
    }

    #[test]
    fn validate_name_reports_trimmed_duplicate() {
        let err = validate_name(" reports ", ["Reports"], &ReservedNames::empty())
            .expect_err("duplicate should be rejected");
        assert_eq!(err, NameError::Duplicate("reports".to_string()));
    }
}
