//! Input validation for study planning.
//!
//! Turns raw request values into a [`PlanRequest`]. Detects:
//! - Non-numeric fields, empty subject lists or names, malformed focus triples
//! - Per-subject sequences of different lengths
//! - Difficulty, score, or focus values outside their ranges
//! - Non-positive hour budgets
//!
//! Checks run in that order and the first failure is returned.

use crate::error::PlanError;
use crate::models::{FocusProfile, PlanRequest, SubjectInput};

/// Allowed difficulty range.
pub const DIFFICULTY_RANGE: (i64, i64) = (1, 10);
/// Allowed score range.
pub const SCORE_RANGE: (i64, i64) = (0, 100);
/// Allowed range for a supplied focus intensity.
pub const FOCUS_RANGE: (i64, i64) = (1, 10);

/// Parses and validates a request given in text form.
///
/// `subjects`, `difficulty` and `scores` are comma-separated lists.
/// `focus` holds the Morning, Afternoon and Night intensities; missing or
/// blank entries become 0 (no preference).
///
/// # Example
///
/// ```
/// use u_study::validation::parse_request;
///
/// let request = parse_request(
///     " math , reading",
///     "7, 4",
///     "55,80",
///     "12",
///     &[Some("8"), None, Some("3")],
/// )
/// .unwrap();
///
/// assert_eq!(request.subjects()[0].name, "Math");
/// assert_eq!(request.total_hours(), 12);
/// assert_eq!(request.focus().afternoon, 0);
/// ```
pub fn parse_request(
    subjects: &str,
    difficulty: &str,
    scores: &str,
    hours: &str,
    focus: &[Option<&str>],
) -> Result<PlanRequest, PlanError> {
    let names = split_list(subjects);
    let difficulty = parse_list("difficulty", difficulty)?;
    let scores = parse_list("score", scores)?;
    let hours = parse_number("hours", hours)?;
    let focus = parse_focus(focus)?;

    validate_request(&names, &difficulty, &scores, hours, &focus)
}

/// Validates already-typed request values.
///
/// `focus` must contain exactly three optional intensities
/// (Morning, Afternoon, Night).
pub fn validate_request<S: AsRef<str>>(
    subjects: &[S],
    difficulty: &[i64],
    scores: &[i64],
    total_hours: i64,
    focus: &[Option<i64>],
) -> Result<PlanRequest, PlanError> {
    let names = subjects
        .iter()
        .map(|s| normalize_subject(s.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;
    if names.is_empty() {
        return Err(PlanError::format("At least one subject is required"));
    }

    if focus.len() != 3 {
        return Err(PlanError::format(format!(
            "Focus must have exactly 3 values (morning, afternoon, night), got {}",
            focus.len()
        )));
    }

    if names.len() != difficulty.len() || names.len() != scores.len() {
        return Err(PlanError::LengthMismatch {
            subjects: names.len(),
            difficulty: difficulty.len(),
            scores: scores.len(),
        });
    }

    let mut inputs = Vec::with_capacity(names.len());
    for ((name, &d), &s) in names.into_iter().zip(difficulty).zip(scores) {
        let d = check_range("difficulty", d, DIFFICULTY_RANGE)?;
        let s = check_range("score", s, SCORE_RANGE)?;
        inputs.push(SubjectInput::new(name, d, s));
    }

    let mut intensities = [0u8; 3];
    for (slot, value) in intensities.iter_mut().zip(focus) {
        if let Some(v) = value {
            *slot = check_range("focus", *v, FOCUS_RANGE)?;
        }
    }

    if total_hours <= 0 {
        return Err(PlanError::InvalidBudget(total_hours));
    }
    let total_hours = u32::try_from(total_hours)
        .map_err(|_| PlanError::range("hours", total_hours, 1, i64::from(u32::MAX)))?;

    Ok(PlanRequest::new(
        inputs,
        total_hours,
        FocusProfile::new(intensities[0], intensities[1], intensities[2]),
    ))
}

/// Trims a subject name and capitalizes it (first letter upper, rest lower).
pub fn normalize_subject(raw: &str) -> Result<String, PlanError> {
    let trimmed = raw.trim();
    let mut chars = trimmed.chars();
    match chars.next() {
        None => Err(PlanError::format("Subject names must not be empty")),
        Some(first) => Ok(first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect()),
    }
}

fn split_list(raw: &str) -> Vec<&str> {
    raw.split(',').collect()
}

fn parse_number(field: &str, raw: &str) -> Result<i64, PlanError> {
    let token = raw.trim();
    token.parse::<i64>().map_err(|_| {
        PlanError::format(format!(
            "Invalid {field} value '{token}': expected a whole number"
        ))
    })
}

fn parse_list(field: &str, raw: &str) -> Result<Vec<i64>, PlanError> {
    split_list(raw)
        .into_iter()
        .map(|token| parse_number(field, token))
        .collect()
}

fn parse_focus(raw: &[Option<&str>]) -> Result<Vec<Option<i64>>, PlanError> {
    raw.iter()
        .map(|entry| match entry.map(str::trim) {
            None | Some("") => Ok(None),
            Some(token) => parse_number("focus", token).map(Some),
        })
        .collect()
}

fn check_range(field: &'static str, value: i64, (min, max): (i64, i64)) -> Result<u8, PlanError> {
    if value < min || value > max {
        return Err(PlanError::range(field, value, min, max));
    }
    // Ranges above are all within u8.
    Ok(value as u8)
}
