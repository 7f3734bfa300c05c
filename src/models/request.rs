//! Validated planning input.
//!
//! A [`PlanRequest`] is only constructed through [`crate::validation`], so
//! every instance satisfies the per-subject range and length invariants.
//! Its fields are private; deserialization runs the same validation.

use serde::{Deserialize, Serialize};

use super::{FocusProfile, TimeSlot};
use crate::error::PlanError;
use crate::validation::validate_request;

/// One subject as supplied by the learner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectInput {
    /// Display name (trimmed, capitalized).
    pub name: String,
    /// Self-rated difficulty (1..=10).
    pub difficulty: u8,
    /// Current score (0..=100).
    pub current_score: u8,
}

impl SubjectInput {
    /// Creates a subject record.
    pub fn new(name: impl Into<String>, difficulty: u8, current_score: u8) -> Self {
        Self {
            name: name.into(),
            difficulty,
            current_score,
        }
    }

    /// Urgency used to weight hour allocation: `(100 - score) * difficulty`.
    pub fn need(&self) -> u32 {
        (100 - u32::from(self.current_score.min(100))) * u32::from(self.difficulty)
    }
}

/// A validated study-plan request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PlanRequestFields")]
pub struct PlanRequest {
    subjects: Vec<SubjectInput>,
    total_hours: u32,
    focus: FocusProfile,
}

impl PlanRequest {
    pub(crate) fn new(subjects: Vec<SubjectInput>, total_hours: u32, focus: FocusProfile) -> Self {
        Self {
            subjects,
            total_hours,
            focus,
        }
    }

    /// Subjects in input order (never empty).
    pub fn subjects(&self) -> &[SubjectInput] {
        &self.subjects
    }

    /// Total study-hour budget (> 0).
    pub fn total_hours(&self) -> u32 {
        self.total_hours
    }

    /// Time-of-day focus intensities.
    pub fn focus(&self) -> FocusProfile {
        self.focus
    }

    /// Number of subjects.
    pub fn subject_count(&self) -> usize {
        self.subjects.len()
    }
}

/// Unchecked wire form of a [`PlanRequest`].
#[derive(Deserialize)]
struct PlanRequestFields {
    subjects: Vec<SubjectInput>,
    total_hours: i64,
    #[serde(default)]
    focus: FocusProfile,
}

impl TryFrom<PlanRequestFields> for PlanRequest {
    type Error = PlanError;

    fn try_from(fields: PlanRequestFields) -> Result<Self, Self::Error> {
        let names: Vec<&str> = fields.subjects.iter().map(|s| s.name.as_str()).collect();
        let difficulty: Vec<i64> = fields
            .subjects
            .iter()
            .map(|s| i64::from(s.difficulty))
            .collect();
        let scores: Vec<i64> = fields
            .subjects
            .iter()
            .map(|s| i64::from(s.current_score))
            .collect();
        // 0 is the "no rating" marker.
        let focus: Vec<Option<i64>> = TimeSlot::ALL
            .iter()
            .map(|&slot| match fields.focus.intensity(slot) {
                0 => None,
                v => Some(i64::from(v)),
            })
            .collect();

        validate_request(&names, &difficulty, &scores, fields.total_hours, &focus)
    }
}
