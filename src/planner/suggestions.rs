//! Advisory suggestions derived from a plan.
//!
//! Emitted in fixed order:
//!
//! | Condition | Suggestion |
//! |-----------|-----------|
//! | Some scores below the mean | Focus more on those subjects |
//! | Some scores at or above the mean | Revise those subjects weekly |
//! | Hour budget below threshold | Increase total study time |
//! | Primary slot is Morning / Night | Slot-specific tip |
//! | Always | Weekly summary session |

use crate::models::{SubjectPlan, TimeSlot};

/// Default hour budget below which more study time is suggested.
pub const DEFAULT_LOW_HOURS_THRESHOLD: u32 = 10;

/// Closing suggestion appended to every plan.
pub const WEEKLY_SUMMARY: &str = "End each week with a 1-hour summary session.";
/// Suggestion when the primary slot is Morning.
pub const MORNING_TIP: &str = "Morning focus: schedule tough subjects early.";
/// Suggestion when the primary slot is Night.
pub const NIGHT_TIP: &str = "Night focus: ideal for revision sessions.";
/// Suggestion when the hour budget is low.
pub const MORE_HOURS_TIP: &str = "Try increasing total study time for consistent results.";

/// Builds the suggestion list for a plan.
///
/// `rows` must be in input order; subject names keep that order in the
/// generated text.
pub fn generate_suggestions(
    rows: &[SubjectPlan],
    total_hours: u32,
    primary: TimeSlot,
    low_hours_threshold: u32,
) -> Vec<String> {
    let mut suggestions = Vec::new();

    if !rows.is_empty() {
        let mean = rows
            .iter()
            .map(|r| f64::from(r.current_score))
            .sum::<f64>()
            / rows.len() as f64;

        let (weak, strong): (Vec<&SubjectPlan>, Vec<&SubjectPlan>) = rows
            .iter()
            .partition(|r| f64::from(r.current_score) < mean);

        if !weak.is_empty() {
            suggestions.push(format!(
                "Focus more on {}: below your average.",
                join_names(&weak)
            ));
        }
        if !strong.is_empty() {
            suggestions.push(format!(
                "Revise {} weekly to retain strengths.",
                join_names(&strong)
            ));
        }
    }

    if total_hours < low_hours_threshold {
        suggestions.push(MORE_HOURS_TIP.to_string());
    }

    match primary {
        TimeSlot::Morning => suggestions.push(MORNING_TIP.to_string()),
        TimeSlot::Night => suggestions.push(NIGHT_TIP.to_string()),
        TimeSlot::Afternoon => {}
    }

    suggestions.push(WEEKLY_SUMMARY.to_string());
    suggestions
}

fn join_names(rows: &[&SubjectPlan]) -> String {
    rows.iter()
        .map(|r| r.subject.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
