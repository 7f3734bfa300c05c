//! Study plan (solution) model.
//!
//! A study plan holds one row per requested subject, in input order, and
//! the advisory suggestions derived from those rows.

use serde::{Deserialize, Serialize};

use super::SlotAssignment;

/// Column headers of the rendered plan table.
pub const PLAN_COLUMNS: [&str; 6] = [
    "Subject",
    "Difficulty",
    "Allocated Hours",
    "Best Time",
    "Current Score",
    "Predicted Score",
];

/// Planned study time and predicted outcome for one subject.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubjectPlan {
    /// Subject name.
    pub subject: String,
    /// Difficulty rating (1..=10).
    pub difficulty: u8,
    /// Current score (0..=100).
    pub current_score: u8,
    /// `(100 - current_score) * difficulty`.
    pub need: u32,
    /// Share of the total need (0.0..=1.0).
    pub weight: f64,
    /// Hours allocated, rounded to one decimal.
    pub allocated_hours: f64,
    /// Recommended time slot(s).
    pub best_time: SlotAssignment,
    /// Predicted score (0.0..=100.0), rounded to one decimal.
    pub predicted_score: f64,
    /// Key of the predictor used, `None` for the rule-based estimate.
    pub predictor: Option<String>,
}

impl SubjectPlan {
    /// Predicted gain over the current score.
    pub fn predicted_gain(&self) -> f64 {
        self.predicted_score - f64::from(self.current_score)
    }

    /// Table cells in [`PLAN_COLUMNS`] order.
    pub fn cells(&self) -> Vec<String> {
        vec![
            self.subject.clone(),
            self.difficulty.to_string(),
            format!("{:.1}", self.allocated_hours),
            self.best_time.to_string(),
            self.current_score.to_string(),
            format!("{:.1}", self.predicted_score),
        ]
    }
}

/// A complete study plan.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StudyPlan {
    /// Per-subject rows in input order.
    pub subjects: Vec<SubjectPlan>,
    /// Advisory suggestions in fixed order.
    pub suggestions: Vec<String>,
}

/// Tabular view of a plan for display layers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl StudyPlan {
    /// Number of planned subjects.
    pub fn subject_count(&self) -> usize {
        self.subjects.len()
    }

    /// First row whose subject matches `name` exactly.
    pub fn plan_for(&self, name: &str) -> Option<&SubjectPlan> {
        self.subjects.iter().find(|s| s.subject == name)
    }

    /// Sum of allocated hours across subjects.
    pub fn total_allocated_hours(&self) -> f64 {
        self.subjects.iter().map(|s| s.allocated_hours).sum()
    }

    /// Renders the plan as a table.
    pub fn table(&self) -> PlanTable {
        PlanTable {
            columns: PLAN_COLUMNS.iter().map(|c| c.to_string()).collect(),
            rows: self.subjects.iter().map(SubjectPlan::cells).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TimeSlot;

    fn row(subject: &str, hours: f64, predicted: f64) -> SubjectPlan {
        SubjectPlan {
            subject: subject.into(),
            difficulty: 7,
            current_score: 60,
            need: 280,
            weight: 0.5,
            allocated_hours: hours,
            best_time: SlotAssignment::with_secondary(TimeSlot::Night, TimeSlot::Morning),
            predicted_score: predicted,
            predictor: None,
        }
    }

    #[test]
    fn test_table_rendering() {
        let plan = StudyPlan {
            subjects: vec![row("Math", 6.0, 64.5), row("Reading", 4.0, 61.5)],
            suggestions: vec![],
        };

        let table = plan.table();
        assert_eq!(table.columns.len(), 6);
        assert_eq!(table.columns[2], "Allocated Hours");
        assert_eq!(
            table.rows[0],
            vec!["Math", "7", "6.0", "Night, Morning", "60", "64.5"]
        );
        assert_eq!(table.rows.len(), 2);
    }

    #[test]
    fn test_plan_queries() {
        let plan = StudyPlan {
            subjects: vec![row("Math", 6.0, 64.5), row("Reading", 4.0, 61.5)],
            suggestions: vec![],
        };
        assert_eq!(plan.subject_count(), 2);
        assert!((plan.total_allocated_hours() - 10.0).abs() < 1e-10);
        assert!(plan.plan_for("Reading").is_some());
        assert!(plan.plan_for("Writing").is_none());
        assert!((plan.plan_for("Math").unwrap().predicted_gain() - 4.5).abs() < 1e-10);
    }
}
