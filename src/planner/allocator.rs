//! Need-weighted hour allocation.
//!
//! # Algorithm
//!
//! 1. `need = (100 - current_score) * difficulty` per subject.
//! 2. `weight = need / sum(need)`; equal weights when every need is zero.
//! 3. `hours = round(weight * total_hours, 1 decimal)`.
//!
//! Rounding is per subject, so the hour sum may drift from the budget by up
//! to 0.05 per subject.

use crate::error::PlanError;
use crate::models::SubjectInput;
use crate::round1;

/// Allocation result for one subject.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Allocation {
    /// `(100 - current_score) * difficulty`.
    pub need: u32,
    /// Share of the total need.
    pub weight: f64,
    /// Allocated hours, rounded to one decimal.
    pub hours: f64,
}

/// Splits `total_hours` across subjects in proportion to need.
///
/// Returns allocations in input order.
///
/// # Errors
/// [`PlanError::InvalidBudget`] when `total_hours` is zero.
///
/// # Example
///
/// ```
/// use u_study::models::SubjectInput;
/// use u_study::planner::allocate_hours;
///
/// let subjects = vec![
///     SubjectInput::new("Math", 8, 40),    // need 480
///     SubjectInput::new("Reading", 4, 70), // need 120
/// ];
/// let allocations = allocate_hours(&subjects, 10).unwrap();
/// assert!((allocations[0].hours - 8.0).abs() < 1e-10);
/// assert!((allocations[1].hours - 2.0).abs() < 1e-10);
/// ```
pub fn allocate_hours(
    subjects: &[SubjectInput],
    total_hours: u32,
) -> Result<Vec<Allocation>, PlanError> {
    if total_hours == 0 {
        return Err(PlanError::InvalidBudget(0));
    }
    if subjects.is_empty() {
        return Ok(Vec::new());
    }

    let needs: Vec<u32> = subjects.iter().map(SubjectInput::need).collect();
    let total_need: u64 = needs.iter().map(|&n| u64::from(n)).sum();
    let budget = f64::from(total_hours);

    let allocations = needs
        .into_iter()
        .map(|need| {
            let weight = if total_need == 0 {
                1.0 / subjects.len() as f64
            } else {
                f64::from(need) / total_need as f64
            };
            Allocation {
                need,
                weight,
                hours: round1(weight * budget),
            }
        })
        .collect();

    Ok(allocations)
}
