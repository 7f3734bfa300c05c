//! Study planning domain models.
//!
//! Provides the data types for planning requests and their results.
//!
//! | Type | Role |
//! |------|------|
//! | `SubjectInput` | One subject with difficulty and current score |
//! | `PlanRequest` | Validated request: subjects, hour budget, focus |
//! | `FocusProfile` | Morning/Afternoon/Night focus intensities |
//! | `SlotAssignment` | Recommended slot(s) for a subject |
//! | `StudyPlan` | Per-subject rows plus suggestions |

mod focus;
mod plan;
mod request;

pub use focus::{FocusProfile, SlotAssignment, TimeSlot};
pub use plan::{PlanTable, StudyPlan, SubjectPlan, PLAN_COLUMNS};
pub use request::{PlanRequest, SubjectInput};
