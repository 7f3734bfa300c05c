//! Time-of-day slot assignment.
//!
//! # Algorithm
//!
//! 1. Rank Morning/Afternoon/Night by focus intensity. The highest becomes
//!    the primary slot, the runner-up the secondary slot. Equal intensities
//!    keep canonical order. A completely flat profile yields
//!    Afternoon (primary) and Morning (secondary).
//! 2. Every subject gets the primary slot.
//! 3. The top `ceil(n * secondary_share)` subjects by descending need (at
//!    least one) additionally get the secondary slot.

use crate::models::{FocusProfile, SlotAssignment, TimeSlot};

/// Default share of subjects that receive a secondary slot.
pub const DEFAULT_SECONDARY_SHARE: f64 = 0.4;

/// Assigns focus slots to subjects.
///
/// # Example
///
/// ```
/// use u_study::models::{FocusProfile, TimeSlot};
/// use u_study::planner::FocusScheduler;
///
/// let scheduler = FocusScheduler::new();
/// let slots = scheduler.assign(&FocusProfile::new(2, 4, 9), &[100, 400, 250]);
///
/// assert_eq!(slots[0].to_string(), "Night");
/// assert_eq!(slots[1].to_string(), "Night, Afternoon");
/// assert_eq!(slots[2].to_string(), "Night, Afternoon");
/// ```
#[derive(Debug, Clone)]
pub struct FocusScheduler {
    secondary_share: f64,
}

impl FocusScheduler {
    /// Creates a scheduler with the default secondary share.
    pub fn new() -> Self {
        Self {
            secondary_share: DEFAULT_SECONDARY_SHARE,
        }
    }

    /// Sets the share of subjects that receive the secondary slot.
    pub fn with_secondary_share(mut self, share: f64) -> Self {
        self.secondary_share = share;
        self
    }

    /// Returns `(primary, secondary)` slots for a focus profile.
    pub fn rank_slots(&self, focus: &FocusProfile) -> (TimeSlot, TimeSlot) {
        if focus.is_flat() {
            return (TimeSlot::Afternoon, TimeSlot::Morning);
        }

        let mut ranked = TimeSlot::ALL;
        // Stable sort keeps canonical order among equal intensities.
        ranked.sort_by(|a, b| focus.intensity(*b).cmp(&focus.intensity(*a)));
        (ranked[0], ranked[1])
    }

    /// Number of subjects (out of `subject_count`) that get a secondary slot.
    pub fn secondary_count(&self, subject_count: usize) -> usize {
        if subject_count == 0 {
            return 0;
        }
        // Epsilon absorbs float error, e.g. 5 * 0.4 must give 2.
        let raw = (subject_count as f64 * self.secondary_share - 1e-9).ceil();
        (raw.max(1.0) as usize).min(subject_count)
    }

    /// Assigns slots to subjects, returned in input order.
    ///
    /// `needs` holds each subject's need. Ties in need keep input order.
    pub fn assign(&self, focus: &FocusProfile, needs: &[u32]) -> Vec<SlotAssignment> {
        let (primary, secondary) = self.rank_slots(focus);
        let mut slots = vec![SlotAssignment::primary(primary); needs.len()];

        let mut by_need: Vec<usize> = (0..needs.len()).collect();
        by_need.sort_by(|&a, &b| needs[b].cmp(&needs[a]));

        for &idx in by_need.iter().take(self.secondary_count(needs.len())) {
            slots[idx] = SlotAssignment::with_secondary(primary, secondary);
        }

        slots
    }
}

impl Default for FocusScheduler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_profile_fallback() {
        let scheduler = FocusScheduler::new();
        assert_eq!(
            scheduler.rank_slots(&FocusProfile::new(0, 0, 0)),
            (TimeSlot::Afternoon, TimeSlot::Morning)
        );
        assert_eq!(
            scheduler.rank_slots(&FocusProfile::new(7, 7, 7)),
            (TimeSlot::Afternoon, TimeSlot::Morning)
        );
    }

    #[test]
    fn test_rank_by_intensity() {
        let scheduler = FocusScheduler::new();
        assert_eq!(
            scheduler.rank_slots(&FocusProfile::new(9, 2, 5)),
            (TimeSlot::Morning, TimeSlot::Night)
        );
        assert_eq!(
            scheduler.rank_slots(&FocusProfile::new(1, 6, 8)),
            (TimeSlot::Night, TimeSlot::Afternoon)
        );
    }

    #[test]
    fn test_partial_tie_keeps_canonical_order() {
        let scheduler = FocusScheduler::new();
        // Morning and Night tie at the top.
        assert_eq!(
            scheduler.rank_slots(&FocusProfile::new(8, 3, 8)),
            (TimeSlot::Morning, TimeSlot::Night)
        );
        // Afternoon and Night tie for second.
        assert_eq!(
            scheduler.rank_slots(&FocusProfile::new(9, 4, 4)),
            (TimeSlot::Morning, TimeSlot::Afternoon)
        );
    }

    #[test]
    fn test_secondary_count() {
        let scheduler = FocusScheduler::new();
        assert_eq!(scheduler.secondary_count(0), 0);
        assert_eq!(scheduler.secondary_count(1), 1);
        assert_eq!(scheduler.secondary_count(2), 1);
        assert_eq!(scheduler.secondary_count(3), 2);
        assert_eq!(scheduler.secondary_count(5), 2);
        assert_eq!(scheduler.secondary_count(6), 3);
        assert_eq!(scheduler.secondary_count(10), 4);
    }

    #[test]
    fn test_custom_share() {
        let scheduler = FocusScheduler::new().with_secondary_share(1.0);
        assert_eq!(scheduler.secondary_count(4), 4);

        let scheduler = FocusScheduler::new().with_secondary_share(0.01);
        assert_eq!(scheduler.secondary_count(4), 1);
    }

    #[test]
    fn test_assign_top_need_gets_secondary() {
        let scheduler = FocusScheduler::new();
        let focus = FocusProfile::new(10, 5, 1);
        let slots = scheduler.assign(&focus, &[50, 300, 120, 80, 10]);

        // 5 subjects → 2 with secondary: needs 300 and 120
        let both = SlotAssignment::with_secondary(TimeSlot::Morning, TimeSlot::Afternoon);
        let only = SlotAssignment::primary(TimeSlot::Morning);
        assert_eq!(slots, vec![only, both, both, only, only]);
    }

    #[test]
    fn test_assign_need_ties_keep_input_order() {
        let scheduler = FocusScheduler::new();
        let slots = scheduler.assign(&FocusProfile::default(), &[250, 250, 250]);
        // 3 subjects → 2 with secondary, first two in input order
        assert_eq!(slots[0].to_string(), "Afternoon, Morning");
        assert_eq!(slots[1].to_string(), "Afternoon, Morning");
        assert_eq!(slots[2].to_string(), "Afternoon");
    }

    #[test]
    fn test_assign_single_subject() {
        let scheduler = FocusScheduler::new();
        let slots = scheduler.assign(&FocusProfile::new(1, 2, 3), &[0]);
        assert_eq!(slots[0].secondary, Some(TimeSlot::Afternoon));
    }

    #[test]
    fn test_assign_empty() {
        let scheduler = FocusScheduler::new();
        assert!(scheduler.assign(&FocusProfile::default(), &[]).is_empty());
    }
}
