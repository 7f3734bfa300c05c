//! Time-of-day focus model.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A time-of-day study slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeSlot {
    Morning,
    Afternoon,
    Night,
}

impl TimeSlot {
    /// All slots in canonical order.
    pub const ALL: [TimeSlot; 3] = [TimeSlot::Morning, TimeSlot::Afternoon, TimeSlot::Night];

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            TimeSlot::Morning => "Morning",
            TimeSlot::Afternoon => "Afternoon",
            TimeSlot::Night => "Night",
        }
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Self-reported focus intensity per time slot.
///
/// Supplied values are 1..=10. A value of 0 means the learner gave no
/// rating for that slot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FocusProfile {
    pub morning: u8,
    pub afternoon: u8,
    pub night: u8,
}

impl FocusProfile {
    /// Creates a profile from Morning, Afternoon, Night intensities.
    pub fn new(morning: u8, afternoon: u8, night: u8) -> Self {
        Self {
            morning,
            afternoon,
            night,
        }
    }

    /// Intensity for a slot.
    pub fn intensity(&self, slot: TimeSlot) -> u8 {
        match slot {
            TimeSlot::Morning => self.morning,
            TimeSlot::Afternoon => self.afternoon,
            TimeSlot::Night => self.night,
        }
    }

    /// Whether all three slots carry the same intensity.
    pub fn is_flat(&self) -> bool {
        self.morning == self.afternoon && self.afternoon == self.night
    }
}

/// Slot(s) recommended for one subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotAssignment {
    /// Slot every subject is studied in.
    pub primary: TimeSlot,
    /// Extra slot granted to the most urgent subjects.
    pub secondary: Option<TimeSlot>,
}

impl SlotAssignment {
    /// Primary slot only.
    pub fn primary(slot: TimeSlot) -> Self {
        Self {
            primary: slot,
            secondary: None,
        }
    }

    /// Primary plus secondary slot.
    pub fn with_secondary(primary: TimeSlot, secondary: TimeSlot) -> Self {
        Self {
            primary,
            secondary: Some(secondary),
        }
    }
}

impl fmt::Display for SlotAssignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.secondary {
            Some(secondary) => write!(f, "{}, {}", self.primary, secondary),
            None => write!(f, "{}", self.primary),
        }
    }
}
