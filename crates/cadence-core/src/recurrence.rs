//! Recurrence model for automation schedules.
//!
//! The mode-specific fields live inside [`Recurrence`], one variant per mode,
//! so an impossible field combination cannot be represented. The normalized
//! output shape is [`RecurrenceDescriptor`], which serializes camelCase into
//! the management API's wire format.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::PlanError;

/// Day of the week, serialized as the full English name (e.g. `"Monday"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScheduleDay {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl ScheduleDay {
    /// Full English name, matching the wire serialization.
    pub fn name(self) -> &'static str {
        match self {
            ScheduleDay::Monday => "Monday",
            ScheduleDay::Tuesday => "Tuesday",
            ScheduleDay::Wednesday => "Wednesday",
            ScheduleDay::Thursday => "Thursday",
            ScheduleDay::Friday => "Friday",
            ScheduleDay::Saturday => "Saturday",
            ScheduleDay::Sunday => "Sunday",
        }
    }

    /// Two-letter iCalendar abbreviation (RFC 5545 BYDAY).
    pub fn ical_abbrev(self) -> &'static str {
        match self {
            ScheduleDay::Monday => "MO",
            ScheduleDay::Tuesday => "TU",
            ScheduleDay::Wednesday => "WE",
            ScheduleDay::Thursday => "TH",
            ScheduleDay::Friday => "FR",
            ScheduleDay::Saturday => "SA",
            ScheduleDay::Sunday => "SU",
        }
    }
}

impl fmt::Display for ScheduleDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ScheduleDay {
    type Err = PlanError;

    /// Parses full names and three-letter abbreviations, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "monday" | "mon" => Ok(ScheduleDay::Monday),
            "tuesday" | "tue" => Ok(ScheduleDay::Tuesday),
            "wednesday" | "wed" => Ok(ScheduleDay::Wednesday),
            "thursday" | "thu" => Ok(ScheduleDay::Thursday),
            "friday" | "fri" => Ok(ScheduleDay::Friday),
            "saturday" | "sat" => Ok(ScheduleDay::Saturday),
            "sunday" | "sun" => Ok(ScheduleDay::Sunday),
            _ => Err(PlanError::InvalidDay(s.to_string())),
        }
    }
}

/// How often the schedule fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Frequency {
    OneTime,
    Hour,
    Day,
    Week,
    Month,
}

/// A weekday-occurrence-in-month pattern, e.g. the second Friday.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyOccurrence {
    pub day: ScheduleDay,
    /// 1 through 5 counted from the start of the month; -1 means the last
    /// occurrence of that weekday.
    pub occurrence: i8,
}

/// Refinement of a recurrence with specific weekdays, month days, or a
/// weekday-occurrence pattern. Serializes as a single-key object, e.g.
/// `{"weekDays": ["Monday", "Wednesday"]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AdvancedSchedule {
    WeekDays(Vec<ScheduleDay>),
    MonthlyOccurrences(Vec<MonthlyOccurrence>),
    /// Days of the month, 1 through 31, in the order the caller supplied them.
    MonthDays(Vec<u8>),
}

/// Normalized recurrence in the management API's shape.
///
/// Built fresh per call by [`crate::planner::plan`], immutable once built, and
/// consumed once by the update request. Never persisted by this crate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurrenceDescriptor {
    pub frequency: Frequency,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advanced_schedule: Option<AdvancedSchedule>,
}

/// The recurrence mode selected for one invocation, with its mode-specific
/// fields.
///
/// Mirrors a mutually-exclusive parameter-group selection upstream: exactly one
/// variant is active, decided once at entry and never re-checked downstream.
/// Interval fields are constrained to 1..=255 by the input layer.
#[derive(Debug, Clone, PartialEq)]
pub enum Recurrence {
    /// Fires once at the start time.
    OneTime,
    /// Fires every `interval` hours.
    Hourly { interval: u8 },
    /// Fires every `interval` days.
    Daily { interval: u8 },
    /// Fires every `interval` weeks, optionally restricted to specific
    /// weekdays.
    Weekly {
        interval: u8,
        week_days: Vec<ScheduleDay>,
    },
    /// Fires every `interval` months on a weekday-occurrence pattern.
    ///
    /// `day_of_week` and `occurrence` must be supplied together or both
    /// omitted; [`crate::planner::plan`] rejects a lone half of the pair.
    MonthlyByDayOfWeek {
        interval: u8,
        day_of_week: Option<ScheduleDay>,
        occurrence: Option<i8>,
    },
    /// Fires every `interval` months on specific days of the month (1..=31,
    /// range enforced by the input layer).
    MonthlyByDaysOfMonth { interval: u8, month_days: Vec<u8> },
}
