//! Recurrence normalization -- selected mode and fields into a wire descriptor.
//!
//! Pure translation: no I/O, no side effects. The only validation performed
//! here is the monthly weekday/occurrence pairing invariant; interval and
//! month-day ranges are enforced by the input layer.

use crate::error::{PlanError, Result};
use crate::recurrence::{
    AdvancedSchedule, Frequency, MonthlyOccurrence, Recurrence, RecurrenceDescriptor, ScheduleDay,
};

/// Normalize a selected recurrence mode into a [`RecurrenceDescriptor`].
///
/// | Mode | Frequency | Interval | Advanced schedule |
/// |---|---|---|---|
/// | `OneTime` | `OneTime` | none | none |
/// | `Hourly` | `Hour` | hour interval | none |
/// | `Daily` | `Day` | day interval | none |
/// | `Weekly` | `Week` | week interval | weekday set, if non-empty |
/// | `MonthlyByDayOfWeek` | `Month` | month interval | one occurrence entry, if both fields given |
/// | `MonthlyByDaysOfMonth` | `Month` | month interval | month-day list, if non-empty |
///
/// # Errors
/// Returns [`PlanError::MonthlyOccurrencePairing`] when exactly one of the
/// monthly weekday/occurrence pair is supplied, and [`PlanError::ZeroOccurrence`]
/// for an explicit occurrence of zero.
pub fn plan(recurrence: &Recurrence) -> Result<RecurrenceDescriptor> {
    let descriptor = match recurrence {
        Recurrence::OneTime => RecurrenceDescriptor {
            frequency: Frequency::OneTime,
            interval: None,
            advanced_schedule: None,
        },
        Recurrence::Hourly { interval } => interval_only(Frequency::Hour, *interval),
        Recurrence::Daily { interval } => interval_only(Frequency::Day, *interval),
        Recurrence::Weekly {
            interval,
            week_days,
        } => RecurrenceDescriptor {
            frequency: Frequency::Week,
            interval: Some(*interval),
            advanced_schedule: if week_days.is_empty() {
                None
            } else {
                Some(AdvancedSchedule::WeekDays(week_days.clone()))
            },
        },
        Recurrence::MonthlyByDayOfWeek {
            interval,
            day_of_week,
            occurrence,
        } => RecurrenceDescriptor {
            frequency: Frequency::Month,
            interval: Some(*interval),
            advanced_schedule: monthly_occurrence(*day_of_week, *occurrence)?,
        },
        Recurrence::MonthlyByDaysOfMonth {
            interval,
            month_days,
        } => RecurrenceDescriptor {
            frequency: Frequency::Month,
            interval: Some(*interval),
            // Caller order is preserved on the wire.
            advanced_schedule: if month_days.is_empty() {
                None
            } else {
                Some(AdvancedSchedule::MonthDays(month_days.clone()))
            },
        },
    };

    Ok(descriptor)
}

fn interval_only(frequency: Frequency, interval: u8) -> RecurrenceDescriptor {
    RecurrenceDescriptor {
        frequency,
        interval: Some(interval),
        advanced_schedule: None,
    }
}

/// Build the single-entry occurrence schedule for monthly-by-day-of-week.
///
/// The weekday and the occurrence index travel as a pair: both present yields
/// one entry, both absent yields no advanced schedule, and a lone half is
/// invalid input.
fn monthly_occurrence(
    day_of_week: Option<ScheduleDay>,
    occurrence: Option<i8>,
) -> Result<Option<AdvancedSchedule>> {
    match (day_of_week, occurrence) {
        (Some(day), Some(occurrence)) => {
            if occurrence == 0 {
                return Err(PlanError::ZeroOccurrence);
            }
            Ok(Some(AdvancedSchedule::MonthlyOccurrences(vec![
                MonthlyOccurrence { day, occurrence },
            ])))
        }
        (None, None) => Ok(None),
        _ => Err(PlanError::MonthlyOccurrencePairing),
    }
}
