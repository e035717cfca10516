//! Tests for recurrence normalization.
//!
//! One section per recurrence mode, covering the frequency table, the
//! advanced-schedule shapes, and the monthly pairing invariant.

use cadence_core::{
    plan, AdvancedSchedule, Frequency, PlanError, Recurrence, RecurrenceDescriptor, ScheduleDay,
};
use std::collections::HashSet;

// ---------------------------------------------------------------------------
// One-time
// ---------------------------------------------------------------------------

#[test]
fn one_time_has_no_interval_and_no_advanced_schedule() {
    let descriptor = plan(&Recurrence::OneTime).expect("one-time always plans");

    assert_eq!(
        descriptor,
        RecurrenceDescriptor {
            frequency: Frequency::OneTime,
            interval: None,
            advanced_schedule: None,
        }
    );
}

// ---------------------------------------------------------------------------
// Hourly / daily — interval pass-through
// ---------------------------------------------------------------------------

#[test]
fn hourly_maps_to_hour_frequency() {
    let descriptor = plan(&Recurrence::Hourly { interval: 6 }).unwrap();

    assert_eq!(descriptor.frequency, Frequency::Hour);
    assert_eq!(descriptor.interval, Some(6));
    assert!(descriptor.advanced_schedule.is_none());
}

#[test]
fn daily_maps_to_day_frequency() {
    let descriptor = plan(&Recurrence::Daily { interval: 255 }).unwrap();

    assert_eq!(descriptor.frequency, Frequency::Day);
    assert_eq!(descriptor.interval, Some(255));
    assert!(descriptor.advanced_schedule.is_none());
}

// ---------------------------------------------------------------------------
// Weekly
// ---------------------------------------------------------------------------

#[test]
fn weekly_without_days_has_no_advanced_schedule() {
    let descriptor = plan(&Recurrence::Weekly {
        interval: 1,
        week_days: vec![],
    })
    .unwrap();

    assert_eq!(descriptor.frequency, Frequency::Week);
    assert_eq!(descriptor.interval, Some(1));
    assert!(descriptor.advanced_schedule.is_none());
}

#[test]
fn weekly_weekday_set_is_exactly_the_input_set() {
    let descriptor = plan(&Recurrence::Weekly {
        interval: 2,
        week_days: vec![ScheduleDay::Monday, ScheduleDay::Wednesday],
    })
    .unwrap();

    let days = match descriptor.advanced_schedule {
        Some(AdvancedSchedule::WeekDays(days)) => days,
        other => panic!("expected week days, got {:?}", other),
    };

    // Order-insensitive: compare as sets.
    let got: HashSet<ScheduleDay> = days.into_iter().collect();
    let want: HashSet<ScheduleDay> = [ScheduleDay::Monday, ScheduleDay::Wednesday]
        .into_iter()
        .collect();
    assert_eq!(got, want);
}

// ---------------------------------------------------------------------------
// Monthly by day of week
// ---------------------------------------------------------------------------

#[test]
fn monthly_by_day_of_week_produces_single_occurrence_entry() {
    let descriptor = plan(&Recurrence::MonthlyByDayOfWeek {
        interval: 1,
        day_of_week: Some(ScheduleDay::Friday),
        occurrence: Some(2),
    })
    .unwrap();

    assert_eq!(descriptor.frequency, Frequency::Month);
    assert_eq!(descriptor.interval, Some(1));

    let occurrences = match descriptor.advanced_schedule {
        Some(AdvancedSchedule::MonthlyOccurrences(occurrences)) => occurrences,
        other => panic!("expected monthly occurrences, got {:?}", other),
    };
    assert_eq!(occurrences.len(), 1, "exactly one occurrence entry");
    assert_eq!(occurrences[0].day, ScheduleDay::Friday);
    assert_eq!(occurrences[0].occurrence, 2);
}

#[test]
fn monthly_by_day_of_week_last_friday_uses_negative_occurrence() {
    let descriptor = plan(&Recurrence::MonthlyByDayOfWeek {
        interval: 1,
        day_of_week: Some(ScheduleDay::Friday),
        occurrence: Some(-1),
    })
    .unwrap();

    let occurrences = match descriptor.advanced_schedule {
        Some(AdvancedSchedule::MonthlyOccurrences(occurrences)) => occurrences,
        other => panic!("expected monthly occurrences, got {:?}", other),
    };
    assert_eq!(occurrences[0].occurrence, -1);
}

#[test]
fn monthly_by_day_of_week_with_neither_field_has_no_advanced_schedule() {
    let descriptor = plan(&Recurrence::MonthlyByDayOfWeek {
        interval: 3,
        day_of_week: None,
        occurrence: None,
    })
    .unwrap();

    assert_eq!(descriptor.frequency, Frequency::Month);
    assert_eq!(descriptor.interval, Some(3));
    assert!(descriptor.advanced_schedule.is_none());
}

#[test]
fn day_of_week_without_occurrence_fails_validation() {
    let result = plan(&Recurrence::MonthlyByDayOfWeek {
        interval: 1,
        day_of_week: Some(ScheduleDay::Friday),
        occurrence: None,
    });

    assert!(matches!(result, Err(PlanError::MonthlyOccurrencePairing)));
}

#[test]
fn occurrence_without_day_of_week_fails_validation() {
    let result = plan(&Recurrence::MonthlyByDayOfWeek {
        interval: 1,
        day_of_week: None,
        occurrence: Some(2),
    });

    assert!(matches!(result, Err(PlanError::MonthlyOccurrencePairing)));
}

#[test]
fn explicit_zero_occurrence_is_rejected() {
    // Zero historically stood in for "unset"; with an explicit option type an
    // actual zero is rejected outright instead of silently dropping the pair.
    let result = plan(&Recurrence::MonthlyByDayOfWeek {
        interval: 1,
        day_of_week: Some(ScheduleDay::Friday),
        occurrence: Some(0),
    });

    assert!(matches!(result, Err(PlanError::ZeroOccurrence)));
}

// ---------------------------------------------------------------------------
// Monthly by days of month
// ---------------------------------------------------------------------------

#[test]
fn monthly_by_days_of_month_preserves_input_order() {
    let descriptor = plan(&Recurrence::MonthlyByDaysOfMonth {
        interval: 1,
        month_days: vec![1, 15, 31],
    })
    .unwrap();

    assert_eq!(descriptor.frequency, Frequency::Month);
    assert_eq!(
        descriptor.advanced_schedule,
        Some(AdvancedSchedule::MonthDays(vec![1, 15, 31]))
    );
}

#[test]
fn monthly_by_days_of_month_unsorted_input_stays_unsorted() {
    let descriptor = plan(&Recurrence::MonthlyByDaysOfMonth {
        interval: 2,
        month_days: vec![15, 1],
    })
    .unwrap();

    assert_eq!(
        descriptor.advanced_schedule,
        Some(AdvancedSchedule::MonthDays(vec![15, 1]))
    );
}

#[test]
fn monthly_by_days_of_month_without_days_has_no_advanced_schedule() {
    let descriptor = plan(&Recurrence::MonthlyByDaysOfMonth {
        interval: 6,
        month_days: vec![],
    })
    .unwrap();

    assert_eq!(descriptor.interval, Some(6));
    assert!(descriptor.advanced_schedule.is_none());
}
