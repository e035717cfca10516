//! RFC 5545 rendering -- a normalized descriptor into an RRULE string.
//!
//! Representation only: the rendered rule is convenient for callers that feed
//! calendar tooling, and parsing it back through the `rrule` crate doubles as a
//! structural check. No expansion happens here; triggering is the remote
//! engine's job.

use crate::error::{PlanError, Result};
use crate::recurrence::{AdvancedSchedule, Frequency, RecurrenceDescriptor};
use rrule::{RRule, Unvalidated};

/// Render a descriptor as an RFC 5545 RRULE string, e.g.
/// `FREQ=WEEKLY;INTERVAL=2;BYDAY=MO,WE`.
///
/// One-time schedules have no RRULE form and yield `Ok(None)`. A monthly
/// occurrence pattern renders as `BYDAY` plus `BYSETPOS` (negative setpos for
/// "last"); month days render as `BYMONTHDAY`.
///
/// # Errors
/// Returns [`PlanError::InvalidRule`] if the rendered rule fails to parse back
/// through the `rrule` crate.
pub fn to_rrule(descriptor: &RecurrenceDescriptor) -> Result<Option<String>> {
    let freq = match descriptor.frequency {
        Frequency::OneTime => return Ok(None),
        Frequency::Hour => "HOURLY",
        Frequency::Day => "DAILY",
        Frequency::Week => "WEEKLY",
        Frequency::Month => "MONTHLY",
    };

    let mut parts = vec![format!("FREQ={}", freq)];

    if let Some(interval) = descriptor.interval {
        parts.push(format!("INTERVAL={}", interval));
    }

    match &descriptor.advanced_schedule {
        Some(AdvancedSchedule::WeekDays(days)) if !days.is_empty() => {
            let byday: Vec<&str> = days.iter().map(|d| d.ical_abbrev()).collect();
            parts.push(format!("BYDAY={}", byday.join(",")));
        }
        Some(AdvancedSchedule::MonthlyOccurrences(occurrences)) => {
            for occ in occurrences {
                parts.push(format!("BYDAY={}", occ.day.ical_abbrev()));
                parts.push(format!("BYSETPOS={}", occ.occurrence));
            }
        }
        Some(AdvancedSchedule::MonthDays(days)) if !days.is_empty() => {
            let bymonthday: Vec<String> = days.iter().map(|d| d.to_string()).collect();
            parts.push(format!("BYMONTHDAY={}", bymonthday.join(",")));
        }
        _ => {}
    }

    let rendered = parts.join(";");

    // Round the rendered rule through the rrule parser to catch malformed
    // output before a caller does.
    let _parsed: RRule<Unvalidated> = rendered
        .parse()
        .map_err(|e| PlanError::InvalidRule(format!("{}", e)))?;

    Ok(Some(rendered))
}
