//! # cadence-core
//!
//! Recurrence planning for cloud automation schedules.
//!
//! An automation account owns named schedules that trigger runbooks in a remote
//! management service. Updating a schedule means translating a user-selected
//! recurrence mode (one-time, hourly, daily, weekly, or monthly) plus its
//! mode-specific fields into the normalized descriptor shape the management API
//! expects, validating the mode-specific invariants, and handing the finished
//! request to the service. The triggering engine itself lives entirely on the
//! remote side; this crate is parameter selection and request-shape translation.
//!
//! ## Modules
//!
//! - [`recurrence`] — recurrence modes, descriptor, and advanced-schedule types
//! - [`planner`] — selected mode + fields → normalized descriptor
//! - [`update`] — update request shaping and the remote-service seam
//! - [`ical`] — RFC 5545 RRULE rendering of a descriptor
//! - [`error`] — error types

pub mod error;
pub mod ical;
pub mod planner;
pub mod recurrence;
pub mod update;

pub use error::{PlanError, UpdateError};
pub use ical::to_rrule;
pub use planner::plan;
pub use recurrence::{
    AdvancedSchedule, Frequency, MonthlyOccurrence, Recurrence, RecurrenceDescriptor, ScheduleDay,
};
pub use update::{
    build_update_request, update_schedule, ScheduleResource, ScheduleService, ScheduleTarget,
    ScheduleUpdate, UpdateScheduleRequest,
};
