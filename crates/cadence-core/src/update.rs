//! Update request shaping and the seam to the remote management service.
//!
//! The descriptor produced by [`crate::planner::plan`] is combined with the
//! resource identity and the mode-independent pass-through fields into one
//! request value. The remote call itself sits behind [`ScheduleService`];
//! its success or failure, and the resource representation it returns, pass
//! through verbatim. No retry, no interpretation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{PlanError, Result, UpdateError};
use crate::planner::plan;
use crate::recurrence::{Frequency, Recurrence, RecurrenceDescriptor};

/// Identity of the schedule resource being updated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleTarget {
    pub resource_group: String,
    pub automation_account: String,
    pub name: String,
}

/// Mode-independent fields that pass through to the service unchanged.
///
/// The time zone is an IANA identifier; it is validated locally (by parsing as
/// a `chrono_tz::Tz`) so a typo fails before the network call, but is otherwise
/// untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
}

/// The wire shape handed to [`ScheduleService::update_schedule`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateScheduleRequest {
    #[serde(flatten)]
    pub target: ScheduleTarget,
    #[serde(flatten)]
    pub update: ScheduleUpdate,
    pub recurrence: RecurrenceDescriptor,
}

/// The updated schedule resource as returned by the remote service.
///
/// Surfaced to the caller verbatim; this crate never inspects it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleResource {
    pub name: String,
    pub enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub frequency: Frequency,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_run: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
}

/// Seam to the remote management API.
///
/// Implementations own transport, authentication, and timeout policy. Errors
/// are wrapped in [`UpdateError::Service`] and passed through unchanged.
pub trait ScheduleService {
    fn update_schedule(
        &self,
        request: &UpdateScheduleRequest,
    ) -> std::result::Result<ScheduleResource, UpdateError>;
}

/// Validate and assemble the full update request.
///
/// # Errors
/// Returns [`PlanError::InvalidTimezone`] for a time zone that is not a valid
/// IANA identifier, plus any planning error from [`plan`]. All failures occur
/// before anything leaves the process.
pub fn build_update_request(
    target: ScheduleTarget,
    recurrence: &Recurrence,
    update: ScheduleUpdate,
) -> Result<UpdateScheduleRequest> {
    if let Some(tz) = update.time_zone.as_deref() {
        let _tz: chrono_tz::Tz = tz
            .parse()
            .map_err(|_| PlanError::InvalidTimezone(tz.to_string()))?;
    }

    let descriptor = plan(recurrence)?;

    Ok(UpdateScheduleRequest {
        target,
        update,
        recurrence: descriptor,
    })
}

/// Plan the recurrence, shape the request, and forward it to the service.
///
/// Local validation happens first; the service is never invoked with an
/// invalid request. The service's result is returned as-is.
pub fn update_schedule<S: ScheduleService>(
    service: &S,
    target: ScheduleTarget,
    recurrence: &Recurrence,
    update: ScheduleUpdate,
) -> std::result::Result<ScheduleResource, UpdateError> {
    let request = build_update_request(target, recurrence, update)?;
    service.update_schedule(&request)
}
