//! `cadence` CLI — plan automation schedule updates from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Weekly on Monday and Wednesday, every 2 weeks
//! cadence plan -g ops -a prod-automation -n nightly-backup \
//!     --week-interval 2 --days-of-week monday,wednesday
//!
//! # Second Friday of every month, disabled, with a time zone
//! cadence plan -g ops -a prod-automation -n patch-window \
//!     --month-interval 1 --day-of-week friday --day-of-week-occurrence 2 \
//!     --disabled --time-zone Europe/London
//!
//! # Specific days of the month, request written to a file
//! cadence plan -g ops -a prod-automation -n billing-run \
//!     --month-interval 3 --days-of-month 1,15,31 -o request.json
//!
//! # RFC 5545 rendering of a recurrence
//! cadence rrule --week-interval 2 --days-of-week monday,wednesday
//! ```
//!
//! `plan` validates and normalizes the recurrence, then emits the update
//! request as pretty-printed JSON. The remote call itself lives behind
//! cadence-core's `ScheduleService` seam and is out of this binary's scope.

use anyhow::{Context, Result};
use cadence_core::{
    build_update_request, plan, to_rrule, Recurrence, ScheduleDay, ScheduleTarget, ScheduleUpdate,
};
use chrono::{DateTime, Utc};
use clap::{ArgGroup, Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "cadence",
    version,
    about = "Automation schedule recurrence planner"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the normalized schedule update request and emit it as JSON
    Plan {
        #[command(flatten)]
        target: TargetArgs,

        #[command(flatten)]
        recurrence: RecurrenceArgs,

        /// Enable the schedule
        #[arg(long, conflicts_with = "disabled")]
        enabled: bool,

        /// Disable the schedule
        #[arg(long)]
        disabled: bool,

        /// Description for the schedule
        #[arg(long)]
        description: Option<String>,

        /// Start time, RFC 3339 (e.g. "2026-09-01T02:00:00Z")
        #[arg(long)]
        start_time: Option<DateTime<Utc>>,

        /// Expiry time, RFC 3339
        #[arg(long)]
        expiry_time: Option<DateTime<Utc>>,

        /// IANA time zone for the schedule (e.g. "Europe/London")
        #[arg(long)]
        time_zone: Option<String>,

        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Print the RFC 5545 RRULE rendering of a recurrence
    Rrule {
        #[command(flatten)]
        recurrence: RecurrenceArgs,
    },
}

#[derive(Args)]
struct TargetArgs {
    /// Resource group of the automation account
    #[arg(short = 'g', long)]
    resource_group: String,

    /// Automation account that owns the schedule
    #[arg(short = 'a', long)]
    automation_account: String,

    /// Name of the schedule to update
    #[arg(short = 'n', long)]
    name: String,
}

/// Recurrence parameter groups — exactly one mode flag per invocation.
#[derive(Args)]
#[command(group(
    ArgGroup::new("recurrence")
        .required(true)
        .args(["one_time", "hour_interval", "day_interval", "week_interval", "month_interval"])
))]
struct RecurrenceArgs {
    /// Run once, at the start time only
    #[arg(long)]
    one_time: bool,

    /// Repeat every N hours
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u8).range(1..))]
    hour_interval: Option<u8>,

    /// Repeat every N days
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u8).range(1..))]
    day_interval: Option<u8>,

    /// Repeat every N weeks
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u8).range(1..))]
    week_interval: Option<u8>,

    /// Repeat every N months
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u8).range(1..))]
    month_interval: Option<u8>,

    /// Weekdays for a weekly schedule (comma-separated, e.g. "monday,wednesday")
    #[arg(
        long,
        requires = "week_interval",
        conflicts_with_all = ["one_time", "hour_interval", "day_interval", "month_interval"],
        value_delimiter = ','
    )]
    days_of_week: Vec<ScheduleDay>,

    /// Weekday for a monthly by-day-of-week schedule
    #[arg(long, requires = "month_interval", conflicts_with = "days_of_month")]
    day_of_week: Option<ScheduleDay>,

    /// Which occurrence of the weekday (1-5, or -1 for the last)
    #[arg(
        long,
        requires = "month_interval",
        conflicts_with = "days_of_month",
        allow_negative_numbers = true
    )]
    day_of_week_occurrence: Option<i8>,

    /// Days of the month (comma-separated, 1-31, e.g. "1,15,31")
    #[arg(
        long,
        requires = "month_interval",
        value_delimiter = ',',
        value_parser = clap::value_parser!(u8).range(1..=31)
    )]
    days_of_month: Vec<u8>,
}

impl RecurrenceArgs {
    /// Decide the mode once, at entry. The arg group guarantees exactly one
    /// mode flag is present.
    fn to_recurrence(&self) -> Recurrence {
        if self.one_time {
            Recurrence::OneTime
        } else if let Some(interval) = self.hour_interval {
            Recurrence::Hourly { interval }
        } else if let Some(interval) = self.day_interval {
            Recurrence::Daily { interval }
        } else if let Some(interval) = self.week_interval {
            Recurrence::Weekly {
                interval,
                week_days: self.days_of_week.clone(),
            }
        } else if let Some(interval) = self.month_interval {
            if self.days_of_month.is_empty() {
                Recurrence::MonthlyByDayOfWeek {
                    interval,
                    day_of_week: self.day_of_week,
                    occurrence: self.day_of_week_occurrence,
                }
            } else {
                Recurrence::MonthlyByDaysOfMonth {
                    interval,
                    month_days: self.days_of_month.clone(),
                }
            }
        } else {
            unreachable!("clap enforces exactly one recurrence mode")
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Plan {
            target,
            recurrence,
            enabled,
            disabled,
            description,
            start_time,
            expiry_time,
            time_zone,
            output,
        } => {
            let target = ScheduleTarget {
                resource_group: target.resource_group,
                automation_account: target.automation_account,
                name: target.name,
            };
            let update = ScheduleUpdate {
                enabled: match (enabled, disabled) {
                    (true, _) => Some(true),
                    (_, true) => Some(false),
                    _ => None,
                },
                description,
                start_time,
                expiry_time,
                time_zone,
            };

            let request = build_update_request(target, &recurrence.to_recurrence(), update)
                .context("Failed to plan the schedule update")?;
            let pretty = serde_json::to_string_pretty(&request)?;
            write_output(output.as_deref(), &pretty)?;
        }
        Commands::Rrule { recurrence } => {
            let descriptor = plan(&recurrence.to_recurrence())
                .context("Failed to plan the schedule update")?;
            match to_rrule(&descriptor)? {
                Some(rule) => println!("{}", rule),
                None => println!("one-time schedules have no recurrence rule"),
            }
        }
    }

    Ok(())
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
