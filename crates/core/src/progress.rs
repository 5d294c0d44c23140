//! Progress and shell-balance calculator.
//!
//! Pure functions only: the roster of a user's projects (with their tracked
//! hours already summed) goes in, a full [`ProgressMetrics`] breakdown comes
//! out. Identical inputs always yield identical output and nothing here
//! touches the store.

/* --------------------------------------------------------------------------
Constants
-------------------------------------------------------------------------- */

/// Maximum hours a single project can contribute toward progress.
pub const PROJECT_HOUR_CAP: f64 = 15.0;

/// Total tracked hours required for 100% progress (four full projects).
pub const TOTAL_HOURS_REQUIRED: f64 = 60.0;

/* --------------------------------------------------------------------------
Inputs
-------------------------------------------------------------------------- */

/// Per-project input to the calculator: status flags plus the summed
/// effective hours of the project's tracked-time links.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectHours {
    pub shipped: bool,
    pub viral: bool,
    pub hours: f64,
}

/// The injected hours-to-shells conversion.
///
/// The coefficient comes from configuration (`SHELLS_PER_HOUR`) rather than
/// being hard-coded here; negative rates are clamped to zero so the
/// conversion stays monotonic.
#[derive(Debug, Clone, Copy)]
pub struct ShellRate {
    shells_per_hour: f64,
}

impl ShellRate {
    pub fn new(shells_per_hour: f64) -> Self {
        Self {
            shells_per_hour: shells_per_hour.max(0.0),
        }
    }

    /// Shells earned for a given number of progress hours.
    pub fn earned_shells(&self, hours: f64) -> f64 {
        self.shells_per_hour * hours
    }
}

/* --------------------------------------------------------------------------
Output
-------------------------------------------------------------------------- */

/// Full progress breakdown for one user.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressMetrics {
    pub available_shells: f64,
    pub total_hours: f64,
    pub total_percentage: f64,
    pub shipped_hours: f64,
    pub viral_hours: f64,
    pub other_hours: f64,
    pub purchased_progress_hours: f64,
    pub total_progress_with_purchased: f64,
    pub total_percentage_with_purchased: f64,
}

/* --------------------------------------------------------------------------
Calculation
-------------------------------------------------------------------------- */

/// Effective hours of a single tracked-time link: a reviewer-set override
/// wins over the raw synced value.
pub fn effective_link_hours(raw_hours: f64, hours_override: Option<f64>) -> f64 {
    hours_override.unwrap_or(raw_hours)
}

/// Compute the full progress and shell breakdown for one user.
///
/// Bucketing precedence is viral, then shipped, then other, so a project
/// that is both viral and shipped counts exactly once. Each project
/// contributes at most [`PROJECT_HOUR_CAP`] hours; percentages are clamped
/// at 100 but hour totals are not.
///
/// The shell balance is
/// `earned(total_hours) + purchased − spent + admin_adjustment`, where
/// purchased progress hours credit one shell per hour and the earned
/// conversion is the injected [`ShellRate`].
pub fn calculate_progress_metrics(
    projects: &[ProjectHours],
    purchased_progress_hours: f64,
    total_shells_spent: i32,
    admin_shell_adjustment: i32,
    rate: ShellRate,
) -> ProgressMetrics {
    let mut shipped_hours = 0.0;
    let mut viral_hours = 0.0;
    let mut other_hours = 0.0;

    for project in projects {
        let capped = project.hours.clamp(0.0, PROJECT_HOUR_CAP);
        if project.viral {
            viral_hours += capped;
        } else if project.shipped {
            shipped_hours += capped;
        } else {
            other_hours += capped;
        }
    }

    let total_hours = shipped_hours + viral_hours + other_hours;
    let total_progress_with_purchased = total_hours + purchased_progress_hours;

    let earned_shells = rate.earned_shells(total_hours);
    let available_shells = earned_shells + purchased_progress_hours
        - f64::from(total_shells_spent)
        + f64::from(admin_shell_adjustment);

    ProgressMetrics {
        available_shells,
        total_hours,
        total_percentage: percentage_of_goal(total_hours),
        shipped_hours,
        viral_hours,
        other_hours,
        purchased_progress_hours,
        total_progress_with_purchased,
        total_percentage_with_purchased: percentage_of_goal(total_progress_with_purchased),
    }
}

/// Hours expressed as a percentage of [`TOTAL_HOURS_REQUIRED`], capped at 100.
fn percentage_of_goal(hours: f64) -> f64 {
    (hours / TOTAL_HOURS_REQUIRED * 100.0).min(100.0)
}

/* --------------------------------------------------------------------------
Tests
-------------------------------------------------------------------------- */
