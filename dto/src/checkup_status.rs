use crate::checkup_status::CheckupStatus::{
    DueSoon, DueToday, DueTomorrow, NoScheduled, Overdue, Upcoming,
};
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A completed checkup is rescheduled by the backend that many days later.
/// The client never computes the next date itself, it only displays urgency.
pub const CHECKUP_INTERVAL_DAYS: u64 = 21;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckupStatus {
    NoScheduled,
    Overdue,
    DueToday,
    DueTomorrow,
    DueSoon,
    Upcoming,
}

impl CheckupStatus {
    pub fn label(self) -> &'static str {
        match self {
            NoScheduled => "No checkup scheduled",
            Overdue => "Overdue",
            DueToday => "Due today",
            DueTomorrow => "Due tomorrow",
            DueSoon => "Due soon",
            Upcoming => "Upcoming",
        }
    }
}

/// Derive how urgent a scheduled fitness checkup is.
///
/// Buckets are mutually exclusive and keyed on the signed number of days
/// between today and the scheduled date. Note the asymmetry with
/// [crate::membership_status::compute_membership_status]: a membership ending
/// within 7 days is a single bucket, while checkups distinguish today,
/// tomorrow and the day after.
pub fn compute_checkup_status(
    next_checkup_date: Option<NaiveDate>,
    today: NaiveDate,
) -> CheckupStatus {
    let Some(next_checkup_date) = next_checkup_date else {
        return NoScheduled;
    };

    match (next_checkup_date - today).num_days() {
        ..0 => Overdue,
        0 => DueToday,
        1 => DueTomorrow,
        2 => DueSoon,
        _ => Upcoming,
    }
}

pub fn current_checkup_status(next_checkup_date: Option<NaiveDate>) -> CheckupStatus {
    compute_checkup_status(next_checkup_date, Utc::now().date_naive())
}

/// Whether a checkup deserves a reminder: due within the next two days,
/// or already missed.
pub fn is_due_soon(next_checkup_date: Option<NaiveDate>, today: NaiveDate) -> bool {
    matches!(
        compute_checkup_status(next_checkup_date, today),
        Overdue | DueToday | DueTomorrow | DueSoon
    )
}
