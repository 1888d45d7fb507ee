use crate::membership_status::MembershipStatus::{Active, Expired, ExpiringSoon};
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A membership whose end date falls within that many days is about to expire.
pub const EXPIRING_SOON_DAYS: i64 = 7;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MembershipStatus {
    Active,
    ExpiringSoon,
    Expired,
}

impl MembershipStatus {
    pub fn label(self) -> &'static str {
        match self {
            Active => "Active",
            ExpiringSoon => "Expiring Soon",
            Expired => "Expired",
        }
    }

    /// CSS class of the badge rendered next to a member's name.
    pub fn badge_class(self) -> &'static str {
        match self {
            Active => "badge-active",
            ExpiringSoon => "badge-expiring-soon",
            Expired => "badge-expired",
        }
    }
}

/// Derive the status of a membership from its end date.
/// The status is never stored: it is recomputed from the record on each read,
/// so it can't go stale independently of the record itself.
///
/// A membership without an end date never expires.
/// Dates are day-granular, hence a status flips exactly at midnight,
/// not at whatever time the record happened to be fetched.
pub fn compute_membership_status(
    end_date: Option<NaiveDate>,
    today: NaiveDate,
) -> MembershipStatus {
    match end_date {
        None => Active,
        Some(end_date) => {
            if end_date < today {
                Expired
            } else if (end_date - today).num_days() <= EXPIRING_SOON_DAYS {
                ExpiringSoon
            } else {
                Active
            }
        }
    }
}

pub fn current_membership_status(end_date: Option<NaiveDate>) -> MembershipStatus {
    compute_membership_status(end_date, Utc::now().date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Days;
    use parameterized::{ide, parameterized};

    ide!();

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
    }

    #[test]
    fn should_be_active_when_no_end_date() {
        assert_eq!(Active, compute_membership_status(None, today()));
        assert_eq!(
            Active,
            compute_membership_status(None, NaiveDate::from_ymd_opt(1970, 1, 1).unwrap())
        );
    }

    #[parameterized(
        days_until_end = {0, 1, 7},
    )]
    fn should_be_expiring_soon_within_threshold(days_until_end: u64) {
        let end_date = today().checked_add_days(Days::new(days_until_end)).unwrap();
        assert_eq!(
            ExpiringSoon,
            compute_membership_status(Some(end_date), today())
        );
    }

    #[test]
    fn should_be_active_right_past_threshold() {
        let end_date = today().checked_add_days(Days::new(8)).unwrap();
        assert_eq!(Active, compute_membership_status(Some(end_date), today()));
    }

    #[test]
    fn should_be_expired_when_end_date_in_the_past() {
        let end_date = today().checked_sub_days(Days::new(1)).unwrap();
        assert_eq!(Expired, compute_membership_status(Some(end_date), today()));
    }

    #[test]
    fn should_be_idempotent() {
        let end_date = Some(today().checked_add_days(Days::new(3)).unwrap());
        let first = compute_membership_status(end_date, today());
        let second = compute_membership_status(end_date, today());
        assert_eq!(first, second);
    }

    #[test]
    fn should_expose_presentation_mapping() {
        assert_eq!("Expiring Soon", ExpiringSoon.label());
        assert_eq!("badge-expired", Expired.badge_class());
    }
}
