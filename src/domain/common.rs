//! Shared identifiers, ownership traits, and calendar helpers for ledger records.

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, TimeZone, Utc};
use uuid::Uuid;

/// Identity of a ledger owner, established outside the engine.
pub type UserId = Uuid;

/// Records that belong to one user, or to everyone when the owner is absent.
pub trait Owned {
    fn owner(&self) -> Option<UserId>;

    /// Global records are visible to every user; owned records only to their owner.
    fn visible_to(&self, user: UserId) -> bool {
        self.owner().map_or(true, |owner| owner == user)
    }
}

/// Midnight UTC at the start of `date`.
pub fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN))
}

/// First calendar day of the month containing `date`.
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.day0()))
}

/// January 1st of the year containing `date`.
pub fn first_of_year(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.ordinal0()))
}

/// Midnight on the first day of the month containing `now`.
pub fn month_start(now: DateTime<Utc>) -> DateTime<Utc> {
    start_of_day(first_of_month(now.date_naive()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_of_month_and_year_handle_leap_days() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        assert_eq!(first_of_month(date), NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
        assert_eq!(first_of_year(date), NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
    }

    #[test]
    fn month_start_drops_time_of_day() {
        let now = Utc.with_ymd_and_hms(2024, 3, 15, 18, 45, 10).unwrap();
        assert_eq!(month_start(now), Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap());
    }
}
