use crate::domain::{Record, BIRTHDAY_FORMAT};
use crate::error::CoreError;
use crate::rules::dates::{congratulation_date, next_occurrence};
use chrono::{Days, NaiveDate};
use tracing::warn;

pub const DEFAULT_UPCOMING_DAYS: u32 = 7;
pub const MAX_UPCOMING_DAYS: u32 = 365;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    pub name: String,
    pub congratulation_date: NaiveDate,
}

impl UpcomingBirthday {
    pub fn formatted_date(&self) -> String {
        self.congratulation_date.format(BIRTHDAY_FORMAT).to_string()
    }
}

pub fn validate_upcoming_days(days: i64) -> Result<u32, CoreError> {
    match u32::try_from(days) {
        Ok(value) if value <= MAX_UPCOMING_DAYS => Ok(value),
        _ => Err(CoreError::InvalidUpcomingDays(days)),
    }
}

/// Records whose birthday falls within `[today, today + within_days]`, in iteration order.
///
/// Weekend occurrences are reported on the following Monday. A record whose
/// occurrence cannot be computed is skipped.
pub fn upcoming_birthdays<'a, I>(
    records: I,
    today: NaiveDate,
    within_days: u32,
) -> Vec<UpcomingBirthday>
where
    I: IntoIterator<Item = &'a Record>,
{
    let window_end = today
        .checked_add_days(Days::new(within_days.into()))
        .unwrap_or(NaiveDate::MAX);

    let mut upcoming = Vec::new();
    for record in records {
        let Some(birthday) = record.birthday() else {
            continue;
        };

        let Some(occurrence) = next_occurrence(birthday.date(), today) else {
            warn!(
                name = %record.name(),
                birthday = %birthday,
                "skipping birthday without occurrence"
            );
            continue;
        };
        if occurrence > window_end {
            continue;
        }

        let Some(date) = congratulation_date(occurrence) else {
            warn!(
                name = %record.name(),
                birthday = %birthday,
                "skipping birthday past calendar end"
            );
            continue;
        };
        upcoming.push(UpcomingBirthday {
            name: record.name().to_string(),
            congratulation_date: date,
        });
    }
    upcoming
}
