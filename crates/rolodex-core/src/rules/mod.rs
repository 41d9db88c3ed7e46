pub mod birthdays;
pub mod dates;

pub use birthdays::{
    upcoming_birthdays, validate_upcoming_days, UpcomingBirthday, DEFAULT_UPCOMING_DAYS,
    MAX_UPCOMING_DAYS,
};
pub use dates::{
    congratulation_date, is_leap_year, local_today, next_occurrence, occurrence_in_year,
};
