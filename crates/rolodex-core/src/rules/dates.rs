use chrono::{Datelike, Days, Local, NaiveDate, Weekday};

pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Maps a birthday onto `year`. 29 February falls back to 28 February in non-leap years.
pub fn occurrence_in_year(birthday: NaiveDate, year: i32) -> Option<NaiveDate> {
    let (month, day) = (birthday.month(), birthday.day());
    if month == 2 && day == 29 && !is_leap_year(year) {
        return NaiveDate::from_ymd_opt(year, 2, 28);
    }
    NaiveDate::from_ymd_opt(year, month, day)
}

/// First occurrence on or after `today`.
pub fn next_occurrence(birthday: NaiveDate, today: NaiveDate) -> Option<NaiveDate> {
    let this_year = occurrence_in_year(birthday, today.year())?;
    if this_year < today {
        return occurrence_in_year(birthday, today.year() + 1);
    }
    Some(this_year)
}

/// Saturday and Sunday move to the following Monday.
pub fn congratulation_date(date: NaiveDate) -> Option<NaiveDate> {
    match date.weekday() {
        Weekday::Sat => date.checked_add_days(Days::new(2)),
        Weekday::Sun => date.checked_add_days(Days::new(1)),
        _ => Some(date),
    }
}

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}
