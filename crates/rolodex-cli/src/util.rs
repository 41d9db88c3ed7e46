use anyhow::Result;
use chrono::NaiveDate;
use rolodex_core::BIRTHDAY_FORMAT;

use crate::error::invalid_input;

/// Splits a REPL line into a lowercased command and its whitespace-separated arguments.
pub fn parse_input(line: &str) -> Option<(String, Vec<String>)> {
    let trimmed = line.trim();
    let mut parts = trimmed.splitn(2, char::is_whitespace);
    let command = parts.next().filter(|value| !value.is_empty())?;
    let args = parts
        .next()
        .map(|rest| rest.split_whitespace().map(str::to_string).collect())
        .unwrap_or_default();
    Some((command.to_lowercase(), args))
}

pub fn parse_today(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), BIRTHDAY_FORMAT)
        .map_err(|_| invalid_input("invalid --today date: expected DD.MM.YYYY"))
}
