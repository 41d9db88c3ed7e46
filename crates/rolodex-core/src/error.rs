use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("name can't be empty")]
    EmptyName,
    #[error("invalid phone number '{0}': expected 10 digits")]
    InvalidPhone(String),
    #[error("invalid birthday '{0}': use DD.MM.YYYY")]
    InvalidBirthday(String),
    #[error("invalid upcoming days: {0}")]
    InvalidUpcomingDays(i64),
}
