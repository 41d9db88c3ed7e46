use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const PHONE_DIGITS: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone(String);

impl Phone {
    pub fn new(raw: &str) -> Result<Self, CoreError> {
        validate_phone(raw)?;
        Ok(Self(raw.to_string()))
    }

    /// Replaces the number in place. The old value is kept when `raw` is invalid.
    pub fn set(&mut self, raw: &str) -> Result<(), CoreError> {
        validate_phone(raw)?;
        self.0 = raw.to_string();
        Ok(())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn validate_phone(raw: &str) -> Result<(), CoreError> {
    if raw.len() == PHONE_DIGITS && raw.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(CoreError::InvalidPhone(raw.to_string()))
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Phone {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        validate_phone(&value)?;
        Ok(Self(value))
    }
}

impl From<Phone> for String {
    fn from(phone: Phone) -> Self {
        phone.0
    }
}
