use crate::domain::{Birthday, Name, Phone};
use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

/// One contact: a name, its phone numbers in insertion order and an optional birthday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: Name,
    #[serde(default)]
    phones: Vec<Phone>,
    #[serde(default)]
    birthday: Option<Birthday>,
}

impl Record {
    pub fn new(name: &str) -> Result<Self, CoreError> {
        Ok(Self {
            name: Name::new(name)?,
            phones: Vec::new(),
            birthday: None,
        })
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<Birthday> {
        self.birthday
    }

    /// Appends a phone. Duplicates are kept.
    pub fn add_phone(&mut self, raw: &str) -> Result<(), CoreError> {
        self.phones.push(Phone::new(raw)?);
        Ok(())
    }

    pub fn remove_phone(&mut self, raw: &str) {
        self.phones.retain(|phone| phone.as_str() != raw);
    }

    /// Replaces the first phone equal to `old`. Returns `Ok(false)` when no phone matches.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<bool, CoreError> {
        match self.phones.iter_mut().find(|phone| phone.as_str() == old) {
            Some(phone) => {
                phone.set(new)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn find_phone(&self, raw: &str) -> Option<&Phone> {
        self.phones.iter().find(|phone| phone.as_str() == raw)
    }

    /// Stores a birthday. A rejected value is logged and leaves the current birthday untouched.
    pub fn set_birthday(&mut self, raw: &str) -> Result<(), CoreError> {
        match Birthday::parse(raw) {
            Ok(birthday) => {
                self.birthday = Some(birthday);
                Ok(())
            }
            Err(err) => {
                warn!(name = %self.name, value = raw, "rejected birthday");
                Err(err)
            }
        }
    }

    pub fn phones_display(&self) -> String {
        self.phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join("; ")
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Contact name: {}, phones: {}",
            self.name,
            self.phones_display()
        )
    }
}
