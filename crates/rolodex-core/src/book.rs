use crate::domain::Record;
use crate::rules::birthdays::{upcoming_birthdays, UpcomingBirthday};
use chrono::NaiveDate;

/// Name-keyed collection of records. Iteration follows insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: Vec<Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `record`, replacing an existing record with the same name in place.
    pub fn add_record(&mut self, record: Record) {
        match self.position(record.name().as_str()) {
            Some(idx) => self.records[idx] = record,
            None => self.records.push(record),
        }
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.iter().find(|record| record.name().as_str() == name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records
            .iter_mut()
            .find(|record| record.name().as_str() == name)
    }

    pub fn delete(&mut self, name: &str) -> Option<Record> {
        let idx = self.position(name)?;
        Some(self.records.remove(idx))
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// One rendered record per line.
    pub fn all_contacts(&self) -> String {
        self.records
            .iter()
            .map(Record::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn upcoming_birthdays(&self, today: NaiveDate, within_days: u32) -> Vec<UpcomingBirthday> {
        upcoming_birthdays(&self.records, today, within_days)
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.records
            .iter()
            .position(|record| record.name().as_str() == name)
    }
}

impl FromIterator<Record> for AddressBook {
    fn from_iter<T: IntoIterator<Item = Record>>(iter: T) -> Self {
        let mut book = AddressBook::new();
        for record in iter {
            book.add_record(record);
        }
        book
    }
}
