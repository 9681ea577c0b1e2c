use super::record::Record;
use crate::error::{AddrError, Result};
use chrono::{Datelike, NaiveDate};
use std::fmt;

/// Default look-ahead, in days, for [`AddressBook::upcoming_birthdays`].
pub const UPCOMING_WINDOW_DAYS: i64 = 7;

/// A birthday that falls inside the look-ahead window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    pub name: String,
    /// The birthday as it falls in the reference year.
    pub date: NaiveDate,
}

impl UpcomingBirthday {
    /// Weekday plus date, e.g. `Wednesday, 05.06.2024`.
    pub fn formatted_date(&self) -> String {
        self.date.format("%A, %d.%m.%Y").to_string()
    }
}

/// All contacts, keyed by name.
///
/// Names are unique and compared case-sensitively. Records keep the order in
/// which their names were first added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: Vec<Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.records.iter().position(|r| r.name().as_str() == name)
    }

    /// Stores `record` under its name, replacing any record with that name.
    pub fn add_record(&mut self, record: Record) {
        match self.position(record.name().as_str()) {
            Some(slot) => self.records[slot] = record,
            None => self.records.push(record),
        }
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.name().as_str() == name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.iter_mut().find(|r| r.name().as_str() == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Removes and returns the record stored under `name`.
    pub fn delete(&mut self, name: &str) -> Result<Record> {
        let slot = self
            .position(name)
            .ok_or_else(|| AddrError::contact_not_found(name))?;
        Ok(self.records.remove(slot))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Birthdays falling between `today` and seven days later, both inclusive.
    pub fn upcoming_birthdays(&self, today: NaiveDate) -> Vec<UpcomingBirthday> {
        self.upcoming_birthdays_within(today, UPCOMING_WINDOW_DAYS)
    }

    /// Birthdays falling between `today` and `days` days later, both inclusive.
    ///
    /// Each birthday is moved into `today`'s year before comparing, so the
    /// window never reaches into the next year.
    pub fn upcoming_birthdays_within(&self, today: NaiveDate, days: i64) -> Vec<UpcomingBirthday> {
        self.records
            .iter()
            .filter_map(|record| {
                let date = record.birthday()?.in_year(today.year())?;
                let ahead = (date - today).num_days();
                (0..=days).contains(&ahead).then(|| UpcomingBirthday {
                    name: record.name().to_string(),
                    date,
                })
            })
            .collect()
    }
}

impl FromIterator<Record> for AddressBook {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        let mut book = AddressBook::new();
        for record in iter {
            book.add_record(record);
        }
        book
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl fmt::Display for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines = self
            .records
            .iter()
            .map(|r| r.to_string())
            .collect::<Vec<_>>()
            .join("\n");
        f.write_str(lines.trim_end())
    }
}
