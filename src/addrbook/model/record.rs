use super::fields::{Birthday, Field, Name, Phone};
use crate::error::{AddrError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of [`Record::add_birthday`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BirthdayStatus {
    Added,
    /// A birthday was already present and has been kept.
    AlreadySet,
}

/// One contact: a name, any number of phones and at most one birthday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: Name,
    #[serde(default)]
    phones: Vec<Phone>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    pub fn new(name: &str) -> Result<Self> {
        Ok(Self {
            name: Name::parse(name)?,
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

    /// Appends a phone. The same number may appear more than once.
    pub fn add_phone(&mut self, raw: &str) -> Result<()> {
        self.phones.push(Phone::parse(raw)?);
        Ok(())
    }

    /// Drops every phone equal to `raw` and returns how many were removed.
    pub fn remove_phone(&mut self, raw: &str) -> usize {
        let before = self.phones.len();
        self.phones.retain(|p| p.as_str() != raw);
        before - self.phones.len()
    }

    /// Replaces the first phone equal to `old` with `new`, keeping its position.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<()> {
        let slot = self
            .phones
            .iter()
            .position(|p| p.as_str() == old)
            .ok_or_else(|| AddrError::phone_not_found(old))?;
        self.phones[slot] = Phone::parse(new)?;
        Ok(())
    }

    pub fn find_phone(&self, raw: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == raw)
    }

    /// Sets the birthday unless one is already present.
    ///
    /// `raw` is validated in both cases, so a malformed date is an error even
    /// when it would not have been stored.
    pub fn add_birthday(&mut self, raw: &str) -> Result<BirthdayStatus> {
        let birthday = Birthday::parse(raw)?;
        if self.birthday.is_some() {
            return Ok(BirthdayStatus::AlreadySet);
        }
        self.birthday = Some(birthday);
        Ok(BirthdayStatus::Added)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join("; ");
        let birthday = self
            .birthday
            .map(|b| b.to_string())
            .unwrap_or_else(|| "N/A".to_string());
        write!(
            f,
            "Contact name: {}, phones: {}, birthday: {}",
            self.name, phones, birthday
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_with(phones: &[&str]) -> Record {
        let mut record = Record::new("Alice").unwrap();
        for p in phones {
            record.add_phone(p).unwrap();
        }
        record
    }

    #[test]
    fn new_record_is_empty() {
        let record = Record::new("Alice").unwrap();
        assert_eq!(record.name().as_str(), "Alice");
        assert!(record.phones().is_empty());
        assert!(record.birthday().is_none());
    }

    #[test]
    fn new_rejects_blank_name() {
        assert!(Record::new("   ").unwrap_err().is_invalid_format());
    }

    #[test]
    fn add_phone_validates() {
        let mut record = record_with(&[]);
        assert!(record.add_phone("12345").unwrap_err().is_invalid_format());
        assert!(record.phones().is_empty());
    }

    #[test]
    fn add_phone_allows_duplicates() {
        let record = record_with(&["1234567890", "1234567890"]);
        assert_eq!(record.phones().len(), 2);
    }

    #[test]
    fn remove_phone_drops_all_matches() {
        let mut record = record_with(&["1234567890", "5555555555", "1234567890"]);
        assert_eq!(record.remove_phone("1234567890"), 2);
        assert_eq!(record.phones().len(), 1);
        assert_eq!(record.phones()[0].as_str(), "5555555555");
    }

    #[test]
    fn remove_missing_phone_is_noop() {
        let mut record = record_with(&["1234567890"]);
        assert_eq!(record.remove_phone("0000000000"), 0);
        assert_eq!(record.phones().len(), 1);
    }

    #[test]
    fn edit_phone_replaces_in_place() {
        let mut record = record_with(&["1234567890"]);
        record.edit_phone("1234567890", "0987654321").unwrap();
        assert!(record.find_phone("1234567890").is_none());
        assert!(record.find_phone("0987654321").is_some());
    }

    #[test]
    fn edit_phone_touches_only_first_match() {
        let mut record = record_with(&["1111111111", "2222222222", "1111111111"]);
        record.edit_phone("1111111111", "3333333333").unwrap();
        let phones: Vec<_> = record.phones().iter().map(Phone::as_str).collect();
        assert_eq!(phones, ["3333333333", "2222222222", "1111111111"]);
    }

    #[test]
    fn edit_missing_phone_is_not_found() {
        let mut record = record_with(&["1234567890"]);
        let err = record.edit_phone("0000000000", "0987654321").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn edit_phone_with_bad_replacement_keeps_original() {
        let mut record = record_with(&["1234567890"]);
        let err = record.edit_phone("1234567890", "bad").unwrap_err();
        assert!(err.is_invalid_format());
        assert!(record.find_phone("1234567890").is_some());
    }

    #[test]
    fn second_birthday_is_ignored() {
        let mut record = record_with(&[]);
        assert_eq!(
            record.add_birthday("15.03.1990").unwrap(),
            BirthdayStatus::Added
        );
        assert_eq!(
            record.add_birthday("01.01.2000").unwrap(),
            BirthdayStatus::AlreadySet
        );
        assert_eq!(record.birthday().unwrap().to_string(), "15.03.1990");
    }

    #[test]
    fn malformed_birthday_fails_even_when_set() {
        let mut record = record_with(&[]);
        record.add_birthday("15.03.1990").unwrap();
        assert!(record.add_birthday("1990").unwrap_err().is_invalid_format());
    }

    #[test]
    fn renders_without_birthday() {
        let record = record_with(&["1112223333", "4445556666"]);
        assert_eq!(
            record.to_string(),
            "Contact name: Alice, phones: 1112223333; 4445556666, birthday: N/A"
        );
    }

    #[test]
    fn renders_with_birthday() {
        let mut record = record_with(&["1112223333"]);
        record.add_birthday("15.03.1990").unwrap();
        assert_eq!(
            record.to_string(),
            "Contact name: Alice, phones: 1112223333, birthday: 15.03.1990"
        );
    }
}
