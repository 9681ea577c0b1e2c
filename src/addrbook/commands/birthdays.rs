use crate::commands::{
    helpers::{require_contact, require_contact_mut},
    CmdMessage, CmdResult,
};
use crate::error::Result;
use crate::model::{AddressBook, BirthdayStatus};
use chrono::NaiveDate;
use tracing::debug;

/// Sets a contact's birthday unless it already has one.
pub fn add(book: &mut AddressBook, name: &str, date: &str) -> Result<CmdResult> {
    let record = require_contact_mut(book, name)?;
    match record.add_birthday(date)? {
        BirthdayStatus::Added => {
            debug!(contact = name, date, "birthday added");
            Ok(CmdResult::default()
                .with_message(CmdMessage::success("Birthday added."))
                .changed())
        }
        BirthdayStatus::AlreadySet => Ok(CmdResult::default()
            .with_message(CmdMessage::warning("Birthday already set."))),
    }
}

pub fn show(book: &AddressBook, name: &str) -> Result<CmdResult> {
    let record = require_contact(book, name)?;
    let message = match record.birthday() {
        Some(birthday) => CmdMessage::info(birthday.to_string()),
        None => CmdMessage::warning(format!("No birthday set for {name}.")),
    };
    Ok(CmdResult::default().with_message(message))
}

/// Birthdays from `today` through `window_days` days later.
pub fn upcoming(book: &AddressBook, today: NaiveDate, window_days: i64) -> Result<CmdResult> {
    let upcoming = book.upcoming_birthdays_within(today, window_days);
    let mut result = CmdResult::default();
    if upcoming.is_empty() {
        result.add_message(CmdMessage::info("No upcoming birthdays."));
    }
    Ok(result.with_upcoming(upcoming))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::model::UPCOMING_WINDOW_DAYS;
    use crate::store::memory::fixtures::BookFixture;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    #[test]
    fn add_then_add_again() {
        let mut book = BookFixture::new().with_contact("Alice", &[]).book;

        let first = add(&mut book, "Alice", "15.03.1990").unwrap();
        assert!(first.changed);
        assert_eq!(first.messages[0].content, "Birthday added.");

        let second = add(&mut book, "Alice", "16.03.1990").unwrap();
        assert!(!second.changed);
        assert_eq!(second.messages[0].level, MessageLevel::Warning);

        let shown = show(&book, "Alice").unwrap();
        assert_eq!(shown.messages[0].content, "15.03.1990");
    }

    #[test]
    fn add_rejects_bad_date() {
        let mut book = BookFixture::new().with_contact("Alice", &[]).book;
        assert!(add(&mut book, "Alice", "1990-03-15")
            .unwrap_err()
            .is_invalid_format());
    }

    #[test]
    fn show_without_birthday_warns() {
        let book = BookFixture::new().with_contact("Alice", &[]).book;
        let result = show(&book, "Alice").unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
    }

    #[test]
    fn upcoming_lists_matches() {
        let book = BookFixture::new()
            .with_birthday("Alice", &[], "05.06.1990")
            .with_birthday("Bob", &[], "10.06.1990")
            .book;
        let result = upcoming(&book, today(), UPCOMING_WINDOW_DAYS).unwrap();
        assert_eq!(result.upcoming.len(), 1);
        assert_eq!(result.upcoming[0].name, "Alice");
        assert!(result.messages.is_empty());
    }

    #[test]
    fn upcoming_none() {
        let book = BookFixture::new()
            .with_birthday("Bob", &[], "30.05.1990")
            .book;
        let result = upcoming(&book, today(), UPCOMING_WINDOW_DAYS).unwrap();
        assert!(result.upcoming.is_empty());
        assert_eq!(result.messages[0].content, "No upcoming birthdays.");
    }
}
