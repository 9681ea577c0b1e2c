use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{AddressBook, Record};
use tracing::debug;

/// Creates a contact with one phone. An existing name is left untouched.
pub fn run(book: &mut AddressBook, name: &str, phone: &str) -> Result<CmdResult> {
    // Build the full record first so a bad phone leaves the book untouched.
    let mut record = Record::new(name)?;
    record.add_phone(phone)?;

    if book.contains(record.name().as_str()) {
        return Ok(CmdResult::default().with_message(CmdMessage::warning(format!(
            "Contact already exists: {}",
            record.name()
        ))));
    }

    debug!(contact = %record.name(), "adding contact");
    book.add_record(record);
    Ok(CmdResult::default()
        .with_message(CmdMessage::success("Contact added."))
        .changed())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::store::memory::fixtures::BookFixture;

    #[test]
    fn adds_new_contact() {
        let mut book = AddressBook::new();
        let result = run(&mut book, "Alice", "1112223333").unwrap();

        assert!(result.changed);
        assert_eq!(result.messages[0].level, MessageLevel::Success);
        let alice = book.find("Alice").unwrap();
        assert!(alice.find_phone("1112223333").is_some());
    }

    #[test]
    fn existing_contact_is_kept() {
        let mut book = BookFixture::new()
            .with_contact("Alice", &["1112223333"])
            .book;
        let result = run(&mut book, "Alice", "9998887777").unwrap();

        assert!(!result.changed);
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        let alice = book.find("Alice").unwrap();
        assert_eq!(alice.phones().len(), 1);
    }

    #[test]
    fn bad_phone_adds_nothing() {
        let mut book = AddressBook::new();
        let err = run(&mut book, "Alice", "123").unwrap_err();
        assert!(err.is_invalid_format());
        assert!(book.is_empty());
    }

    #[test]
    fn bad_name_adds_nothing() {
        let mut book = AddressBook::new();
        assert!(run(&mut book, "  ", "1112223333").is_err());
        assert!(book.is_empty());
    }
}
