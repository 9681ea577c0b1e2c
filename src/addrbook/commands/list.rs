use crate::commands::{helpers::require_contact, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::AddressBook;

/// Lists every contact in insertion order.
pub fn all(book: &AddressBook) -> Result<CmdResult> {
    let mut result = CmdResult::default().with_listed_contacts(book.iter().cloned().collect());
    if book.is_empty() {
        result.add_message(CmdMessage::info("No contacts saved."));
    }
    Ok(result)
}

/// Shows a single contact.
pub fn show(book: &AddressBook, name: &str) -> Result<CmdResult> {
    let record = require_contact(book, name)?;
    Ok(CmdResult::default().with_listed_contacts(vec![record.clone()]))
}
