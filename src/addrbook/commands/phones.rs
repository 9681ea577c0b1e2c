use crate::commands::{helpers::require_contact_mut, CmdMessage, CmdResult};
use crate::error::{AddrError, Result};
use crate::model::AddressBook;
use tracing::debug;

/// Appends a phone to an existing contact.
pub fn add(book: &mut AddressBook, name: &str, phone: &str) -> Result<CmdResult> {
    let record = require_contact_mut(book, name)?;
    record.add_phone(phone)?;
    debug!(contact = name, phone, "added phone");
    Ok(CmdResult::default()
        .with_message(CmdMessage::success("Phone added."))
        .changed())
}

/// Replaces the contact's first phone with `phone`.
pub fn change(book: &mut AddressBook, name: &str, phone: &str) -> Result<CmdResult> {
    let record = require_contact_mut(book, name)?;
    let first = record
        .phones()
        .first()
        .map(|p| p.as_str().to_string())
        .ok_or_else(|| AddrError::no_phones(name))?;
    record.edit_phone(&first, phone)?;
    debug!(contact = name, old = %first, new = phone, "changed phone");
    Ok(CmdResult::default()
        .with_message(CmdMessage::success("Contact changed."))
        .changed())
}

/// Drops every copy of `phone` from the contact.
pub fn remove(book: &mut AddressBook, name: &str, phone: &str) -> Result<CmdResult> {
    let record = require_contact_mut(book, name)?;
    match record.remove_phone(phone) {
        0 => Ok(CmdResult::default().with_message(CmdMessage::warning(format!(
            "{name} has no phone {phone}"
        )))),
        n => {
            debug!(contact = name, phone, removed = n, "removed phone");
            Ok(CmdResult::default()
                .with_message(CmdMessage::success("Phone removed."))
                .changed())
        }
    }
}
