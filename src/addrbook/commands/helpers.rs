use crate::error::{AddrError, Result};
use crate::model::{AddressBook, Record};

/// Looks up `name`, turning absence into a `NotFound` error.
pub fn require_contact<'a>(book: &'a AddressBook, name: &str) -> Result<&'a Record> {
    book.find(name)
        .ok_or_else(|| AddrError::contact_not_found(name))
}

pub fn require_contact_mut<'a>(book: &'a mut AddressBook, name: &str) -> Result<&'a mut Record> {
    book.find_mut(name)
        .ok_or_else(|| AddrError::contact_not_found(name))
}
