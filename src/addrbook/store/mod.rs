//! # Storage Layer
//!
//! The address book lives in memory while the program runs. It is read once
//! when a session starts and written back once when it ends. The [`BookStore`]
//! trait is that boundary.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage, one JSON document per address book
//! - [`memory::InMemoryStore`]: keeps a copy in memory, used by tests
//!
//! ## Storage Format
//!
//! ```text
//! {
//!   "version": 1,
//!   "contacts": [
//!     { "name": "Alice", "phones": ["1112223333"], "birthday": "15.03.1990" }
//!   ]
//! }
//! ```
//!
//! The document is a separate type from [`AddressBook`] so the on-disk shape
//! can change without touching the model. Every field is revalidated when a
//! document is read back.

use crate::error::{AddrError, Result};
use crate::model::{AddressBook, Record};
use serde::{Deserialize, Serialize};

pub mod fs;
pub mod memory;

/// Version written into new documents.
pub const FORMAT_VERSION: u32 = 1;

/// Loads and saves a whole address book.
pub trait BookStore {
    /// Read the stored book, or an empty one if nothing has been saved yet.
    fn load(&self) -> Result<AddressBook>;

    /// Replace the stored book with `book`.
    fn save(&mut self, book: &AddressBook) -> Result<()>;
}

/// Serialized form of an address book.
#[derive(Debug, Serialize, Deserialize)]
pub struct BookDocument {
    pub version: u32,
    #[serde(default)]
    pub contacts: Vec<Record>,
}

impl BookDocument {
    pub fn from_book(book: &AddressBook) -> Self {
        Self {
            version: FORMAT_VERSION,
            contacts: book.iter().cloned().collect(),
        }
    }

    pub fn into_book(self) -> Result<AddressBook> {
        if self.version != FORMAT_VERSION {
            return Err(AddrError::Store(format!(
                "Unsupported address book version {} (expected {})",
                self.version, FORMAT_VERSION
            )));
        }
        // Duplicate names collapse the same way add_record does: last one wins.
        Ok(self.contacts.into_iter().collect())
    }
}
