//! # API Facade
//!
//! The single entry point for addrbook operations, whatever the UI.
//!
//! `AddrBookApi` owns the in-memory [`AddressBook`] for the length of a session
//! and the [`BookStore`] it came from. It loads the book once in [`open`](AddrBookApi::open),
//! dispatches each call to the matching command, and writes the book back in
//! [`save`](AddrBookApi::save). No business logic lives here.
//!
//! ## Generic Over BookStore
//!
//! - Production: `AddrBookApi<FileStore>`
//! - Testing: `AddrBookApi<InMemoryStore>`

use crate::commands::{self, CmdResult};
use crate::error::Result;
use crate::model::{AddressBook, UPCOMING_WINDOW_DAYS};
use crate::store::BookStore;
use chrono::NaiveDate;
use tracing::{debug, info};

pub struct AddrBookApi<S: BookStore> {
    store: S,
    book: AddressBook,
    window_days: i64,
    dirty: bool,
}

impl<S: BookStore> AddrBookApi<S> {
    /// Loads the book from `store`.
    pub fn open(store: S) -> Result<Self> {
        let book = store.load()?;
        info!(contacts = book.len(), "address book opened");
        Ok(Self {
            store,
            book,
            window_days: UPCOMING_WINDOW_DAYS,
            dirty: false,
        })
    }

    /// Look-ahead used by [`upcoming_birthdays`](Self::upcoming_birthdays).
    pub fn with_window_days(mut self, days: i64) -> Self {
        self.window_days = days;
        self
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Whether the book changed since it was loaded or last saved.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Writes the book back to the store.
    pub fn save(&mut self) -> Result<()> {
        self.store.save(&self.book)?;
        self.dirty = false;
        info!(contacts = self.book.len(), "address book saved");
        Ok(())
    }

    fn track(&mut self, result: Result<CmdResult>) -> Result<CmdResult> {
        let result = result?;
        if result.changed {
            self.dirty = true;
        }
        debug!(changed = result.changed, "command finished");
        Ok(result)
    }

    pub fn add_contact(&mut self, name: &str, phone: &str) -> Result<CmdResult> {
        let result = commands::add::run(&mut self.book, name, phone);
        self.track(result)
    }

    pub fn add_phone(&mut self, name: &str, phone: &str) -> Result<CmdResult> {
        let result = commands::phones::add(&mut self.book, name, phone);
        self.track(result)
    }

    pub fn change_phone(&mut self, name: &str, phone: &str) -> Result<CmdResult> {
        let result = commands::phones::change(&mut self.book, name, phone);
        self.track(result)
    }

    pub fn remove_phone(&mut self, name: &str, phone: &str) -> Result<CmdResult> {
        let result = commands::phones::remove(&mut self.book, name, phone);
        self.track(result)
    }

    pub fn show_contact(&self, name: &str) -> Result<CmdResult> {
        commands::list::show(&self.book, name)
    }

    pub fn all_contacts(&self) -> Result<CmdResult> {
        commands::list::all(&self.book)
    }

    pub fn add_birthday(&mut self, name: &str, date: &str) -> Result<CmdResult> {
        let result = commands::birthdays::add(&mut self.book, name, date);
        self.track(result)
    }

    pub fn show_birthday(&self, name: &str) -> Result<CmdResult> {
        commands::birthdays::show(&self.book, name)
    }

    pub fn upcoming_birthdays(&self, today: NaiveDate) -> Result<CmdResult> {
        commands::birthdays::upcoming(&self.book, today, self.window_days)
    }

    pub fn delete_contact(&mut self, name: &str) -> Result<CmdResult> {
        let result = commands::delete::run(&mut self.book, name);
        self.track(result)
    }
}

pub use commands::{CmdMessage, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::BookFixture;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn open_loads_existing_book() {
        let store = BookFixture::new()
            .with_contact("Alice", &["1112223333"])
            .store();
        let api = AddrBookApi::open(store).unwrap();
        assert_eq!(api.book().len(), 1);
        assert!(!api.is_dirty());
    }

    #[test]
    fn mutations_mark_dirty_and_save_clears() {
        let mut api = AddrBookApi::open(InMemoryStore::new()).unwrap();
        api.add_contact("Alice", "1112223333").unwrap();
        assert!(api.is_dirty());

        api.save().unwrap();
        assert!(!api.is_dirty());
        assert_eq!(api.store().saves(), 1);
        assert!(api.store().book().find("Alice").is_some());
    }

    #[test]
    fn reads_do_not_mark_dirty() {
        let store = BookFixture::new().with_contact("Alice", &[]).store();
        let api = AddrBookApi::open(store).unwrap();
        api.all_contacts().unwrap();
        api.show_contact("Alice").unwrap();
        assert!(!api.is_dirty());
    }

    #[test]
    fn failed_mutation_stays_clean() {
        let mut api = AddrBookApi::open(InMemoryStore::new()).unwrap();
        assert!(api.delete_contact("Bob").unwrap_err().is_not_found());
        assert!(!api.is_dirty());
    }

    #[test]
    fn window_is_configurable() {
        let store = BookFixture::new()
            .with_birthday("Alice", &[], "10.06.1990")
            .store();
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();

        let api = AddrBookApi::open(store).unwrap();
        assert!(api.upcoming_birthdays(today).unwrap().upcoming.is_empty());

        let api = api.with_window_days(10);
        assert_eq!(api.upcoming_birthdays(today).unwrap().upcoming.len(), 1);
    }

    #[test]
    fn dispatches_phone_commands() {
        let mut api = AddrBookApi::open(InMemoryStore::new()).unwrap();
        api.add_contact("Alice", "1112223333").unwrap();
        api.add_phone("Alice", "4445556666").unwrap();
        api.change_phone("Alice", "7778889999").unwrap();
        api.remove_phone("Alice", "4445556666").unwrap();

        let alice = api.book().find("Alice").unwrap();
        assert_eq!(alice.to_string(), "Contact name: Alice, phones: 7778889999, birthday: N/A");
    }
}
