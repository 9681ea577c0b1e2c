use super::{BookDocument, BookStore};
use crate::error::{AddrError, Result};
use crate::model::AddressBook;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Stores the address book as a single JSON file.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(AddrError::Io)?;
            }
        }
        Ok(())
    }
}

impl BookStore for FileStore {
    fn load(&self) -> Result<AddressBook> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no address book on disk, starting empty");
            return Ok(AddressBook::new());
        }
        let content = fs::read_to_string(&self.path).map_err(AddrError::Io)?;
        let document: BookDocument =
            serde_json::from_str(&content).map_err(AddrError::Serialization)?;
        let book = document.into_book()?;
        debug!(path = %self.path.display(), contacts = book.len(), "loaded address book");
        Ok(book)
    }

    fn save(&mut self, book: &AddressBook) -> Result<()> {
        self.ensure_parent()?;
        let content = serde_json::to_string_pretty(&BookDocument::from_book(book))
            .map_err(AddrError::Serialization)?;
        fs::write(&self.path, content).map_err(AddrError::Io)?;
        debug!(path = %self.path.display(), contacts = book.len(), "saved address book");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Record;
    use tempfile::tempdir;

    #[test]
    fn missing_file_loads_empty_book() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path().join("addressbook.json"));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn save_then_load() {
        let dir = tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("nested").join("addressbook.json"));

        let mut alice = Record::new("Alice").unwrap();
        alice.add_phone("1112223333").unwrap();
        alice.add_birthday("15.03.1990").unwrap();
        let book: AddressBook = [alice].into_iter().collect();

        store.save(&book).unwrap();
        assert!(store.path().exists());
        assert_eq!(store.load().unwrap(), book);
    }

    #[test]
    fn corrupt_file_is_a_serialization_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("addressbook.json");
        fs::write(&path, "not json").unwrap();
        let store = FileStore::new(path);
        assert!(matches!(store.load(), Err(AddrError::Serialization(_))));
    }
}
