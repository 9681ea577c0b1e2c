use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::AddressBook;
use tracing::debug;

pub fn run(book: &mut AddressBook, name: &str) -> Result<CmdResult> {
    let removed = book.delete(name)?;
    debug!(contact = %removed.name(), "deleted contact");
    Ok(CmdResult::default()
        .with_message(CmdMessage::success("Contact deleted."))
        .changed())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::BookFixture;

    #[test]
    fn removes_contact() {
        let mut book = BookFixture::new()
            .with_contact("Alice", &[])
            .with_contact("Bob", &[])
            .book;
        let result = run(&mut book, "Alice").unwrap();

        assert!(result.changed);
        assert_eq!(result.messages[0].content, "Contact deleted.");
        assert!(book.find("Alice").is_none());
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn missing_contact_is_not_found() {
        let mut book = AddressBook::new();
        assert!(run(&mut book, "Bob").unwrap_err().is_not_found());
    }
}
