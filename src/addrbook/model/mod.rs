//! Core contact data: validated fields, records and the address book.

pub mod book;
pub mod fields;
pub mod record;

pub use book::{AddressBook, UpcomingBirthday, UPCOMING_WINDOW_DAYS};
pub use fields::{Birthday, Field, Name, Phone, DATE_FORMAT};
pub use record::{BirthdayStatus, Record};
