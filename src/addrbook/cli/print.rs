use addrbook::api::{CmdMessage, MessageLevel};
use addrbook::model::{Record, UpcomingBirthday};
use colored::Colorize;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_error(error: &addrbook::error::AddrError) {
    eprintln!("{}", format!("Error: {}", error).red());
}

pub(super) fn print_contacts(contacts: &[Record]) {
    for record in contacts {
        println!("{}", record);
    }
}

pub(super) fn upcoming_line(entry: &UpcomingBirthday) -> String {
    format!(
        "{}'s birthday is on {}.",
        entry.name.bold(),
        entry.formatted_date()
    )
}

pub(super) fn print_upcoming(upcoming: &[UpcomingBirthday]) {
    for entry in upcoming {
        println!("{}", upcoming_line(entry));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn upcoming_line_reads_naturally() {
        colored::control::set_override(false);
        let entry = UpcomingBirthday {
            name: "Alice".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 6, 5).unwrap(),
        };
        assert_eq!(
            upcoming_line(&entry),
            "Alice's birthday is on Wednesday, 05.06.2024."
        );
    }
}
