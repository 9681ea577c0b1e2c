use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "addrbook", bin_name = "addrbook", version)]
#[command(about = "Command-line address book with birthday reminders", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Address book file (defaults to the data directory)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Parser for a single line typed at the interactive prompt.
#[derive(Parser, Debug)]
#[command(multicall = true, disable_help_subcommand = true)]
pub struct PromptLine {
    #[command(subcommand)]
    pub command: PromptCommand,
}

#[derive(Subcommand, Debug)]
pub enum PromptCommand {
    #[command(flatten)]
    Book(Commands),

    /// Print the list of commands
    Help,

    /// Save and leave
    #[command(alias = "close")]
    Exit,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Say hello
    #[command(display_order = 1)]
    Hello,

    /// Add a new contact
    #[command(display_order = 2)]
    Add { name: String, phone: String },

    /// Replace a contact's first phone number
    #[command(display_order = 3)]
    Change { name: String, phone: String },

    /// Show a contact's phone numbers
    #[command(display_order = 4)]
    Phone { name: String },

    /// Show all contacts
    #[command(alias = "ls", display_order = 5)]
    All,

    /// Add another phone number to a contact
    #[command(display_order = 6)]
    AddPhone { name: String, phone: String },

    /// Remove a phone number from a contact
    #[command(display_order = 7)]
    RemovePhone { name: String, phone: String },

    /// Add a birthday (DD.MM.YYYY) to a contact
    #[command(display_order = 8)]
    AddBirthday { name: String, date: String },

    /// Show a contact's birthday
    #[command(display_order = 9)]
    ShowBirthday { name: String },

    /// Show birthdays in the coming week
    #[command(display_order = 10)]
    Birthdays,

    /// Delete a contact
    #[command(alias = "rm", display_order = 11)]
    Delete { name: String },
}

/// One line per prompt command: name, arguments and description.
pub fn command_list() -> String {
    let cmd = PromptLine::command();
    let mut output = String::new();
    for sc in cmd.get_subcommands().filter(|sc| !sc.is_hide_set()) {
        let args = sc
            .get_positionals()
            .map(|a| format!("[{}]", a.get_id()))
            .collect::<Vec<_>>()
            .join(" ");
        let about = sc.get_about().map(|s| s.to_string()).unwrap_or_default();
        let usage = if args.is_empty() {
            sc.get_name().to_string()
        } else {
            format!("{} {}", sc.get_name(), args)
        };
        output.push_str(&format!("  {:<32} {}\n", usage, about));
    }
    output
}
