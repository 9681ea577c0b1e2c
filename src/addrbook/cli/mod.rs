//! # CLI Layer
//!
//! One possible UI client for addrbook. This is the only place that:
//! - Parses shell arguments and prompt lines
//! - Writes to stdout/stderr
//! - Decides when the book is saved
//!
//! `addrbook <command> ...` runs one command and saves. `addrbook` alone starts
//! the interactive prompt, which accepts the same commands plus `help` and
//! `exit`/`close`, and saves when the session ends.

mod logging;
mod print;
mod setup;

use addrbook::api::{AddrBookApi, CmdMessage};
use addrbook::commands::CmdResult;
use addrbook::config::AddrConfig;
use addrbook::error::{AddrError, Result};
use addrbook::store::fs::FileStore;
use chrono::Local;
use clap::error::ErrorKind;
use clap::Parser;
use directories::ProjectDirs;
use print::{print_contacts, print_error, print_messages, print_upcoming};
use setup::{command_list, Cli, Commands, PromptCommand, PromptLine};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::{debug, info};

const HOME_ENV: &str = "ADDRBOOK_HOME";
const PROMPT: &str = "Enter a command: ";

struct AppContext {
    api: AddrBookApi<FileStore>,
}

enum LineOutcome {
    Continue,
    Exit,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(command) => {
            dispatch(&mut ctx, command)?;
            if ctx.api.is_dirty() {
                ctx.api.save()?;
            }
            Ok(())
        }
        None => run_prompt(&mut ctx),
    }
}

fn data_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV) {
        return Ok(PathBuf::from(home));
    }
    let proj_dirs = ProjectDirs::from("com", "addrbook", "addrbook")
        .ok_or_else(|| AddrError::Api("Could not determine data directory".into()))?;
    Ok(proj_dirs.data_dir().to_path_buf())
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = data_dir()?;
    let config = AddrConfig::load(&data_dir)?;
    let book_path = cli
        .file
        .clone()
        .unwrap_or_else(|| config.book_path(&data_dir));
    debug!(path = %book_path.display(), "using address book");

    let api = AddrBookApi::open(FileStore::new(book_path))?
        .with_window_days(config.birthday_window_days);
    Ok(AppContext { api })
}

fn dispatch(ctx: &mut AppContext, command: Commands) -> Result<()> {
    let api = &mut ctx.api;
    let result = match command {
        Commands::Hello => {
            CmdResult::default().with_message(CmdMessage::info("How can I help you?"))
        }
        Commands::Add { name, phone } => api.add_contact(&name, &phone)?,
        Commands::Change { name, phone } => api.change_phone(&name, &phone)?,
        Commands::Phone { name } => api.show_contact(&name)?,
        Commands::All => api.all_contacts()?,
        Commands::AddPhone { name, phone } => api.add_phone(&name, &phone)?,
        Commands::RemovePhone { name, phone } => api.remove_phone(&name, &phone)?,
        Commands::AddBirthday { name, date } => api.add_birthday(&name, &date)?,
        Commands::ShowBirthday { name } => api.show_birthday(&name)?,
        Commands::Birthdays => api.upcoming_birthdays(Local::now().date_naive())?,
        Commands::Delete { name } => api.delete_contact(&name)?,
    };
    print_result(&result);
    Ok(())
}

fn print_result(result: &CmdResult) {
    print_contacts(&result.listed_contacts);
    print_upcoming(&result.upcoming);
    print_messages(&result.messages);
}

/// Splits a prompt line into words, lowercasing the command word.
fn split_line(line: &str) -> Vec<String> {
    let mut words: Vec<String> = line.split_whitespace().map(str::to_string).collect();
    if let Some(first) = words.first_mut() {
        *first = first.to_lowercase();
    }
    words
}

fn handle_line(ctx: &mut AppContext, line: &str) -> Result<LineOutcome> {
    let words = split_line(line);
    if words.is_empty() {
        return Ok(LineOutcome::Continue);
    }

    let parsed = match PromptLine::try_parse_from(&words) {
        Ok(parsed) => parsed,
        Err(err) if err.kind() == ErrorKind::InvalidSubcommand => {
            print_messages(&[CmdMessage::error("Invalid command.")]);
            return Ok(LineOutcome::Continue);
        }
        Err(err) => {
            let _ = err.print();
            return Ok(LineOutcome::Continue);
        }
    };

    match parsed.command {
        PromptCommand::Book(command) => dispatch(ctx, command)?,
        PromptCommand::Help => print!("{}", command_list()),
        PromptCommand::Exit => return Ok(LineOutcome::Exit),
    }
    Ok(LineOutcome::Continue)
}

fn run_prompt(ctx: &mut AppContext) -> Result<()> {
    info!("interactive session started");
    println!("Welcome to the assistant bot! Type 'help' to list commands.");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("{PROMPT}");
        if let Err(err) = io::stdout().flush() {
            print_error(&AddrError::Io(err));
            break;
        }

        let line = match lines.next() {
            Some(Ok(line)) => line,
            // The undecodable line has been consumed; keep reading.
            Some(Err(err)) if err.kind() == io::ErrorKind::InvalidData => {
                print_error(&AddrError::Io(err));
                continue;
            }
            Some(Err(err)) => {
                print_error(&AddrError::Io(err));
                break;
            }
            None => {
                // EOF ends the session like `exit`.
                println!();
                break;
            }
        };
        match handle_line(ctx, &line) {
            Ok(LineOutcome::Continue) => {}
            Ok(LineOutcome::Exit) => break,
            Err(err) => print_error(&err),
        }
    }

    ctx.api.save()?;
    println!("Good bye!");
    info!("interactive session ended");
    Ok(())
}
