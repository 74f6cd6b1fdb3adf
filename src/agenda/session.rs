//! Interactive menu session.
//!
//! The only layer that touches the console. Generic over its input and
//! output streams so the loop can be driven from tests with in-memory
//! buffers.

use crate::api::AgendaApi;
use crate::commands::{CmdMessage, CmdResult, MessageLevel};
use crate::error::{AgendaError, Result};
use crate::model::Contact;
use crate::store::ContactStore;
use colored::Colorize;
use std::io::{BufRead, Write};
use unicode_width::UnicodeWidthStr;

const MENU_WIDTH: usize = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Running,
    Terminated,
}

/// The interactive menu loop over a directory store.
///
/// Owns its input handle for the duration of the run; the handle is dropped
/// when [`Session::run`] returns, on error paths included.
pub struct Session<'a, S: ContactStore, R: BufRead, W: Write> {
    api: &'a mut AgendaApi<S>,
    input: R,
    output: W,
}

impl<'a, S, R, W> Session<'a, S, R, W>
where
    S: ContactStore,
    R: BufRead,
    W: Write,
{
    pub fn new(api: &'a mut AgendaApi<S>, input: R, output: W) -> Self {
        Self { api, input, output }
    }

    /// Drive the menu until the user quits or the input stream ends.
    pub fn run(&mut self) -> Result<()> {
        writeln!(self.output, "=========================================")?;
        writeln!(self.output, "       WELCOME TO THE PHONE BOOK")?;
        writeln!(self.output, "=========================================")?;

        let outcome = self.api.reload();
        self.report(outcome)?;

        let mut state = SessionState::Running;
        while state == SessionState::Running {
            self.print_menu()?;
            let Some(choice) = self.read_line("Select an option: ")? else {
                break; // input stream closed
            };
            state = self.dispatch(choice.trim())?;
            if state == SessionState::Running && self.pause()?.is_none() {
                break;
            }
        }
        Ok(())
    }

    fn dispatch(&mut self, choice: &str) -> Result<SessionState> {
        match choice {
            "1" => self.handle_list()?,
            "2" => self.handle_create()?,
            "3" => self.handle_delete()?,
            "4" => self.handle_search()?,
            "5" => self.handle_save()?,
            "6" => self.handle_reload()?,
            "0" => {
                writeln!(self.output)?;
                writeln!(self.output, "Thank you for using the phone book!")?;
                writeln!(self.output, "All changes have been saved automatically.")?;
                return Ok(SessionState::Terminated);
            }
            _ => {
                writeln!(
                    self.output,
                    "{}",
                    "Invalid option. Choose between 0 and 6.".red()
                )?;
            }
        }
        Ok(SessionState::Running)
    }

    fn handle_list(&mut self) -> Result<()> {
        let outcome = self.api.list_contacts();
        self.report(outcome)
    }

    fn handle_create(&mut self) -> Result<()> {
        let Some(number) = self.read_line("Phone number: ")? else {
            return Ok(());
        };
        let Some(name) = self.read_line("Contact name: ")? else {
            return Ok(());
        };

        let input = &mut self.input;
        let output = &mut self.output;
        let outcome = self.api.create_contact(&number, &name, |existing| {
            let prompt = format!(
                "A contact with this number already exists: {}. Overwrite it? (y/n): ",
                existing.name
            );
            confirm(input, output, &prompt)
        });
        self.report(outcome)
    }

    fn handle_delete(&mut self) -> Result<()> {
        let Some(number) = self.read_line("Phone number to delete: ")? else {
            return Ok(());
        };

        let input = &mut self.input;
        let output = &mut self.output;
        let outcome = self.api.delete_contact(&number, |contact| {
            let prompt = format!("Delete {} - {}? (y/n): ", contact.number, contact.name);
            confirm(input, output, &prompt)
        });
        self.report(outcome)
    }

    fn handle_search(&mut self) -> Result<()> {
        let Some(term) = self.read_line("Search term (name or number): ")? else {
            return Ok(());
        };
        let outcome = self.api.search_contacts(&term);
        self.report(outcome)
    }

    fn handle_save(&mut self) -> Result<()> {
        let outcome = self.api.save();
        self.report(outcome)
    }

    fn handle_reload(&mut self) -> Result<()> {
        let outcome = self.api.reload();
        self.report(outcome)
    }

    /// Print a command outcome. Errors are surfaced here and never
    /// propagate: the loop keeps running with the store as it was.
    fn report(&mut self, outcome: Result<CmdResult>) -> Result<()> {
        match outcome {
            Ok(result) => {
                self.print_contacts(&result.listed)?;
                self.print_messages(&result.messages)?;
            }
            Err(e) => self.print_error(&e)?,
        }
        Ok(())
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "{}", "=".repeat(MENU_WIDTH))?;
        writeln!(self.output, "               MAIN MENU")?;
        writeln!(self.output, "{}", "=".repeat(MENU_WIDTH))?;
        writeln!(self.output, "1. List contacts")?;
        writeln!(self.output, "2. Create contact")?;
        writeln!(self.output, "3. Delete contact")?;
        writeln!(self.output, "4. Search contacts")?;
        writeln!(self.output, "5. Save changes")?;
        writeln!(self.output, "6. Reload from file")?;
        writeln!(self.output, "0. Quit")?;
        writeln!(self.output, "{}", "=".repeat(MENU_WIDTH))?;
        Ok(())
    }

    fn print_contacts(&mut self, contacts: &[Contact]) -> Result<()> {
        if contacts.is_empty() {
            return Ok(());
        }

        let name_width = contacts.iter().map(|c| c.name.width()).max().unwrap_or(0);
        for contact in contacts {
            let padding = name_width.saturating_sub(contact.name.width());
            writeln!(
                self.output,
                "  {}{}  {}",
                contact.name.bold(),
                " ".repeat(padding),
                contact.number.dimmed()
            )?;
        }
        Ok(())
    }

    fn print_messages(&mut self, messages: &[CmdMessage]) -> Result<()> {
        for message in messages {
            match message.level {
                MessageLevel::Info => writeln!(self.output, "{}", message.content.dimmed())?,
                MessageLevel::Success => writeln!(self.output, "{}", message.content.green())?,
                MessageLevel::Warning => writeln!(self.output, "{}", message.content.yellow())?,
                MessageLevel::Error => writeln!(self.output, "{}", message.content.red())?,
            }
        }
        Ok(())
    }

    fn print_error(&mut self, e: &AgendaError) -> Result<()> {
        writeln!(self.output, "{}", format!("Error: {}", e).red())?;
        Ok(())
    }

    fn pause(&mut self) -> Result<Option<()>> {
        writeln!(self.output)?;
        Ok(self.read_line("Press Enter to continue...")?.map(|_| ()))
    }

    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        prompt_line(&mut self.input, &mut self.output, prompt)
    }
}

/// Prompt and read one line. `None` means the input stream has ended.
fn prompt_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<Option<String>> {
    write!(output, "{}", prompt)?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

/// Ask a yes/no question. EOF or a read failure counts as a decline.
fn confirm<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> bool {
    match prompt_line(input, output, prompt) {
        Ok(Some(answer)) => matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"),
        _ => false,
    }
}
