//! Line-oriented register session
//!
//! Each input line is split like a shell command line and parsed with clap,
//! so `set plate "01A 123BC"` and `help` behave as expected.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tarozi_app::export::FilePrinter;
use tarozi_app::{AlarmDevice, FormField, PrintFacility, Session, SubmitOutcome, TableView};
use tarozi_types::{Error, OutputFormat, Result};
use tracing::debug;

use crate::devices::ConfigReloader;
use crate::output::{render_form, render_view, Markers};

#[derive(Parser, Debug)]
#[command(name = "tarozi", no_binary_name = true, disable_version_flag = true)]
struct ShellLine {
    #[command(subcommand)]
    command: ShellCommand,
}

#[derive(Subcommand, Debug)]
enum ShellCommand {
    /// Set a form field: plate, check, gross, tare, net, date, summa30, summa40, price
    Set {
        field: String,
        /// New value; omit to blank the field
        #[arg(allow_hyphen_values = true)]
        value: Vec<String>,
    },

    /// Show the form
    Form,

    /// Reset the form
    Clear,

    /// Add the form as a new ticket, or save the ticket being edited
    #[command(visible_aliases = ["add", "save"])]
    Submit,

    /// Select a row by its number in the table
    Select { row: usize },

    /// Load the selected ticket into the form
    Edit,

    /// Delete the selected ticket
    Delete,

    /// Filter the table; no query shows everything
    Search {
        #[arg(allow_hyphen_values = true)]
        query: Vec<String>,
    },

    /// Show the table
    #[command(visible_alias = "ls")]
    Show,

    /// Print the table
    Print,

    /// Write the table to an .xlsx or .csv file
    Export { path: PathBuf },

    /// Discard all tickets and start over
    Reload,

    /// Switch the alarm relay on or off
    Relay,

    /// Leave the session
    #[command(visible_alias = "exit")]
    Quit,
}

enum Flow {
    Continue,
    Quit,
}

/// Prints the table to the session output
struct WriterPrinter<'a, W: Write> {
    out: &'a mut W,
    format: OutputFormat,
    markers: &'a Markers,
}

impl<W: Write> PrintFacility for WriterPrinter<'_, W> {
    fn print(&mut self, view: &TableView) -> Result<()> {
        let text = render_view(view, self.format, self.markers)?;
        self.out.write_all(text.as_bytes())?;
        Ok(())
    }
}

/// Interactive or scripted session over a reader/writer pair
pub struct Shell<A: AlarmDevice> {
    session: Session,
    alarm: A,
    reloader: ConfigReloader,
    format_flag: Option<OutputFormat>,
    format: OutputFormat,
    markers: Markers,
    prompt: bool,
}

impl<A: AlarmDevice> Shell<A> {
    /// `format_flag` pins the output format; otherwise it follows the
    /// configuration, including across reloads.
    pub fn new(
        session: Session,
        alarm: A,
        reloader: ConfigReloader,
        format_flag: Option<OutputFormat>,
    ) -> Self {
        let config = reloader.config();
        let format = format_flag.unwrap_or(config.output_format);
        let markers = Markers {
            open: config.highlight_open.clone(),
            close: config.highlight_close.clone(),
        };
        Self {
            session,
            alarm,
            reloader,
            format_flag,
            format,
            markers,
            prompt: false,
        }
    }

    /// Print a prompt before each line (interactive use)
    pub fn with_prompt(mut self, prompt: bool) -> Self {
        self.prompt = prompt;
        self
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn alarm(&self) -> &A {
        &self.alarm
    }

    /// Run until end of input or `quit`. Returns the number of failed lines.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> Result<usize> {
        let mut failures = 0;
        let mut lines = input.lines();

        loop {
            if self.prompt {
                write!(out, "tarozi> ")?;
                out.flush()?;
            }
            let Some(line) = lines.next() else {
                break;
            };
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            debug!(line = trimmed, "session command");
            match self.execute_line(trimmed, out) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => break,
                Err(e) => {
                    failures += 1;
                    writeln!(out, "Error: {}", e)?;
                    if let Error::Validation(ref v) = e {
                        writeln!(out, "hint: set {} <value>", FormField::from_validation(v).name())?;
                    }
                }
            }
        }
        Ok(failures)
    }

    fn execute_line<W: Write>(&mut self, line: &str, out: &mut W) -> Result<Flow> {
        let words = shell_words::split(line)
            .map_err(|e| Error::InvalidArgument(e.to_string()))?;

        let parsed = match ShellLine::try_parse_from(words) {
            Ok(parsed) => parsed,
            Err(e) => {
                use clap::error::ErrorKind;
                if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand) {
                    write!(out, "{}", e)?;
                    return Ok(Flow::Continue);
                }
                let first = e.to_string();
                let message = first.lines().next().unwrap_or("invalid command").trim_start_matches("error: ");
                return Err(Error::InvalidCommand(message.to_string()));
            }
        };

        match parsed.command {
            ShellCommand::Set { field, value } => {
                let field: FormField = field.parse()?;
                self.session.set_field(field, value.join(" "));
                if matches!(field, FormField::GrossWeight | FormField::TareWeight) {
                    writeln!(out, "net: {}", self.session.form().net_weight)?;
                }
            }
            ShellCommand::Form => {
                let label = self.session.selection().submit_label();
                write!(out, "{}", render_form(self.session.form(), label))?;
            }
            ShellCommand::Clear => {
                self.session.clear_form();
            }
            ShellCommand::Submit => {
                let outcome = self.session.submit(&mut self.alarm)?;
                match outcome {
                    SubmitOutcome::Added => writeln!(out, "Added")?,
                    SubmitOutcome::Updated(_) => writeln!(out, "Saved")?,
                    SubmitOutcome::Skipped(_) => writeln!(out, "Entry no longer exists; nothing saved")?,
                }
                self.show(out)?;
            }
            ShellCommand::Select { row } => {
                let selected = row
                    .checked_sub(1)
                    .and_then(|display_row| self.session.select_row(display_row));
                if selected.is_none() {
                    writeln!(out, "No row {} in the current table", row)?;
                } else {
                    self.show(out)?;
                }
            }
            ShellCommand::Edit => {
                if self.session.edit() {
                    let label = self.session.selection().submit_label();
                    write!(out, "{}", render_form(self.session.form(), label))?;
                    if let Some(field) = self.session.take_focus_request() {
                        writeln!(out, "next: set {} ...", field.name())?;
                    }
                }
            }
            ShellCommand::Delete => {
                if let Some(removed) = self.session.delete() {
                    writeln!(out, "Deleted {}", removed.plate_number)?;
                    self.show(out)?;
                }
            }
            ShellCommand::Search { query } => {
                self.session.set_search(query.join(" "));
                self.show(out)?;
            }
            ShellCommand::Show | ShellCommand::Print => {
                let mut printer = WriterPrinter {
                    out: &mut *out,
                    format: self.format,
                    markers: &self.markers,
                };
                self.session.print(&mut printer)?;
            }
            ShellCommand::Export { path } => {
                self.session.print(&mut FilePrinter::new(&path))?;
                writeln!(out, "Exported {}", path.display())?;
            }
            ShellCommand::Reload => {
                self.session.reload(&mut self.reloader, &mut self.alarm);
                let config = self.reloader.config();
                self.format = self.format_flag.unwrap_or(config.output_format);
                self.markers = Markers {
                    open: config.highlight_open.clone(),
                    close: config.highlight_close.clone(),
                };
                writeln!(out, "Reloaded")?;
                self.show(out)?;
            }
            ShellCommand::Relay => {
                self.session.toggle_relay(&mut self.alarm);
                writeln!(out, "{}", self.session.alarm().label())?;
            }
            ShellCommand::Quit => return Ok(Flow::Quit),
        }

        Ok(Flow::Continue)
    }

    fn show<W: Write>(&self, out: &mut W) -> Result<()> {
        let text = render_view(&self.session.view(), self.format, &self.markers)?;
        out.write_all(text.as_bytes())?;
        Ok(())
    }
}
