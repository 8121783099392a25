//! Command dispatch loop for the file manager
//!
//! Reads one verb at a time from the token stream, gathers its arguments,
//! routes it to an operation and renders the outcome: success lines to the
//! output stream, a single `Error: ...` line to the error stream.

use crate::commands::{Command, Verb};
use crate::error::{FileManagerError, Result};
use crate::operations::{self, Report};
use crate::tokenizer::TokenStream;
use crate::workdir::WorkingDirectory;
use log::debug;
use std::io::{self, BufRead, Write};

/// Whether the loop should keep going after a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Exit,
}

/// The read/parse/route/render loop
#[derive(Debug)]
pub struct Dispatcher<R, W, E> {
    tokens: TokenStream<R>,
    out: W,
    err: E,
    workdir: WorkingDirectory,
}

impl<R: BufRead, W: Write, E: Write> Dispatcher<R, W, E> {
    /// Create a dispatcher over the given streams, starting in `workdir`
    pub fn new(input: R, out: W, err: E, workdir: WorkingDirectory) -> Self {
        Self {
            tokens: TokenStream::new(input),
            out,
            err,
            workdir,
        }
    }

    /// Run until `exit` or end of input
    ///
    /// Only failures to write to the output streams are returned; command
    /// failures are rendered and the loop continues.
    pub fn run(&mut self) -> io::Result<()> {
        while self.step()? == Control::Continue {}
        Ok(())
    }

    /// One prompt, one command
    pub fn step(&mut self) -> io::Result<Control> {
        write!(self.out, "{}> ", self.workdir.current().display())?;
        self.out.flush()?;

        if self.tokens.has_pending() {
            debug!("continuing with tokens left on an earlier line");
        }

        let Some(word) = self.tokens.next_token() else {
            debug!("end of input");
            return Ok(Control::Exit);
        };

        let Some(verb) = Verb::from_name(&word) else {
            debug!("unknown verb {:?}", word);
            self.render(Err(FileManagerError::UnknownCommand(word)))?;
            return Ok(Control::Continue);
        };

        // Missing arguments are read from the following lines
        let Some(args) = self.tokens.take(verb.arity()) else {
            debug!("end of input while reading arguments for {}", verb.name());
            return Ok(Control::Exit);
        };

        let command = Command { verb, args };
        if command.verb == Verb::Exit {
            return Ok(Control::Exit);
        }

        debug!("dispatching {:?}", command);
        let outcome = self.execute(&command);
        match &outcome {
            Ok(_) => debug!("{} succeeded", verb.name()),
            Err(_) => debug!("{} failed", verb.name()),
        }
        self.render(outcome)?;
        Ok(Control::Continue)
    }

    /// Route a parsed command to its operation
    pub fn execute(&mut self, command: &Command) -> Result<Report> {
        match command.verb {
            Verb::List => operations::list(&self.workdir),
            Verb::Cd => operations::change_dir(&mut self.workdir, command.arg(0)),
            Verb::View => operations::view(&self.workdir, command.arg(0)),
            Verb::Mkdir => operations::make_dir(&self.workdir, command.arg(0)),
            Verb::Copy => operations::copy(&self.workdir, command.arg(0), command.arg(1)),
            Verb::Move => operations::move_entry(&self.workdir, command.arg(0), command.arg(1)),
            Verb::Help => Ok(operations::help()),
            Verb::Exit => Ok(Report::Lines(Vec::new())),
        }
    }

    /// The session's working directory
    pub fn working_directory(&self) -> &WorkingDirectory {
        &self.workdir
    }

    /// Give back the output streams
    pub fn into_writers(self) -> (W, E) {
        (self.out, self.err)
    }

    fn render(&mut self, outcome: Result<Report>) -> io::Result<()> {
        match outcome {
            Ok(Report::Lines(lines)) => {
                for line in lines {
                    writeln!(self.out, "{}", line)?;
                }
                self.out.flush()
            }
            Ok(Report::File(file_lines)) => {
                // Written as read; a read error mid-file still gets its one line
                for line in file_lines {
                    match line {
                        Ok(line) => writeln!(self.out, "{}", line)?,
                        Err(e) => {
                            self.out.flush()?;
                            return self.render_failure(&e);
                        }
                    }
                }
                self.out.flush()
            }
            Err(e) => self.render_failure(&e),
        }
    }

    fn render_failure(&mut self, e: &FileManagerError) -> io::Result<()> {
        writeln!(self.err, "Error: {}", e)?;
        self.err.flush()
    }
}
