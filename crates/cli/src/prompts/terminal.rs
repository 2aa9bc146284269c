use std::io::{stdin, stdout, BufRead, ErrorKind, Stdin, Stdout, Write};
use std::process;
use std::sync::atomic::{AtomicBool, Ordering};

use clivo_core::error::{Error, Result};
use crossterm::queue;
use crossterm::style::Print;
use log::debug;

/// Exit status of a process stopped by a second Ctrl-C.
const FORCED_EXIT_CODE: i32 = 130;

/// Set by the Ctrl-C handler, cleared once a question reports it.
static INTERRUPTED: AtomicBool = AtomicBool::new(false);

/// Routes Ctrl-C to [`Error::Interrupted`] instead of killing the process.
///
/// The first Ctrl-C is reported by the question that is waiting (once its
/// read returns) or by the next one asked. A second Ctrl-C before that
/// exits immediately.
///
/// # Errors
///
/// Returns [`Error::InterruptHandler`] if a handler cannot be installed.
pub fn install_interrupt_handler() -> Result<()> {
    ctrlc::set_handler(|| {
        if INTERRUPTED.swap(true, Ordering::SeqCst) {
            process::exit(FORCED_EXIT_CODE);
        }
    })
    .map_err(|error| Error::InterruptHandler(error.to_string()))?;

    debug!("Ctrl-C handler installed");
    Ok(())
}

/// Line-based terminal: one outstanding question at a time.
pub trait Terminal {
    /// Shows `prompt` without a line break and reads one line of input.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InputClosed`] at end of input and
    /// [`Error::Interrupted`] when the user pressed Ctrl-C.
    fn ask_question(&mut self, prompt: &str) -> Result<String>;

    /// Shows one full line.
    fn say(&mut self, line: &str) -> Result<()>;
}

/// [`Terminal`] over the process stdin and stdout.
pub struct StdTerminal {
    input: Stdin,
    output: Stdout,
}

impl StdTerminal {
    #[must_use]
    pub fn new() -> Self {
        Self {
            input: stdin(),
            output: stdout(),
        }
    }
}

impl Default for StdTerminal {
    fn default() -> Self {
        Self::new()
    }
}

impl Terminal for StdTerminal {
    fn ask_question(&mut self, prompt: &str) -> Result<String> {
        take_interrupt(&INTERRUPTED)?;

        queue!(self.output, Print(prompt))?;
        self.output.flush()?;

        read_answer(&mut self.input.lock(), &INTERRUPTED)
    }

    fn say(&mut self, line: &str) -> Result<()> {
        queue!(self.output, Print(line), Print("\n"))?;
        self.output.flush()?;
        Ok(())
    }
}

/// Fails with [`Error::Interrupted`] if `flag` was raised, lowering it again.
fn take_interrupt(flag: &AtomicBool) -> Result<()> {
    if flag.swap(false, Ordering::SeqCst) {
        return Err(Error::Interrupted);
    }
    Ok(())
}

/// Reads one answer line; an interrupt raised meanwhile wins over the input.
fn read_answer<R: BufRead>(reader: &mut R, interrupted: &AtomicBool) -> Result<String> {
    let mut input = String::new();
    let read = reader.read_line(&mut input);
    take_interrupt(interrupted)?;

    match read {
        Ok(0) => Err(Error::InputClosed),
        Ok(_) => Ok(strip_line_ending(&input).to_string()),
        Err(error) if error.kind() == ErrorKind::Interrupted => Err(Error::Interrupted),
        Err(error) => Err(error.into()),
    }
}

fn strip_line_ending(line: &str) -> &str {
    line.trim_end_matches(&['\r', '\n'][..])
}
