use log::debug;

use clivo_core::error::{Error, Result};

use super::terminal::Terminal;
use super::types::Choice;

/// Question asked after listing the choices
pub const SELECT_PROMPT: &str = "Select an option: ";
/// Shown when the answer is not the number of a listed choice
pub const INVALID_OPTION: &str = "Invalid option, please try again.";
/// Shown when the answer is not a number
pub const INVALID_NUMBER: &str = "Invalid number, please try again.";

/// Lists the choices numbered from 1 and asks until a valid number is given.
///
/// The whole answer, surrounding whitespace aside, must be the number:
/// `2abc` or `2.0` is rejected rather than read as 2.
///
/// # Errors
///
/// Returns [`Error::NoChoices`] for an empty list, or any terminal error.
pub fn prompt_options<T: Terminal + ?Sized>(
    terminal: &mut T,
    message: &str,
    choices: &[Choice],
) -> Result<Choice> {
    let index = select_index(terminal, message, choices)?;
    Ok(choices[index].clone())
}

/// Same as [`prompt_options`] but returns the position of the choice.
pub(crate) fn select_index<T: Terminal + ?Sized>(
    terminal: &mut T,
    message: &str,
    choices: &[Choice],
) -> Result<usize> {
    if choices.is_empty() {
        return Err(Error::NoChoices);
    }

    loop {
        terminal.say(message)?;
        for (index, choice) in choices.iter().enumerate() {
            terminal.say(&format!("{}. {choice}", index + 1))?;
        }

        let answer = terminal.ask_question(SELECT_PROMPT)?;
        if let Some(index) = parse_choice_number(&answer, choices.len()) {
            return Ok(index);
        }

        debug!("Rejected choice `{answer}` for {} choices", choices.len());
        terminal.say(INVALID_OPTION)?;
    }
}

/// Zero-based index for a one-based answer within `1..=count`.
fn parse_choice_number(answer: &str, count: usize) -> Option<usize> {
    let number = answer.trim().parse::<usize>().ok()?;
    (1..=count).contains(&number).then(|| number - 1)
}

/// Asks for free text; any answer, including an empty one, is accepted.
pub fn prompt_text<T: Terminal + ?Sized>(terminal: &mut T, message: &str) -> Result<String> {
    terminal.ask_question(&format!("{message}: "))
}

/// Asks until the answer parses as a number.
///
/// The whole trimmed answer must be a number, so `42kg` is rejected rather
/// than read as 42. `inf` and exponents such as `1e3` are accepted; `NaN`
/// is not.
///
/// # Errors
///
/// Returns any terminal error, such as [`Error::InputClosed`].
pub fn prompt_number<T: Terminal + ?Sized>(terminal: &mut T, message: &str) -> Result<f64> {
    loop {
        let answer = terminal.ask_question(&format!("{message}: "))?;

        match answer.trim().parse::<f64>() {
            Ok(number) if !number.is_nan() => return Ok(number),
            _ => {
                debug!("Rejected number `{answer}`");
                terminal.say(INVALID_NUMBER)?;
            }
        }
    }
}
