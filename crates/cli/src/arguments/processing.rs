use clivo_core::error::Error::{OptionDeclaration, StepDeclaration};
use clivo_core::error::Result;
use clivo_core::option_definitions::OptionSpec;

use crate::prompts::{Choice, WorkflowStep};

/// Turns `NAME[:LETTER[:LABEL]]` into an option declaration.
///
/// An empty letter part means no letter, so `name::Label` declares a
/// labelled option without a short form.
///
/// # Errors
///
/// Returns an error if the name is empty or the letter is longer than one
/// character.
///
/// # Examples
///
/// ```rust
/// use clivo_cli::arguments::processing::parse_option_declaration;
///
/// let spec = parse_option_declaration("order:o:What to order").unwrap();
/// assert_eq!(spec.name, "order");
/// assert_eq!(spec.letter, Some('o'));
/// assert_eq!(spec.label.as_deref(), Some("What to order"));
/// ```
pub fn parse_option_declaration(declaration: &str) -> Result<OptionSpec> {
    let mut parts = declaration.splitn(3, ':');
    let name = parts.next().unwrap_or_default();
    if name.is_empty() {
        return Err(OptionDeclaration(declaration.to_string()));
    }

    let mut spec = OptionSpec::new(name);

    if let Some(letter) = parts.next().filter(|letter| !letter.is_empty()) {
        let mut chars = letter.chars();
        match (chars.next(), chars.next()) {
            (Some(letter), None) => spec.letter = Some(letter),
            _ => return Err(OptionDeclaration(declaration.to_string())),
        }
    }

    if let Some(label) = parts.next().filter(|label| !label.is_empty()) {
        spec.label = Some(label.to_string());
    }

    Ok(spec)
}

/// Turns `name` or `name=Label` into a choice.
#[must_use]
pub fn parse_choice_declaration(declaration: &str) -> Choice {
    match declaration.split_once('=') {
        Some((name, label)) => Choice::new(name).with_label(label),
        None => Choice::new(declaration),
    }
}

/// Turns `KIND:MESSAGE[:CHOICE,CHOICE...]` into a workflow step.
///
/// `KIND` is `options`, `text` or `number`. Only options steps take the
/// trailing choice list, which is split from the message at the last colon.
///
/// # Errors
///
/// Returns an error for an unknown kind or a missing part.
pub fn parse_step_declaration(declaration: &str) -> Result<WorkflowStep> {
    let invalid = || StepDeclaration(declaration.to_string());

    let (kind, rest) = declaration.split_once(':').ok_or_else(invalid)?;

    match kind {
        "text" => Ok(WorkflowStep::Text {
            message: rest.to_string(),
        }),
        "number" => Ok(WorkflowStep::Number {
            message: rest.to_string(),
        }),
        "options" => {
            let (message, choices) = rest.rsplit_once(':').ok_or_else(invalid)?;
            Ok(WorkflowStep::Options {
                message: message.to_string(),
                choices: choices
                    .split(',')
                    .filter(|choice| !choice.is_empty())
                    .map(parse_choice_declaration)
                    .collect(),
            })
        }
        _ => Err(invalid()),
    }
}
