use log::debug;

use clivo_core::error::Result;

use super::input::{prompt_number, prompt_options, prompt_text, select_index};
use super::terminal::Terminal;
use super::types::{Choice, MenuItem, WorkflowAnswer, WorkflowStep};

/// Shows `message`, then asks every step in order and collects the answers.
///
/// An options step without choices has nothing to ask and is skipped, so it
/// contributes no answer.
pub fn prompt_workflow<T: Terminal + ?Sized>(
    terminal: &mut T,
    message: &str,
    workflow: &[WorkflowStep],
) -> Result<Vec<WorkflowAnswer>> {
    terminal.say(message)?;
    let mut answers = Vec::with_capacity(workflow.len());

    for step in workflow {
        match step {
            WorkflowStep::Options { message, choices } => {
                if choices.is_empty() {
                    debug!("Skipping options step `{message}` without choices");
                    continue;
                }
                answers.push(WorkflowAnswer::Choice(prompt_options(
                    terminal, message, choices,
                )?));
            }
            WorkflowStep::Text { message } => {
                answers.push(WorkflowAnswer::Text(prompt_text(terminal, message)?));
            }
            WorkflowStep::Number { message } => {
                answers.push(WorkflowAnswer::Number(prompt_number(terminal, message)?));
            }
        }
    }

    Ok(answers)
}

/// Lets the user pick a menu entry and runs its action.
///
/// Actions get the terminal back, so an action may call `prompt_menu` again
/// for a nested menu.
pub fn prompt_menu<T: Terminal + ?Sized>(
    terminal: &mut T,
    message: &str,
    menu: &mut [MenuItem<'_, T>],
) -> Result<()> {
    let choices: Vec<Choice> = menu
        .iter()
        .map(|item| Choice::new(item.label.clone()))
        .collect();

    let index = select_index(terminal, message, &choices)?;
    debug!("Menu `{message}`: running `{}`", menu[index].label);

    (menu[index].action)(terminal)
}
