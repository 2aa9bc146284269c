//! Type definitions for prompts and their answers.

use std::fmt::{Display, Formatter};

use clivo_core::error::Result;

/// One selectable entry of a choice prompt.
///
/// Shown by its label when it has one, by its name otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub name: String,
    pub label: Option<String>,
}

impl Choice {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: None,
        }
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

impl Display for Choice {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.label.as_deref().unwrap_or(&self.name))
    }
}

/// A single question of a workflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkflowStep {
    Options {
        message: String,
        choices: Vec<Choice>,
    },
    Text {
        message: String,
    },
    Number {
        message: String,
    },
}

/// The answer collected for a [`WorkflowStep`].
#[derive(Debug, Clone, PartialEq)]
pub enum WorkflowAnswer {
    Choice(Choice),
    Text(String),
    Number(f64),
}

impl Display for WorkflowAnswer {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            WorkflowAnswer::Choice(choice) => formatter.write_str(&choice.name),
            WorkflowAnswer::Text(text) => formatter.write_str(text),
            WorkflowAnswer::Number(number) => write!(formatter, "{number}"),
        }
    }
}

/// Action run when a menu entry is picked. It receives the terminal so it
/// can open a nested menu.
pub type MenuAction<'a, T> = Box<dyn FnMut(&mut T) -> Result<()> + 'a>;

/// An entry of a menu.
pub struct MenuItem<'a, T: ?Sized> {
    pub label: String,
    pub action: MenuAction<'a, T>,
}

impl<'a, T: ?Sized> MenuItem<'a, T> {
    pub fn new<F>(label: impl Into<String>, action: F) -> Self
    where
        F: FnMut(&mut T) -> Result<()> + 'a,
    {
        Self {
            label: label.into(),
            action: Box::new(action),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choice_display_prefers_label() {
        assert_eq!(Choice::new("opt1").to_string(), "opt1");
        assert_eq!(
            Choice::new("opt1").with_label("Option 1").to_string(),
            "Option 1"
        );
    }

    #[test]
    fn test_answer_display() {
        let choice = Choice::new("blue").with_label("Blue");
        assert_eq!(WorkflowAnswer::Choice(choice).to_string(), "blue");
        assert_eq!(WorkflowAnswer::Text("Tim".to_string()).to_string(), "Tim");
        assert_eq!(WorkflowAnswer::Number(28.0).to_string(), "28");
        assert_eq!(WorkflowAnswer::Number(2.5).to_string(), "2.5");
    }
}
