use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Duplicate option name: {}", .0)]
    DuplicateOptionName(String),

    #[error("Duplicate option letter: {}", .0)]
    DuplicateOptionLetter(char),

    #[error("STDIO error: {}", .0)]
    Stdio(#[from] std::io::Error),

    #[error("Input was closed before an answer was given.")]
    InputClosed,

    #[error("Interrupted while waiting for an answer.")]
    Interrupted,

    #[error("Cannot install the Ctrl-C handler: {}", .0)]
    InterruptHandler(String),

    #[error("Cannot prompt for a choice: no choices were given.")]
    NoChoices,

    #[error("Error rendering YAML: {}", .0)]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid option declaration `{}`: expected NAME[:LETTER[:LABEL]]", .0)]
    OptionDeclaration(String),

    #[error("Invalid workflow step `{}`: expected KIND:MESSAGE[:CHOICE,...]", .0)]
    StepDeclaration(String),
}

impl Error {
    /// Whether the error comes from a bad option list rather than from I/O.
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::DuplicateOptionName(_) | Self::DuplicateOptionLetter(_)
        )
    }
}
