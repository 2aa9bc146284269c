use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// A declared command-line option.
///
/// `name` is matched by `--name`, `letter` by `-l`. The label is only
/// display text and plays no part in parsing.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct OptionSpec {
    pub name: String,
    #[serde(default)]
    pub letter: Option<char>,
    #[serde(default)]
    pub label: Option<String>,
}

impl OptionSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            letter: None,
            label: None,
        }
    }

    #[must_use]
    pub fn with_letter(mut self, letter: char) -> Self {
        self.letter = Some(letter);
        self
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

impl Display for OptionSpec {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "--{}", self.name)?;

        if let Some(letter) = self.letter {
            write!(formatter, ", -{letter}")?;
        }

        if let Some(label) = &self.label {
            write!(formatter, "  {label}")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_only() {
        assert_eq!(OptionSpec::new("verbose").to_string(), "--verbose");
    }

    #[test]
    fn test_display_with_letter_and_label() {
        let spec = OptionSpec::new("order")
            .with_letter('o')
            .with_label("What to order");
        assert_eq!(spec.to_string(), "--order, -o  What to order");
    }

    #[test]
    fn test_deserialize_without_optional_fields() {
        let spec: OptionSpec = serde_yaml::from_str("name: takeout").unwrap();
        assert_eq!(spec, OptionSpec::new("takeout"));
    }

    #[test]
    fn test_deserialize_with_letter() {
        let spec: OptionSpec = serde_yaml::from_str("name: takeout\nletter: t").unwrap();
        assert_eq!(spec.letter, Some('t'));
    }
}
