//! Rendering of parsed arguments for printing.

use clap::ValueEnum;
use itertools::Itertools;

use clivo_core::dictionary::ResultDictionary;
use clivo_core::error::Result;

/// How `clivo parse` prints its result.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// A YAML mapping from option name to its list of values
    #[default]
    Yaml,
    /// One `name: value, value` line per option
    Text,
}

/// Renders the dictionary in the requested format.
///
/// # Errors
///
/// Returns an error if YAML serialization fails.
pub fn render(dictionary: &ResultDictionary, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Yaml => Ok(serde_yaml::to_string(dictionary)?),
        OutputFormat::Text => Ok(dictionary
            .iter()
            .map(|(name, values)| format!("{name}: {}", values.iter().join(", ")))
            .join("\n")),
    }
}
