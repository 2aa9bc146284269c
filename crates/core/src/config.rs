//! Parser settings and request construction.
//!
//! This module holds the constants shared by the parser and the output
//! dictionary, and the [`ParseRequest`] that bundles tokens, declared
//! options and the two behaviour switches.

use crate::option_definitions::OptionSpec;

/// Value recorded for an option that was given without a value
pub const FLAG_VALUE: &str = "yes";
/// Dictionary key collecting positional arguments
pub const POSITIONAL_KEY: &str = "_";
/// Number of leading process arguments that are not user input (the program path)
pub const DEFAULT_ARGS_OFFSET: usize = 1;

/// Switches that change how the scanner treats tokens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParserConfig {
    /// Record options that were not declared instead of dropping them.
    pub accept_unspecified: bool,
    /// Only accept values through `=`; bare tokens after a flag are positional.
    pub strict_equals: bool,
}

/// Everything a single parse needs.
#[derive(Debug, Clone, Default)]
pub struct ParseRequest {
    pub tokens: Vec<String>,
    pub specs: Vec<OptionSpec>,
    pub config: ParserConfig,
}

impl ParseRequest {
    /// Creates a request over already sliced tokens with default settings.
    ///
    /// # Examples
    ///
    /// ```
    /// use clivo_core::config::ParseRequest;
    /// use clivo_core::option_definitions::OptionSpec;
    ///
    /// let request = ParseRequest::new(["--verbose"], vec![OptionSpec::new("verbose")])
    ///     .strict_equals(true);
    /// assert_eq!(request.tokens, vec!["--verbose".to_string()]);
    /// assert!(request.config.strict_equals);
    /// ```
    pub fn new<I, S>(tokens: I, specs: Vec<OptionSpec>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tokens: tokens.into_iter().map(Into::into).collect(),
            specs,
            config: ParserConfig::default(),
        }
    }

    /// Creates a request from a full argument vector, skipping `offset` leading entries.
    ///
    /// An offset past the end of `args` yields an empty token list.
    pub fn from_args<I, S>(args: I, offset: usize, specs: Vec<OptionSpec>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(args.into_iter().skip(offset), specs)
    }

    /// Creates a request over the arguments of the running process.
    pub fn from_env(specs: Vec<OptionSpec>) -> Self {
        Self::from_args(std::env::args(), DEFAULT_ARGS_OFFSET, specs)
    }

    #[must_use]
    pub fn accept_unspecified(mut self, accept_unspecified: bool) -> Self {
        self.config.accept_unspecified = accept_unspecified;
        self
    }

    #[must_use]
    pub fn strict_equals(mut self, strict_equals: bool) -> Self {
        self.config.strict_equals = strict_equals;
        self
    }

    #[must_use]
    pub fn with_config(mut self, config: ParserConfig) -> Self {
        self.config = config;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_permissive_off() {
        let config = ParserConfig::default();
        assert!(!config.accept_unspecified);
        assert!(!config.strict_equals);
    }

    #[test]
    fn test_from_args_skips_offset() {
        let request = ParseRequest::from_args(["clivo", "run", "--fast"], 1, Vec::new());
        assert_eq!(request.tokens, vec!["run", "--fast"]);
    }

    #[test]
    fn test_from_args_with_script_offset() {
        let request = ParseRequest::from_args(["node", "index.js", "seth"], 2, Vec::new());
        assert_eq!(request.tokens, vec!["seth"]);
    }

    #[test]
    fn test_from_args_offset_past_end() {
        let request = ParseRequest::from_args(["clivo"], 5, Vec::new());
        assert!(request.tokens.is_empty());
    }

    #[test]
    fn test_from_env_skips_program_path() {
        let request = ParseRequest::from_env(Vec::new());
        assert_eq!(request.tokens.len(), std::env::args().count() - 1);
    }

    #[test]
    fn test_builder_switches() {
        let request = ParseRequest::new(Vec::<String>::new(), Vec::new())
            .accept_unspecified(true)
            .strict_equals(true);
        assert_eq!(
            request.config,
            ParserConfig {
                accept_unspecified: true,
                strict_equals: true
            }
        );
    }

    #[test]
    fn test_constants() {
        assert_eq!(FLAG_VALUE, "yes");
        assert_eq!(POSITIONAL_KEY, "_");
        assert_eq!(DEFAULT_ARGS_OFFSET, 1);
    }
}
