//! Command-line argument parsing for the `clivo` binary.
//!
//! This module defines the front end's own interface using the `clap`
//! crate. The tokens given to `clivo parse` are not interpreted by clap;
//! they are handed untouched to the clivo parser.

use crate::arguments::{build_request, OutputFormat, Provider};
use clap::{Parser, Subcommand};
use clivo_core::config::{ParseRequest, ParserConfig};
use clivo_core::error::Result;

/// Command-line arguments for the clivo tool.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use clivo_cli::cli_args::{Args, Command};
///
/// let args = Args::parse_from(["clivo", "text", "Your name"]);
/// assert!(matches!(args.command, Command::Text { .. }));
/// ```
#[derive(Parser, Debug)] // requires `derive` feature
#[command(term_width = 0)] // Just to make testing across clap features easier
#[command(version, about = "Parse arguments with clivo or ask interactive questions")]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Parse TOKENS against the declared options and print the result.
    Parse(ParseArgs),

    /// Ask the user to pick one of CHOICES and print its name.
    ///
    /// A choice may be written `name=Label` to show a label instead of the name.
    Choose {
        message: String,
        #[arg(required = true, num_args = 1..)]
        choices: Vec<String>,
    },

    /// Ask the user for free text and print it.
    Text { message: String },

    /// Ask the user for a number and print it.
    Number { message: String },

    /// Ask a sequence of questions and print one answer per line.
    Workflow {
        message: String,

        /// A step as `KIND:MESSAGE[:CHOICE,...]`, KIND being options, text or number.
        ///
        /// # Examples
        /// ```bash
        /// clivo workflow "Profile" -s "text:Name" -s "options:Color:red,green"
        /// ```
        #[arg(long = "step", short = 's', action = clap::ArgAction::Append, required = true)]
        steps: Vec<String>,
    },
}

#[derive(clap::Args, Debug)]
pub struct ParseArgs {
    /// Declare an option as `NAME[:LETTER[:LABEL]]`. Repeat for more options.
    ///
    /// # Examples
    /// ```bash
    /// clivo parse -o order:o -o takeout:t -- -t --order=burger cola
    /// ```
    #[arg(long = "option", short = 'o', action = clap::ArgAction::Append)]
    pub options: Vec<String>,

    /// Keep options that were not declared instead of dropping them.
    #[arg(long, short = 'a', action)]
    pub accept_unspecified: bool,

    /// Take option values only from `=`; words after a flag become positional.
    #[arg(long, short = 'e', action)]
    pub strict_equals: bool,

    /// How to print the parsed arguments.
    #[arg(long, short = 'f', value_enum, default_value_t = OutputFormat::Yaml)]
    pub format: OutputFormat,

    /// The raw arguments to parse. Put them after `--`.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub tokens: Vec<String>,
}

impl ParseArgs {
    #[must_use]
    pub fn parser_config(&self) -> ParserConfig {
        ParserConfig {
            accept_unspecified: self.accept_unspecified,
            strict_equals: self.strict_equals,
        }
    }
}

impl Provider for ParseArgs {
    fn get_request(&self) -> Result<ParseRequest> {
        build_request(&self.options, &self.tokens, self.parser_config())
    }
}
