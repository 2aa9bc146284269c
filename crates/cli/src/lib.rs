//! Clivo CLI Library
//!
//! This crate provides the interactive side of clivo and the `clivo` binary.
//! It offers line-based prompts over a terminal and a small command-line
//! front end for trying out the argument parser from `clivo-core`.
//!
//! # Key Features
//!
//! - **Choice Prompts**: Numbered lists that re-ask until a valid number is given
//! - **Text and Number Prompts**: Single questions, numbers validated and re-asked
//! - **Workflows**: A fixed sequence of questions collected into answers
//! - **Nested Menus**: Menu entries run actions that may open further menus
//! - **Parser Front End**: Declare options on the command line and see what clivo makes of tokens
//!
//! # Architecture
//!
//! - [`prompts`]: The terminal abstraction and every prompt built on it
//! - [`arguments`]: Option and step declarations, request building, output rendering
//! - [`cli_args`]: The `clap` definition of the binary's own arguments
//!
//! # Examples
//!
//! ```bash
//! # Parse tokens against two declared options
//! clivo parse -o order:o -o takeout:t -- -t --order=burger cola -o=fries
//!
//! # Same, taking values only from `=`
//! clivo parse -e -o order:o -- --order=burger cola
//!
//! # Ask for a choice
//! clivo choose "Pick a color" red=Red green=Green
//!
//! # Run a workflow
//! clivo workflow "Profile" -s "text:Name" -s "number:Age" -s "options:Color:red,green"
//! ```

pub mod arguments;
pub mod cli_args;
pub mod prompts;
