//! Clivo Core Library
//!
//! This crate provides the argument parser behind clivo: a deliberately
//! permissive option grammar that turns a flat list of process arguments into
//! a mapping from option names to the values given for them.
//!
//! # Key Features
//!
//! - **Long and Short Options**: `--name`, `--name=v1=v2`, `-xyz`, `-xyz=v`
//! - **Trailing Values**: an option absorbs the bare tokens that follow it
//! - **Fan-out**: every letter of a short cluster receives the same values
//! - **Positional Arguments**: collected under the `_` key
//! - **Strict Equals Mode**: values only through `=`
//! - **Error Handling**: duplicate option names or letters are rejected up front
//!
//! # Examples
//!
//! ```
//! use clivo_core::config::ParseRequest;
//! use clivo_core::option_definitions::OptionSpec;
//! use clivo_core::parsing::parse_arguments;
//!
//! let request = ParseRequest::new(
//!     ["-ab", "v1", "v2"],
//!     vec![
//!         OptionSpec::new("alpha").with_letter('a'),
//!         OptionSpec::new("beta").with_letter('b'),
//!     ],
//! );
//! let dictionary = parse_arguments(&request)?;
//!
//! assert_eq!(dictionary.get("alpha").unwrap(), ["v1", "v2"]);
//! assert_eq!(dictionary.get("beta").unwrap(), ["v1", "v2"]);
//! # Ok::<(), clivo_core::error::Error>(())
//! ```

pub mod config;
pub mod dictionary;
pub mod error;
pub mod option_definitions;
pub mod parsing;
pub mod registry;
