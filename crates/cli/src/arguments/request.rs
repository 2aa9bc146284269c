//! Building parse requests from front-end arguments.

use log::debug;

use clivo_core::config::{ParseRequest, ParserConfig};
use clivo_core::error::Result;
use clivo_core::option_definitions::OptionSpec;

use super::processing::parse_option_declaration;

/// Trait for argument structures that describe a parse.
pub trait Provider {
    /// Builds the request to hand to the parser.
    ///
    /// # Errors
    ///
    /// Returns an error if an option declaration cannot be understood.
    fn get_request(&self) -> Result<ParseRequest>;
}

/// Builds a request from option declarations and raw tokens.
///
/// Declarations are only checked for shape here; duplicate names or letters
/// are reported by the parser itself.
///
/// # Errors
///
/// Returns an error for the first malformed declaration.
///
/// # Examples
///
/// ```rust
/// use clivo_cli::arguments::build_request;
/// use clivo_core::config::ParserConfig;
///
/// let request = build_request(
///     &["order:o".to_string()],
///     &["-o".to_string(), "fries".to_string()],
///     ParserConfig::default(),
/// )
/// .unwrap();
/// assert_eq!(request.specs.len(), 1);
/// assert_eq!(request.tokens.len(), 2);
/// ```
pub fn build_request(
    declarations: &[String],
    tokens: &[String],
    config: ParserConfig,
) -> Result<ParseRequest> {
    let specs = declarations
        .iter()
        .map(|declaration| parse_option_declaration(declaration))
        .collect::<Result<Vec<OptionSpec>>>()?;

    for spec in &specs {
        debug!("Declared option {spec}");
    }

    Ok(ParseRequest::new(tokens.iter().cloned(), specs).with_config(config))
}
