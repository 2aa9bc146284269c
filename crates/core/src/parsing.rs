//! Single-pass tokenizer turning raw arguments into a [`ResultDictionary`].
//!
//! Tokens are classified left to right:
//!
//! - `--name` or `--name=v1=v2` is a long option
//! - `-xyz` or `-xyz=v1=v2` is a cluster of short options
//! - anything else is a bare token
//!
//! An option without `=` values stays *pending* and absorbs the bare tokens
//! that follow it. A cluster opens all of its letters at once, so every one of
//! them receives the same trailing values. Pending options that never received
//! a value are recorded with [`FLAG_VALUE`](crate::config::FLAG_VALUE).
//! Bare tokens with nothing pending are positional.

use log::debug;

use crate::config::{ParseRequest, ParserConfig, POSITIONAL_KEY};
use crate::dictionary::ResultDictionary;
use crate::error::Result;
use crate::registry::OptionRegistry;

/// Options waiting for the next bare token.
#[derive(Debug)]
enum Pending {
    Nothing,
    /// May be empty: the option token consumed its own values or named an
    /// option that is dropped, so trailing bare tokens are swallowed.
    Options(Vec<String>),
}

struct Scanner<'a> {
    registry: &'a OptionRegistry,
    config: ParserConfig,
    pending: Pending,
    dictionary: ResultDictionary,
}

impl<'a> Scanner<'a> {
    fn new(registry: &'a OptionRegistry, config: ParserConfig) -> Self {
        Self {
            registry,
            config,
            pending: Pending::Nothing,
            dictionary: ResultDictionary::default(),
        }
    }

    fn scan(&mut self, token: &str) {
        if let Some(body) = token.strip_prefix("--") {
            self.long_option(body);
        } else if let Some(body) = token.strip_prefix('-') {
            self.short_options(body);
        } else {
            self.bare(token);
        }
    }

    fn finish(mut self) -> ResultDictionary {
        self.flush();
        self.dictionary
    }

    fn accepts(&self, name: &str) -> bool {
        self.registry.is_known(name) || self.config.accept_unspecified
    }

    fn resolve(&self, letter: char) -> Option<String> {
        match self.registry.resolve(letter) {
            Some(name) => Some(name.to_string()),
            None if self.config.accept_unspecified => Some(letter.to_string()),
            None => None,
        }
    }

    fn flush(&mut self) {
        if let Pending::Options(names) = std::mem::replace(&mut self.pending, Pending::Nothing) {
            for name in &names {
                self.dictionary.flag(name);
            }
        }
    }

    fn open(&mut self, names: Vec<String>) {
        self.pending = Pending::Options(names);

        if self.config.strict_equals {
            self.flush();
        }
    }

    fn long_option(&mut self, body: &str) {
        self.flush();

        let mut parts = body.split('=');
        let name = parts.next().unwrap_or_default();
        let values: Vec<&str> = parts.collect();

        if !self.accepts(name) {
            debug!("Dropping unknown option `--{name}`");
            self.open(Vec::new());
            return;
        }

        debug!("Long option `{name}` with {} inline values", values.len());
        if !values.is_empty() {
            self.dictionary.extend(name, &values);
        }
        self.open(vec![name.to_string()]);
    }

    fn short_options(&mut self, body: &str) {
        self.flush();

        let (letters, values) = match body.split_once('=') {
            Some((letters, rest)) => (letters, Some(rest.split('=').collect::<Vec<_>>())),
            None => (body, None),
        };

        let mut names = Vec::new();
        let mut resolved_any = false;

        for letter in letters.chars() {
            let Some(name) = self.resolve(letter) else {
                debug!("Dropping unknown option `-{letter}`");
                continue;
            };
            resolved_any = true;

            match &values {
                Some(values) => self.dictionary.extend(&name, values),
                None => names.push(name),
            }
        }

        if resolved_any {
            debug!("Short options `{letters}` open {} pending names", names.len());
            self.open(names);
        }
    }

    fn bare(&mut self, token: &str) {
        match &self.pending {
            Pending::Options(names) => {
                for name in names {
                    self.dictionary.push(name, token);
                }
            }
            Pending::Nothing => self.dictionary.push(POSITIONAL_KEY, token),
        }
    }
}

/// Scans tokens against an already built registry.
pub fn scan_tokens<S: AsRef<str>>(
    registry: &OptionRegistry,
    config: ParserConfig,
    tokens: &[S],
) -> ResultDictionary {
    let mut scanner = Scanner::new(registry, config);

    for token in tokens {
        scanner.scan(token.as_ref());
    }

    scanner.finish()
}

/// Parses the request's tokens into a dictionary.
///
/// Unknown options are dropped silently unless `accept_unspecified` is set;
/// the only failure is an invalid option list.
///
/// # Errors
///
/// Returns an error if two specs share a name or a letter.
///
/// # Examples
///
/// ```
/// use clivo_core::config::ParseRequest;
/// use clivo_core::option_definitions::OptionSpec;
/// use clivo_core::parsing::parse_arguments;
///
/// let request = ParseRequest::new(
///     ["-t", "--order=burger", "cola"],
///     vec![
///         OptionSpec::new("order").with_letter('o'),
///         OptionSpec::new("takeout").with_letter('t'),
///     ],
/// );
/// let dictionary = parse_arguments(&request)?;
///
/// assert!(dictionary.is_flag("takeout"));
/// assert_eq!(dictionary.get("order").unwrap(), ["burger", "cola"]);
/// # Ok::<(), clivo_core::error::Error>(())
/// ```
pub fn parse_arguments(request: &ParseRequest) -> Result<ResultDictionary> {
    let registry = OptionRegistry::build(&request.specs)?;
    Ok(scan_tokens(&registry, request.config, &request.tokens))
}
