//! Validation and indexing of declared options.

use std::collections::{HashMap, HashSet};

use log::debug;

use crate::error::{Error, Result};
use crate::option_definitions::OptionSpec;

/// Index of declared options: the set of names and the letter aliases.
#[derive(Debug, Default, Clone)]
pub struct OptionRegistry {
    names: HashSet<String>,
    name_by_letter: HashMap<char, String>,
}

impl OptionRegistry {
    /// Builds the registry, rejecting duplicate names and duplicate letters.
    ///
    /// Specs are checked in order, so the first repeated name or letter is
    /// the one reported.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateOptionName`] or [`Error::DuplicateOptionLetter`].
    pub fn build(specs: &[OptionSpec]) -> Result<Self> {
        let mut registry = Self::default();

        for spec in specs {
            if !registry.names.insert(spec.name.clone()) {
                return Err(Error::DuplicateOptionName(spec.name.clone()));
            }

            if let Some(letter) = spec.letter {
                if registry.name_by_letter.contains_key(&letter) {
                    return Err(Error::DuplicateOptionLetter(letter));
                }
                registry.name_by_letter.insert(letter, spec.name.clone());
            }
        }

        debug!(
            "Registered {} options ({} with letters)",
            registry.names.len(),
            registry.name_by_letter.len()
        );

        Ok(registry)
    }

    #[must_use]
    pub fn is_known(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Canonical name for a letter alias.
    #[must_use]
    pub fn resolve(&self, letter: char) -> Option<&str> {
        self.name_by_letter.get(&letter).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
