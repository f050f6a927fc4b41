//! Alphabet construction
//!
//! Builds the character pools a password is drawn from.

use crate::config::GenerationConfig;

/// The space character, allowed only away from the ends of a password
pub const SPACE: char = ' ';

/// Character pools for one generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    /// Characters allowed at the first and last position
    boundary: Vec<char>,

    /// Characters allowed everywhere else
    interior: Vec<char>,
}

impl Alphabet {
    /// Build the pools for a config
    ///
    /// Enabled categories are concatenated in fixed order. The space is
    /// appended to the interior pool only when the config allows spaces.
    pub fn from_config(config: &GenerationConfig) -> Self {
        let boundary: Vec<char> = config
            .categories
            .iter()
            .flat_map(|category| category.alphabet().chars())
            .collect();

        let mut interior = boundary.clone();
        if config.allow_spaces {
            interior.push(SPACE);
        }

        Alphabet { boundary, interior }
    }

    pub fn boundary(&self) -> &[char] {
        &self.boundary
    }

    pub fn interior(&self) -> &[char] {
        &self.interior
    }

    /// Number of distinct characters an interior position can take
    pub fn size(&self) -> usize {
        self.interior.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boundary.is_empty()
    }
}
