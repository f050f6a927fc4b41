//! Core configuration types
//!
//! This module defines the character categories a password can draw from
//! and the settings for a single generation request.

use std::fmt;

/// Length used when none is requested
pub const DEFAULT_LENGTH: usize = 64;

/// A named group of characters that can be enabled or disabled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CharacterCategory {
    Uppercase,
    Lowercase,
    Digit,
    Special,
}

impl CharacterCategory {
    /// Every category, in the order alphabets are concatenated
    pub const ALL: [CharacterCategory; 4] = [
        CharacterCategory::Uppercase,
        CharacterCategory::Lowercase,
        CharacterCategory::Digit,
        CharacterCategory::Special,
    ];

    /// The fixed characters belonging to this category
    pub fn alphabet(self) -> &'static str {
        match self {
            CharacterCategory::Uppercase => "ABCDEFGHIJKLMNOPQRSTUVWXYZ",
            CharacterCategory::Lowercase => "abcdefghijklmnopqrstuvwxyz",
            CharacterCategory::Digit => "0123456789",
            CharacterCategory::Special => ",./;'[]\\`<>?:\"{}|~!@#$%^&*()_+",
        }
    }

    /// Short flags that enable and disable this category
    pub fn flags(self) -> (char, char) {
        match self {
            CharacterCategory::Uppercase => ('u', 'U'),
            CharacterCategory::Lowercase => ('l', 'L'),
            CharacterCategory::Digit => ('d', 'D'),
            CharacterCategory::Special => ('x', 'X'),
        }
    }

    /// Human readable name, used in help text
    pub fn name(self) -> &'static str {
        match self {
            CharacterCategory::Uppercase => "uppercase characters",
            CharacterCategory::Lowercase => "lowercase characters",
            CharacterCategory::Digit => "digits",
            CharacterCategory::Special => "special characters",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for CharacterCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Set of enabled categories
///
/// Iteration always yields categories in [`CharacterCategory::ALL`] order,
/// whatever order they were inserted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CategorySet {
    enabled: [bool; 4],
}

impl CategorySet {
    /// A set with every category enabled
    pub fn all() -> Self {
        CategorySet { enabled: [true; 4] }
    }

    /// A set with nothing enabled
    pub fn empty() -> Self {
        CategorySet::default()
    }

    pub fn insert(&mut self, category: CharacterCategory) {
        self.enabled[category.index()] = true;
    }

    pub fn remove(&mut self, category: CharacterCategory) {
        self.enabled[category.index()] = false;
    }

    /// Enable or disable a category
    pub fn set(&mut self, category: CharacterCategory, enabled: bool) {
        self.enabled[category.index()] = enabled;
    }

    pub fn contains(&self, category: CharacterCategory) -> bool {
        self.enabled[category.index()]
    }

    pub fn is_empty(&self) -> bool {
        !self.enabled.iter().any(|&e| e)
    }

    pub fn len(&self) -> usize {
        self.enabled.iter().filter(|&&e| e).count()
    }

    /// Iterate over enabled categories in fixed order
    pub fn iter(&self) -> impl Iterator<Item = CharacterCategory> + '_ {
        CharacterCategory::ALL
            .into_iter()
            .filter(move |c| self.contains(*c))
    }
}

impl FromIterator<CharacterCategory> for CategorySet {
    fn from_iter<I: IntoIterator<Item = CharacterCategory>>(iter: I) -> Self {
        let mut set = CategorySet::empty();
        for category in iter {
            set.insert(category);
        }
        set
    }
}

/// Settings for one password generation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationConfig {
    /// Number of characters to produce
    pub length: usize,

    /// Categories whose characters may appear
    pub categories: CategorySet,

    /// Whether spaces may appear away from the first and last position
    pub allow_spaces: bool,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        GenerationConfig {
            length: DEFAULT_LENGTH,
            categories: CategorySet::all(),
            allow_spaces: true,
        }
    }
}

impl GenerationConfig {
    /// Create a config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the password length
    pub fn with_length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    /// Replace the enabled categories
    pub fn with_categories(mut self, categories: CategorySet) -> Self {
        self.categories = categories;
        self
    }

    /// Enable or disable a single category
    pub fn with_category(mut self, category: CharacterCategory, enabled: bool) -> Self {
        self.categories.set(category, enabled);
        self
    }

    /// Allow or forbid spaces
    pub fn with_spaces(mut self, allow_spaces: bool) -> Self {
        self.allow_spaces = allow_spaces;
        self
    }
}
