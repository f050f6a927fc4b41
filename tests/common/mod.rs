//! Common test utilities

use assert_cmd::Command;
use pwgen::{CategorySet, CharacterCategory};

/// The pwgen binary, ready to receive arguments
pub fn pwgen() -> Command {
    Command::cargo_bin("pwgen").unwrap()
}

/// A category set holding the given categories
pub fn categories(enabled: &[CharacterCategory]) -> CategorySet {
    enabled.iter().copied().collect()
}

/// Every character an enabled category may contribute
pub fn allowed_chars(set: CategorySet) -> String {
    set.iter().map(|c| c.alphabet()).collect()
}
