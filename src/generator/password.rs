//! Password generation
//!
//! Every position is an independent uniform draw, with replacement, from a
//! cryptographically secure source.

use crate::config::GenerationConfig;
use crate::error::ConfigResult;
use crate::generator::Alphabet;
use log::debug;
use rand::rngs::OsRng;
use rand::{CryptoRng, Rng};

/// Generate a password using the operating system's secure random source
pub fn generate(config: &GenerationConfig) -> ConfigResult<String> {
    generate_with_rng(config, &mut OsRng)
}

/// Generate a password drawing from the given secure random source
///
/// With spaces allowed, the first and last characters come from the
/// space-free pool. Passwords of length 1 or 2 therefore never contain a
/// space.
pub fn generate_with_rng<R>(config: &GenerationConfig, rng: &mut R) -> ConfigResult<String>
where
    R: Rng + CryptoRng,
{
    config.validate()?;

    let alphabet = Alphabet::from_config(config);
    debug!(
        "Generating {} characters from {} candidates (spaces: {})",
        config.length,
        alphabet.size(),
        config.allow_spaces
    );

    let last = config.length - 1;
    let password = (0..config.length)
        .map(|position| {
            let pool = if position == 0 || position == last {
                alphabet.boundary()
            } else {
                alphabet.interior()
            };
            draw(pool, rng)
        })
        .collect();

    Ok(password)
}

/// Pick one character uniformly from a non-empty pool
fn draw<R: Rng>(pool: &[char], rng: &mut R) -> char {
    pool[rng.gen_range(0..pool.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CategorySet, CharacterCategory};
    use crate::error::ConfigError;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn only(category: CharacterCategory) -> CategorySet {
        [category].into_iter().collect()
    }

    #[test]
    fn test_generate_default_length() {
        let password = generate(&GenerationConfig::default()).unwrap();
        assert_eq!(password.chars().count(), 64);
    }

    #[test]
    fn test_single_uppercase_character() {
        let config = GenerationConfig::new()
            .with_length(1)
            .with_categories(only(CharacterCategory::Uppercase))
            .with_spaces(false);
        let password = generate(&config).unwrap();
        assert_eq!(password.len(), 1);
        assert!(password.chars().all(|c| c.is_ascii_uppercase()));
    }

    #[test]
    fn test_two_digits_with_spaces_allowed() {
        let config = GenerationConfig::new()
            .with_length(2)
            .with_categories(only(CharacterCategory::Digit))
            .with_spaces(true);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let password = generate_with_rng(&config, &mut rng).unwrap();
            assert_eq!(password.len(), 2);
            assert!(password.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_spaces_never_at_boundaries() {
        let config = GenerationConfig::new()
            .with_length(3)
            .with_categories(only(CharacterCategory::Digit))
            .with_spaces(true);
        let mut rng = StdRng::seed_from_u64(42);
        let mut saw_space = false;
        for _ in 0..2000 {
            let password: Vec<char> = generate_with_rng(&config, &mut rng)
                .unwrap()
                .chars()
                .collect();
            assert_ne!(password[0], ' ');
            assert_ne!(password[2], ' ');
            saw_space |= password[1] == ' ';
        }
        // 1 in 11 interior draws is a space
        assert!(saw_space);
    }

    #[test]
    fn test_no_spaces_when_disabled() {
        let config = GenerationConfig::new().with_length(500).with_spaces(false);
        let password = generate(&config).unwrap();
        assert!(!password.contains(' '));
    }

    #[test]
    fn test_zero_length_rejected() {
        let config = GenerationConfig::new().with_length(0);
        assert_eq!(generate(&config), Err(ConfigError::InvalidLength));
    }

    #[test]
    fn test_space_only_rejected() {
        let config = GenerationConfig::new()
            .with_length(5)
            .with_categories(CategorySet::empty())
            .with_spaces(true);
        assert_eq!(generate(&config), Err(ConfigError::NoCategoryEnabled));
    }

    #[test]
    fn test_seeded_generation_is_repeatable() {
        let config = GenerationConfig::default();
        let a = generate_with_rng(&config, &mut StdRng::seed_from_u64(1)).unwrap();
        let b = generate_with_rng(&config, &mut StdRng::seed_from_u64(1)).unwrap();
        assert_eq!(a, b);
    }
}
