use rand::Rng;
use thiserror::Error;

use super::alphabet::{effective_alphabet, GenerationConfig};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

/// Generate a password using the thread-local generator.
pub fn generate(config: &GenerationConfig) -> Result<String, EngineError> {
    generate_with(config, &mut rand::rng())
}

/// Generate a password drawing indices from `rng`.
///
/// Each position is an independent uniform draw from the effective alphabet,
/// with replacement. `config.length` is taken as-is; clamp it before calling.
pub fn generate_with<R: Rng>(
    config: &GenerationConfig,
    rng: &mut R,
) -> Result<String, EngineError> {
    if config.length == 0 {
        return Ok(String::new());
    }

    let alphabet = effective_alphabet(config);
    if alphabet.is_empty() {
        return Err(EngineError::InvalidConfiguration(
            "character alphabet is empty".to_string(),
        ));
    }

    let password = (0..config.length)
        .map(|_| alphabet[rng.random_range(0..alphabet.len())])
        .collect();

    Ok(password)
}
