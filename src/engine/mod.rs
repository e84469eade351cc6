pub mod alphabet;
pub mod generate;
pub mod strength;
pub mod validation;

pub use alphabet::{effective_alphabet, GenerationConfig, DEFAULT_SPECIAL_CHARACTERS};
pub use generate::{generate, generate_with, EngineError};
pub use strength::{analyze, score, StrengthCheck, StrengthLevel, StrengthReport};
pub use validation::{clamp_length, validate_config, MAX_LENGTH, MIN_LENGTH};
