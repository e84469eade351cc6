const LETTERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";
const DIGITS: &str = "0123456789";

/// Special characters offered when nothing else is configured.
pub const DEFAULT_SPECIAL_CHARACTERS: &str = "!@#$%^&*()_+-=[]{}|:;,.<>?";

/// Settings for a single password generation.
///
/// The struct is owned by the caller (CLI or TUI) and handed to the engine
/// on every call; the engine itself keeps no state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationConfig {
    /// Number of characters to produce. Range checks live in the caller.
    pub length: usize,
    pub include_numbers: bool,
    pub include_specials: bool,
    /// Only consulted when `include_specials` is set. May be empty.
    pub special_characters: String,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            length: 12,
            include_numbers: true,
            include_specials: true,
            special_characters: DEFAULT_SPECIAL_CHARACTERS.to_string(),
        }
    }
}

/// Build the alphabet passwords are drawn from.
///
/// Letters always come first, then digits, then the configured specials.
/// Duplicates are kept as-is, so a symbol listed twice is drawn twice as often.
pub fn effective_alphabet(config: &GenerationConfig) -> Vec<char> {
    let mut chars: Vec<char> = LETTERS.chars().collect();

    if config.include_numbers {
        chars.extend(DIGITS.chars());
    }
    if config.include_specials {
        chars.extend(config.special_characters.chars());
    }

    chars
}
