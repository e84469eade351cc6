use super::alphabet::GenerationConfig;

pub const MIN_LENGTH: usize = 6;
pub const MAX_LENGTH: usize = 100;

/// Clamp a requested length into the range the UI offers.
pub fn clamp_length(length: usize) -> usize {
    length.clamp(MIN_LENGTH, MAX_LENGTH)
}

/// Validate generation settings coming from a config file or the command line.
/// Returns all validation errors at once (not just the first).
pub fn validate_config(config: &GenerationConfig) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if !(MIN_LENGTH..=MAX_LENGTH).contains(&config.length) {
        errors.push(format!(
            "length: must be between {} and {}, got {}",
            MIN_LENGTH, MAX_LENGTH, config.length
        ));
    }

    if config.include_specials {
        let control: Vec<String> = config
            .special_characters
            .chars()
            .filter(|c| c.is_control())
            .map(|c| format!("{:?}", c))
            .collect();
        if !control.is_empty() {
            errors.push(format!(
                "special_characters: control characters are not allowed ({})",
                control.join(", ")
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
