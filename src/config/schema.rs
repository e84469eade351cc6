use serde::{Deserialize, Serialize};

use crate::engine::GenerationConfig;

/// Which palette the TUI starts with.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ThemeConfig {
    /// Detect from the terminal background
    #[default]
    Auto,
    Dark,
    Light,
}

/// Config file contents. Every field is optional in YAML.
///
/// Example YAML:
/// ```yaml
/// length: 16
/// include_numbers: true
/// include_specials: true
/// special_characters: "!@#$%"
/// theme: dark
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub length: usize,
    pub include_numbers: bool,
    pub include_specials: bool,
    pub special_characters: String,
    pub theme: ThemeConfig,
}

impl Default for Config {
    fn default() -> Self {
        let generation = GenerationConfig::default();
        Self {
            length: generation.length,
            include_numbers: generation.include_numbers,
            include_specials: generation.include_specials,
            special_characters: generation.special_characters,
            theme: ThemeConfig::Auto,
        }
    }
}

impl Config {
    pub fn generation_config(&self) -> GenerationConfig {
        GenerationConfig {
            length: self.length,
            include_numbers: self.include_numbers,
            include_specials: self.include_specials,
            special_characters: self.special_characters.clone(),
        }
    }

    /// Copy generation settings back in, e.g. when the TUI saves its form.
    pub fn set_generation_config(&mut self, generation: &GenerationConfig) {
        self.length = generation.length;
        self.include_numbers = generation.include_numbers;
        self.include_specials = generation.include_specials;
        self.special_characters = generation.special_characters.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::DEFAULT_SPECIAL_CHARACTERS;

    #[test]
    fn test_default_matches_generation_defaults() {
        let config = Config::default();
        assert_eq!(config.generation_config(), GenerationConfig::default());
        assert_eq!(config.theme, ThemeConfig::Auto);
    }

    #[test]
    fn test_empty_config_parse() {
        let config: Config = serde_saphyr::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_config_parse() {
        let yaml = r#"
length: 20
include_specials: false
"#;
        let config: Config = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(config.length, 20);
        assert!(!config.include_specials);
        assert!(config.include_numbers);
        assert_eq!(config.special_characters, DEFAULT_SPECIAL_CHARACTERS);
    }

    #[test]
    fn test_full_config_parse() {
        let yaml = r##"
length: 32
include_numbers: false
include_specials: true
special_characters: "#%"
theme: light
"##;
        let config: Config = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(config.length, 32);
        assert!(!config.include_numbers);
        assert_eq!(config.special_characters, "#%");
        assert_eq!(config.theme, ThemeConfig::Light);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let yaml = "length: 12\npasswords: []\n";
        assert!(serde_saphyr::from_str::<Config>(yaml).is_err());
    }

    #[test]
    fn test_config_serde_roundtrip() {
        let config = Config {
            length: 40,
            theme: ThemeConfig::Dark,
            ..Config::default()
        };
        let yaml = serde_saphyr::to_string(&config).unwrap();
        let parsed: Config = serde_saphyr::from_str(&yaml).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_generation_config_mapping() {
        let mut config = Config::default();
        let generation = GenerationConfig {
            length: 50,
            include_numbers: false,
            include_specials: false,
            special_characters: "~".to_string(),
        };
        config.set_generation_config(&generation);
        assert_eq!(config.generation_config(), generation);
        assert_eq!(config.theme, ThemeConfig::Auto);
    }
}
