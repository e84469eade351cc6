pub mod init;
mod schema;

pub use schema::{Config, ThemeConfig};

use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Get the config directory path (~/.config/pwforge/)
pub fn get_config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".config").join("pwforge"))
}

/// Get the default config file path (~/.config/pwforge/config.yaml)
pub fn get_config_path() -> Result<PathBuf> {
    Ok(get_config_dir()?.join("config.yaml"))
}

/// Load configuration from a YAML file
///
/// # Arguments
///
/// * `path` - Optional path to config file. If None, uses the default path
///   and falls back to built-in defaults when that file does not exist.
///
/// # Errors
///
/// Returns an error if:
/// - An explicitly given config file does not exist
/// - The config file cannot be read
/// - The YAML cannot be parsed
pub fn load_config(path: Option<PathBuf>) -> Result<Config> {
    let explicit = path.is_some();
    let config_path = match path {
        Some(p) => p,
        None => get_config_path()?,
    };

    if !config_path.exists() {
        if explicit {
            anyhow::bail!("Config file not found at {}", config_path.display());
        }
        log::debug!(
            "No config at {}, using defaults",
            config_path.display()
        );
        return Ok(Config::default());
    }

    let config_content = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file at {}", config_path.display()))?;

    let config: Config = serde_saphyr::from_str(&config_content)
        .with_context(|| format!("Failed to parse config: invalid YAML in {}", config_path.display()))?;

    log::debug!("Loaded config from {}", config_path.display());
    Ok(config)
}

/// Save configuration to a YAML file atomically
///
/// Creates the parent directory if it doesn't exist.
pub fn save_config(path: &Path, config: &Config) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
    }

    let yaml = serde_saphyr::to_string(config)
        .map_err(|e| anyhow::anyhow!("Failed to serialize config: {}", e))?;

    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;
    file.write_all(yaml.as_bytes())
        .context("Failed to write config")?;
    file.commit()
        .with_context(|| format!("Failed to save config to {}", path.display()))?;

    log::info!("Saved config to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_load_missing_explicit_path_fails() {
        let temp_path = env::temp_dir().join("pwforge_test_missing.yaml");
        let _ = fs::remove_file(&temp_path);

        let result = load_config(Some(temp_path));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("not found"));
    }

    #[test]
    fn test_load_invalid_yaml_fails() {
        let temp_path = env::temp_dir().join("pwforge_test_invalid.yaml");
        fs::write(&temp_path, "length: [not a number").unwrap();

        let result = load_config(Some(temp_path.clone()));
        assert!(result.is_err());

        let _ = fs::remove_file(&temp_path);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let temp_dir = env::temp_dir().join("pwforge_test_roundtrip");
        let temp_path = temp_dir.join("config.yaml");
        let _ = fs::remove_dir_all(&temp_dir);

        let config = Config {
            length: 24,
            include_specials: false,
            theme: ThemeConfig::Light,
            ..Config::default()
        };

        save_config(&temp_path, &config).unwrap();
        let loaded = load_config(Some(temp_path)).unwrap();
        assert_eq!(loaded, config);

        let _ = fs::remove_dir_all(&temp_dir);
    }
}
