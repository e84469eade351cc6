use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::config::{get_config_path, save_config, Config, ThemeConfig};
use crate::engine::{validate_config, MAX_LENGTH, MIN_LENGTH};

/// Answer to the symbols prompt that selects an empty set
const NO_SPECIALS: &str = "none";

/// Prompt user with a message and return the line without its line ending.
fn prompt_raw<R: BufRead, W: Write>(input: &mut R, output: &mut W, message: &str) -> Result<String> {
    write!(output, "{}", message).context("Failed to write prompt")?;
    output.flush().context("Failed to flush stdout")?;
    let mut line = String::new();
    let read = input.read_line(&mut line).context("Failed to read input")?;
    if read == 0 {
        anyhow::bail!("Input closed before the wizard finished");
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Prompt user with a message and return their trimmed input.
fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, message: &str) -> Result<String> {
    Ok(prompt_raw(input, output, message)?.trim().to_string())
}

/// Prompt user with a message and a default value. Returns default if input is empty.
fn prompt_with_default<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
    default: &str,
) -> Result<String> {
    let answer = prompt(input, output, &format!("{} [{}]: ", message, default))?;
    if answer.is_empty() {
        Ok(default.to_string())
    } else {
        Ok(answer)
    }
}

/// Prompt user with a yes/no question. Returns bool based on input and default.
fn prompt_yes_no<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
    default_yes: bool,
) -> Result<bool> {
    let hint = if default_yes { "Y/n" } else { "y/N" };
    let answer = prompt(input, output, &format!("{} [{}]: ", message, hint))?.to_lowercase();
    if answer.is_empty() {
        Ok(default_yes)
    } else {
        Ok(answer == "y" || answer == "yes")
    }
}

/// Run the interactive init wizard on stdin/stdout.
///
/// If `default_path` is Some, it is offered as the config file path.
pub fn run_init_wizard(default_path: Option<PathBuf>) -> Result<()> {
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    run_wizard(&mut stdin.lock(), &mut stdout, default_path).map(|_| ())
}

/// Wizard body. Returns the path written, or None if the user aborted.
pub fn run_wizard<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    default_path: Option<PathBuf>,
) -> Result<Option<PathBuf>> {
    let defaults = Config::default();

    writeln!(output)?;
    writeln!(output, "pwforge configuration")?;
    writeln!(output, "=====================")?;
    writeln!(output, "These values become the starting point of every run.")?;
    writeln!(output)?;

    let length = loop {
        let answer = prompt_with_default(
            input,
            output,
            &format!("Password length ({}-{})", MIN_LENGTH, MAX_LENGTH),
            &defaults.length.to_string(),
        )?;
        match answer.parse::<usize>() {
            Ok(v) if (MIN_LENGTH..=MAX_LENGTH).contains(&v) => break v,
            Ok(_) => writeln!(
                output,
                "  Invalid: must be between {} and {}. Try again.",
                MIN_LENGTH, MAX_LENGTH
            )?,
            Err(_) => writeln!(output, "  Invalid: must be a whole number. Try again.")?,
        }
    };

    let include_numbers =
        prompt_yes_no(input, output, "Include numbers?", defaults.include_numbers)?;
    let include_specials = prompt_yes_no(
        input,
        output,
        "Include special characters?",
        defaults.include_specials,
    )?;

    let mut config = Config {
        length,
        include_numbers,
        include_specials,
        ..Config::default()
    };

    if include_specials {
        config.special_characters = loop {
            // Spaces are valid symbols, so this answer is not trimmed
            let raw = prompt_raw(
                input,
                output,
                &format!(
                    "Special characters, typed exactly (\"{}\" for none) [{}]: ",
                    NO_SPECIALS, defaults.special_characters
                ),
            )?;
            let answer = match raw.as_str() {
                "" => defaults.special_characters.clone(),
                NO_SPECIALS => String::new(),
                _ => raw,
            };
            let candidate = Config {
                special_characters: answer.clone(),
                ..config.clone()
            };
            match validate_config(&candidate.generation_config()) {
                Ok(()) => break answer,
                Err(errors) => {
                    for error in errors {
                        writeln!(output, "  Invalid: {}. Try again.", error)?;
                    }
                }
            }
        };
    }

    config.theme = loop {
        let answer = prompt_with_default(input, output, "Theme (auto/dark/light)", "auto")?;
        match answer.to_lowercase().as_str() {
            "auto" => break ThemeConfig::Auto,
            "dark" => break ThemeConfig::Dark,
            "light" => break ThemeConfig::Light,
            _ => writeln!(output, "  Invalid: choose auto, dark or light. Try again.")?,
        }
    };

    let default_config_path = match default_path {
        Some(p) => p,
        None => get_config_path()?,
    };
    writeln!(output)?;
    let path_str = prompt_with_default(
        input,
        output,
        "Where should the config be saved?",
        &default_config_path.display().to_string(),
    )?;
    let config_path = PathBuf::from(&path_str);

    if config_path.exists() {
        let overwrite = prompt_yes_no(
            input,
            output,
            &format!("Config already exists at {}. Overwrite?", config_path.display()),
            false,
        )?;
        if !overwrite {
            writeln!(output, "Aborted.")?;
            return Ok(None);
        }
    }

    save_config(&config_path, &config)?;

    writeln!(output)?;
    writeln!(output, "Config written to {}", config_path.display())?;
    writeln!(output, "Run `pwforge` to get started.")?;

    Ok(Some(config_path))
}
