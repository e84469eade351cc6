use std::io::IsTerminal;
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::engine::{StrengthCheck, StrengthLevel, StrengthReport};

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Strength label, red/yellow/green when colors are on
pub fn format_strength(level: StrengthLevel, use_colors: bool) -> String {
    if !use_colors {
        return level.to_string();
    }
    match level {
        StrengthLevel::Weak => level.as_str().red().bold().to_string(),
        StrengthLevel::Moderate => level.as_str().yellow().bold().to_string(),
        StrengthLevel::Strong => level.as_str().green().bold().to_string(),
    }
}

/// Password on the first line, strength on the second
pub fn format_generated(password: &str, report: &StrengthReport, use_colors: bool) -> String {
    format!(
        "{}\nStrength: {}",
        password,
        format_strength(report.level, use_colors)
    )
}

/// Strength with one line per rule
/// Format: "Strength: Strong (2/3)" followed by "  [x] Length: at least 12 characters"
pub fn format_report(report: &StrengthReport, use_colors: bool) -> String {
    let mut lines = vec![format!(
        "Strength: {} ({}/{})",
        format_strength(report.level, use_colors),
        report.points,
        report.checks.len()
    )];
    lines.extend(report.checks.iter().map(|check| format_check(check, use_colors)));
    lines.join("\n")
}

fn format_check(check: &StrengthCheck, use_colors: bool) -> String {
    let mark = if check.passed { "[x]" } else { "[ ]" };
    if use_colors {
        let mark = if check.passed {
            mark.green().to_string()
        } else {
            mark.dimmed().to_string()
        };
        format!("  {} {}: {}", mark, check.label.bold(), check.description)
    } else {
        format!("  {} {}: {}", mark, check.label, check.description)
    }
}

#[derive(Debug, Serialize)]
struct GeneratedJson<'a> {
    password: &'a str,
    strength: StrengthLevel,
    points: u8,
    length: usize,
    alphabet_size: usize,
}

#[derive(Debug, Serialize)]
struct ScoreJson<'a> {
    strength: StrengthLevel,
    points: u8,
    checks: &'a [StrengthCheck],
}

/// JSON for `generate --json`
pub fn format_generated_json(
    password: &str,
    report: &StrengthReport,
    alphabet_size: usize,
) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&GeneratedJson {
        password,
        strength: report.level,
        points: report.points,
        length: password.chars().count(),
        alphabet_size,
    })
}

/// JSON for `score --json`
pub fn format_report_json(report: &StrengthReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&ScoreJson {
        strength: report.level,
        points: report.points,
        checks: &report.checks,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::analyze;

    #[test]
    fn test_format_strength_plain() {
        assert_eq!(format_strength(StrengthLevel::Weak, false), "Weak");
        assert_eq!(format_strength(StrengthLevel::Strong, false), "Strong");
    }

    #[test]
    fn test_format_strength_colored_contains_label() {
        let colored = format_strength(StrengthLevel::Moderate, true);
        assert!(colored.contains("Moderate"));
        assert!(colored.contains("\u{1b}["));
    }

    #[test]
    fn test_format_generated() {
        let report = analyze("abcdefghij12");
        let result = format_generated("abcdefghij12", &report, false);
        assert_eq!(result, "abcdefghij12\nStrength: Strong");
    }

    #[test]
    fn test_format_report() {
        let report = analyze("abcdefghijkl");
        let result = format_report(&report, false);
        let lines: Vec<&str> = result.lines().collect();
        assert_eq!(lines[0], "Strength: Moderate (1/3)");
        assert_eq!(lines[1], "  [x] Length: at least 12 characters");
        assert!(lines[2].starts_with("  [ ] Digits"));
        assert!(lines[3].starts_with("  [ ] Symbols"));
    }

    #[test]
    fn test_format_generated_json() {
        let report = analyze("ab#1");
        let json = format_generated_json("ab#1", &report, 65).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["password"], "ab#1");
        assert_eq!(value["strength"], "Strong");
        assert_eq!(value["points"], 2);
        assert_eq!(value["length"], 4);
        assert_eq!(value["alphabet_size"], 65);
    }

    #[test]
    fn test_format_report_json() {
        let report = analyze("");
        let json = format_report_json(&report).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["strength"], "Weak");
        assert_eq!(value["checks"].as_array().unwrap().len(), 3);
        assert_eq!(value["checks"][0]["label"], "Length");
        assert_eq!(value["checks"][0]["passed"], false);
    }
}
