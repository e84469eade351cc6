use serde::Serialize;
use std::fmt;

/// Passwords at least this long earn the length point.
pub const STRONG_LENGTH: usize = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StrengthLevel {
    Weak,
    Moderate,
    Strong,
}

impl StrengthLevel {
    fn from_points(points: u8) -> Self {
        match points {
            0 => StrengthLevel::Weak,
            1 => StrengthLevel::Moderate,
            _ => StrengthLevel::Strong,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StrengthLevel::Weak => "Weak",
            StrengthLevel::Moderate => "Moderate",
            StrengthLevel::Strong => "Strong",
        }
    }
}

impl fmt::Display for StrengthLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StrengthCheck {
    pub label: &'static str,       // e.g. "Length", "Digits"
    pub description: &'static str, // e.g. "at least 12 characters"
    pub passed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StrengthReport {
    pub level: StrengthLevel,
    pub points: u8,
    pub checks: Vec<StrengthCheck>,
}

/// Rate a password. Same rules as [`analyze`], level only.
pub fn score(password: &str) -> StrengthLevel {
    analyze(password).level
}

/// Rate a password and keep the outcome of every rule.
///
/// One point each for: 12+ characters, an ASCII digit, and any character
/// outside `[A-Za-z0-9]`. 0 points is weak, 1 moderate, 2 or 3 strong.
pub fn analyze(password: &str) -> StrengthReport {
    let checks = vec![
        StrengthCheck {
            label: "Length",
            description: "at least 12 characters",
            passed: password.chars().count() >= STRONG_LENGTH,
        },
        StrengthCheck {
            label: "Digits",
            description: "contains a digit 0-9",
            passed: password.chars().any(|c| c.is_ascii_digit()),
        },
        StrengthCheck {
            label: "Symbols",
            description: "contains a character other than A-Z, a-z, 0-9",
            passed: password.chars().any(|c| !c.is_ascii_alphanumeric()),
        },
    ];

    let points = checks.iter().filter(|c| c.passed).count() as u8;

    StrengthReport {
        level: StrengthLevel::from_points(points),
        points,
        checks,
    }
}
