//! Password complexity scoring and remediation feedback.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::{PASSWORD_MIN_LENGTH, PASSWORD_SPECIAL_CHARS};

/// Ordered strength tier for a password strength meter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strength {
    Weak,
    Fair,
    Good,
    Strong,
}

impl Strength {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Weak => "weak",
            Self::Fair => "fair",
            Self::Good => "good",
            Self::Strong => "strong",
        }
    }

    /// CSS class the strength meter bar uses for this tier.
    #[must_use]
    pub const fn color_class(self) -> &'static str {
        match self {
            Self::Weak => "bg-destructive",
            Self::Fair => "bg-yellow-500",
            Self::Good => "bg-blue-500",
            Self::Strong => "bg-green-500",
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a password check: acceptance, meter tier, and what is missing.
///
/// Produced fresh on every call and owned by the caller; nothing is cached or
/// shared between invocations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasswordVerdict {
    pub is_valid: bool,
    pub strength: Strength,
    pub feedback: Vec<String>,
}

/// Score a password against five independent predicates: minimum length,
/// lowercase, uppercase, digit, and one of [`PASSWORD_SPECIAL_CHARS`].
///
/// `strength` maps `score = 5 - failing` through a fixed threshold table
/// (≥4 strong, 3 good, 2 fair, else weak). `is_valid` requires all five
/// predicates, so a password can read `strong` on the meter while still
/// being rejected for one missing requirement. `feedback` is empty when
/// valid, otherwise a single combined `"Add: ..."` line listing every
/// missing requirement.
#[must_use]
pub fn validate_password(password: &str) -> PasswordVerdict {
    let mut missing: Vec<&str> = Vec::new();

    if password.chars().count() < PASSWORD_MIN_LENGTH {
        missing.push("At least 8 characters");
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        missing.push("Lowercase letter");
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        missing.push("Uppercase letter");
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        missing.push("Number");
    }
    if !password.chars().any(|c| PASSWORD_SPECIAL_CHARS.contains(c)) {
        missing.push("Special character");
    }

    let strength = match 5 - missing.len() {
        4 | 5 => Strength::Strong,
        3 => Strength::Good,
        2 => Strength::Fair,
        _ => Strength::Weak,
    };

    let feedback = if missing.is_empty() {
        Vec::new()
    } else {
        vec![format!("Add: {}", missing.join(", "))]
    };

    PasswordVerdict {
        is_valid: missing.is_empty(),
        strength,
        feedback,
    }
}
