//! Constant tables shared by the validators and the presentation layer.
//!
//! These mirror the auth catalog configuration: policy numbers, per-field
//! validation rules with their user-facing messages, and the closed sets of
//! form modes and visual styles. Everything here is immutable data; the
//! validators read the patterns from [`rules`] so there is a single source of
//! truth for each field.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Minimum password length enforced by the complexity scorer.
pub const PASSWORD_MIN_LENGTH: usize = 8;

/// Special characters the password scorer accepts for its fifth predicate.
pub const PASSWORD_SPECIAL_CHARS: &str = "@$!%*?&";

/// Expected one-time-code length after normalization.
pub const OTP_LENGTH: usize = 6;

/// Cool-down before a form offers to resend a one-time code.
pub const OTP_RESEND_TIMEOUT: Duration = Duration::from_secs(30);

/// Password reset link policy. Enforced by the backend issuing the links;
/// published here so forms can render matching copy.
#[derive(Debug, Clone, Copy)]
pub struct PasswordResetPolicy {
    pub link_expiry: Duration,
    pub max_attempts: u32,
}

pub const PASSWORD_RESET: PasswordResetPolicy = PasswordResetPolicy {
    link_expiry: Duration::from_secs(24 * 60 * 60),
    max_attempts: 5,
};

/// Security toggles advertised to the forms. Like [`PASSWORD_RESET`], the
/// actual enforcement lives in the backend.
#[derive(Debug, Clone, Copy)]
pub struct SecurityPolicy {
    pub enable_rate_limiting: bool,
    pub enable_two_factor: bool,
    pub session_timeout: Duration,
}

pub const SECURITY: SecurityPolicy = SecurityPolicy {
    enable_rate_limiting: true,
    enable_two_factor: true,
    session_timeout: Duration::from_secs(60 * 60),
};

/// Per-field validation rules: the regex a validator applies and the message
/// a form shows when it does not match.
pub mod rules {
    #[derive(Debug, Clone, Copy)]
    pub struct FieldRule {
        pub pattern: &'static str,
        pub message: &'static str,
    }

    pub const EMAIL: FieldRule = FieldRule {
        pattern: r"^[^@\s]+@[^@\s]+\.[^@\s]+$",
        message: "Please enter a valid email address",
    };

    pub const FULL_NAME: FieldRule = FieldRule {
        pattern: r"^[a-zA-Z\s'-]{2,50}$",
        message: "Full name can only contain letters, spaces, hyphens, and apostrophes",
    };

    /// The password field carries no single pattern (the scorer evaluates
    /// predicates separately), only the combined requirement message.
    pub const PASSWORD_MESSAGE: &str =
        "Password must be at least 8 characters with uppercase, lowercase, number, and special character";
}

/// Mode an auth form is rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthMode {
    Login,
    Signup,
    Forgot,
    Otp,
}

impl AuthMode {
    pub const ALL: [Self; 4] = [Self::Login, Self::Signup, Self::Forgot, Self::Otp];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Signup => "signup",
            Self::Forgot => "forgot",
            Self::Otp => "otp",
        }
    }
}

/// Visual style variants in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AuthStyle {
    Minimalist,
    SplitScreen,
    Glassmorphism,
    ModernGradient,
    DarkNeon,
    SoftRounded,
    Neumorphic,
    Geometric,
    Brutalist,
    Luxury,
    Cyberpunk,
    MinimalistDark,
}

impl AuthStyle {
    pub const ALL: [Self; 12] = [
        Self::Minimalist,
        Self::SplitScreen,
        Self::Glassmorphism,
        Self::ModernGradient,
        Self::DarkNeon,
        Self::SoftRounded,
        Self::Neumorphic,
        Self::Geometric,
        Self::Brutalist,
        Self::Luxury,
        Self::Cyberpunk,
        Self::MinimalistDark,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Minimalist => "minimalist",
            Self::SplitScreen => "split-screen",
            Self::Glassmorphism => "glassmorphism",
            Self::ModernGradient => "modern-gradient",
            Self::DarkNeon => "dark-neon",
            Self::SoftRounded => "soft-rounded",
            Self::Neumorphic => "neumorphic",
            Self::Geometric => "geometric",
            Self::Brutalist => "brutalist",
            Self::Luxury => "luxury",
            Self::Cyberpunk => "cyberpunk",
            Self::MinimalistDark => "minimalist-dark",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_values() {
        assert_eq!(PASSWORD_MIN_LENGTH, 8);
        assert_eq!(OTP_LENGTH, 6);
        assert_eq!(OTP_RESEND_TIMEOUT, Duration::from_secs(30));
        assert_eq!(PASSWORD_RESET.link_expiry, Duration::from_secs(86_400));
        assert_eq!(PASSWORD_RESET.max_attempts, 5);
        assert_eq!(SECURITY.session_timeout, Duration::from_secs(3_600));
    }

    #[test]
    fn test_rules_patterns_compile() {
        assert!(regex::Regex::new(rules::EMAIL.pattern).is_ok());
        assert!(regex::Regex::new(rules::FULL_NAME.pattern).is_ok());
    }

    #[test]
    fn test_auth_mode_serde_names() {
        for mode in AuthMode::ALL {
            let json = serde_json::to_string(&mode).unwrap();
            assert_eq!(json, format!("\"{}\"", mode.as_str()));
        }
    }

    #[test]
    fn test_auth_style_serde_names() {
        for style in AuthStyle::ALL {
            let json = serde_json::to_string(&style).unwrap();
            assert_eq!(json, format!("\"{}\"", style.as_str()));
        }
    }
}
