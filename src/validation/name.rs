//! Full-name allow-list validation.

use regex::Regex;

use crate::config::rules;

/// Check a full name against the allow-list character class (letters,
/// whitespace, hyphens, apostrophes), length bounded 2–50.
///
/// Input is matched as-is: no trimming happens before the length check, so a
/// name of fifty spaces passes. Forms that want trimmed input trim before
/// calling.
#[must_use]
pub fn validate_full_name(name: &str) -> bool {
    Regex::new(rules::FULL_NAME.pattern).is_ok_and(|regex| regex.is_match(name))
}
