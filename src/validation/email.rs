//! Email shape checks and privacy-preserving display masking.

use anyhow::{bail, Result};
use regex::Regex;

use crate::config::rules;

/// Permissive `local@domain.tld` shape check.
///
/// A sanity filter for form input, not an RFC 5321 validator: it accepts many
/// strings a mail server would reject and only screens out obvious
/// non-emails. No DNS or mailbox lookup, no normalization of case or
/// whitespace.
#[must_use]
pub fn validate_email(email: &str) -> bool {
    Regex::new(rules::EMAIL.pattern).is_ok_and(|regex| regex.is_match(email))
}

/// Mask the local part of an address for partial disclosure:
/// `user@example.com` becomes `u**r@example.com`.
///
/// Keeps the first and last characters of the local part with asterisks for
/// everything between. Local parts of one character keep that character
/// duplicated on both ends with nothing between; the domain is never masked.
///
/// # Errors
///
/// Returns an error if the input contains no `@`.
pub fn mask_email(email: &str) -> Result<String> {
    let Some((local, domain)) = email.split_once('@') else {
        bail!("cannot mask {email:?}: missing @");
    };

    let mut masked = String::with_capacity(email.len());
    if let Some(first) = local.chars().next() {
        masked.push(first);
    }
    for _ in 0..local.chars().count().saturating_sub(2) {
        masked.push('*');
    }
    if let Some(last) = local.chars().next_back() {
        masked.push(last);
    }
    masked.push('@');
    masked.push_str(domain);

    Ok(masked)
}
