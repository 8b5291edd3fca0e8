//! One-time-code input normalization.

use crate::config::OTP_LENGTH;

/// Normalize pasted or typed verification-code input: keep only ASCII digits
/// and truncate to the first [`OTP_LENGTH`].
///
/// Total and idempotent; the result is always 0–6 digits.
#[must_use]
pub fn format_otp(value: &str) -> String {
    value
        .chars()
        .filter(char::is_ascii_digit)
        .take(OTP_LENGTH)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_non_digits_and_truncates() {
        assert_eq!(format_otp("1a2b3c4d5e6f"), "123456");
        assert_eq!(format_otp("123-456-789"), "123456");
        assert_eq!(format_otp("  98 76 "), "9876");
    }

    #[test]
    fn short_input_passes_through() {
        assert_eq!(format_otp("12"), "12");
        assert_eq!(format_otp(""), "");
        assert_eq!(format_otp("no digits here"), "");
    }

    #[test]
    fn idempotent() {
        for input in ["1a2b3c4d5e6f", "12", "", "000000", "⁴²17"] {
            let once = format_otp(input);
            assert_eq!(format_otp(&once), once);
        }
    }

    #[test]
    fn rejects_non_ascii_digits() {
        // Unicode digits are not part of a pasted OTP; only ASCII survives.
        assert_eq!(format_otp("١٢٣456"), "456");
    }
}
