//! # Convalida (Identity Form Input Validation)
//!
//! `convalida` is the validation and feedback layer behind the auth form
//! catalog: pure, stateless checks for the identity data a signup or login
//! form collects, plus the display helpers those forms render.
//!
//! ## Validators
//!
//! - **Email:** permissive `local@domain.tld` shape check. A syntactic sanity
//!   filter, not an RFC 5321 validator; mailbox existence is the backend's
//!   problem.
//! - **Password:** five-predicate complexity score mapped to an ordered
//!   strength tier, with a combined "what is missing" feedback message for
//!   the form to display.
//! - **Full name:** allow-list character class, length bounded 2–50.
//!
//! ## Display helpers
//!
//! - **Email masking:** partial disclosure of the local part
//!   (`user@example.com` → `u**r@example.com`).
//! - **OTP normalization:** strip pasted garbage down to the 6-digit code.
//!
//! Every function is synchronous and side-effect free; two calls with the
//! same input always return the same result. Nothing here authenticates,
//! hashes, or stores anything — validated input is handed to an external
//! backend.

pub mod cli;
pub mod config;
pub mod validation;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};
