//! Identity verification capability.
//!
//! # Responsibility
//! - Define the provider-agnostic contract for phone one-time-passcode
//!   verification.
//! - Normalize phone numbers into the canonical digits-plus-prefix form
//!   providers expect.
//!
//! # Invariants
//! - The core never embeds provider-specific logic; concrete verifiers are
//!   injected by the composition root.
//! - Verification yields the canonical phone number that was proven, which
//!   is the value registration stores.

use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

// Separators users commonly type: spaces, dots, dashes, parentheses.
static PHONE_SEPARATOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\s().\-]+").expect("valid separator regex"));
static PHONE_CANONICAL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+[0-9]{4,15}$").expect("valid phone regex"));

/// Result type used by identity verification operations.
pub type VerifyResult<T> = Result<T, VerifyError>;

/// Errors from identity verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerifyError {
    /// Phone number cannot be normalized to canonical form.
    InvalidPhoneNumber(String),
    /// No pending challenge matches the phone number.
    ChallengeNotFound(String),
    /// Submitted proof does not satisfy the pending challenge.
    ProofRejected,
    /// Provider backend failure, message is provider-defined.
    ProviderUnavailable(String),
}

impl Display for VerifyError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPhoneNumber(value) => write!(f, "invalid phone number: `{value}`"),
            Self::ChallengeNotFound(phone) => {
                write!(f, "no pending verification challenge for {phone}")
            }
            Self::ProofRejected => write!(f, "verification proof rejected"),
            Self::ProviderUnavailable(message) => {
                write!(f, "identity provider unavailable: {message}")
            }
        }
    }
}

impl Error for VerifyError {}

/// Pending verification issued by a provider after a passcode was sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationChallenge {
    /// Provider-facing token for this verification attempt.
    pub challenge_id: Uuid,
    /// Canonical phone number the passcode was sent to.
    pub phone_number: String,
}

/// Successful verification outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedIdentity {
    /// Canonical phone number that was proven.
    pub phone_number: String,
}

/// Capability contract for phone-based identity verification.
///
/// Implementations wrap a third-party identity provider. The two-step shape
/// mirrors the provider exchange: request a passcode, then redeem it.
pub trait IdentityVerifier {
    /// Starts verification for one phone number, causing the provider to
    /// send a passcode out of band.
    fn begin_verification(&self, phone_number: &str) -> VerifyResult<VerificationChallenge>;

    /// Redeems a proof (the passcode the user received) for a verified
    /// identity assertion.
    fn verify_identity(&self, phone_number: &str, proof: &str) -> VerifyResult<VerifiedIdentity>;
}

/// Normalizes a phone number to canonical `+` followed by digits.
///
/// Strips common separators and accepts an optional leading `+`. Returns
/// `None` when the remainder is not 4 to 15 digits. This is transport
/// normalization only; ownership of input-format validation rules stays
/// with the calling layer.
pub fn normalize_phone_number(value: &str) -> Option<String> {
    let stripped = PHONE_SEPARATOR_RE.replace_all(value.trim(), "");
    let candidate = match stripped.strip_prefix('+') {
        Some(rest) => format!("+{rest}"),
        None => format!("+{stripped}"),
    };
    if PHONE_CANONICAL_RE.is_match(&candidate) {
        Some(candidate)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::normalize_phone_number;

    #[test]
    fn normalize_strips_separators_and_adds_prefix() {
        assert_eq!(
            normalize_phone_number(" +1 (555) 000-0001 ").as_deref(),
            Some("+15550000001")
        );
        assert_eq!(
            normalize_phone_number("15550001").as_deref(),
            Some("+15550001")
        );
        assert_eq!(
            normalize_phone_number("44.20.7946.0958").as_deref(),
            Some("+442079460958")
        );
    }

    #[test]
    fn normalize_rejects_letters_and_bad_lengths() {
        assert!(normalize_phone_number("call-me").is_none());
        assert!(normalize_phone_number("123").is_none());
        assert!(normalize_phone_number("+1234567890123456").is_none());
        assert!(normalize_phone_number("").is_none());
    }
}
