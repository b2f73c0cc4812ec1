use crewboard_core::{
    AccountService, IdentityVerifier, MemoryStore, RegisterError, VerificationChallenge,
    VerifiedIdentity, VerifiedRegisterParams, VerifyError, VerifyResult,
};
use uuid::Uuid;

/// Test double standing in for a third-party passcode provider: one fixed
/// passcode is accepted for every phone number.
struct FixedCodeVerifier {
    accepted_proof: String,
}

impl FixedCodeVerifier {
    fn new(accepted_proof: &str) -> Self {
        Self {
            accepted_proof: accepted_proof.to_string(),
        }
    }
}

impl IdentityVerifier for FixedCodeVerifier {
    fn begin_verification(&self, phone_number: &str) -> VerifyResult<VerificationChallenge> {
        Ok(VerificationChallenge {
            challenge_id: Uuid::new_v4(),
            phone_number: phone_number.to_string(),
        })
    }

    fn verify_identity(&self, phone_number: &str, proof: &str) -> VerifyResult<VerifiedIdentity> {
        if proof == self.accepted_proof {
            Ok(VerifiedIdentity {
                phone_number: phone_number.to_string(),
            })
        } else {
            Err(VerifyError::ProofRejected)
        }
    }
}

/// Provider that always fails, for the unavailable path.
struct DownVerifier;

impl IdentityVerifier for DownVerifier {
    fn begin_verification(&self, _phone_number: &str) -> VerifyResult<VerificationChallenge> {
        Err(VerifyError::ProviderUnavailable("maintenance".to_string()))
    }

    fn verify_identity(&self, _phone_number: &str, _proof: &str) -> VerifyResult<VerifiedIdentity> {
        Err(VerifyError::ProviderUnavailable("maintenance".to_string()))
    }
}

fn register_params(phone: &str, proof: &str) -> VerifiedRegisterParams {
    VerifiedRegisterParams {
        username: "alice".to_string(),
        phone_number: phone.to_string(),
        proof: proof.to_string(),
        password_hash: "hash".to_string(),
        display_name: None,
        avatar_ref: None,
    }
}

#[test]
fn register_verified_stores_canonical_phone_number() {
    let mut store = MemoryStore::new();
    let verifier = FixedCodeVerifier::new("123456");

    let account = AccountService::register_verified(
        &mut store,
        &verifier,
        register_params("+1 (555) 000-0001", "123456"),
    )
    .expect("registration succeeds");

    assert_eq!(account.phone_number, "+15550000001");
    assert_eq!(store.account(account.id).map(|a| a.username.as_str()), Some("alice"));
}

#[test]
fn register_verified_rejects_unnormalizable_phone_before_provider_call() {
    let mut store = MemoryStore::new();
    // DownVerifier would fail any provider call; the error we get must be
    // the normalization one, proving the provider was never consulted.
    let err = AccountService::register_verified(
        &mut store,
        &DownVerifier,
        register_params("not-a-phone", "123456"),
    )
    .expect_err("registration fails");

    assert!(matches!(
        err,
        RegisterError::Identity(VerifyError::InvalidPhoneNumber(_))
    ));
    assert!(store.accounts().next().is_none());
}

#[test]
fn register_verified_surfaces_rejected_proof() {
    let mut store = MemoryStore::new();
    let verifier = FixedCodeVerifier::new("123456");

    let err = AccountService::register_verified(
        &mut store,
        &verifier,
        register_params("+15550001", "999999"),
    )
    .expect_err("wrong passcode fails");

    assert!(matches!(
        err,
        RegisterError::Identity(VerifyError::ProofRejected)
    ));
    assert!(store.accounts().next().is_none());
}

#[test]
fn register_verified_surfaces_provider_unavailability() {
    let mut store = MemoryStore::new();
    let err = AccountService::register_verified(
        &mut store,
        &DownVerifier,
        register_params("+15550001", "123456"),
    )
    .expect_err("down provider fails");

    assert!(matches!(
        err,
        RegisterError::Identity(VerifyError::ProviderUnavailable(_))
    ));
}

#[test]
fn begin_verification_issues_a_challenge_for_the_phone() {
    let verifier = FixedCodeVerifier::new("123456");
    let challenge = verifier
        .begin_verification("+15550001")
        .expect("challenge issued");
    assert_eq!(challenge.phone_number, "+15550001");
    assert!(!challenge.challenge_id.is_nil());
}
