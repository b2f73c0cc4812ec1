//! Account use-case service.
//!
//! # Responsibility
//! - Create account records from already-validated registration input.
//! - Run the verified registration flow through an injected identity
//!   verifier.
//!
//! # Invariants
//! - `create_account` stores exactly what it is given: the caller checks
//!   username/phone uniqueness and pre-hashes the credential.
//! - Verified registration stores the canonical phone number the provider
//!   proved, not the raw user input.

use crate::identity::{normalize_phone_number, IdentityVerifier, VerifyError};
use crate::model::account::Account;
use crate::store::MemoryStore;
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Input for account creation. Optional fields default to absent, never to
/// empty strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountCreateParams {
    pub username: String,
    pub phone_number: String,
    pub password_hash: String,
    pub display_name: Option<String>,
    pub avatar_ref: Option<String>,
}

/// Input for the verified registration flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedRegisterParams {
    pub username: String,
    /// Phone number as the user typed it; normalized before verification.
    pub phone_number: String,
    /// Proof obtained from the identity provider (the one-time passcode).
    pub proof: String,
    pub password_hash: String,
    pub display_name: Option<String>,
    pub avatar_ref: Option<String>,
}

/// Errors from verified registration. Plain `create_account` stays total
/// and has no error surface.
#[derive(Debug)]
pub enum RegisterError {
    /// Identity provider rejected or could not complete verification.
    Identity(VerifyError),
}

impl Display for RegisterError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Identity(err) => write!(f, "{err}"),
        }
    }
}

impl Error for RegisterError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Identity(err) => Some(err),
        }
    }
}

impl From<VerifyError> for RegisterError {
    fn from(value: VerifyError) -> Self {
        Self::Identity(value)
    }
}

/// Account mutation entry points over a borrowed store.
pub struct AccountService;

impl AccountService {
    /// Creates one account from already-verified registration input.
    ///
    /// # Contract
    /// - Assigns the handle; every other field is stored verbatim.
    /// - Total operation: uniqueness and format checks happen upstream.
    pub fn create_account(store: &mut MemoryStore, params: AccountCreateParams) -> Account {
        let account_id = store.accounts.insert_with(|id| Account {
            id,
            username: params.username,
            phone_number: params.phone_number,
            password_hash: params.password_hash,
            display_name: params.display_name,
            avatar_ref: params.avatar_ref,
        });
        let created = store
            .account(account_id)
            .cloned()
            .expect("inserted account is immediately visible");
        info!(
            "event=account_create module=service status=ok account_id={}",
            account_id
        );
        created
    }

    /// Registers one account after proving phone ownership through the
    /// injected verifier.
    ///
    /// # Contract
    /// - The raw phone number is normalized first; unparseable input fails
    ///   with `VerifyError::InvalidPhoneNumber` before the provider is
    ///   consulted.
    /// - On success the stored phone number is the canonical one from the
    ///   provider's verified-identity assertion.
    pub fn register_verified(
        store: &mut MemoryStore,
        verifier: &dyn IdentityVerifier,
        params: VerifiedRegisterParams,
    ) -> Result<Account, RegisterError> {
        let canonical = normalize_phone_number(&params.phone_number)
            .ok_or_else(|| VerifyError::InvalidPhoneNumber(params.phone_number.clone()))?;
        let verified = verifier.verify_identity(&canonical, &params.proof)?;

        let account = Self::create_account(
            store,
            AccountCreateParams {
                username: params.username,
                phone_number: verified.phone_number,
                password_hash: params.password_hash,
                display_name: params.display_name,
                avatar_ref: params.avatar_ref,
            },
        );
        info!(
            "event=account_register_verified module=service status=ok account_id={}",
            account.id
        );
        Ok(account)
    }
}
