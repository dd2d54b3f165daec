//! Session state and registration
//!
//! A session starts anonymous. Registration moves it to a buyer or seller
//! account in one step; there is no way back.

use tracing::{info, warn};

use crate::error::RegistrationError;
use crate::types::AccountRole;

/// A registered account. Role and name always change together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub role: AccountRole,
    pub name: String,
}

impl Account {
    /// First letter of the name, uppercased, for the profile avatar
    pub fn initial(&self) -> String {
        self.name
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }
}

/// What the registration form submits
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationRequest {
    pub role: AccountRole,
    pub name: String,
    pub passcode: Option<String>,
}

impl RegistrationRequest {
    pub fn buyer(name: impl Into<String>) -> Self {
        Self {
            role: AccountRole::Buyer,
            name: name.into(),
            passcode: None,
        }
    }

    pub fn seller(name: impl Into<String>, passcode: impl Into<String>) -> Self {
        Self {
            role: AccountRole::Seller,
            name: name.into(),
            passcode: Some(passcode.into()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    account: Option<Account>,
}

impl Session {
    /// An anonymous session (role = none, empty name)
    pub fn new() -> Self {
        Self::default()
    }

    pub fn account(&self) -> Option<&Account> {
        self.account.as_ref()
    }

    /// `None` while nobody has registered
    pub fn role(&self) -> Option<AccountRole> {
        self.account.as_ref().map(|a| a.role)
    }

    /// Display name; empty while nobody has registered
    pub fn name(&self) -> &str {
        self.account.as_ref().map(|a| a.name.as_str()).unwrap_or("")
    }

    pub fn is_registered(&self) -> bool {
        self.account.is_some()
    }

    pub fn is_seller(&self) -> bool {
        self.role() == Some(AccountRole::Seller)
    }

    pub fn is_buyer(&self) -> bool {
        self.role() == Some(AccountRole::Buyer)
    }

    /// Register the session.
    ///
    /// Sellers must present exactly `seller_passcode`. On any failure the
    /// session is left as it was.
    pub fn register(
        &mut self,
        request: RegistrationRequest,
        seller_passcode: &str,
    ) -> Result<&Account, RegistrationError> {
        if self.account.is_some() {
            warn!("Registration attempted on an already registered session");
            return Err(RegistrationError::AlreadyRegistered);
        }
        if request.name.is_empty() {
            return Err(RegistrationError::EmptyName);
        }
        if request.role == AccountRole::Seller
            && request.passcode.as_deref() != Some(seller_passcode)
        {
            warn!(name = %request.name, "Seller registration rejected: wrong passcode");
            return Err(RegistrationError::InvalidSellerCode);
        }

        info!(role = %request.role, name = %request.name, "Registered");
        Ok(&*self.account.insert(Account {
            role: request.role,
            name: request.name,
        }))
    }
}
