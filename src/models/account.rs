//! Account number model.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of digits in an account number.
pub const ACCOUNT_NUMBER_LENGTH: usize = 10;

/// A 10-digit account number.
///
/// Only the format is checked; whether the account exists is up to the
/// system that executes the transfer.
///
/// # Example
///
/// ```
/// use transfer_fee_engine::models::AccountNumber;
///
/// let account = AccountNumber::parse("1234567890").unwrap();
/// assert_eq!(account.as_str(), "1234567890");
///
/// assert!(AccountNumber::parse("12345").is_none());
/// assert!(AccountNumber::parse("12345abcde").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AccountNumber(String);

impl AccountNumber {
    /// Parses an account number, returning `None` unless the value is exactly
    /// 10 ASCII digits.
    pub fn parse(value: &str) -> Option<Self> {
        Self::is_valid(value).then(|| Self(value.to_string()))
    }

    /// Returns true if the value is exactly 10 ASCII digits.
    pub fn is_valid(value: &str) -> bool {
        value.len() == ACCOUNT_NUMBER_LENGTH && value.bytes().all(|b| b.is_ascii_digit())
    }

    /// Returns the account number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for AccountNumber {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if Self::is_valid(&value) {
            Ok(Self(value))
        } else {
            Err(format!("account number must be exactly 10 digits, got '{}'", value))
        }
    }
}

impl From<AccountNumber> for String {
    fn from(account: AccountNumber) -> Self {
        account.0
    }
}

impl fmt::Display for AccountNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for AccountNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
