//! Core data models for the Transfer Fee Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod account;
mod audit;
mod confirmation;
mod currency;
mod request;
mod transfer;

pub use account::{ACCOUNT_NUMBER_LENGTH, AccountNumber};
pub use audit::AuditStep;
pub use confirmation::TransferConfirmation;
pub use currency::format_usd;
pub use request::{TransferRequest, ValidatedTransfer};
pub use transfer::{Transfer, TransferStatus};
