//! Transfer Fee Engine
//!
//! This crate prices and schedules account-to-account transfers. The fee rule
//! in [`fees`] is a pure function of amount and date; [`scheduling`] builds
//! the transfer book and history views on top of it.

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod fees;
pub mod models;
pub mod scheduling;
