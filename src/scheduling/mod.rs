//! Transfer scheduling and history for the Transfer Fee Engine.
//!
//! This module holds the consumers of the fee rule: the [`TransferBook`] that
//! validates, prices and records transfers, and the [`HistoryQuery`] used to
//! search, filter and sort them.

mod book;
mod history;

pub use book::TransferBook;
pub use history::{HistoryQuery, SortConfig, SortDirection, SortKey, StatusFilter};
