//! Transfer history queries.
//!
//! A [`HistoryQuery`] combines a free-text search, a status filter and an
//! optional sort, the three controls of the transfer history view.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::models::{Transfer, TransferStatus};

/// Which statuses to include.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusFilter {
    /// Every status.
    #[default]
    All,
    /// Only transfers with this status.
    Only(TransferStatus),
}

impl StatusFilter {
    /// Returns true if the status passes the filter.
    pub fn matches(self, status: TransferStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => wanted == status,
        }
    }
}

/// Column to sort the history by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Transfer id.
    Id,
    /// Origin account number.
    OriginAccount,
    /// Destination account number.
    DestinationAccount,
    /// Transferred amount.
    Amount,
    /// Fee charged.
    Fee,
    /// Execution date.
    TransferDate,
    /// Scheduling timestamp.
    ScheduledAt,
    /// Status name.
    Status,
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    /// Smallest first.
    Ascending,
    /// Largest first.
    Descending,
}

/// A sort column plus direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortConfig {
    /// The column to sort by.
    pub key: SortKey,
    /// The direction to sort in.
    pub direction: SortDirection,
}

impl SortConfig {
    fn compare(&self, a: &Transfer, b: &Transfer) -> Ordering {
        let ordering = match self.key {
            SortKey::Id => a.id.cmp(&b.id),
            SortKey::OriginAccount => a.origin_account.cmp(&b.origin_account),
            SortKey::DestinationAccount => a.destination_account.cmp(&b.destination_account),
            SortKey::Amount => a.amount.cmp(&b.amount),
            SortKey::Fee => a.fee.cmp(&b.fee),
            SortKey::TransferDate => a.transfer_date.cmp(&b.transfer_date),
            SortKey::ScheduledAt => a.scheduled_at.cmp(&b.scheduled_at),
            SortKey::Status => a.status.as_str().cmp(b.status.as_str()),
        };

        match self.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

/// Search, filter and sort settings for the transfer history.
///
/// # Example
///
/// ```
/// use transfer_fee_engine::scheduling::{HistoryQuery, SortDirection, SortKey, StatusFilter};
/// use transfer_fee_engine::models::TransferStatus;
///
/// let mut query = HistoryQuery::default()
///     .with_search("1234")
///     .with_status(StatusFilter::Only(TransferStatus::Pending));
///
/// query.request_sort(SortKey::Amount);
/// assert_eq!(query.sort.unwrap().direction, SortDirection::Ascending);
/// query.request_sort(SortKey::Amount);
/// assert_eq!(query.sort.unwrap().direction, SortDirection::Descending);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryQuery {
    /// Substring matched against origin, destination and amount.
    #[serde(default)]
    pub search: String,
    /// Status filter.
    #[serde(default)]
    pub status: StatusFilter,
    /// Sort order, `None` keeps the book order.
    #[serde(default)]
    pub sort: Option<SortConfig>,
}

impl HistoryQuery {
    /// Sets the search term.
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Sets the status filter.
    pub fn with_status(mut self, status: StatusFilter) -> Self {
        self.status = status;
        self
    }

    /// Sets the sort order.
    pub fn with_sort(mut self, key: SortKey, direction: SortDirection) -> Self {
        self.sort = Some(SortConfig { key, direction });
        self
    }

    /// Toggles sorting on a column.
    ///
    /// Requesting the column that is currently sorted ascending flips it to
    /// descending; any other request sorts ascending on the given column.
    pub fn request_sort(&mut self, key: SortKey) {
        let direction = match self.sort {
            Some(current) if current.key == key && current.direction == SortDirection::Ascending => {
                SortDirection::Descending
            }
            _ => SortDirection::Ascending,
        };
        self.sort = Some(SortConfig { key, direction });
    }

    /// Returns true if the transfer passes the search and status filter.
    pub fn matches(&self, transfer: &Transfer) -> bool {
        let matches_search = self.search.is_empty()
            || transfer.origin_account.as_str().contains(&self.search)
            || transfer.destination_account.as_str().contains(&self.search)
            || transfer.amount.normalize().to_string().contains(&self.search);

        matches_search && self.status.matches(transfer.status)
    }

    /// Filters and sorts transfers. The sort is stable.
    pub fn apply<'a, I>(&self, transfers: I) -> Vec<&'a Transfer>
    where
        I: IntoIterator<Item = &'a Transfer>,
    {
        let mut selected: Vec<&Transfer> = transfers
            .into_iter()
            .filter(|transfer| self.matches(transfer))
            .collect();

        if let Some(sort) = self.sort {
            selected.sort_by(|a, b| sort.compare(a, b));
        }

        selected
    }
}
