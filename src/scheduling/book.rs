//! The in-memory transfer book.
//!
//! [`TransferBook`] is the consumer of the fee rule: it validates requests,
//! prices them, refuses transfers without an applicable fee and keeps the
//! scheduled transfers for the history view. It lives for the duration of the
//! process and is not persisted.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::fees::{FeeOutcome, FeePreview, FeeSchedule};
use crate::models::{Transfer, TransferConfirmation, TransferRequest, TransferStatus};

use super::history::HistoryQuery;

/// Scheduled transfers plus the fee schedule used to price new ones.
///
/// # Example
///
/// ```
/// use transfer_fee_engine::scheduling::TransferBook;
/// use transfer_fee_engine::fees::FeeSchedule;
/// use transfer_fee_engine::models::{TransferRequest, TransferStatus};
/// use chrono::{NaiveDate, TimeZone, Utc};
/// use rust_decimal::Decimal;
///
/// let mut book = TransferBook::new(FeeSchedule::standard());
/// let now = Utc.with_ymd_and_hms(2026, 1, 12, 10, 0, 0).unwrap();
///
/// let request = TransferRequest {
///     origin_account: "1234567890".to_string(),
///     destination_account: "0987654321".to_string(),
///     amount: Decimal::new(500, 0),
///     transfer_date: NaiveDate::from_ymd_opt(2026, 1, 17),
/// };
///
/// let transfer = book.schedule(&request, now)?;
/// assert_eq!(transfer.fee, Decimal::new(10, 0));
/// assert_eq!(transfer.status, TransferStatus::Pending);
/// # Ok::<(), transfer_fee_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct TransferBook {
    schedule: FeeSchedule,
    transfers: Vec<Transfer>,
}

impl TransferBook {
    /// Creates an empty book that prices transfers with `schedule`.
    pub fn new(schedule: FeeSchedule) -> Self {
        Self {
            schedule,
            transfers: Vec::new(),
        }
    }

    /// Creates a book pre-filled with existing transfers.
    pub fn with_transfers(schedule: FeeSchedule, transfers: Vec<Transfer>) -> Self {
        Self {
            schedule,
            transfers,
        }
    }

    /// Returns the fee schedule used for new transfers.
    pub fn fee_schedule(&self) -> &FeeSchedule {
        &self.schedule
    }

    /// Evaluates the fee for display without scheduling anything.
    pub fn preview_fee(&self, amount: Decimal, date: NaiveDate) -> FeePreview {
        FeePreview::new(amount, date, &self.schedule)
    }

    /// Validates and prices a request, returning what the user confirms.
    ///
    /// Nothing is recorded. Fails with [`EngineError::NoApplicableFee`] when
    /// the fee rule has no fee for the amount and date.
    pub fn confirm(
        &self,
        request: &TransferRequest,
        now: DateTime<Utc>,
    ) -> EngineResult<TransferConfirmation> {
        let validated = request.validate(now.date_naive())?;

        match self
            .schedule
            .evaluate(validated.amount, validated.transfer_date)
        {
            FeeOutcome::Fee(fee) => Ok(TransferConfirmation::new(&validated, fee)),
            FeeOutcome::Unavailable => Err(EngineError::NoApplicableFee {
                amount: validated.amount,
                date: validated.transfer_date,
            }),
        }
    }

    /// Schedules a transfer.
    ///
    /// The request is validated against `now`'s date, priced with the book's
    /// schedule and recorded as [`TransferStatus::Pending`]. A request with no
    /// applicable fee is refused and the book is left unchanged.
    pub fn schedule(
        &mut self,
        request: &TransferRequest,
        now: DateTime<Utc>,
    ) -> EngineResult<&Transfer> {
        let confirmation = match self.confirm(request, now) {
            Ok(confirmation) => confirmation,
            Err(err) => {
                warn!(
                    origin_account = %request.origin_account,
                    destination_account = %request.destination_account,
                    amount = %request.amount,
                    error = %err,
                    "Transfer rejected"
                );
                return Err(err);
            }
        };

        let transfer = Transfer {
            id: Uuid::new_v4(),
            origin_account: confirmation.origin_account,
            destination_account: confirmation.destination_account,
            amount: confirmation.amount,
            fee: confirmation.fee,
            transfer_date: confirmation.transfer_date,
            scheduled_at: now,
            status: TransferStatus::Pending,
        };

        info!(
            transfer_id = %transfer.id,
            amount = %transfer.amount,
            fee = %transfer.fee,
            transfer_date = %transfer.transfer_date,
            "Transfer scheduled"
        );

        let index = self.transfers.len();
        self.transfers.push(transfer);
        Ok(&self.transfers[index])
    }

    /// Looks up a transfer by id.
    pub fn get(&self, id: Uuid) -> EngineResult<&Transfer> {
        self.transfers
            .iter()
            .find(|transfer| transfer.id == id)
            .ok_or(EngineError::TransferNotFound { id })
    }

    /// Changes the status of a transfer.
    pub fn update_status(&mut self, id: Uuid, status: TransferStatus) -> EngineResult<&Transfer> {
        let transfer = self
            .transfers
            .iter_mut()
            .find(|transfer| transfer.id == id)
            .ok_or(EngineError::TransferNotFound { id })?;

        info!(
            transfer_id = %id,
            from = %transfer.status,
            to = %status,
            "Transfer status updated"
        );
        transfer.status = status;
        Ok(&*transfer)
    }

    /// All transfers in the order they were added.
    pub fn all(&self) -> &[Transfer] {
        &self.transfers
    }

    /// Transfers where `account` is the origin or the destination.
    pub fn by_account(&self, account: &str) -> Vec<&Transfer> {
        self.transfers
            .iter()
            .filter(|transfer| transfer.involves(account))
            .collect()
    }

    /// Transfers with the given status.
    pub fn by_status(&self, status: TransferStatus) -> Vec<&Transfer> {
        self.transfers
            .iter()
            .filter(|transfer| transfer.status == status)
            .collect()
    }

    /// Runs a history query over the book.
    pub fn history(&self, query: &HistoryQuery) -> Vec<&Transfer> {
        query.apply(&self.transfers)
    }

    /// Number of transfers in the book.
    pub fn len(&self) -> usize {
        self.transfers.len()
    }

    /// Returns true if the book holds no transfers.
    pub fn is_empty(&self) -> bool {
        self.transfers.is_empty()
    }
}
