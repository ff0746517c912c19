use chrono::{DateTime, Utc};
use serde::Serialize;
use tally_core::{Currency, ErrorInfo, Money, TallyError};
use tracing::{debug, warn};

use crate::account::Entry;

/// An atomic, balanced movement of money between accounts.
///
/// A `Transaction` can only be built through [`Transaction::new`] or
/// [`Transaction::posted_at`], so every value holds at least two entries in
/// a single currency whose signed amounts sum to zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transaction {
    id: String,
    reference: String,
    posted_at: DateTime<Utc>,
    entries: Vec<Entry>,
}

impl Transaction {
    /// Validates `entries` and stamps the transaction with the current time.
    ///
    /// # Errors
    ///
    /// - [`TallyError::Ledger`] `too-few-entries` with fewer than two entries.
    /// - [`TallyError::CurrencyMismatch`] when entries mix currencies.
    /// - [`TallyError::Ledger`] `unbalanced` when the signed sum is not zero.
    pub fn new(
        id: impl Into<String>,
        reference: impl Into<String>,
        entries: Vec<Entry>,
    ) -> Result<Self, TallyError> {
        Self::posted_at(id, reference, entries, Utc::now())
    }

    /// Same as [`Transaction::new`] with an explicit posting time.
    pub fn posted_at(
        id: impl Into<String>,
        reference: impl Into<String>,
        entries: Vec<Entry>,
        posted_at: DateTime<Utc>,
    ) -> Result<Self, TallyError> {
        let id = id.into();
        if let Err(err) = check_balance(&entries) {
            warn!(transaction = %id, code = err.code(), "rejected transaction");
            return Err(err.map_info(|info| info.with_context("transaction", &id)));
        }
        debug!(transaction = %id, entries = entries.len(), "posted transaction");
        Ok(Self {
            id,
            reference: reference.into(),
            posted_at,
            entries,
        })
    }

    /// Transaction identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Free-form reference such as an invoice number.
    pub fn reference(&self) -> &str {
        &self.reference
    }

    /// Posting time.
    pub fn posted(&self) -> DateTime<Utc> {
        self.posted_at
    }

    /// Entries in the order they were supplied.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Currency shared by every entry.
    pub fn currency(&self) -> &Currency {
        self.entries[0].amount.currency()
    }

    /// Sum of the positive entries.
    pub fn debits(&self) -> Result<Money, TallyError> {
        Money::sum(
            self.entries.iter().filter(|e| e.is_debit()).map(|e| &e.amount),
            self.currency(),
        )
    }

    /// Sum of the negative entries, reported as a positive amount.
    pub fn credits(&self) -> Result<Money, TallyError> {
        Money::sum(
            self.entries
                .iter()
                .filter(|e| e.amount.is_negative())
                .map(|e| &e.amount),
            self.currency(),
        )?
        .negate()
    }
}

fn check_balance(entries: &[Entry]) -> Result<(), TallyError> {
    let [first, _, ..] = entries else {
        let info = ErrorInfo::new("too-few-entries", "transaction must have at least 2 entries")
            .with_context("entries", entries.len());
        return Err(TallyError::Ledger(info));
    };
    let currency = first.amount.currency();

    let mut balance: i128 = 0;
    for entry in entries {
        if entry.amount.currency() != currency {
            let info = ErrorInfo::new("currency-mismatch", "mixed currencies in transaction")
                .with_context("expected", currency)
                .with_context("found", entry.amount.currency())
                .with_context("account", &entry.account_id);
            return Err(TallyError::CurrencyMismatch(info));
        }
        balance += i128::from(entry.amount.amount());
    }

    if balance != 0 {
        let info = ErrorInfo::new(
            "unbalanced",
            format!("transaction does not balance: diff {balance} minor units"),
        )
        .with_context("diff", balance)
        .with_hint("debits (positive) and credits (negative) must sum to zero");
        return Err(TallyError::Ledger(info));
    }
    Ok(())
}
