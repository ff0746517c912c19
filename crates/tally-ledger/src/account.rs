use serde::{Deserialize, Serialize};
use tally_core::Money;

/// Accounting classification of an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountType {
    /// Cash, receivables.
    Asset,
    /// Deposits, deferred revenue, tax payable.
    Liability,
    /// Retained earnings.
    Equity,
    /// Sales.
    Revenue,
    /// Cost of goods, FX losses.
    Expense,
}

impl AccountType {
    /// Returns whether a debit (positive entry) increases the balance of
    /// this kind of account.
    pub fn is_debit_normal(self) -> bool {
        matches!(self, AccountType::Asset | AccountType::Expense)
    }
}

/// A named account in the chart of accounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Stable identifier referenced by entries, e.g. `ACCT:1001`.
    pub id: String,
    /// Classification.
    pub kind: AccountType,
    /// Display name.
    pub name: String,
}

impl Account {
    /// Creates an account.
    pub fn new(id: impl Into<String>, kind: AccountType, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind,
            name: name.into(),
        }
    }

    /// Builds an entry against this account.
    pub fn entry(&self, amount: Money) -> Entry {
        Entry::new(self.id.clone(), amount)
    }
}

/// One line of a transaction. Positive amounts are debits, negative credits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Account the entry posts to.
    pub account_id: String,
    /// Signed amount.
    pub amount: Money,
}

impl Entry {
    /// Creates an entry.
    pub fn new(account_id: impl Into<String>, amount: Money) -> Self {
        Self {
            account_id: account_id.into(),
            amount,
        }
    }

    /// Returns whether the entry is a debit.
    pub fn is_debit(&self) -> bool {
        self.amount.amount() > 0
    }
}
