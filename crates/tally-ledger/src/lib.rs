#![deny(missing_docs)]
#![doc = "Signed double-entry ledger: debits are positive, credits negative, and every transaction sums to zero."]

mod account;
mod transaction;

pub use account::{Account, AccountType, Entry};
pub use transaction::Transaction;
