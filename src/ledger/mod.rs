//! Party balances and the per-party account book.

pub mod balance;
pub mod party_book;

pub use balance::Balance;
pub use party_book::{PartyAccount, PartyBook};
