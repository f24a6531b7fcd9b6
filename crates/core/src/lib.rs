//! Tally core domain logic.
//!
//! Pure, database-free building blocks of the rate & price resolution
//! engine: the scope type, temporal validity, specificity ranking, the
//! resolver itself, and quote arithmetic. Everything here is a function of
//! its arguments — persistence and HTTP live in `tally-db` / `tally-api`.

pub mod error;
pub mod quote;
pub mod resolve;
pub mod roles;
pub mod scope;
pub mod types;
