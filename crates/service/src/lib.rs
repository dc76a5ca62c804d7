//! Service layer for the cheque record store.
//! - `db::cheque_service`: free functions over a SeaORM connection.
//! - `cheque`: the `ChequeRepository` seam used by the HTTP layer, with a
//!   SeaORM-backed and an in-memory implementation.

pub mod errors;
pub mod db;
pub mod cheque;
#[cfg(test)]
pub mod test_support;

pub use cheque::{ChequeRepository, InMemoryChequeRepository, NewCheque, SeaOrmChequeRepository};
