//! Cheque records: the input type, the repository seam and its backends.

pub mod domain;
pub mod memory;
pub mod repository;

pub use domain::NewCheque;
pub use memory::InMemoryChequeRepository;
pub use repository::{ChequeRepository, SeaOrmChequeRepository};
