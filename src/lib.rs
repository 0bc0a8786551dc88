pub mod dlq;
pub mod domain;
pub mod engine;
pub mod ingestion;
pub mod transcript;

pub use domain::{Account, AccountError, AmountContext, Error, Money, Operation};
pub use engine::Runner;
