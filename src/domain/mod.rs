pub mod account;
pub mod error;
pub mod money;
pub mod operation;
pub mod traits;

pub use account::Account;
pub use error::{AccountError, AmountContext, Error};
pub use money::Money;
pub use operation::Operation;
pub use traits::{DeadLetterQueue, OperationStream, Transcript};
