use futures::Stream;

use crate::domain::{Account, Error, Operation};

pub trait OperationStream {
    type OpStream: Stream<Item = Result<Operation, Error>> + Send + Unpin + 'static;
    fn stream(&mut self) -> Self::OpStream;
}

pub trait DeadLetterQueue {
    fn report(&mut self, error: &Error);
}

/// Where the runner records what happened at each step.
pub trait Transcript {
    fn begin(&mut self) -> Result<(), Error>;

    fn applied(
        &mut self,
        step: usize,
        operation: &Operation,
        account: &Account,
    ) -> Result<(), Error>;

    fn rejected(
        &mut self,
        step: usize,
        operation: &Operation,
        reason: &dyn core::fmt::Display,
        account: Option<&Account>,
    ) -> Result<(), Error>;

    fn finish(&mut self, account: Option<&Account>) -> Result<(), Error>;
}

