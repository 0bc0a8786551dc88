use crate::domain::{
    Account, Error, Operation,
    traits::{DeadLetterQueue, OperationStream, Transcript},
};

use futures::StreamExt;
use tracing::{debug, info};

#[derive(Debug)]
pub struct Runner<I, T, D>
where
    I: OperationStream,
    T: Transcript,
    D: DeadLetterQueue,
{
    ingestion: I,
    transcript: T,
    dlq: D,
    account: Option<Account>,
    steps: usize,
}

impl<I, T, D> Runner<I, T, D>
where
    I: OperationStream,
    T: Transcript,
    D: DeadLetterQueue,
{
    pub fn new(ingestion: I, transcript: T, dlq: D) -> Self {
        Self {
            ingestion,
            transcript,
            dlq,
            account: None,
            steps: 0,
        }
    }

    pub fn account(&self) -> Option<&Account> {
        self.account.as_ref()
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    pub fn into_parts(self) -> (T, D) {
        (self.transcript, self.dlq)
    }

    /// Replays every operation from the source. Only transcript I/O failures
    /// stop the run; everything else is recorded and skipped.
    pub async fn process(&mut self) -> Result<(), Error> {
        let mut res = self.ingestion.stream();
        self.transcript.begin()?;

        while let Some(op) = res.next().await {
            match op {
                Ok(op) => {
                    self.steps += 1;
                    self.step(self.steps, op)?;
                }
                Err(e) => self.dlq.report(&e),
            }
        }

        info!(steps = self.steps, "script finished");
        Ok(())
    }

    fn step(&mut self, step: usize, op: Operation) -> Result<(), Error> {
        debug!(step, %op, "applying operation");

        match self.apply_operation(op) {
            Ok(()) => match &self.account {
                Some(account) => self.transcript.applied(step, &op, account),
                None => Ok(()),
            },
            Err(Error::Account(e)) => {
                info!(step, %op, error = %e, "operation rejected");
                self.transcript
                    .rejected(step, &op, &e, self.account.as_ref())
            }
            Err(e) => {
                self.dlq.report(&e);
                self.transcript
                    .rejected(step, &op, &e, self.account.as_ref())
            }
        }
    }

    fn apply_operation(&mut self, op: Operation) -> Result<(), Error> {
        match op {
            Operation::Open { initial_balance } => {
                self.account = Some(Account::new(initial_balance)?);
                Ok(())
            }
            Operation::Deposit { amount } => Ok(self.current_account()?.deposit(amount)?),
            Operation::Withdraw { amount } => Ok(self.current_account()?.withdraw(amount)?),
            Operation::Balance => self.current_account().map(|_| ()),
        }
    }

    fn current_account(&mut self) -> Result<&mut Account, Error> {
        self.account
            .as_mut()
            .ok_or_else(|| Error::Script("no account is open".to_string()))
    }

    pub fn flush(&mut self) -> Result<(), Error> {
        self.transcript.finish(self.account.as_ref())
    }
}
