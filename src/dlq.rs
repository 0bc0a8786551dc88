use crate::domain::{DeadLetterQueue, Error};

/// Prints rejected script rows to stderr.
#[derive(Default, Debug)]
pub struct StdErrDLQ {
    reported: usize,
}

impl StdErrDLQ {
    pub fn reported(&self) -> usize {
        self.reported
    }
}

impl DeadLetterQueue for StdErrDLQ {
    fn report(&mut self, error: &Error) {
        self.reported += 1;
        tracing::debug!(%error, count = self.reported, "script row dead-lettered");
        eprintln!("DLQ Report - Error: {}", error);
    }
}
