use std::io::Write;

use crate::domain::{Account, Error, Operation, Transcript};

/// Human-readable transcript written to any `io::Write`, normally stdout.
#[derive(Debug)]
pub struct ConsoleTranscript<W: Write> {
    out: W,
}

impl<W: Write> ConsoleTranscript<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Transcript for ConsoleTranscript<W> {
    fn begin(&mut self) -> Result<(), Error> {
        writeln!(self.out, "=== Bank account demonstration ===")?;
        writeln!(self.out)?;
        Ok(())
    }

    fn applied(
        &mut self,
        step: usize,
        operation: &Operation,
        account: &Account,
    ) -> Result<(), Error> {
        writeln!(self.out, "{}. {}", step, operation)?;
        writeln!(self.out, "{}", account)?;
        writeln!(self.out)?;
        Ok(())
    }

    fn rejected(
        &mut self,
        step: usize,
        operation: &Operation,
        reason: &dyn core::fmt::Display,
        account: Option<&Account>,
    ) -> Result<(), Error> {
        writeln!(self.out, "{}. {}", step, operation)?;
        writeln!(self.out, "Error: {}", reason)?;
        if let Some(account) = account {
            writeln!(self.out, "{}", account)?;
        }
        writeln!(self.out)?;
        Ok(())
    }

    fn finish(&mut self, account: Option<&Account>) -> Result<(), Error> {
        writeln!(self.out, "=== Final result ===")?;
        match account {
            Some(account) => writeln!(self.out, "{}", account)?,
            None => writeln!(self.out, "No account is open")?,
        }
        self.out.flush()?;
        Ok(())
    }
}
