use std::io::Read;
use std::pin::Pin;

use futures::stream::{self, Stream};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::domain::traits::OperationStream;
use crate::domain::{Error, Money, Operation};

type OpStream = Pin<Box<dyn Stream<Item = Result<Operation, Error>> + Send>>;

pub struct CsvScript<R: Read> {
    reader: Option<csv::Reader<R>>,
}

impl<R: Read> CsvScript<R> {
    pub const OP_COLUMN: &'static str = "op";

    /// Reads the header row up front; a script without an `op` column is
    /// rejected here rather than dead-lettering every row.
    pub fn new(reader: R) -> Result<Self, Error> {
        let mut rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);

        let headers = rdr
            .headers()
            .map_err(|e| Error::Ingestion(format!("CSV header error: {}", e)))?;

        if !headers.iter().any(|h| h == Self::OP_COLUMN) {
            return Err(Error::Ingestion(format!(
                "script header is missing the `{}` column, found: {:?}",
                Self::OP_COLUMN,
                headers.iter().collect::<Vec<_>>()
            )));
        }

        Ok(Self { reader: Some(rdr) })
    }
}

/// Internal shape used only for CSV deserialization.
#[derive(Debug, Deserialize)]
struct CsvRow {
    op: String,
    amount: Option<Money>,
}

impl TryFrom<CsvRow> for Operation {
    type Error = Error;

    fn try_from(row: CsvRow) -> Result<Self, Self::Error> {
        let amount = row.amount.map(|m| m.amount());
        let op = match (row.op.trim().to_ascii_lowercase().as_str(), amount) {
            ("open", initial_balance) => Operation::Open {
                initial_balance: initial_balance.unwrap_or(Decimal::ZERO),
            },
            ("deposit", Some(amount)) => Operation::Deposit { amount },
            ("withdraw" | "withdrawal", Some(amount)) => Operation::Withdraw { amount },
            ("balance", None) => Operation::Balance,
            (kind @ ("deposit" | "withdraw" | "withdrawal"), None) => {
                return Err(Error::Ingestion(format!("{} requires an amount", kind)));
            }
            ("balance", Some(amount)) => {
                return Err(Error::Ingestion(format!(
                    "balance takes no amount, got {}",
                    amount
                )));
            }
            (other, _) => {
                return Err(Error::Ingestion(format!(
                    "Invalid operation type: {}",
                    other
                )));
            }
        };

        Ok(op)
    }
}

impl<R: Read + Send + 'static> OperationStream for CsvScript<R> {
    type OpStream = OpStream;

    fn stream(&mut self) -> Self::OpStream {
        let reader = match self.reader.take() {
            Some(r) => r,
            None => {
                tracing::debug!("csv script already consumed");
                return Box::pin(stream::iter(Vec::<Result<Operation, Error>>::new()));
            }
        };

        let iter = reader
            .into_deserialize::<CsvRow>()
            .map(|row_res| match row_res {
                Ok(row) => Operation::try_from(row),
                Err(e) => Err(Error::Ingestion(format!(
                    "CSV deserialization error: {}",
                    e
                ))),
            });

        Box::pin(stream::iter(iter))
    }
}

/// A fixed, in-memory list of operations.
#[derive(Debug, Default)]
pub struct ScriptedOperations {
    operations: Option<Vec<Operation>>,
}

impl ScriptedOperations {
    pub fn new(operations: Vec<Operation>) -> Self {
        Self {
            operations: Some(operations),
        }
    }

    /// The stock walkthrough: a few good operations, every failure kind, then
    /// a few more good operations on the surviving account.
    pub fn demonstration() -> Self {
        let amount = |v: i64| Decimal::from(v);
        Self::new(vec![
            Operation::Open {
                initial_balance: amount(1000),
            },
            Operation::Deposit {
                amount: amount(500),
            },
            Operation::Withdraw {
                amount: amount(300),
            },
            Operation::Withdraw {
                amount: amount(2000),
            },
            Operation::Deposit {
                amount: amount(-100),
            },
            Operation::Withdraw { amount: amount(0) },
            Operation::Open {
                initial_balance: amount(-500),
            },
            Operation::Withdraw {
                amount: amount(200),
            },
            Operation::Deposit {
                amount: amount(1000),
            },
            Operation::Withdraw {
                amount: amount(500),
            },
        ])
    }
}

impl OperationStream for ScriptedOperations {
    type OpStream = OpStream;

    fn stream(&mut self) -> Self::OpStream {
        let operations = self.operations.take().unwrap_or_default();
        Box::pin(stream::iter(operations.into_iter().map(Ok)))
    }
}
