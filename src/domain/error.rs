use core::fmt;

use rust_decimal::Decimal;

/// What an amount was supplied for when it got rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountContext {
    InitialBalance,
    Deposit,
    Withdrawal,
}

impl fmt::Display for AmountContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AmountContext::InitialBalance => write!(f, "initial balance cannot be negative"),
            AmountContext::Deposit => write!(f, "deposit amount must be positive"),
            AmountContext::Withdrawal => write!(f, "withdrawal amount must be positive"),
        }
    }
}

/// Failures of the account itself. State is never modified when one is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AccountError {
    #[error("invalid amount {amount}: {context}")]
    InvalidAmount {
        context: AmountContext,
        amount: Decimal,
    },

    #[error("insufficient funds: tried to withdraw {requested}, only {available} available")]
    InsufficientFunds {
        requested: Decimal,
        available: Decimal,
    },

    #[error("balance overflow: cannot add {amount} to {balance}")]
    BalanceOverflow { balance: Decimal, amount: Decimal },
}

impl AccountError {
    pub fn is_invalid_amount(&self) -> bool {
        matches!(self, AccountError::InvalidAmount { .. })
    }

    pub fn is_insufficient_funds(&self) -> bool {
        matches!(self, AccountError::InsufficientFunds { .. })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Ingestion failed with: {0}")]
    Ingestion(String),

    #[error("Script failed with: {0}")]
    Script(String),

    #[error(transparent)]
    Account(#[from] AccountError),
}
