use rust_decimal::Decimal;

/// One step of a script run against the current account. Amounts display
/// exactly as given, unrounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Open { initial_balance: Decimal },
    Deposit { amount: Decimal },
    Withdraw { amount: Decimal },
    Balance,
}

impl core::fmt::Display for Operation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Operation::Open { initial_balance } => write!(f, "open {}", initial_balance),
            Operation::Deposit { amount } => write!(f, "deposit {}", amount),
            Operation::Withdraw { amount } => write!(f, "withdraw {}", amount),
            Operation::Balance => write!(f, "balance"),
        }
    }
}
