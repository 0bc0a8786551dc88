use rust_decimal::Decimal;

use crate::domain::{AccountError, AmountContext, Money};

pub const CURRENCY_SUFFIX: &str = "₽";

/// A single account holding a non-negative balance.
///
/// Every mutation checks its preconditions before touching the balance, so a
/// returned error always leaves the account as it was. Not synchronized: wrap
/// it in a mutex to share it between threads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Account {
    balance: Decimal,
}

impl Account {
    pub fn new(initial_balance: Decimal) -> Result<Self, AccountError> {
        if initial_balance < Decimal::ZERO {
            return Err(AccountError::InvalidAmount {
                context: AmountContext::InitialBalance,
                amount: initial_balance,
            });
        }

        Ok(Self {
            balance: initial_balance,
        })
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn deposit(&mut self, amount: Decimal) -> Result<(), AccountError> {
        if amount <= Decimal::ZERO {
            return Err(AccountError::InvalidAmount {
                context: AmountContext::Deposit,
                amount,
            });
        }

        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(AccountError::BalanceOverflow {
                balance: self.balance,
                amount,
            })?;
        Ok(())
    }

    pub fn withdraw(&mut self, amount: Decimal) -> Result<(), AccountError> {
        if amount <= Decimal::ZERO {
            return Err(AccountError::InvalidAmount {
                context: AmountContext::Withdrawal,
                amount,
            });
        }

        if amount > self.balance {
            return Err(AccountError::InsufficientFunds {
                requested: amount,
                available: self.balance,
            });
        }

        self.balance -= amount;
        Ok(())
    }
}

impl core::fmt::Display for Account {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Account balance: {} {}",
            Money(self.balance),
            CURRENCY_SUFFIX
        )
    }
}
