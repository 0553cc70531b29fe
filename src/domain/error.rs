use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::Currency;

/// Why the bank refused to authorize a pin/card pair.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuthorizationError {
    #[error("card is not known to the bank")]
    UnknownCard,
    #[error("pin does not match the card")]
    InvalidPin,
    #[error("card is blocked")]
    CardBlocked,
}

/// Why the bank refused to charge an account.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountError {
    #[error("insufficient funds on account")]
    InsufficientFunds,
    #[error("no account is linked to the card")]
    UnknownAccount,
    #[error("account is held in a different currency")]
    CurrencyMismatch,
}

/// Machine-level failure category carried by every [`AtmError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    WrongCurrency,
    WrongAmount,
    Authorization,
    NoFundsOnAccount,
    InsufficientDeposit,
}

impl Display for ErrorCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let code = match self {
            ErrorCode::WrongCurrency => "WRONG_CURRENCY",
            ErrorCode::WrongAmount => "WRONG_AMOUNT",
            ErrorCode::Authorization => "AUTHORIZATION",
            ErrorCode::NoFundsOnAccount => "NO_FUNDS_ON_ACCOUNT",
            ErrorCode::InsufficientDeposit => "INSUFFICIENT_DEPOSIT",
        };
        f.write_str(code)
    }
}

/// Any failure a `withdraw` call can surface to the caller.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AtmError {
    #[error("requested {requested} but the machine is stocked with {machine}")]
    WrongCurrency {
        requested: Currency,
        machine: Currency,
    },
    #[error("amount cannot be dispensed by this machine")]
    WrongAmount,
    #[error("authorization failed: {0}")]
    Authorization(#[from] AuthorizationError),
    #[error("charge rejected: {0}")]
    NoFundsOnAccount(#[from] AccountError),
    #[error("not enough banknotes to dispense the requested amount")]
    InsufficientDeposit,
}

impl AtmError {
    pub const fn code(&self) -> ErrorCode {
        match self {
            AtmError::WrongCurrency { .. } => ErrorCode::WrongCurrency,
            AtmError::WrongAmount => ErrorCode::WrongAmount,
            AtmError::Authorization(_) => ErrorCode::Authorization,
            AtmError::NoFundsOnAccount(_) => ErrorCode::NoFundsOnAccount,
            AtmError::InsufficientDeposit => ErrorCode::InsufficientDeposit,
        }
    }
}

/// Operation log failures. The machine never surfaces these to the caller;
/// a withdrawal that dispensed cash has succeeded even if recording it did
/// not.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogError {
    #[error("operation log write failed: {0}")]
    Append(String),
    #[error("operation log read failed: {0}")]
    Replay(String),
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinError {
    #[error("pin must be exactly four digits")]
    InvalidLength,
    #[error("pin may only contain digits 0-9")]
    InvalidDigit,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown currency code: {0}")]
pub struct UnknownCurrency(pub String);
