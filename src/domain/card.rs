use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::PinError;

/// Opaque card identifier presented to the machine.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card(String);

impl Card {
    pub fn new(number: impl Into<String>) -> Self {
        Self(number.into())
    }

    pub fn number(&self) -> &str {
        &self.0
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A four digit PIN, each digit 0-9.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct PinCode([u8; 4]);

impl PinCode {
    pub const fn new(digits: [u8; 4]) -> Result<Self, PinError> {
        let mut i = 0;
        while i < digits.len() {
            if digits[i] > 9 {
                return Err(PinError::InvalidDigit);
            }
            i += 1;
        }
        Ok(Self(digits))
    }
}

impl FromStr for PinCode {
    type Err = PinError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .chars()
            .map(|c| c.to_digit(10).map(|d| d as u8).ok_or(PinError::InvalidDigit))
            .collect::<Result<Vec<u8>, PinError>>()?;
        let digits: [u8; 4] = digits.try_into().map_err(|_| PinError::InvalidLength)?;
        Ok(Self(digits))
    }
}

// The digits never appear in logs or debug output.
impl fmt::Debug for PinCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("PinCode(****)")
    }
}
