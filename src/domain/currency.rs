use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::UnknownCurrency;

/// Currencies the machine can be stocked with, identified by ISO 4217 code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Pln,
    Usd,
    Eur,
}

impl Currency {
    pub const fn code(&self) -> &'static str {
        match self {
            Currency::Pln => "PLN",
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
        }
    }
}

impl Display for Currency {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = UnknownCurrency;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("PLN") {
            Ok(Currency::Pln)
        } else if s.eq_ignore_ascii_case("USD") {
            Ok(Currency::Usd)
        } else if s.eq_ignore_ascii_case("EUR") {
            Ok(Currency::Eur)
        } else {
            Err(UnknownCurrency(s.to_string()))
        }
    }
}
