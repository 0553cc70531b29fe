use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::domain::Currency;

/// A physical banknote denomination tagged with its currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Banknote {
    Pln10,
    Pln20,
    Pln50,
    Pln100,
    Pln200,
    Pln500,
    Usd1,
    Usd5,
    Usd10,
    Usd20,
    Usd50,
    Usd100,
    Eur5,
    Eur10,
    Eur20,
    Eur50,
    Eur100,
    Eur200,
    Eur500,
}

impl Banknote {
    /// Face value in whole currency units. Always positive.
    pub const fn denomination(&self) -> i64 {
        match self {
            Banknote::Pln10 => 10,
            Banknote::Pln20 => 20,
            Banknote::Pln50 => 50,
            Banknote::Pln100 => 100,
            Banknote::Pln200 => 200,
            Banknote::Pln500 => 500,
            Banknote::Usd1 => 1,
            Banknote::Usd5 => 5,
            Banknote::Usd10 => 10,
            Banknote::Usd20 => 20,
            Banknote::Usd50 => 50,
            Banknote::Usd100 => 100,
            Banknote::Eur5 => 5,
            Banknote::Eur10 => 10,
            Banknote::Eur20 => 20,
            Banknote::Eur50 => 50,
            Banknote::Eur100 => 100,
            Banknote::Eur200 => 200,
            Banknote::Eur500 => 500,
        }
    }

    pub const fn currency(&self) -> Currency {
        match self {
            Banknote::Pln10
            | Banknote::Pln20
            | Banknote::Pln50
            | Banknote::Pln100
            | Banknote::Pln200
            | Banknote::Pln500 => Currency::Pln,
            Banknote::Usd1
            | Banknote::Usd5
            | Banknote::Usd10
            | Banknote::Usd20
            | Banknote::Usd50
            | Banknote::Usd100 => Currency::Usd,
            Banknote::Eur5
            | Banknote::Eur10
            | Banknote::Eur20
            | Banknote::Eur50
            | Banknote::Eur100
            | Banknote::Eur200
            | Banknote::Eur500 => Currency::Eur,
        }
    }

    /// Denominations of one currency, largest face value first.
    pub const fn for_currency(currency: Currency) -> &'static [Banknote] {
        match currency {
            Currency::Pln => &[
                Banknote::Pln500,
                Banknote::Pln200,
                Banknote::Pln100,
                Banknote::Pln50,
                Banknote::Pln20,
                Banknote::Pln10,
            ],
            Currency::Usd => &[
                Banknote::Usd100,
                Banknote::Usd50,
                Banknote::Usd20,
                Banknote::Usd10,
                Banknote::Usd5,
                Banknote::Usd1,
            ],
            Currency::Eur => &[
                Banknote::Eur500,
                Banknote::Eur200,
                Banknote::Eur100,
                Banknote::Eur50,
                Banknote::Eur20,
                Banknote::Eur10,
                Banknote::Eur5,
            ],
        }
    }
}

impl Display for Banknote {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.denomination(), self.currency())
    }
}

/// The available quantity of one banknote denomination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BanknotesPack {
    pub banknote: Banknote,
    pub count: u32,
}

impl BanknotesPack {
    pub const fn new(banknote: Banknote, count: u32) -> Self {
        Self { banknote, count }
    }

    /// Total face value of the pack in whole currency units.
    pub const fn value(&self) -> i64 {
        self.banknote.denomination() * self.count as i64
    }
}

/// The note sequence produced by a successful withdrawal.
///
/// One entry per physical note dispensed, ordered largest denomination
/// first. The face values sum exactly to the requested amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Withdrawal {
    banknotes: Vec<Banknote>,
}

impl Withdrawal {
    pub fn new(banknotes: Vec<Banknote>) -> Self {
        Self { banknotes }
    }

    pub fn banknotes(&self) -> &[Banknote] {
        &self.banknotes
    }

    /// Sum of the dispensed face values in whole currency units.
    pub fn total(&self) -> i64 {
        self.banknotes.iter().map(|note| note.denomination()).sum()
    }
}
