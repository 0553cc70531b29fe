use serde::Deserialize;

use crate::domain::{Card, Money, PinCode};

/// CSV row structure (flat deserialization)
#[derive(Debug, Deserialize)]
struct CsvRow {
    card: String,
    pin: String,
    amount: f64,
    #[serde(default)]
    currency: Option<String>,
}

/// One cash withdrawal request read from the request feed.
///
/// Rows carry `card,pin,amount,currency`; the currency column may be empty
/// and defaults to [`Money::DEFAULT_CURRENCY`].
#[derive(Debug, Clone)]
pub struct WithdrawalRequest {
    pub card: Card,
    pub pin: PinCode,
    pub amount: Money,
}

// Custom Deserialize implementation for CSV format
impl<'de> Deserialize<'de> for WithdrawalRequest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let row = CsvRow::deserialize(deserializer)?;
        row.try_into().map_err(serde::de::Error::custom)
    }
}

impl TryFrom<CsvRow> for WithdrawalRequest {
    type Error = String;

    fn try_from(row: CsvRow) -> Result<Self, Self::Error> {
        let pin: PinCode = row.pin.parse().map_err(|e| format!("bad pin: {}", e))?;

        let currency = match row.currency.as_deref() {
            None | Some("") => Money::DEFAULT_CURRENCY,
            Some(code) => code.parse().map_err(|e| format!("bad currency: {}", e))?,
        };

        if !row.amount.is_finite() {
            return Err("amount must be a finite number".to_string());
        }

        Ok(Self {
            card: Card::new(row.card),
            pin,
            amount: Money::from_decimal(row.amount, currency),
        })
    }
}
