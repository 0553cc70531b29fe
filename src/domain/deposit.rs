use serde::{Deserialize, Serialize};

use crate::domain::{AtmError, BanknotesPack, Currency, Withdrawal};

/// The cash inventory held by one machine.
///
/// Construction is permissive: the packs are stored as given and the machine
/// validates currency and amount at withdraw time, so a deposit declared in
/// one currency can be built from foreign packs and will simply reject every
/// request for them with a currency error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoneyDeposit {
    currency: Currency,
    packs: Vec<BanknotesPack>,
}

impl MoneyDeposit {
    pub fn new(currency: Currency, packs: Vec<BanknotesPack>) -> Self {
        Self { currency, packs }
    }

    /// A deposit with no banknotes at all. No positive amount can be
    /// withdrawn from it.
    pub const fn empty(currency: Currency) -> Self {
        Self {
            currency,
            packs: Vec::new(),
        }
    }

    pub const fn currency(&self) -> Currency {
        self.currency
    }

    pub fn packs(&self) -> &[BanknotesPack] {
        &self.packs
    }

    /// Gross value of all banknotes in whole currency units.
    pub fn total_value(&self) -> i64 {
        self.packs.iter().map(BanknotesPack::value).sum()
    }

    /// Smallest face value among denominations that still have notes, or
    /// `None` when the deposit holds nothing.
    pub fn smallest_denomination(&self) -> Option<i64> {
        self.packs
            .iter()
            .filter(|pack| pack.count > 0)
            .map(|pack| pack.banknote.denomination())
            .min()
    }

    /// Remove the dispensed notes from the inventory.
    ///
    /// Fails if any count would go negative. That cannot happen when the
    /// withdrawal came from selection against this deposit; the check guards
    /// the inventory against a selection computed from a stale snapshot.
    pub fn withdraw(&mut self, withdrawal: &Withdrawal) -> Result<(), AtmError> {
        for note in withdrawal.banknotes() {
            let pack = self
                .packs
                .iter_mut()
                .find(|pack| pack.banknote == *note && pack.count > 0)
                .ok_or(AtmError::InsufficientDeposit)?;
            pack.count -= 1;
        }
        Ok(())
    }
}
