use std::sync::Arc;

use crate::domain::{
    AtmError, Card, Currency, Money, MoneyDeposit, Operation, OperationOutcome, PinCode,
    Withdrawal, select,
};
use crate::port::{Bank, OperationLog};

/// A single cash machine.
///
/// Owns one [`MoneyDeposit`] and talks to the bank through the [`Bank`]
/// port. A withdrawal runs validation, authorization, feasibility and charge
/// in that order, mutating the deposit only after the charge succeeded.
///
/// `withdraw` takes `&mut self`, so one machine serves one operation at a
/// time; callers that share a machine across tasks must wrap it in their own
/// mutual exclusion for the duration of each call.
pub struct Atm {
    bank: Arc<dyn Bank>,
    log: Option<Arc<dyn OperationLog>>,
    deposit: MoneyDeposit,
}

impl Atm {
    /// A machine with an empty deposit in the given currency.
    pub fn new(bank: Arc<dyn Bank>, currency: Currency) -> Self {
        Self {
            bank,
            log: None,
            deposit: MoneyDeposit::empty(currency),
        }
    }

    /// Record every operation, successful or not, to the given log.
    pub fn with_log(mut self, log: Arc<dyn OperationLog>) -> Self {
        self.log = Some(log);
        self
    }

    pub fn log(&self) -> Option<Arc<dyn OperationLog>> {
        self.log.clone()
    }

    /// Replace the machine's cash inventory.
    pub fn set_deposit(&mut self, deposit: MoneyDeposit) {
        self.deposit = deposit;
    }

    /// Read-only view of the current inventory, reflecting prior
    /// withdrawals.
    pub fn current_deposit(&self) -> &MoneyDeposit {
        &self.deposit
    }

    /// Dispense `amount` to the holder of `card`.
    ///
    /// Sequence: currency check, amount check, `bank.authorize`, banknote
    /// selection against the current deposit, `bank.charge`, deposit
    /// mutation. Selection runs before the charge so an account is never
    /// debited for cash the machine cannot physically pay out; see the
    /// feasibility-first note in DESIGN.md.
    pub async fn withdraw(
        &mut self,
        pin: &PinCode,
        card: &Card,
        amount: Money,
    ) -> Result<Withdrawal, AtmError> {
        let result = self.run_withdrawal(pin, card, amount).await;
        self.record(card, amount, &result).await;
        result
    }

    async fn run_withdrawal(
        &mut self,
        pin: &PinCode,
        card: &Card,
        amount: Money,
    ) -> Result<Withdrawal, AtmError> {
        self.validate(amount)?;

        self.bank.authorize(pin, card).await?;

        let withdrawal = select(&self.deposit, amount.units())?;

        self.bank.charge(card, amount).await?;

        self.deposit.withdraw(&withdrawal)?;
        tracing::info!(
            "dispensed {} banknotes for {}",
            withdrawal.banknotes().len(),
            amount
        );

        Ok(withdrawal)
    }

    fn validate(&self, amount: Money) -> Result<(), AtmError> {
        if amount.currency() != self.deposit.currency() {
            return Err(AtmError::WrongCurrency {
                requested: amount.currency(),
                machine: self.deposit.currency(),
            });
        }

        if !amount.is_positive() {
            return Err(AtmError::WrongAmount);
        }

        // An empty deposit has no smallest denomination and can satisfy no
        // positive amount at all.
        let Some(smallest) = self.deposit.smallest_denomination() else {
            return Err(AtmError::WrongAmount);
        };

        if amount.minor() % (smallest * Money::SCALE) != 0 {
            return Err(AtmError::WrongAmount);
        }

        Ok(())
    }

    async fn record(&self, card: &Card, amount: Money, result: &Result<Withdrawal, AtmError>) {
        let Some(log) = &self.log else {
            return;
        };

        let outcome = match result {
            Ok(withdrawal) => OperationOutcome::Dispensed {
                banknotes: withdrawal.banknotes().to_vec(),
            },
            Err(error) => OperationOutcome::Rejected { code: error.code() },
        };

        let operation = Operation {
            card: card.clone(),
            requested: amount,
            outcome,
        };

        if let Err(error) = log.append(operation).await {
            tracing::warn!("failed to record operation: {}", error);
        }
    }
}
