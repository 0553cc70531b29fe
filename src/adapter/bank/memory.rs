use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::{AccountError, AuthorizationError, Card, Money, PinCode};
use crate::port::Bank;

struct AccountRecord {
    pin: PinCode,
    balance: Money,
    blocked: bool,
}

struct BankData {
    accounts: HashMap<String, AccountRecord>,
}

/// In-memory bank implementation, keyed by card number.
///
/// Backs the CLI demo and the infrastructure tests. A real deployment would
/// put a network client behind the same [`Bank`] port.
pub struct InMemoryBank {
    data: Arc<RwLock<BankData>>,
}

impl InMemoryBank {
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(BankData {
                accounts: HashMap::new(),
            })),
        }
    }

    /// Register an account reachable through the given card.
    pub async fn open_account(&self, card: &Card, pin: PinCode, balance: Money) {
        let mut data = self.data.write().await;
        data.accounts.insert(
            card.number().to_string(),
            AccountRecord {
                pin,
                balance,
                blocked: false,
            },
        );
    }

    /// Block the card so every authorization attempt fails.
    pub async fn block_card(&self, card: &Card) {
        let mut data = self.data.write().await;
        if let Some(account) = data.accounts.get_mut(card.number()) {
            account.blocked = true;
        }
    }

    pub async fn balance(&self, card: &Card) -> Option<Money> {
        let data = self.data.read().await;
        data.accounts.get(card.number()).map(|a| a.balance)
    }
}

#[async_trait]
impl Bank for InMemoryBank {
    async fn authorize(&self, pin: &PinCode, card: &Card) -> Result<(), AuthorizationError> {
        let data = self.data.read().await;
        let account = data
            .accounts
            .get(card.number())
            .ok_or(AuthorizationError::UnknownCard)?;

        if account.blocked {
            return Err(AuthorizationError::CardBlocked);
        }
        if account.pin != *pin {
            return Err(AuthorizationError::InvalidPin);
        }

        Ok(())
    }

    async fn charge(&self, card: &Card, amount: Money) -> Result<(), AccountError> {
        let mut data = self.data.write().await;
        let account = data
            .accounts
            .get_mut(card.number())
            .ok_or(AccountError::UnknownAccount)?;

        if account.balance.currency() != amount.currency() {
            return Err(AccountError::CurrencyMismatch);
        }
        if account.balance.minor() < amount.minor() {
            return Err(AccountError::InsufficientFunds);
        }

        account.balance =
            Money::from_minor(account.balance.minor() - amount.minor(), amount.currency());
        Ok(())
    }
}

impl Default for InMemoryBank {
    fn default() -> Self {
        Self::new()
    }
}
