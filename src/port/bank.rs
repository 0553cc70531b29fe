use async_trait::async_trait;

use crate::domain::{AccountError, AuthorizationError, Card, Money, PinCode};

/// The banking backend the machine talks to.
///
/// Both calls are single-shot: no retry semantics, no partial results. The
/// machine calls `authorize` before `charge` and dispenses nothing unless
/// both succeed. Implementations are expected to be slow (network I/O);
/// test doubles answer instantly with scripted results.
#[async_trait]
pub trait Bank: Send + Sync {
    /// Check that the pin matches the card.
    async fn authorize(&self, pin: &PinCode, card: &Card) -> Result<(), AuthorizationError>;

    /// Debit the account linked to the card.
    async fn charge(&self, card: &Card, amount: Money) -> Result<(), AccountError>;
}
