use std::sync::Arc;

use crate::adapter::{InMemoryBank, InMemoryLog};
use crate::domain::{Banknote, BanknotesPack, Card, Currency, Money, MoneyDeposit, PinCode};
use crate::service::Atm;

/// Number of demo accounts seeded by [`boot`]; the mock request generator
/// draws card numbers from the same range.
pub const DEMO_ACCOUNTS: u32 = 50;

/// PIN shared by every demo account.
pub const DEMO_PIN: PinCode = match PinCode::new([1, 2, 3, 4]) {
    Ok(pin) => pin,
    Err(_) => panic!("demo pin digits are in range"),
};

/// Card number of the n-th demo account (1-based).
pub fn demo_card(account: u32) -> Card {
    Card::new(format!("card-{:04}", account))
}

/// Assemble a demo machine: an in-memory bank seeded with numbered PLN
/// accounts, an in-memory operation log, and a stocked PLN deposit.
pub async fn boot() -> Atm {
    let bank = Arc::new(InMemoryBank::new());

    for account in 1..=DEMO_ACCOUNTS {
        bank.open_account(
            &demo_card(account),
            DEMO_PIN,
            Money::new(20_000, Currency::Pln),
        )
        .await;
    }

    let mut machine =
        Atm::new(bank, Currency::Pln).with_log(Arc::new(InMemoryLog::new()));
    machine.set_deposit(MoneyDeposit::new(
        Currency::Pln,
        vec![
            BanknotesPack::new(Banknote::Pln500, 20),
            BanknotesPack::new(Banknote::Pln200, 50),
            BanknotesPack::new(Banknote::Pln100, 100),
            BanknotesPack::new(Banknote::Pln50, 100),
            BanknotesPack::new(Banknote::Pln20, 150),
            BanknotesPack::new(Banknote::Pln10, 200),
        ],
    ));

    tracing::info!("cash machine initialized");

    machine
}
