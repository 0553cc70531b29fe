use atm::domain::{AtmError, Banknote, BanknotesPack, Currency, MoneyDeposit, select};

fn pln_deposit(packs: Vec<BanknotesPack>) -> MoneyDeposit {
    MoneyDeposit::new(Currency::Pln, packs)
}

fn pack(count: u32, banknote: Banknote) -> BanknotesPack {
    BanknotesPack::new(banknote, count)
}

#[test]
fn test_select_single_note() {
    let deposit = pln_deposit(vec![pack(10, Banknote::Pln10)]);

    let withdrawal = select(&deposit, 10).unwrap();

    assert_eq!(withdrawal.banknotes(), &[Banknote::Pln10]);
}

#[test]
fn test_select_orders_notes_largest_first() {
    let deposit = pln_deposit(vec![
        pack(3, Banknote::Pln10),
        pack(1, Banknote::Pln100),
        pack(2, Banknote::Pln20),
    ]);

    let withdrawal = select(&deposit, 150).unwrap();

    assert_eq!(
        withdrawal.banknotes(),
        &[
            Banknote::Pln100,
            Banknote::Pln20,
            Banknote::Pln20,
            Banknote::Pln10
        ]
    );
}

#[test]
fn test_select_skips_exhausted_packs() {
    let deposit = pln_deposit(vec![pack(0, Banknote::Pln100), pack(5, Banknote::Pln10)]);

    let withdrawal = select(&deposit, 30).unwrap();

    assert_eq!(
        withdrawal.banknotes(),
        &[Banknote::Pln10, Banknote::Pln10, Banknote::Pln10]
    );
}

#[test]
fn test_select_fails_when_total_value_insufficient() {
    let deposit = pln_deposit(vec![pack(2, Banknote::Pln10)]);

    assert!(matches!(
        select(&deposit, 50),
        Err(AtmError::InsufficientDeposit)
    ));
}

#[test]
fn test_select_greedy_misses_non_greedy_combination() {
    // Three 20s would pay 60 exactly, but the walk takes the 50 first and
    // strands a remainder of 10. This failure is the documented contract of
    // the greedy selector.
    let deposit = pln_deposit(vec![pack(1, Banknote::Pln50), pack(3, Banknote::Pln20)]);

    assert!(matches!(
        select(&deposit, 60),
        Err(AtmError::InsufficientDeposit)
    ));
}

#[test]
fn test_select_falls_back_to_smaller_notes() {
    let deposit = pln_deposit(vec![pack(1, Banknote::Pln50), pack(3, Banknote::Pln20)]);

    let withdrawal = select(&deposit, 110).unwrap();

    assert_eq!(
        withdrawal.banknotes(),
        &[
            Banknote::Pln50,
            Banknote::Pln20,
            Banknote::Pln20,
            Banknote::Pln20
        ]
    );
}
