use crate::assert_code;
use crate::context::*;
use atm::domain::{AccountError, AuthorizationError, Banknote, ErrorCode};

#[tokio::test]
async fn test_authorization_failure_surfaces_authorization_code() {
    let mut ctx = TestContext::with_deposit(vec![pack(20, Banknote::Pln10)]);
    let before = ctx.machine.current_deposit().clone();

    ctx.bank.reject_authorization(AuthorizationError::InvalidPin);

    assert_code!(ctx.withdraw(pln(20)).await, ErrorCode::Authorization);
    assert_eq!(ctx.bank.charge_calls(), 0, "charge must not be attempted");
    assert_eq!(ctx.machine.current_deposit(), &before);
}

#[tokio::test]
async fn test_blocked_card_surfaces_authorization_code() {
    let mut ctx = TestContext::with_deposit(vec![pack(20, Banknote::Pln10)]);

    ctx.bank.reject_authorization(AuthorizationError::CardBlocked);

    assert_code!(ctx.withdraw(pln(20)).await, ErrorCode::Authorization);
}

#[tokio::test]
async fn test_rejected_charge_surfaces_no_funds_on_account() {
    let mut ctx = TestContext::with_deposit(vec![pack(20, Banknote::Pln10)]);
    let before = ctx.machine.current_deposit().clone();

    ctx.bank.reject_charge(AccountError::InsufficientFunds);

    assert_code!(ctx.withdraw(pln(20)).await, ErrorCode::NoFundsOnAccount);
    assert_eq!(ctx.bank.authorize_calls(), 1);
    assert_eq!(ctx.machine.current_deposit(), &before);
}

#[tokio::test]
async fn test_infeasible_selection_fails_before_charge() {
    // 60 is payable as three 20s, but the greedy walk commits to the 50
    // first and cannot finish. The account must not be charged for cash
    // the machine will not pay out.
    let mut ctx = TestContext::with_deposit(vec![
        pack(1, Banknote::Pln50),
        pack(3, Banknote::Pln20),
    ]);

    assert_code!(ctx.withdraw(pln(60)).await, ErrorCode::InsufficientDeposit);
    assert_eq!(ctx.bank.authorize_calls(), 1);
    assert_eq!(ctx.bank.charge_calls(), 0);
}
