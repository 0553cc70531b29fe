use crate::assert_code;
use crate::context::*;
use atm::domain::{Banknote, ErrorCode, OperationOutcome};
use atm::port::OperationLog;

#[tokio::test]
async fn test_withdraw_single_banknote() {
    let mut ctx = TestContext::with_deposit(vec![pack(10, Banknote::Pln10)]);

    let withdrawal = ctx.withdraw(pln(10)).await.unwrap();

    assert_eq!(withdrawal.banknotes().len(), 1);
    assert_eq!(withdrawal.banknotes()[0], Banknote::Pln10);
}

#[tokio::test]
async fn test_withdraw_splits_amount_into_two_banknotes() {
    let mut ctx = TestContext::with_deposit(vec![pack(20, Banknote::Pln10)]);

    let withdrawal = ctx.withdraw(pln(20)).await.unwrap();

    assert_eq!(withdrawal.banknotes().len(), 2);
    assert_eq!(withdrawal.banknotes()[0].denomination(), 10);
}

#[tokio::test]
async fn test_withdraw_prefers_largest_denominations() {
    let mut ctx = TestContext::with_deposit(vec![
        pack(3, Banknote::Pln10),
        pack(1, Banknote::Pln100),
        pack(2, Banknote::Pln20),
        pack(1, Banknote::Pln50),
    ]);

    let withdrawal = ctx.withdraw(pln(180)).await.unwrap();

    assert_eq!(
        withdrawal.banknotes(),
        &[
            Banknote::Pln100,
            Banknote::Pln50,
            Banknote::Pln20,
            Banknote::Pln10
        ]
    );
}

#[tokio::test]
async fn test_withdrawal_total_matches_requested_amount() {
    let mut ctx = TestContext::with_deposit(vec![
        pack(1, Banknote::Pln100),
        pack(1, Banknote::Pln50),
        pack(2, Banknote::Pln20),
        pack(3, Banknote::Pln10),
    ]);

    let withdrawal = ctx.withdraw(pln(180)).await.unwrap();

    assert_eq!(withdrawal.total(), 180);
}

#[tokio::test]
async fn test_withdraw_decrements_deposit() {
    let mut ctx = TestContext::with_deposit(vec![pack(10, Banknote::Pln10)]);

    ctx.withdraw(pln(30)).await.unwrap();

    assert_eq!(ctx.machine.current_deposit().total_value(), 70);
    assert_eq!(ctx.machine.current_deposit().packs()[0].count, 7);
}

#[tokio::test]
async fn test_exhausted_deposit_rejects_further_withdrawals() {
    let mut ctx = TestContext::with_deposit(vec![pack(2, Banknote::Pln10)]);

    ctx.withdraw(pln(20)).await.unwrap();

    // Every note is gone, so no positive amount is dispensable any more.
    assert_code!(ctx.withdraw(pln(10)).await, ErrorCode::WrongAmount);
}

#[tokio::test]
async fn test_operations_are_recorded_in_the_log() {
    let mut ctx = TestContext::with_deposit(vec![pack(10, Banknote::Pln10)]);

    ctx.withdraw(pln(10)).await.unwrap();
    let _ = ctx.withdraw(pln(7)).await;

    let records = ctx.log.replay(None).await.unwrap();
    assert_eq!(records.len(), 2);
    assert!(matches!(
        records[0].operation.outcome,
        OperationOutcome::Dispensed { .. }
    ));
    assert!(matches!(
        records[1].operation.outcome,
        OperationOutcome::Rejected {
            code: ErrorCode::WrongAmount
        }
    ));
}
