use crate::domain::{AtmError, Banknote, MoneyDeposit, Withdrawal};

/// Greedy banknote selection, largest denomination first.
///
/// `target_units` is the requested amount in whole currency units; the
/// machine has already checked that it is positive and a whole multiple of
/// the smallest available denomination. The walk takes
/// `min(available count, remaining / face value)` notes of each denomination
/// in descending face-value order and succeeds when the remainder reaches
/// zero.
///
/// NOTE: greedy selection is not an exact change-maker. For some inventories
/// it misses a combination that exists: one 50 and three 20s cannot satisfy
/// 60 greedily even though three 20s would. That failure mode is part of the
/// machine's contract; switching to a DP-based matcher would change which
/// requests succeed and must not be done silently.
pub fn select(deposit: &MoneyDeposit, target_units: i64) -> Result<Withdrawal, AtmError> {
    let mut available: Vec<(Banknote, u32)> = deposit
        .packs()
        .iter()
        .filter(|pack| pack.count > 0)
        .map(|pack| (pack.banknote, pack.count))
        .collect();
    available.sort_by(|a, b| b.0.denomination().cmp(&a.0.denomination()));

    let mut remaining = target_units;
    let mut banknotes = Vec::new();
    for (banknote, count) in available {
        if remaining == 0 {
            break;
        }
        let take = (remaining / banknote.denomination()).min(i64::from(count));
        for _ in 0..take {
            banknotes.push(banknote);
        }
        remaining -= take * banknote.denomination();
    }

    if remaining != 0 {
        return Err(AtmError::InsufficientDeposit);
    }

    Ok(Withdrawal::new(banknotes))
}
