//! Balance and summary math over a single account.

use crate::domain::account::Account;

/// Per-deposit interest below this value is not paid out.
const INTEREST_FLOOR: f64 = 1.0;

/// Aggregated account figures for the summary row.
///
/// `outgoings` keeps its sign; display layers take the absolute value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AccountSummary {
    pub balance: f64,
    pub income: f64,
    pub outgoings: f64,
    pub interest: f64,
}

/// Derives display figures from the movement history. Everything is
/// recomputed per call; nothing is cached on the account.
pub struct SummaryService;

impl SummaryService {
    /// Net balance: the sum of every movement.
    pub fn balance(account: &Account) -> f64 {
        account.amounts().sum()
    }

    /// Splits the history into income, outgoing, and interest totals.
    ///
    /// Interest accrues per deposit at the account rate and is only counted
    /// when the individual payout reaches the floor.
    pub fn summarize(account: &Account) -> AccountSummary {
        let income = account.amounts().filter(|m| *m > 0.0).sum();
        let outgoings = account.amounts().filter(|m| *m < 0.0).sum();
        let interest = account
            .amounts()
            .filter(|m| *m > 0.0)
            .map(|deposit| deposit * account.interest_rate / 100.0)
            .filter(|payout| *payout >= INTEREST_FLOOR)
            .sum();
        AccountSummary {
            balance: Self::balance(account),
            income,
            outgoings,
            interest,
        }
    }
}
