use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::account::{Account, Movement};
use crate::format::CurrencyCode;

/// Owns every account known to the demo bank.
///
/// Lookups are linear; the store is sized for a handful of seeded accounts
/// plus whatever a session creates.
#[derive(Debug, Default, Clone)]
pub struct Bank {
    accounts: Vec<Account>,
}

impl Bank {
    pub fn new(accounts: Vec<Account>) -> Self {
        warn_on_username_collisions(&accounts);
        Self { accounts }
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn add(&mut self, account: Account) -> Uuid {
        let id = account.id;
        self.accounts.push(account);
        id
    }

    /// First account matching the username, if any.
    pub fn account(&self, username: &str) -> Option<&Account> {
        self.accounts.iter().find(|a| a.username == username)
    }

    pub fn account_mut(&mut self, username: &str) -> Option<&mut Account> {
        self.accounts.iter_mut().find(|a| a.username == username)
    }

    /// Mutable access to two distinct accounts at once.
    ///
    /// Returns `None` when either username is unknown or both name the same
    /// account.
    pub fn pair_mut(
        &mut self,
        first: &str,
        second: &str,
    ) -> Option<(&mut Account, &mut Account)> {
        let i = self.accounts.iter().position(|a| a.username == first)?;
        let j = self.accounts.iter().position(|a| a.username == second)?;
        if i == j {
            return None;
        }
        if i < j {
            let (head, tail) = self.accounts.split_at_mut(j);
            Some((&mut head[i], &mut tail[0]))
        } else {
            let (head, tail) = self.accounts.split_at_mut(i);
            Some((&mut tail[0], &mut head[j]))
        }
    }

    /// Removes the account with the given username, returning whether one
    /// was present.
    pub fn remove(&mut self, username: &str) -> bool {
        let before = self.accounts.len();
        self.accounts.retain(|a| a.username != username);
        self.accounts.len() != before
    }

    /// The two demonstration accounts every fresh instance starts with.
    pub fn seed_demo() -> Self {
        let mut jonas =
            Account::new("Jonas Schmedtmann", 1111, 1.2, CurrencyCode::new("EUR"), "pt-PT");
        jonas.movements = seed_movements(
            &[200.0, 455.23, -306.5, 25_000.0, -642.21, -133.9, 79.97, 1_300.0],
            &[
                "2020-01-25T14:18:46.235Z",
                "2020-02-05T16:33:06.386Z",
                "2021-07-25T14:43:26.374Z",
                "2021-07-28T18:49:59.371Z",
                "2021-07-30T05:01:20.894Z",
                "2021-08-22T13:15:33.035Z",
                "2021-08-26T09:48:16.867Z",
                "2021-08-27T06:04:23.907Z",
            ],
        );

        let mut jessica =
            Account::new("Jessica Davis", 2222, 1.5, CurrencyCode::new("USD"), "en-US");
        jessica.movements = seed_movements(
            &[5_000.0, 3_400.0, -150.0, -790.0, -3_210.0, -1_000.0, 8_500.0, -30.0],
            &[
                "2019-11-01T13:15:33.035Z",
                "2019-11-30T09:48:16.867Z",
                "2019-12-25T06:04:23.907Z",
                "2020-01-25T14:18:46.235Z",
                "2020-02-05T16:33:06.386Z",
                "2021-07-25T14:43:26.374Z",
                "2021-07-28T18:49:59.371Z",
                "2021-07-30T05:01:20.894Z",
            ],
        );

        Self::new(vec![jonas, jessica])
    }
}

fn seed_movements(amounts: &[f64], dates: &[&str]) -> Vec<Movement> {
    amounts
        .iter()
        .zip(dates)
        .map(|(&amount, date)| Movement::new(amount, parse_seed_date(date)))
        .collect()
}

fn parse_seed_date(raw: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(raw)
        .expect("seed dates are valid RFC 3339")
        .with_timezone(&Utc)
}

fn warn_on_username_collisions(accounts: &[Account]) {
    for (index, account) in accounts.iter().enumerate() {
        if accounts[..index].iter().any(|a| a.username == account.username) {
            tracing::warn!(
                username = %account.username,
                owner = %account.owner,
                "duplicate username; earlier account wins lookups"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_demo_contains_both_accounts() {
        let bank = Bank::seed_demo();
        assert_eq!(bank.accounts().len(), 2);

        let jonas = bank.account("js").expect("jonas present");
        assert_eq!(jonas.owner, "Jonas Schmedtmann");
        assert_eq!(jonas.pin, 1111);
        assert_eq!(jonas.movements.len(), 8);
        assert_eq!(jonas.movements[3].amount, 25_000.0);

        let jessica = bank.account("jd").expect("jessica present");
        assert_eq!(jessica.currency.as_str(), "USD");
        assert_eq!(jessica.locale, "en-US");
        assert_eq!(jessica.movements.len(), 8);
    }

    #[test]
    fn pair_mut_returns_disjoint_accounts() {
        let mut bank = Bank::seed_demo();
        let (a, b) = bank.pair_mut("js", "jd").expect("both exist");
        a.record(-10.0, Utc::now());
        b.record(10.0, Utc::now());
        assert_eq!(a.username, "js");
        assert_eq!(b.username, "jd");
    }

    #[test]
    fn pair_mut_rejects_same_account() {
        let mut bank = Bank::seed_demo();
        assert!(bank.pair_mut("js", "js").is_none());
    }

    #[test]
    fn remove_deletes_by_username() {
        let mut bank = Bank::seed_demo();
        assert!(bank.remove("js"));
        assert!(!bank.remove("js"));
        assert!(bank.account("js").is_none());
        assert_eq!(bank.accounts().len(), 1);
    }
}
