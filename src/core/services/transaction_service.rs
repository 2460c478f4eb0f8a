//! Money-moving operations for the active session.

use std::cmp::Ordering;

use chrono::Duration;

use crate::bank::Bank;
use crate::core::services::SummaryService;
use crate::core::session::{PendingCredit, Session};
use crate::core::time::Clock;
use crate::domain::account::Movement;
use crate::errors::{CloseError, LoanError, SessionError, TransferError};

/// Fraction of the requested loan that some single deposit must reach.
const LOAN_DEPOSIT_RATIO: f64 = 0.1;

/// Validated transfer, loan, and closure helpers.
pub struct TransactionService;

impl TransactionService {
    /// Moves `amount` from the active account to `recipient`.
    ///
    /// Both histories are updated in the same call, so a debit is never
    /// visible without its matching credit. A successful transfer counts as
    /// activity and restarts the countdown.
    pub fn transfer(
        bank: &mut Bank,
        session: &mut Option<Session>,
        clock: &dyn Clock,
        recipient: &str,
        amount: f64,
    ) -> Result<(), TransferError> {
        let active = session.as_mut().ok_or(SessionError::NoActiveSession)?;
        if amount <= 0.0 {
            return Err(TransferError::InvalidAmount);
        }
        let sender = bank
            .account(active.username())
            .ok_or(SessionError::AccountMissing)?;
        let balance = SummaryService::balance(sender);
        if balance < amount {
            return Err(TransferError::InsufficientFunds {
                balance,
                requested: amount,
            });
        }
        if bank.account(recipient).is_none() {
            return Err(TransferError::UnknownRecipient(recipient.to_string()));
        }
        if recipient == active.username() {
            return Err(TransferError::SelfTransfer);
        }

        let now = clock.now();
        let (from, to) = bank
            .pair_mut(active.username(), recipient)
            .ok_or(SessionError::AccountMissing)?;
        from.record(-amount, now);
        to.record(amount, now);
        active.touch();
        tracing::info!(from = %active.username(), to = %recipient, amount, "transfer completed");
        Ok(())
    }

    /// Requests a loan of `amount`, granted only when some movement reaches a
    /// tenth of the request.
    ///
    /// The granted amount is rounded down to a whole unit and credited after
    /// the configured delay, on a later tick. Returns the granted amount.
    pub fn request_loan(
        bank: &Bank,
        session: &mut Option<Session>,
        clock: &dyn Clock,
        amount: f64,
        loan_delay_ms: u64,
    ) -> Result<f64, LoanError> {
        let active = session.as_mut().ok_or(SessionError::NoActiveSession)?;
        if amount <= 0.0 {
            return Err(LoanError::InvalidAmount);
        }
        let account = bank
            .account(active.username())
            .ok_or(SessionError::AccountMissing)?;
        let qualifies = account
            .amounts()
            .any(|movement| movement >= amount * LOAN_DEPOSIT_RATIO);
        if !qualifies {
            return Err(LoanError::NotEligible { requested: amount });
        }

        let granted = amount.floor();
        let due_at = clock.now() + Duration::milliseconds(loan_delay_ms as i64);
        active.push_pending(PendingCredit {
            amount: granted,
            due_at,
        });
        active.touch();
        tracing::info!(username = %active.username(), granted, "loan approved");
        Ok(granted)
    }

    /// Deletes the active account after the caller re-enters its credentials.
    /// Ends the session, discarding any pending loan credits.
    pub fn close_account(
        bank: &mut Bank,
        session: &mut Option<Session>,
        confirm_username: &str,
        confirm_pin: u32,
    ) -> Result<(), CloseError> {
        let active = session.as_mut().ok_or(SessionError::NoActiveSession)?;
        let account = bank
            .account(active.username())
            .ok_or(SessionError::AccountMissing)?;
        if confirm_username != account.username || confirm_pin != account.pin {
            return Err(CloseError::ConfirmationMismatch);
        }

        bank.remove(confirm_username);
        if let Some(mut ended) = session.take() {
            ended.end();
        }
        tracing::info!(username = %confirm_username, "account closed");
        Ok(())
    }

    /// Flips the sort preference and returns the resulting display
    /// projection of the active account's movements.
    pub fn toggle_sort(
        bank: &Bank,
        session: &mut Option<Session>,
    ) -> Result<Vec<Movement>, SessionError> {
        let active = session.as_mut().ok_or(SessionError::NoActiveSession)?;
        let account = bank
            .account(active.username())
            .ok_or(SessionError::AccountMissing)?;
        let sorted = active.toggle_sorted();
        Ok(Self::movements_for_display(&account.movements, sorted))
    }

    /// Movement history in display order: insertion order normally, ascending
    /// by amount when the sort preference is on. The stored history is never
    /// reordered.
    pub fn movements_for_display(movements: &[Movement], sorted: bool) -> Vec<Movement> {
        let mut view = movements.to_vec();
        if sorted {
            view.sort_by(|a, b| a.amount.partial_cmp(&b.amount).unwrap_or(Ordering::Equal));
        }
        view
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::time::SystemClock;
    use chrono::Utc;

    fn logged_in(username: &str) -> (Bank, Option<Session>) {
        let bank = Bank::seed_demo();
        let session = Some(Session::start(username, 300));
        (bank, session)
    }

    #[test]
    fn transfer_updates_both_accounts() {
        let (mut bank, mut session) = logged_in("js");
        TransactionService::transfer(&mut bank, &mut session, &SystemClock, "jd", 500.0)
            .expect("transfer succeeds");

        let jonas = bank.account("js").unwrap();
        let jessica = bank.account("jd").unwrap();
        assert_eq!(jonas.movements.last().unwrap().amount, -500.0);
        assert_eq!(jessica.movements.last().unwrap().amount, 500.0);
    }

    #[test]
    fn transfer_rejects_overdraw() {
        let (mut bank, mut session) = logged_in("js");
        let err = TransactionService::transfer(&mut bank, &mut session, &SystemClock, "jd", 1e9)
            .expect_err("must overdraw");
        assert!(matches!(err, TransferError::InsufficientFunds { .. }));
    }

    #[test]
    fn transfer_rejects_self_and_unknown_recipient() {
        let (mut bank, mut session) = logged_in("js");
        let err = TransactionService::transfer(&mut bank, &mut session, &SystemClock, "js", 10.0)
            .expect_err("self transfer");
        assert_eq!(err, TransferError::SelfTransfer);

        let err = TransactionService::transfer(&mut bank, &mut session, &SystemClock, "zz", 10.0)
            .expect_err("unknown recipient");
        assert_eq!(err, TransferError::UnknownRecipient("zz".into()));
    }

    #[test]
    fn transfer_requires_a_session() {
        let mut bank = Bank::seed_demo();
        let mut session = None;
        let err = TransactionService::transfer(&mut bank, &mut session, &SystemClock, "jd", 1.0)
            .expect_err("no session");
        assert_eq!(err, TransferError::Session(SessionError::NoActiveSession));
    }

    #[test]
    fn loan_floors_amount_and_defers_credit() {
        let (bank, mut session) = logged_in("js");
        let granted =
            TransactionService::request_loan(&bank, &mut session, &SystemClock, 1000.5, 2_500)
                .expect("loan approved");
        assert_eq!(granted, 1000.0);

        let active = session.as_ref().unwrap();
        assert_eq!(active.pending().len(), 1);
        assert_eq!(active.pending()[0].amount, 1000.0);
        // Not yet due: no movement recorded.
        assert_eq!(bank.account("js").unwrap().movements.len(), 8);
    }

    #[test]
    fn loan_requires_a_qualifying_deposit() {
        let (bank, mut session) = logged_in("js");
        // Largest seeded deposit is 25000, so 250001 cannot qualify.
        let err =
            TransactionService::request_loan(&bank, &mut session, &SystemClock, 250_001.0, 2_500)
                .expect_err("no deposit large enough");
        assert!(matches!(err, LoanError::NotEligible { .. }));
    }

    #[test]
    fn close_requires_matching_credentials() {
        let (mut bank, mut session) = logged_in("js");
        let err = TransactionService::close_account(&mut bank, &mut session, "js", 9999)
            .expect_err("wrong pin");
        assert_eq!(err, CloseError::ConfirmationMismatch);
        assert!(session.is_some());

        TransactionService::close_account(&mut bank, &mut session, "js", 1111)
            .expect("close succeeds");
        assert!(session.is_none());
        assert!(bank.account("js").is_none());
    }

    #[test]
    fn toggle_sort_returns_the_projection() {
        let (bank, mut session) = logged_in("js");
        let ascending =
            TransactionService::toggle_sort(&bank, &mut session).expect("toggle on");
        let mut expected: Vec<f64> = ascending.iter().map(|m| m.amount).collect();
        expected.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert_eq!(
            ascending.iter().map(|m| m.amount).collect::<Vec<_>>(),
            expected
        );

        let original = TransactionService::toggle_sort(&bank, &mut session).expect("toggle off");
        assert_eq!(original[0].amount, 200.0);
    }

    #[test]
    fn display_order_is_ascending_only_when_sorted() {
        let now = Utc::now();
        let movements = vec![
            Movement::new(200.0, now),
            Movement::new(-50.0, now),
            Movement::new(100.0, now),
        ];
        let plain = TransactionService::movements_for_display(&movements, false);
        assert_eq!(
            plain.iter().map(|m| m.amount).collect::<Vec<_>>(),
            vec![200.0, -50.0, 100.0]
        );
        let sorted = TransactionService::movements_for_display(&movements, true);
        assert_eq!(
            sorted.iter().map(|m| m.amount).collect::<Vec<_>>(),
            vec![-50.0, 100.0, 200.0]
        );
    }
}
