//! Session lifecycle: login, logout, and the per-second tick.

use crate::bank::Bank;
use crate::core::services::{AccountSummary, SummaryService, TransactionService};
use crate::core::session::{Session, SessionEvent};
use crate::core::time::Clock;
use crate::domain::account::{Account, Movement};
use crate::errors::{AuthError, SessionError};
use crate::format::CurrencyCode;

/// Render-ready snapshot of the active session and its account.
#[derive(Debug, Clone)]
pub struct SessionView {
    pub owner: String,
    pub first_name: String,
    pub username: String,
    pub currency: CurrencyCode,
    pub locale: String,
    pub summary: AccountSummary,
    pub movements: Vec<Movement>,
    pub sorted: bool,
    pub remaining_secs: u32,
}

impl SessionView {
    fn build(account: &Account, session: &Session) -> Self {
        Self {
            owner: account.owner.clone(),
            first_name: account.first_name().to_string(),
            username: account.username.clone(),
            currency: account.currency.clone(),
            locale: account.locale.clone(),
            summary: SummaryService::summarize(account),
            movements: TransactionService::movements_for_display(
                &account.movements,
                session.sorted(),
            ),
            sorted: session.sorted(),
            remaining_secs: session.countdown().remaining(),
        }
    }
}

/// Drives the login lifecycle over the bank store.
pub struct SessionService;

impl SessionService {
    /// Authenticates and starts a fresh session, replacing any previous one.
    /// Returns the initial snapshot of the account just logged into.
    ///
    /// Unknown usernames and wrong pins are indistinguishable to the caller.
    pub fn login(
        bank: &Bank,
        session: &mut Option<Session>,
        username: &str,
        pin: u32,
        timeout_secs: u32,
    ) -> Result<SessionView, AuthError> {
        let account = bank
            .account(username)
            .ok_or(AuthError::InvalidCredentials)?;
        if account.pin != pin {
            return Err(AuthError::InvalidCredentials);
        }

        if let Some(mut previous) = session.take() {
            previous.end();
        }
        let started = Session::start(username, timeout_secs);
        let view = SessionView::build(account, &started);
        *session = Some(started);
        tracing::info!(username = %username, "session started");
        Ok(view)
    }

    /// Ends the session, discarding any pending loan credits.
    pub fn logout(session: &mut Option<Session>) {
        if let Some(mut ended) = session.take() {
            ended.end();
            tracing::info!(username = %ended.username(), "session ended");
        }
    }

    /// Advances the session by one second.
    ///
    /// Due loan credits are posted first and count as activity, so the
    /// countdown restarts before it moves. When it reaches zero the session
    /// ends and a final `TimedOut` is emitted. Without an active session
    /// this is a no-op.
    pub fn tick(
        bank: &mut Bank,
        session: &mut Option<Session>,
        clock: &dyn Clock,
    ) -> Vec<SessionEvent> {
        let mut events = Vec::new();
        let Some(active) = session.as_mut() else {
            return events;
        };

        let now = clock.now();
        let due = active.take_due(now);
        if !due.is_empty() {
            if let Some(account) = bank.account_mut(active.username()) {
                for credit in due {
                    account.record(credit.amount, now);
                    events.push(SessionEvent::LoanPosted {
                        amount: credit.amount,
                    });
                }
                active.touch();
            }
        }

        let remaining = active.countdown_mut().tick();
        events.push(SessionEvent::CountdownTick { remaining });
        if remaining == 0 {
            active.end();
            *session = None;
            events.push(SessionEvent::TimedOut);
        }
        events
    }

    /// Snapshot for rendering, built strictly after any mutation.
    pub fn view(bank: &Bank, session: &Option<Session>) -> Result<SessionView, SessionError> {
        let active = session.as_ref().ok_or(SessionError::NoActiveSession)?;
        let account = bank
            .account(active.username())
            .ok_or(SessionError::AccountMissing)?;
        Ok(SessionView::build(account, active))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::time::SystemClock;

    #[test]
    fn login_accepts_seeded_credentials() {
        let bank = Bank::seed_demo();
        let mut session = None;
        let view =
            SessionService::login(&bank, &mut session, "js", 1111, 300).expect("valid login");
        assert_eq!(session.as_ref().unwrap().username(), "js");
        assert_eq!(view.first_name, "Jonas");
        assert_eq!(view.remaining_secs, 300);
    }

    #[test]
    fn login_failure_is_uniform() {
        let bank = Bank::seed_demo();
        let mut session = None;

        let unknown = SessionService::login(&bank, &mut session, "nobody", 1111, 300)
            .expect_err("unknown user");
        let wrong_pin =
            SessionService::login(&bank, &mut session, "js", 4321, 300).expect_err("wrong pin");
        assert_eq!(unknown, wrong_pin);
        assert!(session.is_none());
    }

    #[test]
    fn relogin_replaces_previous_session() {
        let bank = Bank::seed_demo();
        let mut session = None;
        SessionService::login(&bank, &mut session, "js", 1111, 300).unwrap();
        SessionService::login(&bank, &mut session, "jd", 2222, 300).unwrap();
        assert_eq!(session.as_ref().unwrap().username(), "jd");
    }

    #[test]
    fn tick_without_session_is_noop() {
        let mut bank = Bank::seed_demo();
        let mut session = None;
        assert!(SessionService::tick(&mut bank, &mut session, &SystemClock).is_empty());
    }

    #[test]
    fn countdown_expiry_ends_the_session() {
        let mut bank = Bank::seed_demo();
        let mut session = Some(Session::start("js", 2));

        let events = SessionService::tick(&mut bank, &mut session, &SystemClock);
        assert_eq!(events, vec![SessionEvent::CountdownTick { remaining: 1 }]);

        let events = SessionService::tick(&mut bank, &mut session, &SystemClock);
        assert_eq!(
            events,
            vec![
                SessionEvent::CountdownTick { remaining: 0 },
                SessionEvent::TimedOut
            ]
        );
        assert!(session.is_none());
    }

    #[test]
    fn view_reflects_account_state() {
        let bank = Bank::seed_demo();
        let mut session = None;
        SessionService::login(&bank, &mut session, "jd", 2222, 300).unwrap();

        let view = SessionService::view(&bank, &session).expect("view available");
        assert_eq!(view.first_name, "Jessica");
        assert_eq!(view.currency.as_str(), "USD");
        assert_eq!(view.movements.len(), 8);
        assert!(!view.sorted);
        assert_eq!(view.remaining_secs, 300);
    }
}
