use chrono::{DateTime, Utc};

/// Inactivity countdown measured in whole seconds.
///
/// The countdown only moves when [`Countdown::tick`] is called, so callers
/// decide how wall-clock time maps onto ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    remaining: u32,
}

impl Countdown {
    pub fn new(seconds: u32) -> Self {
        Self { remaining: seconds }
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Decrements by one second; returns the remaining time after the tick.
    /// Saturates at zero.
    pub fn tick(&mut self) -> u32 {
        self.remaining = self.remaining.saturating_sub(1);
        self.remaining
    }

    pub fn reset(&mut self, seconds: u32) {
        self.remaining = seconds;
    }

    pub fn expired(&self) -> bool {
        self.remaining == 0
    }
}

/// A loan credit approved but not yet posted to the account.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendingCredit {
    pub amount: f64,
    pub due_at: DateTime<Utc>,
}

/// Events produced while advancing an active session by one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SessionEvent {
    /// The countdown moved; carries the seconds left.
    CountdownTick { remaining: u32 },
    /// A previously requested loan was credited to the account.
    LoanPosted { amount: f64 },
    /// The countdown reached zero and the session ended.
    TimedOut,
}

/// Runtime state of the active login.
///
/// Owns everything that must be discarded together when the session ends:
/// the logged-in username, the inactivity countdown, loans awaiting their
/// posting delay, and the movement sort preference.
#[derive(Debug, Clone)]
pub struct Session {
    username: String,
    timeout_secs: u32,
    countdown: Countdown,
    pending: Vec<PendingCredit>,
    sorted: bool,
}

impl Session {
    pub fn start(username: impl Into<String>, timeout_secs: u32) -> Self {
        Self {
            username: username.into(),
            timeout_secs,
            countdown: Countdown::new(timeout_secs),
            pending: Vec::new(),
            sorted: false,
        }
    }

    /// Counts an interaction as activity: the countdown starts over.
    pub fn touch(&mut self) {
        self.countdown.reset(self.timeout_secs);
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn countdown(&self) -> &Countdown {
        &self.countdown
    }

    pub fn countdown_mut(&mut self) -> &mut Countdown {
        &mut self.countdown
    }

    pub fn sorted(&self) -> bool {
        self.sorted
    }

    /// Flips the movement sort preference and returns the new value.
    pub fn toggle_sorted(&mut self) -> bool {
        self.sorted = !self.sorted;
        self.sorted
    }

    pub fn pending(&self) -> &[PendingCredit] {
        &self.pending
    }

    pub fn push_pending(&mut self, credit: PendingCredit) {
        self.pending.push(credit);
    }

    /// Removes and returns every pending credit due at or before `now`.
    pub fn take_due(&mut self, now: DateTime<Utc>) -> Vec<PendingCredit> {
        let mut due = Vec::new();
        self.pending.retain(|credit| {
            if credit.due_at <= now {
                due.push(*credit);
                false
            } else {
                true
            }
        });
        due
    }

    /// Clears state that must not outlive the session. Pending credits are
    /// dropped so a stale loan can never post after logout.
    pub fn end(&mut self) {
        self.pending.clear();
    }
}
