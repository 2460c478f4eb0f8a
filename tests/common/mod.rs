use std::sync::atomic::{AtomicI64, Ordering};

use bank_core::{bank::Bank, core::session::Session, core::time::Clock};
use chrono::{DateTime, Duration, Utc};

/// Clock whose time only moves when a test advances it.
pub struct ManualClock {
    base: DateTime<Utc>,
    offset_ms: AtomicI64,
}

impl ManualClock {
    pub fn new(base: DateTime<Utc>) -> Self {
        Self {
            base,
            offset_ms: AtomicI64::new(0),
        }
    }

    pub fn advance_ms(&self, ms: i64) {
        self.offset_ms.fetch_add(ms, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        self.base + Duration::milliseconds(self.offset_ms.load(Ordering::SeqCst))
    }
}

/// Seeded bank plus an already started session for `username`.
#[allow(dead_code)]
pub fn logged_in(username: &str, timeout_secs: u32) -> (Bank, Option<Session>) {
    let bank = Bank::seed_demo();
    let session = Some(Session::start(username, timeout_secs));
    (bank, session)
}
