#![doc(test(attr(deny(warnings))))]

//! Bank Core offers the account, session, and summary primitives behind a
//! small demo banking experience: seeded accounts, simulated transfers and
//! loans, and an inactivity countdown that ends the session.

pub mod bank;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod errors;
pub mod format;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing exactly once for the process.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Bank Core tracing initialized.");
    });
}
