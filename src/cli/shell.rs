use std::time::Instant;

use crate::bank::Bank;
use crate::cli::{io, output, render, CliError};
use crate::config::{Config, ConfigManager};
use crate::core::services::{SessionService, TransactionService};
use crate::core::session::{Session, SessionEvent};
use crate::core::time::{Clock, SystemClock};

const LOGIN_FAILED: &str = "Try Again! Wrong Account or Password!";
const LOGGED_OUT: &str = "Log in to get started!";

/// Interactive demo shell over the seeded bank.
pub fn run() -> Result<(), CliError> {
    let config = load_config();
    let clock = SystemClock;
    let mut bank = Bank::seed_demo();
    let mut session: Option<Session> = None;

    output::section("Bank Core");
    output::info(LOGGED_OUT);

    loop {
        if session.is_none() {
            let choice = io::select("Menu", &["Log in", "Quit"])?;
            if choice == 1 {
                break;
            }
            let username = io::prompt_text("Username")?;
            let pin = io::prompt_pin("PIN")?;
            match SessionService::login(&bank, &mut session, &username, pin, config.timeout_secs)
            {
                Ok(view) => output::success(format!("Welcome back, {}!", view.first_name)),
                Err(_) => output::error(LOGIN_FAILED),
            }
            continue;
        }

        if let Ok(view) = SessionService::view(&bank, &session) {
            render::render_dashboard(&view, clock.now());
        }

        let waiting_since = Instant::now();
        let choice = io::select(
            "Action",
            &[
                "Refresh",
                "Transfer",
                "Request loan",
                "Toggle sort",
                "Close account",
                "Log out",
            ],
        )?;
        advance(
            &mut bank,
            &mut session,
            &clock,
            waiting_since.elapsed().as_secs(),
        );
        if session.is_none() {
            output::info(LOGGED_OUT);
            continue;
        }

        match choice {
            1 => {
                let recipient = io::prompt_text("Transfer to (username)")?;
                let amount = io::prompt_amount("Amount")?;
                match TransactionService::transfer(
                    &mut bank,
                    &mut session,
                    &clock,
                    &recipient,
                    amount,
                ) {
                    Ok(()) => output::success("Transfer completed."),
                    Err(err) => output::error(err),
                }
            }
            2 => {
                let amount = io::prompt_amount("Loan amount")?;
                match TransactionService::request_loan(
                    &bank,
                    &mut session,
                    &clock,
                    amount,
                    config.loan_delay_ms,
                ) {
                    Ok(granted) => {
                        output::info(format!("Loan of {granted:.2} approved, arriving shortly."))
                    }
                    Err(err) => output::error(err),
                }
            }
            3 => match TransactionService::toggle_sort(&bank, &mut session) {
                Ok(_) => {
                    let sorted = session.as_ref().is_some_and(Session::sorted);
                    if sorted {
                        output::info("Showing movements sorted by amount.");
                    } else {
                        output::info("Showing movements in original order.");
                    }
                }
                Err(err) => output::error(err),
            },
            4 => {
                let confirm_username = io::prompt_text("Confirm username")?;
                let confirm_pin = io::prompt_pin("Confirm PIN")?;
                let sure =
                    io::confirm_action("This permanently deletes your account. Continue?", false)?;
                if !sure {
                    output::info("Account closure cancelled.");
                    continue;
                }
                match TransactionService::close_account(
                    &mut bank,
                    &mut session,
                    &confirm_username,
                    confirm_pin,
                ) {
                    Ok(()) => {
                        output::success("Account closed.");
                        output::info(LOGGED_OUT);
                    }
                    Err(err) => output::error(err),
                }
            }
            5 => {
                SessionService::logout(&mut session);
                output::info(LOGGED_OUT);
            }
            _ => {}
        }
    }

    Ok(())
}

fn load_config() -> Config {
    match ConfigManager::new().and_then(|manager| manager.load()) {
        Ok(config) => config,
        Err(err) => {
            output::warning(format!("Using default settings: {err}"));
            Config::default()
        }
    }
}

/// Maps wall-clock seconds spent waiting on a prompt onto countdown ticks.
fn advance(bank: &mut Bank, session: &mut Option<Session>, clock: &dyn Clock, elapsed_secs: u64) {
    for _ in 0..elapsed_secs {
        if session.is_none() {
            return;
        }
        for event in SessionService::tick(bank, session, clock) {
            match event {
                SessionEvent::LoanPosted { amount } => {
                    output::success(format!("Loan of {amount:.2} credited to your account."));
                }
                SessionEvent::TimedOut => {
                    output::warning("You have been logged out due to inactivity.");
                }
                SessionEvent::CountdownTick { .. } => {}
            }
        }
    }
}
