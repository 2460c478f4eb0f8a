use chrono::{DateTime, Utc};
use colored::Colorize;

use crate::cli::output;
use crate::core::services::SessionView;
use crate::domain::account::MovementKind;
use crate::format::{countdown_label, format_currency, format_movement_date, locale_for};

/// Prints the full account view: movements, balance, summary, countdown.
/// Movements are listed newest first.
pub fn render_dashboard(view: &SessionView, now: DateTime<Utc>) {
    let locale = locale_for(&view.locale);

    output::section(format!("{}'s account", view.first_name));

    if view.movements.is_empty() {
        output::info("No movements yet.");
    }
    for (index, movement) in view.movements.iter().enumerate().rev() {
        let label = match movement.kind() {
            MovementKind::Deposit => "deposit".bright_green(),
            MovementKind::Withdrawal => "withdrawal".bright_red(),
        };
        println!(
            "{:>3}  {:<10}  {:<12}  {:>14}",
            index + 1,
            label,
            format_movement_date(movement.date, now, &locale),
            format_currency(movement.amount, &view.currency, &locale)
        );
    }
    if view.sorted {
        output::info("Movements sorted by amount.");
    }

    output::separator();
    println!(
        "Balance:  {}",
        format_currency(view.summary.balance, &view.currency, &locale).bold()
    );
    println!(
        "In: {}   Out: {}   Interest: {}",
        format_currency(view.summary.income, &view.currency, &locale),
        format_currency(view.summary.outgoings.abs(), &view.currency, &locale),
        format_currency(view.summary.interest, &view.currency, &locale)
    );
    println!(
        "You will be logged out in {}",
        countdown_label(view.remaining_secs)
    );
}
