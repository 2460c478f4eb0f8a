//! Locale-aware rendering of amounts, movement dates, and the countdown.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// ISO 4217 currency representation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct CurrencyCode(pub String);

impl CurrencyCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CurrencyCode {
    fn default() -> Self {
        Self::new("EUR")
    }
}

/// Whether the currency symbol leads or trails the amount.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SymbolPosition {
    Prefix,
    Suffix,
}

/// Field order for numeric calendar dates.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum DateOrder {
    DayMonthYear,
    MonthDayYear,
}

/// Locale-aware formatting preferences.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LocaleConfig {
    pub language_tag: String,
    pub decimal_separator: char,
    pub grouping_separator: char,
    pub symbol_position: SymbolPosition,
    pub date_order: DateOrder,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        locale_for("en-US")
    }
}

/// Preset for a BCP 47 language tag. Unknown tags fall back to `en-US`
/// conventions under the requested tag.
pub fn locale_for(tag: &str) -> LocaleConfig {
    match tag {
        "pt-PT" => LocaleConfig {
            language_tag: tag.into(),
            decimal_separator: ',',
            grouping_separator: '.',
            symbol_position: SymbolPosition::Suffix,
            date_order: DateOrder::DayMonthYear,
        },
        _ => LocaleConfig {
            language_tag: tag.into(),
            decimal_separator: '.',
            grouping_separator: ',',
            symbol_position: SymbolPosition::Prefix,
            date_order: DateOrder::MonthDayYear,
        },
    }
}

pub fn symbol_for(code: &str) -> String {
    match code {
        "USD" => "$".into(),
        "EUR" => "€".into(),
        "GBP" => "£".into(),
        "JPY" => "¥".into(),
        _ => code.into(),
    }
}

pub fn minor_units_for(code: &str) -> u8 {
    match code {
        "JPY" => 0,
        "KWD" | "BHD" => 3,
        _ => 2,
    }
}

/// Renders `amount` with the locale's separators and the currency symbol in
/// its locale position.
pub fn format_currency(amount: f64, code: &CurrencyCode, locale: &LocaleConfig) -> String {
    let precision = minor_units_for(code.as_str());
    let body = format_number(locale, amount, precision);
    let symbol = symbol_for(code.as_str());
    match locale.symbol_position {
        SymbolPosition::Prefix => {
            if let Some(stripped) = body.strip_prefix('-') {
                format!("-{}{}", symbol, stripped)
            } else {
                format!("{}{}", symbol, body)
            }
        }
        SymbolPosition::Suffix => format!("{} {}", body, symbol),
    }
}

pub fn format_number(locale: &LocaleConfig, value: f64, precision: u8) -> String {
    let mut body = format!("{:.*}", precision as usize, value);
    if locale.decimal_separator != '.' {
        if let Some(pos) = body.find('.') {
            body.replace_range(pos..=pos, &locale.decimal_separator.to_string());
        }
    }
    if let Some(pos) = body.find(locale.decimal_separator) {
        let mut int_part = body[..pos].to_string();
        insert_grouping(&mut int_part, locale.grouping_separator);
        body = format!("{}{}", int_part, &body[pos..]);
    } else {
        insert_grouping(&mut body, locale.grouping_separator);
    }
    body
}

fn insert_grouping(int_part: &mut String, separator: char) {
    let mut cleaned = int_part.replace(separator, "");
    if cleaned.starts_with('-') {
        let sign = cleaned.remove(0);
        let grouped = group_digits(&cleaned, separator);
        *int_part = format!("{}{}", sign, grouped);
    } else {
        *int_part = group_digits(&cleaned, separator);
    }
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::new();
    let mut count = 0;
    for ch in digits.chars().rev() {
        if count != 0 && count % 3 == 0 {
            grouped.insert(0, separator);
        }
        grouped.insert(0, ch);
        count += 1;
    }
    grouped
}

/// Relative label for recent movements, numeric date otherwise.
///
/// Same-day movements read "Today", one day back "Yesterday", up to a week
/// "N days ago".
pub fn format_movement_date(
    date: DateTime<Utc>,
    now: DateTime<Utc>,
    locale: &LocaleConfig,
) -> String {
    let days_passed = (now - date).num_seconds() as f64 / 86_400.0;
    let days_passed = days_passed.round().max(0.0) as i64;
    match days_passed {
        0 => "Today".into(),
        1 => "Yesterday".into(),
        2..=7 => format!("{days_passed} days ago"),
        _ => format_calendar_date(date, locale),
    }
}

fn format_calendar_date(date: DateTime<Utc>, locale: &LocaleConfig) -> String {
    match locale.date_order {
        DateOrder::DayMonthYear => date.format("%d/%m/%Y").to_string(),
        DateOrder::MonthDayYear => date.format("%m/%d/%Y").to_string(),
    }
}

/// Minutes-and-seconds label for the inactivity countdown.
pub fn countdown_label(remaining_secs: u32) -> String {
    format!("{:02}:{:02}", remaining_secs / 60, remaining_secs % 60)
}
