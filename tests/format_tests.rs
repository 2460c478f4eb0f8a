use bank_core::format::{
    countdown_label, format_currency, format_movement_date, locale_for, CurrencyCode,
};
use chrono::{Duration, TimeZone, Utc};

#[test]
fn portuguese_euro_rendering() {
    let locale = locale_for("pt-PT");
    let eur = CurrencyCode::new("EUR");
    assert_eq!(format_currency(25_000.0, &eur, &locale), "25.000,00 €");
    assert_eq!(format_currency(-642.21, &eur, &locale), "-642,21 €");
}

#[test]
fn us_dollar_rendering() {
    let locale = locale_for("en-US");
    let usd = CurrencyCode::new("USD");
    assert_eq!(format_currency(3_400.0, &usd, &locale), "$3,400.00");
    assert_eq!(format_currency(-3_210.0, &usd, &locale), "-$3,210.00");
}

#[test]
fn unknown_locale_falls_back_to_us_conventions() {
    let locale = locale_for("de-DE-x-unknown");
    assert_eq!(locale.language_tag, "de-DE-x-unknown");
    let usd = CurrencyCode::new("USD");
    assert_eq!(format_currency(1_000.0, &usd, &locale), "$1,000.00");
}

#[test]
fn relative_labels_stop_after_a_week() {
    let locale = locale_for("en-US");
    let now = Utc.with_ymd_and_hms(2021, 8, 27, 12, 0, 0).unwrap();

    assert_eq!(format_movement_date(now, now, &locale), "Today");
    assert_eq!(
        format_movement_date(now - Duration::days(1), now, &locale),
        "Yesterday"
    );
    assert_eq!(
        format_movement_date(now - Duration::days(7), now, &locale),
        "7 days ago"
    );
    assert_eq!(
        format_movement_date(now - Duration::days(8), now, &locale),
        "08/19/2021"
    );
}

#[test]
fn calendar_dates_follow_locale_field_order() {
    let now = Utc.with_ymd_and_hms(2021, 8, 27, 12, 0, 0).unwrap();
    let old = Utc.with_ymd_and_hms(2020, 1, 25, 14, 18, 46).unwrap();
    assert_eq!(
        format_movement_date(old, now, &locale_for("pt-PT")),
        "25/01/2020"
    );
    assert_eq!(
        format_movement_date(old, now, &locale_for("en-US")),
        "01/25/2020"
    );
}

#[test]
fn countdown_labels_are_minutes_and_seconds() {
    assert_eq!(countdown_label(300), "05:00");
    assert_eq!(countdown_label(119), "01:59");
    assert_eq!(countdown_label(9), "00:09");
    assert_eq!(countdown_label(0), "00:00");
}
