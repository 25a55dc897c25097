use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// `1234.5` with symbol `$` and 2 minor units → `$1,234.50`.
pub fn money(amount: Decimal, symbol: &str, minor_units: u32) -> String {
    let rounded = amount.round_dp_with_strategy(minor_units, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() { "-" } else { "" };
    let text = format!("{:.*}", minor_units as usize, rounded.abs());
    let (int_part, frac_part) = match text.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (text.as_str(), None),
    };
    match frac_part {
        Some(f) => format!("{sign}{symbol}{}.{f}", group_thousands(int_part)),
        None => format!("{sign}{symbol}{}", group_thousands(int_part)),
    }
}

/// Exchange rate with a fixed number of decimals, e.g. `83.5000`.
pub fn rate(rate: Decimal, decimals: u32) -> String {
    let rounded = rate.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.*}", decimals as usize, rounded)
}

fn plural(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{n} {unit}s ago")
    }
}

/// Coarse "time ago" label for blog teasers.
pub fn time_ago(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(then);
    if elapsed.num_minutes() < 1 {
        return "just now".to_string();
    }
    if elapsed.num_hours() < 1 {
        return plural(elapsed.num_minutes(), "minute");
    }
    if elapsed.num_days() < 1 {
        return plural(elapsed.num_hours(), "hour");
    }
    if elapsed.num_days() < 30 {
        return plural(elapsed.num_days(), "day");
    }
    if elapsed.num_days() < 365 {
        return plural(elapsed.num_days() / 30, "month");
    }
    plural(elapsed.num_days() / 365, "year")
}
