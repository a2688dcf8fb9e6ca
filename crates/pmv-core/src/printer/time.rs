//! Timestamp and duration printers.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use chrono::{DateTime, Datelike, TimeDelta, Timelike, Utc};

use super::ValuePrinter;

const SECS_PER_MINUTE: u64 = 60;
const SECS_PER_HOUR: u64 = 60 * SECS_PER_MINUTE;
const SECS_PER_DAY: u64 = 24 * SECS_PER_HOUR;

/// `M/D/YYYY H:MM:SS GMT`, 24-hour clock, no padding on month, day or hour.
///
/// The year is plain decimal: years past 9999 get more digits, year 0 prints
/// as `0` and earlier years carry a minus sign.
pub fn format_time(time: &DateTime<Utc>) -> String {
    format!(
        "{}/{}/{} {}:{:02}:{:02} GMT",
        time.month(),
        time.day(),
        time.year(),
        time.hour(),
        time.minute(),
        time.second()
    )
}

/// Calendar form of a `SystemTime`, or signed Unix seconds followed by ` GMT`
/// when the instant lies outside the range chrono can represent.
pub fn format_system_time(time: &SystemTime) -> String {
    match time.duration_since(UNIX_EPOCH) {
        Ok(after) => i64::try_from(after.as_secs())
            .ok()
            .and_then(|secs| DateTime::from_timestamp(secs, after.subsec_nanos()))
            .map(|utc| format_time(&utc))
            .unwrap_or_else(|| format!("{} GMT", after.as_secs())),
        Err(err) => {
            let before = err.duration();
            let nanos = before.subsec_nanos();
            i64::try_from(before.as_secs())
                .ok()
                .and_then(|secs| {
                    if nanos == 0 {
                        DateTime::from_timestamp(-secs, 0)
                    } else {
                        DateTime::from_timestamp(-secs - 1, 1_000_000_000 - nanos)
                    }
                })
                .map(|utc| format_time(&utc))
                .unwrap_or_else(|| format!("-{} GMT", before.as_secs()))
        }
    }
}

/// Compact `1d2h3m4.5s` form of a non-negative duration, optionally signed.
///
/// Larger units appear only once a unit at or above them is non-zero;
/// seconds are always present. Sub-second precision is kept to the
/// microsecond with trailing zeros dropped.
pub fn format_duration(negative: bool, magnitude: Duration) -> String {
    let mut out = String::new();
    if negative {
        out.push('-');
    }

    let total = magnitude.as_secs();
    let days = total / SECS_PER_DAY;
    let hours = total % SECS_PER_DAY / SECS_PER_HOUR;
    let mins = total % SECS_PER_HOUR / SECS_PER_MINUTE;
    let secs = total % SECS_PER_MINUTE;
    let usecs = magnitude.subsec_micros();

    if days > 0 {
        out.push_str(&format!("{}d", days));
    }
    if days > 0 || hours > 0 {
        out.push_str(&format!("{}h", hours));
    }
    if days > 0 || hours > 0 || mins > 0 {
        out.push_str(&format!("{}m", mins));
    }
    out.push_str(&secs.to_string());
    if usecs > 0 {
        let fraction = format!("{:06}", usecs);
        out.push('.');
        out.push_str(fraction.trim_end_matches('0'));
    }
    out.push('s');
    out
}

pub fn format_time_delta(delta: &TimeDelta) -> String {
    let negative = *delta < TimeDelta::zero();
    // `abs` of any TimeDelta is representable and non-negative, so the
    // conversion cannot fail.
    let magnitude = delta.abs().to_std().unwrap_or(Duration::ZERO);
    format_duration(negative, magnitude)
}

impl ValuePrinter for DateTime<Utc> {
    fn print_value(&self) -> String {
        format_time(self)
    }
}

impl ValuePrinter for SystemTime {
    fn print_value(&self) -> String {
        format_system_time(self)
    }
}

impl ValuePrinter for TimeDelta {
    fn print_value(&self) -> String {
        format_time_delta(self)
    }
}

impl ValuePrinter for Duration {
    fn print_value(&self) -> String {
        format_duration(false, *self)
    }
}
