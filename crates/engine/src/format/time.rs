//! Cooldown and relative-time strings

use chrono::{DateTime, Utc};
use hivekit_core::parse_chain_time;

/// Format remaining regeneration time
///
/// `"Full"` at or below zero, `"{d}d {h}h"` once more than 24 whole hours
/// remain, `"{h}h {m}m"` from one hour, `"{m}m"` below that.
/// Exactly 24 hours renders as `"24h 0m"`.
pub fn format_cooldown(seconds: i64) -> String {
    if seconds <= 0 {
        return "Full".to_string();
    }

    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;

    if hours > 24 {
        format!("{}d {}h", hours / 24, hours % 24)
    } else if hours > 0 {
        format!("{}h {}m", hours, minutes)
    } else {
        format!("{}m", minutes)
    }
}

/// "Time ago" string for a chain timestamp, relative to now
pub fn relative_time(timestamp: &str) -> String {
    relative_time_at(timestamp, Utc::now())
}

/// "Time ago" string for a chain timestamp, relative to `now`
///
/// Zone-less timestamps are read as UTC. Older than 30 days falls back to
/// the absolute date as `M/D/YYYY`; unparseable input gives `"unknown"`.
pub fn relative_time_at(timestamp: &str, now: DateTime<Utc>) -> String {
    let Some(then) = parse_chain_time(timestamp) else {
        return "unknown".to_string();
    };

    let minutes = (now - then).num_minutes().max(0);
    if minutes < 60 {
        return format!("{}m ago", minutes);
    }

    let hours = minutes / 60;
    if hours < 24 {
        return format!("{}h ago", hours);
    }

    let days = hours / 24;
    if days < 30 {
        return format!("{}d ago", days);
    }

    then.format("%-m/%-d/%Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_cooldown_full() {
        assert_eq!(format_cooldown(0), "Full");
        assert_eq!(format_cooldown(-30), "Full");
    }

    #[test]
    fn test_cooldown_day_boundary() {
        assert_eq!(format_cooldown(86_400), "24h 0m");
        assert_eq!(format_cooldown(86_400 + 3_599), "24h 59m");
        assert_eq!(format_cooldown(90_000), "1d 1h");
        assert_eq!(format_cooldown(432_000), "5d 0h");
    }

    #[test]
    fn test_cooldown_hours_and_minutes() {
        assert_eq!(format_cooldown(3_600), "1h 0m");
        assert_eq!(format_cooldown(5_400), "1h 30m");
        assert_eq!(format_cooldown(3_599), "59m");
        assert_eq!(format_cooldown(59), "0m");
    }

    #[test]
    fn test_relative_minutes_hours_days() {
        assert_eq!(relative_time_at("2024-03-10T11:55:00", now()), "5m ago");
        assert_eq!(relative_time_at("2024-03-10T12:00:00", now()), "0m ago");
        assert_eq!(relative_time_at("2024-03-10T09:00:00", now()), "3h ago");
        assert_eq!(relative_time_at("2024-03-08T12:00:00", now()), "2d ago");
        assert_eq!(relative_time_at("2024-02-10T12:00:00", now()), "29d ago");
    }

    #[test]
    fn test_relative_treats_naive_as_utc() {
        // 11:30 UTC is 30 minutes before now regardless of local zone
        assert_eq!(relative_time_at("2024-03-10T11:30:00", now()), "30m ago");
    }

    #[test]
    fn test_relative_absolute_fallback() {
        assert_eq!(relative_time_at("2023-12-25T08:00:00", now()), "12/25/2023");
        assert_eq!(relative_time_at("2024-02-01T00:00:00", now()), "2/1/2024");
    }

    #[test]
    fn test_relative_future_and_invalid() {
        assert_eq!(relative_time_at("2024-03-10T13:00:00", now()), "0m ago");
        assert_eq!(relative_time_at("not a date", now()), "unknown");
        assert_eq!(relative_time_at("", now()), "unknown");
    }
}
