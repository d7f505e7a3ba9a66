use chrono::{DateTime, Utc};

pub const EVENT_PASSED: &str = "The event has already passed!";

/// Renders the time remaining until the event as "{d}d {h}h {m}m".
pub fn time_until(event_date: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let diff = event_date - now;

    if diff.num_seconds() <= 0 {
        return EVENT_PASSED.to_string();
    }

    let days = diff.num_days();
    let hours = diff.num_hours() % 24;
    let minutes = diff.num_minutes() % 60;

    format!("{}d {}h {}m", days, hours, minutes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn future_event_breaks_down_into_days_hours_minutes() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let event = Utc.with_ymd_and_hms(2024, 6, 4, 15, 30, 0).unwrap();
        assert_eq!(time_until(event, now), "3d 3h 30m");
    }

    #[test]
    fn under_a_day_shows_zero_days() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let event = Utc.with_ymd_and_hms(2024, 6, 1, 13, 5, 0).unwrap();
        assert_eq!(time_until(event, now), "0d 1h 5m");
    }

    #[test]
    fn past_event_reports_passed() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let event = Utc.with_ymd_and_hms(2024, 5, 31, 12, 0, 0).unwrap();
        assert_eq!(time_until(event, now), EVENT_PASSED);
    }

    #[test]
    fn exact_instant_counts_as_passed() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        assert_eq!(time_until(now, now), EVENT_PASSED);
    }
}
