//! Session aggregation: fold one identity group into a participant summary.

use chrono::NaiveDateTime;

use crate::model::{AttendanceRecord, ParticipantSummary};

/// Timestamp formats seen across export variants, tried in order.
const TIME_FORMATS: [&str; 5] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%m/%d/%Y %I:%M:%S %p",
    "%m/%d/%Y %H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
];

/// Parse one exported timestamp. `None` covers both absent and unparsable
/// values and poisons the min/max aggregate for the whole group.
pub fn parse_time(value: Option<&str>) -> Option<NaiveDateTime> {
    let value = value?;
    TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
}

/// Duration minutes as f64. Absent or unparsable fields become NaN, and NaN
/// contaminates the participant's whole sum.
fn parse_duration(value: Option<&str>) -> f64 {
    value
        .and_then(|v| v.trim().parse::<f64>().ok())
        .unwrap_or(f64::NAN)
}

/// Fold one identity group into its summary. Name and email take the first
/// non-empty value in group order; join is the earliest parsed timestamp,
/// leave the latest; duration is the sum of all session durations in minutes.
pub fn summarize(group: &[AttendanceRecord]) -> ParticipantSummary {
    let user_name = group.iter().find_map(|r| r.name()).map(str::to_string);
    let user_email = group.iter().find_map(|r| r.email()).map(str::to_string);

    let joins: Option<Vec<NaiveDateTime>> = group
        .iter()
        .map(|r| parse_time(r.join_time.as_deref()))
        .collect();
    let leaves: Option<Vec<NaiveDateTime>> = group
        .iter()
        .map(|r| parse_time(r.leave_time.as_deref()))
        .collect();

    ParticipantSummary {
        user_name,
        user_email,
        join_time: joins.and_then(|times| times.into_iter().min()),
        leave_time: leaves.and_then(|times| times.into_iter().max()),
        duration: group
            .iter()
            .map(|r| parse_duration(r.duration.as_deref()))
            .sum(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(name: &str, join: &str, leave: &str, duration: &str) -> AttendanceRecord {
        AttendanceRecord {
            user_name: Some(name.to_string()),
            user_email: Some(String::new()),
            join_time: Some(join.to_string()),
            leave_time: Some(leave.to_string()),
            duration: Some(duration.to_string()),
        }
    }

    fn at(value: &str) -> NaiveDateTime {
        parse_time(Some(value)).unwrap()
    }

    #[test]
    fn earliest_join_latest_leave_summed_duration() {
        let group = vec![
            session("Ann Lee", "2024-01-01T10:00:00", "2024-01-01T10:30:00", "30"),
            session("Ann Lee", "2024-01-01T10:40:00", "2024-01-01T11:00:00", "20"),
        ];
        let summary = summarize(&group);
        assert_eq!(summary.join_time, Some(at("2024-01-01T10:00:00")));
        assert_eq!(summary.leave_time, Some(at("2024-01-01T11:00:00")));
        assert_eq!(summary.duration, 50.0);
    }

    #[test]
    fn first_non_empty_name_wins() {
        let group = vec![
            session("", "2024-01-01T10:00:00", "2024-01-01T10:10:00", "10"),
            session("Jo", "2024-01-01T10:20:00", "2024-01-01T10:40:00", "20"),
        ];
        let summary = summarize(&group);
        assert_eq!(summary.user_name.as_deref(), Some("Jo"));
        assert_eq!(summary.duration, 30.0);
    }

    #[test]
    fn aggregation_is_order_independent_apart_from_tiebreak() {
        let a = session("Jo", "2024-01-01T10:20:00", "2024-01-01T10:40:00", "20");
        let b = session("Jo", "2024-01-01T10:00:00", "2024-01-01T10:10:00", "10");

        let forward = summarize(&[a.clone(), b.clone()]);
        let backward = summarize(&[b, a]);
        assert_eq!(forward.join_time, backward.join_time);
        assert_eq!(forward.leave_time, backward.leave_time);
        assert_eq!(forward.duration, backward.duration);
    }

    #[test]
    fn slash_and_am_pm_timestamps_parse() {
        assert!(parse_time(Some("01/05/2024 09:30:00 AM")).is_some());
        assert!(parse_time(Some("2024-01-05 09:30:00")).is_some());
        assert!(parse_time(Some("not a time")).is_none());
    }

    // Known sharp edge: a single bad duration field poisons the participant's
    // whole total. Kept as-is; downstream consumers rely on observing it.
    #[test]
    fn bad_duration_poisons_the_sum() {
        let group = vec![
            session("Ann Lee", "2024-01-01T10:00:00", "2024-01-01T10:30:00", "30"),
            session("Ann Lee", "2024-01-01T10:40:00", "2024-01-01T11:00:00", ""),
        ];
        assert!(summarize(&group).duration.is_nan());
    }

    #[test]
    fn bad_timestamp_poisons_min_max() {
        let group = vec![
            session("Ann Lee", "2024-01-01T10:00:00", "2024-01-01T10:30:00", "30"),
            session("Ann Lee", "garbage", "2024-01-01T11:00:00", "20"),
        ];
        let summary = summarize(&group);
        assert_eq!(summary.join_time, None);
        assert_eq!(summary.leave_time, Some(at("2024-01-01T11:00:00")));
    }
}
