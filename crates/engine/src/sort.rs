//! Attendance ordering: a stable two-bucket sort, not a general comparator.

use crate::model::ParticipantSummary;

/// Participants whose total duration falls below this many minutes sort ahead
/// of everyone else.
pub const MIN_ATTENDANCE_MINUTES: f64 = 60.0;

/// The insufficient-attendance predicate. NaN durations compare false and
/// land in the sufficient bucket.
pub fn insufficient(summary: &ParticipantSummary) -> bool {
    summary.duration < MIN_ATTENDANCE_MINUTES
}

/// All insufficient-attendance summaries before all sufficient ones, each
/// bucket ordered by name. Stable, so equal names keep encounter order.
pub fn sort_summaries(summaries: &mut [ParticipantSummary]) {
    summaries.sort_by(|a, b| {
        insufficient(b)
            .cmp(&insufficient(a))
            .then_with(|| a.name().cmp(b.name()))
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(name: &str, duration: f64) -> ParticipantSummary {
        ParticipantSummary {
            user_name: Some(name.to_string()),
            user_email: None,
            join_time: None,
            leave_time: None,
            duration,
        }
    }

    fn names(summaries: &[ParticipantSummary]) -> Vec<&str> {
        summaries.iter().map(|s| s.name()).collect()
    }

    #[test]
    fn buckets_under_60_first_then_alphabetical() {
        let mut summaries = vec![
            summary("Zed", 30.0),
            summary("Amy", 90.0),
            summary("Bob", 45.0),
            summary("Cy", 120.0),
        ];
        sort_summaries(&mut summaries);
        assert_eq!(names(&summaries), vec!["Bob", "Zed", "Amy", "Cy"]);
    }

    #[test]
    fn exactly_60_is_sufficient() {
        let mut summaries = vec![summary("Amy", 60.0), summary("Zed", 59.9)];
        sort_summaries(&mut summaries);
        assert_eq!(names(&summaries), vec!["Zed", "Amy"]);
    }

    #[test]
    fn nan_duration_sorts_with_the_sufficient_bucket() {
        let mut summaries = vec![
            summary("Amy", f64::NAN),
            summary("Zed", 10.0),
            summary("Bob", 70.0),
        ];
        sort_summaries(&mut summaries);
        assert_eq!(names(&summaries), vec!["Zed", "Amy", "Bob"]);
    }

    #[test]
    fn nameless_sorts_as_empty_string() {
        let mut nameless = summary("", 10.0);
        nameless.user_name = None;
        let mut summaries = vec![summary("Amy", 10.0), nameless];
        sort_summaries(&mut summaries);
        assert_eq!(names(&summaries), vec!["", "Amy"]);
    }
}
