use chrono::NaiveDateTime;
use serde::Serialize;

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

/// A single join/leave session row from an exported attendance CSV.
///
/// Fields are raw strings; type coercion happens in the aggregator. Missing
/// trailing CSV values are `None`, and empty strings count as absent wherever
/// presence matters.
#[derive(Debug, Clone, PartialEq)]
pub struct AttendanceRecord {
    pub user_name: Option<String>,
    pub user_email: Option<String>,
    pub join_time: Option<String>,
    pub leave_time: Option<String>,
    pub duration: Option<String>,
}

impl AttendanceRecord {
    /// Name with the empty string treated as absent.
    pub fn name(&self) -> Option<&str> {
        non_empty(&self.user_name)
    }

    /// Email with the empty string treated as absent.
    pub fn email(&self) -> Option<&str> {
        non_empty(&self.user_email)
    }

    /// Grouping key: email when present, else name. `None` means the row
    /// carries no identity and never enters a group.
    pub fn identity_key(&self) -> Option<&str> {
        self.email().or_else(|| self.name())
    }
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.is_empty())
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

/// Aggregated attendance for one resolved participant.
///
/// `join_time`/`leave_time` are `None` when any session row's timestamp failed
/// to parse; `duration` is NaN when any duration field did. One bad field
/// poisons that participant's aggregate.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_email: Option<String>,
    pub join_time: Option<NaiveDateTime>,
    pub leave_time: Option<NaiveDateTime>,
    pub duration: f64,
}

impl ParticipantSummary {
    /// Display name, empty when absent. Used for filtering and ordering.
    pub fn name(&self) -> &str {
        self.user_name.as_deref().unwrap_or("")
    }
}

// ---------------------------------------------------------------------------
// Run result
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RollupCounts {
    /// Session rows extracted from the input.
    pub rows: usize,
    /// Rows with neither name nor email, excluded from grouping.
    pub skipped_no_identity: usize,
    /// Participants surviving the ignore filter.
    pub participants: usize,
    /// Participants dropped by the ignore filter.
    pub ignored: usize,
    /// Surviving participants below the attendance threshold.
    pub insufficient: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RollupMeta {
    pub config_name: String,
    pub engine_version: String,
    pub run_at: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RollupResult {
    pub meta: RollupMeta,
    pub summary: RollupCounts,
    pub participants: Vec<ParticipantSummary>,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
