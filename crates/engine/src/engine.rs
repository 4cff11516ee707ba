//! Pipeline orchestration. Data flows strictly forward: records, then
//! identity groups, then summaries, then the filtered and sorted result.

use crate::aggregate::summarize;
use crate::config::RollupConfig;
use crate::error::RollupError;
use crate::filter::IgnoreFilter;
use crate::identity::IdentityResolver;
use crate::model::{AttendanceRecord, RollupCounts, RollupMeta, RollupResult};
use crate::sort::{insufficient, sort_summaries};

/// Run the rollup per config. Each run owns its own resolver, groups, and
/// summaries; nothing is shared across invocations.
pub fn run(config: &RollupConfig, records: &[AttendanceRecord]) -> Result<RollupResult, RollupError> {
    let filter = IgnoreFilter::compile(&config.ignore.patterns)?;

    let mut resolver = IdentityResolver::new();
    let mut skipped_no_identity = 0usize;
    for record in records {
        if !resolver.insert(record.clone()) {
            skipped_no_identity += 1;
        }
    }

    let groups = resolver.into_groups();
    let grouped = groups.len();

    // Summaries are computed only after all records are grouped.
    let summaries: Vec<_> = groups.iter().map(|group| summarize(group)).collect();

    let mut participants = filter.apply(summaries);
    let ignored = grouped - participants.len();
    sort_summaries(&mut participants);

    let insufficient_count = participants.iter().filter(|s| insufficient(s)).count();

    Ok(RollupResult {
        meta: RollupMeta {
            config_name: config.name.clone(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            run_at: chrono::Utc::now().to_rfc3339(),
        },
        summary: RollupCounts {
            rows: records.len(),
            skipped_no_identity,
            participants: participants.len(),
            ignored,
            insufficient: insufficient_count,
        },
        participants,
    })
}
