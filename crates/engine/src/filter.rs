//! Ignore filter: drop summaries whose name matches an exclusion pattern.

use regex::{Regex, RegexBuilder};

use crate::error::RollupError;
use crate::model::ParticipantSummary;

/// Compiled case-insensitive ignore patterns, in supplied order. An empty
/// pattern list is a no-op filter.
#[derive(Debug, Default)]
pub struct IgnoreFilter {
    patterns: Vec<Regex>,
}

impl IgnoreFilter {
    /// Compile all patterns eagerly; a bad pattern fails the run before any
    /// rows are processed.
    pub fn compile(patterns: &[String]) -> Result<Self, RollupError> {
        let mut compiled = Vec::with_capacity(patterns.len());
        for pattern in patterns {
            let regex = RegexBuilder::new(pattern)
                .case_insensitive(true)
                .build()
                .map_err(|e| RollupError::PatternParse {
                    pattern: pattern.clone(),
                    message: e.to_string(),
                })?;
            compiled.push(regex);
        }
        Ok(Self { patterns: compiled })
    }

    /// True when the summary's name matches any pattern. Unanchored, so plain
    /// text patterns behave as substring tests.
    pub fn matches(&self, summary: &ParticipantSummary) -> bool {
        self.patterns.iter().any(|p| p.is_match(summary.name()))
    }

    /// Drop matching summaries, preserving survivor order.
    pub fn apply(&self, summaries: Vec<ParticipantSummary>) -> Vec<ParticipantSummary> {
        if self.patterns.is_empty() {
            return summaries;
        }
        summaries.into_iter().filter(|s| !self.matches(s)).collect()
    }
}
