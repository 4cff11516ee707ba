//! Identity key resolution.
//!
//! Exports frequently show the same person as `"Jane Doe"` in one row and
//! `"Doe Jane"` or `"jane.doe"` in another (re-joins, different naming
//! conventions). Keys that tokenize into the same two name tokens, under any
//! separator and either order, resolve to one participant. The registry is
//! checked against literal historical keys, never recomputed, so the
//! canonical form of an identity is whichever key form appeared first.

use std::collections::HashMap;

use crate::model::AttendanceRecord;

/// Separator priority for splitting an identity key into name tokens.
pub const SEPARATORS: [char; 3] = [' ', '.', '-'];

/// Split a key into exactly two non-empty tokens using the first separator
/// that yields them. Keys that never split cleanly are atomic: a one-token
/// list that cannot be permuted and only matches itself.
pub fn split_key(key: &str) -> Vec<&str> {
    for sep in SEPARATORS {
        let tokens: Vec<&str> = key.split(sep).filter(|t| !t.is_empty()).collect();
        if tokens.len() == 2 {
            return tokens;
        }
    }
    vec![key]
}

/// Per-run resolver owning the key registry and group map, constructed fresh
/// per invocation. Group membership is frozen once a key resolves: later
/// records never move between groups.
#[derive(Debug, Default)]
pub struct IdentityResolver {
    /// Canonical keys in first-seen order.
    order: Vec<String>,
    groups: HashMap<String, Vec<AttendanceRecord>>,
}

impl IdentityResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve a candidate key against the registry: literal hit first, then
    /// both token orders crossed with every separator, in order-then-separator
    /// priority. `None` means the candidate is novel.
    fn resolve(&self, key: &str) -> Option<String> {
        if self.groups.contains_key(key) {
            return Some(key.to_string());
        }

        let tokens = split_key(key);
        if tokens.len() != 2 {
            // Atomic: every rejoin is the key itself, already checked.
            return None;
        }

        let orders = [[tokens[0], tokens[1]], [tokens[1], tokens[0]]];
        for order in &orders {
            for sep in SEPARATORS {
                let variant = format!("{}{sep}{}", order[0], order[1]);
                if self.groups.contains_key(&variant) {
                    return Some(variant);
                }
            }
        }

        None
    }

    /// Route a record into its identity group, registering the literal key as
    /// a new canonical form when no variant is known. Returns false when the
    /// record carries no identity and is skipped.
    pub fn insert(&mut self, record: AttendanceRecord) -> bool {
        let Some(key) = record.identity_key() else {
            return false;
        };
        let key = key.to_string();

        match self.resolve(&key) {
            Some(canonical) => {
                if let Some(group) = self.groups.get_mut(&canonical) {
                    group.push(record);
                }
            }
            None => {
                self.order.push(key.clone());
                self.groups.insert(key, vec![record]);
            }
        }
        true
    }

    /// Consume the resolver, yielding identity groups in first-seen order.
    /// Records inside each group keep their encounter order.
    pub fn into_groups(mut self) -> Vec<Vec<AttendanceRecord>> {
        let order = std::mem::take(&mut self.order);
        order
            .into_iter()
            .filter_map(|key| self.groups.remove(&key))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(name: &str) -> AttendanceRecord {
        AttendanceRecord {
            user_name: Some(name.to_string()),
            user_email: None,
            join_time: None,
            leave_time: None,
            duration: None,
        }
    }

    fn group_names(resolver: IdentityResolver) -> Vec<Vec<String>> {
        resolver
            .into_groups()
            .into_iter()
            .map(|group| {
                group
                    .into_iter()
                    .map(|r| r.user_name.unwrap_or_default())
                    .collect()
            })
            .collect()
    }

    #[test]
    fn split_prefers_space_then_period_then_hyphen() {
        assert_eq!(split_key("Jane Doe"), vec!["Jane", "Doe"]);
        assert_eq!(split_key("jane.doe"), vec!["jane", "doe"]);
        assert_eq!(split_key("jane-doe"), vec!["jane", "doe"]);
        // Space wins even when another separator is present.
        assert_eq!(split_key("Jane Doe-Smith"), vec!["Jane", "Doe-Smith"]);
    }

    #[test]
    fn split_atomic_keys() {
        assert_eq!(split_key("acme"), vec!["acme"]);
        // Three tokens under every separator: atomic.
        assert_eq!(split_key("a b c"), vec!["a b c"]);
        assert_eq!(split_key("one.two.three"), vec!["one.two.three"]);
    }

    #[test]
    fn reordered_tokens_share_a_group() {
        let mut resolver = IdentityResolver::new();
        resolver.insert(named("Jane Doe"));
        resolver.insert(named("Doe Jane"));

        let groups = group_names(resolver);
        assert_eq!(groups, vec![vec!["Jane Doe".to_string(), "Doe Jane".to_string()]]);
    }

    #[test]
    fn separator_variants_share_a_group() {
        let mut resolver = IdentityResolver::new();
        resolver.insert(named("jane.doe"));
        resolver.insert(named("jane doe"));
        resolver.insert(named("doe-jane"));

        let groups = group_names(resolver);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].len(), 3);
    }

    #[test]
    fn canonical_key_is_first_seen_form() {
        let mut resolver = IdentityResolver::new();
        resolver.insert(named("Doe Jane"));
        resolver.insert(named("Jane Doe"));

        let groups = group_names(resolver);
        // First-seen form leads the single group.
        assert_eq!(groups[0][0], "Doe Jane");
    }

    #[test]
    fn atomic_keys_never_permute() {
        let mut resolver = IdentityResolver::new();
        resolver.insert(named("acme"));
        resolver.insert(named("acme corp"));
        resolver.insert(named("acme"));

        let groups = group_names(resolver);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0], vec!["acme".to_string(), "acme".to_string()]);
        assert_eq!(groups[1], vec!["acme corp".to_string()]);
    }

    #[test]
    fn distinct_pairs_stay_apart() {
        let mut resolver = IdentityResolver::new();
        resolver.insert(named("Jane Doe"));
        resolver.insert(named("Jane Roe"));

        assert_eq!(group_names(resolver).len(), 2);
    }

    #[test]
    fn rows_without_identity_are_skipped() {
        let mut resolver = IdentityResolver::new();
        assert!(!resolver.insert(named("")));
        assert!(resolver.insert(named("Jane Doe")));
        assert_eq!(group_names(resolver).len(), 1);
    }

    #[test]
    fn email_key_groups_reconnects() {
        let mut resolver = IdentityResolver::new();
        let mut first = named("Jane Doe");
        first.user_email = Some("jane@example.com".to_string());
        let mut second = named("");
        second.user_email = Some("jane@example.com".to_string());

        resolver.insert(first);
        resolver.insert(second);
        assert_eq!(resolver.into_groups().len(), 1);
    }
}
