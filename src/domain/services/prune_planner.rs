//! Prune planner - decides which function versions a prune deletes
//!
//! Never deleted:
//! - `$LATEST` (and anything that is not a published number)
//! - the live version the deployed alias was just moved to
//! - any version another alias points at
//! - the newest `keep` published versions

use std::collections::HashSet;

use crate::domain::entities::{AliasInfo, FunctionVersion, PrunePolicy};

/// Versions to delete, oldest first. Empty when the policy is disabled.
pub fn plan_prune(
    versions: &[FunctionVersion],
    aliases: &[AliasInfo],
    live: &FunctionVersion,
    policy: &PrunePolicy,
) -> Vec<FunctionVersion> {
    if !policy.is_enabled() {
        return Vec::new();
    }

    let mut protected: HashSet<&str> = aliases
        .iter()
        .map(|a| a.function_version.as_str())
        .collect();
    protected.insert(live.as_str());

    let mut published: Vec<(u64, &FunctionVersion)> = versions
        .iter()
        .filter_map(|v| v.number().map(|n| (n, v)))
        .collect();
    published.sort_by_key(|(n, _)| *n);
    published.dedup_by_key(|(n, _)| *n);

    let retained_from = published.len().saturating_sub(policy.keep as usize);

    published
        .iter()
        .enumerate()
        .filter(|(i, (_, v))| *i < retained_from && !protected.contains(v.as_str()))
        .map(|(_, (_, v))| (*v).clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn versions(numbers: &[u64]) -> Vec<FunctionVersion> {
        std::iter::once(FunctionVersion::new("$LATEST"))
            .chain(numbers.iter().map(|n| FunctionVersion::new(n.to_string())))
            .collect()
    }

    fn names(plan: &[FunctionVersion]) -> Vec<&str> {
        plan.iter().map(FunctionVersion::as_str).collect()
    }

    #[test]
    fn disabled_policy_deletes_nothing() {
        let plan = plan_prune(
            &versions(&[1, 2, 3]),
            &[],
            &FunctionVersion::new("3"),
            &PrunePolicy::default(),
        );
        assert!(plan.is_empty());
    }

    #[test]
    fn alias_only_keeps_referenced_versions() {
        let aliases = vec![AliasInfo::new("staging", "2"), AliasInfo::new("prod", "4")];
        let plan = plan_prune(
            &versions(&[1, 2, 3, 4]),
            &aliases,
            &FunctionVersion::new("4"),
            &PrunePolicy {
                alias_only: true,
                keep: 0,
            },
        );
        assert_eq!(names(&plan), vec!["1", "3"]);
    }

    #[test]
    fn keep_retains_newest_versions() {
        let plan = plan_prune(
            &versions(&[1, 2, 3, 4, 5]),
            &[AliasInfo::new("prod", "5")],
            &FunctionVersion::new("5"),
            &PrunePolicy {
                alias_only: false,
                keep: 2,
            },
        );
        assert_eq!(names(&plan), vec!["1", "2", "3"]);
    }

    #[test]
    fn keep_never_deletes_older_aliased_version() {
        let plan = plan_prune(
            &versions(&[1, 2, 3, 4, 5]),
            &[AliasInfo::new("legacy", "1"), AliasInfo::new("prod", "5")],
            &FunctionVersion::new("5"),
            &PrunePolicy {
                alias_only: false,
                keep: 1,
            },
        );
        assert_eq!(names(&plan), vec!["2", "3", "4"]);
    }

    #[test]
    fn live_version_survives_even_if_alias_listing_is_stale() {
        // The alias listing still shows the old target.
        let plan = plan_prune(
            &versions(&[1, 2, 3]),
            &[AliasInfo::new("prod", "2")],
            &FunctionVersion::new("3"),
            &PrunePolicy {
                alias_only: true,
                keep: 0,
            },
        );
        assert_eq!(names(&plan), vec!["1"]);
    }

    #[test]
    fn numeric_order_not_lexical() {
        let plan = plan_prune(
            &versions(&[9, 10, 11]),
            &[],
            &FunctionVersion::new("11"),
            &PrunePolicy {
                alias_only: false,
                keep: 2,
            },
        );
        assert_eq!(names(&plan), vec!["9"]);
    }

    proptest! {
        #[test]
        fn never_deletes_live_latest_or_aliased(
            numbers in proptest::collection::btree_set(1u64..200, 0..40),
            aliased in proptest::collection::vec(1u64..200, 0..5),
            live in 1u64..200,
            alias_only in any::<bool>(),
            keep in 0u32..10,
        ) {
            let numbers: Vec<u64> = numbers.into_iter().collect();
            let aliases: Vec<AliasInfo> = aliased
                .iter()
                .enumerate()
                .map(|(i, v)| AliasInfo::new(format!("a{}", i), v.to_string()))
                .collect();
            let live = FunctionVersion::new(live.to_string());
            let policy = PrunePolicy { alias_only, keep };

            let plan = plan_prune(&versions(&numbers), &aliases, &live, &policy);

            prop_assert!(!plan.contains(&live));
            prop_assert!(plan.iter().all(|v| !v.is_latest()));
            for alias in &aliases {
                prop_assert!(!plan.contains(&alias.function_version));
            }
            let newest: Vec<u64> = numbers.iter().rev().take(keep as usize).copied().collect();
            for v in &plan {
                prop_assert!(!newest.contains(&v.number().unwrap()));
            }
        }
    }
}
