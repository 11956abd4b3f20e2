//! Property tests for selection, partitioning, and transport.

use std::collections::HashSet;

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use sieve_clustering::{Cluster, MemberRecord, SelectionMode};
use sieve_core::models::RecordId;

/// Members 0..n with arbitrary distances, optional likelihood, finalized.
fn build(distances: &[f64], likelihood: Option<&[f64]>) -> Cluster {
    build_with_confidence(distances, None, likelihood)
}

/// Like `build`, with a two-class confidence vector per member when `confidence` is given.
fn build_with_confidence(
    distances: &[f64],
    confidence: Option<&[f64]>,
    likelihood: Option<&[f64]>,
) -> Cluster {
    let mut cluster = Cluster::new();
    for (i, &d) in distances.iter().enumerate() {
        let record = MemberRecord::new(i as RecordId, d);
        let record = match confidence {
            Some(c) => record.with_confidence(vec![c[i], 1.0 - c[i]]),
            None => record,
        };
        cluster.add(record).unwrap();
    }
    cluster.finalize(0).unwrap();
    if let Some(l) = likelihood {
        cluster.set_likelihood(l[..distances.len()].to_vec()).unwrap();
    }
    cluster
}

fn mode_strategy() -> impl Strategy<Value = SelectionMode> {
    prop_oneof![
        Just(SelectionMode::Center),
        Just(SelectionMode::Anomalous),
        Just(SelectionMode::Random),
        Just(SelectionMode::Uncertain),
    ]
}

proptest! {
    #[test]
    fn prop_distances_track_members(distances in proptest::collection::vec(0.0f64..10.0, 0..40)) {
        let mut cluster = Cluster::new();
        for (i, &d) in distances.iter().enumerate() {
            cluster.add(MemberRecord::new(i as RecordId, d)).unwrap();
            prop_assert_eq!(cluster.distances().len(), cluster.members().len());
        }
    }

    #[test]
    fn prop_canonical_order_is_sorted_permutation(distances in proptest::collection::vec(0.0f64..10.0, 1..40)) {
        let cluster = build(&distances, None);
        let ordered = cluster.distances();
        prop_assert!(ordered.windows(2).all(|w| w[0] <= w[1]));
        let members: HashSet<RecordId> = cluster.members().into_iter().collect();
        prop_assert_eq!(members.len(), distances.len());
        let all = cluster.select(SelectionMode::All, 0, &HashSet::new()).unwrap();
        prop_assert_eq!(all, cluster.members());
    }

    #[test]
    fn prop_probability_ties_keep_insertion_order(
        confidence in proptest::collection::vec(prop_oneof![Just(0.6f64), Just(0.7), Just(0.8)], 1..40),
    ) {
        let distances = vec![1.0; confidence.len()];
        let cluster = build_with_confidence(&distances, Some(&confidence), None);
        let members = cluster.members();
        let probabilities = cluster.probabilities();
        prop_assert!(probabilities.windows(2).all(|w| w[0] <= w[1]));
        for i in 1..members.len() {
            if probabilities[i - 1] == probabilities[i] {
                prop_assert!(members[i - 1] < members[i]);
            }
        }
    }

    #[test]
    fn prop_selection_is_bounded_subset(
        distances in proptest::collection::vec(0.0f64..10.0, 1..40),
        likelihood in proptest::collection::vec(0.0f64..1.0, 40),
        with_likelihood in any::<bool>(),
        confidence in proptest::collection::vec(0.05f64..0.95, 40),
        with_confidence in any::<bool>(),
        excluded in proptest::collection::hash_set(0i64..40, 0..20),
        count in 0usize..50,
        mode in mode_strategy(),
        seed in any::<u64>(),
    ) {
        // Uncertain needs entropy, which only confidence vectors provide.
        let with_confidence = with_confidence || mode == SelectionMode::Uncertain;
        let cluster = build_with_confidence(
            &distances,
            with_confidence.then_some(&confidence[..]),
            with_likelihood.then_some(&likelihood[..]),
        );
        let members: HashSet<RecordId> = cluster.members().into_iter().collect();
        let available = members.difference(&excluded).count();

        let mut rng = StdRng::seed_from_u64(seed);
        let selected = cluster.select_with_rng(mode, count, &excluded, &mut rng).unwrap();
        let unique: HashSet<RecordId> = selected.iter().copied().collect();

        prop_assert_eq!(selected.len(), count.min(available));
        prop_assert_eq!(unique.len(), selected.len());
        for id in &selected {
            prop_assert!(members.contains(id));
            prop_assert!(!excluded.contains(id));
        }
    }

    #[test]
    fn prop_partition_sets_are_disjoint(
        distances in proptest::collection::vec(0.0f64..10.0, 0..40),
        likelihood in proptest::collection::vec(0.0f64..1.0, 40),
        with_likelihood in any::<bool>(),
        excluded in proptest::collection::hash_set(0i64..40, 0..10),
        total in 0usize..30,
        include_random in any::<bool>(),
        seed in any::<u64>(),
    ) {
        let cluster = build(&distances, with_likelihood.then_some(&likelihood[..]));
        let members: HashSet<RecordId> = cluster.members().into_iter().collect();
        let mut rng = StdRng::seed_from_u64(seed);
        let p = cluster.partition_with_rng(total, include_random, &excluded, &mut rng).unwrap();

        let all: HashSet<RecordId> = p.iter().collect();
        prop_assert_eq!(all.len(), p.len());
        prop_assert!(p.representative.len() <= total / 2);
        prop_assert!(p.anomalous.len() <= total - total / 2);
        prop_assert!(include_random || p.random.is_empty());
        for id in &all {
            prop_assert!(members.contains(id));
            prop_assert!(!excluded.contains(id));
        }
    }

    #[test]
    fn prop_transport_roundtrip(
        distances in proptest::collection::vec(0.0f64..10.0, 0..40),
        counter in 0u64..1000,
    ) {
        let mut cluster = Cluster::new();
        for (i, &d) in distances.iter().enumerate() {
            cluster.add(MemberRecord::new(i as RecordId, d)).unwrap();
        }
        let next = cluster.finalize(counter).unwrap();
        prop_assert_eq!(next, counter + 1);

        let json = cluster.to_json(&HashSet::new()).unwrap();
        let back = Cluster::from_json(&json).unwrap();
        prop_assert_eq!(back.members(), cluster.members());
        prop_assert_eq!(back.distances(), cluster.distances());
        prop_assert_eq!(back.label(), cluster.label());
    }
}
