//! Property tests over random reference strings.

use std::collections::HashSet;

use pagesim::{run_simulation, AccessStatus, Page, PolicyKind};
use proptest::prelude::*;

/// Small page alphabet so that hits and evictions are both common.
fn reference_strategy() -> impl Strategy<Value = Vec<Page>> {
    prop::collection::vec((0i64..7).prop_map(Page::from), 1..40)
}

proptest! {
    #[test]
    fn counts_and_ratios_are_consistent(reference in reference_strategy(), frames in 1usize..6) {
        for kind in PolicyKind::ALL {
            let summary = run_simulation(&reference, frames, kind.as_str()).unwrap();

            prop_assert_eq!(summary.hits + summary.faults, reference.len());
            prop_assert_eq!(summary.steps.len(), reference.len());
            prop_assert!((summary.hit_ratio + summary.fault_ratio - 1.0).abs() <= 0.0100001);
        }
    }

    #[test]
    fn residency_stays_bounded_and_distinct(reference in reference_strategy(), frames in 1usize..6) {
        for kind in PolicyKind::ALL {
            let summary = run_simulation(&reference, frames, kind.as_str()).unwrap();

            let mut previous: Vec<Page> = Vec::new();
            for step in &summary.steps {
                prop_assert!(step.memory.len() <= frames);

                let distinct: HashSet<&Page> = step.memory.iter().collect();
                prop_assert_eq!(distinct.len(), step.memory.len());
                prop_assert!(step.memory.contains(&step.page));

                // A hit is exactly "was already resident".
                prop_assert_eq!(step.status == AccessStatus::Hit, previous.contains(&step.page));
                if step.status == AccessStatus::Hit {
                    prop_assert_eq!(&step.memory, &previous);
                }
                previous = step.memory.clone();
            }
        }
    }

    #[test]
    fn runs_are_deterministic(reference in reference_strategy(), frames in 1usize..6) {
        for kind in PolicyKind::ALL {
            let first = run_simulation(&reference, frames, kind.as_str()).unwrap();
            let second = run_simulation(&reference, frames, kind.as_str()).unwrap();
            prop_assert_eq!(first, second);
        }
    }

    #[test]
    fn optimal_never_loses(reference in reference_strategy(), frames in 1usize..6) {
        let optimal = run_simulation(&reference, frames, "Optimal").unwrap().faults;
        for kind in PolicyKind::ALL {
            let faults = run_simulation(&reference, frames, kind.as_str()).unwrap().faults;
            prop_assert!(optimal <= faults, "Optimal {} > {} {}", optimal, kind, faults);
        }
    }

    #[test]
    fn single_frame_policies_agree(reference in reference_strategy()) {
        let faults: Vec<usize> = PolicyKind::ALL
            .iter()
            .map(|kind| run_simulation(&reference, 1, kind.as_str()).unwrap().faults)
            .collect();
        prop_assert!(faults.windows(2).all(|w| w[0] == w[1]), "{:?}", faults);
    }
}
