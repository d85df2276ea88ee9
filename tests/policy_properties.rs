//! Property tests over random reference traces.

use std::collections::HashSet;

use pagesim::{compare, simulate, PageId, PolicyKind};
use proptest::prelude::*;

fn trace_strategy() -> impl Strategy<Value = Vec<PageId>> {
    prop::collection::vec((0i64..8).prop_map(PageId::new), 1..64)
}

fn faults(policy: PolicyKind, trace: &[PageId], frame_size: usize) -> u64 {
    simulate(policy, trace, frame_size).unwrap().result.faults
}

proptest! {
    /// Every reference is either a hit or a fault, and the ratios cover it.
    #[test]
    fn prop_counts_cover_trace(trace in trace_strategy(), frame_size in 1usize..6) {
        for policy in PolicyKind::ALL {
            let sim = simulate(policy, &trace, frame_size).unwrap();
            let r = sim.result;

            prop_assert_eq!(r.hits + r.faults, trace.len() as u64);
            prop_assert_eq!(r.total_references, trace.len() as u64);
            prop_assert!((r.hit_ratio + r.fault_ratio - 1.0).abs() < 1e-9);
            prop_assert!(r.evictions <= r.faults);
            prop_assert_eq!(sim.steps.len(), trace.len());
        }
    }

    /// Snapshots never exceed the pool and never hold a page twice.
    #[test]
    fn prop_snapshots_respect_capacity(trace in trace_strategy(), frame_size in 1usize..6) {
        for policy in PolicyKind::ALL {
            let sim = simulate(policy, &trace, frame_size).unwrap();
            for step in &sim.steps {
                prop_assert!(step.frames.len() <= frame_size);
                let unique: HashSet<_> = step.frames.iter().collect();
                prop_assert_eq!(unique.len(), step.frames.len());
                prop_assert!(step.frames.contains(&step.reference));
            }
        }
    }

    /// With room for every distinct page, only first references fault.
    #[test]
    fn prop_working_set_fits(trace in trace_strategy(), extra in 0usize..3) {
        let distinct: HashSet<_> = trace.iter().collect();
        let frame_size = distinct.len() + extra;

        for policy in PolicyKind::ALL {
            prop_assert_eq!(faults(policy, &trace, frame_size), distinct.len() as u64);
        }
    }

    /// Same inputs, same output.
    #[test]
    fn prop_deterministic(trace in trace_strategy(), frame_size in 1usize..6) {
        for policy in PolicyKind::ALL {
            let a = simulate(policy, &trace, frame_size).unwrap();
            let b = simulate(policy, &trace, frame_size).unwrap();
            prop_assert_eq!(a, b);
        }
    }

    /// Optimal never faults more than FIFO or LRU.
    #[test]
    fn prop_optimal_is_lower_bound(trace in trace_strategy(), frame_size in 1usize..6) {
        let table = compare(&trace, frame_size).unwrap();
        let opt = table.get(PolicyKind::Optimal).unwrap().faults;

        prop_assert!(opt <= table.get(PolicyKind::Fifo).unwrap().faults);
        prop_assert!(opt <= table.get(PolicyKind::Lru).unwrap().faults);
    }

    /// LRU and Optimal are stack algorithms: more frames never hurt.
    #[test]
    fn prop_stack_algorithms_monotonic(trace in trace_strategy(), frame_size in 1usize..6) {
        for policy in [PolicyKind::Lru, PolicyKind::Optimal] {
            prop_assert!(
                faults(policy, &trace, frame_size + 1) <= faults(policy, &trace, frame_size)
            );
        }
    }

    /// With one frame, a reference faults iff it differs from the previous one.
    #[test]
    fn prop_single_frame(trace in trace_strategy()) {
        let changes = trace.windows(2).filter(|w| w[0] != w[1]).count() as u64;
        for policy in PolicyKind::ALL {
            prop_assert_eq!(faults(policy, &trace, 1), 1 + changes);
        }
    }
}
