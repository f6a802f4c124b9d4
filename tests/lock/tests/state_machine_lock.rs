//! State-machine world lock tests.
//!
//! Proves, for `A → [B]`, `B → [C]`, `C → []` (terminal) at level 3:
//! 1. A receives at least one impossible reverse edge (no predecessor)
//! 2. B never receives an impossible edge (predecessor exists), and C's
//!    reverse folds back along the declared `B → C` are not flagged
//! 3. Edge totals, coverage and regime distribution are exact
//! 4. Critical paths are heaviest-first and capped by policy
//! 5. One contract test per impossible edge, with stable unique ids
//! 6. Caller states are never modified

use std::collections::BTreeSet;

use dragonfold_harness::error::HarnessError;
use dragonfold_harness::policy::StateMachinePolicy;
use dragonfold_harness::worlds::state_machine::{
    contract_tests_from, fold_state_machine, ExpectedError, StateBoundaryReport, StateMachineState,
    StateMachineWorld, StateProbe,
};
use dragonfold_kernel::grammar::generator::MAX_LEVEL;
use dragonfold_kernel::path::Direction;
use dragonfold_search::explorer::BoundaryExplorer;
use lock_tests::fixtures::{chain_states, EXAMPLE_LEVEL};
use serde_json::json;

const EPS: f64 = 1e-12;

fn fold_chain(policy: &StateMachinePolicy) -> StateBoundaryReport {
    let mut explorer = BoundaryExplorer::default();
    fold_state_machine(&mut explorer, &chain_states(), EXAMPLE_LEVEL, policy).unwrap()
}

#[test]
fn a_has_impossible_reverse_edge_and_b_never_does() {
    let report = fold_chain(&StateMachinePolicy::default());
    let from_a: Vec<_> = report
        .impossible_edges
        .iter()
        .filter(|e| e.from.id == "A")
        .collect();
    assert!(!from_a.is_empty());
    for edge in &from_a {
        assert_eq!(edge.fold.direction, Direction::Right);
        assert_eq!(
            edge.to,
            StateProbe::SyntheticImpossible {
                origin_id: "A".into()
            }
        );
    }
    assert!(report.impossible_edges.iter().all(|e| e.from.id != "B"));
}

#[test]
fn level_three_totals_are_exact() {
    // Level 3 directions: L L R L L R R F.
    let report = fold_chain(&StateMachinePolicy::default());
    assert_eq!(report.edge_count, 19);
    assert_eq!(report.impossible_edges.len(), 3);
    assert!((report.exploration_coverage - 19.0 / 9.0).abs() < EPS);
    let dist = report.regime_distribution;
    assert!((dist.exploration - 8.0 / 19.0).abs() < EPS);
    assert!((dist.stabilization - 9.0 / 19.0).abs() < EPS);
    assert!((dist.convergence - 2.0 / 19.0).abs() < EPS);
}

#[test]
fn terminal_state_reversing_declared_transition_is_not_flagged() {
    let report = fold_chain(&StateMachinePolicy::default());
    assert!(report.impossible_edges.iter().all(|e| e.from.id == "A"));

    // C still reverses to B on every right fold; those edges are explored.
    let mut explorer = BoundaryExplorer::default();
    let states = chain_states();
    let world = StateMachineWorld::new(&states, &StateMachinePolicy::default());
    let exploration = explorer.explore(&states, EXAMPLE_LEVEL, &world).unwrap();
    let c_reverse: Vec<String> = exploration
        .edges
        .iter()
        .filter(|e| e.from.id == "C" && e.fold.direction == Direction::Right)
        .map(|e| e.to.id())
        .collect();
    assert_eq!(c_reverse, vec!["B", "B", "B"]);
    assert!(exploration
        .edges
        .iter()
        .filter(|e| e.from.id == "C")
        .all(|e| !e.is_impossible));
}

#[test]
fn critical_paths_are_heaviest_first_and_capped() {
    let report = fold_chain(&StateMachinePolicy::default());
    let weights: Vec<f64> = report.critical_paths.iter().map(|p| p.weight).collect();
    assert_eq!(weights.len(), 3);
    assert!(weights.windows(2).all(|w| w[0] >= w[1]));
    assert_eq!(report.critical_paths[0].from, "A");
    assert_eq!(report.critical_paths[0].to, "A_reverse_IMPOSSIBLE");

    let capped = fold_chain(&StateMachinePolicy {
        critical_path_limit: 2,
        ..StateMachinePolicy::default()
    });
    assert_eq!(capped.critical_paths.len(), 2);
    assert_eq!(capped.critical_paths, report.critical_paths[..2]);
}

#[test]
fn contract_tests_describe_every_impossible_edge() {
    let report = fold_chain(&StateMachinePolicy::default());
    let tests = contract_tests_from(&report.impossible_edges);
    assert_eq!(tests.len(), report.impossible_edges.len());

    let names: BTreeSet<&str> = tests.iter().map(|t| t.test_name.as_str()).collect();
    assert_eq!(
        names.into_iter().collect::<Vec<_>>(),
        vec!["should_reject_transition_A_to_A_reverse_IMPOSSIBLE"]
    );
    let priorities: BTreeSet<u64> = tests.iter().map(|t| t.priority).collect();
    assert_eq!(priorities.into_iter().collect::<Vec<_>>(), vec![110, 127, 133]);
    assert!(tests
        .iter()
        .all(|t| t.expected_error == ExpectedError::InvalidStateTransition));

    let ids: BTreeSet<_> = tests.iter().map(|t| t.id.clone()).collect();
    assert_eq!(ids.len(), tests.len());
    assert_eq!(contract_tests_from(&report.impossible_edges), tests);
}

#[test]
fn flagged_targets_are_impossible_edges() {
    let states = vec![
        StateMachineState::new("start", ["broken", "shaky"]),
        StateMachineState::new("broken", Vec::<String>::new())
            .with_data("impossible", json!(true)),
        StateMachineState::new("shaky", Vec::<String>::new()).with_validity(0.2),
    ];
    let mut explorer = BoundaryExplorer::default();
    let report =
        fold_state_machine(&mut explorer, &states, 2, &StateMachinePolicy::default()).unwrap();
    let left_targets: BTreeSet<String> = report
        .impossible_edges
        .iter()
        .filter(|e| e.from.id == "start" && e.fold.direction == Direction::Left)
        .map(|e| e.to.id())
        .collect();
    assert!(left_targets.contains("broken") || left_targets.contains("shaky"));

    let lenient = StateMachinePolicy {
        validity_floor: 0.0,
        ..StateMachinePolicy::default()
    };
    let report = fold_state_machine(&mut explorer, &states, 2, &lenient).unwrap();
    assert!(report.impossible_edges.iter().all(|e| e.to.id() != "shaky"));
}

#[test]
fn caller_states_are_not_modified() {
    let states = chain_states();
    let before = states.clone();
    let mut explorer = BoundaryExplorer::default();
    let _ = fold_state_machine(&mut explorer, &states, 6, &StateMachinePolicy::default()).unwrap();
    assert_eq!(states, before);
}

#[test]
fn empty_state_set_is_trivial() {
    let mut explorer = BoundaryExplorer::default();
    let report =
        fold_state_machine(&mut explorer, &[], 5, &StateMachinePolicy::default()).unwrap();
    assert_eq!(report.edge_count, 0);
    assert!(report.critical_paths.is_empty());
    assert!(report.regime_distribution.exploration.abs() < EPS);
}

#[test]
fn default_explorer_accepts_large_state_sets() {
    let states: Vec<StateMachineState> = (0..1100)
        .map(|i| StateMachineState::new(format!("s{i}"), [format!("s{}", (i + 1) % 1100)]))
        .collect();
    let mut explorer = BoundaryExplorer::default();
    let report =
        fold_state_machine(&mut explorer, &states, 0, &StateMachinePolicy::default()).unwrap();
    // Level 0 is a single Forward fold; no state is terminal.
    assert_eq!(report.edge_count, 1100);
    assert!(report.impossible_edges.is_empty());
}

#[test]
fn level_beyond_cap_fails_before_probing() {
    let mut explorer = BoundaryExplorer::default();
    let err = fold_state_machine(
        &mut explorer,
        &chain_states(),
        MAX_LEVEL + 1,
        &StateMachinePolicy::default(),
    )
    .unwrap_err();
    assert!(matches!(err, HarnessError::Explore(_)));
}
