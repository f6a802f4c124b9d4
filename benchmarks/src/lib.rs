//! Shared input builders for dragonfold benchmark suites.

use dragonfold_harness::worlds::state_machine::StateMachineState;
use dragonfold_harness::worlds::team_baselines::TeamBaseline;

/// A ring of `n` states with one chord per state, plus a terminal sink.
///
/// Every state has a predecessor, so reverse folds never synthesize
/// markers.
#[must_use]
pub fn ring_states(n: usize) -> Vec<StateMachineState> {
    let mut states: Vec<StateMachineState> = (0..n)
        .map(|i| {
            let next = format!("s{}", (i + 1) % n);
            let chord = format!("s{}", (i + n / 2) % n);
            StateMachineState::new(format!("s{i}"), [next, chord, "sink".to_owned()])
        })
        .collect();
    states.push(StateMachineState::new("sink", Vec::<String>::new()).terminal());
    states
}

/// `n` teams whose summaries and metrics spread evenly over `[0.5, 0.9]`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn spread_teams(n: usize) -> Vec<TeamBaseline> {
    let step = if n > 1 { 0.4 / (n - 1) as f64 } else { 0.0 };
    (0..n)
        .map(|i| {
            let score = 0.5 + step * i as f64;
            TeamBaseline::new(format!("team{i}"), score)
                .with_metric("task_success", score)
                .with_metric("error_rate", 1.0 - score)
        })
        .collect()
}
