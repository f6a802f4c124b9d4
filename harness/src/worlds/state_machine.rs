//! State-machine world: folds a declared transition graph along the dragon
//! path to surface impossible transitions.
//!
//! Per fold direction:
//!
//! - **Left**: advance along `transitions[level mod len]` (no edge when the
//!   state declares no transitions or the target id is undeclared).
//! - **Right**: step back to a predecessor, picked by `level mod count`
//!   among states whose transition list contains the current id. With no
//!   predecessor the result is [`StateProbe::SyntheticImpossible`].
//! - **Forward**: stay put, unless the state is terminal (no edge).
//!
//! Synthesized markers are never merged back into the caller's states.

use std::collections::BTreeMap;

use serde_json::{Map, Value};
use tracing::{debug, info};

use dragonfold_kernel::path::fold::{Direction, Fold, Regime, RegimeCounts};
use dragonfold_kernel::proof::hash::{canonical_hash, ContentHash};
use dragonfold_kernel::proof::hash_domain::HashDomain;
use dragonfold_search::contract::FoldStrategy;
use dragonfold_search::edge::BoundaryEdge;
use dragonfold_search::explorer::BoundaryExplorer;

use crate::error::HarnessError;
use crate::policy::StateMachinePolicy;

/// Tag carried by ids of impossible states.
pub const IMPOSSIBLE_TAG: &str = "IMPOSSIBLE";

/// Data key flagging a state as impossible.
pub const IMPOSSIBLE_DATA_KEY: &str = "impossible";

/// A caller-declared state.
#[derive(Debug, Clone, PartialEq)]
pub struct StateMachineState {
    pub id: String,
    /// Successor ids, in declaration order.
    pub transitions: Vec<String>,
    /// Auxiliary data. `{"impossible": true}` flags the state explicitly.
    pub data: Map<String, Value>,
    /// Statistical validity score in `[0, 1]`, if known.
    pub validity: Option<f64>,
    pub is_terminal: bool,
}

impl StateMachineState {
    #[must_use]
    pub fn new<I, S>(id: impl Into<String>, transitions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: id.into(),
            transitions: transitions.into_iter().map(Into::into).collect(),
            data: Map::new(),
            validity: None,
            is_terminal: false,
        }
    }

    #[must_use]
    pub fn terminal(mut self) -> Self {
        self.is_terminal = true;
        self
    }

    #[must_use]
    pub fn with_validity(mut self, validity: f64) -> Self {
        self.validity = Some(validity);
        self
    }

    #[must_use]
    pub fn with_data(mut self, key: impl Into<String>, value: Value) -> Self {
        self.data.insert(key.into(), value);
        self
    }

    /// Whether the state's own id or data mark it impossible.
    #[must_use]
    pub fn is_marked_impossible(&self) -> bool {
        self.id.contains(IMPOSSIBLE_TAG)
            || self.data.get(IMPOSSIBLE_DATA_KEY).and_then(Value::as_bool) == Some(true)
    }
}

/// What a state-machine fold produced.
#[derive(Debug, Clone, PartialEq)]
pub enum StateProbe {
    /// A declared state was reached.
    Found(StateMachineState),
    /// A reverse fold found no predecessor of `origin_id`.
    SyntheticImpossible { origin_id: String },
}

impl StateProbe {
    /// Id of the reached state, or the tagged marker id.
    #[must_use]
    pub fn id(&self) -> String {
        match self {
            Self::Found(state) => state.id.clone(),
            Self::SyntheticImpossible { origin_id } => marker_id(origin_id),
        }
    }

    /// The reached state, if any.
    #[must_use]
    pub fn state(&self) -> Option<&StateMachineState> {
        match self {
            Self::Found(state) => Some(state),
            Self::SyntheticImpossible { .. } => None,
        }
    }

    /// Materialize as a standalone marker record: tagged id, no
    /// transitions, data recording origin and the impossibility flag.
    #[must_use]
    pub fn to_state(&self) -> StateMachineState {
        match self {
            Self::Found(state) => state.clone(),
            Self::SyntheticImpossible { origin_id } => {
                StateMachineState::new(marker_id(origin_id), Vec::<String>::new())
                    .with_data("reverse", Value::Bool(true))
                    .with_data("from", Value::String(origin_id.clone()))
                    .with_data(IMPOSSIBLE_DATA_KEY, Value::Bool(true))
            }
        }
    }
}

fn marker_id(origin_id: &str) -> String {
    format!("{origin_id}_reverse_{IMPOSSIBLE_TAG}")
}

/// An explored state-machine edge.
pub type StateEdge = BoundaryEdge<StateMachineState, StateProbe>;

/// Fold strategy over a borrowed state set.
pub struct StateMachineWorld<'a> {
    states: &'a [StateMachineState],
    by_id: BTreeMap<&'a str, usize>,
    predecessors: BTreeMap<&'a str, Vec<usize>>,
    validity_floor: f64,
}

impl<'a> StateMachineWorld<'a> {
    /// Index `states` for forward and reverse lookup.
    ///
    /// When ids repeat, the first declaration wins forward lookup.
    #[must_use]
    pub fn new(states: &'a [StateMachineState], policy: &StateMachinePolicy) -> Self {
        let mut by_id = BTreeMap::new();
        let mut predecessors: BTreeMap<&str, Vec<usize>> = BTreeMap::new();
        for (index, state) in states.iter().enumerate() {
            by_id.entry(state.id.as_str()).or_insert(index);
            for target in &state.transitions {
                let preds = predecessors.entry(target.as_str()).or_default();
                if preds.last() != Some(&index) {
                    preds.push(index);
                }
            }
        }
        Self {
            states,
            by_id,
            predecessors,
            validity_floor: policy.validity_floor,
        }
    }

    fn advance(&self, state: &StateMachineState, fold: &Fold) -> Option<StateProbe> {
        if state.transitions.is_empty() {
            return None;
        }
        let next_id = &state.transitions[fold.level as usize % state.transitions.len()];
        let index = *self.by_id.get(next_id.as_str())?;
        Some(StateProbe::Found(self.states[index].clone()))
    }

    fn reverse(&self, state: &StateMachineState, fold: &Fold) -> StateProbe {
        match self.predecessors.get(state.id.as_str()) {
            Some(preds) if !preds.is_empty() => {
                let index = preds[fold.level as usize % preds.len()];
                StateProbe::Found(self.states[index].clone())
            }
            _ => {
                debug!(origin = %state.id, fold = fold.level, "no predecessor; synthesizing impossibility marker");
                StateProbe::SyntheticImpossible {
                    origin_id: state.id.clone(),
                }
            }
        }
    }
}

impl FoldStrategy for StateMachineWorld<'_> {
    type State = StateMachineState;
    type Target = StateProbe;

    fn fold_state(&self, state: &StateMachineState, fold: &Fold) -> Option<StateProbe> {
        match fold.direction {
            Direction::Left => self.advance(state, fold),
            Direction::Right => Some(self.reverse(state, fold)),
            Direction::Forward => {
                (!state.is_terminal).then(|| StateProbe::Found(state.clone()))
            }
        }
    }

    /// Impossible when the target is a synthesized marker, is marked
    /// impossible by id or data, or scores below the validity floor.
    ///
    /// A reverse fold that found a declared predecessor walks a declared
    /// transition backwards, so it is possible even out of a terminal state.
    fn is_impossible(&self, _from: &StateMachineState, _fold: &Fold, to: &StateProbe) -> bool {
        let StateProbe::Found(reached) = to else {
            return true;
        };
        reached.is_marked_impossible() || reached.validity.is_some_and(|v| v < self.validity_floor)
    }
}

/// An impossible edge surfaced for review.
#[derive(Debug, Clone, PartialEq)]
pub struct CriticalPath {
    pub from: String,
    pub to: String,
    pub weight: f64,
    pub regime: Regime,
}

/// Fraction of explored edges per regime. All zero with no edges.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RegimeDistribution {
    pub exploration: f64,
    pub stabilization: f64,
    pub convergence: f64,
}

impl From<&RegimeCounts> for RegimeDistribution {
    fn from(counts: &RegimeCounts) -> Self {
        let [exploration, stabilization, convergence] = counts.fractions();
        Self {
            exploration,
            stabilization,
            convergence,
        }
    }
}

/// Outcome of folding a state machine.
#[derive(Debug, Clone)]
pub struct StateBoundaryReport {
    pub level: u32,
    /// Total edges explored (possible and impossible).
    pub edge_count: usize,
    /// Impossible edges, in exploration order.
    pub impossible_edges: Vec<StateEdge>,
    /// `edges / states²`, a sampling upper bound, not exhaustive coverage.
    pub exploration_coverage: f64,
    /// Impossible edges by fold weight, heaviest first, capped by policy.
    pub critical_paths: Vec<CriticalPath>,
    pub regime_distribution: RegimeDistribution,
}

/// Fold `states` at `level` and report impossible transitions.
///
/// # Errors
///
/// - [`HarnessError::InvalidPolicy`] if `policy` fails validation
/// - [`HarnessError::Explore`] if the explorer rejects `level` or the state count
pub fn fold_state_machine(
    explorer: &mut BoundaryExplorer,
    states: &[StateMachineState],
    level: u32,
    policy: &StateMachinePolicy,
) -> Result<StateBoundaryReport, HarnessError> {
    policy.validate()?;
    let world = StateMachineWorld::new(states, policy);
    let exploration = explorer.explore(states, level, &world)?;

    let edge_count = exploration.edges.len();
    let exploration_coverage = exploration.coverage();
    let regime_distribution = RegimeDistribution::from(&exploration.regime_counts());

    let impossible_edges: Vec<StateEdge> = exploration
        .into_edges()
        .into_iter()
        .filter(|e| e.is_impossible)
        .collect();

    let mut critical_paths: Vec<CriticalPath> = impossible_edges
        .iter()
        .map(|edge| CriticalPath {
            from: edge.from.id.clone(),
            to: edge.to.id(),
            weight: edge.fold.weight,
            regime: edge.regime,
        })
        .collect();
    critical_paths.sort_by(|a, b| b.weight.total_cmp(&a.weight));
    critical_paths.truncate(policy.critical_path_limit);

    info!(
        level,
        states = states.len(),
        edges = edge_count,
        impossible = impossible_edges.len(),
        "state machine folded"
    );

    Ok(StateBoundaryReport {
        level,
        edge_count,
        impossible_edges,
        exploration_coverage,
        critical_paths,
        regime_distribution,
    })
}

/// Fixed error taxonomy for generated contract tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExpectedError {
    InvalidStateTransition,
}

impl ExpectedError {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidStateTransition => "InvalidStateTransition",
        }
    }
}

/// A contract test a human should write for one impossible edge.
#[derive(Debug, Clone, PartialEq)]
pub struct ContractTestDescriptor {
    /// Stable id over `(test_name, fold ordinal)`.
    pub id: ContentHash,
    pub test_name: String,
    pub from: String,
    pub to: String,
    pub expected_error: ExpectedError,
    pub regime: Regime,
    /// `round(weight × 100)`, saturating.
    pub priority: u64,
}

/// One descriptor per impossible edge, in edge order. Possible edges are
/// skipped.
#[must_use]
pub fn contract_tests_from(edges: &[StateEdge]) -> Vec<ContractTestDescriptor> {
    edges
        .iter()
        .filter(|e| e.is_impossible)
        .map(|edge| {
            let from = edge.from.id.clone();
            let to = edge.to.id();
            let test_name = format!("should_reject_transition_{from}_to_{to}");
            let mut id_basis = test_name.clone().into_bytes();
            id_basis.push(0);
            id_basis.extend_from_slice(&edge.fold.level.to_le_bytes());
            ContractTestDescriptor {
                id: canonical_hash(HashDomain::ContractTest, &id_basis),
                test_name,
                from,
                to,
                expected_error: ExpectedError::InvalidStateTransition,
                regime: edge.regime,
                priority: priority_for(edge.fold.weight),
            }
        })
        .collect()
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn priority_for(weight: f64) -> u64 {
    // Float-to-int `as` saturates.
    (weight * 100.0).round() as u64
}
