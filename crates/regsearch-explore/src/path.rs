//! Parent-pointer bookkeeping and witness reconstruction.
//!
//! The parent map is both the visited set and the search tree: every
//! discovered fingerprint has exactly one entry pointing at the state that
//! discovered it first. The root points at itself.

use crate::explorer::ExploreError;
use regsearch_vm::{Action, Fingerprint, RegisterState};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// How a state was first reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParentLink {
    /// Fingerprint of the discovering state. Equal to the key for the root.
    pub parent: Fingerprint,
    /// Index into the configured action list. `None` for the root.
    pub action: Option<usize>,
    /// BFS level: number of actions from the root.
    pub depth: u32,
}

impl ParentLink {
    /// Link for the initial state.
    pub fn root(fingerprint: Fingerprint) -> Self {
        Self {
            parent: fingerprint,
            action: None,
            depth: 0,
        }
    }
}

/// Visited/parent map. `BTreeMap` keeps iteration deterministic.
pub type ParentMap = BTreeMap<Fingerprint, ParentLink>;

/// Full states, keyed by fingerprint.
pub type StateStore = BTreeMap<Fingerprint, RegisterState>;

/// One entry of a witness trace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceStep {
    /// Action that produced `state`; `None` for the initial state.
    pub action: Option<String>,
    pub state: RegisterState,
    pub fingerprint: Fingerprint,
}

/// Ordered trace from the initial state to a goal state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Witness {
    pub steps: Vec<TraceStep>,
}

impl Witness {
    /// Number of states in the trace, initial state included.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Number of actions taken (`len() - 1` for a non-empty trace).
    pub fn action_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }

    /// Names of the actions taken, in order.
    pub fn actions(&self) -> impl Iterator<Item = &str> {
        self.steps.iter().filter_map(|step| step.action.as_deref())
    }

    /// States visited, in order.
    pub fn states(&self) -> impl Iterator<Item = &RegisterState> {
        self.steps.iter().map(|step| &step.state)
    }

    /// The state satisfying the target.
    pub fn goal(&self) -> Option<&RegisterState> {
        self.steps.last().map(|step| &step.state)
    }
}

/// Walk parent links from `goal` back to the root and return the trace in
/// root-to-goal order.
///
/// Iterative, so deep searches cannot overflow the stack. A missing entry
/// or a chain longer than the map itself means the bookkeeping is corrupt
/// and is reported as an error.
pub fn reconstruct(
    goal: Fingerprint,
    parents: &ParentMap,
    storage: &StateStore,
    actions: &[Action],
) -> Result<Witness, ExploreError> {
    let mut steps = Vec::new();
    let mut current = goal;

    loop {
        let link = parents
            .get(&current)
            .ok_or(ExploreError::BrokenChain(current))?;
        let state = storage
            .get(&current)
            .ok_or(ExploreError::MissingState(current))?;
        let action = match link.action {
            Some(index) => Some(
                actions
                    .get(index)
                    .ok_or(ExploreError::BrokenChain(current))?
                    .name()
                    .to_string(),
            ),
            None => None,
        };

        steps.push(TraceStep {
            action,
            state: *state,
            fingerprint: current,
        });

        if link.parent == current {
            break;
        }
        if steps.len() > parents.len() {
            return Err(ExploreError::ParentCycle(current));
        }
        current = link.parent;
    }

    steps.reverse();
    Ok(Witness { steps })
}
