//! The breadth-first search engine.

use crate::config::SearchConfig;
use crate::frontier::Frontier;
use crate::path::{reconstruct, ParentLink, ParentMap, StateStore, Witness};
use crate::target::Target;
use log::{debug, info, warn};
use regsearch_vm::{Fingerprint, Instruction, RegisterState, VmError};
use serde::{Deserialize, Serialize};
use std::collections::btree_map::Entry;
use thiserror::Error;

/// Errors from the exploration engine.
#[derive(Error, Debug)]
pub enum ExploreError {
    #[error("invalid machine configuration")]
    Vm(#[from] VmError),

    #[error("duplicate action name '{0}'")]
    DuplicateAction(String),

    #[error("initial state has {actual} registers, expected {expected}")]
    WidthMismatch { expected: usize, actual: usize },

    #[error("expected {expected} register names, got {actual}")]
    RegisterNames { expected: usize, actual: usize },

    #[error("target instruction {position} ({instruction}) is not a guard")]
    TargetNotGuard {
        position: usize,
        instruction: Instruction,
    },

    #[error("parent chain broken at {0}")]
    BrokenChain(Fingerprint),

    #[error("parent chain loops through {0}")]
    ParentCycle(Fingerprint),

    #[error("no stored state for {0}")]
    MissingState(Fingerprint),

    #[error("search has not reached a terminal status")]
    StillRunning,
}

/// Tuning for a search session. The modeled system itself lives in
/// [`SearchConfig`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplorerConfig {
    /// Stop recording new states once this many distinct states have been
    /// discovered. States already queued are still tested against the
    /// target; if none matches the search ends with
    /// [`SearchOutcome::Truncated`]. `None` explores until found or
    /// exhausted.
    pub max_states: Option<usize>,
    /// Emit a progress line every this many expanded states (0 = never).
    pub progress_interval: u64,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            max_states: None,
            progress_interval: 10_000,
        }
    }
}

/// Where the engine is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStatus {
    Running,
    /// The target holds at this fingerprint.
    Found(Fingerprint),
    /// Every reachable state was expanded without meeting the target.
    Exhausted,
    /// The `max_states` budget dropped successors and no queued state
    /// satisfied the target.
    Truncated,
}

impl SearchStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, SearchStatus::Running)
    }
}

/// Final result of a search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SearchOutcome {
    Found(Witness),
    Exhausted,
    Truncated,
}

impl SearchOutcome {
    pub fn witness(&self) -> Option<&Witness> {
        match self {
            SearchOutcome::Found(witness) => Some(witness),
            _ => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::Found(_))
    }
}

/// Counters describing a search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplorationStats {
    /// Distinct fingerprints in the parent map, root included.
    pub states_discovered: usize,
    /// States dequeued and tested against the target.
    pub states_expanded: u64,
    /// Action applications attempted.
    pub actions_tried: u64,
    /// Applications whose guards all held.
    pub actions_applied: u64,
    /// Successful applications that led to an already-seen fingerprint.
    pub duplicates_skipped: u64,
    /// Duplicates whose stored state differs from the candidate.
    pub collisions: u64,
    /// Deepest BFS level discovered.
    pub max_depth: u32,
    /// Largest frontier length seen.
    pub frontier_peak: usize,
}

/// Final exploration report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplorationReport {
    pub puzzle: String,
    pub register_names: Vec<String>,
    pub target: String,
    pub outcome: SearchOutcome,
    pub stats: ExplorationStats,
}

/// The exploration engine.
///
/// Owns the frontier, the visited/parent map and the state storage.
/// Actions are tried in configuration order for every expanded state.
pub struct Explorer {
    config: ExplorerConfig,
    search: SearchConfig,
    target: Target,
    frontier: Frontier,
    parents: ParentMap,
    storage: StateStore,
    status: SearchStatus,
    stats: ExplorationStats,
    /// BFS level of the most recently dequeued state.
    level: u32,
    /// Set once `max_states` has caused a successor to be dropped.
    budget_hit: bool,
}

impl Explorer {
    /// Create an explorer seeded with the initial state.
    ///
    /// Fails if a declarative target contains an effect instruction or
    /// addresses registers outside the configured width.
    pub fn new(
        search: SearchConfig,
        target: Target,
        config: ExplorerConfig,
    ) -> Result<Self, ExploreError> {
        target.validate(search.width())?;

        let initial = *search.initial();
        let root = initial.fingerprint();

        let mut frontier = Frontier::new();
        let mut parents = ParentMap::new();
        let mut storage = StateStore::new();
        parents.insert(root, ParentLink::root(root));
        storage.insert(root, initial);
        frontier.push(root);

        let stats = ExplorationStats {
            states_discovered: 1,
            frontier_peak: frontier.peak_len(),
            ..Default::default()
        };

        Ok(Self {
            config,
            search,
            target,
            frontier,
            parents,
            storage,
            status: SearchStatus::Running,
            stats,
            level: 0,
            budget_hit: false,
        })
    }

    /// Run until the target is found, the space is exhausted, or the
    /// state budget runs out.
    pub fn run(&mut self) -> Result<SearchOutcome, ExploreError> {
        info!(
            "Starting search: {} registers, {} actions, initial {}",
            self.search.width(),
            self.search.actions().len(),
            self.search.initial()
        );

        let status = loop {
            let status = self.step()?;
            if status.is_terminal() {
                break status;
            }
        };

        let outcome = self.outcome_for(status)?;
        match &outcome {
            SearchOutcome::Found(witness) => info!(
                "Found target after {} actions ({} states discovered)",
                witness.action_count(),
                self.stats.states_discovered
            ),
            SearchOutcome::Exhausted => info!(
                "Search space exhausted: {} states, no state satisfies the target",
                self.stats.states_discovered
            ),
            SearchOutcome::Truncated => warn!(
                "Search stopped at the {}-state budget",
                self.stats.states_discovered
            ),
        }
        if self.stats.collisions > 0 {
            warn!(
                "{} fingerprint collisions were treated as duplicates",
                self.stats.collisions
            );
        }
        Ok(outcome)
    }

    /// Expand one state.
    ///
    /// Dequeues the oldest frontier entry, tests it against the target and,
    /// if it is not a goal, tries every action on it. Calling this after a
    /// terminal status returns that status unchanged.
    pub fn step(&mut self) -> Result<SearchStatus, ExploreError> {
        if self.status.is_terminal() {
            return Ok(self.status);
        }

        let Some(current) = self.frontier.pop() else {
            self.status = if self.budget_hit {
                SearchStatus::Truncated
            } else {
                SearchStatus::Exhausted
            };
            return Ok(self.status);
        };

        let state = *self
            .storage
            .get(&current)
            .ok_or(ExploreError::MissingState(current))?;
        let depth = self
            .parents
            .get(&current)
            .ok_or(ExploreError::BrokenChain(current))?
            .depth;

        if depth > self.level {
            self.level = depth;
            debug!(
                "BFS level {}: {} states discovered, {} queued",
                depth,
                self.stats.states_discovered,
                self.frontier.len()
            );
        }

        if self.target.matches(&state) {
            self.status = SearchStatus::Found(current);
            return Ok(self.status);
        }

        self.stats.states_expanded += 1;
        if self.config.progress_interval > 0
            && self.stats.states_expanded % self.config.progress_interval == 0
        {
            debug!(
                "Expanded {} states, {} discovered, frontier {}",
                self.stats.states_expanded,
                self.stats.states_discovered,
                self.frontier.len()
            );
        }

        self.expand(current, &state, depth);
        Ok(self.status)
    }

    /// Try every action on `state`, recording unseen successors until the
    /// state budget is spent.
    fn expand(&mut self, current: Fingerprint, state: &RegisterState, depth: u32) {
        for (index, action) in self.search.actions().iter().enumerate() {
            self.stats.actions_tried += 1;
            let Some(next) = action.apply(state) else {
                continue;
            };
            self.stats.actions_applied += 1;

            let fp = next.fingerprint();
            match self.parents.entry(fp) {
                Entry::Occupied(_) => {
                    note_duplicate(&mut self.stats, &self.storage, fp, &next);
                }
                Entry::Vacant(slot) => {
                    if let Some(max) = self.config.max_states {
                        if self.stats.states_discovered >= max {
                            if !self.budget_hit {
                                warn!(
                                    "State budget of {} reached; draining the frontier",
                                    max
                                );
                            }
                            self.budget_hit = true;
                            continue;
                        }
                    }
                    slot.insert(ParentLink {
                        parent: current,
                        action: Some(index),
                        depth: depth + 1,
                    });
                    self.storage.insert(fp, next);
                    self.frontier.push(fp);

                    self.stats.states_discovered += 1;
                    self.stats.max_depth = self.stats.max_depth.max(depth + 1);
                    self.stats.frontier_peak = self.frontier.peak_len();
                }
            }
        }
    }

    /// Turn a terminal status into an outcome, reconstructing the witness
    /// for `Found`.
    fn outcome_for(&self, status: SearchStatus) -> Result<SearchOutcome, ExploreError> {
        Ok(match status {
            SearchStatus::Found(goal) => SearchOutcome::Found(self.witness(goal)?),
            SearchStatus::Exhausted => SearchOutcome::Exhausted,
            SearchStatus::Truncated => SearchOutcome::Truncated,
            SearchStatus::Running => return Err(ExploreError::StillRunning),
        })
    }

    /// Reconstruct the trace from the initial state to `goal`.
    pub fn witness(&self, goal: Fingerprint) -> Result<Witness, ExploreError> {
        reconstruct(goal, &self.parents, &self.storage, self.search.actions())
    }

    /// Package an outcome with the current statistics.
    pub fn report(&self, puzzle: impl Into<String>, outcome: SearchOutcome) -> ExplorationReport {
        ExplorationReport {
            puzzle: puzzle.into(),
            register_names: self.search.register_names().to_vec(),
            target: self.target.to_string(),
            outcome,
            stats: self.stats.clone(),
        }
    }

    pub fn status(&self) -> SearchStatus {
        self.status
    }

    pub fn stats(&self) -> &ExplorationStats {
        &self.stats
    }

    pub fn search_config(&self) -> &SearchConfig {
        &self.search
    }

    /// The visited/parent map.
    pub fn parents(&self) -> &ParentMap {
        &self.parents
    }

    /// Stored states, keyed by fingerprint.
    pub fn storage(&self) -> &StateStore {
        &self.storage
    }

    pub fn frontier(&self) -> &Frontier {
        &self.frontier
    }
}

/// Account for a successor whose fingerprint is already known.
///
/// The stored state is compared with `candidate`; a mismatch is a
/// fingerprint collision. The candidate is dropped either way.
fn note_duplicate(
    stats: &mut ExplorationStats,
    storage: &StateStore,
    fingerprint: Fingerprint,
    candidate: &RegisterState,
) {
    stats.duplicates_skipped += 1;
    let stored = storage.get(&fingerprint);
    if stored != Some(candidate) {
        stats.collisions += 1;
        warn!(
            "Fingerprint collision at {}: {} vs stored {:?}",
            fingerprint, candidate, stored
        );
    }
}

/// Run a search to completion with the default [`ExplorerConfig`].
pub fn search(config: SearchConfig, target: Target) -> Result<SearchOutcome, ExploreError> {
    Explorer::new(config, target, ExplorerConfig::default())?.run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::water_jugs;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;
    use regsearch_vm::Action;
    use std::collections::BTreeSet;

    fn jugs(goal: i64) -> Explorer {
        jugs_with(goal, ExplorerConfig::default())
    }

    fn jugs_with(goal: i64, config: ExplorerConfig) -> Explorer {
        let (search, target) = water_jugs(3, 5, goal).build().unwrap();
        Explorer::new(search, target, config).unwrap()
    }

    fn state(values: &[i64]) -> RegisterState {
        RegisterState::from_slice(values).unwrap()
    }

    /// Shortest distance to a state with `big == goal`, by plain level-set
    /// expansion with no parent pointers.
    fn naive_distance(small: i64, big: i64, goal: i64) -> Option<usize> {
        let (search, _) = water_jugs(small, big, goal).build().unwrap();
        let mut seen = BTreeSet::new();
        let mut level = vec![*search.initial()];
        seen.insert(search.initial().as_slice().to_vec());
        let mut distance = 0;
        while !level.is_empty() {
            if level.iter().any(|s| s.get(1) == Some(goal)) {
                return Some(distance);
            }
            let mut next = Vec::new();
            for s in &level {
                for action in search.actions() {
                    if let Some(n) = action.apply(s) {
                        if seen.insert(n.as_slice().to_vec()) {
                            next.push(n);
                        }
                    }
                }
            }
            level = next;
            distance += 1;
        }
        None
    }

    #[test]
    fn test_explorer_config_default() {
        let config = ExplorerConfig::default();
        assert_eq!(config.max_states, None);
        assert_eq!(config.progress_interval, 10_000);
    }

    #[test]
    fn test_explorer_new_seeds_root() {
        let explorer = jugs(4);
        let root = state(&[0, 0]).fingerprint();

        assert_eq!(explorer.status(), SearchStatus::Running);
        assert_eq!(explorer.frontier().len(), 1);
        assert_eq!(explorer.parents().get(&root), Some(&ParentLink::root(root)));
        assert_eq!(explorer.storage().get(&root), Some(&state(&[0, 0])));
        assert_eq!(explorer.stats().states_discovered, 1);
    }

    #[test]
    fn test_explorer_rejects_target_beyond_width() {
        let (search, _) = water_jugs(3, 5, 4).build().unwrap();
        let result = Explorer::new(search, Target::register_equals(2, 0), ExplorerConfig::default());
        assert!(matches!(result, Err(ExploreError::Vm(_))));
    }

    #[test]
    fn test_explorer_rejects_effect_in_target() {
        let (search, _) = water_jugs(3, 5, 4).build().unwrap();
        let target = Target::AllOf(vec![Instruction::assign(0, 1)]);
        let result = Explorer::new(search, target, ExplorerConfig::default());
        assert!(matches!(
            result,
            Err(ExploreError::TargetNotGuard { position: 0, .. })
        ));
    }

    #[test]
    fn test_water_jugs_found_in_six() {
        let mut explorer = jugs(4);
        let outcome = explorer.run().unwrap();

        let witness = outcome.witness().expect("target is reachable");
        assert_eq!(witness.action_count(), 6);
        assert_eq!(witness.len(), 7);
        assert_eq!(witness.goal().unwrap().get(1), Some(4));
        assert_eq!(witness.steps[0].state, state(&[0, 0]));
        assert_eq!(witness.steps[0].action, None);
    }

    #[test]
    fn test_water_jugs_witness_is_deterministic() {
        let outcome = jugs(4).run().unwrap();
        let witness = outcome.witness().unwrap();

        let actions: Vec<&str> = witness.actions().collect();
        assert_eq!(
            actions,
            vec![
                "FillBig",
                "BigToSmall",
                "EmptySmall",
                "BigToSmall",
                "FillBig",
                "BigToSmall"
            ]
        );
        let states: Vec<Vec<i64>> = witness.states().map(|s| s.as_slice().to_vec()).collect();
        assert_eq!(
            states,
            vec![
                vec![0, 0],
                vec![0, 5],
                vec![3, 2],
                vec![0, 2],
                vec![2, 0],
                vec![2, 5],
                vec![3, 4]
            ]
        );

        // A second run produces the identical trace.
        assert_eq!(jugs(4).run().unwrap(), outcome);
    }

    #[test]
    fn test_witness_transitions_are_valid() {
        let mut explorer = jugs(4);
        let outcome = explorer.run().unwrap();
        let witness = outcome.witness().unwrap();
        let actions = explorer.search_config().actions();

        for pair in witness.steps.windows(2) {
            let name = pair[1].action.as_deref().unwrap();
            let action: &Action = actions.iter().find(|a| a.name() == name).unwrap();
            assert_eq!(action.apply(&pair[0].state), Some(pair[1].state));
            assert_eq!(pair[1].fingerprint, pair[1].state.fingerprint());
        }
    }

    #[test]
    fn test_unreachable_target_exhausts() {
        let mut explorer = jugs(100);
        let outcome = explorer.run().unwrap();

        assert_eq!(outcome, SearchOutcome::Exhausted);
        assert_eq!(explorer.status(), SearchStatus::Exhausted);
        let stats = explorer.stats();
        assert!(stats.states_discovered <= (3 + 1) * (5 + 1));
        // Reachable configurations have at least one jug empty or full.
        assert_eq!(stats.states_discovered, 16);
        assert_eq!(stats.states_expanded, 16);
        assert_eq!(stats.collisions, 0);
        assert!(explorer.frontier().is_empty());
    }

    #[test]
    fn test_no_revisit() {
        let mut explorer = jugs(100);
        explorer.run().unwrap();

        // Every push corresponds to exactly one new parent-map key.
        assert_eq!(
            explorer.frontier().total_pushed(),
            explorer.parents().len() as u64
        );
        assert_eq!(explorer.parents().len(), explorer.storage().len());

        let stats = explorer.stats();
        assert_eq!(
            stats.actions_applied,
            stats.duplicates_skipped + (stats.states_discovered as u64 - 1)
        );
    }

    #[test]
    fn test_shortest_path_matches_naive_bfs() {
        for goal in 0..=6 {
            let outcome = jugs(goal).run().unwrap();
            match naive_distance(3, 5, goal) {
                Some(distance) => {
                    let witness = outcome.witness().expect("reachable goal not found");
                    assert_eq!(witness.action_count(), distance, "goal {}", goal);
                }
                None => assert_eq!(outcome, SearchOutcome::Exhausted, "goal {}", goal),
            }
        }
    }

    #[test]
    fn test_random_jugs_shortest_and_deterministic() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..50 {
            let small = rng.gen_range(1..=6);
            let big = rng.gen_range(small..=9);
            let goal = rng.gen_range(0..=big + 1);

            let (config, target) = water_jugs(small, big, goal).build().unwrap();
            let mut explorer = Explorer::new(config, target, ExplorerConfig::default()).unwrap();
            let outcome = explorer.run().unwrap();

            let case = format!("small={} big={} goal={}", small, big, goal);
            match naive_distance(small, big, goal) {
                Some(distance) => {
                    let witness = outcome.witness().expect(&case);
                    assert_eq!(witness.action_count(), distance, "{}", case);
                    assert_eq!(witness.goal().unwrap().get(1), Some(goal), "{}", case);
                }
                None => assert_eq!(outcome, SearchOutcome::Exhausted, "{}", case),
            }
            assert!(
                explorer.stats().states_discovered <= ((small + 1) * (big + 1)) as usize,
                "{}",
                case
            );
            assert_eq!(explorer.stats().collisions, 0, "{}", case);

            let (config, target) = water_jugs(small, big, goal).build().unwrap();
            assert_eq!(search(config, target).unwrap(), outcome, "{}", case);
        }
    }

    #[test]
    fn test_initial_state_satisfies_target() {
        let mut explorer = jugs(0);
        let outcome = explorer.run().unwrap();

        let witness = outcome.witness().unwrap();
        assert_eq!(witness.len(), 1);
        assert_eq!(witness.steps[0].state, state(&[0, 0]));
        assert_eq!(explorer.stats().states_expanded, 0);
    }

    #[test]
    fn test_step_drives_to_terminal() {
        let mut explorer = jugs(4);
        let mut steps = 0;
        while !explorer.step().unwrap().is_terminal() {
            steps += 1;
            assert!(steps < 100, "search did not terminate");
        }
        let goal = match explorer.status() {
            SearchStatus::Found(goal) => goal,
            other => panic!("unexpected status {:?}", other),
        };
        assert_eq!(explorer.storage()[&goal], state(&[3, 4]));

        // Terminal status is sticky.
        assert_eq!(explorer.step().unwrap(), SearchStatus::Found(goal));
        assert_eq!(explorer.witness(goal).unwrap().action_count(), 6);
    }

    #[test]
    fn test_max_states_truncates() {
        let config = ExplorerConfig {
            max_states: Some(5),
            ..Default::default()
        };
        let mut explorer = jugs_with(100, config);
        let outcome = explorer.run().unwrap();

        assert_eq!(outcome, SearchOutcome::Truncated);
        assert_eq!(explorer.stats().states_discovered, 5);
    }

    #[test]
    fn test_max_states_still_tests_queued_goal() {
        // The goal [3, 4] is discovered as the 14th state; budgets at or
        // above that must still report it.
        for max in [14, 15] {
            let config = ExplorerConfig {
                max_states: Some(max),
                ..Default::default()
            };
            let mut explorer = jugs_with(4, config);
            let outcome = explorer.run().unwrap();

            let witness = outcome.witness().expect("queued goal was dropped");
            assert_eq!(witness.action_count(), 6, "budget {}", max);
            assert_eq!(witness.goal(), Some(&state(&[3, 4])));
            assert!(explorer.stats().states_discovered <= max);
        }
    }

    #[test]
    fn test_max_states_drains_frontier_before_truncating() {
        let config = ExplorerConfig {
            max_states: Some(5),
            ..Default::default()
        };
        let mut explorer = jugs_with(100, config);
        explorer.run().unwrap();

        assert!(explorer.frontier().is_empty());
        assert_eq!(explorer.stats().states_expanded, 5);
    }

    #[test]
    fn test_max_states_large_enough_is_ignored() {
        let config = ExplorerConfig {
            max_states: Some(24),
            ..Default::default()
        };
        let outcome = jugs_with(4, config).run().unwrap();
        assert!(outcome.is_found());
    }

    #[test]
    fn test_note_duplicate_counts_collision() {
        let mut stats = ExplorationStats::default();
        let mut storage = StateStore::new();
        let stored = state(&[1, 2]);
        let fp = stored.fingerprint();
        storage.insert(fp, stored);

        // Same fingerprint, same content: an ordinary duplicate.
        note_duplicate(&mut stats, &storage, fp, &stored);
        assert_eq!(stats.duplicates_skipped, 1);
        assert_eq!(stats.collisions, 0);

        // Same fingerprint, different content: a collision.
        note_duplicate(&mut stats, &storage, fp, &state(&[2, 1]));
        assert_eq!(stats.duplicates_skipped, 2);
        assert_eq!(stats.collisions, 1);

        // Known fingerprint with no stored state also counts.
        note_duplicate(&mut stats, &StateStore::new(), fp, &stored);
        assert_eq!(stats.collisions, 2);
    }

    #[test]
    fn test_outcome_for_running_is_an_error() {
        let explorer = jugs(4);
        assert!(matches!(
            explorer.outcome_for(SearchStatus::Running),
            Err(ExploreError::StillRunning)
        ));
        assert_eq!(
            explorer.outcome_for(SearchStatus::Exhausted).unwrap(),
            SearchOutcome::Exhausted
        );
    }

    #[test]
    fn test_closure_target() {
        let (config, _) = water_jugs(3, 5, 4).build().unwrap();
        let target = Target::predicate(|s| s.get(0) == Some(1) && s.get(1) == Some(0));
        let outcome = search(config, target).unwrap();
        let witness = outcome.witness().unwrap();
        assert_eq!(witness.goal(), Some(&state(&[1, 0])));
    }

    #[test]
    fn test_report_carries_stats() {
        let mut explorer = jugs(4);
        let outcome = explorer.run().unwrap();
        let report = explorer.report("water-jugs", outcome.clone());

        assert_eq!(report.puzzle, "water-jugs");
        assert_eq!(report.register_names, vec!["small", "big"]);
        assert_eq!(report.target, "eq r1, 4");
        assert_eq!(report.outcome, outcome);
        assert_eq!(&report.stats, explorer.stats());
    }

    #[test]
    fn test_outcome_serializes_with_status_tag() {
        let json = serde_json::to_value(SearchOutcome::Exhausted).unwrap();
        assert_eq!(json, serde_json::json!({ "status": "exhausted" }));

        let found = jugs(0).run().unwrap();
        let json = serde_json::to_value(&found).unwrap();
        assert_eq!(json["status"], "found");
        assert_eq!(json["steps"][0]["state"], serde_json::json!([0, 0]));
    }
}
