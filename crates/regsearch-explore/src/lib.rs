//! Breadth-first state-space explorer over the register machine.
//!
//! Given an initial [`RegisterState`](regsearch_vm::RegisterState), an
//! ordered list of actions and a [`Target`], the explorer enumerates every
//! reachable state level by level and returns the first goal state found
//! together with the shortest action sequence leading to it.
//!
//! # Architecture
//!
//! ```text
//! 1. Seed: fingerprint the initial state, record it as its own parent
//! 2. Pop the oldest fingerprint from the frontier
//! 3. Target holds? → reconstruct the witness from parent links, stop
//! 4. Apply every action in order; for each successful successor:
//!    - fingerprint already known → skip (compare states to spot collisions)
//!    - otherwise record parent link + state, push onto the frontier
//! 5. Frontier empty → the target is unreachable
//! ```
//!
//! # Example Usage
//!
//! ```
//! use regsearch_explore::explorer::{Explorer, ExplorerConfig, SearchOutcome};
//! use regsearch_explore::puzzle::water_jugs;
//! use regsearch_explore::report::format_report;
//!
//! let (search, target) = water_jugs(3, 5, 4).build().unwrap();
//! let mut explorer = Explorer::new(search, target, ExplorerConfig::default()).unwrap();
//! let outcome = explorer.run().unwrap();
//!
//! assert_eq!(outcome.witness().unwrap().action_count(), 6);
//! println!("{}", format_report(&explorer.report("water-jugs", outcome)));
//! ```
//!
//! # Module Structure
//!
//! - [`config`]: The modeled system: width, initial state, actions
//! - [`target`]: Goal predicates
//! - [`frontier`]: FIFO queue of states awaiting expansion
//! - [`path`]: Parent links and witness reconstruction
//! - [`explorer`]: The search loop
//! - [`puzzle`]: JSON puzzle files and the built-in water-jug puzzle
//! - [`report`]: Human-readable reports
//!
//! # Determinism
//!
//! Actions are tried in configuration order and all maps are `BTreeMap`s,
//! so the same configuration always yields the same witness.

pub mod config;
pub mod explorer;
pub mod frontier;
pub mod path;
pub mod puzzle;
pub mod report;
pub mod target;

// Re-export main types for convenience
pub use config::SearchConfig;
pub use explorer::{
    search, ExplorationReport, ExplorationStats, ExploreError, Explorer, ExplorerConfig,
    SearchOutcome, SearchStatus,
};
pub use frontier::Frontier;
pub use path::{reconstruct, ParentLink, ParentMap, StateStore, TraceStep, Witness};
pub use puzzle::{load_puzzle, save_puzzle, water_jugs, Puzzle, PuzzleError};
pub use target::Target;
