//! Puzzle files: a serializable description of a search problem.
//!
//! A puzzle names its registers, lists its actions as guard/effect
//! instructions and states the target as a conjunction of guards:
//!
//! ```json
//! {
//!   "name": "water-jugs",
//!   "registers": [{ "name": "small" }, { "name": "big" }],
//!   "actions": [
//!     { "name": "FillBig", "instructions": [
//!         { "opcode": "less_than", "target": 1, "amount": 5 },
//!         { "opcode": "assign", "target": 1, "amount": 5 } ] }
//!   ],
//!   "target": [{ "opcode": "equal", "target": 1, "amount": 4 }]
//! }
//! ```

use crate::config::SearchConfig;
use crate::explorer::ExploreError;
use crate::target::Target;
use regsearch_vm::{Action, Instruction, Register, RegisterState};
use serde::{Deserialize, Serialize};
use snafu::{ResultExt, Snafu};
use std::fs;
use std::path::{Path, PathBuf};

/// Errors from loading or saving puzzle files.
#[derive(Debug, Snafu)]
pub enum PuzzleError {
    #[snafu(display("I/O error on {}", path.display()))]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[snafu(display("JSON error"), context(false))]
    Json { source: serde_json::Error },

    #[snafu(display("puzzle '{}' is invalid", name))]
    Invalid { name: String, source: ExploreError },
}

/// A named register and its initial value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterDecl {
    pub name: String,
    #[serde(default)]
    pub initial: Register,
}

/// A named action as written in a puzzle file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionDecl {
    pub name: String,
    pub instructions: Vec<Instruction>,
}

/// Serializable search problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Puzzle {
    pub name: String,
    pub registers: Vec<RegisterDecl>,
    pub actions: Vec<ActionDecl>,
    /// Guards that must all hold in a goal state.
    pub target: Vec<Instruction>,
}

impl Puzzle {
    /// Parse and validate a puzzle from JSON text.
    pub fn from_json(json: &str) -> Result<Self, PuzzleError> {
        let puzzle: Puzzle = serde_json::from_str(json)?;
        puzzle.build().context(InvalidSnafu {
            name: puzzle.name.clone(),
        })?;
        Ok(puzzle)
    }

    pub fn to_json_pretty(&self) -> Result<String, PuzzleError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Turn the description into an explorer configuration and target.
    pub fn build(&self) -> Result<(SearchConfig, Target), ExploreError> {
        let initial: Vec<Register> = self.registers.iter().map(|r| r.initial).collect();
        let initial = RegisterState::from_slice(&initial)?;

        let actions = self
            .actions
            .iter()
            .map(|decl| Action::new(decl.name.as_str(), &decl.instructions))
            .collect::<Result<Vec<_>, _>>()?;

        let config = SearchConfig::new(self.registers.len(), initial, actions)?
            .with_register_names(self.registers.iter().map(|r| r.name.as_str()))?;
        let target = Target::all_of(self.target.clone())?;
        target.validate(config.width())?;

        Ok((config, target))
    }
}

/// Load and validate a puzzle file.
pub fn load_puzzle(path: &Path) -> Result<Puzzle, PuzzleError> {
    let json = fs::read_to_string(path).context(IoSnafu { path })?;
    Puzzle::from_json(&json)
}

/// Write a puzzle as pretty-printed JSON.
pub fn save_puzzle(puzzle: &Puzzle, path: &Path) -> Result<(), PuzzleError> {
    let json = puzzle.to_json_pretty()?;
    fs::write(path, json).context(IoSnafu { path })
}

/// The two-jug puzzle: jugs of `small` and `big` capacity, start empty,
/// reach exactly `goal` units in the big jug.
///
/// Register 0 is the small jug, register 1 the big one. Action order is
/// fill, empty, then pour, small jug first.
pub fn water_jugs(small: Register, big: Register, goal: Register) -> Puzzle {
    let action = |name: &str, instructions: Vec<Instruction>| ActionDecl {
        name: name.to_string(),
        instructions,
    };

    Puzzle {
        name: "water-jugs".to_string(),
        registers: vec![
            RegisterDecl {
                name: "small".to_string(),
                initial: 0,
            },
            RegisterDecl {
                name: "big".to_string(),
                initial: 0,
            },
        ],
        actions: vec![
            action(
                "FillSmall",
                vec![Instruction::less_than(0, small), Instruction::assign(0, small)],
            ),
            action(
                "FillBig",
                vec![Instruction::less_than(1, big), Instruction::assign(1, big)],
            ),
            action(
                "EmptySmall",
                vec![Instruction::not_equal(0, 0), Instruction::assign(0, 0)],
            ),
            action(
                "EmptyBig",
                vec![Instruction::not_equal(1, 0), Instruction::assign(1, 0)],
            ),
            action(
                "SmallToBig",
                vec![
                    Instruction::not_equal(0, 0),
                    Instruction::less_than(1, big),
                    Instruction::bounded_transfer(1, 0, big),
                ],
            ),
            action(
                "BigToSmall",
                vec![
                    Instruction::not_equal(1, 0),
                    Instruction::less_than(0, small),
                    Instruction::bounded_transfer(0, 1, small),
                ],
            ),
        ],
        target: vec![Instruction::equal(1, goal)],
    }
}
