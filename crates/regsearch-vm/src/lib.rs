//! Fixed-width register machine for state-space search.
//!
//! The machine has no program counter and no control flow. A system is
//! modeled as a [`RegisterState`] plus a list of named [`Action`]s; each
//! action is a short, bounded list of instructions applied atomically.
//!
//! ```text
//! RegisterState ──apply(action)──→ Some(RegisterState)   all guards held
//!                                  None                  a guard failed
//! ```
//!
//! # Module Structure
//!
//! - [`state`]: the register file and its [`Fingerprint`]
//! - [`instruction`]: guards, effects and the interpreter
//! - [`action`]: named atomic instruction sequences
//! - [`verified`]: pure arithmetic behind transfers and hashing
//! - [`error`]: configuration errors
//!
//! # Example
//!
//! ```
//! use regsearch_vm::{Action, Instruction, RegisterState};
//!
//! let pour = Action::new(
//!     "SmallToBig",
//!     &[
//!         Instruction::not_equal(0, 0),
//!         Instruction::bounded_transfer(1, 0, 5),
//!     ],
//! )
//! .unwrap();
//!
//! let state = RegisterState::from_slice(&[3, 4]).unwrap();
//! let next = pour.apply(&state).unwrap();
//! assert_eq!(next.as_slice(), &[2, 5]);
//! ```

pub mod action;
pub mod error;
pub mod instruction;
pub mod state;
pub mod verified;

pub use action::{apply, Action, ActionBuilder, MAX_INSTRUCTIONS};
pub use error::VmError;
pub use instruction::{execute, Instruction, Opcode};
pub use state::{fingerprint, Fingerprint, Register, RegisterState, REGISTER_COUNT};
