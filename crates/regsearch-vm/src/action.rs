//! Named, atomic transition rules.
//!
//! An [`Action`] is a bounded sequence of instructions held inline (no heap
//! allocation on the hot path). Applying it either runs every instruction
//! or, if any guard fails, produces nothing at all.

use crate::error::VmError;
use crate::instruction::{execute, Instruction};
use crate::state::{RegisterState, REGISTER_COUNT};
use log::trace;
use std::fmt;

/// Maximum number of instructions in one action.
pub const MAX_INSTRUCTIONS: usize = 16;

// Fills unused slots. Never executed.
const PADDING: Instruction = Instruction {
    opcode: crate::instruction::Opcode::Equal,
    target: 0,
    source: 0,
    amount: 0,
};

/// A named transition rule of the modeled system.
#[derive(Clone)]
pub struct Action {
    name: String,
    instructions: [Instruction; MAX_INSTRUCTIONS],
    len: usize,
}

impl Action {
    /// Build an action from an instruction list.
    ///
    /// Fails if the name is empty, if there are more than
    /// [`MAX_INSTRUCTIONS`] instructions, or if any instruction addresses a
    /// register outside the register file.
    pub fn new(name: impl Into<String>, instructions: &[Instruction]) -> Result<Self, VmError> {
        let name = name.into();
        if name.is_empty() {
            return Err(VmError::EmptyActionName);
        }
        if instructions.len() > MAX_INSTRUCTIONS {
            return Err(VmError::CapacityExceeded {
                action: name,
                len: instructions.len(),
                capacity: MAX_INSTRUCTIONS,
            });
        }

        let mut slots = [PADDING; MAX_INSTRUCTIONS];
        slots[..instructions.len()].copy_from_slice(instructions);
        let action = Self {
            name,
            instructions: slots,
            len: instructions.len(),
        };
        action.validate(REGISTER_COUNT)?;
        Ok(action)
    }

    /// Start building an action instruction by instruction.
    pub fn builder(name: impl Into<String>) -> ActionBuilder {
        ActionBuilder::new(name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The instructions, in execution order.
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions[..self.len]
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Check every instruction against a register file of `width`.
    pub fn validate(&self, width: usize) -> Result<(), VmError> {
        for (position, instruction) in self.instructions().iter().enumerate() {
            instruction
                .validate(width)
                .map_err(|reason| VmError::InvalidInstruction {
                    action: self.name.clone(),
                    position,
                    reason: Box::new(reason),
                })?;
        }
        Ok(())
    }

    /// Apply this action to a copy of `state`.
    ///
    /// Returns `None` as soon as a guard fails, or if any instruction
    /// addresses a register at or beyond `state.width()`; the partially
    /// updated copy is dropped and `state` itself is never touched. Use
    /// [`Action::try_apply`] to tell the two apart.
    pub fn apply(&self, state: &RegisterState) -> Option<RegisterState> {
        apply(state, self)
    }

    /// Like [`Action::apply`], but reports an action that does not fit the
    /// width of `state` as an error instead of `None`.
    pub fn try_apply(&self, state: &RegisterState) -> Result<Option<RegisterState>, VmError> {
        self.validate(state.width())?;
        Ok(apply(state, self))
    }
}

/// Apply `action` to a copy of `state`. See [`Action::apply`].
pub fn apply(state: &RegisterState, action: &Action) -> Option<RegisterState> {
    let mut next = *state;
    for instruction in action.instructions() {
        if !execute(&mut next, instruction) {
            trace!("{}: '{}' refused on {}", action.name(), instruction, state);
            return None;
        }
    }
    Some(next)
}

impl PartialEq for Action {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.instructions() == other.instructions()
    }
}

impl Eq for Action {}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Action")
            .field("name", &self.name)
            .field("instructions", &self.instructions())
            .finish()
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.name)?;
        for instruction in self.instructions() {
            write!(f, " {};", instruction)?;
        }
        Ok(())
    }
}

/// Builder for constructing actions declaratively.
///
/// # Example
///
/// ```
/// use regsearch_vm::action::Action;
/// use regsearch_vm::instruction::Instruction;
/// use regsearch_vm::state::RegisterState;
///
/// // Fill a 3-litre jug held in r0, but only if it is not already full.
/// let fill = Action::builder("FillSmall")
///     .then(Instruction::less_than(0, 3))
///     .then(Instruction::assign(0, 3))
///     .build()
///     .unwrap();
///
/// let empty = RegisterState::from_slice(&[0, 0]).unwrap();
/// let full = fill.apply(&empty).unwrap();
/// assert_eq!(full.as_slice(), &[3, 0]);
/// assert!(fill.apply(&full).is_none());
/// ```
#[derive(Debug, Clone)]
pub struct ActionBuilder {
    name: String,
    instructions: Vec<Instruction>,
}

impl ActionBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            instructions: Vec::new(),
        }
    }

    /// Append an instruction.
    pub fn then(mut self, instruction: Instruction) -> Self {
        self.instructions.push(instruction);
        self
    }

    /// Validate and build. Capacity is checked here, not while appending.
    pub fn build(self) -> Result<Action, VmError> {
        Action::new(self.name, &self.instructions)
    }
}
