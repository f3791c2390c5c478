//! Instruction set and interpreter.
//!
//! Instructions come in two families:
//!
//! - **Guards** (`LessThan`, `Equal`, `NotEqual`) compare `registers[target]`
//!   with the immediate `amount` and never mutate.
//! - **Effects** (`Assign`, `Add`, `Subtract`, `BoundedTransfer`) mutate
//!   `registers[target]`, and for `BoundedTransfer` also `registers[source]`.
//!
//! Effect arithmetic wraps on overflow.

use crate::error::VmError;
use crate::state::{Register, RegisterState, REGISTER_COUNT};
use crate::verified::transfer::bounded_transfer;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Operation performed by an [`Instruction`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Opcode {
    /// Guard: `registers[target] < amount`.
    LessThan,
    /// Guard: `registers[target] == amount`.
    Equal,
    /// Guard: `registers[target] != amount`.
    NotEqual,
    /// `registers[target] = amount`.
    Assign,
    /// `registers[target] += amount`.
    Add,
    /// `registers[target] -= amount`.
    Subtract,
    /// Move `min(registers[source], amount - registers[target])` from
    /// `source` to `target`; `amount` is the target's capacity. The amount
    /// moved is clamped at zero, so a target at or over capacity and a
    /// non-positive source both leave the registers unchanged.
    BoundedTransfer,
}

impl Opcode {
    /// Whether this opcode only tests and never mutates.
    pub fn is_guard(self) -> bool {
        matches!(self, Opcode::LessThan | Opcode::Equal | Opcode::NotEqual)
    }

    /// Whether this opcode reads `source`.
    pub fn uses_source(self) -> bool {
        matches!(self, Opcode::BoundedTransfer)
    }

    /// Short mnemonic used in disassembly.
    pub fn mnemonic(self) -> &'static str {
        match self {
            Opcode::LessThan => "lt",
            Opcode::Equal => "eq",
            Opcode::NotEqual => "ne",
            Opcode::Assign => "set",
            Opcode::Add => "add",
            Opcode::Subtract => "sub",
            Opcode::BoundedTransfer => "xfer",
        }
    }
}

/// One guard or effect over at most two registers and an immediate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Instruction {
    pub opcode: Opcode,
    pub target: u8,
    /// Only read by [`Opcode::BoundedTransfer`].
    #[serde(default)]
    pub source: u8,
    #[serde(default)]
    pub amount: Register,
}

impl Instruction {
    fn unary(opcode: Opcode, target: u8, amount: Register) -> Self {
        Self {
            opcode,
            target,
            source: 0,
            amount,
        }
    }

    /// Guard `registers[target] < amount`.
    pub fn less_than(target: u8, amount: Register) -> Self {
        Self::unary(Opcode::LessThan, target, amount)
    }

    /// Guard `registers[target] == amount`.
    pub fn equal(target: u8, amount: Register) -> Self {
        Self::unary(Opcode::Equal, target, amount)
    }

    /// Guard `registers[target] != amount`.
    pub fn not_equal(target: u8, amount: Register) -> Self {
        Self::unary(Opcode::NotEqual, target, amount)
    }

    pub fn assign(target: u8, amount: Register) -> Self {
        Self::unary(Opcode::Assign, target, amount)
    }

    pub fn add(target: u8, amount: Register) -> Self {
        Self::unary(Opcode::Add, target, amount)
    }

    pub fn subtract(target: u8, amount: Register) -> Self {
        Self::unary(Opcode::Subtract, target, amount)
    }

    /// Pour from `source` into `target` until `target` holds `capacity` or
    /// `source` is empty.
    pub fn bounded_transfer(target: u8, source: u8, capacity: Register) -> Self {
        Self {
            opcode: Opcode::BoundedTransfer,
            target,
            source,
            amount: capacity,
        }
    }

    pub fn is_guard(&self) -> bool {
        self.opcode.is_guard()
    }

    /// Check that every register this instruction touches is below `width`.
    pub fn validate(&self, width: usize) -> Result<(), VmError> {
        let width = width.min(REGISTER_COUNT);
        check_index(self.target, width)?;
        if self.opcode.uses_source() {
            check_index(self.source, width)?;
        }
        Ok(())
    }

    /// Whether every register this instruction touches is below `width`.
    pub fn in_bounds(&self, width: usize) -> bool {
        let width = width.min(REGISTER_COUNT);
        (self.target as usize) < width
            && (!self.opcode.uses_source() || (self.source as usize) < width)
    }

    /// Execute against `state`. See [`execute`].
    pub fn execute(&self, state: &mut RegisterState) -> bool {
        execute(state, self)
    }
}

fn check_index(index: u8, width: usize) -> Result<(), VmError> {
    if (index as usize) < width {
        Ok(())
    } else {
        Err(VmError::RegisterOutOfRange {
            index: index as usize,
            width,
        })
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.opcode.uses_source() {
            write!(
                f,
                "{} r{}, r{}, {}",
                self.opcode.mnemonic(),
                self.target,
                self.source,
                self.amount
            )
        } else {
            write!(f, "{} r{}, {}", self.opcode.mnemonic(), self.target, self.amount)
        }
    }
}

/// Execute one instruction.
///
/// Returns `false` for a guard whose predicate does not hold, and for any
/// instruction addressing a register at or beyond `state.width()`; in both
/// cases `state` is untouched. In-range effects always succeed and return
/// `true`.
pub fn execute(state: &mut RegisterState, instruction: &Instruction) -> bool {
    if !instruction.in_bounds(state.width()) {
        return false;
    }

    let Instruction {
        opcode,
        target,
        source,
        amount,
    } = *instruction;

    match opcode {
        Opcode::LessThan => state.reg(target) < amount,
        Opcode::Equal => state.reg(target) == amount,
        Opcode::NotEqual => state.reg(target) != amount,
        Opcode::Assign => {
            *state.reg_mut(target) = amount;
            true
        }
        Opcode::Add => {
            let slot = state.reg_mut(target);
            *slot = slot.wrapping_add(amount);
            true
        }
        Opcode::Subtract => {
            let slot = state.reg_mut(target);
            *slot = slot.wrapping_sub(amount);
            true
        }
        Opcode::BoundedTransfer => {
            // Pouring a register into itself conserves its content.
            if target == source {
                return true;
            }
            let (new_target, new_source) =
                bounded_transfer(state.reg(target), state.reg(source), amount);
            *state.reg_mut(source) = new_source;
            *state.reg_mut(target) = new_target;
            true
        }
    }
}
