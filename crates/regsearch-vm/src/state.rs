//! Register state and its fingerprint.

use crate::error::VmError;
use crate::verified::hash::fnv1a_64;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Capacity of the register file. Eight `i64` registers fill one 64-byte
/// cache line.
pub const REGISTER_COUNT: usize = 8;

/// A single register value. Booleans use the 0/1 convention.
pub type Register = i64;

/// The complete configuration of a modeled system.
///
/// Only the first `width` registers are active; the rest stay zero. States
/// are `Copy`: actions produce new states, stored states are never touched.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "Vec<Register>", try_from = "Vec<Register>")]
pub struct RegisterState {
    width: u8,
    registers: [Register; REGISTER_COUNT],
}

impl RegisterState {
    /// Create a zeroed state with `width` active registers.
    pub fn new(width: usize) -> Result<Self, VmError> {
        check_width(width)?;
        Ok(Self {
            width: width as u8,
            registers: [0; REGISTER_COUNT],
        })
    }

    /// Create a state whose active registers are `values`.
    pub fn from_slice(values: &[Register]) -> Result<Self, VmError> {
        let mut state = Self::new(values.len())?;
        state.registers[..values.len()].copy_from_slice(values);
        Ok(state)
    }

    /// Number of active registers.
    pub fn width(&self) -> usize {
        self.width as usize
    }

    /// Read an active register.
    pub fn get(&self, index: usize) -> Option<Register> {
        self.as_slice().get(index).copied()
    }

    /// The active registers, in index order.
    pub fn as_slice(&self) -> &[Register] {
        &self.registers[..self.width()]
    }

    /// Content hash of the active registers.
    pub fn fingerprint(&self) -> Fingerprint {
        fingerprint(self)
    }

    // Indexing for the interpreter. Indices are validated when instructions
    // are built, so these only ever see in-range values.
    pub(crate) fn reg(&self, index: u8) -> Register {
        debug_assert!((index as usize) < self.width());
        self.registers[index as usize]
    }

    pub(crate) fn reg_mut(&mut self, index: u8) -> &mut Register {
        debug_assert!((index as usize) < self.width());
        &mut self.registers[index as usize]
    }
}

fn check_width(width: usize) -> Result<(), VmError> {
    if width == 0 || width > REGISTER_COUNT {
        return Err(VmError::InvalidWidth {
            width,
            max: REGISTER_COUNT,
        });
    }
    Ok(())
}

impl fmt::Debug for RegisterState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl fmt::Display for RegisterState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, value) in self.as_slice().iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", value)?;
        }
        write!(f, "]")
    }
}

impl From<RegisterState> for Vec<Register> {
    fn from(state: RegisterState) -> Self {
        state.as_slice().to_vec()
    }
}

impl TryFrom<Vec<Register>> for RegisterState {
    type Error = VmError;

    fn try_from(values: Vec<Register>) -> Result<Self, Self::Error> {
        Self::from_slice(&values)
    }
}

/// 64-bit content hash identifying a state.
///
/// Equal register contents always produce equal fingerprints. The converse
/// does not hold in general: distinct states may collide.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Fingerprint(pub u64);

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

/// Fingerprint a state: FNV-1a 64 over the little-endian bytes of the
/// active registers, in index order.
pub fn fingerprint(state: &RegisterState) -> Fingerprint {
    const WORD: usize = std::mem::size_of::<Register>();

    let mut bytes = [0u8; REGISTER_COUNT * WORD];
    for (chunk, value) in bytes.chunks_exact_mut(WORD).zip(state.as_slice()) {
        chunk.copy_from_slice(&value.to_le_bytes());
    }
    Fingerprint(fnv1a_64(&bytes[..state.width() * WORD]))
}
