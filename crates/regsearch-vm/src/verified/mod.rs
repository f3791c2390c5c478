//! Verified pure functions for the register machine.
//!
//! This module contains the arithmetic core of the VM extracted from the
//! instruction interpreter. Every function here takes values in and returns
//! values out: **no I/O, no allocation, no shared state**.
//!
//! # Why a separate module?
//!
//! The interpreter in [`crate::instruction`] only indexes registers and
//! dispatches on the opcode. The parts that carry actual invariants
//! (conservation of bounded transfers, hash determinism) live here, where
//! they can be tested exhaustively over small domains and guarded with
//! Tiger Style `debug_assert!` pre/postconditions.
//!
//! - [`transfer`]: capacity-bounded flow between two registers
//! - [`hash`]: FNV-1a 64 used for state fingerprints

pub mod hash;
pub mod transfer;
