//! Pure, verifiable functions for capacity-bounded register transfers.
//!
//! Every function in this module is:
//! - **Pure**: no side effects beyond the return value.
//! - **Deterministic**: same inputs always produce the same outputs.
//! - **Assertion-guarded**: Tiger Style `debug_assert!` postconditions.
//!
//! | Verified function     | Used by                                       |
//! |-----------------------|-----------------------------------------------|
//! | [`transfer_amount`]   | [`bounded_transfer`]                          |
//! | [`bounded_transfer`]  | `Opcode::BoundedTransfer` in `instruction.rs` |

use crate::state::Register;

/// How much flows from `source` into `target` when `target` may hold at
/// most `capacity`.
///
/// This is `min(source, capacity - target)`, clamped at zero: a target
/// already at or over capacity receives nothing, and a non-positive source
/// gives nothing.
///
/// # Examples
///
/// ```
/// use regsearch_vm::verified::transfer::transfer_amount;
///
/// assert_eq!(transfer_amount(0, 3, 5), 3); // everything fits
/// assert_eq!(transfer_amount(4, 3, 5), 1); // only the remaining room
/// assert_eq!(transfer_amount(5, 3, 5), 0); // already full
/// assert_eq!(transfer_amount(7, 3, 5), 0); // over capacity
/// ```
pub fn transfer_amount(target: Register, source: Register, capacity: Register) -> Register {
    let room = capacity.wrapping_sub(target);
    let moved = source.min(room).max(0);

    // Tiger Style: never negative, never more than the source holds
    debug_assert!(moved >= 0);
    debug_assert!(moved == 0 || moved <= source);

    moved
}

/// Move as much as fits from `source` into `target`.
///
/// Returns `(new_target, new_source)`. The sum of the two registers is
/// unchanged (in wrapping arithmetic), `new_target` never exceeds
/// `capacity` when `target <= capacity`, and `new_source` never drops below
/// zero when `source >= 0`.
///
/// # Examples
///
/// ```
/// use regsearch_vm::verified::transfer::bounded_transfer;
///
/// // Pour a 3-litre jug into a 5-litre jug holding 4.
/// assert_eq!(bounded_transfer(4, 3, 5), (5, 2));
/// ```
pub fn bounded_transfer(
    target: Register,
    source: Register,
    capacity: Register,
) -> (Register, Register) {
    let moved = transfer_amount(target, source, capacity);
    let new_target = target.wrapping_add(moved);
    let new_source = source.wrapping_sub(moved);

    // Tiger Style: conservation
    debug_assert_eq!(
        new_target.wrapping_add(new_source),
        target.wrapping_add(source)
    );
    // Tiger Style: bounds, when the inputs start inside them
    debug_assert!(target > capacity || new_target <= capacity);
    debug_assert!(source < 0 || new_source >= 0);

    (new_target, new_source)
}
