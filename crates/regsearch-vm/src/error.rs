use thiserror::Error;

/// Configuration errors raised while building states and actions.
///
/// None of these can occur during execution: every index and capacity is
/// checked when the state or action is constructed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VmError {
    #[error("register width {width} out of range (1..={max})")]
    InvalidWidth { width: usize, max: usize },

    #[error("register r{index} out of range (width={width})")]
    RegisterOutOfRange { index: usize, width: usize },

    #[error("action '{action}' has {len} instructions (capacity {capacity})")]
    CapacityExceeded {
        action: String,
        len: usize,
        capacity: usize,
    },

    #[error("action name must not be empty")]
    EmptyActionName,

    #[error("instruction {position} of action '{action}' is invalid")]
    InvalidInstruction {
        action: String,
        position: usize,
        #[source]
        reason: Box<VmError>,
    },
}
