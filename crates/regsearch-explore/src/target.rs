//! Target predicates: the condition a search is looking for.

use crate::explorer::ExploreError;
use regsearch_vm::{execute, Instruction, Register, RegisterState};
use std::fmt;

/// Predicate over register states.
///
/// Either an arbitrary closure, or a conjunction of guard instructions.
/// The guard form is what puzzle files use, since closures cannot be
/// serialized.
pub enum Target {
    Predicate(Box<dyn Fn(&RegisterState) -> bool>),
    AllOf(Vec<Instruction>),
}

impl Target {
    /// Wrap a closure.
    pub fn predicate(f: impl Fn(&RegisterState) -> bool + 'static) -> Self {
        Target::Predicate(Box::new(f))
    }

    /// A conjunction of guards. Rejects effect instructions.
    pub fn all_of(guards: Vec<Instruction>) -> Result<Self, ExploreError> {
        check_guards(&guards)?;
        Ok(Target::AllOf(guards))
    }

    /// `registers[index] == value`.
    pub fn register_equals(index: u8, value: Register) -> Self {
        Target::AllOf(vec![Instruction::equal(index, value)])
    }

    /// Check that a declarative target holds only guards, and that their
    /// register indices fit the register width. Closures are opaque and
    /// always pass.
    pub fn validate(&self, width: usize) -> Result<(), ExploreError> {
        if let Target::AllOf(guards) = self {
            check_guards(guards)?;
            for guard in guards {
                guard.validate(width)?;
            }
        }
        Ok(())
    }

    /// Whether `state` satisfies the target.
    pub fn matches(&self, state: &RegisterState) -> bool {
        match self {
            Target::Predicate(f) => f(state),
            Target::AllOf(guards) => {
                // Guards never mutate, but the interpreter takes `&mut`.
                let mut probe = *state;
                guards.iter().all(|guard| execute(&mut probe, guard))
            }
        }
    }
}

// A target must never mutate the state it probes.
fn check_guards(guards: &[Instruction]) -> Result<(), ExploreError> {
    for (position, instruction) in guards.iter().enumerate() {
        if !instruction.is_guard() {
            return Err(ExploreError::TargetNotGuard {
                position,
                instruction: *instruction,
            });
        }
    }
    Ok(())
}

impl fmt::Debug for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Predicate(_) => f.write_str("Predicate(<closure>)"),
            Target::AllOf(guards) => f.debug_tuple("AllOf").field(guards).finish(),
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Predicate(_) => f.write_str("<predicate>"),
            Target::AllOf(guards) if guards.is_empty() => f.write_str("<any state>"),
            Target::AllOf(guards) => {
                for (i, guard) in guards.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" && ")?;
                    }
                    write!(f, "{}", guard)?;
                }
                Ok(())
            }
        }
    }
}
