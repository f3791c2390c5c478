//! The modeled system handed to the explorer.

use crate::explorer::ExploreError;
use regsearch_vm::{Action, RegisterState, VmError, REGISTER_COUNT};
use std::collections::BTreeSet;

/// A validated system description: register width, initial state and the
/// ordered action list.
///
/// Action order is significant. The explorer tries actions in exactly this
/// order, which decides the witness returned when several shortest paths
/// exist.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    register_names: Vec<String>,
    initial: RegisterState,
    actions: Vec<Action>,
}

impl SearchConfig {
    /// Validate and build a configuration.
    ///
    /// Fails fast if `width` is outside the register file, if `initial`
    /// has a different width, if any action addresses a register at or
    /// beyond `width`, or if two actions share a name.
    pub fn new(
        width: usize,
        initial: RegisterState,
        actions: Vec<Action>,
    ) -> Result<Self, ExploreError> {
        if width == 0 || width > REGISTER_COUNT {
            return Err(VmError::InvalidWidth {
                width,
                max: REGISTER_COUNT,
            }
            .into());
        }
        if initial.width() != width {
            return Err(ExploreError::WidthMismatch {
                expected: width,
                actual: initial.width(),
            });
        }

        let mut names = BTreeSet::new();
        for action in &actions {
            action.validate(width)?;
            if !names.insert(action.name()) {
                return Err(ExploreError::DuplicateAction(action.name().to_string()));
            }
        }

        Ok(Self {
            register_names: (0..width).map(|i| format!("r{}", i)).collect(),
            initial,
            actions,
        })
    }

    /// Replace the default `r0`, `r1`, ... names used when rendering.
    pub fn with_register_names<I, S>(mut self, names: I) -> Result<Self, ExploreError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if names.len() != self.width() {
            return Err(ExploreError::RegisterNames {
                expected: self.width(),
                actual: names.len(),
            });
        }
        self.register_names = names;
        Ok(self)
    }

    pub fn width(&self) -> usize {
        self.initial.width()
    }

    pub fn initial(&self) -> &RegisterState {
        &self.initial
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    pub fn register_names(&self) -> &[String] {
        &self.register_names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use regsearch_vm::Instruction;

    fn fill(name: &str, register: u8) -> Action {
        Action::new(name, &[Instruction::assign(register, 1)]).unwrap()
    }

    fn zeros(width: usize) -> RegisterState {
        RegisterState::new(width).unwrap()
    }

    #[test]
    fn test_new_valid() {
        let config = SearchConfig::new(2, zeros(2), vec![fill("A", 0), fill("B", 1)]).unwrap();
        assert_eq!(config.width(), 2);
        assert_eq!(config.actions().len(), 2);
        assert_eq!(config.register_names(), &["r0", "r1"]);
    }

    #[test]
    fn test_width_out_of_range() {
        assert!(matches!(
            SearchConfig::new(0, zeros(1), Vec::new()),
            Err(ExploreError::Vm(VmError::InvalidWidth { width: 0, .. }))
        ));
        assert!(matches!(
            SearchConfig::new(9, zeros(8), Vec::new()),
            Err(ExploreError::Vm(VmError::InvalidWidth { width: 9, .. }))
        ));
    }

    #[test]
    fn test_width_mismatch() {
        assert!(matches!(
            SearchConfig::new(3, zeros(2), Vec::new()),
            Err(ExploreError::WidthMismatch {
                expected: 3,
                actual: 2
            })
        ));
    }

    #[test]
    fn test_register_index_beyond_width() {
        let err = SearchConfig::new(2, zeros(2), vec![fill("C", 2)]).unwrap_err();
        assert!(matches!(
            err,
            ExploreError::Vm(VmError::InvalidInstruction { .. })
        ));
    }

    #[test]
    fn test_duplicate_action_names() {
        let err = SearchConfig::new(2, zeros(2), vec![fill("A", 0), fill("A", 1)]).unwrap_err();
        assert!(matches!(err, ExploreError::DuplicateAction(name) if name == "A"));
    }

    #[test]
    fn test_register_names() {
        let config = SearchConfig::new(2, zeros(2), Vec::new())
            .unwrap()
            .with_register_names(["small", "big"])
            .unwrap();
        assert_eq!(config.register_names(), &["small", "big"]);

        let err = SearchConfig::new(2, zeros(2), Vec::new())
            .unwrap()
            .with_register_names(["only"])
            .unwrap_err();
        assert!(matches!(
            err,
            ExploreError::RegisterNames {
                expected: 2,
                actual: 1
            }
        ));
    }
}
