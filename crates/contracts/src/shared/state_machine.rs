use super::status::StatusDisplay;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot move from '{from}' to '{to}'")]
pub struct TransitionError {
    pub from: &'static str,
    pub to: &'static str,
}

/// Finite-state machine over a status enum.
///
/// Only `can_transition` is implemented per enum; it must reject
/// self-transitions.
pub trait StatusMachine: StatusDisplay {
    fn can_transition(from: Self, to: Self) -> bool;

    fn transition(self, to: Self) -> Result<Self, TransitionError> {
        if Self::can_transition(self, to) {
            return Ok(to);
        }

        Err(TransitionError {
            from: self.code(),
            to: to.code(),
        })
    }

    /// No outgoing edges
    fn is_terminal(self) -> bool {
        Self::ALL.iter().all(|&to| !Self::can_transition(self, to))
    }

    fn next_states(self) -> Vec<Self> {
        Self::ALL
            .iter()
            .copied()
            .filter(|&to| Self::can_transition(self, to))
            .collect()
    }
}
