//! Errors produced by the rule engine when a call does not satisfy its
//! contract.
//!
//! Every fallible operation validates its inputs before touching the
//! [`crate::checkers::roster::Roster`], so an `Err` always means the roster was
//! left exactly as it was.

use std::fmt;

use crate::checkers::core::Direction;

/// The reason a [`RuleError::PreconditionViolation`] was raised.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Precondition {
    /// Roster slot index is not within `0..ROSTER_SIZE`.
    NoSuchSlot,
    /// Actions were requested for (or applied to) a captured piece.
    InactivePiece,
    /// Action index is not within `0..8`.
    NoSuchAction(usize),
    /// The action is not currently legal for the piece.
    IllegalAction(Direction),
}

/// Everything that can go wrong when calling into the rule engine.
#[derive(Clone, Debug, PartialEq)]
pub enum RuleError {
    /// The call is not valid for the current state of the piece or roster.
    PreconditionViolation {
        #[allow(missing_docs)]
        slot: usize,
        #[allow(missing_docs)]
        reason: Precondition,
    },
    /// The roster does not have exactly 24 slots, breaks the slot/color
    /// convention or has two active pieces on the same square.
    MalformedRoster(String),
    /// Square coordinates are outside of `[1, 8] x [1, 8]`.
    OutOfBounds {
        #[allow(missing_docs)]
        file: i32,
        #[allow(missing_docs)]
        rank: i32,
    },
    /// Keep probability for the randomized initializer is outside of `[0, 1]`.
    InvalidProbability(f64),
}

impl RuleError {
    pub(crate) const fn violation(slot: usize, reason: Precondition) -> Self {
        Self::PreconditionViolation { slot, reason }
    }
}

impl fmt::Display for Precondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoSuchSlot => f.write_str("slot does not exist"),
            Self::InactivePiece => f.write_str("piece is not active"),
            Self::NoSuchAction(index) => write!(f, "action index should be in 0..8, got {index}"),
            Self::IllegalAction(direction) => write!(f, "{direction:?} is not legal"),
        }
    }
}

impl fmt::Display for RuleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PreconditionViolation { slot, reason } => {
                write!(f, "precondition violated for slot {slot}: {reason}")
            },
            Self::MalformedRoster(reason) => write!(f, "malformed roster: {reason}"),
            Self::OutOfBounds { file, rank } => {
                write!(f, "square ({file}, {rank}) is outside of the board")
            },
            Self::InvalidProbability(p) => {
                write!(f, "keep probability should be within [0, 1], got {p}")
            },
        }
    }
}

impl std::error::Error for RuleError {}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            RuleError::violation(3, Precondition::InactivePiece).to_string(),
            "precondition violated for slot 3: piece is not active"
        );
        assert_eq!(
            RuleError::violation(0, Precondition::IllegalAction(Direction::JumpLeftForward))
                .to_string(),
            "precondition violated for slot 0: JumpLeftForward is not legal"
        );
        assert_eq!(
            RuleError::OutOfBounds { file: 0, rank: 9 }.to_string(),
            "square (0, 9) is outside of the board"
        );
    }

    #[test]
    fn converts_into_anyhow() {
        let error: anyhow::Error = RuleError::InvalidProbability(1.5).into();
        assert_eq!(
            error.to_string(),
            "keep probability should be within [0, 1], got 1.5"
        );
        assert!(error.downcast_ref::<RuleError>().is_some());
    }
}
