//! Summaries of a [`crate::checkers::roster::Roster`] for consumers outside the
//! rule engine: the material [`Score`] and the occupancy tensor fed to
//! external evaluators.

use std::fmt::Display;
use std::ops::Neg;

pub mod encoding;
pub mod material;

/// Material differential from the light side's perspective: a thin wrapper
/// around i32 with the same size and ergonomics.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Score {
    value: i32,
}

impl Score {
    /// Both sides have the same material.
    pub const EVEN: Self = Self { value: 0 };

    #[allow(missing_docs)]
    #[must_use]
    pub const fn value(self) -> i32 {
        self.value
    }
}

impl Neg for Score {
    type Output = Self;

    /// Mirrors the score to the dark side's perspective.
    fn neg(self) -> Self::Output {
        Self { value: -self.value }
    }
}

impl From<i32> for Score {
    fn from(value: i32) -> Self {
        Self { value }
    }
}

impl From<Score> for i32 {
    fn from(score: Score) -> Self {
        score.value
    }
}

impl Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:+}", self.value)
    }
}
