//! Checkers primitives commonly used within [`crate::checkers`].

use std::fmt::{self, Write};

use anyhow::bail;
use itertools::Itertools;

use crate::checkers::error::RuleError;

#[allow(missing_docs)]
pub const BOARD_WIDTH: u8 = 8;
#[allow(missing_docs)]
pub const BOARD_SIZE: u8 = BOARD_WIDTH * BOARD_WIDTH;

/// Board square addressed by 1-based file (column, `a` = 1) and rank (row, 1 is
/// the light side's back rank).
///
/// A square can only be constructed within the board:
///
/// ```
/// use draughts::checkers::core::Square;
///
/// assert!(Square::new(3, 3).is_ok());
/// assert!(Square::new(0, 3).is_err());
/// assert!(Square::new(3, 9).is_err());
/// assert_eq!(Square::new(5, 5).unwrap().to_string(), "e5");
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    file: u8,
    rank: u8,
}

impl Square {
    /// Connects file and rank to form a full square.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::OutOfBounds`] if either coordinate is outside of
    /// `1..=BOARD_WIDTH`.
    pub fn new(file: u8, rank: u8) -> Result<Self, RuleError> {
        if (1..=BOARD_WIDTH).contains(&file) && (1..=BOARD_WIDTH).contains(&rank) {
            Ok(Self { file, rank })
        } else {
            Err(RuleError::OutOfBounds {
                file: file.into(),
                rank: rank.into(),
            })
        }
    }

    /// Builds compile-time tables. Callers guarantee both coordinates are
    /// within the board.
    pub(super) const fn at(file: u8, rank: u8) -> Self {
        Self { file, rank }
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn file(self) -> u8 {
        self.file
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn rank(self) -> u8 {
        self.rank
    }

    /// Moves the square by `(file, rank)` offset. Returns `None` if the
    /// result falls off the board.
    #[must_use]
    pub fn shift(self, (file, rank): (i8, i8)) -> Option<Self> {
        let file = u8::try_from(i16::from(self.file) + i16::from(file)).ok()?;
        let rank = u8::try_from(i16::from(self.rank) + i16::from(rank)).ok()?;
        Self::new(file, rank).ok()
    }

    /// Iterates over all squares, file by file.
    pub fn iter() -> impl Iterator<Item = Self> {
        (1..=BOARD_WIDTH)
            .cartesian_product(1..=BOARD_WIDTH)
            .map(|(file, rank)| Self { file, rank })
    }
}

impl TryFrom<&str> for Square {
    type Error = anyhow::Error;

    /// Parses a square in algebraic form, e.g. `c3`.
    fn try_from(square: &str) -> anyhow::Result<Self> {
        let (file, rank) = match square.trim().chars().collect_tuple() {
            Some((file, rank)) => (file, rank),
            None => bail!(
                "square should be two-char, got {square} with {} chars",
                square.chars().count()
            ),
        };
        let file = match file {
            'a'..='h' => file as u8 - b'a' + 1,
            _ => bail!("file should be within 'a'..='h', got '{file}'"),
        };
        let rank = match rank {
            '1'..='8' => rank as u8 - b'0',
            _ => bail!("rank should be within '1'..='8', got '{rank}'"),
        };
        Ok(Self::new(file, rank)?)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char((b'a' + self.file - 1) as char)?;
        write!(f, "{}", self.rank)
    }
}

/// The two sides of a checkers game. Light starts on ranks 1..=3 and moves
/// towards rank 8, dark starts on ranks 6..=8 and moves towards rank 1.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::EnumIter)]
pub enum Color {
    Light,
    Dark,
}

impl Color {
    /// "Flips" the color.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Rank offset of a man's forward step.
    #[must_use]
    pub const fn forward(self) -> i8 {
        match self {
            Self::Light => 1,
            Self::Dark => -1,
        }
    }

    /// The opponent's back rank: a man reaching it is promoted.
    #[must_use]
    pub const fn promotion_rank(self) -> u8 {
        match self {
            Self::Light => BOARD_WIDTH,
            Self::Dark => 1,
        }
    }

    /// Index of the color plane in [`crate::evaluation::encoding::BoardEncoding`].
    #[must_use]
    pub const fn plane(self) -> usize {
        match self {
            Self::Light => 0,
            Self::Dark => 1,
        }
    }
}

impl TryFrom<&str> for Color {
    type Error = anyhow::Error;

    fn try_from(color: &str) -> anyhow::Result<Self> {
        match color {
            "light" | "l" => Ok(Self::Light),
            "dark" | "d" => Ok(Self::Dark),
            _ => bail!("color should be 'light' or 'dark', got '{color}'"),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Light => "light",
            Self::Dark => "dark",
        })
    }
}

/// Men move forward only; a man reaching the far rank becomes a king that
/// moves both ways.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tier {
    Man,
    King,
}

impl Tier {
    /// Material value used by [`crate::evaluation::material`].
    #[must_use]
    pub const fn value(self) -> i32 {
        match self {
            Self::Man => 1,
            Self::King => 3,
        }
    }

    /// Directions the tier is allowed to consider, in action vector order.
    #[must_use]
    pub const fn directions(self) -> &'static [Direction] {
        match self {
            Self::Man => &Direction::FORWARD,
            Self::King => &Direction::ALL,
        }
    }

    /// Rank offset that "forward" directions resolve to. A man follows its
    /// color; king action slots are fixed to the board: forward always points
    /// towards rank 8.
    #[must_use]
    pub const fn orientation(self, color: Color) -> i8 {
        match self {
            Self::Man => color.forward(),
            Self::King => 1,
        }
    }

    /// Name used in verbose move notation.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Man => "Piece",
            Self::King => "King",
        }
    }

    /// Symbol used in algebraic move notation.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Man => 'P',
            Self::King => 'K',
        }
    }
}

/// Candidate moves of a single piece. The discriminant is the position of the
/// direction in the action vector.
///
/// "Left" is always towards file `a`. "Forward" is resolved through
/// [`Tier::orientation`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, strum::EnumIter)]
#[allow(missing_docs)]
pub enum Direction {
    StepLeftForward = 0,
    StepRightForward = 1,
    JumpLeftForward = 2,
    JumpRightForward = 3,
    StepLeftBackward = 4,
    StepRightBackward = 5,
    JumpLeftBackward = 6,
    JumpRightBackward = 7,
}

impl Direction {
    /// All directions in action vector order.
    pub const ALL: [Self; 8] = [
        Self::StepLeftForward,
        Self::StepRightForward,
        Self::JumpLeftForward,
        Self::JumpRightForward,
        Self::StepLeftBackward,
        Self::StepRightBackward,
        Self::JumpLeftBackward,
        Self::JumpRightBackward,
    ];
    /// The four directions available to a man.
    pub const FORWARD: [Self; 4] = [
        Self::StepLeftForward,
        Self::StepRightForward,
        Self::JumpLeftForward,
        Self::JumpRightForward,
    ];

    /// Position in the action vector.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Inverse of [`Direction::index`].
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < Self::ALL.len() {
            Some(Self::ALL[index])
        } else {
            None
        }
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn is_jump(self) -> bool {
        matches!(
            self,
            Self::JumpLeftForward
                | Self::JumpRightForward
                | Self::JumpLeftBackward
                | Self::JumpRightBackward
        )
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn is_forward(self) -> bool {
        (self as u8) < 4
    }

    const fn is_left(self) -> bool {
        matches!(
            self,
            Self::StepLeftForward
                | Self::JumpLeftForward
                | Self::StepLeftBackward
                | Self::JumpLeftBackward
        )
    }

    /// Single diagonal step this direction is built from.
    const fn unit(self, orientation: i8) -> (i8, i8) {
        let file = if self.is_left() { -1 } else { 1 };
        let rank = if self.is_forward() {
            orientation
        } else {
            -orientation
        };
        (file, rank)
    }

    /// `(file, rank)` offset from the origin to the destination.
    #[must_use]
    pub const fn delta(self, orientation: i8) -> (i8, i8) {
        let (file, rank) = self.unit(orientation);
        if self.is_jump() {
            (file * 2, rank * 2)
        } else {
            (file, rank)
        }
    }

    /// `(file, rank)` offset from the origin to the jumped-over square, `None`
    /// for steps.
    #[must_use]
    pub const fn midpoint(self, orientation: i8) -> Option<(i8, i8)> {
        if self.is_jump() {
            Some(self.unit(orientation))
        } else {
            None
        }
    }
}
