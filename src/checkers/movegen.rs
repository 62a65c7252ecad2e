//! Legal action generation for a single piece.
//!
//! Every direction is checked independently against the current roster:
//!
//! - A step is legal if the destination is on the board and no active piece
//!   stands there.
//! - A jump is legal if the destination is on the board and empty, and the
//!   square in between holds an active opponent piece. The jump does not
//!   depend on the step in the same direction (which is normally blocked by
//!   the very piece being captured).
//!
//! Capturing is never mandatory and a jump ends the turn.

use arrayvec::ArrayVec;
use itertools::Itertools;

use crate::checkers::core::{Color, Direction, Square};
use crate::checkers::error::{Precondition, RuleError};
use crate::checkers::piece::Piece;
use crate::checkers::roster::{slots, Roster, PIECES_PER_COLOR};

/// Length of the action vector.
pub const ACTION_VECTOR_SIZE: usize = Direction::ALL.len();

/// Action space of one side: one action vector per slot of that color.
pub type ActionSpace = [[u8; ACTION_VECTOR_SIZE]; PIECES_PER_COLOR];

bitflags::bitflags! {
    /// Set of legal [`Direction`]s of a piece. Bit `i` corresponds to the
    /// direction with [`Direction::index`] `i`.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ActionMask: u8 {
        #[allow(missing_docs)]
        const STEP_LEFT_FORWARD = 1 << 0;
        #[allow(missing_docs)]
        const STEP_RIGHT_FORWARD = 1 << 1;
        #[allow(missing_docs)]
        const JUMP_LEFT_FORWARD = 1 << 2;
        #[allow(missing_docs)]
        const JUMP_RIGHT_FORWARD = 1 << 3;
        #[allow(missing_docs)]
        const STEP_LEFT_BACKWARD = 1 << 4;
        #[allow(missing_docs)]
        const STEP_RIGHT_BACKWARD = 1 << 5;
        #[allow(missing_docs)]
        const JUMP_LEFT_BACKWARD = 1 << 6;
        #[allow(missing_docs)]
        const JUMP_RIGHT_BACKWARD = 1 << 7;
    }
}

impl From<Direction> for ActionMask {
    fn from(direction: Direction) -> Self {
        Self::from_bits_retain(1 << direction.index())
    }
}

/// Legal actions of a piece: the direction set plus the destination of every
/// legal direction, in action vector order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Actions {
    mask: ActionMask,
    destinations: ArrayVec<Square, ACTION_VECTOR_SIZE>,
}

impl Default for Actions {
    fn default() -> Self {
        Self {
            mask: ActionMask::empty(),
            destinations: ArrayVec::new(),
        }
    }
}

impl Actions {
    fn push(&mut self, direction: Direction, destination: Square) {
        self.mask |= direction.into();
        self.destinations.push(destination);
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn mask(&self) -> ActionMask {
        self.mask
    }

    #[allow(missing_docs)]
    #[must_use]
    pub fn contains(&self, direction: Direction) -> bool {
        self.mask.contains(direction.into())
    }

    #[allow(missing_docs)]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.mask.is_empty()
    }

    #[allow(missing_docs)]
    #[must_use]
    pub fn len(&self) -> usize {
        self.destinations.len()
    }

    /// The 0/1 action vector.
    #[must_use]
    pub fn vector(&self) -> [u8; ACTION_VECTOR_SIZE] {
        Direction::ALL.map(|direction| u8::from(self.contains(direction)))
    }

    /// One destination per legal direction, in action vector order.
    #[must_use]
    pub fn destinations(&self) -> &[Square] {
        &self.destinations
    }

    /// Destination of `direction` if it is legal.
    #[must_use]
    pub fn destination(&self, direction: Direction) -> Option<Square> {
        self.iter()
            .find(|(candidate, _)| *candidate == direction)
            .map(|(_, square)| square)
    }

    /// Iterates over legal `(direction, destination)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Direction, Square)> + '_ {
        Direction::ALL
            .into_iter()
            .filter(|&direction| self.contains(direction))
            .zip_eq(self.destinations.iter().copied())
    }
}

impl Roster {
    /// Computes legal actions of the piece in `slot`.
    ///
    /// ```
    /// use draughts::checkers::core::Direction;
    /// use draughts::checkers::roster::Roster;
    ///
    /// let roster = Roster::standard();
    /// // Light man on g3.
    /// let actions = roster.actions(11).unwrap();
    /// assert_eq!(actions.vector(), [1, 1, 0, 0, 0, 0, 0, 0]);
    /// assert_eq!(
    ///     actions.destination(Direction::StepRightForward).unwrap().to_string(),
    ///     "h4"
    /// );
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::PreconditionViolation`] if the slot does not exist
    /// or the piece is no longer active.
    pub fn actions(&self, slot: usize) -> Result<Actions, RuleError> {
        let piece = self.piece(slot)?;
        if !piece.is_active() {
            return Err(RuleError::violation(slot, Precondition::InactivePiece));
        }
        Ok(self.legal_actions(piece))
    }

    pub(super) fn legal_actions(&self, piece: &Piece) -> Actions {
        let mut actions = Actions::default();
        for &direction in piece.tier().directions() {
            if let Some(destination) = self.destination(piece, direction) {
                actions.push(direction, destination);
            }
        }
        actions
    }

    /// Destination of `direction` if it is legal for `piece`.
    fn destination(&self, piece: &Piece, direction: Direction) -> Option<Square> {
        let orientation = piece.tier().orientation(piece.color());
        let destination = piece.position().shift(direction.delta(orientation))?;
        if self.occupant(destination).is_some() {
            return None;
        }
        match direction.midpoint(orientation) {
            None => Some(destination),
            Some(midpoint) => {
                let jumped = self.at(piece.position().shift(midpoint)?)?;
                (jumped.color() != piece.color()).then_some(destination)
            },
        }
    }
}

/// Builds the action space of `color`: row `i` is the action vector of slot
/// `i` (light) or `i + 12` (dark). Captured pieces have all-zero rows.
#[must_use]
pub fn action_space(roster: &Roster, color: Color) -> ActionSpace {
    let mut space = [[0; ACTION_VECTOR_SIZE]; PIECES_PER_COLOR];
    for (row, slot) in slots(color).enumerate() {
        if let Ok(actions) = roster.actions(slot) {
            space[row] = actions.vector();
        }
    }
    space
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;

    fn setup(diagram: &str) -> Roster {
        Roster::from_diagram(diagram).expect("valid diagram")
    }

    #[test]
    fn lone_man() {
        let roster = setup(
            "........\n\
             ........\n\
             ........\n\
             ........\n\
             ........\n\
             ..P.....\n\
             ........\n\
             ........",
        );
        let actions = roster.actions(0).unwrap();
        assert_eq!(actions.vector(), [1, 1, 0, 0, 0, 0, 0, 0]);
        assert_eq!(
            actions.destinations(),
            &[Square::at(2, 4), Square::at(4, 4)]
        );
    }

    #[test]
    fn dark_man_moves_down() {
        let roster = setup(
            "........\n\
             ........\n\
             ........\n\
             ...p....\n\
             ........\n\
             ........\n\
             ........\n\
             ........",
        );
        let actions = roster.actions(12).unwrap();
        assert_eq!(actions.vector(), [1, 1, 0, 0, 0, 0, 0, 0]);
        assert_eq!(
            actions.destinations(),
            &[Square::at(3, 4), Square::at(5, 4)]
        );
    }

    #[test]
    fn jump_over_opponent() {
        // Light man on c3, dark man on d4.
        let roster = setup(
            "........\n\
             ........\n\
             ........\n\
             ........\n\
             ...p....\n\
             ..P.....\n\
             ........\n\
             ........",
        );
        let actions = roster.actions(0).unwrap();
        assert_eq!(actions.vector(), [1, 0, 0, 1, 0, 0, 0, 0]);
        assert_eq!(
            actions.destination(Direction::JumpRightForward),
            Some(Square::at(5, 5))
        );
        assert_eq!(actions.destination(Direction::StepRightForward), None);

        // The dark man moves towards rank 1 and can capture the light man.
        let actions = roster.actions(12).unwrap();
        assert_eq!(actions.vector(), [0, 1, 1, 0, 0, 0, 0, 0]);
        assert_eq!(
            actions.destination(Direction::JumpLeftForward),
            Some(Square::at(2, 2))
        );
    }

    #[test]
    fn no_jump_over_own_piece_or_into_occupied() {
        let roster = setup(
            "........\n\
             ........\n\
             ........\n\
             .....p..\n\
             ...P....\n\
             ..P.....\n\
             ........\n\
             ........",
        );
        // c3 is blocked by own piece on d4 and can't jump it.
        assert_eq!(roster.actions(1).unwrap().vector(), [1, 0, 0, 0, 0, 0, 0, 0]);

        let roster = setup(
            "........\n\
             ........\n\
             ........\n\
             ....p...\n\
             ...p....\n\
             ..P.....\n\
             ........\n\
             ........",
        );
        // Landing square e5 is occupied.
        assert_eq!(roster.actions(0).unwrap().vector(), [1, 0, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn edges() {
        let roster = setup(
            "........\n\
             ........\n\
             ........\n\
             ........\n\
             ........\n\
             ........\n\
             .p......\n\
             P.......",
        );
        // a1 has no left moves and can't jump off the board.
        assert_eq!(roster.actions(0).unwrap().vector(), [0, 0, 0, 1, 0, 0, 0, 0]);
        // Dark man on b2 can only step onto c1: a1 is taken and jumps fall off.
        let actions = roster.actions(12).unwrap();
        assert_eq!(actions.vector(), [0, 1, 0, 0, 0, 0, 0, 0]);
        assert_eq!(actions.destinations(), &[Square::at(3, 1)]);
    }

    #[test]
    fn king_uses_all_directions() {
        let roster = setup(
            "........\n\
             ........\n\
             ........\n\
             ........\n\
             ...K....\n\
             ........\n\
             ........\n\
             ........",
        );
        let actions = roster.actions(0).unwrap();
        assert_eq!(actions.vector(), [1, 1, 0, 0, 1, 1, 0, 0]);
        assert_eq!(
            actions.destinations(),
            &[
                Square::at(3, 5),
                Square::at(5, 5),
                Square::at(3, 3),
                Square::at(5, 3)
            ]
        );
    }

    #[test]
    fn dark_king_forward_is_towards_rank_eight() {
        let roster = setup(
            "........\n\
             ........\n\
             ........\n\
             ........\n\
             ...k....\n\
             ..P.....\n\
             ........\n\
             ........",
        );
        let actions = roster.actions(12).unwrap();
        assert_eq!(actions.vector(), [1, 1, 0, 0, 0, 1, 1, 0]);
        assert_eq!(
            actions.destination(Direction::JumpLeftBackward),
            Some(Square::at(2, 2))
        );
    }

    #[test]
    fn king_jump_right_backward_uses_own_midpoint() {
        // King on e5 with an opponent on f4 (its own right-backward midpoint)
        // and another one on f6.
        let roster = setup(
            "........\n\
             ........\n\
             .....p..\n\
             ....K...\n\
             .....p..\n\
             ........\n\
             ........\n\
             ........",
        );
        let actions = roster.actions(0).unwrap();
        assert!(actions.contains(Direction::JumpRightBackward));
        assert_eq!(
            actions.destination(Direction::JumpRightBackward),
            Some(Square::at(7, 3))
        );

        // The opponent piece on f6 alone does not enable the jump to g3.
        let roster = setup(
            "........\n\
             ........\n\
             .....p..\n\
             ....K...\n\
             ........\n\
             ........\n\
             ........\n\
             ........",
        );
        let actions = roster.actions(0).unwrap();
        assert!(!actions.contains(Direction::JumpRightBackward));
        assert!(actions.contains(Direction::JumpRightForward));
    }

    #[test]
    fn man_ignores_backward_captures() {
        let roster = setup(
            "........\n\
             ........\n\
             ........\n\
             ........\n\
             ...P....\n\
             ..p.p...\n\
             ........\n\
             ........",
        );
        assert_eq!(roster.actions(0).unwrap().vector(), [1, 1, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn inactive_piece() {
        let roster = setup(&"........\n".repeat(8));
        assert_eq!(
            roster.actions(3),
            Err(RuleError::violation(3, Precondition::InactivePiece))
        );
        assert_eq!(
            roster.actions(30),
            Err(RuleError::violation(30, Precondition::NoSuchSlot))
        );
    }

    #[test]
    fn standard_action_space() {
        let roster = Roster::standard();
        let light = action_space(&roster, Color::Light);
        // Only the men on the third rank (slots 8..12) can move.
        for row in 0..8 {
            assert_eq!(light[row], [0; ACTION_VECTOR_SIZE]);
        }
        assert_eq!(light[8], [0, 1, 0, 0, 0, 0, 0, 0]);
        assert_eq!(light[9], [1, 1, 0, 0, 0, 0, 0, 0]);
        assert_eq!(light[11], [1, 1, 0, 0, 0, 0, 0, 0]);

        let dark = action_space(&roster, Color::Dark);
        // Dark men on the sixth rank are slots 20..24.
        assert_eq!(dark[8], [1, 1, 0, 0, 0, 0, 0, 0]);
        assert_eq!(dark[11], [1, 0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(dark[0], [0; ACTION_VECTOR_SIZE]);
    }

    #[test]
    fn mask_bits() {
        assert_eq!(
            ActionMask::from(Direction::JumpRightBackward),
            ActionMask::JUMP_RIGHT_BACKWARD
        );
        assert_eq!(
            ActionMask::from(Direction::StepLeftForward).bits(),
            1
        );
    }
}
