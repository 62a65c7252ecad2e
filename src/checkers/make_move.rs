//! Applying a legal action to the [`Roster`]: relocation, capture and
//! promotion.

use std::fmt;

use crate::checkers::core::{Direction, Square, Tier};
use crate::checkers::error::{Precondition, RuleError};
use crate::checkers::roster::Roster;

/// Piece removed from the board by a jump.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Capture {
    /// Roster slot of the captured piece.
    pub slot: usize,
    /// Tier of the captured piece at the moment of capture.
    pub tier: Tier,
    #[allow(missing_docs)]
    pub square: Square,
}

/// Record of an applied action. Serializes to either notation via
/// [`AppliedMove::notation`]; [`fmt::Display`] uses the algebraic one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AppliedMove {
    /// Roster slot of the moved piece.
    pub slot: usize,
    #[allow(missing_docs)]
    pub direction: Direction,
    #[allow(missing_docs)]
    pub from: Square,
    #[allow(missing_docs)]
    pub to: Square,
    /// Tier of the moved piece after the move (i.e. after promotion).
    pub tier: Tier,
    #[allow(missing_docs)]
    pub captured: Option<Capture>,
    /// Whether the move crowned the piece.
    pub promoted: bool,
}

/// Textual move formats.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Notation {
    /// `Pc3xe5`: symbol, origin, `-` or `x`, destination.
    #[default]
    Algebraic,
    /// `Piece to 5,5 taking Piece`.
    Verbose,
}

impl AppliedMove {
    /// Serializes the move in the given notation.
    #[must_use]
    pub fn notation(&self, notation: Notation) -> String {
        match notation {
            Notation::Algebraic => format!(
                "{}{}{}{}",
                self.tier.symbol(),
                self.from,
                if self.captured.is_some() { 'x' } else { '-' },
                self.to
            ),
            Notation::Verbose => {
                let mut line = format!(
                    "{} to {},{}",
                    self.tier.name(),
                    self.to.file(),
                    self.to.rank()
                );
                if let Some(capture) = self.captured {
                    line.push_str(" taking ");
                    line.push_str(capture.tier.name());
                }
                line
            },
        }
    }
}

impl fmt::Display for AppliedMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.notation(Notation::Algebraic))
    }
}

impl Roster {
    /// Moves the piece in `slot` in `direction`. A jump removes the opponent
    /// piece it passes over; a man landing on its promotion rank becomes a
    /// king.
    ///
    /// The action is validated against the current roster first: on error
    /// nothing is changed.
    ///
    /// ```
    /// use draughts::checkers::core::Direction;
    /// use draughts::checkers::roster::Roster;
    ///
    /// let mut roster = Roster::standard();
    /// let applied = roster.apply_action(9, Direction::StepRightForward).unwrap();
    /// assert_eq!(applied.to_string(), "Pc3-d4");
    /// assert_eq!(roster.pieces()[9].move_count(), 1);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::PreconditionViolation`] if the slot does not
    /// exist, the piece was captured or `direction` is not currently legal
    /// for it.
    pub fn apply_action(
        &mut self,
        slot: usize,
        direction: Direction,
    ) -> Result<AppliedMove, RuleError> {
        let piece = *self.piece(slot)?;
        if !piece.is_active() {
            return Err(RuleError::violation(slot, Precondition::InactivePiece));
        }
        let to = self
            .legal_actions(&piece)
            .destination(direction)
            .ok_or(RuleError::violation(
                slot,
                Precondition::IllegalAction(direction),
            ))?;
        let from = piece.position();
        let orientation = piece.tier().orientation(piece.color());
        let captured = direction
            .midpoint(orientation)
            .and_then(|midpoint| from.shift(midpoint))
            .and_then(|square| {
                self.occupant(square).map(|victim| Capture {
                    slot: victim,
                    tier: self.pieces()[victim].tier(),
                    square,
                })
            });
        debug_assert_eq!(captured.is_some(), direction.is_jump());

        if let Some(capture) = captured {
            self.piece_mut(capture.slot).capture();
        }
        let mover = self.piece_mut(slot);
        mover.relocate(to);
        let promoted = mover.promote_if_eligible();
        let applied = AppliedMove {
            slot,
            direction,
            from,
            to,
            tier: mover.tier(),
            captured,
            promoted,
        };
        tracing::debug!(
            %applied,
            slot,
            captured = ?captured.map(|capture| capture.slot),
            promoted,
            "applied action"
        );
        Ok(applied)
    }

    /// Same as [`Roster::apply_action`] with the direction given by its action
    /// vector index.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::PreconditionViolation`] if `index` is not a valid
    /// action index or [`Roster::apply_action`] fails.
    pub fn apply_action_index(
        &mut self,
        slot: usize,
        index: usize,
    ) -> Result<AppliedMove, RuleError> {
        let direction = Direction::from_index(index)
            .ok_or(RuleError::violation(slot, Precondition::NoSuchAction(index)))?;
        self.apply_action(slot, direction)
    }
}
