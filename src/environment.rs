//! Interface for Reinforcement Learning environment to abstract the checkers
//! rules implementation.
//!
//! [`Episode`] is the driver-side glue: it owns the [`Roster`], tracks the side
//! to move and exposes the legal actions of that side. Choosing among them is
//! left to the caller.

use crate::checkers::core::{Color, Direction};
use crate::checkers::error::{Precondition, RuleError};
use crate::checkers::make_move::AppliedMove;
use crate::checkers::movegen::{action_space, ActionSpace, ACTION_VECTOR_SIZE};
use crate::checkers::roster::{slot_color, slots, Roster, PIECES_PER_COLOR};

/// Result of the game from the perspective of the player to move at root.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    Win,
    Loss,
}

/// State observed by the agent after every action.
pub trait Observation {}

/// An action with a stable index in the flattened action space.
pub trait Action: Sized {
    #[allow(missing_docs)]
    fn get_index(&self) -> u16;
}

/// Standard gym-like Reinforcement Learning environment interface.
pub trait Environment<A: Action, O: Observation>: Sized {
    /// Legal actions of the side to move.
    fn actions(&self) -> &[A];
    /// Applies one of [`Environment::actions`] and passes the turn.
    ///
    /// # Errors
    ///
    /// Returns an error if the action is not legal; the state is unchanged.
    fn apply(&mut self, action: &A) -> Result<&O, RuleError>;
    /// `Some` once the game is over.
    fn result(&self) -> Option<GameResult>;
}

/// Moving one piece of the side to move in one direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PieceAction {
    #[allow(missing_docs)]
    pub slot: usize,
    #[allow(missing_docs)]
    pub direction: Direction,
}

impl Action for PieceAction {
    /// Position in the row-major 12x8 action space of the side to move.
    fn get_index(&self) -> u16 {
        let row = self.slot % PIECES_PER_COLOR;
        (row * ACTION_VECTOR_SIZE + self.direction.index()) as u16
    }
}

impl Observation for Roster {}

/// A game in progress.
pub struct Episode {
    roster: Roster,
    side_to_move: Color,
    perspective: Color,
    actions: Vec<PieceAction>,
    last_move: Option<AppliedMove>,
}

impl Episode {
    /// Starts an episode from `roster` with `side_to_move` to play first.
    #[must_use]
    pub fn new(roster: Roster, side_to_move: Color) -> Self {
        let actions = legal_actions(&roster, side_to_move);
        Self {
            roster,
            side_to_move,
            perspective: side_to_move,
            actions,
            last_move: None,
        }
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn roster(&self) -> &Roster {
        &self.roster
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Side the [`GameResult`] is reported for.
    #[must_use]
    pub const fn perspective(&self) -> Color {
        self.perspective
    }

    /// The most recently applied move.
    #[must_use]
    pub const fn last_move(&self) -> Option<&AppliedMove> {
        self.last_move.as_ref()
    }

    /// 12x8 action space of the side to move.
    #[must_use]
    pub fn action_space(&self) -> ActionSpace {
        action_space(&self.roster, self.side_to_move)
    }
}

impl Environment<PieceAction, Roster> for Episode {
    fn actions(&self) -> &[PieceAction] {
        &self.actions
    }

    fn apply(&mut self, action: &PieceAction) -> Result<&Roster, RuleError> {
        if slot_color(action.slot) != self.side_to_move {
            return Err(RuleError::violation(
                action.slot,
                Precondition::IllegalAction(action.direction),
            ));
        }
        let applied = self.roster.apply_action(action.slot, action.direction)?;
        self.last_move = Some(applied);
        self.side_to_move = self.side_to_move.opponent();
        self.actions = legal_actions(&self.roster, self.side_to_move);
        Ok(&self.roster)
    }

    /// The side to move loses when it has no legal action left (including
    /// having no pieces).
    fn result(&self) -> Option<GameResult> {
        if !self.actions.is_empty() {
            return None;
        }
        if self.perspective == self.side_to_move {
            Some(GameResult::Loss)
        } else {
            Some(GameResult::Win)
        }
    }
}

fn legal_actions(roster: &Roster, color: Color) -> Vec<PieceAction> {
    slots(color)
        .filter_map(|slot| roster.actions(slot).ok().map(|actions| (slot, actions)))
        .flat_map(|(slot, actions)| {
            actions
                .iter()
                .map(move |(direction, _)| PieceAction { slot, direction })
                .collect::<Vec<_>>()
        })
        .collect()
}
