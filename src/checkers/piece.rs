//! A single man or king together with the bookkeeping the roster needs.

use std::fmt::{self, Write};

use crate::checkers::core::{Color, Square, Tier};

/// Represents a specific piece owned by a player. Piece identity is its slot
/// in [`crate::checkers::roster::Roster`]; only the state stored here changes
/// over the course of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Piece {
    color: Color,
    tier: Tier,
    position: Square,
    origin: Square,
    active: bool,
    move_count: u32,
}

impl Piece {
    /// Creates an active man at `square`.
    #[must_use]
    pub const fn new(color: Color, square: Square) -> Self {
        Self {
            color,
            tier: Tier::Man,
            position: square,
            origin: square,
            active: true,
            move_count: 0,
        }
    }

    /// Creates an active piece of the given tier at `square`.
    #[must_use]
    pub const fn with_tier(color: Color, tier: Tier, square: Square) -> Self {
        Self {
            tier,
            ..Self::new(color, square)
        }
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn color(&self) -> Color {
        self.color
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn tier(&self) -> Tier {
        self.tier
    }

    /// Current square. Meaningless once the piece is no longer active.
    #[must_use]
    pub const fn position(&self) -> Square {
        self.position
    }

    /// Square the piece started the episode on.
    #[must_use]
    pub const fn origin(&self) -> Square {
        self.origin
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Number of moves applied to this piece.
    #[must_use]
    pub const fn move_count(&self) -> u32 {
        self.move_count
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn value(&self) -> i32 {
        self.tier.value()
    }

    /// Display glyph: uppercase for light, lowercase for dark.
    #[must_use]
    pub const fn glyph(&self) -> char {
        let symbol = self.tier.symbol();
        match self.color {
            Color::Light => symbol,
            Color::Dark => symbol.to_ascii_lowercase(),
        }
    }

    /// Moves the piece as a result of a move.
    pub(super) fn relocate(&mut self, square: Square) {
        debug_assert!(self.active);
        self.position = square;
        self.move_count += 1;
    }

    /// Puts the piece on a square without counting it as a move. Only used
    /// while setting up a roster.
    pub(super) fn place(&mut self, square: Square) {
        self.position = square;
    }

    /// Removes the piece from the board for the rest of the episode.
    pub(super) fn capture(&mut self) {
        self.active = false;
    }

    /// Crowns a man standing on its promotion rank. Returns `true` if the
    /// piece was promoted by this call; kings are left as they are.
    pub(super) fn promote_if_eligible(&mut self) -> bool {
        if self.tier == Tier::Man && self.position.rank() == self.color.promotion_rank() {
            self.tier = Tier::King;
            return true;
        }
        false
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char(self.glyph())
    }
}
