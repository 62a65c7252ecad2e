//! The fixed collection of all pieces taking part in an episode.
//!
//! Slots `0..12` always hold light pieces and slots `12..24` hold dark pieces.
//! The order is set once at construction and is the indexing convention used
//! by [`crate::checkers::movegen::action_space`] and its consumers, so it is
//! never re-sorted.

use std::fmt::{self, Write};
use std::ops::Range;

use anyhow::{bail, Context};
use rand::Rng;

use crate::checkers::core::{Color, Square, Tier, BOARD_WIDTH};
use crate::checkers::error::{Precondition, RuleError};
use crate::checkers::piece::Piece;

/// Total number of slots in a [`Roster`].
pub const ROSTER_SIZE: usize = 24;
/// Number of slots owned by each color.
pub const PIECES_PER_COLOR: usize = ROSTER_SIZE / 2;

#[rustfmt::skip]
const STANDARD_LAYOUT: [(u8, u8); ROSTER_SIZE] = [
    // Light.
    (1, 1), (3, 1), (5, 1), (7, 1),
    (2, 2), (4, 2), (6, 2), (8, 2),
    (1, 3), (3, 3), (5, 3), (7, 3),
    // Dark.
    (2, 8), (4, 8), (6, 8), (8, 8),
    (1, 7), (3, 7), (5, 7), (7, 7),
    (2, 6), (4, 6), (6, 6), (8, 6),
];

/// Owner of a slot under the fixed slot/color convention.
#[must_use]
pub const fn slot_color(slot: usize) -> Color {
    if slot < PIECES_PER_COLOR {
        Color::Light
    } else {
        Color::Dark
    }
}

/// Slots owned by `color`.
#[must_use]
pub const fn slots(color: Color) -> Range<usize> {
    match color {
        Color::Light => 0..PIECES_PER_COLOR,
        Color::Dark => PIECES_PER_COLOR..ROSTER_SIZE,
    }
}

/// How the roster of a new episode is set up.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InitialLayout {
    /// 12 men per side on the three ranks closest to their own back rank.
    Standard,
    /// Each standard piece is kept with `keep_probability` and dropped on a
    /// random square.
    Random {
        #[allow(missing_docs)]
        keep_probability: f64,
    },
}

impl InitialLayout {
    /// Maps the `randomize` / `keep_probability` initializer inputs onto a
    /// layout. `keep_probability` is ignored unless `randomize` is set.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::InvalidProbability`] if `randomize` is set and
    /// `keep_probability` is not within `[0, 1]`.
    pub fn from_inputs(randomize: bool, keep_probability: f64) -> Result<Self, RuleError> {
        if !randomize {
            return Ok(Self::Standard);
        }
        if !(0.0..=1.0).contains(&keep_probability) {
            return Err(RuleError::InvalidProbability(keep_probability));
        }
        Ok(Self::Random { keep_probability })
    }
}

/// Ordered, fixed-length set of all 24 pieces of an episode.
///
/// The roster is exclusively owned by whoever drives the game. Moves mutate it
/// in place, so concurrent consumers (e.g. parallel evaluation of candidate
/// moves) should work on clones.
#[derive(Clone, PartialEq, Eq)]
pub struct Roster {
    pieces: [Piece; ROSTER_SIZE],
}

impl Roster {
    /// Creates the standard starting roster.
    ///
    /// ```
    /// use draughts::checkers::roster::Roster;
    ///
    /// let roster = Roster::standard();
    /// assert_eq!(
    ///     roster.to_string(),
    ///     ". p . p . p . p\n\
    ///      p . p . p . p .\n\
    ///      . p . p . p . p\n\
    ///      . . . . . . . .\n\
    ///      . . . . . . . .\n\
    ///      P . P . P . P .\n\
    ///      . P . P . P . P\n\
    ///      P . P . P . P ."
    /// );
    /// ```
    #[must_use]
    pub fn standard() -> Self {
        Self {
            pieces: std::array::from_fn(|slot| {
                let (file, rank) = STANDARD_LAYOUT[slot];
                Piece::new(slot_color(slot), Square::at(file, rank))
            }),
        }
    }

    /// Creates a randomized roster from the standard one: every piece is
    /// independently kept with `keep_probability`, and each kept piece is put
    /// on a uniformly chosen square. If the square is already taken by another
    /// active piece, the two swap places. No square color parity is enforced.
    ///
    /// The caller supplies the random source to control seeding.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::InvalidProbability`] if `keep_probability` is not
    /// within `[0, 1]`.
    pub fn random<R: Rng + ?Sized>(keep_probability: f64, rng: &mut R) -> Result<Self, RuleError> {
        if !(0.0..=1.0).contains(&keep_probability) {
            return Err(RuleError::InvalidProbability(keep_probability));
        }
        let mut roster = Self::standard();
        for slot in 0..ROSTER_SIZE {
            if !rng.gen_bool(keep_probability) {
                roster.pieces[slot].capture();
                continue;
            }
            let target = Square::at(
                rng.gen_range(1..=BOARD_WIDTH),
                rng.gen_range(1..=BOARD_WIDTH),
            );
            if let Some(other) = roster.occupant(target) {
                let vacated = roster.pieces[slot].position();
                roster.pieces[other].place(vacated);
            }
            roster.pieces[slot].place(target);
        }
        tracing::debug!(
            keep_probability,
            light = roster.active_count(Color::Light),
            dark = roster.active_count(Color::Dark),
            "randomized roster"
        );
        Ok(roster)
    }

    /// Creates the roster for a new episode.
    ///
    /// # Errors
    ///
    /// Propagates [`Roster::random`] errors.
    pub fn initial<R: Rng + ?Sized>(layout: InitialLayout, rng: &mut R) -> Result<Self, RuleError> {
        match layout {
            InitialLayout::Standard => Ok(Self::standard()),
            InitialLayout::Random { keep_probability } => Self::random(keep_probability, rng),
        }
    }

    /// Builds a roster from externally supplied pieces.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::MalformedRoster`] if there are not exactly
    /// [`ROSTER_SIZE`] pieces, a piece is in a slot of the other color or two
    /// active pieces share a square.
    pub fn new(pieces: Vec<Piece>) -> Result<Self, RuleError> {
        let count = pieces.len();
        let pieces: [Piece; ROSTER_SIZE] = pieces.try_into().map_err(|_| {
            RuleError::MalformedRoster(format!("expected {ROSTER_SIZE} slots, got {count}"))
        })?;
        for (slot, piece) in pieces.iter().enumerate() {
            if piece.color() != slot_color(slot) {
                return Err(RuleError::MalformedRoster(format!(
                    "slot {slot} is reserved for {} pieces, got {}",
                    slot_color(slot),
                    piece.color()
                )));
            }
        }
        for (slot, piece) in pieces.iter().enumerate().filter(|(_, p)| p.is_active()) {
            if let Some(other) = pieces[..slot]
                .iter()
                .position(|p| p.is_active() && p.position() == piece.position())
            {
                return Err(RuleError::MalformedRoster(format!(
                    "slots {other} and {slot} are both on {}",
                    piece.position()
                )));
            }
        }
        Ok(Self { pieces })
    }

    /// Parses a board diagram in the [`Roster`] display format: 8 lines from
    /// rank 8 down to rank 1, 8 glyphs per line (whitespace between glyphs is
    /// optional). `P`/`K` are light men/kings, `p`/`k` dark ones, `.` is an
    /// empty square.
    ///
    /// Light pieces fill slots `0..12` in reading order, dark pieces fill
    /// `12..24`. Remaining slots hold inactive pieces.
    ///
    /// # Errors
    ///
    /// Returns an error if the diagram has the wrong shape, contains unknown
    /// glyphs or more than 12 pieces of one color.
    pub fn from_diagram(diagram: &str) -> anyhow::Result<Self> {
        let rows: Vec<Vec<char>> = diagram
            .lines()
            .map(|line| line.chars().filter(|c| !c.is_whitespace()).collect::<Vec<_>>())
            .filter(|row| !row.is_empty())
            .collect();
        if rows.len() != BOARD_WIDTH as usize {
            bail!("diagram should have {BOARD_WIDTH} ranks, got {}", rows.len());
        }
        let mut roster = Self::standard();
        for piece in &mut roster.pieces {
            piece.capture();
        }
        let mut next = [slots(Color::Light).start, slots(Color::Dark).start];
        for (row, glyphs) in rows.iter().enumerate() {
            if glyphs.len() != BOARD_WIDTH as usize {
                bail!(
                    "rank {} should have {BOARD_WIDTH} squares, got {}",
                    BOARD_WIDTH as usize - row,
                    glyphs.len()
                );
            }
            let rank = BOARD_WIDTH - row as u8;
            for (column, &glyph) in glyphs.iter().enumerate() {
                let (color, tier) = match glyph {
                    '.' => continue,
                    'P' => (Color::Light, Tier::Man),
                    'K' => (Color::Light, Tier::King),
                    'p' => (Color::Dark, Tier::Man),
                    'k' => (Color::Dark, Tier::King),
                    _ => bail!("piece glyph should be within \"PKpk.\", got '{glyph}'"),
                };
                let slot = next[color.plane()];
                if !slots(color).contains(&slot) {
                    bail!("expected <= {PIECES_PER_COLOR} {color} pieces");
                }
                next[color.plane()] += 1;
                let square = Square::new(column as u8 + 1, rank)
                    .with_context(|| format!("placing '{glyph}'"))?;
                roster.pieces[slot] = Piece::with_tier(color, tier, square);
            }
        }
        Ok(roster)
    }

    /// Returns the piece in `slot`.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::PreconditionViolation`] if the slot does not exist.
    pub fn piece(&self, slot: usize) -> Result<&Piece, RuleError> {
        self.pieces
            .get(slot)
            .ok_or(RuleError::violation(slot, Precondition::NoSuchSlot))
    }

    /// All slots in order, including inactive pieces.
    #[must_use]
    pub const fn pieces(&self) -> &[Piece; ROSTER_SIZE] {
        &self.pieces
    }

    pub(super) fn piece_mut(&mut self, slot: usize) -> &mut Piece {
        &mut self.pieces[slot]
    }

    /// Iterates over `(slot, piece)` for pieces still on the board.
    pub fn active(&self) -> impl Iterator<Item = (usize, &Piece)> {
        self.pieces.iter().enumerate().filter(|(_, piece)| piece.is_active())
    }

    /// Slot of the active piece standing on `square`.
    #[must_use]
    pub fn occupant(&self, square: Square) -> Option<usize> {
        self.active()
            .find(|(_, piece)| piece.position() == square)
            .map(|(slot, _)| slot)
    }

    /// The active piece standing on `square`.
    #[must_use]
    pub fn at(&self, square: Square) -> Option<&Piece> {
        self.occupant(square).map(|slot| &self.pieces[slot])
    }

    /// Number of active pieces of `color`.
    #[must_use]
    pub fn active_count(&self, color: Color) -> usize {
        self.pieces[slots(color)]
            .iter()
            .filter(|piece| piece.is_active())
            .count()
    }

    /// Renders the board as a grid of glyphs indexed by `[file - 1][rank - 1]`:
    /// `P`/`p` for light/dark men, `K`/`k` for kings, `.` for empty squares.
    #[must_use]
    pub fn render(&self) -> [[char; BOARD_WIDTH as usize]; BOARD_WIDTH as usize] {
        let mut grid = [['.'; BOARD_WIDTH as usize]; BOARD_WIDTH as usize];
        for (_, piece) in self.active() {
            let square = piece.position();
            grid[square.file() as usize - 1][square.rank() as usize - 1] = piece.glyph();
        }
        grid
    }
}

impl fmt::Display for Roster {
    /// Dumps the board with rank 8 on top, '.' for empty squares.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let grid = self.render();
        for rank in (0..BOARD_WIDTH as usize).rev() {
            for file in 0..BOARD_WIDTH as usize {
                f.write_char(grid[file][rank])?;
                if file + 1 != BOARD_WIDTH as usize {
                    f.write_str(SQUARE_SEPARATOR)?;
                }
            }
            if rank != 0 {
                f.write_str(LINE_SEPARATOR)?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Roster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{self}")?;
        for (slot, piece) in self.pieces.iter().enumerate() {
            writeln!(
                f,
                "{slot:>2}: {piece} {} moves={} {}",
                piece.position(),
                piece.move_count(),
                if piece.is_active() { "active" } else { "captured" }
            )?;
        }
        Ok(())
    }
}

const LINE_SEPARATOR: &str = "\n";
const SQUARE_SEPARATOR: &str = " ";
