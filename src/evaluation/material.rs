//! Material differential: every active man is worth 1, every king 3.
//!
//! Deliberately simple and deterministic, which makes it a stable baseline
//! and reward signal.

use crate::checkers::core::Color;
use crate::checkers::roster::{slots, Roster};
use crate::evaluation::Score;

fn side_value(roster: &Roster, color: Color) -> i32 {
    roster.pieces()[slots(color)]
        .iter()
        .filter(|piece| piece.is_active())
        .map(|piece| piece.value())
        .sum()
}

/// Light material minus dark material.
///
/// ```
/// use draughts::checkers::roster::Roster;
/// use draughts::evaluation::{material, Score};
///
/// assert_eq!(material::material_advantage(&Roster::standard()), Score::EVEN);
/// ```
#[must_use]
pub fn material_advantage(roster: &Roster) -> Score {
    Score::from(side_value(roster, Color::Light) - side_value(roster, Color::Dark))
}
