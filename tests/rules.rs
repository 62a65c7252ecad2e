use draughts::checkers::core::{Color, Direction, Square, Tier};
use draughts::checkers::error::{Precondition, RuleError};
use draughts::checkers::make_move::Notation;
use draughts::checkers::movegen::action_space;
use draughts::checkers::piece::Piece;
use draughts::checkers::roster::{slot_color, Roster, ROSTER_SIZE};
use draughts::evaluation::encoding::{encode, plane_count};
use draughts::evaluation::material::material_advantage;
use draughts::evaluation::Score;
use pretty_assertions::assert_eq;

fn square(name: &str) -> Square {
    Square::try_from(name).expect("valid square")
}

/// Builds a roster where only the given pieces are active. Every other slot
/// holds a captured piece of the slot's color.
fn roster_with(pieces: &[(usize, Piece)]) -> Roster {
    let empty = Roster::from_diagram(&"........\n".repeat(8)).expect("empty board");
    let mut slots = empty.pieces().to_vec();
    for &(slot, piece) in pieces {
        slots[slot] = piece;
    }
    Roster::new(slots).expect("valid roster")
}

#[test]
fn lone_light_man() {
    let roster = roster_with(&[(0, Piece::new(Color::Light, square("c3")))]);
    let actions = roster.actions(0).unwrap();
    assert_eq!(actions.vector(), [1, 1, 0, 0, 0, 0, 0, 0]);
    assert_eq!(actions.destinations(), &[square("b4"), square("d4")]);
}

#[test]
fn capture_scenario() {
    let mut roster = roster_with(&[
        (0, Piece::new(Color::Light, square("c3"))),
        (12, Piece::new(Color::Dark, square("d4"))),
        (13, Piece::new(Color::Dark, square("h8"))),
    ]);
    let before = roster.clone();
    let actions = roster.actions(0).unwrap();
    assert_eq!(
        actions.destination(Direction::JumpRightForward),
        Some(square("e5"))
    );

    let applied = roster.apply_action(0, Direction::JumpRightForward).unwrap();
    assert_eq!(applied.to, square("e5"));
    assert_eq!(roster.pieces()[0].position(), square("e5"));
    assert_eq!(roster.pieces()[0].move_count(), 1);
    assert!(!roster.pieces()[12].is_active());
    for slot in 1..ROSTER_SIZE {
        if slot != 12 {
            assert_eq!(roster.pieces()[slot], before.pieces()[slot]);
        }
    }
    assert_eq!(material_advantage(&roster), Score::from(0));
}

#[test]
fn symmetric_promotion() {
    let mut roster = roster_with(&[
        (0, Piece::new(Color::Light, square("g7"))),
        (12, Piece::new(Color::Dark, square("b2"))),
    ]);
    let light = roster.apply_action(0, Direction::StepLeftForward).unwrap();
    assert!(light.promoted);
    assert_eq!(light.notation(Notation::Algebraic), "Kg7-f8");
    let dark = roster.apply_action(12, Direction::StepRightForward).unwrap();
    assert!(dark.promoted);
    assert_eq!(dark.to, square("c1"));
    assert_eq!(roster.pieces()[0].tier(), Tier::King);
    assert_eq!(roster.pieces()[12].tier(), Tier::King);
    assert_eq!(material_advantage(&roster), Score::from(0));

    // Kings move in all directions and are never promoted again.
    let again = roster.apply_action(0, Direction::StepRightBackward).unwrap();
    assert!(!again.promoted);
    let again = roster.apply_action(0, Direction::StepLeftForward).unwrap();
    assert!(!again.promoted);
    assert_eq!(roster.pieces()[0].value(), 3);
}

#[test]
fn errors_leave_roster_untouched() {
    let mut roster = Roster::standard();
    let before = roster.clone();
    assert_eq!(
        roster.apply_action(0, Direction::JumpRightForward),
        Err(RuleError::PreconditionViolation {
            slot: 0,
            reason: Precondition::IllegalAction(Direction::JumpRightForward),
        })
    );
    assert_eq!(roster, before);

    assert!(matches!(
        Roster::new(before.pieces()[..12].to_vec()),
        Err(RuleError::MalformedRoster(_))
    ));
    assert_eq!(
        Square::new(0, 4),
        Err(RuleError::OutOfBounds { file: 0, rank: 4 })
    );
}

#[test]
fn standard_roster_summaries() {
    let roster = Roster::standard();
    assert_eq!(material_advantage(&roster), Score::EVEN);
    let encoding = encode(&roster);
    assert_eq!(plane_count(&encoding, Color::Light), 12);
    assert_eq!(plane_count(&encoding, Color::Dark), 12);
    for (slot, piece) in roster.pieces().iter().enumerate() {
        assert_eq!(piece.color(), slot_color(slot));
    }
    let light = action_space(&roster, Color::Light);
    assert_eq!(light.iter().flatten().filter(|&&bit| bit == 1).count(), 7);
}
