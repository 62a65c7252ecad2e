//! Plays seeded random games and checks roster invariants after every move.

use std::collections::HashSet;

use draughts::checkers::core::{Color, Tier};
use draughts::checkers::roster::Roster;
use draughts::environment::{Environment, Episode};
use draughts::evaluation::encoding::{encode, plane_count};
use draughts::evaluation::material::material_advantage;
use pretty_assertions::assert_eq;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use strum::IntoEnumIterator;

const MAX_PLIES: usize = 300;

fn check_transition(before: &Roster, after: &Roster, mover: usize) {
    let occupied: Vec<_> = after.active().map(|(_, piece)| piece.position()).collect();
    let unique: HashSet<_> = occupied.iter().collect();
    assert_eq!(unique.len(), occupied.len(), "two pieces share a square");

    for (slot, (old, new)) in before.pieces().iter().zip(after.pieces()).enumerate() {
        if slot == mover {
            assert_eq!(new.move_count(), old.move_count() + 1);
        } else {
            assert_eq!(new.move_count(), old.move_count());
            assert_eq!(new.position(), old.position());
            assert_eq!(new.tier(), old.tier());
        }
        if !old.is_active() {
            assert!(!new.is_active(), "captured piece came back");
        }
        if old.tier() == Tier::King {
            assert_eq!(new.tier(), Tier::King);
        }
    }

    let encoding = encode(after);
    for color in Color::iter() {
        assert_eq!(plane_count(&encoding, color), after.active_count(color));
    }
}

fn play(roster: Roster, rng: &mut StdRng) {
    let mut episode = Episode::new(roster, Color::Light);
    for _ in 0..MAX_PLIES {
        if episode.result().is_some() {
            break;
        }
        let actions = episode.actions();
        let action = actions[rng.gen_range(0..actions.len())];
        let before = episode.roster().clone();
        let material_before = material_advantage(&before).value();

        let after = episode.apply(&action).expect("generated action is legal");
        check_transition(&before, after, action.slot);

        let captures = before.active().count() - after.active().count();
        assert_eq!(captures, usize::from(action.direction.is_jump()));
        if captures == 0 && after.pieces()[action.slot].tier() == before.pieces()[action.slot].tier() {
            assert_eq!(material_advantage(after).value(), material_before);
        }
    }
}

#[test]
fn standard_games() {
    let mut rng = StdRng::seed_from_u64(2021);
    for _ in 0..20 {
        play(Roster::standard(), &mut rng);
    }
}

#[test]
fn random_games() {
    let mut rng = StdRng::seed_from_u64(7);
    for keep_probability in [0.25, 0.5, 0.75, 1.0] {
        for _ in 0..10 {
            let roster = Roster::random(keep_probability, &mut rng).expect("valid probability");
            play(roster, &mut rng);
        }
    }
}
