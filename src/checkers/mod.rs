//! Implementation of the checkers rules: pieces, the roster holding them, legal
//! action generation and move application.

pub mod core;
pub mod error;
pub mod make_move;
pub mod movegen;
pub mod piece;
pub mod roster;
