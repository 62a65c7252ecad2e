//! The engine wires the rule engine to a line-based text protocol so that a
//! human or an external driver process can play an episode over stdin/stdout.
//!
//! [`Engine::run`] is the "main loop": it reads commands from the input stream
//! and writes responses to the output stream. Move selection is up to whoever
//! sends the commands.

use std::io::{BufRead, Write};

use itertools::Itertools;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::checkers::core::{Color, Direction, BOARD_WIDTH};
use crate::checkers::make_move::Notation;
use crate::checkers::roster::{slots, InitialLayout, Roster};
use crate::engine::protocol::Command;
use crate::environment::{Environment, Episode, PieceAction};
use crate::evaluation::encoding::{encode, PLANES};
use crate::evaluation::material::material_advantage;

mod protocol;

/// Engine settings, usually coming from the command line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Config {
    /// Layout of every new episode.
    pub layout: InitialLayout,
    /// Seed of the random source used for randomized layouts. `None` seeds
    /// from system entropy.
    pub seed: Option<u64>,
    /// Format of applied moves.
    pub notation: Notation,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            layout: InitialLayout::Standard,
            seed: None,
            notation: Notation::Algebraic,
        }
    }
}

/// Connects the episode state with I/O.
pub struct Engine<'a, R: BufRead, W: Write> {
    episode: Episode,
    config: Config,
    rng: StdRng,
    input: &'a mut R,
    output: &'a mut W,
}

impl<'a, R: BufRead, W: Write> Engine<'a, R, W> {
    /// Creates an engine with a fresh episode and provided I/O.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured layout is invalid.
    pub fn new(input: &'a mut R, output: &'a mut W, config: Config) -> anyhow::Result<Self> {
        let mut rng = config
            .seed
            .map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);
        let roster = Roster::initial(config.layout, &mut rng)?;
        Ok(Self {
            episode: Episode::new(roster, Color::Light),
            config,
            rng,
            input,
            output,
        })
    }

    /// Continuously reads the input stream and executes commands until `quit`
    /// is sent or the input is closed.
    ///
    /// Malformed commands and illegal moves are reported on the output and
    /// skipped; the episode is left untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input or writing output fails.
    pub fn run(&mut self) -> anyhow::Result<()> {
        loop {
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                break;
            }
            match Command::parse(&line) {
                Command::NewGame => self.handle_new_game()?,
                Command::Show => writeln!(self.output, "{}", self.episode.roster())?,
                Command::ActionSpace => self.handle_action_space()?,
                Command::Moves => self.handle_moves()?,
                Command::Move { slot, index } => self.handle_move(slot, index)?,
                Command::Score => writeln!(
                    self.output,
                    "score {}",
                    material_advantage(self.episode.roster())
                )?,
                Command::Encode => self.handle_encode()?,
                Command::Quit => break,
                Command::Unknown(command) => {
                    writeln!(self.output, "info string Unsupported command: {command}")?;
                },
            }
        }
        Ok(())
    }

    fn handle_new_game(&mut self) -> anyhow::Result<()> {
        let roster = Roster::initial(self.config.layout, &mut self.rng)?;
        self.episode = Episode::new(roster, Color::Light);
        tracing::info!(layout = ?self.config.layout, "new episode");
        writeln!(self.output, "{}", self.episode.roster())?;
        Ok(())
    }

    fn handle_action_space(&mut self) -> anyhow::Result<()> {
        let side = self.episode.side_to_move();
        for (slot, row) in slots(side).zip(self.episode.action_space()) {
            writeln!(self.output, "{slot:>2}: {}", row.iter().join(" "))?;
        }
        Ok(())
    }

    fn handle_moves(&mut self) -> anyhow::Result<()> {
        let roster = self.episode.roster();
        for action in self.episode.actions() {
            let from = roster.pieces()[action.slot].position();
            let to = roster
                .actions(action.slot)?
                .destination(action.direction)
                .map_or_else(String::new, |square| square.to_string());
            let separator = if action.direction.is_jump() { 'x' } else { '-' };
            writeln!(
                self.output,
                "{} {} {from}{separator}{to}",
                action.slot,
                action.direction.index()
            )?;
        }
        Ok(())
    }

    fn handle_move(&mut self, slot: usize, index: usize) -> anyhow::Result<()> {
        let Some(direction) = Direction::from_index(index) else {
            writeln!(self.output, "info string action index should be in 0..8, got {index}")?;
            return Ok(());
        };
        match self.episode.apply(&PieceAction { slot, direction }) {
            Ok(_) => {
                if let Some(applied) = self.episode.last_move() {
                    writeln!(self.output, "{}", applied.notation(self.config.notation))?;
                }
                if let Some(result) = self.episode.result() {
                    writeln!(
                        self.output,
                        "result {result:?} for {}",
                        self.episode.perspective()
                    )?;
                }
            },
            Err(e) => writeln!(self.output, "info string Illegal move: {e}")?,
        }
        Ok(())
    }

    fn handle_encode(&mut self) -> anyhow::Result<()> {
        let encoding = encode(self.episode.roster());
        for plane in 0..PLANES {
            writeln!(self.output, "plane {plane}")?;
            for rank in (0..BOARD_WIDTH as usize).rev() {
                let row = (0..BOARD_WIDTH as usize).map(|file| encoding[file][rank][plane]);
                writeln!(self.output, "{}", row.format(" "))?;
            }
        }
        Ok(())
    }
}
