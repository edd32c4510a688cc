//! Runs parsed commands against a deck engine.

use std::io::{self, BufRead, Write};

use crate::core::{Deck, RandomSource, ShuffleRng};
use crate::engine::DeckEngine;

use super::command::{Command, HELP};

/// Printed by `count-shuffles` when the target can never be reached.
pub const UNREACHABLE_COUNT: i64 = -1;

/// A command session over one deck engine.
///
/// Every error a line can produce is written to the output as a message;
/// only I/O failures end the session.
#[derive(Debug)]
pub struct Interpreter<R: RandomSource = ShuffleRng> {
    engine: DeckEngine<R>,
}

impl<R: RandomSource> Interpreter<R> {
    pub fn new(engine: DeckEngine<R>) -> Self {
        Self { engine }
    }

    pub fn engine(&self) -> &DeckEngine<R> {
        &self.engine
    }

    /// Read lines from `input` until it is exhausted, executing each.
    pub fn run<B: BufRead, W: Write>(&mut self, input: B, out: &mut W) -> io::Result<()> {
        for line in input.lines() {
            self.execute(&line?, out)?;
        }
        out.flush()
    }

    /// Execute a single line.
    pub fn execute<W: Write>(&mut self, line: &str, out: &mut W) -> io::Result<()> {
        let command = match Command::parse(line) {
            Ok(Some(command)) => command,
            Ok(None) => return Ok(()),
            Err(e) => {
                log::debug!("rejected line {:?}: {}", line, e);
                return writeln!(out, "{}", e);
            }
        };

        match command {
            Command::MakeNew(size) => self.engine.make_new(size),
            Command::Print => writeln!(out, "{}", self.engine)?,
            Command::Shuffle(blocks) => {
                if let Err(e) = self.engine.shuffle(&blocks) {
                    writeln!(out, "{}", e)?;
                }
            }
            Command::Order(blocks) => match self.engine.order(&blocks) {
                Ok(order) => writeln!(out, "{}", order)?,
                Err(e) => writeln!(out, "{}", e)?,
            },
            Command::UnbrokenPairs => writeln!(out, "{}", self.engine.unbroken_pairs())?,
            Command::RandomShuffle => {
                self.engine.random_shuffle();
            }
            Command::CountShuffles(target) => match self.engine.count_shuffles(target) {
                Some(count) => writeln!(out, "{}", count)?,
                None => writeln!(out, "{}", UNREACHABLE_COUNT)?,
            },
            Command::Load(cards) => self.engine.load(cards),
            Command::TryRepeat => match self.engine.predict_next() {
                Some(cards) => writeln!(out, "{}", Deck::from(cards))?,
                None => writeln!(out, "Cannot predict: some card is not a position in the deck.")?,
            },
            Command::Help => writeln!(out, "{}", HELP)?,
        }
        Ok(())
    }
}
