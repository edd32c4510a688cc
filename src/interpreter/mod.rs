//! Line-oriented command interpreter.
//!
//! Translates text such as `shuffle 2 3 10 3` into `DeckEngine` calls and
//! formats the results. See `HELP` for the command table.

pub mod command;
pub mod session;

pub use command::{Command, CommandError, HELP};
pub use session::{Interpreter, UNREACHABLE_COUNT};
