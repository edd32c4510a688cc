//! Parsing of line-oriented commands.
//!
//! A line is a command name (or alias) followed by whitespace-separated
//! integers. Arguments are read up to the first token that is not an
//! integer; anything after that is ignored.

use thiserror::Error;

use crate::core::MAX_DECK_SIZE;

/// Usage text printed by `help`.
pub const HELP: &str = "\
Command         Alias   Arguments       Description
make-new        m       18              Make a new ordered deck from 0 to 17
print           p                       Print the current deck
shuffle         s       2 3 10 3        Shuffle with blocks [2, 3, 10, 3]
order           o       1 4 11 2        Print the order of blocks [1, 4, 11, 2]
unbroken-pairs  u                       Print the number of unbroken pairs
random-shuffle  r                       Shuffle with random blocks
count-shuffles  c       15              Print random shuffles needed to reach 15 unbroken pairs
load            l       4 3 1 0 2 5     Load the deck with the given cards (no checking)
try-repeat      t                       Print the deck if the shuffles so far were repeated
help            h, ?                    Print this message";

/// A parsed command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    MakeNew(usize),
    Print,
    Shuffle(Vec<i64>),
    Order(Vec<i64>),
    UnbrokenPairs,
    RandomShuffle,
    CountShuffles(i64),
    Load(Vec<i64>),
    TryRepeat,
    Help,
}

/// A line that cannot be run.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Unsupported command '{0}'.")]
    Unsupported(String),

    #[error("Command '{0}' is missing its arguments.")]
    MissingArguments(&'static str),

    #[error("Command 'make-new' needs a non-negative size, got {0}.")]
    NegativeSize(i64),

    #[error("Command 'make-new' size {size} is larger than the limit of {max} cards.")]
    SizeTooLarge { size: i64, max: usize },
}

impl Command {
    /// Parse one input line.
    ///
    /// Returns `Ok(None)` for a blank line.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let mut tokens = line.split_whitespace();
        let Some(name) = tokens.next() else {
            return Ok(None);
        };
        let args: Vec<i64> = tokens.map_while(|t| t.parse().ok()).collect();

        let command = match name {
            "make-new" | "m" => {
                let size = *args.first().ok_or(CommandError::MissingArguments("make-new"))?;
                let size = match usize::try_from(size) {
                    Err(_) => return Err(CommandError::NegativeSize(size)),
                    Ok(n) if n > MAX_DECK_SIZE => {
                        return Err(CommandError::SizeTooLarge { size, max: MAX_DECK_SIZE })
                    }
                    Ok(n) => n,
                };
                Command::MakeNew(size)
            }
            "print" | "p" => Command::Print,
            "shuffle" | "s" => Command::Shuffle(args),
            "order" | "o" => Command::Order(args),
            "unbroken-pairs" | "u" => Command::UnbrokenPairs,
            "random-shuffle" | "r" => Command::RandomShuffle,
            "count-shuffles" | "c" => {
                let target = *args.first().ok_or(CommandError::MissingArguments("count-shuffles"))?;
                Command::CountShuffles(target)
            }
            "load" | "l" => {
                if args.is_empty() {
                    return Err(CommandError::MissingArguments("load"));
                }
                Command::Load(args)
            }
            "try-repeat" | "t" => Command::TryRepeat,
            "help" | "h" | "?" => Command::Help,
            other => return Err(CommandError::Unsupported(other.to_string())),
        };
        Ok(Some(command))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Command {
        Command::parse(line).unwrap().unwrap()
    }

    #[test]
    fn test_names_and_aliases() {
        assert_eq!(parse("make-new 18"), Command::MakeNew(18));
        assert_eq!(parse("m 0"), Command::MakeNew(0));
        assert_eq!(parse("print"), Command::Print);
        assert_eq!(parse("p"), Command::Print);
        assert_eq!(parse("shuffle 2 3 10 3"), Command::Shuffle(vec![2, 3, 10, 3]));
        assert_eq!(parse("s"), Command::Shuffle(vec![]));
        assert_eq!(parse("o 1 -4"), Command::Order(vec![1, -4]));
        assert_eq!(parse("u"), Command::UnbrokenPairs);
        assert_eq!(parse("random-shuffle"), Command::RandomShuffle);
        assert_eq!(parse("c 15"), Command::CountShuffles(15));
        assert_eq!(parse("count-shuffles -1"), Command::CountShuffles(-1));
        assert_eq!(parse("l 4 3 1 0 2 5"), Command::Load(vec![4, 3, 1, 0, 2, 5]));
        assert_eq!(parse("try-repeat"), Command::TryRepeat);
        assert_eq!(parse("h"), Command::Help);
        assert_eq!(parse("?"), Command::Help);
    }

    #[test]
    fn test_blank_line() {
        assert_eq!(Command::parse(""), Ok(None));
        assert_eq!(Command::parse("   \t "), Ok(None));
    }

    #[test]
    fn test_arguments_stop_at_first_non_integer() {
        assert_eq!(parse("  s 1 2 x 3 "), Command::Shuffle(vec![1, 2]));
        assert_eq!(parse("p 1 2"), Command::Print);
    }

    #[test]
    fn test_missing_arguments() {
        assert_eq!(Command::parse("m"), Err(CommandError::MissingArguments("make-new")));
        assert_eq!(Command::parse("c abc"), Err(CommandError::MissingArguments("count-shuffles")));
        assert_eq!(Command::parse("load"), Err(CommandError::MissingArguments("load")));
    }

    #[test]
    fn test_negative_size() {
        assert_eq!(Command::parse("m -2"), Err(CommandError::NegativeSize(-2)));
    }

    #[test]
    fn test_size_limit() {
        assert_eq!(parse(&format!("m {}", MAX_DECK_SIZE)), Command::MakeNew(MAX_DECK_SIZE));
        assert_eq!(
            Command::parse("m 9223372036854775807"),
            Err(CommandError::SizeTooLarge { size: i64::MAX, max: MAX_DECK_SIZE })
        );
    }

    #[test]
    fn test_unsupported() {
        let err = Command::parse("deal 5").unwrap_err();
        assert_eq!(err, CommandError::Unsupported("deal".to_string()));
        assert_eq!(err.to_string(), "Unsupported command 'deal'.");
    }
}
