//! Interpreter integration tests: full sessions from text in to text out.

use overhand::interpreter::HELP;
use overhand::{DeckEngine, EngineConfig, Interpreter, ShuffleRng};

fn session() -> Interpreter {
    Interpreter::new(DeckEngine::new(ShuffleRng::new(42)))
}

fn run(session: &mut Interpreter, input: &str) -> Vec<String> {
    let mut out = Vec::new();
    session.run(input.as_bytes(), &mut out).unwrap();
    String::from_utf8(out).unwrap().lines().map(str::to_string).collect()
}

#[test]
fn test_full_session() {
    let mut session = session();
    let out = run(
        &mut session,
        "make-new 6\n\
         shuffle 2 4\n\
         print\n\
         order 2 4\n\
         unbroken-pairs\n\
         try-repeat\n",
    );
    assert_eq!(out, vec!["[4, 5, 0, 1, 2, 3]", "3", "4", "[2, 3, 4, 5, 0, 1]"]);
}

#[test]
fn test_aliases() {
    let mut session = session();
    let out = run(&mut session, "m 4\ns 1 1 1 1\np\no 1 1 1 1\nu\nt\n");
    assert_eq!(out, vec!["[3, 2, 1, 0]", "2", "0", "[0, 1, 2, 3]"]);
}

#[test]
fn test_load_and_print() {
    let mut session = session();
    let out = run(&mut session, "l 4 3 1 0 2 5\np\n");
    assert_eq!(out, vec!["[4, 3, 1, 0, 2, 5]"]);
    assert_eq!(session.engine().current(), vec![4, 3, 1, 0, 2, 5]);
}

#[test]
fn test_unsupported_command_keeps_going() {
    let mut session = session();
    let out = run(&mut session, "m 2\nflip\np\n");
    assert_eq!(out, vec!["Unsupported command 'flip'.", "[0, 1]"]);
}

#[test]
fn test_missing_arguments_skip_command() {
    let mut session = session();
    let out = run(&mut session, "m 3\nmake-new\ncount-shuffles\nload\np\n");
    assert_eq!(
        out,
        vec![
            "Command 'make-new' is missing its arguments.",
            "Command 'count-shuffles' is missing its arguments.",
            "Command 'load' is missing its arguments.",
            "[0, 1, 2]",
        ]
    );
}

#[test]
fn test_negative_size_is_rejected() {
    let mut session = session();
    let out = run(&mut session, "m 2\nm -4\np\n");
    assert_eq!(out.len(), 2);
    assert!(out[0].contains("non-negative"));
    assert_eq!(out[1], "[0, 1]");
}

#[test]
fn test_oversized_deck_is_rejected() {
    let mut session = session();
    let out = run(&mut session, "m 3\nm 9223372036854775807\np\n");
    assert_eq!(out.len(), 2);
    assert!(out[0].contains("larger than the limit"));
    assert_eq!(out[1], "[0, 1, 2]");
}

#[test]
fn test_block_errors_are_printed() {
    let mut session = session();
    let out = run(&mut session, "m 5\ns 2 2\no -1 6\np\n");
    assert_eq!(out.len(), 3);
    assert!(out[0].starts_with("Block sizes must be positive"));
    assert!(out[1].starts_with("Block sizes must be positive"));
    assert_eq!(out[2], "[0, 1, 2, 3, 4]");
}

#[test]
fn test_count_shuffles_output() {
    let mut session = session();
    let out = run(&mut session, "m 1\nc 0\nc -1\np\n");
    assert_eq!(out, vec!["0", "-1", "[0]"]);
}

#[test]
fn test_random_shuffle_prints_nothing() {
    let config = EngineConfig::default().with_seed(3).with_initial_size(12);
    let mut session = Interpreter::new(DeckEngine::from_config(&config).unwrap());
    let out = run(&mut session, "r\nr\n");
    assert!(out.is_empty());

    let mut cards = session.engine().current();
    cards.sort_unstable();
    assert_eq!(cards, (0..12).collect::<Vec<i64>>());
}

#[test]
fn test_help() {
    let mut session = session();
    for command in ["help", "h", "?"] {
        let out = run(&mut session, command);
        assert_eq!(out.join("\n"), HELP);
    }
}
