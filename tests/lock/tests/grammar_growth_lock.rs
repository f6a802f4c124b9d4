//! Grammar growth lock tests.
//!
//! Proves:
//! 1. Level L has exactly 2^L move symbols and 2^L − 1 turns, for L in [0, 12]
//! 2. Levels beyond the cap fail with `CapacityExceeded`, never a truncated string
//! 3. The memo returns identical strings regardless of request order
//! 4. Textual symbol strings round-trip through the parser

use dragonfold_kernel::grammar::error::GrammarError;
use dragonfold_kernel::grammar::generator::{moves_at_level, Generator, MAX_LEVEL};
use dragonfold_kernel::grammar::symbol::{move_count, parse_symbols, render_symbols};

#[test]
fn move_count_doubles_per_level() {
    let mut generator = Generator::new();
    for level in 0..=MAX_LEVEL {
        let symbols = generator.generate(level).unwrap();
        let moves = move_count(symbols);
        assert_eq!(moves, 1usize << level, "level {level}");
        assert_eq!(moves as u64, moves_at_level(level));
        assert_eq!(symbols.len() - moves, moves - 1, "turns at level {level}");
    }
}

#[test]
fn beyond_cap_is_capacity_exceeded() {
    let mut generator = Generator::new();
    let err = generator.generate(MAX_LEVEL + 1).unwrap_err();
    assert_eq!(
        err,
        GrammarError::CapacityExceeded {
            level: MAX_LEVEL + 1,
            cap: MAX_LEVEL
        }
    );
    assert!(!generator.is_cached(MAX_LEVEL + 1));
}

#[test]
fn request_order_does_not_change_output() {
    let mut ascending = Generator::new();
    let mut descending = Generator::new();
    let up: Vec<String> = (0..=10)
        .map(|l| render_symbols(ascending.generate(l).unwrap()))
        .collect();
    let mut down: Vec<String> = (0..=10)
        .rev()
        .map(|l| render_symbols(descending.generate(l).unwrap()))
        .collect();
    down.reverse();
    assert_eq!(up, down);
}

#[test]
fn clear_cache_regenerates_identically() {
    let mut generator = Generator::new();
    let before = render_symbols(generator.generate(7).unwrap());
    generator.clear_cache();
    assert_eq!(generator.cached_levels(), 0);
    assert_eq!(render_symbols(generator.generate(7).unwrap()), before);
}

#[test]
fn low_levels_match_known_strings() {
    let mut generator = Generator::new();
    assert_eq!(render_symbols(generator.generate(0).unwrap()), "F");
    assert_eq!(render_symbols(generator.generate(1).unwrap()), "F+G");
    assert_eq!(render_symbols(generator.generate(2).unwrap()), "F+G+F-G");
}

#[test]
fn rendered_strings_parse_back() {
    let mut generator = Generator::new();
    let symbols = generator.generate(6).unwrap().to_vec();
    let parsed = parse_symbols(&render_symbols(&symbols)).unwrap();
    assert_eq!(parsed, symbols);
}
