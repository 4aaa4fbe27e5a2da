//! # matchnote_parser
//! Parser crate for match logs
//!
//! A match log holds one point per line:
//! `player outcome [shot] [location]`, e.g. `P1 WINNER forehand crosscourt`.
//! Blank lines are skipped, and the last line may omit its line break.

#[macro_use]
extern crate lazy_static;

use std::fs;
use std::path::Path;

use lalrpop_util::lalrpop_mod;
use matchnote_base::Points;
use tracing::{debug, debug_span};

mod ast;
mod convert;
mod error;
mod lexer;
lalrpop_mod!(#[allow(clippy::all)] grammar);

pub use ast::{Leaf, LineNode, MatchTree, PointNode};
pub use error::{FailureKind, MatchNoteError, ParseFailure, TokenClass};
pub use lexer::{tokenize, SpannedToken, Tok};

pub type MatchNoteParseResult = Result<Points, ParseFailure>;

lazy_static! {
    // The LALR table is static; the parser value holds no state.
    static ref MATCH_PARSER: grammar::MatchParser = grammar::MatchParser::new();
}

/// Recognize `src` and return its parse tree.
pub fn parse_tree(src: &str) -> Result<MatchTree, ParseFailure> {
    let _span = debug_span!(target: "parser", "parse", len = src.len()).entered();
    match MATCH_PARSER.parse(lexer::Lexer::new(src)) {
        Ok(tree) => {
            debug!(target: "parser", "recognized {} lines", tree.lines().len());
            Ok(tree)
        },
        Err(e) => {
            let failure = ParseFailure::from_lalrpop(src, e);
            debug!(target: "parser", "{}", failure);
            Err(failure)
        },
    }
}

/// Parse a match log into its points, in source order.
pub fn parse(src: &str) -> MatchNoteParseResult {
    let tree = parse_tree(src)?;
    Ok(tree.points())
}

/// Read a UTF-8 match log from `path` and parse it.
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Points, MatchNoteError> {
    let src = fs::read_to_string(path)?;
    Ok(parse(&src)?)
}

#[cfg(test)]
mod tests {
    use matchnote_base::{Location, Outcome, Player, Point, Shot};

    use super::*;

    #[test]
    fn test_parse_two_points() {
        let points = parse("P1 ACE\nP2 DF\n").unwrap();
        assert_eq!(points, vec![
            Point::new(Player::P1, Outcome::Ace, None, None),
            Point::new(Player::P2, Outcome::DoubleFault, None, None),
        ]);
    }

    #[test]
    fn test_parse_tree_keeps_blank_lines() {
        let tree = parse_tree("\nP1 ACE\n\n").unwrap();
        let blanks: Vec<bool> = tree.lines().iter().map(|l| l.is_blank()).collect();
        assert_eq!(blanks, vec![true, false, true, true]);
        assert_eq!(tree.points().len(), 1);
    }

    #[test]
    fn test_parse_tree_leaf_spans() {
        let tree = parse_tree("P2 WINNER backhand downtheline").unwrap();
        let node = tree.lines()[0].point().unwrap();
        assert_eq!(node.player.span, 0..2);
        assert_eq!(node.outcome.span, 3..9);
        assert_eq!(node.shot.as_ref().map(|l| l.value), Some(Shot::Backhand));
        assert_eq!(node.location.as_ref().map(|l| l.span.clone()), Some(19..30));
        assert_eq!(node.location.as_ref().map(|l| l.value), Some(Location::DownTheLine));
    }

    #[test]
    fn test_tree_display() {
        let tree = parse_tree("P1 WINNER forehand\n\nP2 ERROR net").unwrap();
        let expected = "match\n  point_line\t(line 1)\n    player\tP1\n    outcome\tWINNER\n    shot\tforehand\n  blank_line\t(line 2)\n  point_line\t(line 3)\n    player\tP2\n    outcome\tERROR\n    location\tnet\n";
        assert_eq!(tree.to_string(), expected);
    }

    #[test]
    fn test_parse_file_missing() {
        match parse_file("/nonexistent/match.log") {
            Err(MatchNoteError::Io(_)) => {},
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
