//! Token classes of the match log notation.
//!
//! Spellings are matched literally and case-sensitively. A run of
//! non-whitespace text that is not exactly one of them becomes
//! `Tok::Unknown` (maximal munch), so `forehands` never lexes as
//! `forehand` followed by garbage.

use std::convert::Infallible;
use std::fmt;
use std::ops::Range;

use logos::Logos;
use matchnote_base::{Location, Outcome, Player, Shot};

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\f]+")]
pub enum Tok {
    #[token("P1", |_| Player::P1)]
    #[token("P2", |_| Player::P2)]
    Player(Player),

    #[token("ACE", |_| Outcome::Ace)]
    #[token("DF", |_| Outcome::DoubleFault)]
    #[token("WINNER", |_| Outcome::Winner)]
    #[token("ERROR", |_| Outcome::Error)]
    Outcome(Outcome),

    #[token("forehand", |_| Shot::Forehand)]
    #[token("backhand", |_| Shot::Backhand)]
    #[token("serve", |_| Shot::Serve)]
    #[token("volley", |_| Shot::Volley)]
    #[token("halfvolley", |_| Shot::HalfVolley)]
    #[token("smash", |_| Shot::Smash)]
    #[token("lob", |_| Shot::Lob)]
    #[token("dropshot", |_| Shot::DropShot)]
    #[token("slice", |_| Shot::Slice)]
    Shot(Shot),

    #[token("crosscourt", |_| Location::CrossCourt)]
    #[token("downtheline", |_| Location::DownTheLine)]
    #[token("insideout", |_| Location::InsideOut)]
    #[token("insidein", |_| Location::InsideIn)]
    #[token("middle", |_| Location::Middle)]
    #[token("wide", |_| Location::Wide)]
    #[token("body", |_| Location::Body)]
    #[token("net", |_| Location::Net)]
    #[token("long", |_| Location::Long)]
    Location(Location),

    #[regex(r"\r?\n")]
    Newline,

    // Declared in the grammar but used by no rule.
    #[regex(r"[^ \t\f\r\n]+")]
    Unknown,
}

impl fmt::Display for Tok {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Player(p) => write!(f, "player `{}`", p),
            Self::Outcome(o) => write!(f, "outcome `{}`", o),
            Self::Shot(s) => write!(f, "shot `{}`", s),
            Self::Location(l) => write!(f, "location `{}`", l),
            Self::Newline => f.write_str("newline"),
            Self::Unknown => f.write_str("unknown"),
        }
    }
}

pub type Spanned = Result<(usize, Tok, usize), Infallible>;

/// Token stream handed to the generated parser.
///
/// Never yields an error: text logos cannot match is surfaced as
/// `Tok::Unknown` so that the parser reports it with its expected set.
pub(crate) struct Lexer<'input> {
    inner: logos::SpannedIter<'input, Tok>,
}

impl<'input> Lexer<'input> {
    pub(crate) fn new(src: &'input str) -> Self {
        Self { inner: Tok::lexer(src).spanned() }
    }
}

impl<'input> Iterator for Lexer<'input> {
    type Item = Spanned;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(res, span)| Ok((span.start, res.unwrap_or(Tok::Unknown), span.end)))
    }
}

/// A token together with its byte range, as shown by `tokenize`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpannedToken {
    pub tok: Tok,
    pub span: Range<usize>,
}

pub fn tokenize(src: &str) -> Vec<SpannedToken> {
    Lexer::new(src)
        .filter_map(|t| t.ok())
        .map(|(lo, tok, hi)| SpannedToken { tok, span: lo..hi })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toks(src: &str) -> Vec<Tok> {
        tokenize(src).into_iter().map(|t| t.tok).collect()
    }

    #[test]
    fn test_tokenize_full_line() {
        assert_eq!(toks("P1 WINNER forehand crosscourt\n"), vec![
            Tok::Player(Player::P1),
            Tok::Outcome(Outcome::Winner),
            Tok::Shot(Shot::Forehand),
            Tok::Location(Location::CrossCourt),
            Tok::Newline,
        ]);
    }

    #[test]
    fn test_tokenize_spans() {
        let t = tokenize("P2  DF\r\n");
        assert_eq!(t[0].span, 0..2);
        assert_eq!(t[1].span, 4..6);
        assert_eq!(t[2], SpannedToken { tok: Tok::Newline, span: 6..8 });
    }

    #[test]
    fn test_maximal_munch() {
        assert_eq!(toks("forehands"), vec![Tok::Unknown]);
        assert_eq!(toks("P1x ACE"), vec![Tok::Unknown, Tok::Outcome(Outcome::Ace)]);
        assert_eq!(toks("halfvolley volley"), vec![Tok::Shot(Shot::HalfVolley), Tok::Shot(Shot::Volley)]);
    }

    #[test]
    fn test_case_sensitive() {
        assert_eq!(toks("ace Forehand p1"), vec![Tok::Unknown, Tok::Unknown, Tok::Unknown]);
    }

    #[test]
    fn test_stray_carriage_return_is_unknown() {
        assert_eq!(toks("P1\rACE"), vec![Tok::Player(Player::P1), Tok::Unknown, Tok::Outcome(Outcome::Ace)]);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(tokenize(""), vec![]);
        assert_eq!(tokenize(" \t "), vec![]);
    }
}
