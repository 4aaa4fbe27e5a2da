use std::convert::Infallible;
use std::fmt;

use lalrpop_util::ParseError;

use crate::lexer::Tok;

/// Where in the recognizer a parse stopped.
///
/// `Lexical`: the text at the position matches no token class.
///
/// `Structural`: a known token sits where the grammar does not allow it.
///
/// `IncompleteInput`: the input ends in the middle of a point line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Lexical,
    Structural,
    IncompleteInput,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenClass {
    Player,
    Outcome,
    Shot,
    Location,
    Newline,
}

impl TokenClass {
    /// Maps a terminal name as reported by the generated parser.
    fn from_terminal(name: &str) -> Option<Self> {
        match name.trim_matches('"') {
            "player" => Some(Self::Player),
            "outcome" => Some(Self::Outcome),
            "shot" => Some(Self::Shot),
            "location" => Some(Self::Location),
            "newline" => Some(Self::Newline),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Player => "player",
            Self::Outcome => "outcome",
            Self::Shot => "shot",
            Self::Location => "location",
            Self::Newline => "newline",
        }
    }
}

impl fmt::Display for TokenClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The first failure met while parsing a match log.
/// `line` and `column` are 1-based, the column counted in characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFailure {
    pub kind: FailureKind,
    pub line: usize,
    pub column: usize,
    pub expected: Vec<TokenClass>,
    pub found: Option<String>,
}

impl ParseFailure {
    pub(crate) fn from_lalrpop(src: &str, err: ParseError<usize, Tok, Infallible>) -> Self {
        let (kind, offset, expected, found) = match err {
            ParseError::InvalidToken { location } => {
                (FailureKind::Lexical, location, Vec::new(), None)
            },
            ParseError::UnrecognizedEOF { location, expected } => {
                (FailureKind::IncompleteInput, location, expected, None)
            },
            ParseError::UnrecognizedToken { token: (lo, tok, hi), expected } => {
                let kind = match tok {
                    Tok::Unknown => FailureKind::Lexical,
                    _ => FailureKind::Structural,
                };
                (kind, lo, expected, Some(display_slice(&src[lo..hi])))
            },
            ParseError::ExtraToken { token: (lo, _, hi) } => {
                (FailureKind::Structural, lo, Vec::new(), Some(display_slice(&src[lo..hi])))
            },
            ParseError::User { error } => match error {},
        };
        let mut classes: Vec<TokenClass> = Vec::new();
        for c in expected.iter().filter_map(|e| TokenClass::from_terminal(e)) {
            if !classes.contains(&c) {
                classes.push(c);
            }
        }
        let (line, column) = line_column(src, offset);
        Self { kind, line, column, expected: classes, found }
    }
}

fn display_slice(s: &str) -> String {
    match s {
        "\n" | "\r\n" => String::from("line break"),
        _ => s.escape_debug().to_string(),
    }
}

/// Convert a byte offset into a 1-based (line, column) pair.
pub(crate) fn line_column(src: &str, offset: usize) -> (usize, usize) {
    let before = &src[..offset.min(src.len())];
    let line = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
    let column = before[line_start..].chars().count() + 1;
    (line, column)
}

impl std::error::Error for ParseFailure {}

impl fmt::Display for ParseFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let what = match self.kind {
            FailureKind::Lexical => "lexical error",
            FailureKind::Structural => "structural error",
            FailureKind::IncompleteInput => "incomplete input",
        };
        write!(f, "{} at line {}, column {}", what, self.line, self.column)?;
        if let Some(found) = &self.found {
            write!(f, ": unexpected `{}`", found)?;
        }
        if !self.expected.is_empty() {
            let names: Vec<&str> = self.expected.iter().map(|c| c.as_str()).collect();
            write!(f, ", expected {}", names.join(" or "))?;
        }
        Ok(())
    }
}

/// Error of `parse_file`: either the file cannot be read or its content fails to parse.
#[derive(Debug)]
pub enum MatchNoteError {
    Io(std::io::Error),
    Parse(ParseFailure),
}

impl std::error::Error for MatchNoteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
        }
    }
}

impl fmt::Display for MatchNoteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => f.write_fmt(format_args!("cannot read match log: {}", e)),
            Self::Parse(e) => f.write_fmt(format_args!("cannot parse match log: {}", e)),
        }
    }
}

impl From<std::io::Error> for MatchNoteError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<ParseFailure> for MatchNoteError {
    fn from(e: ParseFailure) -> Self {
        Self::Parse(e)
    }
}
