//! This file lists the data structures of the parse tree
//! built by the grammar, before reduction to `Point`s.

use std::fmt;
use std::ops::Range;

use matchnote_base::{Location, Outcome, Player, Points, Shot};

/// A recognized token and the byte range it covers in the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leaf<T> {
    pub value: T,
    pub span: Range<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointNode {
    pub player: Leaf<Player>,
    pub outcome: Leaf<Outcome>,
    pub shot: Option<Leaf<Shot>>,
    pub location: Option<Leaf<Location>>,
}

/// One source line. `point` is `None` for a blank line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineNode {
    pub(crate) span: Range<usize>,
    pub(crate) point: Option<PointNode>,
}

impl LineNode {
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    pub fn point(&self) -> Option<&PointNode> {
        self.point.as_ref()
    }

    pub fn is_blank(&self) -> bool {
        self.point.is_none()
    }
}

/// Root of the parse tree. Holds every source line in order,
/// so `lines()[n]` is line `n + 1` of the input.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MatchTree {
    lines: Vec<LineNode>,
}

impl MatchTree {
    pub(crate) fn new(first: LineNode) -> Self {
        Self { lines: vec![first] }
    }

    pub(crate) fn push(&mut self, line: LineNode) {
        self.lines.push(line);
    }

    pub fn lines(&self) -> &[LineNode] {
        &self.lines
    }

    /// Reduce the tree into its point records.
    pub fn points(&self) -> Points {
        crate::convert::to_points(self)
    }
}

impl fmt::Display for MatchTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "match")?;
        for (idx, line) in self.lines.iter().enumerate() {
            match &line.point {
                None => writeln!(f, "  blank_line\t(line {})", idx + 1)?,
                Some(p) => {
                    writeln!(f, "  point_line\t(line {})", idx + 1)?;
                    writeln!(f, "    player\t{}", p.player.value)?;
                    writeln!(f, "    outcome\t{}", p.outcome.value)?;
                    if let Some(s) = &p.shot {
                        writeln!(f, "    shot\t{}", s.value)?;
                    }
                    if let Some(l) = &p.location {
                        writeln!(f, "    location\t{}", l.value)?;
                    }
                }
            }
        }
        Ok(())
    }
}
