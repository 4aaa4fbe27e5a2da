//! This module reduces the parse tree
//! into the point records defined in `matchnote_base`

use matchnote_base::{Point, Points};
use tracing::trace;

use super::ast::{MatchTree, PointNode};

pub(crate) fn to_points(tree: &MatchTree) -> Points {
    // blank lines are part of the tree but carry no point
    tree.lines()
        .iter()
        .enumerate()
        .filter_map(|(idx, line)| line.point().map(|node| (idx + 1, node)))
        .map(|(line_no, node)| {
            let point = to_point(node);
            trace!(target: "parser", "line {}: {:?}", line_no, point);
            point
        })
        .collect()
}

fn to_point(node: &PointNode) -> Point {
    Point {
        player: node.player.value,
        outcome: node.outcome.value,
        shot: node.shot.as_ref().map(|leaf| leaf.value),
        location: node.location.as_ref().map(|leaf| leaf.value),
    }
}
