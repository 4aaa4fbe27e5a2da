//! Module containing the formal definition of a point record.
//!
//! Every enum here is spelled in the log exactly as `as_str` returns,
//! and serializes to the same spelling. Existing logs depend on these
//! spellings, so they must not change.

use std::fmt;

use serde::Serialize;

/// `Player` is the competitor a point is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Player {
    P1,
    P2,
}

impl Player {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::P1 => "P1",
            Self::P2 => "P2",
        }
    }
}

/// `Outcome` classifies how a point ended.
///
/// `Ace`: service ace, written `ACE`.
///
/// `DoubleFault`: double fault, written `DF`.
///
/// `Winner`: clean winner, written `WINNER`.
///
/// `Error`: error ending the rally, written `ERROR`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Outcome {
    #[serde(rename = "ACE")]
    Ace,
    #[serde(rename = "DF")]
    DoubleFault,
    #[serde(rename = "WINNER")]
    Winner,
    #[serde(rename = "ERROR")]
    Error,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ace => "ACE",
            Self::DoubleFault => "DF",
            Self::Winner => "WINNER",
            Self::Error => "ERROR",
        }
    }
}

/// `Shot` is the stroke that ended the point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Shot {
    Forehand,
    Backhand,
    Serve,
    Volley,
    HalfVolley,
    Smash,
    Lob,
    DropShot,
    Slice,
}

impl Shot {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Forehand => "forehand",
            Self::Backhand => "backhand",
            Self::Serve => "serve",
            Self::Volley => "volley",
            Self::HalfVolley => "halfvolley",
            Self::Smash => "smash",
            Self::Lob => "lob",
            Self::DropShot => "dropshot",
            Self::Slice => "slice",
        }
    }
}

/// `Location` is the court zone the shot went to.
/// Its vocabulary shares no word with `Shot`, so a line carrying only one
/// of the two optional fields is never ambiguous.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    CrossCourt,
    DownTheLine,
    InsideOut,
    InsideIn,
    Middle,
    Wide,
    Body,
    Net,
    Long,
}

impl Location {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CrossCourt => "crosscourt",
            Self::DownTheLine => "downtheline",
            Self::InsideOut => "insideout",
            Self::InsideIn => "insidein",
            Self::Middle => "middle",
            Self::Wide => "wide",
            Self::Body => "body",
            Self::Net => "net",
            Self::Long => "long",
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Shot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `Point` is one scored point, built from exactly one line of a match log.
///
/// `player` and `outcome` are always present.
/// `shot` and `location` are independently optional, `None` when the line omits them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Point {
    pub player: Player,
    pub outcome: Outcome,
    pub shot: Option<Shot>,
    pub location: Option<Location>,
}

impl Point {
    pub fn new(player: Player, outcome: Outcome, shot: Option<Shot>, location: Option<Location>) -> Self {
        Self { player, outcome, shot, location }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use super::*;

    #[test]
    fn test_point_serialize_full() {
        let p = Point::new(Player::P1, Outcome::Winner, Some(Shot::Forehand), Some(Location::CrossCourt));
        assert_eq!(serde_json::to_value(p).unwrap(), json!({
            "player": "P1",
            "outcome": "WINNER",
            "shot": "forehand",
            "location": "crosscourt"
        }));
    }

    #[test]
    fn test_point_serialize_absent_is_null() {
        let p = Point::new(Player::P2, Outcome::DoubleFault, None, None);
        let v = serde_json::to_value(p).unwrap();
        assert_eq!(v["outcome"], json!("DF"));
        assert!(v["shot"].is_null());
        assert!(v["location"].is_null());
    }

    #[test]
    fn test_serialized_spelling_matches_notation() {
        for s in [Shot::HalfVolley, Shot::DropShot, Shot::Slice] {
            assert_eq!(serde_json::to_value(s).unwrap(), json!(s.as_str()));
        }
        for l in [Location::CrossCourt, Location::DownTheLine, Location::InsideOut, Location::InsideIn] {
            assert_eq!(serde_json::to_value(l).unwrap(), json!(l.as_str()));
        }
        for o in [Outcome::Ace, Outcome::DoubleFault, Outcome::Winner, Outcome::Error] {
            assert_eq!(o.to_string(), o.as_str());
            assert_eq!(serde_json::to_value(o).unwrap(), json!(o.as_str()));
        }
    }
}
