//! matchnote_base
//! Base definitions across multiple crates
//! 

pub mod point;

pub use point::{Location, Outcome, Player, Point, Shot};

pub type Points = Vec<Point>;
