//! The eight resize handles and the `zoomable` list that selects them.

use std::fmt;
use std::str::FromStr;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::DirectionError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    N,
    S,
    E,
    W,
    NE,
    NW,
    SE,
    SW,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::N,
        Direction::S,
        Direction::E,
        Direction::W,
        Direction::NE,
        Direction::NW,
        Direction::SE,
        Direction::SW,
    ];

    /// Compass token as used in `zoomable` and cursor names.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::N => "n",
            Direction::S => "s",
            Direction::E => "e",
            Direction::W => "w",
            Direction::NE => "ne",
            Direction::NW => "nw",
            Direction::SE => "se",
            Direction::SW => "sw",
        }
    }

    /// Edge/corner token carried as the first class of a handle element
    /// (`t` top, `b` bottom, `l` left, `r` right).
    pub fn handle_class(self) -> &'static str {
        match self {
            Direction::N => "t",
            Direction::S => "b",
            Direction::E => "r",
            Direction::W => "l",
            Direction::NE => "tr",
            Direction::NW => "tl",
            Direction::SE => "br",
            Direction::SW => "bl",
        }
    }

    /// Recovers the handle from an element's `class` attribute. Only the first
    /// whitespace-delimited token is considered.
    pub fn from_class_attr(class: &str) -> Option<Direction> {
        let token = class.split_whitespace().next()?;
        Direction::ALL
            .into_iter()
            .find(|d| d.handle_class() == token)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = DirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Direction::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| DirectionError::Unknown(s.to_string()))
    }
}

/// Ordered, de-duplicated set of handles parsed from a string such as
/// `"n, e, se"`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Zoomable(Vec<Direction>);

impl Zoomable {
    /// Lenient parse: blank tokens are skipped silently, unknown ones are
    /// skipped with a warning.
    pub fn parse(raw: &str) -> Self {
        let mut out = Vec::new();
        for token in tokens(raw) {
            match token.parse::<Direction>() {
                Ok(d) => {
                    if !out.contains(&d) {
                        out.push(d);
                    }
                }
                Err(err) => warn!("zoomable: {err}, handle skipped"),
            }
        }
        Zoomable(out)
    }

    /// Fails on the first unknown token.
    pub fn parse_strict(raw: &str) -> Result<Self, DirectionError> {
        let mut out = Vec::new();
        for token in tokens(raw) {
            let d = token.parse::<Direction>()?;
            if !out.contains(&d) {
                out.push(d);
            }
        }
        Ok(Zoomable(out))
    }

    pub fn directions(&self) -> &[Direction] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

fn tokens(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(',').map(str::trim).filter(|t| !t.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_tokens_are_dropped_in_order() {
        let z = Zoomable::parse("n, e,, w");
        assert_eq!(z.directions(), &[Direction::N, Direction::E, Direction::W]);
    }

    #[test]
    fn whitespace_only_is_empty() {
        assert!(Zoomable::parse("  ,  , ").is_empty());
        assert!(Zoomable::parse("").is_empty());
    }

    #[test]
    fn unknown_tokens_are_skipped_leniently() {
        let z = Zoomable::parse("n, north, se");
        assert_eq!(z.directions(), &[Direction::N, Direction::SE]);
    }

    #[test]
    fn strict_parse_reports_unknown() {
        let err = Zoomable::parse_strict("n, x").unwrap_err();
        assert_eq!(err, DirectionError::Unknown("x".to_string()));
        assert_eq!(err.to_string(), "unknown resize direction `x`");
    }

    #[test]
    fn duplicates_render_once() {
        let z = Zoomable::parse("n,s,n");
        assert_eq!(z.len(), 2);
    }

    #[test]
    fn handle_class_round_trips() {
        for d in Direction::ALL {
            let class = format!("{} resizable-handler", d.handle_class());
            assert_eq!(Direction::from_class_attr(&class), Some(d));
        }
        assert_eq!(Direction::from_class_attr("rotate"), None);
        assert_eq!(Direction::from_class_attr(""), None);
    }
}
