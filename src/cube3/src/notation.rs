//! Standard face turn notation, e.g. `U R' F2`.

use std::{
    fmt::Display,
    ops::{Deref, DerefMut},
    str::FromStr,
};

use itertools::Itertools;
use thiserror::Error;

use crate::face::Face;

/// Represents the direction which to turn a face. `Prime` represents
/// a counter-clockwise rotation of a face, and `Double` represents
/// a 180 degree rotation of a face.
#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash)]
pub enum Direction {
    Normal,
    Prime,
    Double,
}

impl Direction {
    pub const ALL: [Self; 3] = [Direction::Normal, Direction::Prime, Direction::Double];
}

impl Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Normal => write!(f, ""),
            Direction::Prime => write!(f, "'"),
            Direction::Double => write!(f, "2"),
        }
    }
}

/// An instantiation of a certain face equipped with a direction.
#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash)]
pub struct MoveInstance {
    pub face: Face,
    pub dir: Direction,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown face in move `{token}`, expected one of U F R B L D")]
    UnknownFace { token: String },
    #[error("Unknown suffix in move `{token}`, expected nothing, `'` or `2`")]
    UnknownSuffix { token: String },
}

impl MoveInstance {
    #[must_use]
    pub fn new(face: Face, dir: Direction) -> Self {
        Self { face, dir }
    }

    #[must_use]
    pub fn invert(&self) -> Self {
        Self {
            face: self.face,
            dir: match self.dir {
                Direction::Normal => Direction::Prime,
                Direction::Prime => Direction::Normal,
                Direction::Double => Direction::Double,
            },
        }
    }

    /// The move as `(face, counterclockwise)` quarter turns.
    #[must_use]
    pub fn quarter_turns(&self) -> std::iter::RepeatN<(Face, bool)> {
        let (count, counterclockwise) = match self.dir {
            Direction::Normal => (1, false),
            Direction::Prime => (1, true),
            Direction::Double => (2, false),
        };
        std::iter::repeat_n((self.face, counterclockwise), count)
    }
}

impl FromStr for MoveInstance {
    type Err = ParseError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let face = token
            .get(..1)
            .and_then(|letter| letter.parse::<Face>().ok())
            .ok_or_else(|| ParseError::UnknownFace {
                token: token.to_owned(),
            })?;
        // Face letters are ASCII, so byte 1 is a char boundary
        let dir = match &token[1..] {
            "" => Direction::Normal,
            "'" => Direction::Prime,
            "2" => Direction::Double,
            _ => {
                return Err(ParseError::UnknownSuffix {
                    token: token.to_owned(),
                });
            }
        };
        Ok(MoveInstance { face, dir })
    }
}

impl Display for MoveInstance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.face, self.dir)
    }
}

/// A struct representing sequences of moves, used for representing
/// scramble sequences and their inverses.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct MoveSequence(pub Vec<MoveInstance>);

impl MoveSequence {
    #[must_use]
    pub fn invert(&self) -> Self {
        MoveSequence(self.iter().rev().map(MoveInstance::invert).collect())
    }
}

impl FromStr for MoveSequence {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split_whitespace()
            .map(str::parse)
            .collect::<Result<Vec<_>, _>>()
            .map(MoveSequence)
    }
}

impl Display for MoveSequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.iter().join(" "))
    }
}

impl Deref for MoveSequence {
    type Target = Vec<MoveInstance>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for MoveSequence {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_format() {
        let seq: MoveSequence = "U R' F2  D\tB' L2".parse().unwrap();
        assert_eq!(seq.len(), 6);
        assert_eq!(seq[1], MoveInstance::new(Face::R, Direction::Prime));
        assert_eq!(seq[2], MoveInstance::new(Face::F, Direction::Double));
        assert_eq!(seq.to_string(), "U R' F2 D B' L2");
    }

    #[test]
    fn test_parse_empty() {
        let seq: MoveSequence = "   ".parse().unwrap();
        assert!(seq.is_empty());
        assert_eq!(seq.to_string(), "");
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "U X".parse::<MoveSequence>(),
            Err(ParseError::UnknownFace {
                token: "X".to_owned()
            })
        );
        assert_eq!(
            "R3".parse::<MoveSequence>(),
            Err(ParseError::UnknownSuffix {
                token: "R3".to_owned()
            })
        );
        assert_eq!(
            "u".parse::<MoveInstance>(),
            Err(ParseError::UnknownFace {
                token: "u".to_owned()
            })
        );
        assert!("R'2".parse::<MoveInstance>().is_err());
    }

    #[test]
    fn test_invert() {
        let seq: MoveSequence = "R U' F2".parse().unwrap();
        assert_eq!(seq.invert().to_string(), "F2 U R'");
        assert_eq!(seq.invert().invert(), seq);
    }

    #[test]
    fn test_quarter_turns() {
        let turns = |s: &str| {
            s.parse::<MoveInstance>()
                .unwrap()
                .quarter_turns()
                .collect::<Vec<_>>()
        };
        assert_eq!(turns("L"), vec![(Face::L, false)]);
        assert_eq!(turns("L'"), vec![(Face::L, true)]);
        assert_eq!(turns("L2"), vec![(Face::L, false), (Face::L, false)]);
    }
}
