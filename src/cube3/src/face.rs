use std::{fmt::Display, str::FromStr};

use crate::tables::FACE_INFO;

/// One of the six outer layers of the cube. The discriminant is the face's
/// index into every per-face table.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Face {
    U = 0,
    F = 1,
    R = 2,
    B = 3,
    L = 4,
    D = 5,
}

/// A sticker color. Each face is one of these in the solved state.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Color {
    W,
    G,
    R,
    B,
    O,
    Y,
}

impl Face {
    pub const ALL: [Self; 6] = {
        use Face::*;
        let v = [U, F, R, B, L, D];

        let mut i = 0;
        while i < v.len() {
            assert!(i == v[i] as usize);
            i += 1;
        }

        v
    };

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Checked conversion from a raw face index in `0..6`.
    #[must_use]
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(usize::from(index)).copied()
    }

    #[must_use]
    pub fn letter(self) -> char {
        FACE_INFO[self.index()].0
    }

    #[must_use]
    pub fn solved_color(self) -> Color {
        FACE_INFO[self.index()].1
    }
}

impl FromStr for Face {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "U" => Ok(Face::U),
            "F" => Ok(Face::F),
            "R" => Ok(Face::R),
            "B" => Ok(Face::B),
            "L" => Ok(Face::L),
            "D" => Ok(Face::D),
            _ => Err(()),
        }
    }
}

impl Display for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}
