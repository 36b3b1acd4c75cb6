use log::debug;

use crate::{
    face::Face,
    notation::{Direction, MoveInstance, MoveSequence},
    success,
};

pub const DEFAULT_SCRAMBLE_LENGTH: usize = 25;

/// Generates random move sequences.
pub struct Scrambler {
    rng: fastrand::Rng,
}

impl Default for Scrambler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scrambler {
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: fastrand::Rng::new(),
        }
    }

    /// A scrambler that always produces the same sequences for a given seed.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
        }
    }

    /// Produce `length` random moves. Consecutive moves never turn the same
    /// face, since those would merge into one.
    pub fn scramble(&mut self, length: usize) -> MoveSequence {
        let mut moves = MoveSequence::default();
        let mut last_face = None;
        while moves.len() < length {
            let face = self.rng.choice(Face::ALL).unwrap_or(Face::U);
            if Some(face) == last_face {
                continue;
            }
            let dir = self.rng.choice(Direction::ALL).unwrap_or(Direction::Normal);
            moves.push(MoveInstance::new(face, dir));
            last_face = Some(face);
        }
        debug!(success!("Generated scramble: {}"), moves);
        moves
    }
}
