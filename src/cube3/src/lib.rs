#![warn(clippy::pedantic)]
#![allow(clippy::similar_names, clippy::module_name_repetitions)]

//! A 3x3x3 cube modelled as edge and corner orbits of `(piece, orientation)`
//! pairs, with face turns, move notation, scrambling and a text net renderer.

pub mod cube;
pub mod face;
pub mod notation;
pub mod render;
pub mod scramble;
pub mod tables;

pub use cube::{Cube, InvalidStateError, OrbitType};
pub use face::{Color, Face};
pub use notation::{Direction, MoveInstance, MoveSequence, ParseError};
pub use scramble::Scrambler;

#[macro_export]
macro_rules! start {
    ($msg:expr) => {
        concat!("⏳ ", $msg)
    };
}

#[macro_export]
macro_rules! success {
    ($msg:expr) => {
        concat!("✅ ", $msg)
    };
}
