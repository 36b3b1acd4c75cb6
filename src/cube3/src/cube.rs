//! The state of a 3x3x3 cube and the face turn transformation.
//!
//! The cube is stored as two orbits, edges and corners. Each orbit is an array
//! indexed by slot, holding the `(piece, orientation)` pair currently sitting
//! there. A piece is home when `piece == slot` and oriented when
//! `orientation == 0`.
//!
//! Orientation is measured against the slot's entry in the position-face
//! tables: a piece in orientation `o` shows `solved_colors[piece][(i + o) % n]`
//! on `position_faces[slot][i]`.

use std::fmt::Display;

use log::{debug, trace};
use thiserror::Error;

use crate::{
    face::{Color, Face},
    notation::{MoveInstance, MoveSequence},
    render, start,
    tables::{
        CORNER_CYCLES, CORNER_ORIENTATIONS, CORNER_POSITION_FACES, CORNER_SOLVED_COLORS,
        CORNERS, EDGE_CYCLES, EDGE_ORIENTATIONS, EDGE_POSITION_FACES, EDGE_SOLVED_COLORS, EDGES,
    },
};

pub type EdgeSlots = [(u8, u8); EDGES];
pub type CornerSlots = [(u8, u8); CORNERS];

/// An orbit identifier for 3x3 cubes.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum OrbitType {
    /// The corners orbit.
    Corners,
    /// The edges orbit.
    Edges,
}

impl OrbitType {
    #[must_use]
    pub const fn piece_count(self) -> usize {
        match self {
            OrbitType::Corners => CORNERS,
            OrbitType::Edges => EDGES,
        }
    }

    #[must_use]
    pub const fn orientation_count(self) -> u8 {
        match self {
            OrbitType::Corners => CORNER_ORIENTATIONS,
            OrbitType::Edges => EDGE_ORIENTATIONS,
        }
    }

    fn cycle(self, face: Face) -> [usize; 4] {
        match self {
            OrbitType::Corners => CORNER_CYCLES[face.index()],
            OrbitType::Edges => EDGE_CYCLES[face.index()],
        }
    }

    fn position_faces(self, slot: usize) -> &'static [Face] {
        match self {
            OrbitType::Corners => &CORNER_POSITION_FACES[slot],
            OrbitType::Edges => &EDGE_POSITION_FACES[slot],
        }
    }

    fn solved_colors(self, piece: u8) -> &'static [Color] {
        match self {
            OrbitType::Corners => &CORNER_SOLVED_COLORS[usize::from(piece)],
            OrbitType::Edges => &EDGE_SOLVED_COLORS[usize::from(piece)],
        }
    }

    /// Where `face` sits in the slot's position-face list.
    ///
    /// # Panics
    ///
    /// Panics if `face` does not border `slot`.
    #[allow(clippy::cast_possible_truncation)]
    fn face_index(self, slot: usize, face: Face) -> u8 {
        let Some(index) = self.position_faces(slot).iter().position(|&f| f == face) else {
            panic!("Face {face} does not border {self:?} slot {slot}");
        };
        // At most three faces border a slot
        index as u8
    }
}

/// The underlying struct for representing a configuration of the cube.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct Cube {
    edges: EdgeSlots,
    corners: CornerSlots,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum InvalidStateError {
    #[error("{orbit:?} slot {slot} holds piece {piece}, expected a value below {expected}")]
    PieceOutOfRange {
        orbit: OrbitType,
        slot: usize,
        piece: u8,
        expected: usize,
    },
    #[error("{orbit:?} piece {piece} appears more than once, again in slot {slot}")]
    DuplicatePiece {
        orbit: OrbitType,
        slot: usize,
        piece: u8,
    },
    #[error(
        "{orbit:?} slot {slot} has orientation {orientation}, expected a value below {expected}"
    )]
    OrientationOutOfRange {
        orbit: OrbitType,
        slot: usize,
        orientation: u8,
        expected: u8,
    },
}

impl Default for Cube {
    fn default() -> Cube {
        Cube {
            edges: const {
                let mut arr: EdgeSlots = [(0, 0); EDGES];
                let mut i = 0;
                while i < EDGES {
                    arr[i].0 = i as u8;
                    i += 1;
                }
                arr
            },
            corners: const {
                let mut arr: CornerSlots = [(0, 0); CORNERS];
                let mut i = 0;
                while i < CORNERS {
                    arr[i].0 = i as u8;
                    i += 1;
                }
                arr
            },
        }
    }
}

impl Cube {
    /// The solved cube: every piece home and oriented.
    #[must_use]
    pub fn solved() -> Self {
        Self::default()
    }

    /// Create a cube from raw slot arrays without checking them. A malformed
    /// state is not detected here and will produce meaningless colors.
    #[must_use]
    pub fn from_slots(edges: EdgeSlots, corners: CornerSlots) -> Self {
        Cube { edges, corners }
    }

    /// Create a cube from raw slot arrays, checking that each orbit is a
    /// permutation of its piece ids and every orientation is in range.
    ///
    /// # Errors
    ///
    /// If either orbit is malformed. See `InvalidStateError`.
    pub fn try_from_slots(
        edges: EdgeSlots,
        corners: CornerSlots,
    ) -> Result<Self, InvalidStateError> {
        validate_orbit(&edges, OrbitType::Edges)?;
        validate_orbit(&corners, OrbitType::Corners)?;
        Ok(Cube { edges, corners })
    }

    #[must_use]
    pub fn edges(&self) -> &EdgeSlots {
        &self.edges
    }

    #[must_use]
    pub fn corners(&self) -> &CornerSlots {
        &self.corners
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        *self == Cube::default()
    }

    /// Whether the state can be reached from solved by face turns: total edge
    /// orientation is even, total corner orientation is a multiple of three,
    /// and the two permutations have equal parity.
    #[must_use]
    pub fn is_solvable(&self) -> bool {
        let edge_twist: u32 = self.edges.iter().map(|&(_, o)| u32::from(o)).sum();
        let corner_twist: u32 = self.corners.iter().map(|&(_, o)| u32::from(o)).sum();
        edge_twist % u32::from(EDGE_ORIENTATIONS) == 0
            && corner_twist % u32::from(CORNER_ORIENTATIONS) == 0
            && permutation_is_odd(&self.edges) == permutation_is_odd(&self.corners)
    }

    /// Rotate `face` a quarter turn. Clockwise is as seen from outside the
    /// face.
    ///
    /// Each of the four edges and four corners on the face moves one step
    /// along its cycle and has its orientation recomputed against the
    /// destination slot.
    pub fn turn(&mut self, face: Face, counterclockwise: bool) {
        trace!("Turning {face}{}", if counterclockwise { "'" } else { "" });
        cycle_orbit(&mut self.edges, OrbitType::Edges, face, counterclockwise);
        cycle_orbit(&mut self.corners, OrbitType::Corners, face, counterclockwise);
    }

    /// Applies a move to the cube. A half turn is two quarter turns.
    pub fn apply(&mut self, m: MoveInstance) {
        for (face, counterclockwise) in m.quarter_turns() {
            self.turn(face, counterclockwise);
        }
    }

    /// Applies a sequence of moves, in order, to the cube.
    pub fn apply_sequence(&mut self, moves: &MoveSequence) {
        debug!(start!("Applying {} moves: {}"), moves.len(), moves);
        for &m in moves.iter() {
            self.apply(m);
        }
    }

    /// Get the color shown on `face` by a piece of the given orbit, identity,
    /// slot and orientation.
    ///
    /// # Panics
    ///
    /// Panics if `face` does not border `slot`, or if `slot` or `piece` is out
    /// of range for the orbit.
    #[must_use]
    pub fn facelet_color(
        orbit: OrbitType,
        piece: u8,
        slot: usize,
        orientation: u8,
        face: Face,
    ) -> Color {
        let n = orbit.orientation_count();
        let index = (orbit.face_index(slot, face) + orientation % n) % n;
        orbit.solved_colors(piece)[usize::from(index)]
    }

    /// Get the color shown on `face` by whichever piece occupies `slot`.
    ///
    /// # Panics
    ///
    /// Panics if `face` does not border `slot`.
    #[must_use]
    pub fn color_at(&self, orbit: OrbitType, slot: usize, face: Face) -> Color {
        let (piece, orientation) = match orbit {
            OrbitType::Corners => self.corners[slot],
            OrbitType::Edges => self.edges[slot],
        };
        Cube::facelet_color(orbit, piece, slot, orientation, face)
    }
}

impl Display for Cube {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", render::render(self))
    }
}

/// Move the four pieces on `face` one step along the face's cycle.
/// Clockwise sends `cycle[i]` to `cycle[i + 1]`; counterclockwise walks the
/// cycle backwards.
fn cycle_orbit(slots: &mut [(u8, u8)], orbit: OrbitType, face: Face, counterclockwise: bool) {
    let cycle = orbit.cycle(face);
    let n = orbit.orientation_count();
    let held = cycle.map(|slot| slots[slot]);

    for (i, (piece, orientation)) in held.into_iter().enumerate() {
        let src = cycle[i];
        let dst = if counterclockwise {
            cycle[(i + 3) % 4]
        } else {
            cycle[(i + 1) % 4]
        };
        // The sticker on the turning face stays on the turning face, so the
        // color index it selects must be the same at both ends of the move
        let src_index = orbit.face_index(src, face);
        let dst_index = orbit.face_index(dst, face);
        slots[dst] = (piece, (orientation % n + src_index + n - dst_index) % n);
    }
}

fn validate_orbit(slots: &[(u8, u8)], orbit: OrbitType) -> Result<(), InvalidStateError> {
    let expected = orbit.piece_count();
    let mut covered = vec![false; expected];

    for (slot, &(piece, orientation)) in slots.iter().enumerate() {
        if orientation >= orbit.orientation_count() {
            return Err(InvalidStateError::OrientationOutOfRange {
                orbit,
                slot,
                orientation,
                expected: orbit.orientation_count(),
            });
        }

        match covered.get_mut(usize::from(piece)) {
            Some(true) => return Err(InvalidStateError::DuplicatePiece { orbit, slot, piece }),
            Some(seen) => *seen = true,
            None => {
                return Err(InvalidStateError::PieceOutOfRange {
                    orbit,
                    slot,
                    piece,
                    expected,
                });
            }
        }
    }

    Ok(())
}

/// Assumes `slots` holds a permutation.
fn permutation_is_odd(slots: &[(u8, u8)]) -> bool {
    let mut visited = vec![false; slots.len()];
    let mut cycles = 0;
    for i in 0..slots.len() {
        if visited[i] {
            continue;
        }
        cycles += 1;
        let mut j = i;
        while !visited[j] {
            visited[j] = true;
            j = usize::from(slots[j].0);
        }
    }
    (slots.len() - cycles) % 2 == 1
}
