//! Static data describing the fixed topology of the 3x3x3 cube.
//!
//! Slot order:
//! - Edges: UF UR UB UL FR RB BL LF DF DR DB DL
//! - Corners: UFR URB UBL ULF DRF DBR DLB DFL
//!
//! Every table is indexed by slot (for position tables), piece id (for color
//! tables) or `Face::index` (for per-face tables).

use crate::{
    cube::OrbitType,
    face::{Color, Face},
};

pub const EDGES: usize = 12;
pub const CORNERS: usize = 8;
pub const EDGE_ORIENTATIONS: u8 = 2;
pub const CORNER_ORIENTATIONS: u8 = 3;

/// The letter and solved color of each face.
pub const FACE_INFO: [(char, Color); 6] = {
    use Color::*;
    [('U', W), ('F', G), ('R', R), ('B', B), ('L', O), ('D', Y)]
};

/// The four edge slots cycled by each face, listed in clockwise order as seen
/// from outside that face.
pub const EDGE_CYCLES: [[usize; 4]; 6] = [
    [0, 3, 2, 1],
    [0, 4, 8, 7],
    [1, 5, 9, 4],
    [2, 6, 10, 5],
    [3, 7, 11, 6],
    [8, 9, 10, 11],
];

/// The four corner slots cycled by each face, listed in clockwise order as
/// seen from outside that face.
pub const CORNER_CYCLES: [[usize; 4]; 6] = [
    [0, 3, 2, 1],
    [0, 4, 7, 3],
    [0, 1, 5, 4],
    [1, 2, 6, 5],
    [2, 3, 7, 6],
    [4, 5, 6, 7],
];

/// The faces bordering each edge slot. An edge in orientation 0 shows
/// `EDGE_SOLVED_COLORS[piece][i]` on `EDGE_POSITION_FACES[slot][i]`.
pub const EDGE_POSITION_FACES: [[Face; 2]; EDGES] = {
    use Face::*;
    [
        [U, F],
        [U, R],
        [U, B],
        [U, L],
        [F, R],
        [R, B],
        [B, L],
        [L, F],
        [D, F],
        [D, R],
        [D, B],
        [D, L],
    ]
};

/// The faces bordering each corner slot. All triples share one rotational
/// handedness, which is what lets a single index offset describe a twist.
pub const CORNER_POSITION_FACES: [[Face; 3]; CORNERS] = {
    use Face::*;
    [
        [U, F, R],
        [U, R, B],
        [U, B, L],
        [U, L, F],
        [D, R, F],
        [D, B, R],
        [D, L, B],
        [D, F, L],
    ]
};

pub const EDGE_SOLVED_COLORS: [[Color; 2]; EDGES] = {
    use Color::*;
    [
        [W, G],
        [W, R],
        [W, B],
        [W, O],
        [G, R],
        [R, B],
        [B, O],
        [O, G],
        [Y, G],
        [Y, R],
        [Y, B],
        [Y, O],
    ]
};

pub const CORNER_SOLVED_COLORS: [[Color; 3]; CORNERS] = {
    use Color::*;
    [
        [W, G, R],
        [W, R, B],
        [W, B, O],
        [W, O, G],
        [Y, R, G],
        [Y, B, R],
        [Y, O, B],
        [Y, G, O],
    ]
};

/// The eight non-center facelets of each face in reading order, as they are
/// laid out in the rendered net.
pub const FACELET_ORDER: [[(OrbitType, usize); 8]; 6] = {
    use OrbitType::{Corners as C, Edges as E};
    [
        [(C, 2), (E, 2), (C, 1), (E, 3), (E, 1), (C, 3), (E, 0), (C, 0)],
        [(C, 3), (E, 0), (C, 0), (E, 7), (E, 4), (C, 7), (E, 8), (C, 4)],
        [(C, 0), (E, 1), (C, 1), (E, 4), (E, 5), (C, 4), (E, 9), (C, 5)],
        [(C, 6), (E, 10), (C, 5), (E, 6), (E, 5), (C, 2), (E, 2), (C, 1)],
        [(C, 2), (E, 3), (C, 3), (E, 6), (E, 7), (C, 6), (E, 11), (C, 7)],
        [(C, 7), (E, 8), (C, 4), (E, 11), (E, 9), (C, 6), (E, 10), (C, 5)],
    ]
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solved_colors_match_home_slots() {
        for (faces, colors) in EDGE_POSITION_FACES.iter().zip(EDGE_SOLVED_COLORS) {
            assert_eq!(faces.map(Face::solved_color), colors);
        }
        for (faces, colors) in CORNER_POSITION_FACES.iter().zip(CORNER_SOLVED_COLORS) {
            assert_eq!(faces.map(Face::solved_color), colors);
        }
    }

    #[test]
    fn test_cycles_touch_turning_face() {
        for face in Face::ALL {
            for slot in EDGE_CYCLES[face.index()] {
                assert!(EDGE_POSITION_FACES[slot].contains(&face));
            }
            for slot in CORNER_CYCLES[face.index()] {
                assert!(CORNER_POSITION_FACES[slot].contains(&face));
            }
        }
    }

    #[test]
    fn test_facelet_order_touches_face() {
        for face in Face::ALL {
            for (orbit, slot) in FACELET_ORDER[face.index()] {
                let borders = match orbit {
                    OrbitType::Edges => EDGE_POSITION_FACES[slot].contains(&face),
                    OrbitType::Corners => CORNER_POSITION_FACES[slot].contains(&face),
                };
                assert!(borders, "{orbit:?} slot {slot} does not border {face}");
            }
        }
    }

    #[test]
    fn test_every_slot_cycled_by_each_bordering_face() {
        for (slot, faces) in EDGE_POSITION_FACES.iter().enumerate() {
            for face in faces {
                assert!(EDGE_CYCLES[face.index()].contains(&slot));
            }
        }
        for (slot, faces) in CORNER_POSITION_FACES.iter().enumerate() {
            for face in faces {
                assert!(CORNER_CYCLES[face.index()].contains(&slot));
            }
        }
    }
}
