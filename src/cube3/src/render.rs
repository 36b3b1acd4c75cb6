//! Flattened text rendering of a cube, laid out as a cross:
//!
//! ```text
//!     U
//! L F R
//!     D
//!     B
//! ```

use itertools::Itertools;

use crate::{
    cube::Cube,
    face::{Color, Face},
    tables::FACELET_ORDER,
};

/// The nine colors of `face` in reading order. The center is always the
/// face's own color.
#[must_use]
pub fn face_grid(cube: &Cube, face: Face) -> [[Color; 3]; 3] {
    let order = FACELET_ORDER[face.index()];
    std::array::from_fn(|row| {
        std::array::from_fn(|col| {
            let i = row * 3 + col;
            match i {
                4 => face.solved_color(),
                _ => {
                    let (orbit, slot) = order[if i < 4 { i } else { i - 1 }];
                    cube.color_at(orbit, slot, face)
                }
            }
        })
    })
}

/// Lay out per-face rows in the cross net, styling each color with `paint`.
#[must_use]
pub fn render_with(cube: &Cube, mut paint: impl FnMut(Color) -> String) -> String {
    let mut rows = |face: Face| -> [String; 3] {
        face_grid(cube, face).map(|row| row.into_iter().map(&mut paint).collect())
    };
    let up = rows(Face::U);
    let left = rows(Face::L);
    let front = rows(Face::F);
    let right = rows(Face::R);
    let down = rows(Face::D);
    let back = rows(Face::B);

    let mut lines = Vec::with_capacity(12);
    lines.extend(up.iter().map(|row| format!("    {row}")));
    lines.extend((0..3).map(|i| format!("{} {} {}", left[i], front[i], right[i])));
    lines.extend(down.iter().map(|row| format!("    {row}")));
    lines.extend(back.iter().map(|row| format!("    {row}")));
    lines.iter().join("\n")
}

/// Render the cube as twelve lines of color letters.
#[must_use]
pub fn render(cube: &Cube) -> String {
    render_with(cube, |color| color.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOLVED_NET: &str = "    WWW
    WWW
    WWW
OOO GGG RRR
OOO GGG RRR
OOO GGG RRR
    YYY
    YYY
    YYY
    BBB
    BBB
    BBB";

    #[test]
    fn test_render_solved() {
        assert_eq!(render(&Cube::default()), SOLVED_NET);
        assert_eq!(Cube::default().to_string(), SOLVED_NET);
    }

    #[test]
    fn test_render_u_turn() {
        let mut cube = Cube::default();
        cube.turn(Face::U, false);
        let net = render(&cube);
        let lines: Vec<_> = net.lines().collect();
        assert_eq!(lines[0], "    WWW");
        // U moves the front row to the left face and the right row to the front
        assert_eq!(lines[3], "GGG RRR BBB");
        assert_eq!(lines[4], "OOO GGG RRR");
        // The back face is drawn upside down, so its U row is last
        assert_eq!(lines[11], "    OOO");
        assert_eq!(lines[9], "    BBB");
    }

    #[test]
    fn test_render_r_turn() {
        let mut cube = Cube::default();
        cube.turn(Face::R, false);
        let lines: Vec<String> = render(&cube).lines().map(str::to_owned).collect();
        // R carries the front column up to U and U back to B
        assert_eq!(lines[0], "    WWG");
        assert_eq!(lines[3], "OOO GGY RRR");
        assert_eq!(lines[6], "    YYB");
        // B hangs below D, so its R column is on the right
        assert_eq!(lines[9], "    BBW");
        assert_eq!(lines[11], "    BBW");
    }

    #[test]
    fn test_face_grid_centers() {
        let mut cube = Cube::default();
        for face in [Face::R, Face::U, Face::F, Face::L, Face::D, Face::B] {
            cube.turn(face, true);
        }
        for face in Face::ALL {
            assert_eq!(face_grid(&cube, face)[1][1], face.solved_color());
        }
    }

    #[test]
    fn test_render_with_paint() {
        let net = render_with(&Cube::default(), |color| format!("[{color}]"));
        assert_eq!(net.lines().next(), Some("    [W][W][W]"));
    }
}
