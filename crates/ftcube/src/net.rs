use std::fmt::Write;

use ftcube_core::{Cube, Facet, Pos};
use ftcube_notation::Face;
use owo_colors::OwoColorize;

/// Renders the cube as a colored flat net:
///
/// ```text
///     U
///   L F R B
///     D
/// ```
///
/// Each sticker is a two-column cell painted with the sticker's color.
pub(crate) fn render(cube: &Cube) -> String {
    let mut out = String::new();
    for row in 0..3 {
        out.push_str("       ");
        push_row(&mut out, cube, Face::U, row);
        out.push('\n');
    }
    for row in 0..3 {
        for (i, face) in [Face::L, Face::F, Face::R, Face::B].into_iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            push_row(&mut out, cube, face, row);
        }
        out.push('\n');
    }
    for row in 0..3 {
        out.push_str("       ");
        push_row(&mut out, cube, Face::D, row);
        out.push('\n');
    }
    out
}

fn push_row(out: &mut String, cube: &Cube, face: Face, row: i8) {
    for col in 0..3 {
        let (pos, facet) = sticker_at(face, row, col);
        match cube.sticker(pos, facet) {
            Some(color) => {
                let rgb = color.rgb();
                let _ = write!(out, "{}", "  ".on_truecolor(rgb.r, rgb.g, rgb.b));
            }
            // Unreachable for a valid cube; make it visible rather than
            // panicking inside a print routine.
            None => out.push_str("??"),
        }
    }
}

/// Maps a net cell (row 0 at the top, column 0 at the left of each face
/// block) to the cubie position and facet whose sticker it shows. Faces are
/// oriented as seen from outside the cube, with U and D sharing their edges
/// with F at the bottom and top of their blocks respectively.
fn sticker_at(face: Face, row: i8, col: i8) -> (Pos, Facet) {
    let pos = match face {
        Face::U => Pos::new(col - 1, 1, row - 1),
        Face::L => Pos::new(-1, 1 - row, col - 1),
        Face::F => Pos::new(col - 1, 1 - row, 1),
        Face::R => Pos::new(1, 1 - row, 1 - col),
        Face::B => Pos::new(1 - col, 1 - row, -1),
        Face::D => Pos::new(col - 1, -1, 1 - row),
    };
    (pos, Facet::of(face))
}

#[cfg(test)]
mod tests {
    use ftcube_core::Color;
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_every_net_cell_maps_to_a_sticker() {
        let cube = Cube::solved();
        for face in Face::iter() {
            for row in 0..3 {
                for col in 0..3 {
                    let (pos, facet) = sticker_at(face, row, col);
                    assert_eq!(
                        Some(Color::of(face)),
                        cube.sticker(pos, facet),
                        "{face} cell ({row}, {col})"
                    );
                }
            }
        }
    }
}
