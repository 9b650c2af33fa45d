use crate::{Axis, Color, Facet, Pos};

/// One of the 26 movable pieces of the cube.
///
/// `stickers` is indexed by [`Facet`]. A slot is `Some` exactly when the
/// piece touches the corresponding face of the whole cube in its current
/// position. Slots name physical sides of the piece itself: a rotation moves
/// colors between slots along with the position, it never renumbers the
/// slots or recomputes colors from the position.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Cubie {
    /// Current lattice position.
    pub pos: Pos,
    /// Sticker color per facet, `None` where the piece has no sticker.
    pub stickers: [Option<Color>; 6],
}

impl Cubie {
    /// Applies one quarter turn about `axis`, right-handed about the
    /// positive axis direction, rotating position and sticker layout
    /// together as a rigid piece.
    pub(crate) fn quarter_turn(&mut self, axis: Axis) {
        self.pos = self.pos.quarter_turn(axis);

        // Facets listed in the order colors flow under the turn: the color
        // on `cycle[i]` moves to `cycle[i + 1]`. Each cycle matches the
        // position formula above, so a sticker keeps pointing at the face
        // its piece touches.
        let cycle: [Facet; 4] = match axis {
            Axis::X => [Facet::Up, Facet::Front, Facet::Down, Facet::Back],
            Axis::Y => [Facet::Front, Facet::Right, Facet::Back, Facet::Left],
            Axis::Z => [Facet::Right, Facet::Up, Facet::Left, Facet::Down],
        };
        let last = self.stickers[cycle[3].index()];
        for i in (1..4).rev() {
            self.stickers[cycle[i].index()] = self.stickers[cycle[i - 1].index()];
        }
        self.stickers[cycle[0].index()] = last;
    }
}
