use ftcube_notation::{Face, Move, MoveSeq};
use itertools::{Itertools, iproduct};
use strum::IntoEnumIterator;

use crate::{Color, Cubie, Facet, Pos};

/// Full state of the cube: the 26 movable cubies.
///
/// A `Cube` is only ever created solved and then transformed one move at a
/// time; every transform returns a fresh value. Equality ignores internal
/// ordering of the cubie list.
#[derive(Debug, Clone)]
pub struct Cube {
    cubies: Vec<Cubie>,
}

impl PartialEq for Cube {
    fn eq(&self, other: &Self) -> bool {
        self.cubies.len() == other.cubies.len()
            && self.cubies.iter().all(|c| other.cubie_at(c.pos) == Some(c))
    }
}

impl Eq for Cube {}

impl Cube {
    /// Constructs the solved cube: every non-center lattice point occupied,
    /// with a sticker on each facet that points out of the cube, colored for
    /// the face it points at.
    pub fn solved() -> Self {
        let cubies = iproduct!(-1..=1i8, -1..=1i8, -1..=1i8)
            .map(|(x, y, z)| Pos::new(x, y, z))
            .filter(|&pos| pos != Pos::ORIGIN)
            .map(|pos| Cubie {
                pos,
                stickers: solved_stickers(pos),
            })
            .collect();
        Self { cubies }
    }

    /// All 26 cubies, in unspecified order.
    pub fn cubies(&self) -> &[Cubie] {
        &self.cubies
    }

    /// The cubie at `pos`, if any.
    pub fn cubie_at(&self, pos: Pos) -> Option<&Cubie> {
        self.cubies.iter().find(|c| c.pos == pos)
    }

    /// Sticker color on facet `facet` of the cubie at `pos`.
    pub fn sticker(&self, pos: Pos, facet: Facet) -> Option<Color> {
        self.cubie_at(pos).and_then(|c| c.stickers[facet.index()])
    }

    /// The 9 sticker colors showing on `face`, in unspecified order.
    pub fn face_colors(&self, face: Face) -> Vec<Color> {
        let facet = Facet::of(face);
        self.cubies
            .iter()
            .filter(|c| c.pos.along(facet.axis()) == facet.sign())
            .filter_map(|c| c.stickers[facet.index()])
            .collect()
    }

    /// Whether every face shows a single uniform color.
    pub fn is_solved(&self) -> bool {
        Face::iter().all(|face| {
            let colors = self.face_colors(face);
            colors.len() == 9 && colors.iter().all_equal()
        })
    }

    /// Applies one face turn, returning the new state. The input is left
    /// untouched.
    ///
    /// Total over all valid moves: turn counts and faces outside the legal
    /// range cannot be constructed, so this never fails.
    pub fn apply(&self, mv: Move) -> Self {
        log::trace!("applying {mv}");
        let facet = Facet::of(mv.face);
        let layer = facet.sign();
        // The quarter-turn formulas are right-handed about the positive axis
        // direction; a clockwise turn of the negative face of the same axis
        // runs the other way.
        let effective = if layer == 1 {
            mv.turns.count()
        } else {
            4 - mv.turns.count()
        };
        let cubies = self
            .cubies
            .iter()
            .map(|&cubie| {
                if cubie.pos.along(facet.axis()) != layer {
                    return cubie;
                }
                let mut turned = cubie;
                for _ in 0..effective {
                    turned.quarter_turn(facet.axis());
                }
                turned
            })
            .collect();
        Self { cubies }
    }

    /// Applies a whole move sequence in order.
    pub fn apply_all(&self, moves: &MoveSeq) -> Self {
        moves.iter().fold(self.clone(), |cube, &mv| cube.apply(mv))
    }
}

fn solved_stickers(pos: Pos) -> [Option<Color>; 6] {
    let mut stickers = [None; 6];
    for facet in Facet::iter() {
        if pos.along(facet.axis()) == facet.sign() {
            stickers[facet.index()] = Some(Color::of(facet.face()));
        }
    }
    stickers
}
