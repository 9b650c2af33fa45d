use std::iter::FusedIterator;

use ftcube_notation::{Move, MoveSeq};

use crate::Cube;

impl Cube {
    /// Returns the lazy sequence of states reached by applying `moves` in
    /// order, starting with (a copy of) `self`.
    ///
    /// The sequence has length `moves.len() + 1`. Every yielded state is an
    /// independently owned snapshot, so a consumer may keep all of them.
    /// Cloning a fresh iterator restarts the sequence from the beginning.
    pub fn states(&self, moves: &MoveSeq) -> States {
        States {
            current: Some(self.clone()),
            moves: moves.0.clone().into_iter(),
        }
    }
}

/// Iterator over the cube states produced by a move sequence.
///
/// See [`Cube::states`]. Pacing is the consumer's concern: this type only
/// steps the state, one move per `next` call.
#[derive(Debug, Clone)]
pub struct States {
    current: Option<Cube>,
    moves: std::vec::IntoIter<Move>,
}

impl Iterator for States {
    type Item = Cube;

    fn next(&mut self) -> Option<Cube> {
        let state = self.current.take()?;
        if let Some(mv) = self.moves.next() {
            self.current = Some(state.apply(mv));
        }
        Some(state)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = usize::from(self.current.is_some()) + self.moves.len();
        (len, Some(len))
    }
}

impl ExactSizeIterator for States {}

impl FusedIterator for States {}
