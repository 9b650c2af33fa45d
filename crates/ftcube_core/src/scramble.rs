use ftcube_notation::{Face, Move, MoveSeq, Turns};
use rand::Rng;
use strum::IntoEnumIterator;

/// Default number of moves in a random scramble.
pub const DEFAULT_SCRAMBLE_LEN: usize = 14;

/// Generates a random scramble of `len` moves.
///
/// No two consecutive moves turn the same face, so every move mixes the
/// state. Deterministic for a given RNG state; pass a seeded
/// `rand_chacha::ChaCha8Rng` for reproducible scrambles.
pub fn random_scramble(rng: &mut impl Rng, len: usize) -> MoveSeq {
    let faces: Vec<Face> = Face::iter().collect();
    let turn_options: Vec<Turns> = Turns::iter().collect();

    let mut moves = Vec::with_capacity(len);
    let mut last: Option<Face> = None;
    for _ in 0..len {
        let mut face = faces[rng.random_range(0..faces.len())];
        while Some(face) == last {
            face = faces[rng.random_range(0..faces.len())];
        }
        last = Some(face);
        let turns = turn_options[rng.random_range(0..turn_options.len())];
        moves.push(Move::new(face, turns));
    }
    MoveSeq(moves)
}
