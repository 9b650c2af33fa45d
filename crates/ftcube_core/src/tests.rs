use std::sync::Arc;

use ftcube_notation::{Face, Move, MoveSeq, Turns, parse_moves};
use itertools::Itertools;
use pretty_assertions::assert_eq;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use strum::IntoEnumIterator;

use crate::*;

fn mv(face: Face, turns: Turns) -> Move {
    Move::new(face, turns)
}

fn seq(s: &str) -> MoveSeq {
    parse_moves(s).expect("valid notation")
}

/// A fixed mixed-up state, so the group laws are checked somewhere more
/// interesting than the solved cube.
fn scrambled() -> Cube {
    Cube::solved().apply_all(&seq("D2 B' L F2 U R' D"))
}

fn assert_invariants(cube: &Cube) {
    assert_eq!(26, cube.cubies().len());

    // Positions biject onto the 26 non-center lattice points.
    for x in -1..=1i8 {
        for y in -1..=1i8 {
            for z in -1..=1i8 {
                let pos = Pos::new(x, y, z);
                let occupants = cube.cubies().iter().filter(|c| c.pos == pos).count();
                let expected = usize::from(pos != Pos::ORIGIN);
                assert_eq!(expected, occupants, "occupancy at {pos:?}");
            }
        }
    }

    // Sticker slots line up with the faces each cubie touches.
    for cubie in cube.cubies() {
        for facet in Facet::iter() {
            let exposed = cubie.pos.along(facet.axis()) == facet.sign();
            assert_eq!(
                exposed,
                cubie.stickers[facet.index()].is_some(),
                "facet {facet:?} of cubie at {:?}",
                cubie.pos
            );
        }
        assert_eq!(
            cubie.pos.nonzero_coords(),
            cubie.stickers.iter().flatten().count()
        );
    }

    // Each of the six colors appears on exactly 9 stickers.
    for color in Color::iter() {
        let count = cube
            .cubies()
            .iter()
            .flat_map(|c| c.stickers)
            .flatten()
            .filter(|&c| c == color)
            .count();
        assert_eq!(9, count, "sticker count for {color}");
    }
}

#[test]
fn test_solved_cube() {
    let cube = Cube::solved();
    assert_invariants(&cube);
    assert!(cube.is_solved());
    for face in Face::iter() {
        let colors = cube.face_colors(face);
        assert_eq!(9, colors.len());
        assert!(colors.iter().all(|&c| c == Color::of(face)));
    }
}

#[test]
fn test_four_quarter_turns_is_identity() {
    let cube = scrambled();
    for face in Face::iter() {
        let mut turned = cube.clone();
        for _ in 0..4 {
            turned = turned.apply(mv(face, Turns::Cw));
        }
        assert_eq!(cube, turned, "four {face} turns");
    }
}

#[test]
fn test_inverse_cancellation() {
    let cube = scrambled();
    for face in Face::iter() {
        let turned = cube.apply(mv(face, Turns::Cw)).apply(mv(face, Turns::Ccw));
        assert_eq!(cube, turned, "{face} then {face}'");
    }
}

#[test]
fn test_double_turn_equivalence() {
    let cube = scrambled();
    for face in Face::iter() {
        assert_eq!(
            cube.apply(mv(face, Turns::Cw)).apply(mv(face, Turns::Cw)),
            cube.apply(mv(face, Turns::Half)),
            "{face}2 vs {face} {face}"
        );
    }
}

#[test]
fn test_single_turn_mixes_the_cube() {
    for face in Face::iter() {
        assert!(!Cube::solved().apply(mv(face, Turns::Cw)).is_solved());
    }
}

#[test]
fn test_invariants_after_arbitrary_sequence() {
    let cube = Cube::solved().apply_all(&seq("R U2 F' L D B2 U' R2 F D'"));
    assert_invariants(&cube);
    assert!(!cube.is_solved());
}

#[test]
fn test_apply_does_not_mutate_input() {
    let cube = Cube::solved();
    let _ = cube.apply(mv(Face::R, Turns::Cw));
    assert!(cube.is_solved());
}

#[test]
fn test_sexy_move_has_order_six() {
    let sexy = seq("R U R' U'");
    let mut cube = Cube::solved();
    for i in 1..=6 {
        cube = cube.apply_all(&sexy);
        assert_eq!(i == 6, cube.is_solved(), "after {i} repetitions");
    }
}

#[test]
fn test_states_sequence() {
    let moves = seq("R U R' U'");
    let cube = Cube::solved();

    let states: Vec<Cube> = cube.states(&moves).collect();
    assert_eq!(5, states.len());
    assert_eq!(cube, states[0]);
    assert_eq!(cube.apply_all(&moves), states[4]);

    // exact length, and restartable from a fresh iterator
    assert_eq!(5, cube.states(&moves).len());
    assert_eq!(states, cube.states(&moves).collect::<Vec<_>>());
}

#[test]
fn test_states_of_empty_sequence() {
    let cube = scrambled();
    let states: Vec<Cube> = cube.states(&MoveSeq::new()).collect();
    assert_eq!(vec![cube], states);
}

#[test]
fn test_random_scramble() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let scramble = random_scramble(&mut rng, DEFAULT_SCRAMBLE_LEN);
    assert_eq!(DEFAULT_SCRAMBLE_LEN, scramble.len());
    for (a, b) in scramble.iter().tuple_windows() {
        assert_ne!(a.face, b.face, "consecutive moves on the same face");
    }

    // stable for a given seed
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    assert_eq!(scramble, random_scramble(&mut rng, DEFAULT_SCRAMBLE_LEN));

    assert_invariants(&Cube::solved().apply_all(&scramble));
}

#[test]
fn test_solver_slot_readiness() {
    let mut slot = SolverSlot::default();
    assert!(!slot.is_ready());
    assert_eq!(Err(SolveError::Unavailable), slot.solve("R U"));

    slot.install(Arc::new(InverseScrambleSolver));
    assert!(slot.is_ready());

    let scramble = "R U R' U2 F";
    let solution = slot.solve(scramble).expect("solver is ready");
    let mixed = Cube::solved().apply_all(&seq(scramble));
    assert!(mixed.apply_all(&solution).is_solved());
}

#[test]
fn test_solver_empty_scramble_is_noop() {
    // valid no-op even before the solver is ready
    let slot = SolverSlot::default();
    assert_eq!(Ok(MoveSeq::new()), slot.solve("  "));
}

#[test]
fn test_solver_rejects_garbage() {
    let mut slot = SolverSlot::default();
    slot.install(Arc::new(InverseScrambleSolver));
    assert_eq!(Err(SolveError::NoSolution), slot.solve("not a scramble"));
}
