//! Face-turn notation parser and serializer for the 3×3×3 cube.
//!
//! A move string is a whitespace-separated list of tokens such as `R`, `U2`,
//! or `F'`: a face letter, optionally followed by `2` for a half turn or `'`
//! for a counterclockwise quarter turn. Parsing is all-or-nothing; a single
//! bad token fails the whole string so that no partially-valid sequence ever
//! reaches the cube.

mod parse;

use std::fmt;
use std::ops::{Deref, DerefMut};

pub use parse::{ParseError, parse_moves};

/// Face of the cube: Right, Left, Up, Down, Front, or Back.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub enum Face {
    /// Right face (+X).
    R,
    /// Left face (−X).
    L,
    /// Up face (+Y).
    U,
    /// Down face (−Y).
    D,
    /// Front face (+Z).
    F,
    /// Back face (−Z).
    B,
}

impl Face {
    /// Returns the face for a notation letter, or `None` if the character is
    /// not one of `RLUDFB`.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'R' => Some(Self::R),
            'L' => Some(Self::L),
            'U' => Some(Self::U),
            'D' => Some(Self::D),
            'F' => Some(Self::F),
            'B' => Some(Self::B),
            _ => None,
        }
    }
}

/// Number of clockwise quarter turns, as seen from outside the face.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, strum::EnumIter)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub enum Turns {
    /// Quarter turn clockwise (no suffix).
    Cw = 1,
    /// Half turn (suffix `2`).
    Half = 2,
    /// Quarter turn counterclockwise (suffix `'`).
    Ccw = 3,
}

impl Turns {
    /// Number of clockwise quarter turns, in `1..=3`.
    pub const fn count(self) -> u8 {
        self as u8
    }

    /// Turn count that undoes this one.
    pub const fn inverse(self) -> Self {
        match self {
            Self::Cw => Self::Ccw,
            Self::Half => Self::Half,
            Self::Ccw => Self::Cw,
        }
    }
}

impl fmt::Display for Turns {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cw => Ok(()),
            Self::Half => write!(f, "2"),
            Self::Ccw => write!(f, "'"),
        }
    }
}

/// Single face turn, such as `R`, `U2`, or `F'`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub struct Move {
    /// Face to turn.
    pub face: Face,
    /// How far to turn it.
    pub turns: Turns,
}

impl Move {
    /// Constructs a move.
    pub const fn new(face: Face, turns: Turns) -> Self {
        Self { face, turns }
    }

    /// Returns the move that undoes this one.
    pub const fn inverse(self) -> Self {
        Self::new(self.face, self.turns.inverse())
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.face, self.turns)
    }
}

/// Ordered sequence of moves.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub struct MoveSeq(pub Vec<Move>);

impl MoveSeq {
    /// Constructs a new empty move sequence.
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Returns the sequence that undoes this one: each move inverted, in
    /// reverse order.
    pub fn inv(&self) -> Self {
        self.0.iter().rev().map(|m| m.inverse()).collect()
    }
}

impl fmt::Display for MoveSeq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut is_first = true;
        for mv in &self.0 {
            if is_first {
                is_first = false;
            } else {
                write!(f, " ")?;
            }
            write!(f, "{mv}")?;
        }
        Ok(())
    }
}

impl Deref for MoveSeq {
    type Target = Vec<Move>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for MoveSeq {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl FromIterator<Move> for MoveSeq {
    fn from_iter<T: IntoIterator<Item = Move>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl From<Vec<Move>> for MoveSeq {
    fn from(moves: Vec<Move>) -> Self {
        Self(moves)
    }
}
