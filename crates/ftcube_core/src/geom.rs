use ftcube_notation::Face;

/// Coordinate axis of the cube lattice.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Axis {
    /// X axis (Right/Left).
    X,
    /// Y axis (Up/Down).
    Y,
    /// Z axis (Front/Back).
    Z,
}

/// Lattice position of a cubie, each coordinate in `{-1, 0, 1}`.
///
/// The origin is the fixed center of the cube and is never occupied.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Pos {
    /// X coordinate.
    pub x: i8,
    /// Y coordinate.
    pub y: i8,
    /// Z coordinate.
    pub z: i8,
}

impl Pos {
    /// Center of the cube.
    pub const ORIGIN: Self = Self::new(0, 0, 0);

    /// Constructs a position.
    pub const fn new(x: i8, y: i8, z: i8) -> Self {
        Self { x, y, z }
    }

    /// Component along `axis`.
    pub const fn along(self, axis: Axis) -> i8 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    /// Number of non-zero coordinates: 3 for a corner, 2 for an edge, 1 for
    /// a face center.
    pub const fn nonzero_coords(self) -> usize {
        (self.x != 0) as usize + (self.y != 0) as usize + (self.z != 0) as usize
    }

    /// One quarter turn about `axis`, right-handed about the positive axis
    /// direction.
    pub const fn quarter_turn(self, axis: Axis) -> Self {
        match axis {
            Axis::X => Self::new(self.x, -self.z, self.y),
            Axis::Y => Self::new(self.z, self.y, -self.x),
            Axis::Z => Self::new(-self.y, self.x, self.z),
        }
    }
}

/// Physical facet of a cubie, in the canonical slot order
/// `[+X, −X, +Y, −Y, +Z, −Z]`.
///
/// A facet names a side of the little piece itself, not of the whole cube:
/// when a piece rotates, the colors move between its facets.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, strum::EnumIter)]
pub enum Facet {
    /// +X side.
    Right,
    /// −X side.
    Left,
    /// +Y side.
    Up,
    /// −Y side.
    Down,
    /// +Z side.
    Front,
    /// −Z side.
    Back,
}

impl Facet {
    /// Index of this facet in a cubie's sticker array.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Facet pointing out of `face` of the whole cube.
    pub const fn of(face: Face) -> Self {
        match face {
            Face::R => Self::Right,
            Face::L => Self::Left,
            Face::U => Self::Up,
            Face::D => Self::Down,
            Face::F => Self::Front,
            Face::B => Self::Back,
        }
    }

    /// Face of the whole cube this facet points at when at its home
    /// orientation.
    pub const fn face(self) -> Face {
        match self {
            Self::Right => Face::R,
            Self::Left => Face::L,
            Self::Up => Face::U,
            Self::Down => Face::D,
            Self::Front => Face::F,
            Self::Back => Face::B,
        }
    }

    /// Axis this facet is perpendicular to.
    pub const fn axis(self) -> Axis {
        match self {
            Self::Right | Self::Left => Axis::X,
            Self::Up | Self::Down => Axis::Y,
            Self::Front | Self::Back => Axis::Z,
        }
    }

    /// Which end of the axis this facet points toward: `1` or `-1`.
    pub const fn sign(self) -> i8 {
        match self {
            Self::Right | Self::Up | Self::Front => 1,
            Self::Left | Self::Down | Self::Back => -1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quarter_turn_formulas() {
        // about X: (y, z) -> (-z, y)
        assert_eq!(Pos::new(1, 1, 0), Pos::new(1, 0, -1).quarter_turn(Axis::X));
        // about Y: (x, z) -> (z, -x)
        assert_eq!(Pos::new(-1, 1, -1), Pos::new(1, 1, -1).quarter_turn(Axis::Y));
        // about Z: (x, y) -> (-y, x)
        assert_eq!(Pos::new(-1, 1, 1), Pos::new(1, 1, 1).quarter_turn(Axis::Z));
    }

    #[test]
    fn test_quarter_turn_has_order_four() {
        for axis in [Axis::X, Axis::Y, Axis::Z] {
            let start = Pos::new(1, -1, 1);
            let mut pos = start;
            for _ in 0..4 {
                pos = pos.quarter_turn(axis);
            }
            assert_eq!(start, pos);
        }
    }
}
