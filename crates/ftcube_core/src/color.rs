use std::fmt;

use ftcube_notation::Face;

/// 24-bit sRGB color value.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Constructs an sRGB color from its three channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// One of the six fixed sticker colors.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
pub enum Color {
    /// Right face in the solved state.
    White,
    /// Left face in the solved state.
    Yellow,
    /// Up face in the solved state.
    Blue,
    /// Down face in the solved state.
    Green,
    /// Front face in the solved state.
    Red,
    /// Back face in the solved state.
    Orange,
}

impl Color {
    /// Color shown on `face` in the solved state.
    pub const fn of(face: Face) -> Self {
        match face {
            Face::R => Self::White,
            Face::L => Self::Yellow,
            Face::U => Self::Blue,
            Face::D => Self::Green,
            Face::F => Self::Red,
            Face::B => Self::Orange,
        }
    }

    /// sRGB value for renderers. Yellow and orange are tuned for contrast on
    /// a screen; the rest are the CSS named colors.
    pub const fn rgb(self) -> Rgb {
        match self {
            Self::White => Rgb::new(0xFF, 0xFF, 0xFF),
            Self::Yellow => Rgb::new(0xFF, 0xDF, 0x22),
            Self::Blue => Rgb::new(0x00, 0x00, 0xFF),
            Self::Green => Rgb::new(0x00, 0x80, 0x00),
            Self::Red => Rgb::new(0xFF, 0x00, 0x00),
            Self::Orange => Rgb::new(0xFF, 0x6F, 0x00),
        }
    }
}
