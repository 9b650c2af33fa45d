use thiserror::Error;

use crate::{Face, Move, MoveSeq, Turns};

/// Error produced when parsing a move string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Unrecognized face letter.
    #[error("invalid face {0:?}")]
    InvalidFace(char),
    /// Unrecognized turn modifier after the face letter.
    #[error("invalid modifier {0:?}")]
    InvalidModifier(char),
    /// Token with more than two characters.
    #[error("malformed token {0:?}")]
    MalformedToken(String),
}

/// Parses a whitespace-separated move string into a [`MoveSeq`].
///
/// Empty input (or all whitespace) parses to an empty sequence. Any invalid
/// token fails the entire parse; no prefix of the sequence is returned.
pub fn parse_moves(s: &str) -> Result<MoveSeq, ParseError> {
    s.split_whitespace().map(parse_token).collect()
}

fn parse_token(token: &str) -> Result<Move, ParseError> {
    let mut chars = token.chars();
    let Some(first) = chars.next() else {
        // `split_whitespace` never yields empty tokens.
        return Err(ParseError::MalformedToken(token.to_string()));
    };
    let face = Face::from_char(first).ok_or(ParseError::InvalidFace(first))?;
    let turns = match chars.next() {
        None => Turns::Cw,
        Some(_) if chars.next().is_some() => {
            return Err(ParseError::MalformedToken(token.to_string()));
        }
        Some('2') => Turns::Half,
        Some('\'') => Turns::Ccw,
        Some(c) => return Err(ParseError::InvalidModifier(c)),
    };
    Ok(Move::new(face, turns))
}
