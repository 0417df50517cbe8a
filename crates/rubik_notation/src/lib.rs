//! Standard cube notation for [`rubik_core`] moves.
//!
//! A move is written `[depth]<face>[w][suffix]`:
//!
//! - `R` turns one layer, `Rw` turns two, and `3Rw` turns three.
//! - No suffix is clockwise, `'` is counterclockwise, and `2` (or `2'`) is a
//!   half turn.
//!
//! This is the same notation that [`Move`] formats to, so the output of
//! `Move::to_string()` always parses back to the same move.

mod errors;
#[cfg(test)]
mod tests;

pub use errors::{ParseMoveError, ParseMovesError};
use rubik_core::{Direction, Layer, Move};

/// Parses a single move, such as `R`, `U'`, `Fw2`, or `3Lw'`.
pub fn parse_move(s: &str) -> Result<Move, ParseMoveError> {
    if s.is_empty() {
        return Err(ParseMoveError::Empty);
    }

    let prefix_len = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    let (prefix, rest) = s.split_at(prefix_len);

    let mut chars = rest.chars();
    let face = chars.next();
    let layer = face
        .and_then(Layer::from_symbol)
        .ok_or_else(|| ParseMoveError::UnknownLayer(face.map(String::from).unwrap_or_default()))?;

    let rest = chars.as_str();
    let (is_wide, suffix) = match rest.strip_prefix('w') {
        Some(suffix) => (true, suffix),
        None => (false, rest),
    };
    let direction = parse_suffix(suffix)?;

    let depth = match (prefix, is_wide) {
        ("", false) => 1,
        ("", true) => 2,
        (_, false) => return Err(ParseMoveError::PrefixWithoutWide),
        (n, true) => match n.parse::<usize>()? {
            0 => return Err(ParseMoveError::ZeroDepth),
            n => n,
        },
    };

    Ok(Move::new(layer, direction, depth))
}

fn parse_suffix(s: &str) -> Result<Direction, ParseMoveError> {
    match s {
        "" => Ok(Direction::Cw),
        "'" => Ok(Direction::Ccw),
        "2" | "2'" => Ok(Direction::Double),
        _ => Err(ParseMoveError::InvalidSuffix(s.to_owned())),
    }
}

/// Parses a whitespace-separated sequence of moves.
pub fn parse_moves(s: &str) -> Result<Vec<Move>, ParseMovesError> {
    s.split_whitespace()
        .enumerate()
        .map(|(index, token)| {
            parse_move(token).map_err(|source| ParseMovesError {
                index,
                token: token.to_owned(),
                source,
            })
        })
        .collect()
}

/// Formats a sequence of moves separated by spaces.
pub fn format_moves(moves: &[Move]) -> String {
    moves
        .iter()
        .map(|mv| mv.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
