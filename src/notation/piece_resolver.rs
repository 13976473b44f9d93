//! Piece tokens, side qualifiers and disambiguation hints.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::notation::chess_types::{Color, DescriptiveFile, Disambiguation, PieceKind};
use crate::notation::notation_errors::NotationError;
use crate::notation::notation_tables::extended_piece;
use crate::notation::square_resolver::match_square_form;

static HINTED_ORIGIN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(K|Q|R|B|N|Kt|P)\((.+)\)$").expect("valid origin pattern"));

/// Piece named by the origin part of a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mover {
    Piece(PieceKind),
    /// A one-character token that is not a piece; written out as-is.
    Unrecognized(char),
}

impl Mover {
    #[inline]
    pub fn is_pawn(self) -> bool {
        self == Mover::Piece(PieceKind::Pawn)
    }
}

impl fmt::Display for Mover {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mover::Piece(piece) => f.write_str(piece.algebraic_letter()),
            Mover::Unrecognized(ch) => write!(f, "{ch}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedOrigin {
    pub mover: Mover,
    pub disambiguation: Option<Disambiguation>,
}

/// Map a plain or side-qualified piece token to its piece and implied file.
///
/// `KN`, `QB`, `KR` and friends name a piece by the side of the board it
/// started on; once translated that side becomes a file disambiguation.
pub fn resolve_piece_token(token: &str) -> Option<(PieceKind, Option<Disambiguation>)> {
    if let Some((piece, file)) = extended_piece(token) {
        return Some((piece, Some(Disambiguation::File(file.algebraic_file()))));
    }

    PieceKind::from_descriptive(token).map(|piece| (piece, None))
}

/// Resolve the text inside "R(...)".
///
/// Digits are a rank counted from the mover's side; letters are a file. A
/// full square such as "QR1" contributes its file.
pub fn resolve_disambiguation_hint(
    hint: &str,
    color: Color,
) -> Result<Disambiguation, NotationError> {
    let hint = hint.trim();

    if !hint.is_empty() && hint.chars().all(|c| c.is_ascii_digit()) {
        let rank = hint
            .parse::<u8>()
            .map_err(|_| NotationError::UnrecognizedDisambiguationHint(hint.to_owned()))?;
        return Ok(Disambiguation::Rank(color.mirror_rank(rank)));
    }

    if let Some(file) = DescriptiveFile::from_token(hint) {
        return Ok(Disambiguation::File(file.algebraic_file()));
    }

    if let Some((_, file_token, _)) = match_square_form(hint) {
        if let Some(file) = DescriptiveFile::from_token(file_token) {
            return Ok(Disambiguation::File(file.algebraic_file()));
        }
    }

    Err(NotationError::UnrecognizedDisambiguationHint(hint.to_owned()))
}

/// Resolve the origin half of a move ("N", "KR", "R(1)", "QBP").
///
/// Unknown tokens longer than one character are taken as a pawn; pawn file
/// recovery for captures happens in the move translator.
pub fn resolve_origin(origin: &str, color: Color) -> ResolvedOrigin {
    let origin = origin.trim();

    if let Some(caps) = HINTED_ORIGIN.captures(origin) {
        let piece = PieceKind::from_descriptive(&caps[1]).unwrap_or(PieceKind::Pawn);
        let disambiguation = match resolve_disambiguation_hint(&caps[2], color) {
            Ok(d) => Some(d),
            Err(err) => {
                log::debug!("dropping disambiguation for {origin}: {err}");
                None
            }
        };
        return ResolvedOrigin {
            mover: Mover::Piece(piece),
            disambiguation,
        };
    }

    if let Some((piece, disambiguation)) = resolve_piece_token(origin) {
        return ResolvedOrigin {
            mover: Mover::Piece(piece),
            disambiguation,
        };
    }

    let mut chars = origin.chars();
    let mover = match (chars.next(), chars.next()) {
        (Some(ch), None) => Mover::Unrecognized(ch),
        _ => Mover::Piece(PieceKind::Pawn),
    };

    ResolvedOrigin {
        mover,
        disambiguation: None,
    }
}

#[cfg(test)]
mod tests {
    use super::{
        resolve_disambiguation_hint, resolve_origin, resolve_piece_token, Mover, ResolvedOrigin,
    };
    use crate::notation::chess_types::{Color, Disambiguation, PieceKind};
    use crate::notation::notation_errors::NotationError;

    #[test]
    fn plain_tokens_map_to_themselves() {
        assert_eq!(resolve_piece_token("Q"), Some((PieceKind::Queen, None)));
        assert_eq!(resolve_piece_token("Kt"), Some((PieceKind::Knight, None)));
        assert_eq!(resolve_piece_token("P"), Some((PieceKind::Pawn, None)));
        assert_eq!(resolve_piece_token("QBP"), None);
    }

    #[test]
    fn side_qualified_tokens_add_a_file() {
        let cases = [
            ("KN", PieceKind::Knight, 'g'),
            ("KKt", PieceKind::Knight, 'g'),
            ("QN", PieceKind::Knight, 'b'),
            ("QKt", PieceKind::Knight, 'b'),
            ("KB", PieceKind::Bishop, 'f'),
            ("QB", PieceKind::Bishop, 'c'),
            ("KR", PieceKind::Rook, 'h'),
            ("QR", PieceKind::Rook, 'a'),
        ];
        for (token, piece, file) in cases {
            assert_eq!(
                resolve_piece_token(token),
                Some((piece, Some(Disambiguation::File(file)))),
                "token {token}"
            );
        }
    }

    #[test]
    fn numeric_hints_are_ranks_mirrored_for_black() {
        assert_eq!(
            resolve_disambiguation_hint("1", Color::White),
            Ok(Disambiguation::Rank(1))
        );
        assert_eq!(
            resolve_disambiguation_hint("1", Color::Black),
            Ok(Disambiguation::Rank(8))
        );
    }

    #[test]
    fn file_and_square_hints_are_files() {
        assert_eq!(
            resolve_disambiguation_hint("QR", Color::Black),
            Ok(Disambiguation::File('a'))
        );
        assert_eq!(
            resolve_disambiguation_hint("QR1", Color::White),
            Ok(Disambiguation::File('a'))
        );
        assert_eq!(
            resolve_disambiguation_hint("Q4", Color::Black),
            Ok(Disambiguation::File('d'))
        );
        assert_eq!(
            resolve_disambiguation_hint("left", Color::White),
            Err(NotationError::UnrecognizedDisambiguationHint("left".to_owned()))
        );
    }

    #[test]
    fn origins() {
        assert_eq!(
            resolve_origin("R(1)", Color::White),
            ResolvedOrigin {
                mover: Mover::Piece(PieceKind::Rook),
                disambiguation: Some(Disambiguation::Rank(1)),
            }
        );
        assert_eq!(
            resolve_origin("N(far)", Color::White),
            ResolvedOrigin {
                mover: Mover::Piece(PieceKind::Knight),
                disambiguation: None,
            }
        );
        assert_eq!(resolve_origin("KBP", Color::White).mover, Mover::Piece(PieceKind::Pawn));
        assert_eq!(resolve_origin("O", Color::White).mover, Mover::Unrecognized('O'));
        assert_eq!(resolve_origin("O", Color::White).mover.to_string(), "O");
        assert!(resolve_origin("", Color::White).mover.is_pawn());
    }
}
