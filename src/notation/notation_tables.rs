//! Fixed lookup tables for descriptive notation.
//!
//! All tables are immutable literals; lookups are linear scans over a handful
//! of entries.

use crate::notation::chess_types::{DescriptiveFile, PieceKind};

/// Side-qualified piece tokens: the piece and the file it started on.
pub const EXTENDED_PIECES: &[(&str, PieceKind, DescriptiveFile)] = &[
    ("KN", PieceKind::Knight, DescriptiveFile::KingKnight),
    ("KKt", PieceKind::Knight, DescriptiveFile::KingKnight),
    ("QN", PieceKind::Knight, DescriptiveFile::QueenKnight),
    ("QKt", PieceKind::Knight, DescriptiveFile::QueenKnight),
    ("KB", PieceKind::Bishop, DescriptiveFile::KingBishop),
    ("QB", PieceKind::Bishop, DescriptiveFile::QueenBishop),
    ("KR", PieceKind::Rook, DescriptiveFile::KingRook),
    ("QR", PieceKind::Rook, DescriptiveFile::QueenRook),
];

/// File-qualified pawn names and the file the pawn stands on.
pub const PAWN_ORIGIN_FILES: &[(&str, char)] = &[
    ("QRP", 'a'),
    ("QNP", 'b'),
    ("QKtP", 'b'),
    ("QBP", 'c'),
    ("QP", 'd'),
    ("KP", 'e'),
    ("KBP", 'f'),
    ("KNP", 'g'),
    ("KKtP", 'g'),
    ("KRP", 'h'),
];

/// Names that may stand in for a destination square when the source
/// notation names the captured piece ("PxP", "BxN").
pub const CAPTURED_PIECE_NAMES: &[&str] = &[
    "P", "N", "B", "R", "Q", "K", "Kt", "NP", "KtP", "BP", "RP", "QP", "KP", "QRP", "QNP",
    "QKtP", "QBP", "KBP", "KNP", "KKtP", "KRP",
];

/// Single-letter short destinations, read as the king-side file.
pub const SHORT_FORM_FILES: &[(&str, DescriptiveFile)] = &[
    ("R", DescriptiveFile::KingRook),
    ("N", DescriptiveFile::KingKnight),
    ("Kt", DescriptiveFile::KingKnight),
    ("B", DescriptiveFile::KingBishop),
];

pub fn extended_piece(token: &str) -> Option<(PieceKind, DescriptiveFile)> {
    EXTENDED_PIECES
        .iter()
        .find(|(name, _, _)| *name == token)
        .map(|(_, piece, file)| (*piece, *file))
}

pub fn pawn_origin_file(token: &str) -> Option<char> {
    PAWN_ORIGIN_FILES
        .iter()
        .find(|(name, _)| *name == token)
        .map(|(_, file)| *file)
}

pub fn is_captured_piece_name(token: &str) -> bool {
    CAPTURED_PIECE_NAMES.contains(&token)
}

pub fn short_form_file(token: &str) -> Option<DescriptiveFile> {
    SHORT_FORM_FILES
        .iter()
        .find(|(name, _)| *name == token)
        .map(|(_, file)| *file)
}
