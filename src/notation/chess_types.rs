//! Value types shared by the descriptive-to-algebraic translation engine.
//!
//! Descriptive notation names squares relative to the mover, algebraic
//! notation names them on an absolute grid; the types here carry exactly the
//! information needed to go from one to the other.

use std::fmt;

/// Side making the move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Color of the ply at `position` in a move list that starts with White.
    #[inline]
    pub const fn from_ply_position(position: usize) -> Self {
        if position % 2 == 0 {
            Color::White
        } else {
            Color::Black
        }
    }

    /// Mirror a rank counted from this side's back rank onto White's absolute
    /// numbering. Digits above 9 pass through unchanged.
    #[inline]
    pub const fn mirror_rank(self, rank: u8) -> u8 {
        match self {
            Color::White => rank,
            Color::Black => {
                if rank <= 9 {
                    9 - rank
                } else {
                    rank
                }
            }
        }
    }
}

/// Piece kind as written in algebraic output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Algebraic piece letter; pawns are unmarked.
    #[inline]
    pub const fn algebraic_letter(self) -> &'static str {
        match self {
            PieceKind::Pawn => "",
            PieceKind::Knight => "N",
            PieceKind::Bishop => "B",
            PieceKind::Rook => "R",
            PieceKind::Queen => "Q",
            PieceKind::King => "K",
        }
    }

    /// Parse a plain descriptive piece token, including the archaic "Kt".
    pub fn from_descriptive(token: &str) -> Option<Self> {
        match token {
            "K" => Some(PieceKind::King),
            "Q" => Some(PieceKind::Queen),
            "R" => Some(PieceKind::Rook),
            "B" => Some(PieceKind::Bishop),
            "N" | "Kt" => Some(PieceKind::Knight),
            "P" => Some(PieceKind::Pawn),
            _ => None,
        }
    }

    /// Pieces a pawn may promote to, written as in a promotion suffix.
    pub fn from_promotion(token: &str) -> Option<Self> {
        match token {
            "Q" => Some(PieceKind::Queen),
            "R" => Some(PieceKind::Rook),
            "B" => Some(PieceKind::Bishop),
            "N" | "Kt" => Some(PieceKind::Knight),
            _ => None,
        }
    }
}

/// Canonical descriptive file, named after the piece that starts on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DescriptiveFile {
    QueenRook,
    QueenKnight,
    QueenBishop,
    Queen,
    King,
    KingBishop,
    KingKnight,
    KingRook,
}

impl DescriptiveFile {
    pub const ALL: [DescriptiveFile; 8] = [
        DescriptiveFile::QueenRook,
        DescriptiveFile::QueenKnight,
        DescriptiveFile::QueenBishop,
        DescriptiveFile::Queen,
        DescriptiveFile::King,
        DescriptiveFile::KingBishop,
        DescriptiveFile::KingKnight,
        DescriptiveFile::KingRook,
    ];

    /// Full file token. "Kt" spellings of the knight files are accepted.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "QR" => Some(DescriptiveFile::QueenRook),
            "QN" | "QKt" => Some(DescriptiveFile::QueenKnight),
            "QB" => Some(DescriptiveFile::QueenBishop),
            "Q" => Some(DescriptiveFile::Queen),
            "K" => Some(DescriptiveFile::King),
            "KB" => Some(DescriptiveFile::KingBishop),
            "KN" | "KKt" => Some(DescriptiveFile::KingKnight),
            "KR" => Some(DescriptiveFile::KingRook),
            _ => None,
        }
    }

    #[inline]
    pub const fn algebraic_file(self) -> char {
        match self {
            DescriptiveFile::QueenRook => 'a',
            DescriptiveFile::QueenKnight => 'b',
            DescriptiveFile::QueenBishop => 'c',
            DescriptiveFile::Queen => 'd',
            DescriptiveFile::King => 'e',
            DescriptiveFile::KingBishop => 'f',
            DescriptiveFile::KingKnight => 'g',
            DescriptiveFile::KingRook => 'h',
        }
    }

    pub const fn token(self) -> &'static str {
        match self {
            DescriptiveFile::QueenRook => "QR",
            DescriptiveFile::QueenKnight => "QN",
            DescriptiveFile::QueenBishop => "QB",
            DescriptiveFile::Queen => "Q",
            DescriptiveFile::King => "K",
            DescriptiveFile::KingBishop => "KB",
            DescriptiveFile::KingKnight => "KN",
            DescriptiveFile::KingRook => "KR",
        }
    }
}

/// Absolute square on White's grid, e.g. `e4`.
///
/// The rank is kept as the mirrored digit even when the descriptive input was
/// outside 1..=8, so odd input surfaces in the output instead of vanishing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AlgebraicSquare {
    pub file: char,
    pub rank: u8,
}

impl fmt::Display for AlgebraicSquare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file, self.rank)
    }
}

/// Extra file or rank written after the piece letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Disambiguation {
    File(char),
    Rank(u8),
}

impl fmt::Display for Disambiguation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Disambiguation::File(file) => write!(f, "{file}"),
            Disambiguation::Rank(rank) => write!(f, "{rank}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{AlgebraicSquare, Color, DescriptiveFile, Disambiguation, PieceKind};

    #[test]
    fn mirror_rank_is_an_involution_for_both_colors() {
        for rank in 1..=8u8 {
            assert_eq!(Color::White.mirror_rank(rank), rank);
            assert_eq!(Color::Black.mirror_rank(rank), 9 - rank);
            assert_eq!(Color::Black.mirror_rank(Color::Black.mirror_rank(rank)), rank);
        }
    }

    #[test]
    fn knight_file_tokens_accept_both_spellings() {
        assert_eq!(
            DescriptiveFile::from_token("QKt"),
            DescriptiveFile::from_token("QN")
        );
        assert_eq!(
            DescriptiveFile::from_token("KKt"),
            Some(DescriptiveFile::KingKnight)
        );
        assert_eq!(DescriptiveFile::from_token("Kt"), None);
    }

    #[test]
    fn files_cover_a_through_h_in_board_order() {
        let files: String = DescriptiveFile::ALL
            .iter()
            .map(|f| f.algebraic_file())
            .collect();
        assert_eq!(files, "abcdefgh");
        for file in DescriptiveFile::ALL {
            assert_eq!(DescriptiveFile::from_token(file.token()), Some(file));
        }
    }

    #[test]
    fn display_forms() {
        let square = AlgebraicSquare { file: 'e', rank: 4 };
        assert_eq!(square.to_string(), "e4");
        assert_eq!(Disambiguation::File('a').to_string(), "a");
        assert_eq!(Disambiguation::Rank(1).to_string(), "1");
        assert_eq!(PieceKind::Pawn.algebraic_letter(), "");
        assert_eq!(PieceKind::from_descriptive("Kt"), Some(PieceKind::Knight));
        assert_eq!(PieceKind::from_promotion("K"), None);
    }

    #[test]
    fn ply_position_alternates_starting_with_white() {
        assert_eq!(Color::from_ply_position(0), Color::White);
        assert_eq!(Color::from_ply_position(1), Color::Black);
        assert_eq!(Color::from_ply_position(2), Color::White);
    }
}
