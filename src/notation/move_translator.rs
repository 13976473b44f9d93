//! Single-move translation from descriptive to algebraic notation.
//!
//! A move is processed in a fixed order of stages: castling, check/mate
//! suffix, en passant marker, promotion, capture marker, origin/destination
//! split, origin resolution and destination resolution. Each stage strips
//! the syntax it recognised before the next one runs.
//!
//! Translation never fails. A move that cannot be resolved comes back as a
//! marked placeholder so the rest of the game is still translated.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::notation::chess_types::{Color, PieceKind};
use crate::notation::notation_errors::{NotationError, TranslatedMove};
use crate::notation::notation_tables::{is_captured_piece_name, pawn_origin_file};
use crate::notation::piece_resolver::{resolve_origin, Mover};
use crate::notation::square_resolver::parse_descriptive_square;

static EN_PASSANT_SUFFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*e\.?p\.?$").expect("valid en passant pattern"));

static PROMOTION_SUFFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:\(([QRBN]|Kt)\)|[=/]([QRBN]|Kt))$").expect("valid promotion pattern")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Castle {
    KingSide,
    QueenSide,
}

impl Castle {
    pub const fn algebraic(self) -> &'static str {
        match self {
            Castle::KingSide => "O-O",
            Castle::QueenSide => "O-O-O",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CastleForm {
    Exact(&'static str),
    Contains(&'static str),
}

/// Castling spellings, compared against the upper-cased move.
const CASTLING_FORMS: &[(CastleForm, Castle)] = &[
    (CastleForm::Exact("O-O"), Castle::KingSide),
    (CastleForm::Exact("0-0"), Castle::KingSide),
    (CastleForm::Contains("CASTLES KR"), Castle::KingSide),
    (CastleForm::Exact("CASTLES K"), Castle::KingSide),
    (CastleForm::Exact("O-O-O"), Castle::QueenSide),
    (CastleForm::Exact("0-0-0"), Castle::QueenSide),
    (CastleForm::Contains("CASTLES QR"), Castle::QueenSide),
    (CastleForm::Exact("CASTLES Q"), Castle::QueenSide),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckSuffix {
    Check,
    Mate,
}

impl CheckSuffix {
    pub const fn algebraic(self) -> &'static str {
        match self {
            CheckSuffix::Check => "+",
            CheckSuffix::Mate => "#",
        }
    }
}

/// Trailing check and mate spellings; longer forms first.
const CHECK_SUFFIXES: &[(&str, CheckSuffix)] = &[
    ("++", CheckSuffix::Mate),
    (" mate", CheckSuffix::Mate),
    ("+", CheckSuffix::Check),
    (" ch", CheckSuffix::Check),
    ("ch", CheckSuffix::Check),
];

pub fn match_castling(move_text: &str) -> Option<Castle> {
    let upper = move_text.trim().to_ascii_uppercase();

    CASTLING_FORMS
        .iter()
        .find(|(form, _)| match form {
            CastleForm::Exact(text) => upper == *text,
            CastleForm::Contains(text) => upper.contains(text),
        })
        .map(|(_, castle)| *castle)
}

/// Remove a trailing check or mate marker.
pub fn strip_check_suffix(move_text: &str) -> (&str, Option<CheckSuffix>) {
    for (suffix, kind) in CHECK_SUFFIXES {
        if let Some(rest) = move_text.strip_suffix(suffix) {
            let rest = match kind {
                CheckSuffix::Mate => rest.trim_end_matches(['+', '#']),
                CheckSuffix::Check => rest.trim_end_matches('+'),
            };
            return (rest.trim_end(), Some(*kind));
        }
    }

    (move_text, None)
}

pub fn strip_en_passant(move_text: &str) -> &str {
    match EN_PASSANT_SUFFIX.find(move_text) {
        Some(m) => move_text[..m.start()].trim_end(),
        None => move_text,
    }
}

/// Remove a trailing "(Q)", "=Q" or "/Q" and return it as "=Q".
pub fn strip_promotion(move_text: &str) -> (&str, Option<PieceKind>) {
    let Some(caps) = PROMOTION_SUFFIX.captures(move_text) else {
        return (move_text, None);
    };

    let piece = caps
        .get(1)
        .or_else(|| caps.get(2))
        .and_then(|m| PieceKind::from_promotion(m.as_str()));
    let start = caps.get(0).map_or(move_text.len(), |m| m.start());

    (&move_text[..start], piece)
}

/// Translate one descriptive move for the given side.
///
/// Placeholders: `"<original>[?]"` when the move cannot be parsed and
/// `"<piece>x<captured>?"` when the destination names a piece.
pub fn translate_move(move_text: &str, color: Color) -> String {
    translate_move_detailed(move_text, color).to_string()
}

pub fn translate_move_detailed(move_text: &str, color: Color) -> TranslatedMove {
    let original = move_text.trim();
    let translated = translate_stages(original, color);

    match translated.error() {
        None => log::debug!("{original} ({color:?}) -> {translated}"),
        Some(err) => log::warn!("{original} ({color:?}) -> {translated}: {err}"),
    }

    translated
}

fn translate_stages(original: &str, color: Color) -> TranslatedMove {
    if let Some(castle) = match_castling(original) {
        return TranslatedMove::Clean(castle.algebraic().to_owned());
    }

    let (working, check) = strip_check_suffix(original);
    let working = strip_en_passant(working);
    let (working, promotion) = strip_promotion(working);

    let is_capture = working.contains(['x', 'X']);
    let working = working.replace(['x', 'X'], "-");

    let mut parts = working.split('-');
    let (Some(origin_part), Some(dest_part), None) = (parts.next(), parts.next(), parts.next())
    else {
        return TranslatedMove::Unparseable {
            original: original.to_owned(),
            error: NotationError::UnparseableMove(original.to_owned()),
        };
    };

    let origin_part = origin_part.trim();
    let dest_part = dest_part.trim();
    let origin = resolve_origin(origin_part, color);

    let mover = if origin.mover.is_pawn() && is_capture {
        pawn_origin_file(origin_part)
            .map(String::from)
            .unwrap_or_default()
    } else {
        origin.mover.to_string()
    };

    let Some(destination) = parse_descriptive_square(dest_part, color) else {
        return translate_named_capture(original, origin.mover, &mover, dest_part);
    };

    let mut out = mover;
    if let Some(disambiguation) = origin.disambiguation {
        out.push_str(&disambiguation.to_string());
    }
    if is_capture {
        out.push('x');
    }
    out.push_str(&destination.to_string());
    if let Some(piece) = promotion {
        out.push('=');
        out.push_str(piece.algebraic_letter());
    }
    if let Some(check) = check {
        out.push_str(check.algebraic());
    }

    TranslatedMove::Clean(out)
}

/// "PxP", "BxN": the destination names the captured piece.
fn translate_named_capture(
    original: &str,
    mover: Mover,
    mover_text: &str,
    dest_part: &str,
) -> TranslatedMove {
    if !is_captured_piece_name(dest_part) {
        return TranslatedMove::Unparseable {
            original: original.to_owned(),
            error: NotationError::UnresolvableDestination(dest_part.to_owned()),
        };
    }

    // A generic pawn has no algebraic letter, so "PxP" leaves "x?".
    let captured = match PieceKind::from_descriptive(dest_part) {
        Some(piece) => piece.algebraic_letter().to_owned(),
        None => dest_part.replace("Kt", "N"),
    };
    let piece = match mover {
        Mover::Piece(PieceKind::Pawn) => mover_text.to_owned(),
        _ => mover.to_string(),
    };

    TranslatedMove::NeedsSquare {
        partial: format!("{piece}x{captured}"),
        error: NotationError::AmbiguousCapture { piece, captured },
    }
}

#[cfg(test)]
mod tests {
    use super::{
        match_castling, strip_check_suffix, strip_en_passant, strip_promotion, translate_move,
        translate_move_detailed, Castle, CheckSuffix,
    };
    use crate::notation::chess_types::{Color, PieceKind};
    use crate::notation::notation_errors::{NotationError, TranslatedMove};

    #[test]
    fn castling_forms_for_both_colors() {
        for color in [Color::White, Color::Black] {
            assert_eq!(translate_move("O-O", color), "O-O");
            assert_eq!(translate_move("0-0", color), "O-O");
            assert_eq!(translate_move("Castles KR", color), "O-O");
            assert_eq!(translate_move("castles k", color), "O-O");
            assert_eq!(translate_move("O-O-O", color), "O-O-O");
            assert_eq!(translate_move("0-0-0", color), "O-O-O");
            assert_eq!(translate_move("CASTLES QR", color), "O-O-O");
            assert_eq!(translate_move("Castles Q", color), "O-O-O");
        }
        assert_eq!(match_castling("o-o-o"), Some(Castle::QueenSide));
        assert_eq!(match_castling("P-K4"), None);
    }

    #[test]
    fn castling_with_a_check_is_flagged() {
        assert_eq!(match_castling("O-O ch"), None);
        assert_eq!(translate_move("O-O ch", Color::White), "O-O ch[?]");
        assert_eq!(translate_move("O-O+", Color::Black), "O-O+[?]");
        assert_eq!(translate_move("O-O-O ch", Color::White), "O-O-O ch[?]");
        assert!(!translate_move_detailed("0-0+", Color::White).is_clean());
    }

    #[test]
    fn check_spellings_agree() {
        let plain = translate_move("Q-R5", Color::White);
        assert_eq!(plain, "Qh5");
        for text in ["Q-R5+", "Q-R5ch", "Q-R5 ch"] {
            assert_eq!(translate_move(text, Color::White), format!("{plain}+"), "{text}");
        }
        for text in ["Q-R5++", "Q-R5 mate"] {
            assert_eq!(translate_move(text, Color::White), format!("{plain}#"), "{text}");
        }
        assert_eq!(strip_check_suffix("N-B6ch"), ("N-B6", Some(CheckSuffix::Check)));
        assert_eq!(strip_check_suffix("P-K4"), ("P-K4", None));
    }

    #[test]
    fn en_passant_marker_is_dropped() {
        assert_eq!(strip_en_passant("PxP e.p."), "PxP");
        assert_eq!(strip_en_passant("KPxQ6ep"), "KPxQ6");
        assert_eq!(translate_move("KPxQ6 e.p.", Color::White), "exd6");
        assert_eq!(
            translate_move("KPxQ6 e.p.", Color::White),
            translate_move("KPxQ6", Color::White)
        );
    }

    #[test]
    fn promotion_forms_normalise() {
        for text in ["P-K8(Q)", "P-K8=Q", "P-K8/Q"] {
            assert_eq!(translate_move(text, Color::White), "e8=Q", "{text}");
        }
        assert_eq!(translate_move("P-Q8(Kt)", Color::Black), "d1=N");
        assert_eq!(translate_move("PxN8=R+", Color::White), "xg8=R+");
        assert_eq!(strip_promotion("P-R8/B"), ("P-R8", Some(PieceKind::Bishop)));
    }

    #[test]
    fn ordinary_moves() {
        assert_eq!(translate_move("P-K4", Color::White), "e4");
        assert_eq!(translate_move("P-K4", Color::Black), "e5");
        assert_eq!(translate_move("N-KB3", Color::White), "Nf3");
        assert_eq!(translate_move("Kt-QB3", Color::Black), "Nc6");
        assert_eq!(translate_move("B-N5", Color::White), "Bg5");
        assert_eq!(translate_move("K-Q2", Color::Black), "Kd7");
    }

    #[test]
    fn disambiguation_forms() {
        assert_eq!(translate_move("KN-B3", Color::White), "Ngf3");
        assert_eq!(translate_move("QR-Q1", Color::White), "Rad1");
        assert_eq!(translate_move("R(QR1)-Q1", Color::White), "Rad1");
        assert_eq!(translate_move("R(1)-Q1", Color::Black), "R8d8");
        assert_eq!(translate_move("N(Q2)-KB3", Color::White), "Ndf3");
        assert_eq!(translate_move("R(far)-Q1", Color::White), "Rd1");
    }

    #[test]
    fn captures_and_pawn_files() {
        assert_eq!(translate_move("QBPxQP", Color::White), "cxQP?");
        assert_eq!(translate_move("QBPxQ5", Color::White), "cxd5");
        assert_eq!(translate_move("KPXQ5", Color::White), "exd5");
        assert_eq!(translate_move("NxKB7", Color::Black), "Nxf2");
        assert_eq!(translate_move("PxQ4", Color::Black), "xd5");
    }

    #[test]
    fn pieces_named_as_destinations_need_a_square() {
        assert_eq!(translate_move("BxN", Color::White), "BxN?");
        assert_eq!(translate_move("NxKt", Color::Black), "NxN?");
        assert_eq!(translate_move("PxP", Color::White), "x?");
        assert_eq!(translate_move("QxP", Color::Black), "Qx?");
        assert_eq!(translate_move("KPxQBP", Color::White), "exQBP?");
        assert_eq!(translate_move("KtxQKtP", Color::White), "NxQNP?");
        assert_eq!(translate_move("KKtPxKtP", Color::Black), "gxNP?");
        assert_eq!(
            translate_move_detailed("PxP", Color::Black),
            TranslatedMove::NeedsSquare {
                partial: "x".to_owned(),
                error: NotationError::AmbiguousCapture {
                    piece: String::new(),
                    captured: String::new(),
                },
            }
        );
        assert_eq!(
            translate_move_detailed("BxN", Color::White),
            TranslatedMove::NeedsSquare {
                partial: "BxN".to_owned(),
                error: NotationError::AmbiguousCapture {
                    piece: "B".to_owned(),
                    captured: "N".to_owned(),
                },
            }
        );
    }

    #[test]
    fn malformed_moves_are_marked_not_fatal() {
        assert_eq!(translate_move("P-K4-K5-K6", Color::White), "P-K4-K5-K6[?]");
        assert_eq!(translate_move("P-K4-K5", Color::Black), "P-K4-K5[?]");
        assert_eq!(translate_move("P4", Color::White), "P4[?]");
        assert_eq!(translate_move("N-ZZ3", Color::White), "N-ZZ3[?]");
        assert_eq!(
            translate_move_detailed("N-ZZ3", Color::White).error(),
            Some(&NotationError::UnresolvableDestination("ZZ3".to_owned()))
        );
    }
}
