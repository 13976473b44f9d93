//! Descriptive square to algebraic square conversion.
//!
//! Files are the same for both players (QR = a ... KR = h); ranks are counted
//! from the mover's own back rank, so Black's ranks are mirrored with `9 - n`.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::notation::chess_types::{AlgebraicSquare, Color, DescriptiveFile};
use crate::notation::notation_errors::NotationError;
use crate::notation::notation_tables::short_form_file;

/// Surface forms a descriptive square may take, in matching order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SquareForm {
    /// Two-part file such as "QB3" or "KKt5".
    SideQualified,
    /// The queen or king file, "Q4" or "K4".
    Centre,
    /// Bare "R4", "N4", "Kt4", "B4"; assumed to be the king-side file.
    ShortForm,
}

static SQUARE_FORMS: Lazy<Vec<(SquareForm, Regex)>> = Lazy::new(|| {
    vec![
        (
            SquareForm::SideQualified,
            Regex::new(r"^(QR|QKt|QN|QB|KR|KKt|KN|KB)([0-9])$").expect("valid square pattern"),
        ),
        (
            SquareForm::Centre,
            Regex::new(r"^(Q|K)([0-9])$").expect("valid square pattern"),
        ),
        (
            SquareForm::ShortForm,
            Regex::new(r"^(R|N|Kt|B)([0-9])$").expect("valid square pattern"),
        ),
    ]
});

/// Resolve a file token and a rank digit counted from `color`'s side.
pub fn resolve_square(
    file_token: &str,
    rank_digit: u8,
    color: Color,
) -> Result<AlgebraicSquare, NotationError> {
    let file = DescriptiveFile::from_token(file_token)
        .ok_or_else(|| NotationError::UnrecognizedFile(file_token.to_owned()))?;

    Ok(AlgebraicSquare {
        file: file.algebraic_file(),
        rank: color.mirror_rank(rank_digit),
    })
}

/// Classify `text` as one of the known square forms and return the canonical
/// file token together with the rank digit.
pub fn match_square_form(text: &str) -> Option<(SquareForm, &'static str, u8)> {
    let text = text.trim();

    for (form, pattern) in SQUARE_FORMS.iter() {
        let Some(caps) = pattern.captures(text) else {
            continue;
        };

        let file_token = &caps[1];
        let rank_digit = caps[2].chars().next()?.to_digit(10)? as u8;

        let file = match form {
            SquareForm::ShortForm => short_form_file(file_token)?,
            SquareForm::SideQualified | SquareForm::Centre => {
                DescriptiveFile::from_token(file_token)?
            }
        };

        return Some((*form, file.token(), rank_digit));
    }

    None
}

/// Parse a full descriptive square such as "KB3" for the given mover.
///
/// Returns `None` when the text is not a square; callers then try reading it
/// as the name of a captured piece.
pub fn parse_descriptive_square(text: &str, color: Color) -> Option<AlgebraicSquare> {
    let (form, file_token, rank_digit) = match_square_form(text)?;
    if form == SquareForm::ShortForm {
        log::debug!("short square {text} read as {file_token}{rank_digit}");
    }
    resolve_square(file_token, rank_digit, color).ok()
}
