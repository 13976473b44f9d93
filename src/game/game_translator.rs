//! Whole-game translation.
//!
//! Each non-blank, non-comment line is tokenised and matched against an
//! ordered list of line shapes: a numbered pair, a numbered white move and a
//! numbered black move. Anything else is read as a free-form move list whose
//! plies alternate colors starting with White.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::game::translation_config::TranslationConfig;
use crate::notation::chess_types::Color;
use crate::notation::move_translator::translate_move_detailed;
use crate::notation::notation_errors::TranslatedMove;

static TOKEN_SEPARATOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[,\s]+").expect("valid separator pattern"));

static MOVE_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9]+)(\.+)(.*)$").expect("valid move number pattern"));

/// Tokens that only annotate the move before them.
const DETACHED_SUFFIXES: &[&str] = &["ch", "mate", "e.p.", "ep", "e.p"];

/// One output record: "N. white black", "N. white" or "N... black".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslatedRecord {
    pub number: String,
    pub white: Option<TranslatedMove>,
    pub black: Option<TranslatedMove>,
}

impl TranslatedRecord {
    pub fn moves(&self) -> impl Iterator<Item = &TranslatedMove> {
        self.white.iter().chain(self.black.iter())
    }
}

impl fmt::Display for TranslatedRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.white, &self.black) {
            (Some(white), Some(black)) => write!(f, "{}. {white} {black}", self.number),
            (Some(white), None) => write!(f, "{}. {white}", self.number),
            (None, Some(black)) => write!(f, "{}... {black}", self.number),
            (None, None) => write!(f, "{}.", self.number),
        }
    }
}

/// Counts over a translated game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TranslationSummary {
    pub records: usize,
    pub clean_moves: usize,
    pub flagged_moves: usize,
}

impl TranslationSummary {
    pub fn from_records(records: &[TranslatedRecord]) -> Self {
        let mut summary = TranslationSummary {
            records: records.len(),
            ..TranslationSummary::default()
        };
        for mv in records.iter().flat_map(|record| record.moves()) {
            if mv.is_clean() {
                summary.clean_moves += 1;
            } else {
                summary.flagged_moves += 1;
            }
        }
        summary
    }
}

/// Recognised shape of one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineShape {
    NumberedPair {
        number: String,
        white: String,
        black: String,
    },
    NumberedWhite {
        number: String,
        white: String,
    },
    NumberedBlack {
        number: String,
        black: String,
    },
    FreeForm(Vec<FreeFormToken>),
}

/// One token of a free-form move list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FreeFormToken {
    /// "12." announces a White ply, "12..." a Black ply.
    MoveNumber { number: String, color: Color },
    Move(String),
}

type LineMatcher = fn(&[String]) -> Option<LineShape>;

/// Line shapes in matching order; the free-form reading is the fallback.
const LINE_MATCHERS: &[(&str, LineMatcher)] = &[
    ("numbered pair", match_numbered_pair),
    ("numbered white", match_numbered_white),
    ("numbered black", match_numbered_black),
];

/// Split a move-number prefix ("12.", "12...") into its digits and dot count.
fn split_move_number(token: &str) -> Option<(&str, usize)> {
    let caps = MOVE_NUMBER.captures(token)?;
    if !caps.get(3).is_some_and(|m| m.as_str().is_empty()) {
        return None;
    }
    let digits = caps.get(1)?.as_str();
    let dots = caps.get(2)?.as_str().len();
    Some((digits, dots))
}

/// Read a free-form token. Bare digits and "N.." carry no usable color and
/// are dropped.
fn free_form_token(token: &str) -> Option<FreeFormToken> {
    if let Some((digits, dots)) = split_move_number(token) {
        let color = match dots {
            1 => Color::White,
            3.. => Color::Black,
            _ => return None,
        };
        return Some(FreeFormToken::MoveNumber {
            number: digits.to_owned(),
            color,
        });
    }
    if token.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    Some(FreeFormToken::Move(token.to_owned()))
}

/// Free-form tokens, with the spaced "12. ... P-K4" turning "12." into a
/// Black move number.
fn free_form_tokens(tokens: &[String]) -> Vec<FreeFormToken> {
    let mut out: Vec<FreeFormToken> = Vec::with_capacity(tokens.len());
    for token in tokens {
        if token.as_str() == "..." {
            if let Some(FreeFormToken::MoveNumber { color, .. }) = out.last_mut() {
                *color = Color::Black;
                continue;
            }
        }
        out.extend(free_form_token(token));
    }
    out
}

fn match_numbered_pair(tokens: &[String]) -> Option<LineShape> {
    let [number, white, black] = tokens else {
        return None;
    };
    if white.starts_with('.') {
        return None;
    }
    match split_move_number(number)? {
        (digits, 1) => Some(LineShape::NumberedPair {
            number: digits.to_owned(),
            white: white.clone(),
            black: black.clone(),
        }),
        _ => None,
    }
}

fn match_numbered_white(tokens: &[String]) -> Option<LineShape> {
    let [number, white] = tokens else {
        return None;
    };
    if white.starts_with('.') {
        return None;
    }
    match split_move_number(number)? {
        (digits, 1) => Some(LineShape::NumberedWhite {
            number: digits.to_owned(),
            white: white.clone(),
        }),
        _ => None,
    }
}

/// "12... P-K4", and the spaced form "12. ... P-K4".
fn match_numbered_black(tokens: &[String]) -> Option<LineShape> {
    let (number, black) = match tokens {
        [number, black] => (number, black),
        [number, dots, black] if dots.as_str() == "..." => (number, black),
        _ => return None,
    };
    let (digits, dots) = split_move_number(number)?;
    let spaced = tokens.len() == 3;
    if (spaced && dots == 1) || (!spaced && dots >= 3) {
        return Some(LineShape::NumberedBlack {
            number: digits.to_owned(),
            black: black.clone(),
        });
    }
    None
}

/// Split a line into move tokens.
///
/// Commas and whitespace separate tokens. A number glued to its move
/// ("1.P-K4") is split apart; detached annotations ("P-K4 ch") and the
/// two-word castling forms ("Castles KR") are glued back to their move.
pub fn tokenize_line(line: &str) -> Vec<String> {
    let mut tokens: Vec<String> = Vec::new();
    let mut castles_pending = false;

    for raw in TOKEN_SEPARATOR.split(line.trim()).filter(|t| !t.is_empty()) {
        if castles_pending {
            castles_pending = false;
            if let Some(last) = tokens.last_mut() {
                last.push(' ');
                last.push_str(raw);
                continue;
            }
        }

        if DETACHED_SUFFIXES.contains(&raw) {
            if let Some(last) = tokens.last_mut() {
                last.push(' ');
                last.push_str(raw);
                continue;
            }
        }

        if raw.eq_ignore_ascii_case("castles") {
            castles_pending = true;
            tokens.push(raw.to_owned());
            continue;
        }

        if let Some(caps) = MOVE_NUMBER.captures(raw) {
            let rest = caps.get(3).map_or("", |m| m.as_str());
            if !rest.is_empty() && !rest.starts_with('.') {
                let prefix_len = raw.len() - rest.len();
                tokens.push(raw[..prefix_len].to_owned());
                tokens.push(rest.to_owned());
                continue;
            }
        }

        tokens.push(raw.to_owned());
    }

    tokens
}

/// Classify a tokenised line.
pub fn match_line_shape(tokens: &[String]) -> LineShape {
    for (name, matcher) in LINE_MATCHERS {
        if let Some(shape) = matcher(tokens) {
            log::trace!("line matched as {name}");
            return shape;
        }
    }

    LineShape::FreeForm(free_form_tokens(tokens))
}

/// Translate a whole game with the default settings.
pub fn translate_game(text: &str) -> Vec<TranslatedRecord> {
    translate_game_with_config(text, &TranslationConfig::default())
}

pub fn translate_game_with_config(text: &str, config: &TranslationConfig) -> Vec<TranslatedRecord> {
    let mut records = Vec::<TranslatedRecord>::new();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || config.is_comment(line) {
            continue;
        }

        match match_line_shape(&tokenize_line(line)) {
            LineShape::NumberedPair {
                number,
                white,
                black,
            } => records.push(TranslatedRecord {
                number,
                white: Some(translate_move_detailed(&white, Color::White)),
                black: Some(translate_move_detailed(&black, Color::Black)),
            }),
            LineShape::NumberedWhite { number, white } => records.push(TranslatedRecord {
                number,
                white: Some(translate_move_detailed(&white, Color::White)),
                black: None,
            }),
            LineShape::NumberedBlack { number, black } => records.push(TranslatedRecord {
                number,
                white: None,
                black: Some(translate_move_detailed(&black, Color::Black)),
            }),
            LineShape::FreeForm(moves) => append_free_form(&mut records, &moves),
        }
    }

    let summary = TranslationSummary::from_records(&records);
    log::info!(
        "translated {} records: {} clean moves, {} flagged",
        summary.records,
        summary.clean_moves,
        summary.flagged_moves
    );

    records
}

/// Formatted records, one string per record.
pub fn translate_game_lines(text: &str) -> Vec<String> {
    translate_game(text).iter().map(ToString::to_string).collect()
}

/// Colors alternate per line starting with White; a move number in the line
/// ("3." or "2...") sets both the color and the number of the next ply.
/// Unnumbered plies continue from the number of records produced so far,
/// which is a heuristic: a line with an odd ply count cannot be told apart
/// from one ending mid-pair.
fn append_free_form(records: &mut Vec<TranslatedRecord>, tokens: &[FreeFormToken]) {
    let mut ply = 0;
    let mut source_number: Option<String> = None;

    for token in tokens {
        let text = match token {
            FreeFormToken::MoveNumber { number, color } => {
                source_number = Some(number.clone());
                ply = match color {
                    Color::White => 0,
                    Color::Black => 1,
                };
                continue;
            }
            FreeFormToken::Move(text) => text,
        };

        let color = Color::from_ply_position(ply);
        ply += 1;
        let translated = translate_move_detailed(text, color);
        let numbered = source_number.take();
        let next_number = (records.len() + 1).to_string();

        match (color, numbered) {
            (Color::White, number) => records.push(TranslatedRecord {
                number: number.unwrap_or(next_number),
                white: Some(translated),
                black: None,
            }),
            (Color::Black, Some(number)) => records.push(TranslatedRecord {
                number,
                white: None,
                black: Some(translated),
            }),
            (Color::Black, None) => match records.last_mut() {
                Some(last) if last.black.is_none() => last.black = Some(translated),
                _ => records.push(TranslatedRecord {
                    number: next_number,
                    white: None,
                    black: Some(translated),
                }),
            },
        }
    }
}
