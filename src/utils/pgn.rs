//! PGN export for translated games.
//!
//! Writes the seven-tag roster followed by the translated movetext. Moves the
//! translator could not resolve are written with their markers so they can be
//! repaired by hand before the file is loaded elsewhere.

use std::collections::BTreeMap;

use chrono::Local;

use crate::game::game_translator::TranslatedRecord;

/// Player and event names for the tag roster.
#[derive(Debug, Clone)]
pub struct PgnTags {
    pub event: String,
    pub site: String,
    pub round: String,
    pub white: String,
    pub black: String,
    pub result: String,
}

impl Default for PgnTags {
    fn default() -> Self {
        Self {
            event: "Translated Game".to_owned(),
            site: "?".to_owned(),
            round: "-".to_owned(),
            white: "White".to_owned(),
            black: "Black".to_owned(),
            result: "*".to_owned(),
        }
    }
}

/// Write a PGN game dated today.
pub fn write_pgn(records: &[TranslatedRecord], tags: &PgnTags) -> String {
    let mut headers = BTreeMap::<String, String>::new();
    headers.insert("Event".to_owned(), tags.event.clone());
    headers.insert("Site".to_owned(), tags.site.clone());
    headers.insert(
        "Date".to_owned(),
        Local::now().format("%Y.%m.%d").to_string(),
    );
    headers.insert("Round".to_owned(), tags.round.clone());
    headers.insert("White".to_owned(), tags.white.clone());
    headers.insert("Black".to_owned(), tags.black.clone());
    headers.insert(
        "Result".to_owned(),
        normalize_result(&tags.result).to_owned(),
    );

    write_pgn_with_headers(records, &headers)
}

pub fn write_pgn_with_headers(
    records: &[TranslatedRecord],
    headers: &BTreeMap<String, String>,
) -> String {
    let mut out = String::new();

    for (key, value) in headers {
        out.push_str(&format!("[{} \"{}\"]\n", key, escape_pgn_value(value)));
    }
    out.push('\n');

    let mut movetext_parts = records
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>();

    let result = headers
        .get("Result")
        .map(|x| normalize_result(x))
        .unwrap_or("*");
    movetext_parts.push(result.to_owned());
    out.push_str(&movetext_parts.join(" "));
    out.push('\n');

    out
}

fn is_result_token(token: &str) -> bool {
    matches!(token, "1-0" | "0-1" | "1/2-1/2" | "*")
}

fn normalize_result(result: &str) -> &str {
    if is_result_token(result) {
        result
    } else {
        "*"
    }
}

fn escape_pgn_value(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
