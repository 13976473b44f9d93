//! Gathers raw game text for the translator.
//!
//! Interactive input ends at EOF, a blank line or a stop word; file input is
//! taken whole. Line order and boundaries are preserved either way.

use std::io::{self, BufRead};

use crate::game::translation_config::TranslationConfig;

/// Read lines until EOF, an empty line or a configured stop word.
pub fn collect_lines<R: BufRead>(reader: R, config: &TranslationConfig) -> io::Result<Vec<String>> {
    let mut lines = Vec::<String>::new();

    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || config.is_stop_word(trimmed) {
            break;
        }
        lines.push(line);
    }

    log::debug!("collected {} lines", lines.len());
    Ok(lines)
}

/// Read everything, keeping blank lines; the translator skips them.
pub fn read_all_lines<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    reader.lines().collect()
}
