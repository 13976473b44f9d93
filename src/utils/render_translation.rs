//! Text layouts for translated games.

use crate::game::game_translator::TranslatedRecord;
use crate::game::translation_config::OutputLayout;

const RULE_WIDTH: usize = 50;

/// All records on one space-separated line.
pub fn render_inline(records: &[TranslatedRecord]) -> String {
    records
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// One record per line.
pub fn render_one_per_line(records: &[TranslatedRecord]) -> String {
    records
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Full console report in the requested layout.
pub fn render_report(records: &[TranslatedRecord], layout: OutputLayout) -> String {
    let heavy = "=".repeat(RULE_WIDTH);
    let light = "-".repeat(RULE_WIDTH);
    let mut out = String::new();

    if matches!(layout, OutputLayout::Inline | OutputLayout::Both) {
        out.push_str(&format!(
            "{heavy}\nALGEBRAIC NOTATION (copy-paste ready):\n{heavy}\n\n"
        ));
        out.push_str(&render_inline(records));
        out.push('\n');
    }

    if matches!(layout, OutputLayout::OnePerLine | OutputLayout::Both) {
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(&format!("{light}\nOne move per line:\n{light}\n"));
        out.push_str(&render_one_per_line(records));
        out.push('\n');
    }

    out
}
