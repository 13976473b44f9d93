//! Settings for game translation and the text front end.

/// How translated records are presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputLayout {
    /// All records on one space-separated line.
    Inline,
    /// One record per line.
    OnePerLine,
    /// Inline block followed by the one-per-line block.
    Both,
}

#[derive(Debug, Clone)]
pub struct TranslationConfig {
    /// Lines starting with any of these are skipped.
    pub comment_prefixes: Vec<String>,
    /// Interactive input ends at a line equal to one of these (case-insensitive).
    pub stop_words: Vec<String>,
    pub layout: OutputLayout,
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            comment_prefixes: vec!["#".to_owned()],
            stop_words: vec!["done".to_owned()],
            layout: OutputLayout::Both,
        }
    }
}

impl TranslationConfig {
    pub fn is_comment(&self, line: &str) -> bool {
        self.comment_prefixes
            .iter()
            .any(|prefix| !prefix.is_empty() && line.starts_with(prefix.as_str()))
    }

    pub fn is_stop_word(&self, line: &str) -> bool {
        self.stop_words
            .iter()
            .any(|word| line.eq_ignore_ascii_case(word))
    }
}

#[cfg(test)]
mod tests {
    use super::{OutputLayout, TranslationConfig};

    #[test]
    fn defaults_match_the_interactive_front_end() {
        let config = TranslationConfig::default();
        assert!(config.is_comment("# Morphy - Duke of Brunswick"));
        assert!(!config.is_comment("1. P-K4 P-K4"));
        assert!(config.is_stop_word("DONE"));
        assert!(!config.is_stop_word("done!"));
        assert_eq!(config.layout, OutputLayout::Both);
    }

    #[test]
    fn empty_prefixes_never_match() {
        let config = TranslationConfig {
            comment_prefixes: vec![String::new(), ";".to_owned()],
            ..TranslationConfig::default()
        };
        assert!(config.is_comment("; annotation"));
        assert!(!config.is_comment("# not a comment here"));
    }
}
