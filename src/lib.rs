//! Crate root module declarations for the descriptive notation translator.
//!
//! The `notation` modules translate single moves from descriptive notation
//! ("P-K4", "Kt-KB3") to algebraic notation ("e4", "Nf3"); `game` applies them
//! to whole transcripts; `utils` holds the text front-end collaborators.

pub mod notation {
    pub mod chess_types;
    pub mod move_translator;
    pub mod notation_errors;
    pub mod notation_tables;
    pub mod piece_resolver;
    pub mod square_resolver;
}

pub mod game {
    pub mod game_translator;
    pub mod translation_config;
}

pub mod utils {
    pub mod line_collector;
    pub mod pgn;
    pub mod render_translation;
}

pub use game::game_translator::{translate_game, translate_game_lines, TranslatedRecord};
pub use notation::chess_types::Color;
pub use notation::move_translator::{translate_move, translate_move_detailed};
pub use notation::notation_errors::{NotationError, TranslatedMove};
