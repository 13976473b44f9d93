//! Command-line front end.
//!
//! Collects descriptive game text from a file or interactively from stdin
//! and prints the algebraic translation, optionally writing a PGN file.
//!
//! Run with:
//! `cargo run --release -- --input game.txt --layout inline`
//! `cargo run --release -- --pgn game.pgn --white Morphy --result 1-0`

use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use descriptive_notation::game::game_translator::{translate_game_with_config, TranslationSummary};
use descriptive_notation::game::translation_config::{OutputLayout, TranslationConfig};
use descriptive_notation::utils::line_collector::{collect_lines, read_all_lines};
use descriptive_notation::utils::pgn::{write_pgn, PgnTags};
use descriptive_notation::utils::render_translation::render_report;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LayoutArg {
    Inline,
    OnePerLine,
    Both,
}

impl From<LayoutArg> for OutputLayout {
    fn from(value: LayoutArg) -> Self {
        match value {
            LayoutArg::Inline => OutputLayout::Inline,
            LayoutArg::OnePerLine => OutputLayout::OnePerLine,
            LayoutArg::Both => OutputLayout::Both,
        }
    }
}

/// Translate chess games from descriptive to algebraic notation
#[derive(Parser, Debug)]
#[command(name = "descriptive_notation", version, about, long_about = None)]
struct Cli {
    /// Game file to translate; reads stdin interactively when omitted
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output layout
    #[arg(long, value_enum, default_value_t = LayoutArg::Both)]
    layout: LayoutArg,

    /// Lines starting with this prefix are ignored (repeatable, default "#")
    #[arg(long = "comment-prefix")]
    comment_prefixes: Vec<String>,

    /// Also write the translated game as PGN to this file
    #[arg(long)]
    pgn: Option<PathBuf>,

    /// PGN White tag
    #[arg(long, default_value = "White")]
    white: String,

    /// PGN Black tag
    #[arg(long, default_value = "Black")]
    black: String,

    /// PGN Event tag
    #[arg(long, default_value = "Translated Game")]
    event: String,

    /// PGN Result tag (1-0, 0-1, 1/2-1/2 or *)
    #[arg(long, default_value = "*")]
    result: String,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn print_banner() {
    println!("Chess Notation Converter: Descriptive -> Algebraic");
    println!("{}", "=".repeat(50));
    println!("Enter moves in descriptive notation.");
    println!("Format: '1. P-K4 P-K4' (one move pair per line)");
    println!();
    println!("Tips for best results:");
    println!("  - Use full squares: QB4, KB3, QN5 (not just B4, N5)");
    println!("  - Captures like 'BxP' need target squares: 'BxQB7'");
    println!();
    println!("Enter blank line when done.\n");
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let mut config = TranslationConfig {
        layout: cli.layout.into(),
        ..TranslationConfig::default()
    };
    if !cli.comment_prefixes.is_empty() {
        config.comment_prefixes = cli.comment_prefixes.clone();
    }

    let lines = match &cli.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open game file: {}", path.display()))?;
            read_all_lines(BufReader::new(file))
                .with_context(|| format!("Failed to read game file: {}", path.display()))?
        }
        None => {
            print_banner();
            collect_lines(io::stdin().lock(), &config).context("Failed to read stdin")?
        }
    };

    if lines.iter().all(|line| line.trim().is_empty()) {
        println!("No moves entered.");
        return Ok(());
    }

    let records = translate_game_with_config(&lines.join("\n"), &config);
    let summary = TranslationSummary::from_records(&records);
    if summary.flagged_moves > 0 {
        log::warn!(
            "{} of {} moves need manual review",
            summary.flagged_moves,
            summary.clean_moves + summary.flagged_moves
        );
    }

    println!();
    print!("{}", render_report(&records, config.layout));

    if let Some(path) = &cli.pgn {
        let tags = PgnTags {
            event: cli.event.clone(),
            white: cli.white.clone(),
            black: cli.black.clone(),
            result: cli.result.clone(),
            ..PgnTags::default()
        };
        std::fs::write(path, write_pgn(&records, &tags))
            .with_context(|| format!("Failed to write PGN file: {}", path.display()))?;
        log::info!("wrote PGN to {}", path.display());
    }

    Ok(())
}
