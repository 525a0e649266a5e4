use clap::{Parser, Subcommand, ValueEnum};

use shiri_cli::commands::chain_ops::{self, PolicyArgs};
use shiri_cli::commands::{config_ops, kana_ops};
use shiri_cli::trace_init::init_tracing;
use shiri_session::InputMode;

#[derive(Parser)]
#[command(name = "shiritool", about = "Shiritori kana and chain diagnostics")]
struct Cli {
    /// Custom settings TOML (see settings-export)
    #[arg(long, global = true)]
    settings: Option<String>,
    /// Extra romaji mappings TOML ([hiragana] / [katakana] tables)
    #[arg(long, global = true)]
    kana: Option<String>,
    /// Debug logging to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Copy, ValueEnum)]
enum Mode {
    Romaji,
    Kana,
    Kanji,
}

impl From<Mode> for InputMode {
    fn from(m: Mode) -> Self {
        match m {
            Mode::Romaji => InputMode::Romaji,
            Mode::Kana => InputMode::Kana,
            Mode::Kanji => InputMode::Kanji,
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// Transliterate romaji to its kana spellings
    Convert {
        /// Romaji (or kana) text
        text: String,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Spell kana in Hepburn romaji
    Romaji {
        /// Hiragana or katakana
        kana: String,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Show the canonical form and morae of a kana word
    Normalize {
        /// Hiragana or katakana
        kana: String,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Classify a chat response as romaji, kana or kanji
    Classify {
        /// Raw response
        text: String,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Check whether a word may follow the previous one (exit 1 if not)
    Check {
        /// Candidate word (romaji or kana)
        candidate: String,
        /// Previous word (romaji or kana); omit for an opening word
        #[arg(long)]
        prev: Option<String>,
        /// Already played word (repeatable)
        #[arg(long)]
        played: Vec<String>,
        /// Skip the shape checks on the opening word
        #[arg(long)]
        lenient_opening: bool,
        /// Minimum morae per word
        #[arg(long)]
        min_morae: Option<usize>,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Replay a game from a file (one response per line, # comments)
    Replay {
        /// Path to the game file
        file: String,
        /// JSON dictionary to resolve words against (optional)
        #[arg(long)]
        dict: Option<String>,
        /// Accepted input kinds when a dictionary is used
        #[arg(long, value_enum, default_value = "romaji")]
        mode: Mode,
        /// Skip the shape checks on the opening word
        #[arg(long)]
        lenient_opening: bool,
        /// Minimum morae per word
        #[arg(long)]
        min_morae: Option<usize>,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Export default settings as TOML
    SettingsExport,
    /// Validate a custom settings TOML file
    SettingsValidate {
        /// Path to the TOML file
        file: String,
    },
    /// Validate a custom romaji mapping TOML file
    KanaValidate {
        /// Path to the TOML file
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    config_ops::load_custom(cli.settings.as_deref(), cli.kana.as_deref());

    match cli.command {
        Command::Convert { text, json } => kana_ops::convert(&text, json),
        Command::Romaji { kana, json } => kana_ops::romaji(&kana, json),
        Command::Normalize { kana, json } => kana_ops::normalize_cmd(&kana, json),
        Command::Classify { text, json } => kana_ops::classify_cmd(&text, json),
        Command::Check {
            candidate,
            prev,
            played,
            lenient_opening,
            min_morae,
            json,
        } => chain_ops::check(
            &candidate,
            prev.as_deref(),
            &played,
            PolicyArgs {
                lenient_opening,
                min_morae,
            },
            json,
        ),
        Command::Replay {
            file,
            dict,
            mode,
            lenient_opening,
            min_morae,
            json,
        } => chain_ops::replay(
            &file,
            dict.as_deref(),
            mode.into(),
            PolicyArgs {
                lenient_opening,
                min_morae,
            },
            json,
        ),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
        Command::KanaValidate { file } => config_ops::kana_validate(&file),
    }
}
