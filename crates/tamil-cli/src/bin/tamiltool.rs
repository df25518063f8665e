use clap::{Parser, Subcommand};

use tamil_cli::commands::{accuracy_ops, config_ops, convert_ops, load_table, table_ops};

#[derive(Parser)]
#[command(name = "tamiltool", about = "Phonetic Tamil transliteration tool")]
struct Cli {
    /// Custom mapping table TOML (default: built-in Tamil table)
    #[arg(long, global = true)]
    mapping: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert phonetic text to Tamil, one output line per input line
    Convert {
        /// Text to convert (reads stdin when omitted)
        text: Option<String>,
        /// Leave the text unconverted (English mode)
        #[arg(long)]
        english: bool,
        /// Print the last status event to stderr
        #[arg(long)]
        status: bool,
    },
    /// Show which rule fired at each step of a single word
    Explain {
        /// Phonetic word
        word: String,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Convert text and save the result as UTF-8
    Save {
        /// Output file (default extension appended when missing)
        output_file: String,
        /// Text to convert (reads stdin when omitted)
        text: Option<String>,
        /// Save the text unconverted (English mode)
        #[arg(long)]
        english: bool,
    },
    /// Print the vowel, consonant and whole-word reference grids
    Table {
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print the default mapping table TOML
    MappingExport,
    /// Validate a mapping table TOML file
    MappingValidate {
        /// Path to mapping TOML
        file: String,
    },
    /// Print the default settings TOML
    SettingsExport,
    /// Validate a settings TOML file
    SettingsValidate {
        /// Path to settings TOML
        file: String,
    },
    /// Run transliteration accuracy tests from a TOML corpus
    Accuracy {
        /// Path to the accuracy corpus TOML file
        corpus_file: String,
        /// Filter by category (only run cases in this category)
        #[arg(long)]
        category: Option<String>,
        /// Show passing cases too (default: only failures and skips)
        #[arg(long)]
        verbose: bool,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    let mapping = cli.mapping.as_deref();

    match cli.command {
        Command::Convert {
            text,
            english,
            status,
        } => convert_ops::convert_cmd(&load_table(mapping), text.as_deref(), english, status),
        Command::Explain { word, json } => {
            convert_ops::explain_cmd(&load_table(mapping), &word, json)
        }
        Command::Save {
            output_file,
            text,
            english,
        } => convert_ops::save_cmd(load_table(mapping), &output_file, text.as_deref(), english),
        Command::Table { json } => table_ops::table_cmd(&load_table(mapping), json),
        Command::MappingExport => config_ops::mapping_export(),
        Command::MappingValidate { file } => config_ops::mapping_validate(&file),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
        Command::Accuracy {
            corpus_file,
            category,
            verbose,
            json,
        } => accuracy_ops::accuracy_cmd(
            &load_table(mapping),
            &corpus_file,
            category.as_deref(),
            verbose,
            json,
        ),
    }
}
