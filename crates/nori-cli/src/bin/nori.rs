use clap::{Parser, Subcommand};

use nori_cli::commands::{analyze_ops, config_ops, dict_ops};
use nori_cli::trace_init::init_tracing;
use nori_core::Granularity;

#[derive(Parser)]
#[command(name = "nori", about = "Korean morphological analyzer")]
struct Cli {
    /// Debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,
    /// Custom settings TOML
    #[arg(long, global = true)]
    settings: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Analyze text (reads stdin lines when --text is absent)
    Tokenize {
        /// System dictionary file
        dict_file: String,
        /// User dictionary file
        #[arg(long)]
        user: Option<String>,
        /// Text to analyze
        #[arg(long)]
        text: Option<String>,
        /// compound, decompose or mixed
        #[arg(long, default_value = "compound")]
        granularity: Granularity,
        /// Analyze the input as given
        #[arg(long)]
        no_normalize: bool,
        /// One JSON array of tokens per input line
        #[arg(long)]
        json: bool,
    },
    /// Print the solved lattice as GraphViz DOT
    Graphviz {
        /// System dictionary file
        dict_file: String,
        /// Text to analyze
        #[arg(long)]
        text: String,
        /// User dictionary file
        #[arg(long)]
        user: Option<String>,
    },
    /// Validate dictionary files and print statistics
    CheckDict {
        /// System dictionary file
        dict_file: String,
        /// User dictionary file
        #[arg(long)]
        user: Option<String>,
    },
    /// List dictionary entries for a query (prefix matches by default)
    Lookup {
        /// System dictionary file
        dict_file: String,
        /// Query string
        query: String,
        /// User dictionary file
        #[arg(long)]
        user: Option<String>,
        /// Only entries whose surface is the whole query
        #[arg(long)]
        exact: bool,
    },
    /// Look up a connection cost between context ids
    ConnCost {
        /// System dictionary file
        dict_file: String,
        /// Right id of the preceding morpheme
        right: u16,
        /// Left id of the following morpheme
        left: u16,
    },
    /// Export default settings as TOML
    SettingsExport,
    /// Validate a custom settings TOML file
    SettingsValidate {
        /// Path to the TOML file
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    if let Some(file) = &cli.settings {
        config_ops::load_settings(file);
    }

    match cli.command {
        Command::Tokenize {
            dict_file,
            user,
            text,
            granularity,
            no_normalize,
            json,
        } => analyze_ops::tokenize_cmd(
            &dict_file,
            user.as_deref(),
            text.as_deref(),
            granularity,
            no_normalize,
            json,
        ),
        Command::Graphviz {
            dict_file,
            text,
            user,
        } => analyze_ops::graphviz_cmd(&dict_file, user.as_deref(), &text),
        Command::CheckDict { dict_file, user } => {
            dict_ops::check_dict_cmd(&dict_file, user.as_deref())
        }
        Command::Lookup {
            dict_file,
            query,
            user,
            exact,
        } => dict_ops::lookup_cmd(&dict_file, user.as_deref(), &query, exact),
        Command::ConnCost {
            dict_file,
            right,
            left,
        } => dict_ops::conn_cost_cmd(&dict_file, right, left),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
    }
}
