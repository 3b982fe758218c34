use clap::{Parser, Subcommand};

use clafrica_cli::commands::{convert_ops, map_ops};
use clafrica_cli::map_source::resolve_table;
use clafrica_cli::trace_init;

#[derive(Parser)]
#[command(name = "claftool", about = "Clafrica transliteration diagnostics")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Fetch a replacement map from a JSON endpoint and save it as TOML
    Fetch {
        /// Endpoint returning a flat JSON object of code → replacement
        url: String,
        /// Output TOML map file
        output: String,
    },

    /// Show statistics for a replacement map
    Inspect {
        /// Path to a TOML map file (embedded default when omitted)
        #[arg(long)]
        map: Option<String>,
        /// List every mapping with its code points
        #[arg(long)]
        list: bool,
    },

    /// Transliterate text with commit semantics (every token final)
    Convert {
        /// Lines to transliterate
        #[arg(required = true)]
        text: Vec<String>,
        /// Path to a TOML map file (embedded default when omitted)
        #[arg(long)]
        map: Option<String>,
        /// Fetch the map from a JSON endpoint instead; a failed fetch
        /// degrades to an inert table, the way the editing UI stays usable
        #[arg(long, conflicts_with = "map")]
        map_url: Option<String>,
    },

    /// Replay text as a live typing session, one keystroke at a time
    Type {
        /// Keystrokes to replay (spaces commit)
        text: String,
        /// Path to a TOML map file (embedded default when omitted)
        #[arg(long)]
        map: Option<String>,
    },
}

fn main() {
    trace_init::init_tracing();

    let cli = Cli::parse();
    match cli.command {
        Command::Fetch { url, output } => map_ops::fetch(&url, &output),
        Command::Inspect { map, list } => map_ops::inspect(map.as_deref(), list),
        Command::Convert { text, map, map_url } => {
            let table = resolve_table(map.as_deref(), map_url.as_deref());
            convert_ops::convert(&table, &text);
        }
        Command::Type { text, map } => {
            let table = resolve_table(map.as_deref(), None);
            convert_ops::replay(table, &text);
        }
    }
}
