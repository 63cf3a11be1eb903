// ===== inapp-defines/src/main.rs =====
use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use std::process;
use tracing::Level;

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about = "Inspect in-app message display and trigger tables", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Display types with their ordinal, position and aspect ratio
    Positions(cmd::positions::PositionsArgs),
    /// Resolve a display type from its wire string or ordinal
    DisplayType(cmd::display_type::DisplayTypeArgs),
    /// Classify a trigger property
    Trigger(cmd::trigger::TriggerArgs),
    /// Effective layout constants
    Layout(cmd::layout::LayoutArgs),
}

fn init_tracing(debug: bool) {
    let level = if debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    // Raw matches are kept so layout flags typed by the user can be told
    // apart from clap defaults.
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    init_tracing(cli.debug);

    let result = match cli.command {
        Commands::Positions(args) => cmd::subcommand_matches(&matches, "positions")
            .and_then(|sub_matches| cmd::positions::run(args, sub_matches)),
        Commands::DisplayType(args) => cmd::display_type::run(args),
        Commands::Trigger(args) => {
            if !cmd::trigger::run(args) {
                process::exit(1);
            }
            Ok(())
        }
        Commands::Layout(args) => cmd::subcommand_matches(&matches, "layout")
            .and_then(|sub_matches| cmd::layout::run(args, sub_matches)),
    };

    if let Err(e) = result {
        eprintln!("❌ {}", e);
        process::exit(1);
    }
}
