use crate::reports;
use clap::{ArgMatches, Args};
use inapp_defines::{DefinesResult, LayoutConstants};
use tracing::warn;

/// Layout flags plus an optional JSON file, shared by every command that
/// needs the effective layout.
#[derive(Args, Debug, Clone)]
pub struct LayoutSource {
    #[command(flatten)]
    pub layout: LayoutConstants,

    /// JSON file overriding the built-in layout constants
    #[arg(long)]
    pub layout_file: Option<String>,
}

impl LayoutSource {
    /// File values first, then flags typed on the command line.
    pub fn resolve(&self, matches: &ArgMatches) -> DefinesResult<LayoutConstants> {
        let mut layout = match &self.layout_file {
            Some(path) => LayoutConstants::load_from_file(path)?,
            None => {
                warn!("No layout file given. Using built-in layout constants.");
                LayoutConstants::default()
            }
        };

        layout.merge_from_cli(&self.layout, matches);
        layout.validate()?;
        Ok(layout)
    }
}

#[derive(Args, Debug, Clone)]
pub struct LayoutArgs {
    #[command(flatten)]
    pub source: LayoutSource,

    /// Print JSON instead of a table
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: LayoutArgs, matches: &ArgMatches) -> DefinesResult<()> {
    let layout = args.source.resolve(matches)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&layout)?);
    } else {
        reports::print_layout_table(&layout);
    }
    Ok(())
}
