use crate::cmd::layout::LayoutSource;
use crate::reports;
use clap::{ArgMatches, Args};
use inapp_defines::DefinesResult;

#[derive(Args, Debug, Clone)]
pub struct PositionsArgs {
    #[command(flatten)]
    pub source: LayoutSource,
}

pub fn run(args: PositionsArgs, matches: &ArgMatches) -> DefinesResult<()> {
    let layout = args.source.resolve(matches)?;

    println!("\n=== DISPLAY POSITIONS ===");
    reports::print_position_table(&layout);
    Ok(())
}
