use clap::ArgMatches;
use inapp_defines::{DefinesError, DefinesResult};

pub mod display_type;
pub mod layout;
pub mod positions;
pub mod trigger;

/// Matches of the subcommand that clap just dispatched. A miss means the
/// name here and the derived subcommand name have drifted apart.
pub fn subcommand_matches<'a>(matches: &'a ArgMatches, name: &str) -> DefinesResult<&'a ArgMatches> {
    matches.subcommand_matches(name).ok_or_else(|| {
        DefinesError::InvalidArgument(format!("no matches recorded for subcommand '{}'", name))
    })
}
