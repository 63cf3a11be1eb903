use crate::reports;
use clap::Args;
use inapp_defines::classify_trigger;

#[derive(Args, Debug, Clone)]
pub struct TriggerArgs {
    /// Trigger property name
    pub property: String,

    /// Exit with status 1 unless the property is computed by the SDK
    #[arg(long, default_value_t = false)]
    pub dynamic_only: bool,
}

/// Returns false when `--dynamic-only` was given and the property is not dynamic.
pub fn run(args: TriggerArgs) -> bool {
    let kind = classify_trigger(&args.property);
    println!("{}\t{}", args.property, reports::describe_trigger_kind(kind));

    !args.dynamic_only || kind.is_dynamic()
}
