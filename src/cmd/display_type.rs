use clap::Args;
use inapp_defines::{display_type_ordinal, DefinesError, DefinesResult, DisplayType};

#[derive(Args, Debug, Clone)]
pub struct DisplayTypeArgs {
    /// Wire string (e.g. `top_banner`) or ordinal (0-3)
    pub value: String,
}

/// Accepts either side of the codec and reports both. Ordinals are plain
/// ASCII digits; `+3` or ` 3` go through the string path and are rejected.
pub fn resolve(value: &str) -> DefinesResult<DisplayType> {
    let is_ordinal = !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit());
    if is_ordinal {
        let ordinal = value.parse::<usize>().map_err(|_| {
            DefinesError::InvalidArgument(format!("display type ordinal {} is out of range", value))
        })?;
        return DisplayType::from_ordinal(ordinal);
    }
    display_type_ordinal(value).and_then(DisplayType::from_ordinal)
}

pub fn run(args: DisplayTypeArgs) -> DefinesResult<()> {
    let display_type = resolve(&args.value)?;
    println!(
        "{}\tordinal={}\tposition={}",
        display_type,
        display_type.ordinal(),
        display_type.position()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_plain_ordinal() {
        assert_eq!(resolve("3").unwrap(), DisplayType::BottomBanner);
    }

    #[test]
    fn test_resolve_rejects_signed_or_padded_ordinal() {
        assert!(resolve("+3").is_err());
        assert!(resolve("-0").is_err());
        assert!(resolve(" 3").is_err());
    }

    #[test]
    fn test_resolve_huge_ordinal_is_error() {
        assert!(matches!(
            resolve("99999999999999999999999"),
            Err(DefinesError::InvalidArgument(_))
        ));
    }
}
