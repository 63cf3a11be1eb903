use inapp_defines::consts::DISPLAY_TYPES;
use inapp_defines::{
    display_position_for_ordinal, display_type_for_ordinal, display_type_ordinal,
    is_valid_display_type, position_table, DefinesError, DisplayPosition, DisplayType,
};
use proptest::prelude::*;
use rstest::rstest;
use std::str::FromStr;

// --- POSITION TABLE ---

#[rstest]
#[case(0, DisplayPosition::Top)]
#[case(1, DisplayPosition::Centered)]
#[case(2, DisplayPosition::Centered)]
#[case(3, DisplayPosition::Bottom)]
fn test_position_for_ordinal(#[case] ordinal: usize, #[case] expected: DisplayPosition) {
    assert_eq!(display_position_for_ordinal(ordinal).unwrap(), expected);
}

#[rstest]
#[case(4)]
#[case(5)]
#[case(usize::MAX)]
fn test_position_for_out_of_range_ordinal(#[case] ordinal: usize) {
    match display_position_for_ordinal(ordinal) {
        Err(DefinesError::InvalidArgument(msg)) => assert!(msg.contains(&ordinal.to_string())),
        other => panic!("Expected InvalidArgument, got {:?}", other),
    }
}

#[rstest]
#[case(DisplayPosition::Bottom, 0)]
#[case(DisplayPosition::Top, 1)]
#[case(DisplayPosition::Centered, 2)]
fn test_position_ordinals(#[case] position: DisplayPosition, #[case] expected: usize) {
    assert_eq!(position.ordinal(), expected);
}

#[test]
fn test_position_table_covers_every_type() {
    let table = position_table();
    assert_eq!(table.len(), DISPLAY_TYPES.len());
    assert_eq!(
        table,
        vec![
            (DisplayType::TopBanner, DisplayPosition::Top),
            (DisplayType::CenteredModal, DisplayPosition::Centered),
            (DisplayType::FullScreen, DisplayPosition::Centered),
            (DisplayType::BottomBanner, DisplayPosition::Bottom),
        ]
    );
}

// --- VALIDATOR ---

#[rstest]
#[case("top_banner")]
#[case("centered_modal")]
#[case("full_screen")]
#[case("bottom_banner")]
fn test_canonical_strings_are_valid(#[case] value: &str) {
    assert!(is_valid_display_type(value));
}

#[rstest]
#[case("")]
#[case("TOP_BANNER")]
#[case("Top_Banner")]
#[case(" top_banner")]
#[case("top_banner ")]
#[case("topbanner")]
#[case("banner")]
#[case("modal")]
#[case("tablet")]
#[case("os_time")]
fn test_other_strings_are_invalid(#[case] value: &str) {
    assert!(!is_valid_display_type(value));
}

// --- CODEC ---

#[rstest]
#[case("top_banner", 0)]
#[case("centered_modal", 1)]
#[case("full_screen", 2)]
#[case("bottom_banner", 3)]
fn test_string_to_ordinal(#[case] value: &str, #[case] expected: usize) {
    assert_eq!(display_type_ordinal(value).unwrap(), expected);
}

#[test]
fn test_canonical_strings_round_trip() {
    for value in DISPLAY_TYPES {
        let ordinal = display_type_ordinal(value).unwrap();
        assert_eq!(display_type_for_ordinal(ordinal).unwrap(), value);
    }
}

#[test]
fn test_unknown_string_is_not_found() {
    let err = display_type_ordinal("side_panel").unwrap_err();
    assert!(matches!(err, DefinesError::NotFound(_)));
    assert!(err.to_string().contains("side_panel"));
}

#[test]
fn test_ordinal_to_string_out_of_range() {
    assert!(matches!(
        display_type_for_ordinal(DISPLAY_TYPES.len()),
        Err(DefinesError::InvalidArgument(_))
    ));
}

#[test]
fn test_typed_parse_and_display() {
    let t = DisplayType::from_str("full_screen").unwrap();
    assert_eq!(t, DisplayType::FullScreen);
    assert_eq!(t.to_string(), "full_screen");
    assert_eq!(t.as_str(), "full_screen");
    assert_eq!(DisplayType::parse("FULL_SCREEN"), None);
}

#[test]
fn test_banner_types() {
    assert!(DisplayType::TopBanner.is_banner());
    assert!(DisplayType::BottomBanner.is_banner());
    assert!(!DisplayType::CenteredModal.is_banner());
    assert!(!DisplayType::FullScreen.is_banner());
}

#[test]
fn test_display_type_from_message_json() {
    #[derive(serde::Deserialize)]
    struct Message {
        display_type: DisplayType,
    }

    let msg: Message = serde_json::from_str(r#"{ "display_type": "bottom_banner" }"#).unwrap();
    assert_eq!(msg.display_type.position(), DisplayPosition::Bottom);

    let bad = serde_json::from_str::<Message>(r#"{ "display_type": "sidebar" }"#);
    assert!(bad.is_err());
}

// --- PROPERTIES ---

proptest! {
    #[test]
    fn test_non_canonical_strings_rejected(value in "\\PC*") {
        prop_assume!(!DISPLAY_TYPES.contains(&value.as_str()));

        prop_assert!(!is_valid_display_type(&value));
        prop_assert!(display_type_ordinal(&value).is_err());
    }

    #[test]
    fn test_ordinal_lookup_never_panics(ordinal in any::<usize>()) {
        let position = display_position_for_ordinal(ordinal);
        prop_assert_eq!(position.is_ok(), ordinal < DISPLAY_TYPES.len());
    }
}
