use crate::consts::DISPLAY_TYPES;
use crate::error::{DefinesError, DefinesResult};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{EnumCount, IntoEnumIterator};
use strum_macros::{Display, EnumIter, EnumString, FromRepr, IntoStaticStr};
use tracing::debug;

/// Where an in-app message is anchored on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
#[repr(usize)]
pub enum DisplayPosition {
    Bottom = 0,
    Top = 1,
    Centered = 2,
}

impl DisplayPosition {
    pub fn ordinal(self) -> usize {
        self as usize
    }
}

/// Visual template of an in-app message, as sent by the server.
///
/// Variant order is the wire ordinal: `top_banner` is 0, `bottom_banner` is 3.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    EnumString,
    EnumCount,
    Display,
    IntoStaticStr,
    FromRepr,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
#[repr(usize)]
pub enum DisplayType {
    TopBanner,
    CenteredModal,
    FullScreen,
    BottomBanner,
}

// The string table and the enum must grow together.
const _: () = assert!(DISPLAY_TYPES.len() == DisplayType::COUNT);

impl DisplayType {
    /// Screen anchor for this template.
    pub fn position(self) -> DisplayPosition {
        match self {
            Self::TopBanner => DisplayPosition::Top,
            Self::CenteredModal | Self::FullScreen => DisplayPosition::Centered,
            Self::BottomBanner => DisplayPosition::Bottom,
        }
    }

    pub fn ordinal(self) -> usize {
        self as usize
    }

    pub fn from_ordinal(ordinal: usize) -> DefinesResult<Self> {
        Self::from_repr(ordinal).ok_or_else(|| {
            debug!("Rejected display type ordinal {}", ordinal);
            DefinesError::InvalidArgument(format!(
                "display type ordinal {} is outside 0..{}",
                ordinal,
                Self::COUNT
            ))
        })
    }

    pub fn as_str(self) -> &'static str {
        self.into()
    }

    pub fn is_banner(self) -> bool {
        matches!(self, Self::TopBanner | Self::BottomBanner)
    }

    /// Lenient parse for callers that treat an unknown type as "skip".
    pub fn parse(value: &str) -> Option<Self> {
        Self::from_str(value).ok()
    }
}

/// Display position for a display-type ordinal (0 = `top_banner` .. 3 = `bottom_banner`).
pub fn display_position_for_ordinal(ordinal: usize) -> DefinesResult<DisplayPosition> {
    DisplayType::from_ordinal(ordinal).map(DisplayType::position)
}

/// True only for the four canonical display-type strings. Case-sensitive.
pub fn is_valid_display_type(value: &str) -> bool {
    DisplayType::parse(value).is_some()
}

/// Ordinal of a canonical display-type string.
pub fn display_type_ordinal(value: &str) -> DefinesResult<usize> {
    DisplayType::from_str(value)
        .map(DisplayType::ordinal)
        .map_err(|_| {
            debug!("Rejected display type string {:?}", value);
            DefinesError::NotFound(format!("'{}' is not a display type", value))
        })
}

/// Canonical display-type string for an ordinal.
pub fn display_type_for_ordinal(ordinal: usize) -> DefinesResult<&'static str> {
    DisplayType::from_ordinal(ordinal).map(DisplayType::as_str)
}

/// Every display type paired with its position, in ordinal order.
pub fn position_table() -> Vec<(DisplayType, DisplayPosition)> {
    DisplayType::iter().map(|t| (t, t.position())).collect()
}
