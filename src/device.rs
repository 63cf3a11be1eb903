use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum_macros::{Display, EnumString, IntoStaticStr};

/// Values the `os_device_type` trigger is compared against.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumString,
    Display,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum DeviceType {
    Tablet,
    Phone,
}

impl DeviceType {
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

pub fn parse_device_type(value: &str) -> Option<DeviceType> {
    DeviceType::from_str(value).ok()
}
