use crate::consts::DEVICE_TYPE_TRIGGER;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// Trigger properties whose value the SDK computes at runtime instead of
/// waiting for the host app to supply it.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    EnumString,
    Display,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
pub enum DynamicTrigger {
    #[strum(serialize = "os_session_duration")]
    #[serde(rename = "os_session_duration")]
    SessionDuration,
    #[strum(serialize = "os_time")]
    #[serde(rename = "os_time")]
    Time,
    #[strum(serialize = "os_sdk_version")]
    #[serde(rename = "os_sdk_version")]
    SdkVersion,
}

impl DynamicTrigger {
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

/// How a trigger property gets its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TriggerKind {
    /// Computed by the SDK.
    Dynamic(DynamicTrigger),
    /// `os_device_type`, matched against `tablet` / `phone`.
    DeviceType,
    /// Supplied by the host app.
    Static,
}

impl TriggerKind {
    pub fn is_dynamic(self) -> bool {
        matches!(self, Self::Dynamic(_))
    }
}

pub fn classify_trigger(property: &str) -> TriggerKind {
    if let Ok(dynamic) = DynamicTrigger::from_str(property) {
        return TriggerKind::Dynamic(dynamic);
    }
    if property == DEVICE_TYPE_TRIGGER {
        return TriggerKind::DeviceType;
    }
    TriggerKind::Static
}

/// True for `os_session_duration`, `os_time` and `os_sdk_version` only.
pub fn is_dynamic_trigger(property: &str) -> bool {
    classify_trigger(property).is_dynamic()
}
