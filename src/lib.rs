pub mod consts;
pub mod device;
pub mod display;
pub mod error;
pub mod layout;
pub mod trigger;
// cmd and reports belong to the binary (main.rs).

pub use device::{parse_device_type, DeviceType};
pub use display::{
    display_position_for_ordinal, display_type_for_ordinal, display_type_ordinal,
    is_valid_display_type, position_table, DisplayPosition, DisplayType,
};
pub use error::{DefinesError, DefinesResult};
pub use layout::LayoutConstants;
pub use trigger::{classify_trigger, is_dynamic_trigger, DynamicTrigger, TriggerKind};
