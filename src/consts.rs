// ===== inapp-defines/src/consts.rs =====
// Wire strings and layout literals shared with the rendering and trigger
// components. Values must stay bit-for-bit stable: the server-driven message
// format and previously persisted trigger state depend on them.

// ============================================================================
// Layout
// ============================================================================

/// Margin around a message, as a fraction of the screen dimension.
pub const MESSAGE_MARGIN: f32 = 0.025;

/// Width / height of top and bottom banners.
pub const BANNER_ASPECT_RATIO: f32 = 2.3;

/// Width / height of the centered modal.
pub const CENTERED_MODAL_ASPECT_RATIO: f32 = 0.81;

/// Upper bound for the dismissal animation, in seconds.
pub const MAX_DISMISSAL_ANIMATION_DURATION: f32 = 0.3;

// ============================================================================
// Persistence
// ============================================================================

/// Key under which trigger values are persisted.
pub const TRIGGERS_STORAGE_KEY: &str = "OS_IN_APP_MESSAGING_TRIGGERS";

// ============================================================================
// Trigger properties
// ============================================================================

pub const SESSION_DURATION_TRIGGER: &str = "os_session_duration";
pub const TIME_TRIGGER: &str = "os_time";
pub const SDK_VERSION_TRIGGER: &str = "os_sdk_version";
pub const DEVICE_TYPE_TRIGGER: &str = "os_device_type";

/// Trigger properties whose value is computed by the SDK itself.
pub const DYNAMIC_TRIGGERS: [&str; 3] = [SESSION_DURATION_TRIGGER, TIME_TRIGGER, SDK_VERSION_TRIGGER];

// ============================================================================
// Device types
// ============================================================================

pub const DEVICE_TYPE_TABLET: &str = "tablet";
pub const DEVICE_TYPE_PHONE: &str = "phone";

// ============================================================================
// Display types
// ============================================================================

pub const TOP_BANNER: &str = "top_banner";
pub const CENTERED_MODAL: &str = "centered_modal";
pub const FULL_SCREEN: &str = "full_screen";
pub const BOTTOM_BANNER: &str = "bottom_banner";

/// Canonical display-type order. A string's index here is its ordinal.
pub const DISPLAY_TYPES: [&str; 4] = [TOP_BANNER, CENTERED_MODAL, FULL_SCREEN, BOTTOM_BANNER];
