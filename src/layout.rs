use crate::consts::{
    BANNER_ASPECT_RATIO, CENTERED_MODAL_ASPECT_RATIO, MAX_DISMISSAL_ANIMATION_DURATION,
    MESSAGE_MARGIN,
};
use crate::display::DisplayType;
use crate::error::{DefinesError, DefinesResult};
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;
use tracing::info;

/// Numeric layout values handed to the renderer.
///
/// `Default` is the built-in table. A JSON file or command-line flags can
/// override single fields; anything left out keeps its built-in value.
#[derive(Args, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConstants {
    /// Margin around a message, fraction of the screen dimension
    #[arg(long, default_value_t = MESSAGE_MARGIN)]
    pub message_margin: f32,

    /// Width / height of top and bottom banners
    #[arg(long, default_value_t = BANNER_ASPECT_RATIO)]
    pub banner_aspect_ratio: f32,

    /// Width / height of the centered modal
    #[arg(long, default_value_t = CENTERED_MODAL_ASPECT_RATIO)]
    pub centered_modal_aspect_ratio: f32,

    /// Dismissal animation upper bound, seconds
    #[arg(long, default_value_t = MAX_DISMISSAL_ANIMATION_DURATION)]
    pub max_dismissal_animation_duration: f32,
}

impl Default for LayoutConstants {
    fn default() -> Self {
        Self {
            message_margin: MESSAGE_MARGIN,
            banner_aspect_ratio: BANNER_ASPECT_RATIO,
            centered_modal_aspect_ratio: CENTERED_MODAL_ASPECT_RATIO,
            max_dismissal_animation_duration: MAX_DISMISSAL_ANIMATION_DURATION,
        }
    }
}

impl LayoutConstants {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> DefinesResult<Self> {
        let content = fs::read_to_string(&path)?;
        let layout: Self = serde_json::from_str(&content)?;
        layout.validate()?;

        info!("Loaded layout constants from {:?}", path.as_ref());
        Ok(layout)
    }

    pub fn validate(&self) -> DefinesResult<()> {
        // Two margins must leave room for the message.
        if !(0.0..0.5).contains(&self.message_margin) {
            return Err(DefinesError::Config(format!(
                "message_margin must be in [0, 0.5), got {}",
                self.message_margin
            )));
        }

        for (name, ratio) in [
            ("banner_aspect_ratio", self.banner_aspect_ratio),
            ("centered_modal_aspect_ratio", self.centered_modal_aspect_ratio),
        ] {
            if !ratio.is_finite() || ratio <= 0.0 {
                return Err(DefinesError::Config(format!(
                    "{} must be a positive number, got {}",
                    name, ratio
                )));
            }
        }

        let duration = self.max_dismissal_animation_duration;
        if !duration.is_finite() || duration < 0.0 {
            return Err(DefinesError::Config(format!(
                "max_dismissal_animation_duration must be >= 0, got {}",
                duration
            )));
        }

        Ok(())
    }

    /// Copies over only the fields the user typed on the command line, so
    /// clap defaults never clobber values loaded from a file.
    pub fn merge_from_cli(&mut self, cli_layout: &LayoutConstants, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($field:ident) => {
                if matches.value_source(stringify!($field)) == Some(ValueSource::CommandLine) {
                    self.$field = cli_layout.$field;
                }
            };
        }

        update_if_present!(message_margin);
        update_if_present!(banner_aspect_ratio);
        update_if_present!(centered_modal_aspect_ratio);
        update_if_present!(max_dismissal_animation_duration);
    }

    /// Fixed aspect ratio for a display type. Full-screen messages fill the
    /// available area and have none.
    pub fn aspect_ratio_for(&self, display_type: DisplayType) -> Option<f32> {
        match display_type {
            DisplayType::TopBanner | DisplayType::BottomBanner => Some(self.banner_aspect_ratio),
            DisplayType::CenteredModal => Some(self.centered_modal_aspect_ratio),
            DisplayType::FullScreen => None,
        }
    }

    /// Zero when the stored value is negative or not finite.
    pub fn max_dismissal_animation(&self) -> Duration {
        Duration::try_from_secs_f32(self.max_dismissal_animation_duration).unwrap_or_default()
    }
}
