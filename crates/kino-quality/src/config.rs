//! Quality selector configuration
//!
//! Hosts pass options as JSON with camelCase keys:
//!
//! ```json
//! {"displayCurrentQuality": true, "vjsIconClass": "vjs-icon-hd", "placementIndex": 3}
//! ```
//!
//! Unknown keys are ignored. `{}` and `null` both give the defaults.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Icon class used when the button does not show the current quality
pub const DEFAULT_ICON_CLASS: &str = "vjs-icon-hd";

/// Quality selector options
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QualitySelectorConfig {
    /// Show the live quality as button text instead of an icon
    pub display_current_quality: bool,
    /// Icon class for the button when not showing the live quality
    pub vjs_icon_class: Option<String>,
    /// Control-bar insertion index; defaults to second from the end.
    /// An explicit `0` places the button first rather than falling back.
    pub placement_index: Option<usize>,
}

impl QualitySelectorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse host options
    pub fn from_json(json: &str) -> Result<Self> {
        match serde_json::from_str::<Value>(json)? {
            Value::Null => Ok(Self::default()),
            value @ Value::Object(_) => Ok(serde_json::from_value(value)?),
            other => Err(Error::InvalidConfig(format!(
                "expected an options object, got {}",
                other
            ))),
        }
    }

    /// Show the live quality as button text
    pub fn with_display_current_quality(mut self, display: bool) -> Self {
        self.display_current_quality = display;
        self
    }

    pub fn with_icon_class(mut self, class: impl Into<String>) -> Self {
        self.vjs_icon_class = Some(class.into());
        self
    }

    pub fn with_placement_index(mut self, index: usize) -> Self {
        self.placement_index = Some(index);
        self
    }

    /// Configured icon class, or the default when unset or blank
    pub fn icon_class(&self) -> &str {
        self.vjs_icon_class
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .unwrap_or(DEFAULT_ICON_CLASS)
    }

    /// Insertion index for a control bar with `children` controls
    pub fn placement_for(&self, children: usize) -> usize {
        self.placement_index
            .unwrap_or_else(|| children.saturating_sub(2))
    }
}
