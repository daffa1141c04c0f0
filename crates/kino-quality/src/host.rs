//! Host player seam
//!
//! Lifecycle, control-bar layout, localization and the event bus belong to
//! the host player. [`HeadlessPlayer`] implements the seam in memory for the
//! CLI, the WASM bindings and tests.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Streaming techs whose rendition lists the selector knows how to drive
pub const SUPPORTED_TECHS: &[&str] = &["vhs", "hls"];

/// Class added to the player element once the selector is active
pub const PLAYER_CLASS: &str = "vjs-hls-quality-selector";

/// Player events the selector reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerEvent {
    /// Player finished initializing
    Ready,
    /// The engine reported a new rendition
    QualityLevelAdded,
}

impl PlayerEvent {
    /// Event name on the host's bus
    pub fn name(&self) -> &'static str {
        match self {
            PlayerEvent::Ready => "ready",
            PlayerEvent::QualityLevelAdded => "addqualitylevel",
        }
    }
}

impl std::fmt::Display for PlayerEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// What the quality selector needs from the host player
pub trait PlayerHost {
    /// Whether the host exposes a rendition-level listing
    fn supports_quality_levels(&self) -> bool;

    /// Name of the active streaming tech, if any
    fn active_tech(&self) -> Option<&str>;

    /// Translate UI text; identity by default
    fn localize(&self, text: &str) -> String {
        text.to_string()
    }

    /// Number of controls currently in the control bar
    fn control_bar_len(&self) -> usize;

    /// Insert a named control at `index` (clamped to the end by the host)
    fn insert_control(&mut self, name: &str, index: usize);

    /// Add a class to the player element
    fn add_class(&mut self, class: &str);

    /// Start routing `event` to the selector
    fn subscribe(&mut self, event: PlayerEvent);
}

/// Whether the host's active tech is one the selector can drive
pub fn has_supported_tech(host: &dyn PlayerHost) -> bool {
    host.active_tech()
        .map(|tech| SUPPORTED_TECHS.contains(&tech))
        .unwrap_or(false)
}

/// In-memory host player
#[derive(Debug, Clone, Default, Serialize)]
pub struct HeadlessPlayer {
    quality_levels: bool,
    tech: Option<String>,
    control_bar: Vec<String>,
    classes: Vec<String>,
    subscriptions: Vec<PlayerEvent>,
    #[serde(skip)]
    translations: HashMap<String, String>,
}

impl HeadlessPlayer {
    /// Default control-bar layout
    pub const DEFAULT_CONTROLS: &'static [&'static str] = &[
        "playToggle",
        "volumePanel",
        "currentTimeDisplay",
        "progressControl",
        "remainingTimeDisplay",
        "playbackRateMenuButton",
        "subsCapsButton",
        "fullscreenToggle",
    ];

    pub fn new(tech: Option<&str>, quality_levels: bool) -> Self {
        Self {
            quality_levels,
            tech: tech.map(str::to_string),
            control_bar: Self::DEFAULT_CONTROLS.iter().map(|c| c.to_string()).collect(),
            classes: Vec::new(),
            subscriptions: Vec::new(),
            translations: HashMap::new(),
        }
    }

    /// A player running an HLS tech with rendition listing
    pub fn hls() -> Self {
        Self::new(Some("vhs"), true)
    }

    pub fn with_translation(
        mut self,
        text: impl Into<String>,
        translated: impl Into<String>,
    ) -> Self {
        self.translations.insert(text.into(), translated.into());
        self
    }

    pub fn control_bar(&self) -> &[String] {
        &self.control_bar
    }

    /// Position of a named control in the bar
    pub fn control_index(&self, name: &str) -> Option<usize> {
        self.control_bar.iter().position(|c| c == name)
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn is_subscribed(&self, event: PlayerEvent) -> bool {
        self.subscriptions.contains(&event)
    }
}

impl PlayerHost for HeadlessPlayer {
    fn supports_quality_levels(&self) -> bool {
        self.quality_levels
    }

    fn active_tech(&self) -> Option<&str> {
        self.tech.as_deref()
    }

    fn localize(&self, text: &str) -> String {
        self.translations
            .get(text)
            .cloned()
            .unwrap_or_else(|| text.to_string())
    }

    fn control_bar_len(&self) -> usize {
        self.control_bar.len()
    }

    fn insert_control(&mut self, name: &str, index: usize) {
        let index = index.min(self.control_bar.len());
        self.control_bar.insert(index, name.to_string());
    }

    fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    fn subscribe(&mut self, event: PlayerEvent) {
        if !self.is_subscribed(event) {
            self.subscriptions.push(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_tech() {
        assert!(has_supported_tech(&HeadlessPlayer::hls()));
        assert!(has_supported_tech(&HeadlessPlayer::new(Some("hls"), true)));
        assert!(!has_supported_tech(&HeadlessPlayer::new(Some("HLS"), true)));
        assert!(!has_supported_tech(&HeadlessPlayer::new(Some("Vhs"), true)));
        assert!(!has_supported_tech(&HeadlessPlayer::new(Some("html5"), true)));
        assert!(!has_supported_tech(&HeadlessPlayer::new(None, true)));
    }

    #[test]
    fn test_insert_clamps() {
        let mut player = HeadlessPlayer::hls();
        let len = player.control_bar_len();
        player.insert_control("qualitySelector", 99);
        assert_eq!(player.control_index("qualitySelector"), Some(len));
    }

    #[test]
    fn test_localize() {
        let player = HeadlessPlayer::hls().with_translation("Auto", "Automatique");
        assert_eq!(player.localize("Auto"), "Automatique");
        assert_eq!(player.localize("Quality"), "Quality");
    }

    #[test]
    fn test_event_names() {
        assert_eq!(PlayerEvent::QualityLevelAdded.name(), "addqualitylevel");
        assert_eq!(PlayerEvent::Ready.to_string(), "ready");
    }
}
