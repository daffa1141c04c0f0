//! Core types for Kino Quality

use crate::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

/// Video resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Smaller of width and height; 540 for 960x540, also 540 for 540x960
    pub fn short_side(&self) -> u32 {
        self.width.min(self.height)
    }
}

impl std::fmt::Display for Resolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Shape of a rendition as reported by the streaming engine.
///
/// Decided once when the rendition is ingested. A rendition with a missing or
/// zero dimension carries no usable geometry and is tracked by bandwidth only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RenditionDescriptor {
    ByResolution {
        width: u32,
        height: u32,
        bandwidth: u64,
    },
    ByBandwidthOnly {
        bandwidth: u64,
    },
}

impl RenditionDescriptor {
    /// Classify raw engine attributes
    pub fn from_parts(bandwidth: u64, width: Option<u32>, height: Option<u32>) -> Self {
        match (width, height) {
            (Some(width), Some(height)) if width > 0 && height > 0 => {
                RenditionDescriptor::ByResolution {
                    width,
                    height,
                    bandwidth,
                }
            }
            _ => RenditionDescriptor::ByBandwidthOnly { bandwidth },
        }
    }

    /// Bandwidth in bits per second
    pub fn bandwidth(&self) -> u64 {
        match *self {
            RenditionDescriptor::ByResolution { bandwidth, .. }
            | RenditionDescriptor::ByBandwidthOnly { bandwidth } => bandwidth,
        }
    }

    /// Resolution, if the engine reported geometry
    pub fn resolution(&self) -> Option<Resolution> {
        match *self {
            RenditionDescriptor::ByResolution { width, height, .. } => {
                Some(Resolution::new(width, height))
            }
            RenditionDescriptor::ByBandwidthOnly { .. } => None,
        }
    }

    /// Short-side pixel count, the canonical quality discriminator
    pub fn short_side(&self) -> Option<u64> {
        self.resolution().map(|r| u64::from(r.short_side()))
    }
}

/// A rendition in the engine's live list.
///
/// The engine owns the list; the quality selector only flips `enabled`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RenditionRecord", into = "RenditionRecord")]
pub struct Rendition {
    pub descriptor: RenditionDescriptor,
    /// Eligible for the adaptive algorithm
    pub enabled: bool,
}

impl Rendition {
    pub fn new(descriptor: RenditionDescriptor) -> Self {
        Self {
            descriptor,
            enabled: true,
        }
    }

    /// Rendition with known geometry
    pub fn with_resolution(width: u32, height: u32, bandwidth: u64) -> Self {
        Self::new(RenditionDescriptor::from_parts(
            bandwidth,
            Some(width),
            Some(height),
        ))
    }

    /// Rendition known only by its bandwidth
    pub fn with_bandwidth(bandwidth: u64) -> Self {
        Self::new(RenditionDescriptor::ByBandwidthOnly { bandwidth })
    }

    pub fn bandwidth(&self) -> u64 {
        self.descriptor.bandwidth()
    }

    pub fn short_side(&self) -> Option<u64> {
        self.descriptor.short_side()
    }
}

/// Flat wire shape used by hosts: `{bandwidth, width?, height?, enabled?}`
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RenditionRecord {
    #[serde(default)]
    bandwidth: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    height: Option<u32>,
    #[serde(default = "default_enabled")]
    enabled: bool,
}

fn default_enabled() -> bool {
    true
}

impl From<RenditionRecord> for Rendition {
    fn from(record: RenditionRecord) -> Self {
        Self {
            descriptor: RenditionDescriptor::from_parts(
                record.bandwidth,
                record.width,
                record.height,
            ),
            enabled: record.enabled,
        }
    }
}

impl From<Rendition> for RenditionRecord {
    fn from(rendition: Rendition) -> Self {
        let resolution = rendition.descriptor.resolution();
        Self {
            bandwidth: rendition.bandwidth(),
            width: resolution.map(|r| r.width),
            height: resolution.map(|r| r.height),
            enabled: rendition.enabled,
        }
    }
}

/// A quality selection: a pinned level or automatic adaptation.
///
/// A level is a short-side pixel count, or a bandwidth for renditions without
/// geometry. Serialized as `"auto"` or a bare integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Quality {
    #[default]
    Auto,
    Level(u64),
}

impl Quality {
    pub fn is_auto(&self) -> bool {
        matches!(self, Quality::Auto)
    }

    /// Numeric value, `None` for auto
    pub fn level(&self) -> Option<u64> {
        match *self {
            Quality::Auto => None,
            Quality::Level(value) => Some(value),
        }
    }

    /// Text shown on the button when it displays the current quality
    pub fn button_label(&self) -> String {
        match self {
            Quality::Auto => "auto".to_string(),
            Quality::Level(value) => format!("{}p", value),
        }
    }
}

impl std::fmt::Display for Quality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Quality::Auto => write!(f, "auto"),
            Quality::Level(value) => write!(f, "{}", value),
        }
    }
}

impl From<u64> for Quality {
    fn from(value: u64) -> Self {
        Quality::Level(value)
    }
}

impl FromStr for Quality {
    type Err = Error;

    /// Accepts `auto`, `540` and `540p`
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("auto") {
            return Ok(Quality::Auto);
        }

        trimmed
            .strip_suffix('p')
            .unwrap_or(trimmed)
            .parse::<u64>()
            .map(Quality::Level)
            .map_err(|_| Error::InvalidQuality(s.to_string()))
    }
}

impl Serialize for Quality {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Quality::Auto => serializer.serialize_str("auto"),
            Quality::Level(value) => serializer.serialize_u64(*value),
        }
    }
}

impl<'de> Deserialize<'de> for Quality {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Level(u64),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Level(value) => Ok(Quality::Level(value)),
            Raw::Text(text) => text.parse().map_err(serde::de::Error::custom),
        }
    }
}

/// Label and effective value derived for one rendition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityMeta {
    /// Display label; `None` when a bandwidth has no catalog name
    pub label: Option<String>,
    pub value: Quality,
}
