//! Manifest view consumed by the rendition catalog
//!
//! Only the rendition descriptions matter here. A master manifest nests them
//! under `playlists`; a flat manifest is the description list itself. Both
//! deserialize from the JSON shape hosts already produce:
//!
//! ```json
//! {"playlists": [{"attributes": {"NAME": "720p", "BANDWIDTH": 2000000}}]}
//! ```

#[cfg(feature = "hls")]
mod hls;

#[cfg(feature = "hls")]
pub use hls::{parse_hls, HlsSource};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Attribute key carrying the rendition's display name
pub const ATTR_NAME: &str = "NAME";
/// Attribute key carrying the rendition's bandwidth in bits per second
pub const ATTR_BANDWIDTH: &str = "BANDWIDTH";

/// One rendition description from the manifest
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlaylistDescription {
    /// Raw attributes; values are kept loose so bad entries can be skipped
    #[serde(default)]
    pub attributes: BTreeMap<String, Value>,
}

impl PlaylistDescription {
    /// Description with a name and bandwidth
    pub fn new(name: impl Into<String>, bandwidth: u64) -> Self {
        let mut attributes = BTreeMap::new();
        attributes.insert(ATTR_NAME.to_string(), Value::String(name.into()));
        attributes.insert(ATTR_BANDWIDTH.to_string(), Value::from(bandwidth));
        Self { attributes }
    }

    /// `NAME` attribute, if present and a string
    pub fn name(&self) -> Option<&str> {
        self.attributes.get(ATTR_NAME).and_then(Value::as_str)
    }

    /// `BANDWIDTH` attribute, if present and a non-negative integer
    pub fn bandwidth(&self) -> Option<u64> {
        self.attributes.get(ATTR_BANDWIDTH).and_then(Value::as_u64)
    }
}

/// Rendition descriptions, either nested under a master manifest or flat
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Manifest {
    Master { playlists: Vec<PlaylistDescription> },
    Flat(Vec<PlaylistDescription>),
}

impl Manifest {
    /// The rendition descriptions, traversing into a master manifest
    pub fn descriptions(&self) -> &[PlaylistDescription] {
        match self {
            Manifest::Master { playlists } => playlists,
            Manifest::Flat(descriptions) => descriptions,
        }
    }

    pub fn is_master(&self) -> bool {
        matches!(self, Manifest::Master { .. })
    }

    /// Parse the host JSON shape
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Default for Manifest {
    fn default() -> Self {
        Manifest::Flat(Vec::new())
    }
}
