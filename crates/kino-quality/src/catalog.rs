//! Rendition catalog: bandwidth to display name
//!
//! The name map is read from the manifest on first lookup and then kept for
//! the rest of the session. A manifest that changes afterwards is not picked
//! up until [`RenditionCatalog::reset`] is called.

use crate::manifest::Manifest;
use std::cell::OnceCell;
use std::collections::HashMap;
use tracing::debug;

/// Lazily built bandwidth to name lookup
#[derive(Debug, Default)]
pub struct RenditionCatalog {
    names: OnceCell<HashMap<u64, String>>,
}

impl RenditionCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the name for a bandwidth, building the map from `manifest`
    /// on the first call. Later calls ignore `manifest`.
    pub fn resolve_bandwidth_name(
        &self,
        bandwidth: u64,
        manifest: Option<&Manifest>,
    ) -> Option<&str> {
        self.names
            .get_or_init(|| build_name_map(manifest))
            .get(&bandwidth)
            .map(String::as_str)
    }

    /// Whether the map has been built
    pub fn is_built(&self) -> bool {
        self.names.get().is_some()
    }

    /// Number of named bandwidths, zero until built
    pub fn len(&self) -> usize {
        self.names.get().map_or(0, HashMap::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop the cached map so the next lookup reads the manifest again
    pub fn reset(&mut self) {
        self.names = OnceCell::new();
    }
}

fn build_name_map(manifest: Option<&Manifest>) -> HashMap<u64, String> {
    let mut names = HashMap::new();
    let Some(manifest) = manifest else {
        debug!("No manifest loaded, bandwidth name map is empty");
        return names;
    };

    for (index, description) in manifest.descriptions().iter().enumerate() {
        match (description.bandwidth(), description.name()) {
            (Some(bandwidth), Some(name)) => {
                names.entry(bandwidth).or_insert_with(|| name.to_string());
            }
            _ => debug!(index, "Skipping manifest entry without NAME/BANDWIDTH"),
        }
    }

    debug!(
        names = names.len(),
        master = manifest.is_master(),
        "Bandwidth name map built"
    );
    names
}
