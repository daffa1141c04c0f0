//! Streaming engine seam
//!
//! The engine owns its manifest and rendition list. The quality selector gets
//! positional read access and a single write: the `enabled` flag. Nothing
//! here can grow, shrink or reorder the list.

use crate::{manifest::Manifest, types::Rendition};

/// What the quality selector needs from a streaming engine
pub trait StreamingEngine {
    /// Manifest rendition descriptions, if a manifest is loaded
    fn manifest(&self) -> Option<&Manifest>;

    /// Renditions currently known to the engine, in engine order
    fn renditions(&self) -> &[Rendition];

    /// Mark a rendition eligible or ineligible for adaptation.
    /// Out-of-range indices are ignored.
    fn set_enabled(&mut self, index: usize, enabled: bool);
}

/// Engine state held in memory, for headless hosts and tests
#[derive(Debug, Clone, Default)]
pub struct InMemoryEngine {
    manifest: Option<Manifest>,
    renditions: Vec<Rendition>,
}

impl InMemoryEngine {
    pub fn new(manifest: Option<Manifest>, renditions: Vec<Rendition>) -> Self {
        Self {
            manifest,
            renditions,
        }
    }

    /// Engine with renditions but no manifest
    pub fn with_renditions(renditions: Vec<Rendition>) -> Self {
        Self::new(None, renditions)
    }

    /// Simulate the engine discovering another rendition
    pub fn push_rendition(&mut self, rendition: Rendition) {
        self.renditions.push(rendition);
    }

    /// Replace the manifest, as on a source change
    pub fn set_manifest(&mut self, manifest: Option<Manifest>) {
        self.manifest = manifest;
    }

    /// Replace the rendition list with a fresh engine report
    pub fn set_renditions(&mut self, renditions: Vec<Rendition>) {
        self.renditions = renditions;
    }

    /// `enabled` flags in engine order
    pub fn enabled_flags(&self) -> Vec<bool> {
        self.renditions.iter().map(|r| r.enabled).collect()
    }
}

#[cfg(feature = "hls")]
impl From<crate::manifest::HlsSource> for InMemoryEngine {
    fn from(source: crate::manifest::HlsSource) -> Self {
        Self::new(Some(source.manifest), source.renditions)
    }
}

impl StreamingEngine for InMemoryEngine {
    fn manifest(&self) -> Option<&Manifest> {
        self.manifest.as_ref()
    }

    fn renditions(&self) -> &[Rendition] {
        &self.renditions
    }

    fn set_enabled(&mut self, index: usize, enabled: bool) {
        if let Some(rendition) = self.renditions.get_mut(index) {
            rendition.enabled = enabled;
        }
    }
}
