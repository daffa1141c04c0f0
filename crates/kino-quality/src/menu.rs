//! Menu synchronizer
//!
//! Rebuilds the quality menu from the engine's rendition list:
//! one entry per distinct effective value, ascending, then "Auto".
//! Every rebuild replaces the whole entry list.

use crate::{catalog::RenditionCatalog, manifest::Manifest, types::*, widget::QualityMenu};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashSet;
use tracing::{debug, instrument};

/// Untranslated text of the trailing automatic entry
pub const AUTO_TEXT: &str = "Auto";

/// One selectable menu entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuEntry {
    /// Display label; `None` renders blank
    pub label: Option<String>,
    pub value: Quality,
    #[serde(default)]
    pub selected: bool,
}

impl MenuEntry {
    pub fn new(label: Option<String>, value: Quality) -> Self {
        Self {
            label,
            value,
            selected: false,
        }
    }

    /// The trailing automatic entry
    pub fn auto(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            value: Quality::Auto,
            selected: true,
        }
    }

    pub fn label_or_blank(&self) -> &str {
        self.label.as_deref().unwrap_or("")
    }
}

impl From<QualityMeta> for MenuEntry {
    fn from(meta: QualityMeta) -> Self {
        Self::new(meta.label, meta.value)
    }
}

/// Builds menu entries from renditions and publishes them to the menu widget
#[derive(Debug, Clone, Copy, Default)]
pub struct MenuSynchronizer;

impl MenuSynchronizer {
    pub fn new() -> Self {
        Self
    }

    /// Label and effective value for one rendition
    pub fn quality_meta(
        rendition: &Rendition,
        catalog: &RenditionCatalog,
        manifest: Option<&Manifest>,
    ) -> QualityMeta {
        match rendition.descriptor {
            RenditionDescriptor::ByResolution { width, height, .. } => {
                let pixels = u64::from(width.min(height));
                QualityMeta {
                    label: Some(format!("{}p", pixels)),
                    value: Quality::Level(pixels),
                }
            }
            RenditionDescriptor::ByBandwidthOnly { bandwidth } => QualityMeta {
                label: catalog
                    .resolve_bandwidth_name(bandwidth, manifest)
                    .map(str::to_string),
                value: Quality::Level(bandwidth),
            },
        }
    }

    /// Deduplicated, sorted entries with the automatic entry last
    pub fn build_entries(
        &self,
        renditions: &[Rendition],
        catalog: &RenditionCatalog,
        manifest: Option<&Manifest>,
        auto_label: &str,
    ) -> Vec<MenuEntry> {
        let mut seen = HashSet::with_capacity(renditions.len());
        let mut entries: Vec<MenuEntry> = renditions
            .iter()
            .map(|r| Self::quality_meta(r, catalog, manifest))
            .filter(|meta| seen.insert(meta.value))
            .map(MenuEntry::from)
            .collect();

        sort_entries(&mut entries);
        entries.push(MenuEntry::auto(auto_label));
        entries
    }

    /// Rebuild the menu for the renditions the engine reports now
    #[instrument(skip_all, fields(renditions = renditions.len()))]
    pub fn on_renditions_discovered(
        &self,
        renditions: &[Rendition],
        catalog: &RenditionCatalog,
        manifest: Option<&Manifest>,
        auto_label: &str,
        menu: &mut dyn QualityMenu,
    ) {
        let entries = self.build_entries(renditions, catalog, manifest, auto_label);

        debug!(
            entries = entries.len(),
            values = ?entries.iter().map(|e| e.value).collect::<Vec<_>>(),
            "Quality menu rebuilt"
        );

        menu.set_entries(entries);
        menu.update();
    }
}

/// Stable ascending sort by value; entries without a numeric value go first
pub fn sort_entries(entries: &mut [MenuEntry]) {
    entries.sort_by(|a, b| match (a.value.level(), b.value.level()) {
        (Some(x), Some(y)) => x.cmp(&y),
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
}
