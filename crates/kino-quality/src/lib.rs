//! Kino Quality - Quality Selector for Kino
//!
//! This crate provides the logic behind the player's quality menu:
//! - Rendition catalog (bandwidth to name lookup from the manifest)
//! - Menu synchronization as the engine discovers renditions
//! - Manual quality selection through the engine's `enabled` flags
//! - Plugin activation and host wiring
//!
//! Adaptive bitrate selection, manifest parsing and widget rendering stay
//! with the host; they are reached through the [`StreamingEngine`],
//! [`PlayerHost`] and [`QualityButton`] traits.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      Kino Quality                               │
//! ├─────────────────────────────────────────────────────────────────┤
//! │                                                                 │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────┐           │
//! │  │  Rendition   │  │     Menu     │  │  Selection   │           │
//! │  │   Catalog    │──│ Synchronizer │  │   Applier    │           │
//! │  └──────────────┘  └──────┬───────┘  └──────┬───────┘           │
//! │                           │                 │                   │
//! │                    ┌──────┴─────────────────┴──┐                │
//! │                    │ QualitySelectorController │                │
//! │                    └──────┬─────────────────┬──┘                │
//! │                           │                 │                   │
//! │  ┌──────────────┐  ┌──────┴──────┐  ┌───────┴──────┐            │
//! │  │    Plugin    │  │   Player    │  │  Streaming   │            │
//! │  │   Registry   │  │    Host     │  │    Engine    │            │
//! │  └──────────────┘  └─────────────┘  └──────────────┘            │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust
//! use kino_quality::{
//!     HeadlessPlayer, InMemoryEngine, PlayerEvent, PluginRegistry, Quality, Rendition,
//!     PLUGIN_NAME,
//! };
//!
//! let mut player = HeadlessPlayer::hls();
//! let mut engine = InMemoryEngine::with_renditions(vec![
//!     Rendition::with_resolution(1280, 720, 2_800_000),
//!     Rendition::with_resolution(640, 360, 800_000),
//! ]);
//!
//! let mut plugins = PluginRegistry::with_quality_selector();
//! plugins.activate(PLUGIN_NAME, &mut player, Default::default()).unwrap();
//! plugins.dispatch(PlayerEvent::QualityLevelAdded, &player, &engine);
//!
//! let selector = plugins.get_mut(PLUGIN_NAME).unwrap();
//! selector.set_quality(Quality::Level(360), &mut engine);
//! assert_eq!(engine.enabled_flags(), vec![false, true]);
//! ```

pub mod error;
pub mod types;
pub mod manifest;
pub mod engine;
pub mod catalog;
pub mod menu;
pub mod widget;
pub mod selection;
pub mod config;
pub mod host;
pub mod controller;
pub mod plugin;

pub use error::{Error, Result};
pub use types::*;
pub use manifest::{Manifest, PlaylistDescription};
#[cfg(feature = "hls")]
pub use manifest::{parse_hls, HlsSource};
pub use engine::{InMemoryEngine, StreamingEngine};
pub use catalog::RenditionCatalog;
pub use menu::{MenuEntry, MenuSynchronizer};
pub use widget::{MenuButton, QualityButton, QualityMenu};
pub use selection::SelectionApplier;
pub use config::QualitySelectorConfig;
pub use host::{HeadlessPlayer, PlayerEvent, PlayerHost};
pub use controller::QualitySelectorController;
pub use plugin::{PluginRegistry, PLUGIN_NAME};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Log the library version once at startup
pub fn init() {
    tracing::info!(version = VERSION, "Kino Quality initialized");
}
