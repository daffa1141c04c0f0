//! Quality selector controller
//!
//! Ties the rendition catalog, menu synchronizer and selection applier to one
//! button. The host owns the engine and lends it for each event; the
//! controller holds no reference to it between calls.

use crate::{
    catalog::RenditionCatalog,
    config::QualitySelectorConfig,
    engine::StreamingEngine,
    host::{has_supported_tech, PlayerEvent, PlayerHost, PLAYER_CLASS},
    menu::{MenuEntry, MenuSynchronizer, AUTO_TEXT},
    selection::SelectionApplier,
    types::Quality,
    widget::{MenuButton, QualityButton, HIDDEN_CLASS},
    Error, Result,
};
use tracing::{debug, info, instrument};

/// Name of the control inserted into the control bar
pub const CONTROL_NAME: &str = "qualitySelector";

/// Class added to the quality button
pub const BUTTON_CLASS: &str = "vjs-quality-selector";

/// Coordinates quality discovery and manual selection for one player
#[derive(Debug)]
pub struct QualitySelectorController<B: QualityButton = MenuButton> {
    config: QualitySelectorConfig,
    catalog: RenditionCatalog,
    synchronizer: MenuSynchronizer,
    applier: SelectionApplier,
    button: B,
    current: Quality,
}

impl<B: QualityButton> QualitySelectorController<B> {
    /// Wire the selector into a ready player.
    ///
    /// Returns `None`, leaving the host untouched, when the host cannot list
    /// renditions or is not running a supported streaming tech.
    pub fn activate(
        host: &mut dyn PlayerHost,
        mut button: B,
        config: QualitySelectorConfig,
    ) -> Option<Self> {
        if !host.supports_quality_levels() || !has_supported_tech(host) {
            debug!(
                quality_levels = host.supports_quality_levels(),
                tech = ?host.active_tech(),
                "Quality selector inactive"
            );
            return None;
        }

        let index = config.placement_for(host.control_bar_len());
        host.insert_control(CONTROL_NAME, index);

        button.add_class(BUTTON_CLASS);
        if config.display_current_quality {
            button.set_label(&Quality::Auto.button_label());
        } else {
            button.set_icon_class(config.icon_class());
        }
        button.remove_class(HIDDEN_CLASS);

        host.add_class(PLAYER_CLASS);
        host.subscribe(PlayerEvent::QualityLevelAdded);

        info!(
            placement = index,
            display_current_quality = config.display_current_quality,
            "Quality selector activated"
        );

        Some(Self {
            config,
            catalog: RenditionCatalog::new(),
            synchronizer: MenuSynchronizer::new(),
            applier: SelectionApplier::new(),
            button,
            current: Quality::Auto,
        })
    }

    /// Route a host event
    pub fn handle_event(
        &mut self,
        event: PlayerEvent,
        host: &dyn PlayerHost,
        engine: &dyn StreamingEngine,
    ) {
        match event {
            PlayerEvent::QualityLevelAdded => self.on_renditions_discovered(host, engine),
            PlayerEvent::Ready => {}
        }
    }

    /// Rebuild the menu from the engine's current renditions
    #[instrument(skip_all)]
    pub fn on_renditions_discovered(
        &mut self,
        host: &dyn PlayerHost,
        engine: &dyn StreamingEngine,
    ) {
        let auto_label = host.localize(AUTO_TEXT);
        self.synchronizer.on_renditions_discovered(
            engine.renditions(),
            &self.catalog,
            engine.manifest(),
            &auto_label,
            &mut self.button,
        );
    }

    /// Pin playback to `quality`, or release it with [`Quality::Auto`]
    #[instrument(skip(self, engine))]
    pub fn set_quality(&mut self, quality: Quality, engine: &mut dyn StreamingEngine) {
        self.current = quality;

        if self.config.display_current_quality {
            self.button.set_label(&quality.button_label());
        }

        self.applier.apply(quality, engine);
        self.button.unpress();

        info!(quality = %quality, "Quality selected");
    }

    /// A viewer clicked the menu entry at `index`
    pub fn activate_entry(
        &mut self,
        index: usize,
        engine: &mut dyn StreamingEngine,
    ) -> Result<Quality> {
        let entries = self.button.entries_mut();
        let len = entries.len();
        let value = entries
            .get(index)
            .map(|entry| entry.value)
            .ok_or(Error::EntryOutOfRange { index, len })?;

        for (i, entry) in entries.iter_mut().enumerate() {
            entry.selected = i == index;
        }
        self.button.update();

        self.set_quality(value, engine);
        Ok(value)
    }

    /// The last selection, [`Quality::Auto`] before any
    pub fn current_quality(&self) -> Quality {
        self.current
    }

    /// Current menu entries
    pub fn entries(&self) -> &[MenuEntry] {
        self.button.entries()
    }

    pub fn config(&self) -> &QualitySelectorConfig {
        &self.config
    }

    pub fn catalog(&self) -> &RenditionCatalog {
        &self.catalog
    }

    /// Forget cached rendition names, for a new source
    pub fn reset_catalog(&mut self) {
        self.catalog.reset();
    }

    pub fn button(&self) -> &B {
        &self.button
    }

    pub fn button_mut(&mut self) -> &mut B {
        &mut self.button
    }
}
