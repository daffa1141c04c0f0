//! Plugin registry
//!
//! The player creates one registry and activates plugins by name. Active
//! controllers live in the registry; the host reaches them through
//! [`PluginRegistry::get`] and feeds them events through
//! [`PluginRegistry::dispatch`].

use crate::{
    config::QualitySelectorConfig,
    controller::QualitySelectorController,
    engine::StreamingEngine,
    host::{PlayerEvent, PlayerHost},
    widget::{MenuButton, QualityButton},
    Error, Result,
};
use std::collections::HashMap;
use tracing::debug;

/// Name the quality selector registers under
pub const PLUGIN_NAME: &str = "qualitySelector";

/// Builds a controller for a ready player, or `None` to stay inert
pub type PluginFactory<B> =
    fn(&mut dyn PlayerHost, QualitySelectorConfig) -> Option<QualitySelectorController<B>>;

/// Named plugin factories and the controllers they produced
pub struct PluginRegistry<B: QualityButton = MenuButton> {
    factories: HashMap<String, PluginFactory<B>>,
    active: HashMap<String, QualitySelectorController<B>>,
}

impl<B: QualityButton> PluginRegistry<B> {
    /// Empty registry
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
            active: HashMap::new(),
        }
    }

    pub fn register(&mut self, name: impl Into<String>, factory: PluginFactory<B>) -> Result<()> {
        let name = name.into();
        if self.factories.contains_key(&name) {
            return Err(Error::DuplicatePlugin(name));
        }
        debug!(plugin = %name, "Plugin registered");
        self.factories.insert(name, factory);
        Ok(())
    }

    pub fn is_registered(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Run a plugin's factory against a ready player.
    ///
    /// Returns `Ok(false)` when the plugin chose to stay inert. Activating
    /// an already active plugin replaces its controller.
    pub fn activate(
        &mut self,
        name: &str,
        host: &mut dyn PlayerHost,
        config: QualitySelectorConfig,
    ) -> Result<bool> {
        let factory = self
            .factories
            .get(name)
            .copied()
            .ok_or_else(|| Error::UnknownPlugin(name.to_string()))?;

        match factory(host, config) {
            Some(controller) => {
                self.active.insert(name.to_string(), controller);
                Ok(true)
            }
            None => {
                self.active.remove(name);
                Ok(false)
            }
        }
    }

    /// Activate with options given as host JSON
    pub fn activate_json(
        &mut self,
        name: &str,
        host: &mut dyn PlayerHost,
        options: &str,
    ) -> Result<bool> {
        let config = QualitySelectorConfig::from_json(options)?;
        self.activate(name, host, config)
    }

    pub fn get(&self, name: &str) -> Option<&QualitySelectorController<B>> {
        self.active.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut QualitySelectorController<B>> {
        self.active.get_mut(name)
    }

    /// Deliver a host event to every active controller
    pub fn dispatch(
        &mut self,
        event: PlayerEvent,
        host: &dyn PlayerHost,
        engine: &dyn StreamingEngine,
    ) {
        for controller in self.active.values_mut() {
            controller.handle_event(event, host, engine);
        }
    }
}

impl PluginRegistry<MenuButton> {
    /// Registry with the quality selector registered under [`PLUGIN_NAME`]
    pub fn with_quality_selector() -> Self {
        let mut registry = Self::new();
        registry
            .factories
            .insert(PLUGIN_NAME.to_string(), default_factory);
        registry
    }
}

impl<B: QualityButton> Default for PluginRegistry<B> {
    fn default() -> Self {
        Self::new()
    }
}

fn default_factory(
    host: &mut dyn PlayerHost,
    config: QualitySelectorConfig,
) -> Option<QualitySelectorController<MenuButton>> {
    QualitySelectorController::activate(host, MenuButton::new(), config)
}
