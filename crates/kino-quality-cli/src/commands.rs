//! CLI command implementations

use crate::output::{self, EntryRow, Report, RenditionRow};
use crate::source;
use kino_quality::{
    HeadlessPlayer, InMemoryEngine, PlayerEvent, PluginRegistry, Quality, QualitySelectorConfig,
    QualitySelectorController, StreamingEngine, PLUGIN_NAME,
};
use tracing::debug;

/// A headless player with the quality selector active and the menu built
struct Session {
    host: HeadlessPlayer,
    engine: InMemoryEngine,
    registry: PluginRegistry,
}

impl Session {
    async fn open(location: &str, options: &str) -> anyhow::Result<Self> {
        let engine = source::load_engine(location).await?;
        let config = QualitySelectorConfig::from_json(options)?;

        let mut host = HeadlessPlayer::hls();
        let mut registry = PluginRegistry::with_quality_selector();
        if !registry.activate(PLUGIN_NAME, &mut host, config)? {
            anyhow::bail!("Quality selector did not activate for this player");
        }

        registry.dispatch(PlayerEvent::QualityLevelAdded, &host, &engine);

        Ok(Self {
            host,
            engine,
            registry,
        })
    }

    fn controller(&mut self) -> anyhow::Result<&mut QualitySelectorController> {
        self.registry
            .get_mut(PLUGIN_NAME)
            .ok_or_else(|| anyhow::anyhow!("Quality selector is not active"))
    }

    fn select(&mut self, quality: Quality) -> anyhow::Result<()> {
        let controller = self
            .registry
            .get_mut(PLUGIN_NAME)
            .ok_or_else(|| anyhow::anyhow!("Quality selector is not active"))?;
        controller.set_quality(quality, &mut self.engine);
        Ok(())
    }

    fn click(&mut self, index: usize) -> anyhow::Result<Quality> {
        let controller = self
            .registry
            .get_mut(PLUGIN_NAME)
            .ok_or_else(|| anyhow::anyhow!("Quality selector is not active"))?;
        Ok(controller.activate_entry(index, &mut self.engine)?)
    }

    fn report(&mut self) -> anyhow::Result<Report> {
        let renditions = RenditionRow::rows(self.engine.renditions());
        let controller = self.controller()?;
        Ok(Report {
            current_quality: controller.current_quality(),
            button_label: controller.button().label().map(str::to_string),
            entries: EntryRow::rows(controller.entries()),
            renditions,
        })
    }

    fn print(&mut self, format: &str) -> anyhow::Result<()> {
        debug!(controls = ?self.host.control_bar(), "Control bar");
        let report = self.report()?;
        println!("{}", output::render(&report, format));
        Ok(())
    }
}

/// Show the quality menu for a manifest
pub async fn menu(location: &str, options: &str, format: &str) -> anyhow::Result<()> {
    let mut session = Session::open(location, options).await?;
    session.print(format)
}

/// Select a quality and show which renditions stay enabled
pub async fn select(
    location: &str,
    quality: &str,
    options: &str,
    format: &str,
) -> anyhow::Result<()> {
    let quality: Quality = quality.parse()?;
    let mut session = Session::open(location, options).await?;
    session.select(quality)?;
    session.print(format)
}

/// Activate a menu entry by index, as a viewer click would
pub async fn click(
    location: &str,
    index: usize,
    options: &str,
    format: &str,
) -> anyhow::Result<()> {
    let mut session = Session::open(location, options).await?;
    let quality = session.click(index)?;
    debug!(index, quality = %quality, "Entry activated");
    session.print(format)
}
