//! Selection applier
//!
//! Pins the engine to one quality by flipping `enabled` across its rendition
//! list, or releases it by enabling everything. Only renditions with geometry
//! can match a level; bandwidth-only renditions are enabled for auto alone.

use crate::{
    engine::StreamingEngine,
    types::{Quality, Rendition},
};
use tracing::debug;

/// Whether a rendition stays eligible under a selection
pub fn is_eligible(rendition: &Rendition, quality: Quality) -> bool {
    match quality {
        Quality::Auto => true,
        Quality::Level(value) => rendition.short_side() == Some(value),
    }
}

/// Applies a selection to the engine's rendition list
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectionApplier;

impl SelectionApplier {
    pub fn new() -> Self {
        Self
    }

    /// Set every rendition's `enabled` flag for `quality`.
    /// Returns how many renditions remain enabled.
    pub fn apply(&self, quality: Quality, engine: &mut dyn StreamingEngine) -> usize {
        let flags: Vec<bool> = engine
            .renditions()
            .iter()
            .map(|r| is_eligible(r, quality))
            .collect();

        for (index, enabled) in flags.iter().enumerate() {
            engine.set_enabled(index, *enabled);
        }

        let enabled = flags.iter().filter(|f| **f).count();
        debug!(
            quality = %quality,
            enabled,
            total = flags.len(),
            "Rendition eligibility applied"
        );
        enabled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::InMemoryEngine;

    fn ladder() -> InMemoryEngine {
        InMemoryEngine::with_renditions(vec![
            Rendition::with_resolution(960, 540, 1_500_000),
            Rendition::with_resolution(640, 360, 800_000),
            Rendition::with_resolution(1920, 1080, 5_000_000),
        ])
    }

    #[test]
    fn test_pin_single_level() {
        let mut engine = ladder();
        let enabled = SelectionApplier::new().apply(Quality::Level(540), &mut engine);

        assert_eq!(enabled, 1);
        assert_eq!(engine.enabled_flags(), vec![true, false, false]);
    }

    #[test]
    fn test_auto_enables_all() {
        let mut engine = ladder();
        let applier = SelectionApplier::new();
        applier.apply(Quality::Level(360), &mut engine);
        applier.apply(Quality::Auto, &mut engine);

        assert_eq!(engine.enabled_flags(), vec![true, true, true]);
    }

    #[test]
    fn test_bandwidth_only_never_matched() {
        let mut engine = InMemoryEngine::with_renditions(vec![
            Rendition::with_bandwidth(2_000_000),
            Rendition::with_resolution(1280, 720, 2_800_000),
        ]);

        SelectionApplier::new().apply(Quality::Level(2_000_000), &mut engine);
        assert_eq!(engine.enabled_flags(), vec![false, false]);

        SelectionApplier::new().apply(Quality::Auto, &mut engine);
        assert_eq!(engine.enabled_flags(), vec![true, true]);
    }

    #[test]
    fn test_unknown_level_disables_all() {
        let mut engine = ladder();
        assert_eq!(SelectionApplier::new().apply(Quality::Level(144), &mut engine), 0);
        assert_eq!(engine.renditions().len(), 3);
    }
}
