//! Integration tests for Kino Quality

use kino_quality::{
    catalog::RenditionCatalog,
    menu::{MenuSynchronizer, AUTO_TEXT},
    HeadlessPlayer, InMemoryEngine, Manifest, MenuButton, MenuEntry, PlayerEvent,
    PlaylistDescription, PluginRegistry, Quality, QualityMeta, QualitySelectorConfig,
    QualitySelectorController, Rendition, PLUGIN_NAME,
};

// =============================================================================
// Helpers
// =============================================================================

fn activated(engine: &InMemoryEngine) -> (HeadlessPlayer, QualitySelectorController) {
    let mut player = HeadlessPlayer::hls();
    let mut controller = QualitySelectorController::activate(
        &mut player,
        MenuButton::new(),
        QualitySelectorConfig::default(),
    )
    .expect("hls player should activate the selector");
    controller.handle_event(PlayerEvent::QualityLevelAdded, &player, engine);
    (player, controller)
}

fn values(entries: &[MenuEntry]) -> Vec<Quality> {
    entries.iter().map(|e| e.value).collect()
}

fn named_manifest() -> Manifest {
    Manifest::Master {
        playlists: vec![
            PlaylistDescription::new("1080p", 5_000_000),
            PlaylistDescription::new("720p", 2_000_000),
            PlaylistDescription::new("360p", 800_000),
        ],
    }
}

// =============================================================================
// Catalog
// =============================================================================

#[test]
fn test_catalog_quality_meta_example() {
    let manifest =
        Manifest::from_json(r#"[{"attributes": {"NAME": "720p", "BANDWIDTH": 2000000}}]"#)
            .unwrap();
    let rendition: Rendition = serde_json::from_str(r#"{"bandwidth": 2000000}"#).unwrap();

    let catalog = RenditionCatalog::new();
    let meta = MenuSynchronizer::quality_meta(&rendition, &catalog, Some(&manifest));

    assert_eq!(
        meta,
        QualityMeta {
            label: Some("720p".to_string()),
            value: Quality::Level(2_000_000),
        }
    );
}

#[test]
fn test_bandwidth_only_one_entry_per_bandwidth() {
    let engine = InMemoryEngine::new(
        Some(named_manifest()),
        vec![
            Rendition::with_bandwidth(5_000_000),
            Rendition::with_bandwidth(800_000),
            Rendition::with_bandwidth(2_000_000),
            Rendition::with_bandwidth(800_000),
            Rendition::with_bandwidth(5_000_000),
        ],
    );
    let (_, controller) = activated(&engine);
    let entries = controller.entries();

    assert_eq!(entries.len(), 4);
    let labels: Vec<&str> = entries.iter().map(|e| e.label_or_blank()).collect();
    assert_eq!(labels, vec!["360p", "720p", "1080p", AUTO_TEXT]);
}

// =============================================================================
// Menu synchronization
// =============================================================================

#[test]
fn test_same_short_side_collapses() {
    let engine = InMemoryEngine::with_renditions(vec![
        Rendition::with_resolution(1280, 720, 2_800_000),
        Rendition::with_resolution(1280, 720, 4_000_000),
        Rendition::with_resolution(960, 720, 2_000_000),
    ]);
    let (_, controller) = activated(&engine);

    assert_eq!(
        values(controller.entries()),
        vec![Quality::Level(720), Quality::Auto]
    );
}

#[test]
fn test_auto_last_and_sorted() {
    let engine = InMemoryEngine::new(
        Some(named_manifest()),
        vec![
            Rendition::with_resolution(3840, 2160, 16_000_000),
            Rendition::with_bandwidth(800_000),
            Rendition::with_resolution(426, 240, 400_000),
            Rendition::with_resolution(1920, 1080, 5_000_000),
        ],
    );
    let (_, controller) = activated(&engine);
    let entries = controller.entries();

    let autos = entries.iter().filter(|e| e.value.is_auto()).count();
    assert_eq!(autos, 1);
    assert!(entries.last().unwrap().value.is_auto());

    let levels: Vec<u64> = entries.iter().filter_map(|e| e.value.level()).collect();
    assert!(levels.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn test_empty_rendition_list_has_only_auto() {
    let engine = InMemoryEngine::default();
    let (_, controller) = activated(&engine);
    assert_eq!(values(controller.entries()), vec![Quality::Auto]);
}

#[test]
fn test_synchronization_idempotent() {
    let engine = InMemoryEngine::new(
        Some(named_manifest()),
        vec![
            Rendition::with_resolution(1920, 1080, 5_000_000),
            Rendition::with_bandwidth(2_000_000),
            Rendition::with_resolution(640, 360, 800_000),
        ],
    );
    let (player, mut controller) = activated(&engine);
    let first = controller.entries().to_vec();

    controller.handle_event(PlayerEvent::QualityLevelAdded, &player, &engine);
    assert_eq!(controller.entries(), first.as_slice());
}

// =============================================================================
// Selection
// =============================================================================

#[test]
fn test_set_quality_pins_matching_rendition() {
    let mut engine = InMemoryEngine::with_renditions(vec![
        Rendition::with_resolution(960, 540, 1_500_000),
        Rendition::with_resolution(640, 360, 800_000),
        Rendition::with_resolution(1920, 1080, 5_000_000),
    ]);
    let (_, mut controller) = activated(&engine);

    controller.set_quality(Quality::Level(540), &mut engine);
    assert_eq!(engine.enabled_flags(), vec![true, false, false]);
}

#[test]
fn test_auto_enables_everything() {
    let mut renditions = vec![
        Rendition::with_resolution(960, 540, 1_500_000),
        Rendition::with_bandwidth(800_000),
        Rendition::with_resolution(1920, 1080, 5_000_000),
    ];
    for rendition in &mut renditions {
        rendition.enabled = false;
    }
    let mut engine = InMemoryEngine::with_renditions(renditions);
    let (_, mut controller) = activated(&engine);

    controller.set_quality(Quality::Auto, &mut engine);
    assert_eq!(engine.enabled_flags(), vec![true, true, true]);
}

#[test]
fn test_current_quality_tracks_last_value() {
    let mut engine = InMemoryEngine::with_renditions(vec![Rendition::with_resolution(
        1280, 720, 2_800_000,
    )]);
    let (_, mut controller) = activated(&engine);

    assert_eq!(controller.current_quality(), Quality::Auto);
    controller.set_quality(Quality::Level(720), &mut engine);
    assert_eq!(controller.current_quality(), Quality::Level(720));
    controller.set_quality(Quality::Level(9999), &mut engine);
    assert_eq!(controller.current_quality(), Quality::Level(9999));
    controller.set_quality(Quality::Auto, &mut engine);
    assert_eq!(controller.current_quality(), Quality::Auto);
}

// =============================================================================
// Host wiring
// =============================================================================

#[test]
fn test_registry_end_to_end() {
    let mut player = HeadlessPlayer::hls();
    let mut engine = InMemoryEngine::with_renditions(vec![
        Rendition::with_resolution(1920, 1080, 5_000_000),
        Rendition::with_resolution(1280, 720, 2_800_000),
    ]);
    let mut plugins = PluginRegistry::with_quality_selector();

    assert!(plugins
        .activate_json(PLUGIN_NAME, &mut player, r#"{"placementIndex": 0}"#)
        .unwrap());
    assert_eq!(player.control_index("qualitySelector"), Some(0));

    plugins.dispatch(PlayerEvent::QualityLevelAdded, &player, &engine);
    engine.push_rendition(Rendition::with_resolution(640, 360, 800_000));
    plugins.dispatch(PlayerEvent::QualityLevelAdded, &player, &engine);

    let selector = plugins.get_mut(PLUGIN_NAME).unwrap();
    assert_eq!(selector.entries().len(), 4);

    let chosen = selector.activate_entry(1, &mut engine).unwrap();
    assert_eq!(chosen, Quality::Level(720));
    assert_eq!(engine.enabled_flags(), vec![false, true, false]);
    assert_eq!(selector.current_quality(), Quality::Level(720));
}

#[cfg(feature = "hls")]
#[test]
fn test_hls_master_to_menu() {
    let master = "#EXTM3U
#EXT-X-STREAM-INF:BANDWIDTH=800000,NAME=\"Low\"
low.m3u8
#EXT-X-STREAM-INF:BANDWIDTH=2800000,NAME=\"High\"
high.m3u8
#EXT-X-STREAM-INF:BANDWIDTH=5000000,RESOLUTION=1920x1080,NAME=\"Full HD\"
fhd.m3u8
";
    let engine = InMemoryEngine::from(kino_quality::parse_hls(master.as_bytes()).unwrap());
    let (_, controller) = activated(&engine);

    let labels: Vec<&str> = controller.entries().iter().map(|e| e.label_or_blank()).collect();
    assert_eq!(labels, vec!["1080p", "Low", "High", AUTO_TEXT]);
}
