//! Quality selector bindings
//!
//! Levels cross the boundary as JSON arrays of
//! `{bandwidth, width?, height?, enabled?}` objects. After a selection the
//! page reads back one `enabled` flag per level, in the order it sent them,
//! and applies them to its engine.

use crate::host::BrowserHost;
use crate::to_js_error;
use kino_quality::{
    InMemoryEngine, Manifest, MenuButton, PlayerEvent, Quality, QualitySelectorConfig,
    QualitySelectorController, Rendition, Result, StreamingEngine,
};
use wasm_bindgen::prelude::*;

/// Quality selector for a browser player
#[wasm_bindgen]
pub struct KinoQualitySelector {
    host: BrowserHost,
    engine: InMemoryEngine,
    controller: Option<QualitySelectorController<MenuButton>>,
}

#[wasm_bindgen]
impl KinoQualitySelector {
    /// Activate against a player.
    ///
    /// # Arguments
    /// * `options_json` - selector options, `null` or `{}` for defaults
    /// * `tech` - the player's active tech name, if any
    /// * `quality_levels` - whether the player can list renditions
    /// * `control_bar_len` - number of controls currently in the bar
    #[wasm_bindgen(constructor)]
    pub fn new(
        options_json: &str,
        tech: Option<String>,
        quality_levels: bool,
        control_bar_len: usize,
    ) -> std::result::Result<KinoQualitySelector, JsValue> {
        Self::create(options_json, tech, quality_levels, control_bar_len).map_err(to_js_error)
    }

    /// Whether the selector wired itself into the player
    #[wasm_bindgen]
    pub fn is_active(&self) -> bool {
        self.controller.is_some()
    }

    /// Control-bar index for the quality button, if active
    #[wasm_bindgen]
    pub fn placement_index(&self) -> Option<usize> {
        self.host.placement()
    }

    /// Translation for a user-visible string such as "Auto"
    #[wasm_bindgen]
    pub fn set_translation(&mut self, text: &str, translated: &str) {
        self.host.set_translation(text, translated);
    }

    /// Replace the manifest descriptions used to name bandwidth-only levels
    #[wasm_bindgen]
    pub fn set_manifest(&mut self, manifest_json: &str) -> std::result::Result<(), JsValue> {
        self.load_manifest(manifest_json).map_err(to_js_error)
    }

    /// Adopt a master playlist's variants as the level list.
    ///
    /// Returns the menu entries as JSON.
    #[wasm_bindgen]
    pub fn load_playlist(&mut self, playlist: &str) -> std::result::Result<String, JsValue> {
        self.adopt_playlist(playlist).map_err(to_js_error)
    }

    /// The engine reported its levels. Returns the menu entries as JSON.
    #[wasm_bindgen]
    pub fn on_renditions_discovered(
        &mut self,
        renditions_json: &str,
    ) -> std::result::Result<String, JsValue> {
        self.discover(renditions_json).map_err(to_js_error)
    }

    /// Select "auto", "720" or "720p". Returns the enabled flags as JSON.
    #[wasm_bindgen]
    pub fn set_quality(&mut self, value: &str) -> std::result::Result<String, JsValue> {
        self.select(value).map_err(to_js_error)
    }

    /// A viewer clicked the entry at `index`. Returns the enabled flags as JSON.
    #[wasm_bindgen]
    pub fn activate_entry(&mut self, index: usize) -> std::result::Result<String, JsValue> {
        self.click(index).map_err(to_js_error)
    }

    /// Enabled flags, one per level
    #[wasm_bindgen]
    pub fn enabled_levels(&self) -> js_sys::Array {
        self.engine
            .enabled_flags()
            .into_iter()
            .map(JsValue::from_bool)
            .collect()
    }

    /// Button state (label, icon, classes, entries) as a JS object
    #[wasm_bindgen]
    pub fn get_button_state(&self) -> std::result::Result<JsValue, JsValue> {
        match &self.controller {
            Some(controller) => serde_wasm_bindgen::to_value(controller.button())
                .map_err(|e| JsValue::from_str(&e.to_string())),
            None => Ok(JsValue::NULL),
        }
    }

    /// Classes the page should add to the player element
    #[wasm_bindgen]
    pub fn get_player_classes(&self) -> String {
        self.host.classes().join(" ")
    }

    #[wasm_bindgen]
    pub fn get_current_quality(&self) -> String {
        self.current_quality().to_string()
    }

    /// Forget cached level names, for a new source
    #[wasm_bindgen]
    pub fn reset(&mut self) {
        self.engine = InMemoryEngine::default();
        if let Some(controller) = self.controller.as_mut() {
            controller.reset_catalog();
        }
    }
}

impl KinoQualitySelector {
    fn create(
        options_json: &str,
        tech: Option<String>,
        quality_levels: bool,
        control_bar_len: usize,
    ) -> Result<Self> {
        let config = QualitySelectorConfig::from_json(options_json)?;
        let mut host = BrowserHost::new(tech, quality_levels, control_bar_len);
        let controller = QualitySelectorController::activate(&mut host, MenuButton::new(), config);

        Ok(Self {
            host,
            engine: InMemoryEngine::default(),
            controller,
        })
    }

    fn load_manifest(&mut self, manifest_json: &str) -> Result<()> {
        let manifest = if manifest_json.trim() == "null" {
            None
        } else {
            Some(Manifest::from_json(manifest_json)?)
        };
        self.engine.set_manifest(manifest);
        Ok(())
    }

    fn adopt_playlist(&mut self, playlist: &str) -> Result<String> {
        self.engine = InMemoryEngine::from(kino_quality::parse_hls(playlist.as_bytes())?);
        self.rebuild_menu()
    }

    fn discover(&mut self, renditions_json: &str) -> Result<String> {
        let renditions: Vec<Rendition> = serde_json::from_str(renditions_json)?;
        self.engine.set_renditions(renditions);
        self.rebuild_menu()
    }

    fn rebuild_menu(&mut self) -> Result<String> {
        match self.controller.as_mut() {
            Some(controller) => {
                controller.handle_event(PlayerEvent::QualityLevelAdded, &self.host, &self.engine);
                Ok(serde_json::to_string(controller.entries())?)
            }
            None => Ok("[]".to_string()),
        }
    }

    fn select(&mut self, value: &str) -> Result<String> {
        let quality: Quality = value.parse()?;
        if let Some(controller) = self.controller.as_mut() {
            controller.set_quality(quality, &mut self.engine);
        }
        self.flags_json()
    }

    fn click(&mut self, index: usize) -> Result<String> {
        if let Some(controller) = self.controller.as_mut() {
            controller.activate_entry(index, &mut self.engine)?;
        }
        self.flags_json()
    }

    fn flags_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.engine.enabled_flags())?)
    }

    fn current_quality(&self) -> Quality {
        self.controller
            .as_ref()
            .map(|c| c.current_quality())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LEVELS: &str = r#"[
        {"bandwidth": 500000, "width": 640, "height": 360},
        {"bandwidth": 3000000, "width": 1280, "height": 720},
        {"bandwidth": 6000000, "width": 1920, "height": 1080}
    ]"#;

    fn selector(options: &str) -> KinoQualitySelector {
        KinoQualitySelector::create(options, Some("vhs".into()), true, 8).unwrap()
    }

    #[test]
    fn test_activation() {
        let s = selector("{}");
        assert!(s.is_active());
        assert_eq!(s.placement_index(), Some(6));
        assert_eq!(s.get_player_classes(), "vjs-hls-quality-selector");
    }

    #[test]
    fn test_inert_without_supported_tech() {
        let s = KinoQualitySelector::create("{}", Some("html5".into()), true, 8).unwrap();
        assert!(!s.is_active());
        assert_eq!(s.placement_index(), None);
        assert_eq!(s.get_player_classes(), "");
    }

    #[test]
    fn test_invalid_options() {
        assert!(KinoQualitySelector::create("42", None, true, 8).is_err());
    }

    #[test]
    fn test_discover_and_select() {
        let mut s = selector(r#"{"displayCurrentQuality": true}"#);
        let entries: serde_json::Value =
            serde_json::from_str(&s.discover(LEVELS).unwrap()).unwrap();
        assert_eq!(entries.as_array().unwrap().len(), 4);
        assert_eq!(entries[0]["label"], "360p");
        assert_eq!(entries[3]["value"], "auto");

        assert_eq!(s.select("720p").unwrap(), "[false,true,false]");
        assert_eq!(s.current_quality(), Quality::Level(720));

        assert_eq!(s.select("auto").unwrap(), "[true,true,true]");
        assert!(s.select("best").is_err());
    }

    #[test]
    fn test_click_entry() {
        let mut s = selector("{}");
        s.discover(LEVELS).unwrap();

        assert_eq!(s.click(2).unwrap(), "[false,false,true]");
        assert_eq!(s.current_quality(), Quality::Level(1080));
        assert!(s.click(9).is_err());
    }

    #[test]
    fn test_manifest_names_bandwidth_only_levels() {
        let mut s = selector("{}");
        s.load_manifest(
            r#"{"playlists": [{"attributes": {"NAME": "Audio", "BANDWIDTH": 64000}}]}"#,
        )
        .unwrap();

        let entries: serde_json::Value =
            serde_json::from_str(&s.discover(r#"[{"bandwidth": 64000}]"#).unwrap()).unwrap();
        assert_eq!(entries[0]["label"], "Audio");
    }

    #[test]
    fn test_load_playlist() {
        let mut s = selector("{}");
        let entries: serde_json::Value = serde_json::from_str(
            &s.adopt_playlist(
                "#EXTM3U\n#EXT-X-STREAM-INF:BANDWIDTH=800000,RESOLUTION=640x360\n360p.m3u8\n",
            )
            .unwrap(),
        )
        .unwrap();
        assert_eq!(entries[0]["label"], "360p");
    }

    #[test]
    fn test_localized_auto_label() {
        let mut s = selector("{}");
        s.set_translation("Auto", "Automatique");
        let entries: serde_json::Value =
            serde_json::from_str(&s.discover(LEVELS).unwrap()).unwrap();
        assert_eq!(entries[3]["label"], "Automatique");
    }
}
