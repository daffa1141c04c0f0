//! Player host backed by state the JavaScript side reports

use kino_quality::{PlayerEvent, PlayerHost};
use serde::Serialize;
use std::collections::HashMap;

/// What the page told us about its player, plus the changes the selector
/// asked the page to make
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BrowserHost {
    quality_levels: bool,
    tech: Option<String>,
    control_bar_len: usize,
    #[serde(skip)]
    translations: HashMap<String, String>,
    placement: Option<usize>,
    classes: Vec<String>,
    subscriptions: Vec<&'static str>,
}

impl BrowserHost {
    pub fn new(tech: Option<String>, quality_levels: bool, control_bar_len: usize) -> Self {
        Self {
            quality_levels,
            tech,
            control_bar_len,
            ..Default::default()
        }
    }

    pub fn set_translation(&mut self, text: &str, translated: &str) {
        self.translations
            .insert(text.to_string(), translated.to_string());
    }

    /// Control-bar index the selector asked for
    pub fn placement(&self) -> Option<usize> {
        self.placement
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn subscriptions(&self) -> &[&'static str] {
        &self.subscriptions
    }
}

impl PlayerHost for BrowserHost {
    fn supports_quality_levels(&self) -> bool {
        self.quality_levels
    }

    fn active_tech(&self) -> Option<&str> {
        self.tech.as_deref()
    }

    fn localize(&self, text: &str) -> String {
        self.translations
            .get(text)
            .cloned()
            .unwrap_or_else(|| text.to_string())
    }

    fn control_bar_len(&self) -> usize {
        self.control_bar_len
    }

    fn insert_control(&mut self, _name: &str, index: usize) {
        let index = index.min(self.control_bar_len);
        self.placement = Some(index);
        self.control_bar_len += 1;
    }

    fn add_class(&mut self, class: &str) {
        if !self.classes.iter().any(|c| c == class) {
            self.classes.push(class.to_string());
        }
    }

    fn subscribe(&mut self, event: PlayerEvent) {
        if !self.subscriptions.contains(&event.name()) {
            self.subscriptions.push(event.name());
        }
    }
}
