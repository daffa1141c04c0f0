//! Menu and button widget seams
//!
//! Rendering, focus and press visuals belong to the host's widget toolkit.
//! The quality selector talks to them through these traits. [`MenuButton`]
//! is a headless implementation that records what it was told, used by the
//! CLI, the WASM bindings and tests.

use crate::menu::MenuEntry;
use serde::Serialize;

/// CSS class that keeps a control hidden until it is styled
pub const HIDDEN_CLASS: &str = "vjs-hidden";

/// A menu holding a replaceable, ordered list of entries
pub trait QualityMenu {
    /// Replace every entry
    fn set_entries(&mut self, entries: Vec<MenuEntry>);

    fn entries(&self) -> &[MenuEntry];

    fn entries_mut(&mut self) -> &mut [MenuEntry];

    /// Re-render from the current entries
    fn update(&mut self);
}

/// The control-bar button that opens the quality menu
pub trait QualityButton: QualityMenu {
    /// Replace the visible text (used when showing the current quality)
    fn set_label(&mut self, text: &str);

    /// Add an icon class to the placeholder
    fn set_icon_class(&mut self, class: &str);

    fn add_class(&mut self, class: &str);

    fn remove_class(&mut self, class: &str);

    /// Clear the pressed/open visual state
    fn unpress(&mut self);
}

/// Headless menu button
#[derive(Debug, Clone, Serialize)]
pub struct MenuButton {
    entries: Vec<MenuEntry>,
    rendered: Vec<MenuEntry>,
    render_count: usize,
    label: Option<String>,
    icon_class: Option<String>,
    classes: Vec<String>,
    pressed: bool,
}

impl MenuButton {
    /// A fresh button starts hidden
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            rendered: Vec::new(),
            render_count: 0,
            label: None,
            icon_class: None,
            classes: vec![HIDDEN_CLASS.to_string()],
            pressed: false,
        }
    }

    /// Entries as of the last `update()`
    pub fn rendered(&self) -> &[MenuEntry] {
        &self.rendered
    }

    pub fn render_count(&self) -> usize {
        self.render_count
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn icon_class(&self) -> Option<&str> {
        self.icon_class.as_deref()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Open the menu, as a viewer click would
    pub fn press(&mut self) {
        self.pressed = true;
    }
}

impl Default for MenuButton {
    fn default() -> Self {
        Self::new()
    }
}

impl QualityMenu for MenuButton {
    fn set_entries(&mut self, entries: Vec<MenuEntry>) {
        self.entries = entries;
    }

    fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    fn entries_mut(&mut self) -> &mut [MenuEntry] {
        &mut self.entries
    }

    fn update(&mut self) {
        self.rendered = self.entries.clone();
        self.render_count += 1;
    }
}

impl QualityButton for MenuButton {
    fn set_label(&mut self, text: &str) {
        self.label = Some(text.to_string());
    }

    fn set_icon_class(&mut self, class: &str) {
        self.icon_class = Some(class.to_string());
    }

    fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    fn unpress(&mut self) {
        self.pressed = false;
    }
}
