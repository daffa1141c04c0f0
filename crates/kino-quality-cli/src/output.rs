//! Output formatting for CLI

use kino_quality::{MenuEntry, Quality, Rendition};
use serde::Serialize;
use tabled::{Table, Tabled};

/// Output format options
pub enum OutputFormat {
    Text,
    Json,
    Table,
}

impl From<&str> for OutputFormat {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => OutputFormat::Json,
            "table" => OutputFormat::Table,
            _ => OutputFormat::Text,
        }
    }
}

/// Menu entry row
#[derive(Serialize, Tabled)]
pub struct EntryRow {
    #[tabled(rename = "#")]
    pub index: usize,
    #[tabled(rename = "Label")]
    pub label: String,
    #[tabled(rename = "Value")]
    pub value: Quality,
    #[tabled(rename = "Selected")]
    pub selected: bool,
}

impl EntryRow {
    pub fn rows(entries: &[MenuEntry]) -> Vec<EntryRow> {
        entries
            .iter()
            .enumerate()
            .map(|(index, entry)| EntryRow {
                index,
                label: entry.label_or_blank().to_string(),
                value: entry.value,
                selected: entry.selected,
            })
            .collect()
    }
}

/// Engine rendition row
#[derive(Serialize, Tabled)]
pub struct RenditionRow {
    #[tabled(rename = "#")]
    pub index: usize,
    #[tabled(rename = "Resolution")]
    pub resolution: String,
    #[tabled(rename = "Bandwidth")]
    pub bandwidth: u64,
    #[tabled(rename = "Enabled")]
    pub enabled: bool,
}

impl RenditionRow {
    pub fn rows(renditions: &[Rendition]) -> Vec<RenditionRow> {
        renditions
            .iter()
            .enumerate()
            .map(|(index, rendition)| RenditionRow {
                index,
                resolution: rendition
                    .descriptor
                    .resolution()
                    .map(|r| r.to_string())
                    .unwrap_or_else(|| "-".to_string()),
                bandwidth: rendition.bandwidth(),
                enabled: rendition.enabled,
            })
            .collect()
    }
}

/// Full report for one command run
#[derive(Serialize)]
pub struct Report {
    pub current_quality: Quality,
    pub button_label: Option<String>,
    pub entries: Vec<EntryRow>,
    pub renditions: Vec<RenditionRow>,
}

/// Render a report in the selected format
pub fn render(report: &Report, format: &str) -> String {
    match OutputFormat::from(format) {
        OutputFormat::Json => {
            serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
        }
        OutputFormat::Table => format!(
            "Current quality: {}\n\nMenu:\n{}\n\nRenditions:\n{}",
            report.current_quality,
            Table::new(&report.entries),
            Table::new(&report.renditions)
        ),
        OutputFormat::Text => render_text(report),
    }
}

fn render_text(report: &Report) -> String {
    let mut out = format!("Current quality: {}\n", report.current_quality);
    if let Some(label) = &report.button_label {
        out.push_str(&format!("Button label: {}\n", label));
    }

    out.push_str("\nMenu:\n");
    for entry in &report.entries {
        let marker = if entry.selected { "*" } else { " " };
        out.push_str(&format!(
            "  {} {}. {} ({})\n",
            marker, entry.index, entry.label, entry.value
        ));
    }

    out.push_str("\nRenditions:\n");
    for rendition in &report.renditions {
        out.push_str(&format!(
            "  {}. {} @ {}bps [{}]\n",
            rendition.index,
            rendition.resolution,
            rendition.bandwidth,
            if rendition.enabled { "enabled" } else { "disabled" }
        ));
    }
    out
}
