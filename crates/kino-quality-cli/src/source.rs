//! Source loading: HLS master playlists or JSON source documents
//!
//! A JSON source document describes what an engine would report directly:
//!
//! ```json
//! {
//!   "manifest": {"playlists": [{"attributes": {"NAME": "720p", "BANDWIDTH": 2000000}}]},
//!   "renditions": [{"bandwidth": 2000000}, {"bandwidth": 800000, "width": 640, "height": 360}]
//! }
//! ```

use anyhow::Context;
use kino_quality::{parse_hls, InMemoryEngine, Manifest, Rendition, StreamingEngine};
use serde::Deserialize;
use tracing::{debug, info};
use url::Url;

#[derive(Debug, Default, Deserialize)]
struct SourceDocument {
    #[serde(default)]
    manifest: Option<Manifest>,
    #[serde(default)]
    renditions: Vec<Rendition>,
}

/// Load a source from a URL or local path into an in-memory engine
pub async fn load_engine(location: &str) -> anyhow::Result<InMemoryEngine> {
    let content = fetch(location).await?;
    let engine = parse_source(&content)?;

    info!(
        location,
        renditions = engine.renditions().len(),
        "Source loaded"
    );
    Ok(engine)
}

/// Parse fetched bytes as a JSON source document or an HLS playlist
pub fn parse_source(content: &[u8]) -> anyhow::Result<InMemoryEngine> {
    if looks_like_json(content) {
        let document: SourceDocument =
            serde_json::from_slice(content).context("Invalid JSON source document")?;
        debug!("Parsed JSON source document");
        Ok(InMemoryEngine::new(document.manifest, document.renditions))
    } else {
        let source = parse_hls(content)?;
        debug!("Parsed HLS playlist");
        Ok(InMemoryEngine::from(source))
    }
}

async fn fetch(location: &str) -> anyhow::Result<Vec<u8>> {
    match Url::parse(location) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => {
            debug!(url = %url, "Fetching manifest");
            let response = reqwest::get(url.clone())
                .await
                .with_context(|| format!("Failed to fetch {}", url))?
                .error_for_status()?;
            Ok(response.bytes().await?.to_vec())
        }
        Ok(url) if url.scheme() == "file" => {
            let path = url
                .to_file_path()
                .map_err(|_| anyhow::anyhow!("Invalid file URL: {}", url))?;
            tokio::fs::read(&path)
                .await
                .with_context(|| format!("Failed to read {}", path.display()))
        }
        _ => tokio::fs::read(location)
            .await
            .with_context(|| format!("Failed to read {}", location)),
    }
}

fn looks_like_json(content: &[u8]) -> bool {
    content
        .iter()
        .find(|b| !b.is_ascii_whitespace())
        .map(|b| *b == b'{' || *b == b'[')
        .unwrap_or(false)
}
