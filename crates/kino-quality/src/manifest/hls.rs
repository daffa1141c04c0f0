//! HLS adapter
//!
//! Turns an `m3u8-rs` parse into the two things the quality selector reads:
//! the catalog's description list and the engine's rendition list.
//! I-frame variants are not playable renditions and are left out of both.

use super::{Manifest, PlaylistDescription, ATTR_BANDWIDTH, ATTR_NAME};
use crate::{error::Error, types::*, Result};
use m3u8_rs::{MasterPlaylist, Playlist, QuotedOrUnquoted, VariantStream};
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::debug;

/// Manifest plus the renditions an engine would report for it
#[derive(Debug, Clone, Default)]
pub struct HlsSource {
    pub manifest: Manifest,
    pub renditions: Vec<Rendition>,
}

/// Parse a playlist. A media playlist entry point has no variants, so it
/// yields an empty flat manifest and no renditions.
pub fn parse_hls(content: &[u8]) -> Result<HlsSource> {
    let playlist = m3u8_rs::parse_playlist_res(content)
        .map_err(|e| Error::manifest(format!("Failed to parse HLS playlist: {:?}", e)))?;

    match playlist {
        Playlist::MasterPlaylist(master) => Ok(from_master(&master)),
        Playlist::MediaPlaylist(_) => {
            debug!("Media playlist entry point, no variants");
            Ok(HlsSource::default())
        }
    }
}

fn from_master(master: &MasterPlaylist) -> HlsSource {
    let variants: Vec<&VariantStream> = master.variants.iter().filter(|v| !v.is_i_frame).collect();

    let playlists = variants.iter().map(|v| describe_variant(v)).collect();
    let renditions = variants.iter().map(|v| rendition_for(v)).collect();

    debug!(variants = variants.len(), "HLS master playlist adapted");

    HlsSource {
        manifest: Manifest::Master { playlists },
        renditions,
    }
}

fn describe_variant(variant: &VariantStream) -> PlaylistDescription {
    let mut attributes = BTreeMap::new();
    attributes.insert(ATTR_BANDWIDTH.to_string(), Value::from(variant.bandwidth));

    if let Some(name) = variant
        .other_attributes
        .as_ref()
        .and_then(|attrs| attrs.get(ATTR_NAME))
    {
        attributes.insert(ATTR_NAME.to_string(), Value::String(unquote(name)));
    }

    PlaylistDescription { attributes }
}

fn rendition_for(variant: &VariantStream) -> Rendition {
    let (width, height) = match variant.resolution {
        Some(r) => (u32::try_from(r.width).ok(), u32::try_from(r.height).ok()),
        None => (None, None),
    };

    Rendition::new(RenditionDescriptor::from_parts(
        variant.bandwidth,
        width,
        height,
    ))
}

fn unquote(value: &QuotedOrUnquoted) -> String {
    match value {
        QuotedOrUnquoted::Quoted(s) | QuotedOrUnquoted::Unquoted(s) => s.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MASTER: &str = "#EXTM3U
#EXT-X-STREAM-INF:BANDWIDTH=800000,RESOLUTION=640x360,NAME=\"360p\"
360p.m3u8
#EXT-X-STREAM-INF:BANDWIDTH=2800000,RESOLUTION=1280x720,NAME=\"720p\"
720p.m3u8
#EXT-X-STREAM-INF:BANDWIDTH=64000,CODECS=\"mp4a.40.2\"
audio.m3u8
";

    #[test]
    fn test_master_adapter() {
        let source = parse_hls(MASTER.as_bytes()).unwrap();

        assert!(source.manifest.is_master());
        let descriptions = source.manifest.descriptions();
        assert_eq!(descriptions.len(), 3);
        assert_eq!(descriptions[0].name(), Some("360p"));
        assert_eq!(descriptions[1].bandwidth(), Some(2_800_000));
        assert_eq!(descriptions[2].name(), None);
        assert!(descriptions
            .iter()
            .all(|d| d.attributes.keys().all(|k| k == ATTR_NAME || k == ATTR_BANDWIDTH)));

        assert_eq!(source.renditions.len(), 3);
        assert_eq!(source.renditions[0].short_side(), Some(360));
        assert_eq!(source.renditions[2], Rendition::with_bandwidth(64_000));
    }

    #[test]
    fn test_media_playlist_has_no_variants() {
        let media = "#EXTM3U
#EXT-X-TARGETDURATION:6
#EXTINF:6.0,
seg0.ts
#EXT-X-ENDLIST
";
        let source = parse_hls(media.as_bytes()).unwrap();
        assert!(source.renditions.is_empty());
        assert!(source.manifest.descriptions().is_empty());
    }
}
