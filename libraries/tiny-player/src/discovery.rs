//! Audio discovery over a flattened document
//!
//! Hosts walk their markup (or any other description of the page) and hand
//! over the relevant nodes in document order. Each audio node becomes one
//! track. Its title comes from an explicit title attribute, or else from
//! the nearest heading between the previous audio node and this one.

use crate::error::{PlayerError, Result};
use crate::types::DiscoveredAudio;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Document node relevant to discovery, in document order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentNode {
    /// Heading element with its text
    Heading(String),

    /// Audio element to replace with a player widget
    Audio {
        /// Explicit title attribute, if any
        title: Option<String>,
        /// Source URLs in preference order
        sources: Vec<String>,
    },

    /// Anything else; ignored
    Other,
}

/// Collect the tracks of a document
///
/// # Errors
/// Returns [`PlayerError::NoSources`] for an audio node without sources.
pub fn discover(nodes: &[DocumentNode]) -> Result<Vec<DiscoveredAudio>> {
    let mut tracks = Vec::new();
    let mut heading: Option<&str> = None;

    for node in nodes {
        match node {
            DocumentNode::Heading(text) => heading = Some(text.trim()),
            DocumentNode::Audio { title, sources } => {
                let title = title
                    .as_deref()
                    .filter(|t| !t.is_empty())
                    .or(heading)
                    .unwrap_or_default()
                    .to_string();

                if sources.is_empty() {
                    return Err(PlayerError::NoSources(title));
                }

                debug!(%title, sources = sources.len(), "Discovered audio");
                tracks.push(DiscoveredAudio::new(title, sources.clone()));

                // Headings before this element belong to it only
                heading = None;
            }
            DocumentNode::Other => {}
        }
    }

    Ok(tracks)
}
