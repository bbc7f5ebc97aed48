use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use super::GraphData;

pub fn load_graph_data(path: &Path) -> Result<GraphData> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read graph data from {}", path.display()))?;

    let data: GraphData = serde_json::from_str(&raw)
        .with_context(|| format!("invalid graph JSON in {}", path.display()))?;

    log::info!(
        "loaded {} nodes and {} links from {}",
        data.node_count(),
        data.link_count(),
        path.display()
    );

    Ok(data)
}

#[cfg(test)]
mod tests {
    use crate::data::{ContentKind, GraphData};

    #[test]
    fn parses_graph_json() {
        let raw = r#"{
            "nodes": [
                { "id": "1", "title": "Graph Theory", "type": "presentation" },
                { "id": "2", "title": "Layout Engine", "type": "github",
                  "summary": "Force-directed layout", "url": "https://example.org/layout" }
            ],
            "links": [ { "source": "1", "target": "2" } ]
        }"#;

        let data: GraphData = serde_json::from_str(raw).unwrap();
        assert_eq!(data.node_count(), 2);
        assert_eq!(data.link_count(), 1);
        assert_eq!(data.nodes[0].kind, ContentKind::Presentation);
        assert_eq!(data.nodes[1].kind, ContentKind::Github);
        assert_eq!(
            data.nodes[1].summary.as_deref(),
            Some("Force-directed layout")
        );
    }

    #[test]
    fn missing_links_default_to_empty() {
        let data: GraphData =
            serde_json::from_str(r#"{ "nodes": [] }"#).unwrap();
        assert_eq!(data.node_count(), 0);
        assert_eq!(data.link_count(), 0);
    }
}
