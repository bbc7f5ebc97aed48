use serde::Deserialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Article,
    Video,
    Presentation,
    Github,
}

impl ContentKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Article => "article",
            Self::Video => "video",
            Self::Presentation => "presentation",
            Self::Github => "github",
        }
    }
}

/// One portfolio item. `id` is assumed unique across the data set; the core
/// does not re-validate uniqueness at runtime.
#[derive(Clone, Debug, Deserialize)]
pub struct ContentRecord {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: ContentKind,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// Raw link between two item ids. Endpoint resolution happens at scene
/// ingestion; a record referencing an unknown id is dropped there.
#[derive(Clone, Debug, Deserialize)]
pub struct LinkRecord {
    pub source: String,
    pub target: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct GraphData {
    #[serde(default)]
    pub nodes: Vec<ContentRecord>,
    #[serde(default)]
    pub links: Vec<LinkRecord>,
}

impl GraphData {
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    pub fn record(&self, id: &str) -> Option<&ContentRecord> {
        self.nodes.iter().find(|record| record.id == id)
    }

    /// Ids directly linked to `id` in either direction, in first-seen order.
    pub fn linked_ids(&self, id: &str) -> Vec<&str> {
        let mut linked = Vec::new();
        for link in &self.links {
            let other = if link.source == id {
                link.target.as_str()
            } else if link.target == id {
                link.source.as_str()
            } else {
                continue;
            };

            if other != id && !linked.contains(&other) {
                linked.push(other);
            }
        }
        linked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, title: &str, kind: ContentKind) -> ContentRecord {
        ContentRecord {
            id: id.to_owned(),
            title: title.to_owned(),
            kind,
            summary: None,
            url: None,
        }
    }

    fn link(source: &str, target: &str) -> LinkRecord {
        LinkRecord {
            source: source.to_owned(),
            target: target.to_owned(),
        }
    }

    #[test]
    fn linked_ids_covers_both_directions() {
        let data = GraphData {
            nodes: vec![
                record("a", "A", ContentKind::Article),
                record("b", "B", ContentKind::Video),
                record("c", "C", ContentKind::Github),
            ],
            links: vec![link("a", "b"), link("c", "a"), link("b", "c")],
        };

        assert_eq!(data.linked_ids("a"), vec!["b", "c"]);
        assert_eq!(data.linked_ids("c"), vec!["a", "b"]);
    }

    #[test]
    fn record_lookup_by_id() {
        let data = GraphData {
            nodes: vec![record("x", "X", ContentKind::Presentation)],
            links: Vec::new(),
        };

        assert_eq!(data.record("x").map(|r| r.title.as_str()), Some("X"));
        assert!(data.record("missing").is_none());
    }
}
