use super::{ContentKind, ContentRecord, GraphData, LinkRecord};

/// Built-in portfolio data set used when no graph file is given: a three-item
/// chain and a five-item cluster around a shared hub.
pub fn sample_graph() -> GraphData {
    let node = |id: &str, title: &str, kind: ContentKind, summary: &str, url: &str| ContentRecord {
        id: id.to_owned(),
        title: title.to_owned(),
        kind,
        summary: Some(summary.to_owned()),
        url: Some(url.to_owned()),
    };
    let link = |source: &str, target: &str| LinkRecord {
        source: source.to_owned(),
        target: target.to_owned(),
    };

    GraphData {
        nodes: vec![
            node(
                "1",
                "Introduction to AI",
                ContentKind::Article,
                "A survey of the field for newcomers, from search to learning.",
                "https://example.org/articles/intro-to-ai",
            ),
            node(
                "2",
                "Machine Learning Basics",
                ContentKind::Video,
                "Recorded walkthrough of supervised learning fundamentals.",
                "https://example.org/videos/ml-basics",
            ),
            node(
                "3",
                "Neural Networks",
                ContentKind::Presentation,
                "Slides on backpropagation and network architectures.",
                "https://example.org/slides/neural-networks",
            ),
            node(
                "4",
                "Data Visualization",
                ContentKind::Github,
                "Chart and graph rendering experiments.",
                "https://github.com/example/data-viz",
            ),
            node(
                "5",
                "Component Library",
                ContentKind::Github,
                "Reusable UI building blocks powering the portfolio site.",
                "https://github.com/example/components",
            ),
            node(
                "6",
                "Portfolio Design",
                ContentKind::Article,
                "Notes on designing a knowledge-graph-shaped portfolio.",
                "https://example.org/articles/portfolio-design",
            ),
            node(
                "7",
                "Force Layout Tutorial",
                ContentKind::Video,
                "Building a force-directed layout from first principles.",
                "https://example.org/videos/force-layout",
            ),
            node(
                "8",
                "Graph Theory",
                ContentKind::Presentation,
                "Primer on nodes, edges, and why everything is a graph.",
                "https://example.org/slides/graph-theory",
            ),
        ],
        links: vec![
            link("1", "2"),
            link("2", "3"),
            link("4", "5"),
            link("4", "6"),
            link("4", "7"),
            link("7", "8"),
        ],
    }
}
