mod graph;
mod load;
mod sample;

pub use graph::{ContentKind, ContentRecord, GraphData, LinkRecord};
pub use load::load_graph_data;
pub use sample::sample_graph;
