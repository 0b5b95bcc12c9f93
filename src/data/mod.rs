mod hubs;
mod links;
mod load;
mod model;
mod parse;

pub use load::load_bucket_graph;
pub use model::{BucketGraph, Entry, Hub, HubKind, Link, NodeRef};
