// A model must either inherit or hold the additional data itself.

use graph_serialization_macros::GraphModel;

#[derive(GraphModel)]
pub struct Orphan {
    id: Option<String>,
}

fn main() {}
