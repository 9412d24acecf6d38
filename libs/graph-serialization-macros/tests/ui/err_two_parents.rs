// A model inherits from exactly one parent.

use graph_serialization_macros::GraphModel;

pub struct Entity;
pub struct Listener;

#[derive(GraphModel)]
pub struct InvokeListener {
    #[graph(parent)]
    entity: Entity,
    #[graph(parent)]
    listener: Listener,
}

fn main() {}
