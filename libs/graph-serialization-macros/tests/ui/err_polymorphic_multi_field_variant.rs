// Each variant wraps a single model.

use graph_serialization_macros::GraphPolymorphic;

pub struct Listener;
pub struct InvokeListener;

#[derive(GraphPolymorphic)]
pub enum ListenerKind {
    #[graph(base)]
    Listener(Listener),
    Invoke(InvokeListener, Listener),
}

fn main() {}
