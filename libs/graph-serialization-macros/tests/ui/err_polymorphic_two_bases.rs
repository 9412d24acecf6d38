// Only one variant can be the fallback.

use graph_serialization_macros::GraphPolymorphic;

pub struct Listener;
pub struct InvokeListener;

#[derive(GraphPolymorphic)]
pub enum ListenerKind {
    #[graph(base)]
    Listener(Listener),
    #[graph(base)]
    Invoke(InvokeListener),
}

fn main() {}
