// The fallback variant has to be named.

use graph_serialization_macros::GraphPolymorphic;

pub struct Listener;
pub struct InvokeListener;

#[derive(GraphPolymorphic)]
pub enum ListenerKind {
    Listener(Listener),
    Invoke(InvokeListener),
}

fn main() {}
