// Variants are matched on the model's own tag, not a renamed wire value.

use graph_serialization_macros::GraphPolymorphic;

pub struct Listener;
pub struct InvokeListener;

#[derive(GraphPolymorphic)]
pub enum ListenerKind {
    #[graph(base)]
    Listener(Listener),
    #[graph(rename = "#microsoft.graph.invokeUserFlowListener")]
    Invoke(InvokeListener),
}

fn main() {}
