// Unmatched wire fields are kept by the root of the hierarchy only.

use graph_serialization::AdditionalData;
use graph_serialization_macros::GraphModel;

pub struct Entity;

#[derive(GraphModel)]
pub struct Script {
    #[graph(parent)]
    entity: Entity,
    #[graph(additional_data)]
    extra: AdditionalData,
    display_name: Option<String>,
}

fn main() {}
