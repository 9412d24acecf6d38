// Every property must be optional so that "unset" has a representation.

use graph_serialization::AdditionalData;
use graph_serialization_macros::GraphModel;

#[derive(GraphModel)]
pub struct Location {
    #[graph(additional_data)]
    additional_data: AdditionalData,
    app_id: String,
}

fn main() {}
