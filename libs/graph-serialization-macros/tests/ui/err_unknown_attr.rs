// Unknown keys inside #[graph(...)] are reported where they appear.

use graph_serialization::AdditionalData;
use graph_serialization_macros::GraphModel;

#[derive(GraphModel)]
pub struct Location {
    #[graph(additional_data)]
    additional_data: AdditionalData,
    #[graph(flatten)]
    app_id: Option<String>,
}

fn main() {}
