// Two properties cannot claim the same wire name.

use graph_serialization::AdditionalData;
use graph_serialization_macros::GraphModel;

#[derive(GraphModel)]
pub struct Location {
    #[graph(additional_data)]
    additional_data: AdditionalData,
    app_id: Option<String>,
    #[graph(rename = "appId")]
    application: Option<String>,
}

fn main() {}
