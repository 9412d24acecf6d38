use graph_serialization::AdditionalData;
use graph_serialization_macros::GraphModel;

#[derive(GraphModel)]
pub struct Location {
    #[graph(additional_data)]
    additional_data: AdditionalData,
    app_id: Option<String>,
    is_default: Option<bool>,
    odata_type: Option<String>,
}

fn main() {
    let location = Location::new();
    let _: Option<&str> = location.app_id();
    let _: Option<bool> = location.is_default();
}
