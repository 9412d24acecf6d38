use graph_serialization::AdditionalData;
use graph_serialization_macros::GraphModel;

use crate::collection::collection_response;

/// Where an application keeps its data, per domain.
#[derive(Debug, Clone, PartialEq, GraphModel)]
pub struct AppDataLocation {
    #[graph(additional_data)]
    additional_data: AdditionalData,
    app_id: Option<String>,
    domain: Option<String>,
    is_default: Option<bool>,
    location: Option<String>,
    odata_type: Option<String>,
}

collection_response!(AppDataLocationCollectionResponse => AppDataLocation);
