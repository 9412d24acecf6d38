//! Paged list envelopes.
//!
//! Every `*CollectionResponse` embeds [`BaseCollectionPaginationCountResponse`]
//! and adds a single `value` list whose wire order is kept as-is.

use graph_serialization::AdditionalData;
use graph_serialization_macros::GraphModel;

#[derive(Debug, Clone, PartialEq, GraphModel)]
pub struct BaseCollectionPaginationCountResponse {
    #[graph(additional_data)]
    additional_data: AdditionalData,
    #[graph(rename = "@odata.count")]
    odata_count: Option<i64>,
    #[graph(rename = "@odata.nextLink")]
    odata_next_link: Option<String>,
}

/// Declare a collection response holding items of one model type.
macro_rules! collection_response {
    ($(#[$meta:meta])* $name:ident => $item:ty) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, ::graph_serialization_macros::GraphModel)]
        pub struct $name {
            #[graph(parent)]
            base: crate::collection::BaseCollectionPaginationCountResponse,
            value: Option<Vec<$item>>,
        }
    };
}

pub(crate) use collection_response;
