use chrono::{DateTime, FixedOffset, NaiveDate};
use graph_serialization_macros::GraphModel;
use uuid::Uuid;

use crate::collection::collection_response;
use crate::entity::Entity;

/// A payment line in a Dynamics 365 Business Central journal.
#[derive(Debug, Clone, PartialEq, GraphModel)]
#[graph(odata_type = "#microsoft.graph.customerPayment")]
pub struct CustomerPayment {
    #[graph(parent)]
    entity: Entity,
    amount: Option<f64>,
    applies_to_invoice_id: Option<Uuid>,
    applies_to_invoice_number: Option<String>,
    comment: Option<String>,
    contact_id: Option<String>,
    customer_id: Option<Uuid>,
    customer_number: Option<String>,
    description: Option<String>,
    document_number: Option<String>,
    external_document_number: Option<String>,
    journal_display_name: Option<String>,
    last_modified_date_time: Option<DateTime<FixedOffset>>,
    line_number: Option<i32>,
    posting_date: Option<NaiveDate>,
}

collection_response!(CustomerPaymentCollectionResponse => CustomerPayment);
