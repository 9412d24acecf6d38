use graph_serialization::{AdditionalData, Model};
use graph_serialization_macros::{GraphModel, GraphPolymorphic};

#[derive(GraphModel)]
pub struct Event {
    #[graph(additional_data)]
    additional_data: AdditionalData,
    id: Option<String>,
    odata_type: Option<String>,
}

#[derive(GraphModel)]
#[graph(odata_type = "#test.enrollmentEvent")]
pub struct EnrollmentEvent {
    #[graph(parent)]
    event: Event,
    device_name: Option<String>,
}

#[derive(GraphModel)]
#[graph(odata_type = "#test.lateEnrollmentEvent")]
pub struct LateEnrollmentEvent {
    #[graph(parent)]
    enrollment: EnrollmentEvent,
    delay_minutes: Option<i64>,
}

#[derive(GraphPolymorphic)]
pub enum EventKind {
    #[graph(base)]
    Event(Event),
    Enrollment(EnrollmentEvent),
    LateEnrollment(LateEnrollmentEvent),
}

fn main() {
    let late = LateEnrollmentEvent::new();
    let _: Option<&str> = late.id();
    let _: Option<&str> = late.device_name();
    let _: usize = LateEnrollmentEvent::field_deserializers().len();
    let kind = EventKind::from(late);
    let _: &Event = kind.base();
}
