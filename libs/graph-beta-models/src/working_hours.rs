use chrono::NaiveTime;
use graph_serialization::AdditionalData;
use graph_serialization_macros::{GraphEnum, GraphModel};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, GraphEnum)]
pub enum DayOfWeek {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

/// The days and hours a user works.
#[derive(Debug, Clone, PartialEq, GraphModel)]
pub struct WorkingHours {
    #[graph(additional_data)]
    additional_data: AdditionalData,
    days_of_week: Option<Vec<DayOfWeek>>,
    end_time: Option<NaiveTime>,
    odata_type: Option<String>,
    start_time: Option<NaiveTime>,
}
