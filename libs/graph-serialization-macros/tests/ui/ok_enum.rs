use graph_serialization_macros::GraphEnum;

#[derive(Clone, Copy, GraphEnum)]
pub enum Weekday {
    Monday,
    #[graph(rename = "unknownFutureValue")]
    UnknownFutureValue,
}

fn main() {
    let _: Weekday = "monday".parse().unwrap_or(Weekday::UnknownFutureValue);
    let _ = Weekday::Monday.to_string();
}
