// Schema enumerations are plain names on the wire.

use graph_serialization_macros::GraphEnum;

#[derive(GraphEnum)]
pub enum RunAsAccount {
    System,
    User(String),
}

fn main() {}
