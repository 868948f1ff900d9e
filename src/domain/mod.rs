// Domain layer: customer records and the sink port. No I/O here.

pub mod model;
pub mod ports;
