// Domain layer: catalog entities and the ports they talk through. No I/O here.

pub mod category;
pub mod counters;
pub mod iterator;
pub mod model;
pub mod order;
pub mod ports;
pub mod price;
