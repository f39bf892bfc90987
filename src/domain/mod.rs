// Domain layer: hall aggregate, value objects and the repository port. No I/O here.

pub mod hall;
pub mod model;
pub mod ports;
pub mod reservation;
