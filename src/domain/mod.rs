// Domain layer: patient records, aggregate results and the ports the core talks through.

pub mod model;
pub mod ports;
