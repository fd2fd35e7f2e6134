// Domain layer: basketball models and the ports (traits) the host platform fills in.

pub mod model;
pub mod ports;
