// Domain layer: clinic models and the ports (traits) the core is written against.

pub mod model;
pub mod ports;
