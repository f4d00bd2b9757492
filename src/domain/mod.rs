// Domain layer: plain data for conversions and grades, plus the activity port.

pub mod model;
pub mod ports;
