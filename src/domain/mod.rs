// Domain layer: core models, report shapes and ports (interfaces).

pub mod model;
pub mod ports;
pub mod reports;
