// Domain layer: patch rules, outcomes, and the ports the engine talks through.

pub mod model;
pub mod ports;
