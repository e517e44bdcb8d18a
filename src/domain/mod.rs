// Domain layer: the shopping-list model and the ports the core talks
// through. No terminal or filesystem code here.

pub mod model;
pub mod ports;
