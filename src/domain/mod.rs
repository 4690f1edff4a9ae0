// Domain layer: catalog and loan models plus the ports implemented by adapters.

pub mod loan;
pub mod model;
pub mod ports;
