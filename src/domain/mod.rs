// Domain layer: markers, conversion records and the collaborator ports.

pub mod model;
pub mod ports;
