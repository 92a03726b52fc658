// Domain layer: the league data model and the ports backends implement.

pub mod model;
pub mod ports;
