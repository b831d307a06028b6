// Domain layer: the layout table types, the build report and the filesystem port.

pub mod model;
pub mod ports;
