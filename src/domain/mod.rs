// Domain layer: value types shared with the calculation engine.

pub mod model;
