// Domain layer: subscription data model. No dependencies beyond std/serde.

pub mod model;
