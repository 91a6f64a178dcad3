//! Infrastructure layer: persistence over the external store.

pub mod persistence;
