//! Application layer: service orchestration over the domain repositories.

pub mod services;
