// Adapters layer: concrete implementations for external systems. The only
// external system here is the local filesystem.

pub mod fs;
