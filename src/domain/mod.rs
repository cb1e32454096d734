//! Domain layer: the catalog tree and its operations
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod node;

pub use node::Node;
