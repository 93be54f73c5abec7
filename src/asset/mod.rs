//! Asset discovery, combination and minification.

mod combine;
mod discover;
mod header;
mod kind;
pub mod minify;
mod write;

// Types
pub use kind::{CompileKind, CompileScope};

// Pipeline stages
pub use combine::combine_sources;
pub use discover::discover_files;
pub use header::build_header;
pub use write::write_artifact;
