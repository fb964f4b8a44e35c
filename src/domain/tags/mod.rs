//! Tag spellings and the alias registry

pub mod alias;
pub mod registry;

// Re-export main types
pub use alias::TagAlias;
pub use registry::TagRegistry;
