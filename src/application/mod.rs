//! Application layer - Use cases and orchestration

pub mod load_schema;
pub mod resolve;

pub use load_schema::{load_schema, SchemaOptions};
pub use resolve::{ResolveOptions, ResolveService, ScalarReport};
