//! Domain layer - Tags, node events and schema resolution

pub mod event;
pub mod rules;
pub mod schema;
pub mod tags;
pub mod value;

pub use event::{CollectionStart, NodeEvent, Scalar, ScalarStyle};
pub use schema::{Schema, SchemaBuilder, SchemaChain, SchemaKind, TagResolver};
pub use tags::{TagAlias, TagRegistry};
pub use value::{Resolution, ResolvedScalar, ScalarValue};
