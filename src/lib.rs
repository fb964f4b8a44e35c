//! yamltag - YAML implicit tag resolution
//!
//! Decides which tag an untagged node carries and, for scalars, which
//! primitive value it represents. Schemas (failsafe, JSON, core and an
//! extended YAML 1.1 flavor) are built once, sealed, and then shared
//! read-only across any number of resolution calls.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::YamlTagError;
