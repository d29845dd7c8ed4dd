#![deny(missing_docs)]

//! # Paramwire
//!
//! Serializes generated parameter values into the wire representation
//! required by OpenAPI 3.x `style`/`explode` rules and Swagger 2.0
//! `collectionFormat` rules.
//!
//! Rule selection is pure and total: every parameter definition selects at
//! most one encoder, and unrecognized combinations select none, so the
//! generated value passes through unchanged. Percent-encoding and request
//! construction are transport-layer concerns and happen after this crate.

/// Shared error types.
pub mod error;

/// Parameter definition model and raw-document parsing.
pub mod params;

/// Rule selection, encoder catalog, and serializer composition.
pub mod serialization;

pub use error::{AppError, AppResult};
pub use params::{
    definitions_from_value, definitions_from_yaml, CollectionFormat, ParamKind, ParamLocation,
    ParamStyle, ParameterDefinition,
};
pub use serialization::{Encoder, Generated, Serializer};
