#![deny(missing_docs)]

//! # Wire Serialization Module
//!
//! - **encoders**: the closed catalog of encoding transformations.
//! - **openapi3**: rule selection for OpenAPI 3.x `style`/`explode`.
//! - **swagger2**: rule selection for Swagger 2.0 `collectionFormat`.
//!
//! Rule selection happens once per operation (the inputs are immutable);
//! the resulting [`Serializer`] is applied once per generated value mapping,
//! just before request construction.

pub mod encoders;
pub mod openapi3;
pub mod swagger2;

pub use encoders::{Encoder, Generated};

/// An ordered sequence of encoders folded into one transformation.
///
/// "No serializer" is represented as `Option<Serializer>::None` by the rule
/// selectors, never as an empty `Serializer`, so callers can skip the step
/// entirely. Application order is declaration order; it is observably
/// irrelevant because selected encoders own disjoint keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Serializer {
    encoders: Vec<Encoder>,
}

impl Serializer {
    /// Wraps a selection result; `None` when no encoder was selected.
    pub(crate) fn from_encoders(encoders: Vec<Encoder>) -> Option<Self> {
        if encoders.is_empty() {
            None
        } else {
            Some(Serializer { encoders })
        }
    }

    /// The selected encoders, in declaration order.
    pub fn encoders(&self) -> &[Encoder] {
        &self.encoders
    }

    /// Applies every encoder to `values` in place.
    ///
    /// Reentrant: holds no state beyond the encoder list, so one
    /// `Serializer` may be reused across threads as long as each call gets
    /// its own mapping.
    pub fn apply(&self, values: &mut Generated) {
        for encoder in &self.encoders {
            encoder.apply(values);
        }
    }
}
