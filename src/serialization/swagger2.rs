#![deny(missing_docs)]

//! # Swagger 2.0 Rule Selection
//!
//! Maps `collectionFormat` onto the encoder catalog. Only non-body
//! collection parameters are encoded; `multi` stays a sequence because the
//! transport layer repeats the parameter natively.

use crate::params::{CollectionFormat, ParamKind, ParamLocation, ParameterDefinition};
use crate::serialization::{Encoder, Serializer};

/// Builds the serializer for one operation's parameter definitions, in
/// declaration order. `None` when no parameter needs encoding.
pub fn serializer(definitions: &[ParameterDefinition]) -> Option<Serializer> {
    Serializer::from_encoders(definitions.iter().filter_map(encoder_for).collect())
}

/// Selects the encoder for a single definition, if any applies.
pub fn encoder_for(definition: &ParameterDefinition) -> Option<Encoder> {
    if definition.location == ParamLocation::Body {
        return None;
    }
    if !matches!(
        definition.kind,
        Some(ParamKind::Array) | Some(ParamKind::Object)
    ) {
        return None;
    }
    let delimiter = match definition.collection_format.unwrap_or_default() {
        CollectionFormat::Csv => ",",
        CollectionFormat::Ssv => " ",
        CollectionFormat::Tsv => "\t",
        CollectionFormat::Pipes => "|",
        // Left as a sequence; repeated on the wire by the transport layer.
        CollectionFormat::Multi => return None,
    };
    Some(Encoder::Delimited {
        name: definition.name.clone(),
        delimiter,
    })
}
