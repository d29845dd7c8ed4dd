#![deny(missing_docs)]

//! # OpenAPI 3.x Rule Selection
//!
//! Maps (location, type, style, explode) onto the encoder catalog, per the
//! serialization rules of the OpenAPI 3.x specification. Branches are
//! mutually exclusive per parameter: each definition selects at most one
//! encoder, and any combination outside the rules selects none, leaving the
//! generated value untouched.

use crate::params::{ParamKind, ParamLocation, ParamStyle, ParameterDefinition};
use crate::serialization::{Encoder, Serializer};

/// Builds the serializer for one operation's parameter definitions, in
/// declaration order. `None` when no parameter needs encoding.
pub fn serializer(definitions: &[ParameterDefinition]) -> Option<Serializer> {
    Serializer::from_encoders(definitions.iter().filter_map(encoder_for).collect())
}

/// Selects the encoder for a single definition, if any applies.
pub fn encoder_for(definition: &ParameterDefinition) -> Option<Encoder> {
    match definition.location {
        ParamLocation::Path => path_encoder(definition),
        ParamLocation::Query => query_encoder(definition),
        ParamLocation::Header => header_encoder(definition),
        ParamLocation::Cookie => cookie_encoder(definition),
        ParamLocation::Body | ParamLocation::FormData => None,
    }
}

fn path_encoder(definition: &ParameterDefinition) -> Option<Encoder> {
    let name = &definition.name;
    let explode = definition.explode.unwrap_or(false);
    match (definition.style?, definition.kind?) {
        (ParamStyle::Simple, ParamKind::Array) => Some(Encoder::Delimited {
            name: name.clone(),
            delimiter: ",",
        }),
        // Simple objects require an explicit explode flag.
        (ParamStyle::Simple, ParamKind::Object) => match definition.explode {
            Some(false) => Some(Encoder::CommaDelimitedObject { name: name.clone() }),
            Some(true) => Some(Encoder::DelimitedObject { name: name.clone() }),
            None => None,
        },
        (ParamStyle::Label, ParamKind::Array) => Some(Encoder::LabelArray {
            name: name.clone(),
            explode,
        }),
        (ParamStyle::Label, ParamKind::Object) => Some(Encoder::LabelObject {
            name: name.clone(),
            explode,
        }),
        (ParamStyle::Matrix, ParamKind::Array) => Some(Encoder::MatrixArray {
            name: name.clone(),
            explode,
        }),
        (ParamStyle::Matrix, ParamKind::Object) => Some(Encoder::MatrixObject {
            name: name.clone(),
            explode,
        }),
        _ => None,
    }
}

fn query_encoder(definition: &ParameterDefinition) -> Option<Encoder> {
    let name = &definition.name;
    match definition.kind? {
        ParamKind::Object => match definition.style {
            Some(ParamStyle::DeepObject) => Some(Encoder::DeepObject { name: name.clone() }),
            // "form" is the default query style.
            None | Some(ParamStyle::Form) => match definition.explode {
                Some(false) => Some(Encoder::CommaDelimitedObject { name: name.clone() }),
                Some(true) => Some(Encoder::ExtractedObject { name: name.clone() }),
                None => None,
            },
            _ => None,
        },
        ParamKind::Array => {
            // Exploded arrays stay as sequences; the transport layer repeats
            // the parameter natively.
            if definition.explode != Some(false) {
                return None;
            }
            let delimiter = match definition.style {
                Some(ParamStyle::PipeDelimited) => "|",
                Some(ParamStyle::SpaceDelimited) => " ",
                None | Some(ParamStyle::Form) => ",",
                _ => return None,
            };
            Some(Encoder::Delimited {
                name: name.clone(),
                delimiter,
            })
        }
        ParamKind::Scalar => None,
    }
}

fn header_encoder(definition: &ParameterDefinition) -> Option<Encoder> {
    let name = &definition.name;
    // Header parameters always use the "simple" style, comma-separated.
    match definition.kind? {
        ParamKind::Array => Some(Encoder::Delimited {
            name: name.clone(),
            delimiter: ",",
        }),
        ParamKind::Object => match definition.explode {
            Some(false) => Some(Encoder::CommaDelimitedObject { name: name.clone() }),
            Some(true) => Some(Encoder::DelimitedObject { name: name.clone() }),
            None => None,
        },
        ParamKind::Scalar => None,
    }
}

fn cookie_encoder(definition: &ParameterDefinition) -> Option<Encoder> {
    let name = &definition.name;
    let kind = definition.kind?;
    // Cookie parameters always use the "form" style. A cookie cannot carry
    // multiple values for one name, so exploded collections have no wire
    // representation and the parameter is removed.
    if definition.explode == Some(true) && matches!(kind, ParamKind::Array | ParamKind::Object) {
        return Some(Encoder::Drop { name: name.clone() });
    }
    if definition.explode == Some(false) {
        return match kind {
            ParamKind::Array => Some(Encoder::Delimited {
                name: name.clone(),
                delimiter: ",",
            }),
            ParamKind::Object => Some(Encoder::CommaDelimitedObject { name: name.clone() }),
            ParamKind::Scalar => None,
        };
    }
    None
}
