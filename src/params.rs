#![deny(missing_docs)]

//! # Parameter Definitions
//!
//! Typed model of a declared request parameter, plus the raw shim used to
//! parse definitions out of OpenAPI 3.x / Swagger 2.0 documents. The shim
//! accepts both field sets (OAS 3.x `schema`/`style`/`explode` and legacy
//! Swagger 2.0 `type`/`collectionFormat`) in a single struct and converts
//! strictly: unrecognized `in`, `style` or `collectionFormat` strings are
//! boundary errors, not silent pass-throughs.

use crate::error::{AppError, AppResult};
use serde::Deserialize;
use serde_json::Value as JsonValue;

/// The wire location of a parameter (the `in` field).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamLocation {
    /// Path.
    Path,
    /// Query.
    Query,
    /// Header.
    Header,
    /// Cookie.
    Cookie,
    /// Request body (legacy Swagger 2.0).
    Body,
    /// Form data (legacy Swagger 2.0).
    FormData,
}

/// The declared shape of a parameter value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    /// An ordered sequence of scalars.
    Array,
    /// A mapping of field name to scalar.
    Object,
    /// A single string/number/boolean.
    Scalar,
}

/// Parameter serialization style (OAS 3.x).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamStyle {
    /// `matrix`
    Matrix,
    /// `label`
    Label,
    /// `form`
    Form,
    /// `simple`
    Simple,
    /// `spaceDelimited`
    SpaceDelimited,
    /// `pipeDelimited`
    PipeDelimited,
    /// `deepObject`
    DeepObject,
}

/// Collection format (Swagger 2.0). The spec default is `csv`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CollectionFormat {
    /// Comma-separated values.
    #[default]
    Csv,
    /// Space-separated values.
    Ssv,
    /// Tab-separated values.
    Tsv,
    /// Pipe-separated values.
    Pipes,
    /// Repeated parameter instances; handled natively by the transport layer.
    Multi,
}

/// A declared request parameter, as consumed by the rule selectors.
///
/// Instances are immutable; construct them directly or via the raw-document
/// conversions below.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterDefinition {
    /// Parameter name, unique within its location for one operation.
    pub name: String,
    /// Wire location.
    pub location: ParamLocation,
    /// Declared value shape; `None` when the definition carries no type.
    pub kind: Option<ParamKind>,
    /// Serialization style (OAS 3.x only).
    pub style: Option<ParamStyle>,
    /// Explode modifier (OAS 3.x only); tri-state per the spec.
    pub explode: Option<bool>,
    /// Collection format (Swagger 2.0 only).
    pub collection_format: Option<CollectionFormat>,
}

/// A local shim for Parameter to ensure robust parsing of fields.
/// Accepts OAS 3.x style fields and OAS 2.0 `type`/`collectionFormat`.
#[derive(Debug, Clone, Deserialize)]
struct RawParameter {
    name: String,
    #[serde(rename = "in")]
    parameter_in: String,
    /// Legacy Swagger 2.0 primitive type (e.g. string, array).
    #[serde(rename = "type")]
    schema_type: Option<String>,
    /// OAS 3.x schema; only the `type` field matters here.
    schema: Option<RawSchema>,
    style: Option<String>,
    explode: Option<bool>,
    #[serde(rename = "collectionFormat")]
    collection_format: Option<String>,
}

/// Schema subset carrying the declared type.
#[derive(Debug, Clone, Deserialize)]
struct RawSchema {
    #[serde(rename = "type")]
    schema_type: Option<String>,
}

impl ParameterDefinition {
    /// Parses a single parameter object from a JSON fragment.
    pub fn from_value(value: &JsonValue) -> AppResult<Self> {
        let raw: RawParameter =
            serde_json::from_value(value.clone()).map_err(|e| AppError::Parse(e.to_string()))?;
        from_raw(raw)
    }
}

/// Parses a JSON array of parameter objects, preserving declaration order.
pub fn definitions_from_value(value: &JsonValue) -> AppResult<Vec<ParameterDefinition>> {
    let raws: Vec<RawParameter> =
        serde_json::from_value(value.clone()).map_err(|e| AppError::Parse(e.to_string()))?;
    raws.into_iter().map(from_raw).collect()
}

/// Parses a YAML parameter list (the `parameters:` block of an operation),
/// preserving declaration order.
pub fn definitions_from_yaml(text: &str) -> AppResult<Vec<ParameterDefinition>> {
    let raws: Vec<RawParameter> =
        serde_yaml::from_str(text).map_err(|e| AppError::Parse(e.to_string()))?;
    raws.into_iter().map(from_raw).collect()
}

/// Converts a parsed shim into the typed definition, validating enumerated
/// string fields.
fn from_raw(raw: RawParameter) -> AppResult<ParameterDefinition> {
    let location = match raw.parameter_in.as_str() {
        "path" => ParamLocation::Path,
        "query" => ParamLocation::Query,
        "header" => ParamLocation::Header,
        "cookie" => ParamLocation::Cookie,
        "body" => ParamLocation::Body,
        "formData" => ParamLocation::FormData,
        other => {
            return Err(AppError::General(format!(
                "Parameter '{}' has unsupported location '{}'",
                raw.name, other
            )))
        }
    };

    // OAS 3.x type lives under `schema`; Swagger 2.0 declares it top-level.
    let declared_type = raw
        .schema
        .and_then(|s| s.schema_type)
        .or(raw.schema_type);
    let kind = declared_type.map(|t| match t.as_str() {
        "array" => ParamKind::Array,
        "object" => ParamKind::Object,
        _ => ParamKind::Scalar,
    });

    let style = match raw.style.as_deref() {
        None => None,
        Some("matrix") => Some(ParamStyle::Matrix),
        Some("label") => Some(ParamStyle::Label),
        Some("form") => Some(ParamStyle::Form),
        Some("simple") => Some(ParamStyle::Simple),
        Some("spaceDelimited") => Some(ParamStyle::SpaceDelimited),
        Some("pipeDelimited") => Some(ParamStyle::PipeDelimited),
        Some("deepObject") => Some(ParamStyle::DeepObject),
        Some(other) => {
            return Err(AppError::General(format!(
                "Parameter '{}' has unsupported style '{}'",
                raw.name, other
            )))
        }
    };

    let collection_format = match raw.collection_format.as_deref() {
        None => None,
        Some("csv") => Some(CollectionFormat::Csv),
        Some("ssv") => Some(CollectionFormat::Ssv),
        Some("tsv") => Some(CollectionFormat::Tsv),
        Some("pipes") => Some(CollectionFormat::Pipes),
        Some("multi") => Some(CollectionFormat::Multi),
        Some(other) => {
            return Err(AppError::General(format!(
                "Parameter '{}' has unsupported collectionFormat '{}'",
                raw.name, other
            )))
        }
    };

    Ok(ParameterDefinition {
        name: raw.name,
        location,
        kind,
        style,
        explode: raw.explode,
        collection_format,
    })
}
