#![deny(missing_docs)]

//! # Encoder Catalog
//!
//! The closed set of wire-encoding transformations selected by the rule
//! selectors. Each encoder owns exactly one parameter name and rewrites only
//! that key of the generated value mapping; a missing owned key is a no-op.
//! A value whose shape does not match the encoder's variant (e.g. an array
//! encoder over a scalar) is also left untouched, since this core never
//! validates generated values against their schema.

use serde_json::{Map, Value};

/// An insertion-ordered mapping of parameter name to generated value.
///
/// Insertion order is load-bearing: `CommaDelimitedObject` and
/// `DelimitedObject` emit fields in the object's insertion order, and the
/// `preserve_order` feature of `serde_json` guarantees it.
pub type Generated = Map<String, Value>;

/// A single wire-encoding step, identified by (kind, owned name, payload).
///
/// Encoders are plain data; the transformation lives in [`Encoder::apply`],
/// one exhaustive match over the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Encoder {
    /// Joins array elements with a delimiter (`csv`, `ssv`, `tsv`, `pipes`,
    /// and the non-exploded `form`/`simple`/`pipeDelimited`/`spaceDelimited`
    /// array styles).
    Delimited {
        /// Owned parameter name.
        name: String,
        /// Join delimiter.
        delimiter: &'static str,
    },
    /// Expands an object into `name[field]=value` entries (`deepObject`).
    DeepObject {
        /// Owned parameter name.
        name: String,
    },
    /// Joins object fields as `k,v,k,v,…` with commas (non-exploded objects).
    CommaDelimitedObject {
        /// Owned parameter name.
        name: String,
    },
    /// Joins object fields as `k=v` pairs with commas (exploded `simple`
    /// objects).
    DelimitedObject {
        /// Owned parameter name.
        name: String,
    },
    /// Lifts each object field to a top-level key (exploded `form` objects).
    /// A field colliding with an existing key overwrites it (last write
    /// wins).
    ExtractedObject {
        /// Owned parameter name.
        name: String,
    },
    /// `label` style arrays: `.`-prefixed, `.`-joined when exploded and
    /// `,`-joined otherwise.
    LabelArray {
        /// Owned parameter name.
        name: String,
        /// Explode modifier.
        explode: bool,
    },
    /// `label` style objects: `.`-prefixed, `k=v` pairs `.`-joined when
    /// exploded and `k,v,…` `,`-joined otherwise.
    LabelObject {
        /// Owned parameter name.
        name: String,
        /// Explode modifier.
        explode: bool,
    },
    /// `matrix` style arrays: `;`-prefixed, `name=value` pairs `;`-joined
    /// when exploded and `,`-joined values otherwise.
    MatrixArray {
        /// Owned parameter name.
        name: String,
        /// Explode modifier.
        explode: bool,
    },
    /// `matrix` style objects: `;`-prefixed, `k=v` pairs `;`-joined when
    /// exploded and `k,v,…` `,`-joined otherwise.
    MatrixObject {
        /// Owned parameter name.
        name: String,
        /// Explode modifier.
        explode: bool,
    },
    /// Removes the key unconditionally (exploded cookie collections have no
    /// single-value wire representation).
    Drop {
        /// Owned parameter name.
        name: String,
    },
}

impl Encoder {
    /// The parameter name this encoder owns; the only key it may touch.
    pub fn owned_name(&self) -> &str {
        match self {
            Encoder::Delimited { name, .. }
            | Encoder::DeepObject { name }
            | Encoder::CommaDelimitedObject { name }
            | Encoder::DelimitedObject { name }
            | Encoder::ExtractedObject { name }
            | Encoder::LabelArray { name, .. }
            | Encoder::LabelObject { name, .. }
            | Encoder::MatrixArray { name, .. }
            | Encoder::MatrixObject { name, .. }
            | Encoder::Drop { name } => name,
        }
    }

    /// Applies the transformation to `values` in place.
    pub fn apply(&self, values: &mut Generated) {
        match self {
            Encoder::Delimited { name, delimiter } => {
                if let Some(joined) = values.get(name).and_then(|v| join_array(v, delimiter)) {
                    values.insert(name.clone(), Value::String(joined));
                }
            }
            Encoder::DeepObject { name } => {
                let fields = match values.get(name).and_then(Value::as_object) {
                    Some(map) => map.clone(),
                    None => return,
                };
                values.shift_remove(name);
                for (key, value) in fields {
                    values.insert(format!("{}[{}]", name, key), value);
                }
            }
            Encoder::CommaDelimitedObject { name } => {
                if let Some(joined) = values.get(name).and_then(flat_join_object) {
                    values.insert(name.clone(), Value::String(joined));
                }
            }
            Encoder::DelimitedObject { name } => {
                if let Some(joined) = values.get(name).and_then(|v| pair_join_object(v, ",")) {
                    values.insert(name.clone(), Value::String(joined));
                }
            }
            Encoder::ExtractedObject { name } => {
                let fields = match values.get(name).and_then(Value::as_object) {
                    Some(map) => map.clone(),
                    None => return,
                };
                values.shift_remove(name);
                for (key, value) in fields {
                    values.insert(key, value);
                }
            }
            Encoder::LabelArray { name, explode } => {
                let delimiter = if *explode { "." } else { "," };
                if let Some(joined) = values.get(name).and_then(|v| join_array(v, delimiter)) {
                    values.insert(name.clone(), Value::String(format!(".{}", joined)));
                }
            }
            Encoder::LabelObject { name, explode } => {
                let joined = if *explode {
                    values.get(name).and_then(|v| pair_join_object(v, "."))
                } else {
                    values.get(name).and_then(flat_join_object)
                };
                if let Some(joined) = joined {
                    values.insert(name.clone(), Value::String(format!(".{}", joined)));
                }
            }
            Encoder::MatrixArray { name, explode } => {
                let joined = if *explode {
                    values.get(name).and_then(Value::as_array).map(|items| {
                        items
                            .iter()
                            .map(|v| format!("{}={}", name, scalar_to_string(v)))
                            .collect::<Vec<_>>()
                            .join(";")
                    })
                } else {
                    values.get(name).and_then(|v| join_array(v, ","))
                };
                if let Some(joined) = joined {
                    values.insert(name.clone(), Value::String(format!(";{}", joined)));
                }
            }
            Encoder::MatrixObject { name, explode } => {
                let joined = if *explode {
                    values.get(name).and_then(|v| pair_join_object(v, ";"))
                } else {
                    values.get(name).and_then(flat_join_object)
                };
                if let Some(joined) = joined {
                    values.insert(name.clone(), Value::String(format!(";{}", joined)));
                }
            }
            Encoder::Drop { name } => {
                values.shift_remove(name);
            }
        }
    }
}

/// Renders a scalar without JSON string quoting.
fn scalar_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Joins array elements with `delimiter`; `None` when the value is not an
/// array.
fn join_array(value: &Value, delimiter: &str) -> Option<String> {
    let items = value.as_array()?;
    Some(
        items
            .iter()
            .map(scalar_to_string)
            .collect::<Vec<_>>()
            .join(delimiter),
    )
}

/// Joins object fields as interleaved `k,v,k,v,…`; `None` when the value is
/// not an object. Field order is the object's insertion order.
fn flat_join_object(value: &Value) -> Option<String> {
    let fields = value.as_object()?;
    Some(
        fields
            .iter()
            .flat_map(|(key, value)| [key.clone(), scalar_to_string(value)])
            .collect::<Vec<_>>()
            .join(","),
    )
}

/// Joins object fields as `key=value` pairs with `delimiter`; `None` when
/// the value is not an object.
fn pair_join_object(value: &Value, delimiter: &str) -> Option<String> {
    let fields = value.as_object()?;
    Some(
        fields
            .iter()
            .map(|(key, value)| format!("{}={}", key, scalar_to_string(value)))
            .collect::<Vec<_>>()
            .join(delimiter),
    )
}
