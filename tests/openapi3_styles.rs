//! End-to-end OpenAPI 3.x style/explode coverage, driven by YAML parameter
//! definitions. Expected values follow the examples at
//! <https://swagger.io/docs/specification/serialization/>.

use paramwire::serialization::openapi3;
use paramwire::{definitions_from_yaml, Generated};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

fn generated(value: Value) -> Generated {
    match value {
        Value::Object(map) => map,
        other => panic!("expected object, got {}", other),
    }
}

/// Parses definitions, builds the serializer, applies it once.
fn serialize(definitions_yaml: &str, values: Value) -> Generated {
    let definitions = definitions_from_yaml(definitions_yaml).unwrap();
    let mut values = generated(values);
    if let Some(serializer) = openapi3::serializer(&definitions) {
        serializer.apply(&mut values);
    }
    values
}

fn query_array_definition(style: &str, explode: bool) -> String {
    format!(
        r#"
- name: color
  in: query
  required: true
  schema:
    type: array
    items:
      type: string
  style: {}
  explode: {}
"#,
        style, explode
    )
}

fn query_object_definition(style: &str, explode: bool) -> String {
    format!(
        r#"
- name: color
  in: query
  required: true
  schema:
    type: object
  style: {}
  explode: {}
"#,
        style, explode
    )
}

fn color_array() -> Value {
    json!(["blue", "black", "brown"])
}

fn color_object() -> Value {
    json!({"r": 100, "g": 200, "b": 150})
}

#[test]
fn test_query_styles() {
    let cases = [
        (
            query_object_definition("deepObject", true),
            json!({"color": color_object()}),
            json!({"color[r]": 100, "color[g]": 200, "color[b]": 150}),
        ),
        (
            query_object_definition("form", true),
            json!({"color": color_object()}),
            json!({"r": 100, "g": 200, "b": 150}),
        ),
        (
            query_object_definition("form", false),
            json!({"color": color_object()}),
            json!({"color": "r,100,g,200,b,150"}),
        ),
        (
            query_array_definition("pipeDelimited", false),
            json!({"color": color_array()}),
            json!({"color": "blue|black|brown"}),
        ),
        (
            query_array_definition("pipeDelimited", true),
            json!({"color": color_array()}),
            json!({"color": color_array()}),
        ),
        (
            query_array_definition("spaceDelimited", false),
            json!({"color": color_array()}),
            json!({"color": "blue black brown"}),
        ),
        (
            query_array_definition("spaceDelimited", true),
            json!({"color": color_array()}),
            json!({"color": color_array()}),
        ),
        (
            query_array_definition("form", false),
            json!({"color": color_array()}),
            json!({"color": "blue,black,brown"}),
        ),
        (
            query_array_definition("form", true),
            json!({"color": color_array()}),
            json!({"color": color_array()}),
        ),
    ];
    for (definitions, values, expected) in cases {
        assert_eq!(serialize(&definitions, values), generated(expected));
    }
}

#[test]
fn test_header_styles() {
    // Headers always use the "simple" style; no style field is declared.
    let array_definition = r#"
- name: X-Api-Key
  in: header
  required: true
  schema:
    type: array
  explode: {explode}
"#;
    for explode in ["true", "false"] {
        let definitions = array_definition.replace("{explode}", explode);
        assert_eq!(
            serialize(&definitions, json!({"X-Api-Key": color_array()})),
            generated(json!({"X-Api-Key": "blue,black,brown"}))
        );
    }

    let object_definition = r#"
- name: X-Api-Key
  in: header
  required: true
  schema:
    type: object
  explode: {explode}
"#;
    assert_eq!(
        serialize(
            &object_definition.replace("{explode}", "true"),
            json!({"X-Api-Key": color_object()})
        ),
        generated(json!({"X-Api-Key": "r=100,g=200,b=150"}))
    );
    assert_eq!(
        serialize(
            &object_definition.replace("{explode}", "false"),
            json!({"X-Api-Key": color_object()})
        ),
        generated(json!({"X-Api-Key": "r,100,g,200,b,150"}))
    );
}

#[test]
fn test_cookie_styles() {
    let definition = |schema_type: &str, explode: bool| {
        format!(
            r#"
- name: SessionID
  in: cookie
  required: true
  schema:
    type: {}
  explode: {}
"#,
            schema_type, explode
        )
    };
    // Exploded collections have no cookie representation and are removed.
    assert_eq!(
        serialize(&definition("array", true), json!({"SessionID": color_array()})),
        generated(json!({}))
    );
    assert_eq!(
        serialize(
            &definition("object", true),
            json!({"SessionID": color_object()})
        ),
        generated(json!({}))
    );
    assert_eq!(
        serialize(
            &definition("array", false),
            json!({"SessionID": color_array()})
        ),
        generated(json!({"SessionID": "blue,black,brown"}))
    );
    assert_eq!(
        serialize(
            &definition("object", false),
            json!({"SessionID": color_object()})
        ),
        generated(json!({"SessionID": "r,100,g,200,b,150"}))
    );
}

#[test]
fn test_path_styles() {
    let definition = |schema_type: &str, style: &str, explode: bool| {
        format!(
            r#"
- name: color
  in: path
  required: true
  schema:
    type: {}
  style: {}
  explode: {}
"#,
            schema_type, style, explode
        )
    };
    let array_cases = [
        ("simple", false, "blue,black,brown"),
        ("simple", true, "blue,black,brown"),
        ("label", false, ".blue,black,brown"),
        ("label", true, ".blue.black.brown"),
        ("matrix", false, ";blue,black,brown"),
        ("matrix", true, ";color=blue;color=black;color=brown"),
    ];
    for (style, explode, expected) in array_cases {
        assert_eq!(
            serialize(
                &definition("array", style, explode),
                json!({"color": color_array()})
            ),
            generated(json!({"color": expected})),
            "array style {} explode {}",
            style,
            explode
        );
    }

    let object_cases = [
        ("simple", false, "r,100,g,200,b,150"),
        ("simple", true, "r=100,g=200,b=150"),
        ("label", false, ".r,100,g,200,b,150"),
        ("label", true, ".r=100.g=200.b=150"),
        ("matrix", false, ";r,100,g,200,b,150"),
        ("matrix", true, ";r=100;g=200;b=150"),
    ];
    for (style, explode, expected) in object_cases {
        assert_eq!(
            serialize(
                &definition("object", style, explode),
                json!({"color": color_object()})
            ),
            generated(json!({"color": expected})),
            "object style {} explode {}",
            style,
            explode
        );
    }
}

#[test]
fn test_multiple_query_parameters_do_not_interfere() {
    let definitions = r#"
- name: color1
  in: query
  required: true
  schema:
    type: array
  style: pipeDelimited
  explode: false
- name: color2
  in: query
  required: true
  schema:
    type: array
  style: spaceDelimited
  explode: false
"#;
    assert_eq!(
        serialize(
            definitions,
            json!({"color1": color_array(), "color2": color_array()})
        ),
        generated(json!({
            "color1": "blue|black|brown",
            "color2": "blue black brown"
        }))
    );
}

#[test]
fn test_optional_parameter_absent_from_values() {
    // Declared but not generated this run: the encoder is a no-op.
    let definitions = query_array_definition("pipeDelimited", false);
    assert_eq!(
        serialize(&definitions, json!({"other": "kept"})),
        generated(json!({"other": "kept"}))
    );
}

#[test]
fn test_scalar_parameters_pass_through() {
    let definitions = r#"
- name: user_id
  in: path
  required: true
  schema:
    type: integer
  style: simple
  explode: false
"#;
    assert_eq!(
        serialize(definitions, json!({"user_id": 42})),
        generated(json!({"user_id": 42}))
    );
}

#[test]
fn test_serializer_reuse_across_generated_cases() {
    // One selection per operation, one application per generated case.
    let definitions = definitions_from_yaml(&query_array_definition("form", false)).unwrap();
    let serializer = openapi3::serializer(&definitions).unwrap();
    for items in [json!(["a"]), json!(["b", "c"]), json!([])] {
        let mut values = generated(json!({ "color": items }));
        serializer.apply(&mut values);
        assert!(values["color"].is_string());
    }
}
