//! Test vector schema.
//!
//! This module publishes the JSON Schema for vector files and checks documents
//! against the same rules without a schema engine. It provides:
//! 1. **Schema Text:** [`TEST_VECTOR_SCHEMA`], a draft-07 schema for external tooling.
//! 2. **Structural Validation:** [`validate_document`], which reports every
//!    violation with a JSON pointer instead of stopping at the first.
//! 3. **Semantic Warnings:** [`semantic_warnings`], for identifiers that do not
//!    resolve or agree and operands wider than the datapath.
//!
//! Structural violations make a file unusable. Semantic problems only affect
//! the vector that has them; the runner records those as failed results, so
//! they are never part of [`validate_document`].

use serde_json::{Map, Value};

use crate::alu::FlagSet;
use crate::common::{MAX_WIDTH, SchemaViolation, Width};
use crate::isa::Operation;

/// Published draft-07 JSON Schema for test vector files.
pub const TEST_VECTOR_SCHEMA: &str = r##"{
  "$schema": "http://json-schema.org/draft-07/schema#",
  "$id": "alu8/test-vector.schema.json",
  "title": "ALU test vectors",
  "description": "Stimulus and expected response for the 19-operation ALU.",
  "oneOf": [
    { "$ref": "#/definitions/vectorList" },
    {
      "type": "object",
      "required": ["tests"],
      "properties": {
        "tests": { "$ref": "#/definitions/vectorList" }
      }
    }
  ],
  "definitions": {
    "vectorList": {
      "type": "array",
      "items": { "$ref": "#/definitions/vector" }
    },
    "vector": {
      "type": "object",
      "required": ["test_name", "A", "B", "expected_result", "expected_flags"],
      "anyOf": [
        { "required": ["opcode"] },
        { "required": ["operation"] }
      ],
      "properties": {
        "test_name": { "type": "string", "minLength": 1 },
        "opcode": { "type": "string", "pattern": "^\\s*(0[bB])?[01]{5}\\s*$" },
        "operation": { "type": "string", "minLength": 1 },
        "A": { "type": "integer", "minimum": 0, "maximum": 4294967295 },
        "B": { "type": "integer", "minimum": 0, "maximum": 4294967295 },
        "expected_result": { "type": "integer" },
        "expected_flags": {
          "type": "object",
          "additionalProperties": false,
          "properties": {
            "carry": { "type": "boolean" },
            "zero": { "type": "boolean" },
            "negative": { "type": "boolean" },
            "overflow": { "type": "boolean" }
          }
        },
        "width": { "type": "integer", "minimum": 1, "maximum": 32 }
      }
    }
  }
}
"##;

/// Checks a parsed vector document against the published schema and returns
/// every violation found.
///
/// An empty result means the document is structurally valid. Identifier
/// resolution and operand width are not checked here.
pub fn validate_document(document: &Value) -> Vec<SchemaViolation> {
    let mut violations = Vec::new();
    for (pointer, fields) in vector_entries(document, &mut violations) {
        validate_vector(fields, &pointer, &mut violations);
    }
    violations
}

/// Reports vectors that are well-formed but would fail evaluation: names or
/// opcodes that name no operation, a name and opcode that disagree, and
/// operands that do not fit the vector's width.
///
/// `default_width` applies to vectors that omit `width`. Structural problems
/// are ignored; see [`validate_document`].
pub fn semantic_warnings(document: &Value, default_width: Width) -> Vec<SchemaViolation> {
    let mut layout = Vec::new();
    let mut warnings = Vec::new();
    for (pointer, fields) in vector_entries(document, &mut layout) {
        check_identifiers(fields, &pointer, &mut warnings);
        check_operand_width(fields, &pointer, default_width, &mut warnings);
    }
    warnings
}

/// Object entries of the vector list with their pointers. Layout problems go to `out`.
fn vector_entries<'a>(
    document: &'a Value,
    out: &mut Vec<SchemaViolation>,
) -> Vec<(String, &'a Map<String, Value>)> {
    let (entries, base) = match document {
        Value::Array(entries) => (entries, ""),
        Value::Object(map) => match map.get("tests") {
            Some(Value::Array(entries)) => (entries, "/tests"),
            Some(_) => {
                out.push(SchemaViolation::new("/tests", "must be an array"));
                return Vec::new();
            }
            None => {
                out.push(SchemaViolation::new("", "missing required member \"tests\""));
                return Vec::new();
            }
        },
        _ => {
            out.push(SchemaViolation::new(
                "",
                "expected an array of vectors or an object with a \"tests\" array",
            ));
            return Vec::new();
        }
    };
    let mut objects = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        let pointer = format!("{base}/{index}");
        match entry {
            Value::Object(fields) => objects.push((pointer, fields)),
            _ => out.push(SchemaViolation::new(pointer, "vector must be an object")),
        }
    }
    objects
}

fn validate_vector(fields: &Map<String, Value>, pointer: &str, out: &mut Vec<SchemaViolation>) {
    match fields.get("test_name") {
        Some(Value::String(name)) if !name.trim().is_empty() => {}
        Some(Value::String(_)) => out.push(at(pointer, "test_name", "must not be empty")),
        Some(_) => out.push(at(pointer, "test_name", "must be a string")),
        None => out.push(missing(pointer, "test_name")),
    }

    match fields.get("opcode") {
        Some(Value::String(raw)) if Operation::parse_opcode_bits(raw).is_none() => {
            out.push(at(pointer, "opcode", "must be five binary digits"));
        }
        Some(Value::String(_)) | None => {}
        Some(_) => out.push(at(pointer, "opcode", "must be a string")),
    }
    match fields.get("operation") {
        Some(Value::String(name)) if name.trim().is_empty() => {
            out.push(at(pointer, "operation", "must not be empty"));
        }
        Some(Value::String(_)) | None => {}
        Some(_) => out.push(at(pointer, "operation", "must be a string")),
    }
    if !fields.contains_key("opcode") && !fields.contains_key("operation") {
        out.push(SchemaViolation::new(pointer, "requires \"opcode\" or \"operation\""));
    }

    if let Some(value) = fields.get("width") {
        match value.as_u64() {
            Some(bits) if (1..=u64::from(MAX_WIDTH)).contains(&bits) => {}
            Some(_) => out.push(at(pointer, "width", &format!("must be in 1..={MAX_WIDTH}"))),
            None => out.push(at(pointer, "width", "must be a positive integer")),
        }
    }

    for operand in ["A", "B"] {
        match fields.get(operand) {
            None => out.push(missing(pointer, operand)),
            Some(value) => match value.as_u64() {
                Some(v) if v <= u64::from(u32::MAX) => {}
                Some(_) => out.push(at(pointer, operand, &format!("must not exceed {}", u32::MAX))),
                None if value.is_i64() => out.push(at(pointer, operand, "must be non-negative")),
                None => out.push(at(pointer, operand, "must be an integer")),
            },
        }
    }

    match fields.get("expected_result") {
        Some(value) if value.is_i64() => {}
        Some(_) => out.push(at(pointer, "expected_result", "must be an integer")),
        None => out.push(missing(pointer, "expected_result")),
    }

    match fields.get("expected_flags") {
        Some(Value::Object(flags)) => {
            for (key, value) in flags {
                if !FlagSet::NAMES.contains(&key.as_str()) {
                    out.push(SchemaViolation::new(
                        format!("{pointer}/expected_flags/{key}"),
                        "unknown flag",
                    ));
                } else if !value.is_boolean() {
                    out.push(SchemaViolation::new(
                        format!("{pointer}/expected_flags/{key}"),
                        "must be a boolean",
                    ));
                }
            }
        }
        Some(_) => out.push(at(pointer, "expected_flags", "must be an object")),
        None => out.push(missing(pointer, "expected_flags")),
    }
}

fn check_identifiers(fields: &Map<String, Value>, pointer: &str, out: &mut Vec<SchemaViolation>) {
    let by_opcode = match fields.get("opcode") {
        Some(Value::String(raw)) if Operation::parse_opcode_bits(raw).is_some() => {
            match Operation::from_opcode_str(raw) {
                Ok(op) => Some(op),
                Err(err) => {
                    out.push(at(pointer, "opcode", &err.to_string()));
                    None
                }
            }
        }
        _ => None,
    };
    let by_name = match fields.get("operation") {
        Some(Value::String(raw)) if !raw.trim().is_empty() => match Operation::from_name(raw) {
            Ok(op) => Some(op),
            Err(err) => {
                out.push(at(pointer, "operation", &err.to_string()));
                None
            }
        },
        _ => None,
    };
    if let Some((named, coded)) = by_name.zip(by_opcode).filter(|(n, c)| n != c) {
        out.push(at(
            pointer,
            "operation",
            &format!("{named} does not match opcode {}", coded.opcode_str()),
        ));
    }
}

fn check_operand_width(
    fields: &Map<String, Value>,
    pointer: &str,
    default_width: Width,
    out: &mut Vec<SchemaViolation>,
) {
    let width = fields
        .get("width")
        .and_then(Value::as_u64)
        .and_then(|bits| u32::try_from(bits).ok())
        .and_then(|bits| Width::new(bits).ok())
        .unwrap_or(default_width);
    for operand in ["A", "B"] {
        let oversized = fields
            .get(operand)
            .and_then(Value::as_i64)
            .filter(|&v| (0..=i64::from(u32::MAX)).contains(&v) && !width.contains(v));
        if let Some(v) = oversized {
            out.push(at(
                pointer,
                operand,
                &format!("{v} exceeds {} for a {width} datapath", width.mask()),
            ));
        }
    }
}

fn at(pointer: &str, field: &str, message: &str) -> SchemaViolation {
    SchemaViolation::new(format!("{pointer}/{field}"), message)
}

fn missing(pointer: &str, field: &str) -> SchemaViolation {
    SchemaViolation::new(pointer, format!("missing required member \"{field}\""))
}
