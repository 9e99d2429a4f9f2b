// src/shared/validation.rs
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};
use validator::{Validate, ValidationError, ValidationErrors, ValidationErrorsKind};

/// One violated field of a payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorDetail {
    pub attribute: String,
    pub path: Vec<String>,
    pub reason: String,
}

#[derive(Debug, Clone, thiserror::Error)]
#[error("Schema error: {} violation(s)", details.len())]
pub struct SchemaViolation {
    pub details: Vec<ErrorDetail>,
}

impl SchemaViolation {
    pub fn single(path: &[&str], reason: &str) -> Self {
        let path: Vec<String> = path.iter().map(|s| s.to_string()).collect();
        Self {
            details: vec![ErrorDetail {
                attribute: path.last().cloned().unwrap_or_default(),
                path,
                reason: reason.to_string(),
            }],
        }
    }

    /// Re-roots every detail below `segment`, for payloads validated piecewise.
    pub fn nested_under(mut self, segment: &str) -> Self {
        for detail in &mut self.details {
            detail.path.insert(0, segment.to_string());
        }
        self
    }

    pub fn merge(&mut self, other: SchemaViolation) {
        self.details.extend(other.details);
    }

    fn from_serde(err: serde_json::Error) -> Self {
        Self {
            details: vec![ErrorDetail {
                attribute: "payload".to_string(),
                path: Vec::new(),
                reason: err.to_string(),
            }],
        }
    }
}

impl From<ValidationErrors> for SchemaViolation {
    fn from(errors: ValidationErrors) -> Self {
        let mut details = Vec::new();
        collect_details(&errors, &[], &mut details);
        details.sort_by(|a, b| a.path.cmp(&b.path).then(a.reason.cmp(&b.reason)));
        Self { details }
    }
}

/// Validation gate for request payloads.
///
/// Every violated field is reported, not only the first one, so payload
/// structs keep their mandatory fields as `Option` with `#[validate(required)]`.
/// A value of the wrong type is reported at its own path and dropped, and the
/// rest of the payload still goes through validation.
pub trait Schema: DeserializeOwned + Validate + Sized {
    fn from_payload(payload: Value) -> Result<Self, SchemaViolation> {
        let mut payload = payload;
        let mut mismatches: Vec<ErrorDetail> = Vec::new();

        let parsed: Self = loop {
            match serde_json::from_value::<Self>(payload.clone()) {
                Ok(parsed) => break parsed,
                Err(err) => {
                    let Some(path) = first_mismatch::<Self>(&payload) else {
                        let mut violation = SchemaViolation::from_serde(err);
                        violation.details.extend(mismatches);
                        return Err(violation);
                    };
                    remove_at(&mut payload, &path);
                    mismatches.push(ErrorDetail {
                        attribute: path.last().cloned().unwrap_or_default(),
                        path,
                        reason: err.to_string(),
                    });
                }
            }
        };

        let mut details = match parsed.validate() {
            Ok(()) => Vec::new(),
            Err(errors) => SchemaViolation::from(errors).details,
        };
        // A dropped value also fails `required`; its type error is enough.
        details.retain(|d| mismatches.iter().all(|m| m.path != d.path));
        details.extend(mismatches);

        if details.is_empty() {
            return Ok(parsed);
        }
        details.sort_by(|a, b| a.path.cmp(&b.path).then(a.reason.cmp(&b.reason)));
        Err(SchemaViolation { details })
    }
}

impl<T: DeserializeOwned + Validate> Schema for T {}

/// Paths of every non-object value in `value`, in map order.
fn leaf_paths(value: &Value, prefix: &mut Vec<String>, out: &mut Vec<Vec<String>>) {
    match value {
        Value::Object(map) if !map.is_empty() => {
            for (key, inner) in map {
                prefix.push(key.clone());
                leaf_paths(inner, prefix, out);
                prefix.pop();
            }
        }
        _ if !prefix.is_empty() => out.push(prefix.clone()),
        _ => {}
    }
}

fn value_at<'a>(value: &'a Value, path: &[String]) -> Option<&'a Value> {
    path.iter().try_fold(value, |current, key| current.get(key))
}

fn parent_at<'a>(value: &'a mut Value, path: &[String]) -> Option<&'a mut Map<String, Value>> {
    let (_, parents) = path.split_last()?;
    parents
        .iter()
        .try_fold(value, |current, key| current.get_mut(key))?
        .as_object_mut()
}

fn remove_at(value: &mut Value, path: &[String]) {
    if let (Some(map), Some(key)) = (parent_at(value, path), path.last()) {
        map.remove(key);
    }
}

/// Finds the value `T` refuses to deserialize.
///
/// Starts from the payload stripped of every leaf and puts leaves back one at
/// a time; the first one that makes deserialization fail is the culprit.
/// `None` when the payload shape itself is wrong.
fn first_mismatch<T: DeserializeOwned>(payload: &Value) -> Option<Vec<String>> {
    let mut leaves = Vec::new();
    leaf_paths(payload, &mut Vec::new(), &mut leaves);

    let mut candidate = payload.clone();
    for leaf in &leaves {
        remove_at(&mut candidate, leaf);
    }
    if serde_json::from_value::<T>(candidate.clone()).is_err() {
        return None;
    }

    for leaf in leaves {
        let original = value_at(payload, &leaf)?.clone();
        let key = leaf.last()?.clone();
        parent_at(&mut candidate, &leaf)?.insert(key, original);
        if serde_json::from_value::<T>(candidate.clone()).is_err() {
            return Some(leaf);
        }
    }
    None
}

fn collect_details(errors: &ValidationErrors, prefix: &[String], out: &mut Vec<ErrorDetail>) {
    for (field, kind) in errors.errors() {
        let attribute = camel_case(field.trim_start_matches("r#"));
        let mut path = prefix.to_vec();
        path.push(attribute.clone());

        match kind {
            ValidationErrorsKind::Field(list) => {
                for error in list {
                    out.push(ErrorDetail {
                        attribute: attribute.clone(),
                        path: path.clone(),
                        reason: reason_for(error),
                    });
                }
            }
            ValidationErrorsKind::Struct(inner) => collect_details(inner, &path, out),
            ValidationErrorsKind::List(items) => {
                for (index, inner) in items {
                    let mut item_path = path.clone();
                    item_path.push(index.to_string());
                    collect_details(inner, &item_path, out);
                }
            }
        }
    }
}

fn reason_for(error: &ValidationError) -> String {
    if let Some(message) = &error.message {
        return message.to_string();
    }

    match error.code.as_ref() {
        "required" => "Required".to_string(),
        "email" => "Invalid email".to_string(),
        "length" => {
            let min = error.params.get("min").map(|v| v.to_string());
            let max = error.params.get("max").map(|v| v.to_string());
            match (min, max) {
                (Some(min), Some(max)) => format!("Length must be between {min} and {max}"),
                (Some(min), None) => format!("Length must be at least {min}"),
                (None, Some(max)) => format!("Length must be at most {max}"),
                (None, None) => "Invalid length".to_string(),
            }
        }
        other => other.to_string(),
    }
}

/// Payloads travel in camelCase while validator reports Rust field names.
fn camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for c in field.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}
