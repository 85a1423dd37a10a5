//! Context
//!
//! Rendered fragments shared by every output template.
use minijinja::Value;
use serde::Serialize;

/// Variables available to output templates: `{{ jsrequire }}` and `{{ jsauth }}`.
///
/// Built once per run and only read afterwards.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct Context {
    pub jsrequire: String,
    pub jsauth: String,
}

impl Context {
    pub fn new(jsrequire: String, jsauth: String) -> Self {
        Context { jsrequire, jsauth }
    }

    pub fn as_value(&self) -> Value {
        Value::from_serialize(self)
    }
}
