//! Operation metadata supplied by the host for every intercepted call.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Actual call arguments, in declared parameter order
pub type ArgumentVector = Vec<Value>;

/// Declared return type of a wrapped operation
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReturnKind {
    /// Primitive integer
    Integer,
    /// Nullable integer wrapper
    BoxedInteger,
    /// Anything else, by declared type name
    Other(String),
}

impl ReturnKind {
    pub fn is_integer(&self) -> bool {
        matches!(self, ReturnKind::Integer | ReturnKind::BoxedInteger)
    }

    pub fn type_name(&self) -> &str {
        match self {
            ReturnKind::Integer => "int",
            ReturnKind::BoxedInteger => "Integer",
            ReturnKind::Other(name) => name,
        }
    }
}

/// One declared parameter of the wrapped operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterDescriptor {
    pub index: usize,
    pub declared_type: String,
    /// Marks this parameter as the one to split when several sequences are passed
    pub designated: bool,
}

/// Read-only description of the intercepted operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationDescriptor {
    /// `<owner>:<method>`, used for diagnostics and configuration lookup
    pub qualified_name: String,
    pub parameters: Vec<ParameterDescriptor>,
    pub return_kind: ReturnKind,
}

impl OperationDescriptor {
    pub fn new(qualified_name: impl Into<String>, return_kind: ReturnKind) -> Self {
        Self {
            qualified_name: qualified_name.into(),
            parameters: Vec::new(),
            return_kind,
        }
    }

    /// Build the qualified name from an owner and a method name.
    ///
    /// An empty owner yields just the method name.
    pub fn qualify(owner: &str, method: &str) -> String {
        if owner.is_empty() {
            method.to_string()
        } else {
            format!("{owner}:{method}")
        }
    }

    /// Append an undesignated parameter.
    pub fn param(self, declared_type: impl Into<String>) -> Self {
        self.push_param(declared_type.into(), false)
    }

    /// Append a parameter carrying the split designation.
    pub fn designated_param(self, declared_type: impl Into<String>) -> Self {
        self.push_param(declared_type.into(), true)
    }

    fn push_param(mut self, declared_type: String, designated: bool) -> Self {
        let index = self.parameters.len();
        self.parameters.push(ParameterDescriptor {
            index,
            declared_type,
            designated,
        });
        self
    }

    /// Whether the parameter at `index` carries the split designation.
    pub fn is_designated(&self, index: usize) -> bool {
        self.parameters
            .iter()
            .any(|p| p.index == index && p.designated)
    }
}

/// Short name of a JSON value's kind, for diagnostics
pub(crate) fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "sequence",
        Value::Object(_) => "keyed collection",
    }
}
