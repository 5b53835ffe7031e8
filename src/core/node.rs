use serde_json::Value;

use crate::BindError;

/// A reference into a generic JSON tree, paired with the dotted/indexed path
/// that leads to it (for example `customer.shippingAddress.street` or
/// `items[2].unitPrice`).
///
/// Every lookup and every primitive read goes through explicit variant
/// narrowing: an absent member is a [`BindError::MissingField`], a member of
/// the wrong JSON kind is a [`BindError::TypeMismatch`], and both carry the
/// full path so the caller can tell exactly where the input diverged from the
/// expected shape.
pub struct NodeRef<'a> {
    value: &'a Value,
    path: String,
}

impl<'a> NodeRef<'a> {
    /// Wraps the root of a parsed document. The root path is empty, so the
    /// first field lookup produces a bare name like `orderId`.
    pub fn root(value: &'a Value) -> Self {
        NodeRef {
            value,
            path: String::new(),
        }
    }

    pub fn value(&self) -> &'a Value {
        self.value
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// The JSON kind of this node, as used in error messages.
    pub fn kind(&self) -> &'static str {
        kind_of(self.value)
    }

    pub fn is_null(&self) -> bool {
        self.value.is_null()
    }

    fn child_path(&self, name: &str) -> String {
        if self.path.is_empty() {
            name.to_string()
        } else {
            format!("{}.{}", self.path, name)
        }
    }

    /// Looks up a required member of an object node.
    pub fn field(&self, name: &str) -> Result<NodeRef<'a>, BindError> {
        match self.field_opt(name)? {
            Some(node) => Ok(node),
            None => Err(BindError::MissingField {
                path: self.child_path(name),
            }),
        }
    }

    /// Looks up an optional member of an object node. Absence is `Ok(None)`;
    /// a non-object receiver is still a type mismatch.
    pub fn field_opt(&self, name: &str) -> Result<Option<NodeRef<'a>>, BindError> {
        let map = self.value.as_object().ok_or_else(|| self.mismatch("object"))?;
        Ok(map.get(name).map(|value| NodeRef {
            value,
            path: self.child_path(name),
        }))
    }

    /// Narrows this node to a string.
    pub fn as_str(&self) -> Result<&'a str, BindError> {
        self.value.as_str().ok_or_else(|| self.mismatch("string"))
    }

    /// Narrows this node to a number, widened to 64-bit floating point.
    pub fn as_f64(&self) -> Result<f64, BindError> {
        self.value.as_f64().ok_or_else(|| self.mismatch("number"))
    }

    /// Narrows this node to an integer. A fractional number is reported as
    /// `number`, not silently truncated.
    pub fn as_i64(&self) -> Result<i64, BindError> {
        self.value.as_i64().ok_or_else(|| self.mismatch("integer"))
    }

    pub fn as_bool(&self) -> Result<bool, BindError> {
        self.value.as_bool().ok_or_else(|| self.mismatch("boolean"))
    }

    /// The elements of an array node, in encounter order, each carrying an
    /// `[index]` path segment.
    pub fn elements(&self) -> Result<Vec<NodeRef<'a>>, BindError> {
        let array = self.value.as_array().ok_or_else(|| self.mismatch("array"))?;
        Ok(array
            .iter()
            .enumerate()
            .map(|(index, value)| NodeRef {
                value,
                path: format!("{}[{}]", self.path, index),
            })
            .collect())
    }

    fn mismatch(&self, expected: &'static str) -> BindError {
        BindError::TypeMismatch {
            path: self.path.clone(),
            expected,
            found: self.kind(),
        }
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
