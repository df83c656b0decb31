//! Read-only access to a deployment specification document.
//!
//! The document is kept as a loose [`serde_yaml::Value`] tree and fields are
//! addressed with dotted paths such as `envSpec.proxySpec.tkgWorkload.proxyCert`.
//! Every lookup error carries the full path from the document root.

use std::path::Path;

use serde_yaml::Value;

use crate::error::{Error, Result};

/// Owned specification document
#[derive(Debug, Clone, PartialEq)]
pub struct SpecTree {
    root: Value,
}

impl SpecTree {
    /// Parse a YAML (or JSON) document
    pub fn parse(doc: &str) -> Result<Self> {
        Ok(Self {
            root: serde_yaml::from_str(doc)?,
        })
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let doc = std::fs::read_to_string(path)?;
        Self::parse(&doc)
    }

    pub fn root(&self) -> SpecNode<'_> {
        SpecNode {
            value: &self.root,
            path: String::new(),
        }
    }
}

impl From<Value> for SpecTree {
    fn from(root: Value) -> Self {
        Self { root }
    }
}

/// Borrowed position inside a [`SpecTree`]
#[derive(Debug, Clone)]
pub struct SpecNode<'a> {
    value: &'a Value,
    path: String,
}

impl<'a> SpecNode<'a> {
    /// Dotted path of this node from the document root, empty for the root
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn value(&self) -> &'a Value {
        self.value
    }

    /// Descend along a dotted key path
    pub fn node(&self, key_path: &str) -> Result<SpecNode<'a>> {
        let mut value = self.value;
        let mut path = self.path.clone();
        for key in key_path.split('.').filter(|k| !k.is_empty()) {
            if !path.is_empty() {
                path.push('.');
            }
            path.push_str(key);
            value = value
                .get(key)
                .ok_or_else(|| Error::MissingField(path.clone()))?;
        }
        Ok(SpecNode { value, path })
    }

    /// Render this node as a string; numbers and booleans are stringified
    pub fn scalar(&self) -> Result<String> {
        match self.value {
            Value::String(s) => Ok(s.clone()),
            Value::Number(n) => Ok(n.to_string()),
            Value::Bool(b) => Ok(b.to_string()),
            _ => Err(Error::NotAScalar(self.path.clone())),
        }
    }

    pub fn str_field(&self, key_path: &str) -> Result<String> {
        self.node(key_path)?.scalar()
    }

    /// User list copied as-is: null is empty, a sequence of scalars is joined with `,`.
    ///
    /// The key itself must be present.
    pub fn user_list_field(&self, key_path: &str) -> Result<String> {
        let node = self.node(key_path)?;
        match node.value {
            Value::Null => Ok(String::new()),
            Value::Sequence(items) => items
                .iter()
                .enumerate()
                .map(|(i, value)| {
                    SpecNode {
                        value,
                        path: format!("{}[{i}]", node.path),
                    }
                    .scalar()
                })
                .collect::<Result<Vec<_>>>()
                .map(|users| users.join(",")),
            _ => node.scalar(),
        }
    }

    /// Like [`SpecNode::str_field`] but an absent or null field is `None`
    pub fn optional_str_field(&self, key_path: &str) -> Result<Option<String>> {
        match self.node(key_path) {
            Ok(node) if node.value.is_null() => Ok(None),
            Ok(node) => node.scalar().map(Some),
            Err(err) if err.is_missing_field() => Ok(None),
            Err(err) => Err(err),
        }
    }
}
