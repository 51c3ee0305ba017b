//! Qualified method names.

use std::fmt;

use serde::Serialize;

/// A globally unique method key: `namespace[.class]#method`.
///
/// This is the lookup key for the method registry. The class segment is
/// present only for methods defined inside a class body.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct QualName(String);

impl QualName {
    /// Build a qualified name from its parts.
    pub fn qualify(namespace: &str, class: Option<&str>, method: &str) -> Self {
        match class {
            Some(class) if !class.is_empty() => {
                QualName(format!("{namespace}.{class}#{method}"))
            }
            _ => QualName(format!("{namespace}#{method}")),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for QualName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for QualName {
    fn from(raw: &str) -> Self {
        QualName(raw.to_string())
    }
}
