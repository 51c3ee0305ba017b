//! Attribute payloads.

use crate::node::TreeNode;

/// An integer literal with exact precision.
///
/// Values inside the inclusive `i64` range are kept as machine integers;
/// anything larger is kept as its exact base-10 digit string. The
/// constructor enforces that split, so `Big` never holds a value that
/// would have fit.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum IntValue {
    Small(i64),
    Big(String),
}

impl IntValue {
    /// Parse a base-10 literal (optionally signed).
    ///
    /// Returns `None` when `text` is not a valid integer at all.
    pub fn from_decimal(text: &str) -> Option<IntValue> {
        if let Ok(value) = text.parse::<i64>() {
            return Some(IntValue::Small(value));
        }
        // Out of i64 range, or malformed. Keep the digits only when the
        // text really is an integer.
        let digits = text.strip_prefix('-').unwrap_or(text);
        if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
            Some(IntValue::Big(text.to_string()))
        } else {
            None
        }
    }
}

impl From<i64> for IntValue {
    fn from(value: i64) -> Self {
        IntValue::Small(value)
    }
}

/// The traversal-context marker on a name node (read/write/delete).
///
/// Carried by the parser but never translated into IR.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Usage {
    Load,
    Store,
    Del,
}

/// The value of one named attribute on a [`TreeNode`].
///
/// Mirrors what the upstream parser can attach to a construct: a child
/// node, an ordered child sequence, nothing, a literal payload, or a
/// [`Usage`] marker.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    Node(TreeNode),
    Nodes(Vec<TreeNode>),
    Absent,
    Int(IntValue),
    Float(f64),
    Str(String),
    Bytes(Vec<u8>),
    Usage(Usage),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn i64_bounds_stay_small() {
        assert_eq!(
            IntValue::from_decimal("9223372036854775807"),
            Some(IntValue::Small(i64::MAX))
        );
        assert_eq!(
            IntValue::from_decimal("-9223372036854775808"),
            Some(IntValue::Small(i64::MIN))
        );
    }

    #[test]
    fn beyond_i64_keeps_exact_digits() {
        assert_eq!(
            IntValue::from_decimal("9223372036854775808"),
            Some(IntValue::Big("9223372036854775808".into()))
        );
        assert_eq!(
            IntValue::from_decimal("-9223372036854775809"),
            Some(IntValue::Big("-9223372036854775809".into()))
        );
    }

    #[test]
    fn malformed_literal_is_rejected() {
        assert_eq!(IntValue::from_decimal("12x"), None);
        assert_eq!(IntValue::from_decimal(""), None);
    }
}
