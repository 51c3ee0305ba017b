//! Parse-tree nodes.

use duck_common::Pos;

use crate::kind::TreeKind;
use crate::value::AttrValue;

/// One node of the externally-parsed syntax tree.
///
/// Attributes are ordered (the order the parser reports them in), which
/// the structural-default translation rule relies on.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeNode {
    pub kind: TreeKind,
    pub pos: Pos,
    pub attrs: Vec<(String, AttrValue)>,
}

impl TreeNode {
    pub fn new(kind: TreeKind) -> Self {
        TreeNode {
            kind,
            pos: Pos::UNKNOWN,
            attrs: Vec::new(),
        }
    }

    pub fn with_pos(mut self, line: i32, column: i32) -> Self {
        self.pos = Pos::new(line, column);
        self
    }

    /// Append a named attribute (builder style).
    pub fn attr(mut self, name: impl Into<String>, value: AttrValue) -> Self {
        self.attrs.push((name.into(), value));
        self
    }

    /// Look up an attribute by name.
    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.attrs
            .iter()
            .find(|(attr, _)| attr == name)
            .map(|(_, value)| value)
    }

    /// A single child node attribute, if present and node-valued.
    pub fn child(&self, name: &str) -> Option<&TreeNode> {
        match self.get(name) {
            Some(AttrValue::Node(node)) => Some(node),
            _ => None,
        }
    }

    /// A sequence-valued attribute, if present and list-valued.
    pub fn children(&self, name: &str) -> Option<&[TreeNode]> {
        match self.get(name) {
            Some(AttrValue::Nodes(nodes)) => Some(nodes),
            _ => None,
        }
    }

    /// A string-valued attribute, if present and text-valued.
    pub fn text(&self, name: &str) -> Option<&str> {
        match self.get(name) {
            Some(AttrValue::Str(text)) => Some(text),
            _ => None,
        }
    }
}
