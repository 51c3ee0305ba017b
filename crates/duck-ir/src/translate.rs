//! The syntax-tree-to-IR translator.
//!
//! Dispatch is an exhaustive match over [`TreeKind`]: a handful of
//! constructs have specialized rules, everything else takes the
//! structural default (one IR node tagged with the construct's name,
//! children translated attribute-by-attribute). Unrecognized constructs
//! therefore never fail, and the translation of a finite tree is a
//! bounded, deterministic, total function.

use std::collections::BTreeMap;
use std::rc::Rc;

use duck_common::{NamespaceConfig, Pos, QualName};
use duck_tree::{AttrValue, IntValue, TreeKind, TreeNode};
use duck_types::Ty;
use serde_json::Value;

use crate::ir::{escape_bytes, ClassMethod, IrKind, IrNode};
use crate::registry::MethodRecord;

/// The result of translating one file.
///
/// Self-contained and side-effect-free: the discovered method records
/// are returned here for the driver to merge into its registry, rather
/// than written into shared state.
#[derive(Debug)]
pub struct FileTranslation {
    pub path: String,
    pub namespace: String,
    /// The raw source text, kept line-addressable for later phases.
    pub source: String,
    /// The module root (always `IrKind::Module`).
    pub root: Rc<IrNode>,
    /// Call expressions by source line, in source order, at any nesting
    /// depth.
    pub nodes_by_line: BTreeMap<i32, Vec<Rc<IrNode>>>,
    pub methods: Vec<MethodRecord>,
}

impl FileTranslation {
    /// The 1-based source line `n`, if it exists.
    pub fn source_line(&self, n: i32) -> Option<&str> {
        if n < 1 {
            return None;
        }
        self.source.split('\n').nth((n - 1) as usize)
    }

    /// The full per-file JSON document: the module root with the call
    /// index attached as `nodes_by_line`.
    pub fn to_json(&self) -> Value {
        let mut root = self.root.to_json();
        let index: serde_json::Map<String, Value> = self
            .nodes_by_line
            .iter()
            .map(|(line, calls)| {
                (
                    line.to_string(),
                    Value::Array(calls.iter().map(|call| call.to_json()).collect()),
                )
            })
            .collect();
        if let Some(object) = root.as_object_mut() {
            object.insert("nodes_by_line".into(), Value::Object(index));
        }
        root
    }
}

/// Translate a parsed file into IR.
///
/// `tree` is the module root from the upstream parser; `source` is the
/// raw text it was parsed from; `path` feeds namespace derivation. A
/// non-module root is tolerated and becomes the sole `main` entry.
pub fn translate_file(
    tree: &TreeNode,
    source: &str,
    path: &str,
    config: &NamespaceConfig,
) -> FileTranslation {
    let namespace = config.namespace_of(path);
    let mut translator = Translator {
        namespace: &namespace,
        current_class: None,
        nodes_by_line: BTreeMap::new(),
        methods: Vec::new(),
    };
    let root = match tree.kind {
        TreeKind::Module => translator.translate(tree),
        _ => {
            let only = translator.translate(tree);
            IrNode::new(
                IrKind::Module { classes: Vec::new(), main: vec![only] },
                tree.pos,
            )
        }
    };
    let Translator { nodes_by_line, methods, .. } = translator;
    FileTranslation {
        path: path.to_string(),
        namespace,
        source: source.to_string(),
        root,
        nodes_by_line,
        methods,
    }
}

/// Per-file translation state: the enclosing class name (for qualified
/// names) plus the two append-only outputs.
struct Translator<'a> {
    namespace: &'a str,
    current_class: Option<String>,
    nodes_by_line: BTreeMap<i32, Vec<Rc<IrNode>>>,
    methods: Vec<MethodRecord>,
}

impl Translator<'_> {
    fn translate(&mut self, node: &TreeNode) -> Rc<IrNode> {
        match &node.kind {
            TreeKind::Module => self.translate_module(node),
            TreeKind::ClassDef => self.translate_class(node),
            TreeKind::FunctionDef => self.translate_function(node),
            TreeKind::Call => self.translate_call(node),
            TreeKind::Expr => self.translate_expr_stmt(node),
            TreeKind::Name => {
                let label = node.text("id").unwrap_or_default().to_string();
                IrNode::new(IrKind::Variable { label }, node.pos)
            }
            TreeKind::NameConstant => {
                // Keyword literals (True/False/None) keep their textual form.
                let label = node.text("value").unwrap_or_default().to_string();
                IrNode::new(IrKind::Variable { label }, node.pos)
            }
            TreeKind::Num => self.translate_num(node),
            TreeKind::Str => {
                let text = node.text("s").unwrap_or_default().to_string();
                IrNode::new(IrKind::Str(text), node.pos)
            }
            TreeKind::Bytes => {
                let escaped = match node.get("s") {
                    Some(AttrValue::Bytes(raw)) => escape_bytes(raw),
                    _ => String::new(),
                };
                IrNode::new(IrKind::Bytes(escaped), node.pos)
            }
            TreeKind::Param
            | TreeKind::Assign
            | TreeKind::Return
            | TreeKind::If
            | TreeKind::While
            | TreeKind::For
            | TreeKind::Attribute
            | TreeKind::Subscript
            | TreeKind::BinOp
            | TreeKind::UnaryOp
            | TreeKind::Compare
            | TreeKind::List
            | TreeKind::Dict
            | TreeKind::Tuple
            | TreeKind::Other(_) => self.translate_default(node),
        }
    }

    /// Module root: top-level class definitions go to `classes`, every
    /// other statement to `main`, both in source order.
    fn translate_module(&mut self, node: &TreeNode) -> Rc<IrNode> {
        let mut classes = Vec::new();
        let mut main = Vec::new();
        for statement in node.children("body").unwrap_or(&[]) {
            let translated = self.translate(statement);
            if statement.kind == TreeKind::ClassDef {
                classes.push(translated);
            } else {
                main.push(translated);
            }
        }
        IrNode::new(IrKind::Module { classes, main }, node.pos)
    }

    /// Class definition: translate the contained function definitions
    /// with the class name as the enclosing-class context. The previous
    /// context is restored afterwards, so a nested class re-exposes the
    /// outer one.
    fn translate_class(&mut self, node: &TreeNode) -> Rc<IrNode> {
        let label = node.text("name").unwrap_or_default().to_string();
        let saved = self.current_class.replace(label.clone());
        let mut methods = Vec::new();
        for statement in node.children("body").unwrap_or(&[]) {
            if statement.kind != TreeKind::FunctionDef {
                continue;
            }
            let method = self.translate(statement);
            if let IrKind::Method { label, .. } = &method.kind {
                methods.push(ClassMethod {
                    label: label.clone(),
                    node: Rc::clone(&method),
                });
            }
        }
        self.current_class = saved;
        IrNode::new(
            IrKind::Class { label, fields: Vec::new(), methods },
            node.pos,
        )
    }

    /// Function or method definition: build the method node, then record
    /// it under its qualified name for the driver's registry.
    fn translate_function(&mut self, node: &TreeNode) -> Rc<IrNode> {
        let label = node.text("name").unwrap_or_default().to_string();
        let params: Vec<String> = node
            .children("args")
            .unwrap_or(&[])
            .iter()
            .filter_map(|param| param.text("name"))
            .map(str::to_string)
            .collect();
        let code: Vec<Rc<IrNode>> = node
            .children("body")
            .unwrap_or(&[])
            .iter()
            .map(|statement| self.translate(statement))
            .collect();

        let method = IrNode::new(
            IrKind::Method {
                label: label.clone(),
                args: params.clone(),
                code,
                // Never inferred here; a later phase fills this in.
                return_type: Ty::None,
            },
            node.pos,
        );
        let qualified = QualName::qualify(
            self.namespace,
            self.current_class.as_deref(),
            &label,
        );
        self.methods.push(MethodRecord {
            qualified,
            label,
            params,
            node: Rc::clone(&method),
            return_type: Ty::None,
        });
        method
    }

    /// Call expression: callee, then arguments; additionally indexed
    /// under its source line, whatever its nesting depth.
    fn translate_call(&mut self, node: &TreeNode) -> Rc<IrNode> {
        let mut children = Vec::new();
        if let Some(func) = node.child("func") {
            children.push(self.translate(func));
        }
        for arg in node.children("args").unwrap_or(&[]) {
            children.push(self.translate(arg));
        }
        let call = IrNode::new(IrKind::Call { children }, node.pos);
        self.nodes_by_line
            .entry(node.pos.line)
            .or_default()
            .push(Rc::clone(&call));
        call
    }

    /// Expression statement: the wrapper is dropped, only the inner
    /// expression survives as IR.
    fn translate_expr_stmt(&mut self, node: &TreeNode) -> Rc<IrNode> {
        match node.child("value") {
            Some(inner) => self.translate(inner),
            None => IrNode::new(IrKind::Nil, node.pos),
        }
    }

    fn translate_num(&mut self, node: &TreeNode) -> Rc<IrNode> {
        match node.get("n") {
            Some(AttrValue::Int(value)) => int_node(value, node.pos),
            Some(AttrValue::Float(value)) => IrNode::new(IrKind::Float(*value), node.pos),
            _ => IrNode::new(IrKind::Nil, node.pos),
        }
    }

    /// The structural default: an IR node tagged with the construct's
    /// kind name, children built from each non-context attribute in
    /// order. A lone `Code` child is collapsed into the parent.
    fn translate_default(&mut self, node: &TreeNode) -> Rc<IrNode> {
        let mut children = Vec::new();
        for (_, value) in &node.attrs {
            if matches!(value, AttrValue::Usage(_)) {
                continue;
            }
            children.push(self.translate_attr(value));
        }
        while children.len() == 1 && children[0].is_code() {
            let only = children.remove(0);
            if let IrKind::Code { children: inner } = &only.kind {
                children = inner.clone();
            }
        }
        IrNode::new(
            IrKind::Other { tag: node.kind.kind_name().to_string(), children },
            node.pos,
        )
    }

    /// Translate one attribute value. Sequences become `Code` wrappers;
    /// bare literal payloads carry no position of their own.
    fn translate_attr(&mut self, value: &AttrValue) -> Rc<IrNode> {
        match value {
            AttrValue::Node(node) => self.translate(node),
            AttrValue::Nodes(nodes) => {
                let children = nodes.iter().map(|child| self.translate(child)).collect();
                IrNode::new(IrKind::Code { children }, Pos::UNKNOWN)
            }
            AttrValue::Absent => IrNode::new(IrKind::Nil, Pos::UNKNOWN),
            AttrValue::Int(value) => int_node(value, Pos::UNKNOWN),
            AttrValue::Float(value) => IrNode::new(IrKind::Float(*value), Pos::UNKNOWN),
            AttrValue::Str(text) => IrNode::new(IrKind::Str(text.clone()), Pos::UNKNOWN),
            AttrValue::Bytes(raw) => IrNode::new(IrKind::Bytes(escape_bytes(raw)), Pos::UNKNOWN),
            AttrValue::Usage(_) => IrNode::new(IrKind::Nil, Pos::UNKNOWN),
        }
    }
}

/// In-range integers become `Int` nodes; anything larger keeps its exact
/// decimal digits as a `BigInt` node.
fn int_node(value: &IntValue, pos: Pos) -> Rc<IrNode> {
    match value {
        IntValue::Small(v) => IrNode::new(IrKind::Int(*v), pos),
        IntValue::Big(digits) => IrNode::new(IrKind::BigInt(digits.clone()), pos),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_namespace() -> NamespaceConfig {
        NamespaceConfig::default()
    }

    fn name(id: &str, line: i32, column: i32) -> TreeNode {
        TreeNode::new(TreeKind::Name)
            .with_pos(line, column)
            .attr("id", AttrValue::Str(id.into()))
    }

    #[test]
    fn expression_statement_is_unwrapped() {
        let tree = TreeNode::new(TreeKind::Expr)
            .with_pos(1, 0)
            .attr("value", AttrValue::Node(name("x", 1, 0)));
        let result = translate_file(&tree, "x", "f.py", &no_namespace());
        let main = match &result.root.kind {
            IrKind::Module { main, .. } => main,
            other => panic!("expected module root, got {other:?}"),
        };
        assert_eq!(main[0].kind, IrKind::Variable { label: "x".into() });
    }

    #[test]
    fn singleton_code_child_collapses() {
        // A construct with a single list-valued attribute: the Code
        // wrapper must fold into the parent.
        let tree = TreeNode::new(TreeKind::Other("Suite".into()))
            .with_pos(1, 0)
            .attr(
                "body",
                AttrValue::Nodes(vec![name("a", 1, 0), name("b", 2, 0)]),
            );
        let result = translate_file(&tree, "", "f.py", &no_namespace());
        let main = match &result.root.kind {
            IrKind::Module { main, .. } => main.clone(),
            other => panic!("expected module root, got {other:?}"),
        };
        match &main[0].kind {
            IrKind::Other { tag, children } => {
                assert_eq!(tag, "Suite");
                assert_eq!(children.len(), 2);
                assert!(!children[0].is_code());
            }
            other => panic!("expected structural node, got {other:?}"),
        }
    }

    #[test]
    fn usage_markers_are_excluded() {
        let tree = TreeNode::new(TreeKind::Other("Target".into()))
            .with_pos(1, 0)
            .attr("id", AttrValue::Str("x".into()))
            .attr("ctx", AttrValue::Usage(duck_tree::Usage::Store));
        let result = translate_file(&tree, "", "f.py", &no_namespace());
        let main = match &result.root.kind {
            IrKind::Module { main, .. } => main.clone(),
            other => panic!("expected module root, got {other:?}"),
        };
        match &main[0].kind {
            IrKind::Other { children, .. } => assert_eq!(children.len(), 1),
            other => panic!("expected structural node, got {other:?}"),
        }
    }

    #[test]
    fn source_line_lookup_is_one_based() {
        let tree = TreeNode::new(TreeKind::Module);
        let result = translate_file(&tree, "first\nsecond", "f.py", &no_namespace());
        assert_eq!(result.source_line(1), Some("first"));
        assert_eq!(result.source_line(2), Some("second"));
        assert_eq!(result.source_line(3), None);
        assert_eq!(result.source_line(0), None);
    }
}
