//! IR nodes and their JSON encoding.

use std::rc::Rc;

use duck_common::Pos;
use duck_types::Ty;
use serde_json::{json, Value};

/// One method entry on a class node: the method name next to the shared
/// method node itself.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassMethod {
    pub label: String,
    pub node: Rc<IrNode>,
}

/// A canonical IR tree node.
///
/// Children are reference-counted so Call nodes can be shared between
/// the tree and the per-line call index without cloning. Nodes are
/// immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct IrNode {
    pub kind: IrKind,
    pub pos: Pos,
}

/// The tagged payload of an IR node.
#[derive(Debug, Clone, PartialEq)]
pub enum IrKind {
    /// The file root: top-level class definitions and everything else.
    Module {
        classes: Vec<Rc<IrNode>>,
        main: Vec<Rc<IrNode>>,
    },
    /// A class definition.
    Class {
        label: String,
        fields: Vec<Rc<IrNode>>,
        methods: Vec<ClassMethod>,
    },
    /// A function or method definition. The return type starts as the
    /// "no value" placeholder; later inference phases fill it in.
    Method {
        label: String,
        args: Vec<String>,
        code: Vec<Rc<IrNode>>,
        return_type: Ty,
    },
    /// A call expression: callee first, then arguments in order.
    Call { children: Vec<Rc<IrNode>> },
    /// A synthetic statement-sequence wrapper.
    Code { children: Vec<Rc<IrNode>> },
    /// An identifier reference or constant keyword literal.
    Variable { label: String },
    /// The absence of a value.
    Nil,
    /// An integer literal within the i64 range.
    Int(i64),
    /// An integer literal outside the i64 range, kept as its exact
    /// base-10 string.
    BigInt(String),
    Float(f64),
    Str(String),
    /// A byte-string literal as a printable escape of the raw bytes.
    Bytes(String),
    /// Any construct without a specialized rule, built structurally.
    Other {
        tag: String,
        children: Vec<Rc<IrNode>>,
    },
}

impl IrNode {
    pub fn new(kind: IrKind, pos: Pos) -> Rc<IrNode> {
        Rc::new(IrNode { kind, pos })
    }

    /// Whether this is a synthetic `Code` wrapper.
    pub fn is_code(&self) -> bool {
        matches!(self.kind, IrKind::Code { .. })
    }

    /// Encode this node as a tagged JSON object.
    ///
    /// Every non-root node carries `kind`, `line`, and `column`; payload
    /// keys are `i`/`f`/`h`/`s` for literals, `label` for named nodes,
    /// `children` for composites. The module root is the one untagged
    /// shape: `{classes, main}`.
    pub fn to_json(&self) -> Value {
        let line = self.pos.line;
        let column = self.pos.column;
        match &self.kind {
            IrKind::Module { classes, main } => json!({
                "classes": node_list(classes),
                "main": node_list(main),
            }),
            IrKind::Class { label, fields, methods } => json!({
                "kind": "Class",
                "label": label,
                "fields": node_list(fields),
                "methods": methods.iter().map(|method| json!({
                    "label": method.label,
                    "node": method.node.to_json(),
                })).collect::<Vec<_>>(),
                "line": line,
                "column": column,
            }),
            IrKind::Method { label, args, code, return_type } => json!({
                "kind": "NodeMethod",
                "label": label,
                "args": args.iter().map(|arg| json!({
                    "kind": "variable",
                    "label": arg,
                })).collect::<Vec<_>>(),
                "code": node_list(code),
                "return_type": return_type.to_json(),
                "line": line,
                "column": column,
            }),
            IrKind::Call { children } => json!({
                "kind": "Call",
                "children": node_list(children),
                "typ": Ty::None.to_json(),
                "line": line,
                "column": column,
            }),
            IrKind::Code { children } => json!({
                "kind": "Code",
                "children": node_list(children),
                "line": line,
                "column": column,
            }),
            IrKind::Variable { label } => json!({
                "kind": "Variable",
                "label": label,
                "line": line,
                "column": column,
            }),
            IrKind::Nil => json!({ "kind": "Nil", "line": line, "column": column }),
            IrKind::Int(value) => json!({
                "kind": "Int",
                "i": value,
                "line": line,
                "column": column,
            }),
            IrKind::BigInt(digits) => json!({
                "kind": "BigInt",
                "h": digits,
                "line": line,
                "column": column,
            }),
            IrKind::Float(value) => json!({
                "kind": "Float",
                "f": value,
                "line": line,
                "column": column,
            }),
            IrKind::Str(text) => json!({
                "kind": "String",
                "s": text,
                "line": line,
                "column": column,
            }),
            IrKind::Bytes(escaped) => json!({
                "kind": "Bytes",
                "s": escaped,
                "line": line,
                "column": column,
            }),
            IrKind::Other { tag, children } => json!({
                "kind": tag,
                "children": node_list(children),
                "line": line,
                "column": column,
            }),
        }
    }
}

fn node_list(nodes: &[Rc<IrNode>]) -> Vec<Value> {
    nodes.iter().map(|node| node.to_json()).collect()
}

/// Escape raw bytes into a printable string, Python-repr style: printable
/// ASCII stays verbatim, `\t`/`\n`/`\r` and the escape characters get
/// backslash forms, everything else becomes `\xNN`.
pub(crate) fn escape_bytes(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    for &byte in bytes {
        match byte {
            b'\t' => out.push_str("\\t"),
            b'\n' => out.push_str("\\n"),
            b'\r' => out.push_str("\\r"),
            b'\\' => out.push_str("\\\\"),
            b'\'' => out.push_str("\\'"),
            0x20..=0x7e => out.push(byte as char),
            _ => out.push_str(&format!("\\x{byte:02x}")),
        }
    }
    out
}
