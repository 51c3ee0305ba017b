//! Construct kinds.

/// The construct kind of a parse-tree node.
///
/// The first group has specialized translation rules; the second group
/// covers common structural constructs that deliberately share the
/// structural-default rule. Anything the parser emits beyond these
/// arrives as [`TreeKind::Other`] and also takes the default rule, so
/// unknown constructs never fail translation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TreeKind {
    // Specialized rules.
    Module,
    ClassDef,
    FunctionDef,
    Call,
    Expr,
    Name,
    NameConstant,
    Num,
    Str,
    Bytes,
    /// A formal parameter entry inside a `FunctionDef`'s argument list.
    Param,
    // Structural constructs, translated by the default rule.
    Assign,
    Return,
    If,
    While,
    For,
    Attribute,
    Subscript,
    BinOp,
    UnaryOp,
    Compare,
    List,
    Dict,
    Tuple,
    /// Any construct kind without its own variant.
    Other(String),
}

impl TreeKind {
    /// The tag used for IR nodes produced by the structural-default rule.
    pub fn kind_name(&self) -> &str {
        match self {
            TreeKind::Module => "Module",
            TreeKind::ClassDef => "ClassDef",
            TreeKind::FunctionDef => "FunctionDef",
            TreeKind::Call => "Call",
            TreeKind::Expr => "Expr",
            TreeKind::Name => "Name",
            TreeKind::NameConstant => "NameConstant",
            TreeKind::Num => "Num",
            TreeKind::Str => "Str",
            TreeKind::Bytes => "Bytes",
            TreeKind::Param => "Param",
            TreeKind::Assign => "Assign",
            TreeKind::Return => "Return",
            TreeKind::If => "If",
            TreeKind::While => "While",
            TreeKind::For => "For",
            TreeKind::Attribute => "Attribute",
            TreeKind::Subscript => "Subscript",
            TreeKind::BinOp => "BinOp",
            TreeKind::UnaryOp => "UnaryOp",
            TreeKind::Compare => "Compare",
            TreeKind::List => "List",
            TreeKind::Dict => "Dict",
            TreeKind::Tuple => "Tuple",
            TreeKind::Other(name) => name,
        }
    }
}
