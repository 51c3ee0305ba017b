//! Type expressions.
//!
//! Defines the core `Ty` enum and its supporting structs. Values are
//! immutable and compared structurally; equality and hashing are derived
//! mechanically from the definitions, so set-based deduplication inside
//! unification is correct by construction.

use std::fmt;

/// A generic type constructor -- a named type of fixed arity, like
/// `List` (arity 1) or `Hash` (arity 2).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GenericTy {
    pub label: String,
    pub arity: usize,
}

impl GenericTy {
    pub fn new(label: impl Into<String>, arity: usize) -> Self {
        GenericTy { label: label.into(), arity }
    }

    /// The built-in `List` constructor.
    pub fn list() -> GenericTy {
        GenericTy::new("List", 1)
    }

    /// The built-in `Hash` (dictionary) constructor.
    pub fn hash() -> GenericTy {
        GenericTy::new("Hash", 2)
    }

    /// Apply this constructor to type arguments, producing a concrete type.
    ///
    /// The argument count must match the constructor's arity.
    pub fn apply(&self, args: Vec<Ty>) -> Ty {
        debug_assert_eq!(
            args.len(),
            self.arity,
            "generic {} applied to {} args",
            self.label,
            args.len()
        );
        Ty::Concrete(ConcreteTy { base: self.clone(), args })
    }
}

/// A generic type applied to concrete arguments, e.g. `List[Int]`.
///
/// Invariant: `args.len() == base.arity`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConcreteTy {
    pub base: GenericTy,
    pub args: Vec<Ty>,
}

/// A named slot paired with its observed type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Variable {
    pub label: String,
    pub ty: Ty,
}

impl Variable {
    pub fn new(label: impl Into<String>, ty: Ty) -> Self {
        Variable { label: label.into(), ty }
    }
}

/// A single function signature: ordered parameters, locals, return type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FunctionTy {
    pub label: String,
    pub args: Vec<Variable>,
    pub locals: Vec<Variable>,
    pub return_type: Box<Ty>,
}

/// A set of signatures observed for one function name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OverloadSet {
    pub label: String,
    pub overloads: Vec<FunctionTy>,
}

/// A nominal object type with ordered fields and at most one base.
///
/// The base is a back-reference to a previously built object; objects
/// are constructed bottom-up, so the chain is acyclic.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObjectTy {
    pub label: String,
    pub base: Option<Box<ObjectTy>>,
    pub inherited: bool,
    pub fields: Vec<(String, Ty)>,
}

/// A type expression.
///
/// The closed set of forms a program slot can be observed to hold:
/// - `Simple`: an atomic named type (`Int`, `String`, ...)
/// - `None`: the "no value" type
/// - `Function` / `Overloads`: callable signatures
/// - `Generic` / `Concrete`: type constructors and their applications
/// - `Optional`: a type that may additionally be absent (never nested)
/// - `Union`: two or more alternatives (flattened, deduplicated, never
///   containing `None` -- that is what `Optional` is for)
/// - `Object`: a nominal record type
/// - `Tuple`: fixed-length heterogeneous sequences
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Ty {
    Simple(String),
    None,
    Function(FunctionTy),
    Overloads(OverloadSet),
    Generic(GenericTy),
    Concrete(ConcreteTy),
    Optional(Box<Ty>),
    Union(Vec<Ty>),
    Object(ObjectTy),
    Tuple(Vec<Ty>),
}

impl Ty {
    /// Create an `Int` type.
    pub fn int() -> Ty {
        Ty::Simple("Int".into())
    }

    /// Create a `Float` type.
    pub fn float() -> Ty {
        Ty::Simple("Float".into())
    }

    /// Create a `String` type.
    pub fn string() -> Ty {
        Ty::Simple("String".into())
    }

    /// Create a `Bool` type.
    pub fn bool() -> Ty {
        Ty::Simple("Bool".into())
    }

    /// Create an atomic named type.
    pub fn simple(label: impl Into<String>) -> Ty {
        Ty::Simple(label.into())
    }

    /// Create a `List[T]` type.
    pub fn list(inner: Ty) -> Ty {
        GenericTy::list().apply(vec![inner])
    }

    /// Create a `Hash[K, V]` type.
    pub fn hash(key: Ty, value: Ty) -> Ty {
        GenericTy::hash().apply(vec![key, value])
    }

    /// Create a tuple type.
    pub fn tuple(elements: Vec<Ty>) -> Ty {
        Ty::Tuple(elements)
    }

    /// Create a function type.
    pub fn function(
        label: impl Into<String>,
        args: Vec<Variable>,
        locals: Vec<Variable>,
        return_type: Ty,
    ) -> Ty {
        Ty::Function(FunctionTy {
            label: label.into(),
            args,
            locals,
            return_type: Box::new(return_type),
        })
    }

    /// Wrap a type as optional. Already-optional types are left as-is,
    /// so `Optional` never nests.
    pub fn optional(inner: Ty) -> Ty {
        match inner {
            Ty::Optional(_) => inner,
            other => Ty::Optional(Box::new(other)),
        }
    }

    /// Build a canonical union from the given members.
    ///
    /// Members are deduplicated and sorted by their serialized form, so
    /// unions compare equal regardless of the order the members were
    /// observed in. A single surviving member is returned unwrapped.
    ///
    /// Callers are expected to have flattened nested unions and replaced
    /// `None` with `Optional` wrapping already (the unification engine
    /// does both).
    pub fn union(members: Vec<Ty>) -> Ty {
        debug_assert!(
            members
                .iter()
                .all(|m| !matches!(m, Ty::Union(_) | Ty::None)),
            "union members must be flattened and None-free"
        );
        let mut canonical: Vec<Ty> = Vec::with_capacity(members.len());
        for member in members {
            if !canonical.contains(&member) {
                canonical.push(member);
            }
        }
        canonical.sort_by_cached_key(|member| member.canonical_key());
        if canonical.len() == 1 {
            canonical.remove(0)
        } else {
            Ty::Union(canonical)
        }
    }
}

impl fmt::Display for Ty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ty::Simple(label) => write!(f, "<{label}>"),
            Ty::None => write!(f, "<None>"),
            Ty::Function(fun) => write!(f, "{}()", fun.label),
            Ty::Overloads(set) => write!(f, "{}()", set.label),
            Ty::Generic(generic) => write!(f, "<generic {}>", generic.label),
            Ty::Concrete(concrete) => {
                write!(f, "<{}[", concrete.base.label)?;
                for (i, arg) in concrete.args.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{arg}")?;
                }
                write!(f, "]>")
            }
            Ty::Optional(inner) => write!(f, "{inner}?"),
            Ty::Union(members) => {
                for (i, member) in members.iter().enumerate() {
                    if i > 0 {
                        write!(f, " #|# ")?;
                    }
                    write!(f, "{member}")?;
                }
                Ok(())
            }
            Ty::Object(object) => write!(f, "{}", object.label),
            Ty::Tuple(_) => write!(f, "()"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_never_nests() {
        let once = Ty::optional(Ty::int());
        let twice = Ty::optional(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn union_is_order_independent() {
        let a = Ty::union(vec![Ty::int(), Ty::float()]);
        let b = Ty::union(vec![Ty::float(), Ty::int()]);
        assert_eq!(a, b);
    }

    #[test]
    fn union_deduplicates_and_unwraps_singletons() {
        let merged = Ty::union(vec![Ty::int(), Ty::int()]);
        assert_eq!(merged, Ty::int());
    }

    #[test]
    fn ty_display() {
        assert_eq!(format!("{}", Ty::int()), "<Int>");
        assert_eq!(format!("{}", Ty::None), "<None>");
        assert_eq!(format!("{}", Ty::optional(Ty::int())), "<Int>?");
        assert_eq!(format!("{}", Ty::list(Ty::int())), "<List[<Int>]>");
        assert_eq!(
            format!("{}", Ty::Generic(GenericTy::list())),
            "<generic List>"
        );
        assert_eq!(
            format!("{}", Ty::union(vec![Ty::float(), Ty::int()])),
            "<Float> #|# <Int>"
        );
    }

    #[test]
    #[should_panic(expected = "generic List applied to 2 args")]
    fn generic_arity_is_checked() {
        GenericTy::list().apply(vec![Ty::int(), Ty::int()]);
    }
}
