//! Type representation and unification for the ducktype front end.
//!
//! [`Ty`] is the closed set of type expressions observed for program
//! slots (variables, parameters, return values). [`unify`] collapses a
//! set of independently-observed types into one minimal canonical type,
//! e.g. `{List[Int], List[Float], None}` into
//! `Optional(List[Union(Float, Int)])`.

mod json;
mod ty;
mod unify;

pub use ty::{ConcreteTy, FunctionTy, GenericTy, ObjectTy, OverloadSet, Ty, Variable};
pub use unify::unify;
