//! Shared primitives for the ducktype front end.
//!
//! Provides source positions ([`Pos`]), namespace derivation from file
//! paths ([`NamespaceConfig`]), and qualified method names ([`QualName`]).
//! These are the leaf types every other crate in the workspace builds on.

mod namespace;
mod pos;
mod qualname;

pub use namespace::NamespaceConfig;
pub use pos::Pos;
pub use qualname::QualName;
