//! The parse-tree contract for the ducktype front end.
//!
//! The upstream parser hands translation an already-parsed tree: ordered
//! nodes, each with a construct kind, named attributes, and a source
//! position. This crate gives that contract a concrete, typed shape --
//! [`TreeNode`] with a closed [`TreeKind`] enumeration and [`AttrValue`]
//! payloads -- without committing to any particular parser library.

mod kind;
mod node;
mod value;

pub use kind::TreeKind;
pub use node::TreeNode;
pub use value::{AttrValue, IntValue, Usage};
