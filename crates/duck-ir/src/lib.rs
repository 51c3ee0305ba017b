//! Canonical IR for the ducktype front end.
//!
//! Translates an externally-parsed syntax tree into a language-agnostic
//! IR that preserves source positions and literal precision. Translation
//! is per-file and side-effect-free: each call returns the IR root, a
//! line index over call expressions, and the method records it
//! discovered; the driver merges records into a [`MethodRegistry`]
//! serially, so concurrent multi-file translation needs no locking.

mod ir;
mod registry;
mod translate;

pub use ir::{ClassMethod, IrKind, IrNode};
pub use registry::{MethodRecord, MethodRegistry};
pub use translate::{translate_file, FileTranslation};
