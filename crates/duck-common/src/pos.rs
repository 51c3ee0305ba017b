//! Source positions.

use serde::Serialize;

/// A line/column position in a source file.
///
/// Lines and columns are whatever the upstream parser reports (for the
/// Python front end: 1-based lines, 0-based columns). Constructs that
/// carry no position -- synthesized blocks, bare literals appearing as
/// node attributes -- use the [`Pos::UNKNOWN`] sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Pos {
    pub line: i32,
    pub column: i32,
}

impl Pos {
    /// The `(-1, -1)` sentinel for constructs without a source position.
    pub const UNKNOWN: Pos = Pos { line: -1, column: -1 };

    pub fn new(line: i32, column: i32) -> Self {
        Pos { line, column }
    }

    /// Whether this is a real position (not the sentinel).
    pub fn is_known(&self) -> bool {
        *self != Pos::UNKNOWN
    }
}

impl Default for Pos {
    fn default() -> Self {
        Pos::UNKNOWN
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_is_not_known() {
        assert!(!Pos::UNKNOWN.is_known());
        assert!(Pos::new(3, 0).is_known());
    }
}
