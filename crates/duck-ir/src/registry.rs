//! The method registry.
//!
//! Registration is driver-owned: each file translation returns its own
//! records, and the driver merges them here serially. Duplicate
//! qualified names follow last-write-wins, but every overwrite is
//! reported back so a driver can warn or reject instead of losing
//! records silently.

use std::rc::Rc;

use duck_common::QualName;
use duck_types::Ty;
use rustc_hash::FxHashMap;

use crate::ir::IrNode;

/// One registered function or method.
#[derive(Debug, Clone)]
pub struct MethodRecord {
    /// The globally unique `namespace[.class]#method` key.
    pub qualified: QualName,
    /// The bare method name.
    pub label: String,
    /// Ordered parameter names.
    pub params: Vec<String>,
    /// The translated method body (shared with the IR tree).
    pub node: Rc<IrNode>,
    /// Starts as the "no value" type; later inference fills it in.
    pub return_type: Ty,
}

/// All registered methods across translated files, keyed by qualified
/// name.
#[derive(Debug, Default)]
pub struct MethodRegistry {
    records: FxHashMap<QualName, MethodRecord>,
}

impl MethodRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert one record, returning the displaced record if the name
    /// was already registered.
    pub fn insert(&mut self, record: MethodRecord) -> Option<MethodRecord> {
        self.records.insert(record.qualified.clone(), record)
    }

    /// Merge a file's records into the registry.
    ///
    /// Returns the qualified names that were overwritten, in merge
    /// order. An empty result means the merge was collision-free.
    pub fn merge(&mut self, methods: Vec<MethodRecord>) -> Vec<QualName> {
        let mut overwritten = Vec::new();
        for record in methods {
            if let Some(previous) = self.insert(record) {
                overwritten.push(previous.qualified);
            }
        }
        overwritten
    }

    /// Look up a record by qualified name.
    pub fn get(&self, name: &QualName) -> Option<&MethodRecord> {
        self.records.get(name)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over all records in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&QualName, &MethodRecord)> {
        self.records.iter()
    }
}
