//! Option records supplied by the host.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// A host-supplied candidate shown in the dropdown list.
///
/// The record itself is plain data. What matters to the control is the
/// *handle* it is shared through: see [`OptionRef`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: i64,
    pub label: String,
}

impl SelectOption {
    /// Create an option record.
    pub fn new(value: i64, label: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
        }
    }

    /// Create an option record wrapped in a shared handle.
    pub fn shared(value: i64, label: impl Into<String>) -> OptionRef {
        Arc::new(Self::new(value, label))
    }
}

/// Shared handle to an option.
///
/// Selection and highlight comparisons throughout the control use handle
/// identity ([`Arc::ptr_eq`]), never field equality. Two distinct handles
/// with equal `value` and `label` are two different options. The host must
/// therefore keep option handles stable across renders; cloning the `Arc`
/// is fine, rebuilding the records is not.
pub type OptionRef = Arc<SelectOption>;

/// Check whether two handles refer to the same option.
pub fn same_option(a: &OptionRef, b: &OptionRef) -> bool {
    Arc::ptr_eq(a, b)
}
