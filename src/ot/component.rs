//! Component definition for text operations.
//!
//! This module contains the `Component` enum, the smallest unit of an edit
//! description, along with its wire-level serde representation.

use serde::{Deserialize, Serialize};

/// A single step of a text operation.
///
/// An operation is an ordered sequence of components, each describing what to
/// do with the next span of the base text:
///
/// - `Retain`: skip `count` characters of the base text, copying them to the
///   output unchanged
/// - `Insert`: emit `value` into the output without consuming any base text
/// - `Delete`: consume `count` characters of the base text without copying
///   them to the output
///
/// All counts are in Unicode scalar values (`char`), never bytes.
///
/// # Wire format
///
/// Components serialize to tagged JSON descriptors, the sole artifact
/// exchanged with remote collaborators:
///
/// ```json
/// { "type": "retain", "count": 5 }
/// { "type": "insert", "value": "abc" }
/// { "type": "delete", "count": 2 }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Component {
    /// Keep the next `count` characters of the base text
    Retain {
        /// Number of characters to copy through unchanged
        count: usize,
    },
    /// Insert new text at the current position
    Insert {
        /// The text to insert
        value: String,
    },
    /// Remove the next `count` characters of the base text
    Delete {
        /// Number of characters to drop
        count: usize,
    },
}

impl Component {
    /// Number of base-text characters this component consumes.
    ///
    /// Retain and delete both advance the read cursor; insert does not touch
    /// the base text at all.
    pub fn consumed(&self) -> usize {
        match self {
            Component::Retain { count } | Component::Delete { count } => *count,
            Component::Insert { .. } => 0,
        }
    }

    /// Number of characters this component contributes to the result text.
    pub fn produced(&self) -> usize {
        match self {
            Component::Retain { count } => *count,
            Component::Insert { value } => value.chars().count(),
            Component::Delete { .. } => 0,
        }
    }

    /// Returns true if this component is a no-op (zero count or empty text).
    ///
    /// The builder silently drops such components rather than storing them.
    pub fn is_noop(&self) -> bool {
        match self {
            Component::Retain { count } | Component::Delete { count } => *count == 0,
            Component::Insert { value } => value.is_empty(),
        }
    }
}
