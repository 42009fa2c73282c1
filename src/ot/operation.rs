//! Core text operation type: builder, apply, and invert.
//!
//! A `TextOperation` describes an edit relative to a specific base text as an
//! ordered sequence of retain/insert/delete components. It is built once via
//! chained builder calls and is read-only thereafter.

use serde::{Deserialize, Deserializer, Serialize};
use tracing::trace;

use crate::ot::component::Component;
use crate::ot::error::OtError;

/// An edit described relative to a base text.
///
/// An operation is only meaningful against the text it was built for: the sum
/// of its retain and delete counts (the coverage) must not exceed that text's
/// length, and for full invertibility must equal it. `apply` and `invert`
/// reject operations that over-run the base text with
/// [`OtError::OutOfRange`].
///
/// # Builder
///
/// Builder calls are chainable and silently drop zero counts and empty insert
/// text. This is a deliberate no-op policy, not an error: callers can feed
/// computed counts without guarding against zero.
///
/// ```rust
/// use text_ot::TextOperation;
///
/// let op = TextOperation::new().retain(2).delete(3);
/// assert_eq!(op.apply("abcdefg").unwrap(), "abfg");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct TextOperation {
    /// The ordered component sequence
    ops: Vec<Component>,
}

impl TextOperation {
    /// Creates an empty operation.
    ///
    /// Applied to any text, an empty operation returns that text unchanged.
    pub fn new() -> Self {
        TextOperation { ops: Vec::new() }
    }

    /// Constructs an operation from a wire-level component list.
    ///
    /// No-op components (zero counts, empty insert text) are dropped, the
    /// same normalization the builder applies.
    pub fn from_components(components: Vec<Component>) -> Self {
        TextOperation {
            ops: components.into_iter().filter(|c| !c.is_noop()).collect(),
        }
    }

    /// Appends `Retain(n)` if `n > 0`, otherwise does nothing.
    pub fn retain(mut self, n: usize) -> Self {
        if n > 0 {
            self.ops.push(Component::Retain { count: n });
        }
        self
    }

    /// Appends `Insert(text)` if `text` is non-empty, otherwise does nothing.
    pub fn insert(mut self, text: impl Into<String>) -> Self {
        let value = text.into();
        if !value.is_empty() {
            self.ops.push(Component::Insert { value });
        }
        self
    }

    /// Appends `Delete(n)` if `n > 0`, otherwise does nothing.
    pub fn delete(mut self, n: usize) -> Self {
        if n > 0 {
            self.ops.push(Component::Delete { count: n });
        }
        self
    }

    /// Returns the ordered component list.
    pub fn components(&self) -> &[Component] {
        &self.ops
    }

    /// Consumes the operation, returning its component list.
    pub fn into_components(self) -> Vec<Component> {
        self.ops
    }

    /// Returns true if the operation has no components.
    pub fn is_noop(&self) -> bool {
        self.ops.is_empty()
    }

    /// Number of base-text characters the operation covers (retain + delete).
    ///
    /// For an operation satisfying the coverage invariant this equals the
    /// char length of its base text.
    pub fn base_len(&self) -> usize {
        self.ops.iter().map(Component::consumed).sum()
    }

    /// Char length of the result of applying this operation to a base text
    /// of exactly `base_len()` characters.
    pub fn target_len(&self) -> usize {
        self.ops.iter().map(Component::produced).sum()
    }

    /// Applies the operation to `base`, producing the edited text.
    ///
    /// Walks the components in order with a read cursor over `base`'s chars:
    /// retain copies, insert emits, delete skips. Whatever the components did
    /// not cover is appended unchanged, so an operation whose coverage falls
    /// short of the text length still produces a well-defined result.
    ///
    /// # Errors
    ///
    /// Returns [`OtError::OutOfRange`] if the operation retains or deletes
    /// past the end of `base`, meaning it was not built against this text.
    pub fn apply(&self, base: &str) -> Result<String, OtError> {
        let available = base.chars().count();
        let needed = self.base_len();
        if needed > available {
            return Err(OtError::OutOfRange { needed, available });
        }

        let mut chars = base.chars();
        let mut result = String::with_capacity(base.len());

        for op in &self.ops {
            match op {
                Component::Retain { count } => {
                    result.extend(chars.by_ref().take(*count));
                }
                Component::Insert { value } => {
                    result.push_str(value);
                }
                Component::Delete { count } => {
                    // Consume without copying
                    chars.by_ref().take(*count).for_each(drop);
                }
            }
        }

        // Uncovered suffix passes through unchanged
        result.extend(chars);

        trace!(
            components = self.ops.len(),
            base_chars = available,
            result_chars = result.chars().count(),
            "applied operation"
        );

        Ok(result)
    }

    /// Computes the operation that undoes this one.
    ///
    /// The inverse is relative to `base`, the text this operation was built
    /// against: retains stay retains, inserts become deletes of the inserted
    /// length, and deletes become inserts of the text they removed (read back
    /// out of `base`).
    ///
    /// For any operation whose coverage equals `base`'s length:
    ///
    /// ```rust
    /// # use text_ot::TextOperation;
    /// let base = "abcdefg";
    /// let op = TextOperation::new().retain(2).delete(3).retain(2);
    /// let undo = op.invert(base).unwrap();
    /// assert_eq!(undo.apply(&op.apply(base).unwrap()).unwrap(), base);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`OtError::OutOfRange`] under the same condition as
    /// [`apply`](Self::apply).
    pub fn invert(&self, base: &str) -> Result<TextOperation, OtError> {
        let available = base.chars().count();
        let needed = self.base_len();
        if needed > available {
            return Err(OtError::OutOfRange { needed, available });
        }

        let mut chars = base.chars();
        let mut inverse = TextOperation::new();

        for op in &self.ops {
            match op {
                Component::Retain { count } => {
                    inverse = inverse.retain(*count);
                    chars.by_ref().take(*count).for_each(drop);
                }
                Component::Insert { value } => {
                    // The inserted text was never part of `base`
                    inverse = inverse.delete(value.chars().count());
                }
                Component::Delete { count } => {
                    let deleted: String = chars.by_ref().take(*count).collect();
                    inverse = inverse.insert(deleted);
                }
            }
        }

        Ok(inverse)
    }
}

impl From<Vec<Component>> for TextOperation {
    fn from(components: Vec<Component>) -> Self {
        TextOperation::from_components(components)
    }
}

impl<'de> Deserialize<'de> for TextOperation {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Normalize through the builder policy so the no-op invariant holds
        // even for component lists produced by lenient peers.
        let components = Vec::<Component>::deserialize(deserializer)?;
        Ok(TextOperation::from_components(components))
    }
}
