//! Pairwise transform of concurrent operations.
//!
//! Given two operations built against the same base text, [`transform`]
//! produces a pair of adjusted operations that each apply cleanly after the
//! other side's original edit, with both orders converging on the same text
//! (the TP1 property).

use tracing::debug;

use crate::ot::component::Component;
use crate::ot::error::OtError;
use crate::ot::operation::TextOperation;

/// The head of a partially-consumed component sequence.
///
/// Counts are the characters still unconsumed in the current component, so
/// the transform loop can split a component across several dispatch steps
/// without ever touching the caller's operation.
enum Head<'a> {
    Retain(usize),
    Insert(&'a str),
    Delete(usize),
}

/// Read-only cursor over an operation's components.
///
/// Tracks the current component index plus the characters already consumed
/// within it. All partial-consumption state lives here, locally owned by the
/// `transform` call; the operation itself is never mutated.
struct Cursor<'a> {
    ops: &'a [Component],
    idx: usize,
    offset: usize,
}

impl<'a> Cursor<'a> {
    fn new(op: &'a TextOperation) -> Self {
        Cursor {
            ops: op.components(),
            idx: 0,
            offset: 0,
        }
    }

    /// Current head with its remaining count, or `None` when exhausted.
    fn head(&self) -> Option<Head<'a>> {
        self.ops.get(self.idx).map(|c| match c {
            Component::Retain { count } => Head::Retain(count - self.offset),
            Component::Insert { value } => Head::Insert(value),
            Component::Delete { count } => Head::Delete(count - self.offset),
        })
    }

    /// Moves past the current component entirely.
    fn advance(&mut self) {
        self.idx += 1;
        self.offset = 0;
    }

    /// Consumes `k` characters of the current retain/delete head, advancing
    /// to the next component once it is fully spent.
    fn consume(&mut self, k: usize) {
        let remaining = match &self.ops[self.idx] {
            Component::Retain { count } | Component::Delete { count } => count - self.offset,
            Component::Insert { .. } => 0,
        };
        if k >= remaining {
            self.advance();
        } else {
            self.offset += k;
        }
    }
}

/// Transforms two concurrent operations built against the same base text.
///
/// Returns `(a_prime, b_prime)` such that for every text `t` both operations
/// are valid against:
///
/// ```text
/// b_prime.apply(a.apply(t)) == a_prime.apply(b.apply(t))
/// ```
///
/// In other words, side A applies its own `a` then the adjusted `b_prime`,
/// side B applies its own `b` then the adjusted `a_prime`, and both end up
/// with the identical document.
///
/// When both heads are inserts at the same position, `a`'s insert is placed
/// first. This is deterministic but arbitrary; callers that need a fairer
/// tie-break should order the pair by a stable site identifier before
/// calling.
///
/// The caller's operations are never mutated; partial consumption of a
/// component during the merge is tracked on per-call cursors.
///
/// # Errors
///
/// Returns [`OtError::UnhandledTransformCase`] if one operation runs out of
/// components while the other still wants to retain or delete, which means
/// the two operations do not cover the same base text.
pub fn transform(
    a: &TextOperation,
    b: &TextOperation,
) -> Result<(TextOperation, TextOperation), OtError> {
    debug!(
        a_components = a.components().len(),
        b_components = b.components().len(),
        "transforming concurrent operations"
    );

    let mut ca = Cursor::new(a);
    let mut cb = Cursor::new(b);
    let mut a_prime = TextOperation::new();
    let mut b_prime = TextOperation::new();

    loop {
        match (ca.head(), cb.head()) {
            (None, None) => break,

            // A's insert wins dispatch before any other comparison: B steps
            // over the newly inserted text.
            (Some(Head::Insert(s)), _) => {
                a_prime = a_prime.insert(s);
                b_prime = b_prime.retain(s.chars().count());
                ca.advance();
            }

            // B inserts; A steps over it.
            (_, Some(Head::Insert(s))) => {
                b_prime = b_prime.insert(s);
                a_prime = a_prime.retain(s.chars().count());
                cb.advance();
            }

            // Both keep the overlapping span.
            (Some(Head::Retain(m)), Some(Head::Retain(n))) => {
                let k = m.min(n);
                a_prime = a_prime.retain(k);
                b_prime = b_prime.retain(k);
                ca.consume(k);
                cb.consume(k);
            }

            // A deletes what B merely retained: A still deletes, B's retain
            // of that span vanishes with the text.
            (Some(Head::Delete(m)), Some(Head::Retain(n))) => {
                let k = m.min(n);
                a_prime = a_prime.delete(k);
                ca.consume(k);
                cb.consume(k);
            }

            (Some(Head::Retain(m)), Some(Head::Delete(n))) => {
                let k = m.min(n);
                b_prime = b_prime.delete(k);
                ca.consume(k);
                cb.consume(k);
            }

            // Both deleted the same span; it is already gone for both sides,
            // so neither adjusted operation mentions it.
            (Some(Head::Delete(m)), Some(Head::Delete(n))) => {
                let k = m.min(n);
                ca.consume(k);
                cb.consume(k);
            }

            // One side exhausted while the other still consumes base text:
            // the inputs cannot share a base text.
            (Some(_), None) | (None, Some(_)) => {
                return Err(OtError::UnhandledTransformCase);
            }
        }
    }

    debug!(
        a_prime_components = a_prime.components().len(),
        b_prime_components = b_prime.components().len(),
        "transform complete"
    );

    Ok((a_prime, b_prime))
}
