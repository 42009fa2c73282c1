//! Error types for the OT engine.

use thiserror::Error;

/// Errors surfaced by `apply`, `invert`, and `transform`.
///
/// All variants are fatal to the call that produced them and are returned
/// synchronously to the immediate caller; nothing is retried, truncated, or
/// partially applied. The collaboration layer decides whether to drop the
/// operation, resynchronize, or escalate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OtError {
    /// The operation retains or deletes past the end of the supplied base
    /// text. This signals that the operation was not built against this
    /// exact base text.
    #[error(
        "operation extends past the end of the base text \
         (covers {needed} chars, base has {available})"
    )]
    OutOfRange {
        /// Characters the operation wants to retain or delete in total
        needed: usize,
        /// Characters actually present in the base text
        available: usize,
    },

    /// Transform ran one operation out of components while the other still
    /// wanted to retain or delete. The two operations do not share a base
    /// text, which violates the caller's invariant.
    #[error("transform inputs do not cover the same base text")]
    UnhandledTransformCase,
}
