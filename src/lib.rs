//! # Text OT - Operational Transformation for collaborative text editing
//!
//! An Operational Transformation (OT) engine for convergent concurrent text
//! editing: an operation representation, an apply/invert engine, and a pairwise
//! transform algorithm that lets two clients who edited the same base text
//! concurrently reconcile their edits into a single, order-independent result.
//!
//! ## Features
//!
//! - **Convergent**: transformed operations satisfy TP1; applied in either
//!   causal order they yield an identical resulting text
//! - **Invertible**: every operation can be inverted relative to its base text,
//!   giving undo for free
//! - **Pure**: `apply`, `invert`, and `transform` never mutate their inputs and
//!   hold no shared state, so they are safe to call from any thread
//! - **Wire-ready**: operations serialize to an ordered list of tagged
//!   component descriptors via serde
//!
//! ## Example
//!
//! ```rust
//! use text_ot::TextOperation;
//!
//! let op = TextOperation::new().retain(6).insert("beautiful ");
//! let result = op.apply("Hello world!").unwrap();
//! assert_eq!(result, "Hello beautiful world!");
//! ```

pub mod ot;

// Re-export the main public API from the OT module
pub use ot::{Component, OtError, TextOperation, transform};
