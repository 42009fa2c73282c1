//! Operational Transformation (OT) implementation module.
//!
//! This module contains the text operation representation, the apply/invert
//! engine, and the pairwise transform algorithm, along with the error types
//! shared between them.

pub mod component;
pub mod error;
pub mod operation;
pub mod transform;

// Re-export the main public API
pub use component::Component;
pub use error::OtError;
pub use operation::TextOperation;
pub use transform::transform;
