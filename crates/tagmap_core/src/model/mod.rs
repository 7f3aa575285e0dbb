//! Domain model for notes, tags and the tag co-occurrence graph.
//!
//! # Responsibility
//! - Define the value types flowing through extraction, aggregation and
//!   graph construction.
//! - Own the frozen graph representation and its read-only views.
//!
//! # Invariants
//! - Tags are stored case-folded and without their marker prefix.
//! - A built graph exposes no structural mutation.

pub mod graph;
pub mod note;
