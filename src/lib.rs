//! Constraint cascade engine for human-review triage.
//!
//! Decides which members of a scored candidate population are routed to a
//! human reviewer under two successive capacity limits, after an initial
//! quality gate, while keeping an auditable, strictly partitioned
//! accounting of every excluded item and why it was excluded.
//!
//! - **[`cascade`]**: the three-stage filter (score threshold → top-K
//!   shortlist → review budget) producing a
//!   [`ResultBundle`](cascade::ResultBundle) with the shown set, the
//!   dropped set (per-item stage and inclusion margin), the boundary item
//!   at each binding cutoff, and stage counts.
//! - **[`generate`]**: seeded synthetic candidate populations (a base
//!   population plus three edge-case templates) for demos and testing.
//! - **[`score`]**: fixed-coefficient logistic scoring of candidate
//!   features into a probability-like score in (0, 1).
//!
//! # Purity
//!
//! The cascade is a pure function of the population and three numeric
//! parameters: no I/O, no shared state, no interior mutation. Invoking it
//! concurrently for many distinct parameter tuples against the same
//! population is safe without locks; the `parallel` feature exposes
//! exactly that as [`cascade::apply_cascade_sweep`] on the rayon thread
//! pool.

pub mod candidate;
pub mod cascade;
pub mod error;
pub mod generate;
pub mod score;
