//! Three-stage constraint cascade: quality threshold → top-K shortlist →
//! review budget.
//!
//! The pipeline runs in strict sequence over the canonically ordered
//! population (score descending, id ascending); each stage is a pure,
//! order-preserving function of the previous stage's output. The
//! excluded complement is reconstructed with a per-item stage and
//! inclusion margin, the binding cutoffs are reported as boundary items,
//! and the partition invariants are verified before the bundle is
//! returned.
//!
//! ```
//! use triage_cascade::cascade::{apply_cascade, CascadeParams};
//! use triage_cascade::generate::{generate_candidates, GeneratorConfig};
//! use triage_cascade::score::ScoreModel;
//!
//! let population = generate_candidates(&GeneratorConfig::default()).unwrap();
//! let scored = ScoreModel::default().score_candidates(&population).unwrap();
//!
//! let params = CascadeParams::default()
//!     .with_threshold(0.5)
//!     .with_top_k(20)
//!     .with_budget(10);
//! let bundle = apply_cascade(&scored, &params).unwrap();
//!
//! assert_eq!(
//!     bundle.counts.n_shown + bundle.counts.n_dropped,
//!     bundle.counts.n_after_threshold
//! );
//! ```

mod boundary;
mod bundle;
mod dropped;
mod engine;
mod invariants;
mod params;

pub use boundary::BoundaryItems;
pub use bundle::{Counts, ResultBundle};
pub use dropped::{CapacityStage, DroppedItem, DROPPED_BY_CAPACITY};
pub use engine::{apply_cascade, apply_cascade_sweep, canonical_order, sort_candidates};
pub use params::CascadeParams;
