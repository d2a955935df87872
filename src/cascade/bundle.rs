//! The assembled cascade result.

use crate::candidate::Candidate;

use super::boundary::BoundaryItems;
use super::dropped::DroppedItem;

/// Sizes of each stage output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Counts {
    /// Full population size.
    pub n_total: usize,

    /// Candidates at or above the threshold.
    pub n_after_threshold: usize,

    /// Candidates surviving the top-K shortlist.
    pub n_after_topk: usize,

    /// Candidates shown to the reviewer.
    pub n_shown: usize,

    /// Candidates eligible but dropped by capacity.
    /// Always `n_after_threshold - n_shown`.
    pub n_dropped: usize,
}

/// Everything one cascade invocation produces.
///
/// This bundle is the entire surface a presentation layer may depend on:
/// no files or global state are written. All sequences are freshly
/// allocated in canonical order (score descending, id ascending), except
/// `dropped`, which is ordered by inclusion margin ascending so the
/// closest miss comes first.
///
/// `shown` and `dropped` always partition `after_threshold` exactly (as
/// id sets, disjoint); this is verified before the bundle is returned.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ResultBundle {
    /// Full population in canonical order.
    pub all_candidates: Vec<Candidate>,

    /// Stage 1 output: candidates with `score >= threshold`.
    pub after_threshold: Vec<Candidate>,

    /// Stage 2 output: the first `min(top_k, n_after_threshold)` of
    /// `after_threshold`.
    pub after_topk: Vec<Candidate>,

    /// Stage 3 output: the first `min(budget, n_after_topk)` of
    /// `after_topk`.
    pub shown: Vec<Candidate>,

    /// Excluded complement of `shown` within `after_threshold`, each item
    /// annotated with its stage and inclusion margin.
    pub dropped: Vec<DroppedItem>,

    /// Cutoff references for each binding constraint.
    pub boundary_items: BoundaryItems,

    /// Stage sizes.
    pub counts: Counts,
}
