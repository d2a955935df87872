//! Reconstruction of the excluded complement.
//!
//! Only candidates that passed the threshold can be "dropped": the
//! taxonomy distinguishes near misses (eligible but squeezed out by a
//! capacity limit) from clear rejects below the threshold, which never
//! appear here.

use crate::candidate::Candidate;

use super::engine::canonical_order;

/// Fixed reason recorded on every capacity drop.
///
/// Locked taxonomy term; downstream tooling matches on it verbatim.
pub const DROPPED_BY_CAPACITY: &str = "eligible but dropped by capacity";

/// Which capacity constraint excluded a dropped candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CapacityStage {
    /// Excluded by the fixed-size shortlist (stage 2).
    TopK,
    /// Excluded by the review budget (stage 3).
    Budget,
}

/// A candidate that passed the threshold but was excluded by capacity.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DroppedItem {
    /// The excluded candidate, unchanged.
    pub candidate: Candidate,

    /// Always [`DROPPED_BY_CAPACITY`]. Kept as a field so serialized
    /// rows carry the taxonomy term alongside the stage and margin.
    pub dropped_reason: &'static str,

    /// The stage whose limit excluded this candidate.
    pub capacity_stage: CapacityStage,

    /// Score gap to the binding cutoff for the recorded stage:
    /// `cutoff_score - candidate.score`, never negative.
    pub inclusion_margin: f64,
}

/// Builds the ordered dropped sequence from the three gate outputs.
///
/// Because every gate output is a prefix of its predecessor, the stage-2
/// drops are exactly the suffix of `after_threshold` past `after_topk`,
/// and the stage-3 drops the suffix of `after_topk` past `shown`. The
/// cutoff for each stage is the last admitted item of that stage; margins
/// are non-negative by construction since the suffixes sort at or below
/// the cutoff.
///
/// The combined sequence is re-sorted by `(inclusion_margin asc,
/// score desc, id asc)`, placing the closest miss first.
pub(super) fn build_dropped(
    after_threshold: &[Candidate],
    after_topk: &[Candidate],
    shown: &[Candidate],
) -> Vec<DroppedItem> {
    let mut dropped = Vec::with_capacity(after_threshold.len() - shown.len());

    // Stage 2: shortlist smaller than the eligible set.
    if after_topk.len() < after_threshold.len() {
        if let Some(kth) = after_topk.last() {
            for candidate in &after_threshold[after_topk.len()..] {
                dropped.push(DroppedItem {
                    candidate: candidate.clone(),
                    dropped_reason: DROPPED_BY_CAPACITY,
                    capacity_stage: CapacityStage::TopK,
                    inclusion_margin: kth.score - candidate.score,
                });
            }
        }
    }

    // Stage 3: budget smaller than the shortlist.
    if shown.len() < after_topk.len() {
        if let Some(last_shown) = shown.last() {
            for candidate in &after_topk[shown.len()..] {
                dropped.push(DroppedItem {
                    candidate: candidate.clone(),
                    dropped_reason: DROPPED_BY_CAPACITY,
                    capacity_stage: CapacityStage::Budget,
                    inclusion_margin: last_shown.score - candidate.score,
                });
            }
        }
    }

    dropped.sort_by(|a, b| {
        a.inclusion_margin
            .total_cmp(&b.inclusion_margin)
            .then_with(|| canonical_order(&a.candidate, &b.candidate))
    });

    dropped
}
