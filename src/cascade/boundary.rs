//! Cutoff items for explainability.

use crate::candidate::Candidate;

use super::params::CascadeParams;

/// The cutoff references for each binding constraint.
///
/// Purely explanatory: boundary items never affect the partition. When
/// present they are clones of the exact elements the dropped-set margins
/// were computed against — `kth_item` is the last element of
/// `after_topk`, `budget_item` the last element of `shown`, with
/// identical id and score. Callers rely on that identity for
/// cross-checking.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BoundaryItems {
    /// Echo of the threshold parameter.
    pub threshold: f64,

    /// Echo of the top-K parameter.
    pub top_k: usize,

    /// Echo of the budget parameter.
    pub budget: usize,

    /// Score of the K-th admitted item; `None` when the shortlist
    /// constraint is not binding.
    pub kth_score: Option<f64>,

    /// The K-th admitted item itself.
    pub kth_item: Option<Candidate>,

    /// Score of the last shown item; `None` when the budget constraint
    /// is not binding.
    pub budget_score: Option<f64>,

    /// The last shown item itself.
    pub budget_item: Option<Candidate>,
}

/// Resolves the boundary items from the three gate outputs.
///
/// "Binding" is derived, never stored: the shortlist binds iff
/// `top_k < |after_threshold|`; the budget binds iff the budget itself —
/// not merely the `min()` clamp — was the limiting factor, i.e.
/// `budget_actual < |after_topk|`. The looser `budget <= top_k` test
/// would wrongly report a budget boundary when the two clamps merely
/// coincide numerically.
pub(super) fn resolve_boundaries(
    after_threshold: &[Candidate],
    after_topk: &[Candidate],
    shown: &[Candidate],
    params: &CascadeParams,
) -> BoundaryItems {
    let mut boundary = BoundaryItems {
        threshold: params.threshold,
        top_k: params.top_k,
        budget: params.budget,
        kth_score: None,
        kth_item: None,
        budget_score: None,
        budget_item: None,
    };

    let topk_binding = params.top_k < after_threshold.len();
    if topk_binding {
        if let Some(kth) = after_topk.last() {
            boundary.kth_score = Some(kth.score);
            boundary.kth_item = Some(kth.clone());
        }
    }

    // shown.len() == budget_actual holds by construction; checking it
    // anyway keeps the binding test byte-for-byte the derived condition.
    let budget_actual = params.budget.min(after_topk.len());
    let budget_binding = shown.len() == budget_actual && budget_actual < after_topk.len();
    if budget_binding {
        if let Some(last_shown) = shown.last() {
            boundary.budget_score = Some(last_shown.score);
            boundary.budget_item = Some(last_shown.clone());
        }
    }

    boundary
}
