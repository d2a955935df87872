//! Cascade execution.
//!
//! The pipeline runs in strict sequence — sort, threshold, top-K,
//! budget — then reconstructs the excluded complement, resolves the
//! boundary items, and checks the partition invariants before returning.
//! Every stage is a pure, total function of its inputs: no stage mutates
//! a previously produced sequence in place.

use std::cmp::Ordering;

use crate::candidate::Candidate;
use crate::error::TriageError;

use super::boundary::resolve_boundaries;
use super::bundle::{Counts, ResultBundle};
use super::dropped::build_dropped;
use super::invariants::{check_invariants, validate_population};
use super::params::CascadeParams;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// The canonical total order: score descending, then id ascending.
///
/// This order is imposed once by [`sort_candidates`] and inherited by
/// every later stage through slicing; it is never re-derived downstream.
/// `total_cmp` keeps the comparator total without an `unwrap`; scores
/// are validated finite before any sort, so it agrees with IEEE `<` on
/// every value that actually occurs.
pub fn canonical_order(a: &Candidate, b: &Candidate) -> Ordering {
    b.score.total_cmp(&a.score).then_with(|| a.id.cmp(&b.id))
}

/// Returns the population freshly allocated in canonical order.
///
/// The sort is stable: entries comparing equal under `(score, id)` keep
/// their relative input order. Unique ids make that case impossible
/// today, but stability is part of the contract so a future non-unique
/// key does not silently reorder. Deterministic for a fixed input set
/// regardless of input order.
pub fn sort_candidates(candidates: &[Candidate]) -> Vec<Candidate> {
    let mut ordered = candidates.to_vec();
    ordered.sort_by(canonical_order);
    ordered
}

/// Stage 1: order-preserving filter keeping `score >= threshold`.
///
/// The boundary is inclusive. An empty result is a valid outcome.
fn threshold_gate(ordered: &[Candidate], threshold: f64) -> Vec<Candidate> {
    ordered
        .iter()
        .filter(|c| c.score >= threshold)
        .cloned()
        .collect()
}

/// Stage 2: prefix of length `min(top_k, len)`.
fn capacity_gate(after_threshold: &[Candidate], top_k: usize) -> Vec<Candidate> {
    let k_actual = top_k.min(after_threshold.len());
    after_threshold[..k_actual].to_vec()
}

/// Stage 3: prefix of length `min(budget, len)`.
fn budget_gate(after_topk: &[Candidate], budget: usize) -> Vec<Candidate> {
    let budget_actual = budget.min(after_topk.len());
    after_topk[..budget_actual].to_vec()
}

/// Runs the gates over an already validated, canonically ordered
/// population and assembles the checked bundle.
fn run_gates(ordered: &[Candidate], params: &CascadeParams) -> Result<ResultBundle, TriageError> {
    let after_threshold = threshold_gate(ordered, params.threshold);
    let after_topk = capacity_gate(&after_threshold, params.top_k);
    let shown = budget_gate(&after_topk, params.budget);

    let dropped = build_dropped(&after_threshold, &after_topk, &shown);
    let boundary_items = resolve_boundaries(&after_threshold, &after_topk, &shown, params);

    let counts = Counts {
        n_total: ordered.len(),
        n_after_threshold: after_threshold.len(),
        n_after_topk: after_topk.len(),
        n_shown: shown.len(),
        n_dropped: dropped.len(),
    };

    let bundle = ResultBundle {
        all_candidates: ordered.to_vec(),
        after_threshold,
        after_topk,
        shown,
        dropped,
        boundary_items,
        counts,
    };

    check_invariants(&bundle)?;
    Ok(bundle)
}

/// Applies the three-stage constraint cascade to a candidate population.
///
/// Sorts the population into canonical order, applies the quality
/// threshold, the top-K shortlist, and the review budget in strict
/// sequence, then returns the complete [`ResultBundle`]: the shown set,
/// the excluded complement with per-item stage and inclusion margin, the
/// boundary item at each binding cutoff, and stage counts.
///
/// Oversized `top_k` or `budget` values are clamped with `min()`, never
/// rejected; an empty population or a threshold that eliminates everyone
/// are valid degenerate outcomes, not errors.
///
/// # Errors
///
/// - [`TriageError::InvalidInput`] when the parameters fail
///   [`CascadeParams::validate`] or the population violates its contract
///   (duplicate or empty ids, scores outside (0, 1) or non-finite) —
///   checked before any gate runs.
/// - [`TriageError::InvariantViolation`] when the assembled bundle fails
///   a partition check, indicating a defect in the cascade itself.
pub fn apply_cascade(
    candidates: &[Candidate],
    params: &CascadeParams,
) -> Result<ResultBundle, TriageError> {
    params.validate()?;
    validate_population(candidates)?;

    let ordered = sort_candidates(candidates);
    run_gates(&ordered, params)
}

/// Evaluates the cascade for many parameter tuples against one population.
///
/// The population is validated and sorted once; each tuple then runs the
/// pure pipeline independently, so results are identical to calling
/// [`apply_cascade`] per tuple. With the `parallel` feature enabled the
/// tuples are evaluated on the rayon thread pool; order of the returned
/// bundles always matches the order of `sweep`.
///
/// # Errors
///
/// Same taxonomy as [`apply_cascade`]. All parameter tuples are
/// validated up front, so no work runs when any tuple is invalid.
pub fn apply_cascade_sweep(
    candidates: &[Candidate],
    sweep: &[CascadeParams],
) -> Result<Vec<ResultBundle>, TriageError> {
    for params in sweep {
        params.validate()?;
    }
    validate_population(candidates)?;

    let ordered = sort_candidates(candidates);

    #[cfg(feature = "parallel")]
    return sweep.par_iter().map(|p| run_gates(&ordered, p)).collect();

    #[cfg(not(feature = "parallel"))]
    sweep.iter().map(|p| run_gates(&ordered, p)).collect()
}
