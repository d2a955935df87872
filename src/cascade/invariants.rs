//! Input contract and partition invariants.
//!
//! Input validation rejects the caller's mistakes before any gate runs;
//! the invariant check verifies the assembled partition afterwards and
//! classifies any failure as an engine defect. The two produce different
//! error kinds so a server caller can map them onto different response
//! classes instead of dying on an assertion.

use std::collections::BTreeSet;

use crate::candidate::Candidate;
use crate::error::TriageError;

use super::bundle::ResultBundle;

/// Rejects populations that violate the input contract: empty or
/// duplicate ids, and scores that are non-finite or outside the open
/// interval (0, 1).
pub(super) fn validate_population(candidates: &[Candidate]) -> Result<(), TriageError> {
    let mut seen = BTreeSet::new();
    for candidate in candidates {
        if candidate.id.is_empty() {
            return Err(TriageError::invalid_input("id", "empty candidate id"));
        }
        if !seen.insert(candidate.id.as_str()) {
            return Err(TriageError::invalid_input(
                "id",
                format!("duplicate candidate id: {}", candidate.id),
            ));
        }
        if !candidate.score.is_finite() {
            return Err(TriageError::invalid_input(
                "score",
                format!("non-finite score for {}: {}", candidate.id, candidate.score),
            ));
        }
        if candidate.score <= 0.0 || candidate.score >= 1.0 {
            return Err(TriageError::invalid_input(
                "score",
                format!(
                    "score for {} outside the open interval (0, 1): {}",
                    candidate.id, candidate.score
                ),
            ));
        }
    }
    Ok(())
}

/// Verifies the partition contract over an assembled bundle:
///
/// 1. `shown ∪ dropped == after_threshold` (as id sets)
/// 2. `shown ∩ dropped == ∅`
/// 3. `n_shown + n_dropped == n_after_threshold`
/// 4. every inclusion margin is non-negative
/// 5. ids are unique across the canonical population
///
/// A failure is a defect in the cascade, not in the input (which was
/// validated before any gate ran), and is reported as
/// [`TriageError::InvariantViolation`].
pub(super) fn check_invariants(bundle: &ResultBundle) -> Result<(), TriageError> {
    let shown_ids: BTreeSet<&str> = bundle.shown.iter().map(|c| c.id.as_str()).collect();
    let dropped_ids: BTreeSet<&str> = bundle
        .dropped
        .iter()
        .map(|d| d.candidate.id.as_str())
        .collect();
    let eligible_ids: BTreeSet<&str> = bundle
        .after_threshold
        .iter()
        .map(|c| c.id.as_str())
        .collect();

    let union: BTreeSet<&str> = shown_ids.union(&dropped_ids).copied().collect();
    if union != eligible_ids {
        return Err(TriageError::InvariantViolation(
            "shown UNION dropped != after_threshold".into(),
        ));
    }

    if !shown_ids.is_disjoint(&dropped_ids) {
        return Err(TriageError::InvariantViolation(
            "shown INTERSECT dropped is not empty".into(),
        ));
    }

    if bundle.counts.n_shown + bundle.counts.n_dropped != bundle.counts.n_after_threshold {
        return Err(TriageError::InvariantViolation(format!(
            "count mismatch: {} shown + {} dropped != {} after threshold",
            bundle.counts.n_shown, bundle.counts.n_dropped, bundle.counts.n_after_threshold
        )));
    }

    if let Some(item) = bundle.dropped.iter().find(|d| d.inclusion_margin < 0.0) {
        return Err(TriageError::InvariantViolation(format!(
            "negative inclusion margin for {}: {}",
            item.candidate.id, item.inclusion_margin
        )));
    }

    let all_ids: BTreeSet<&str> = bundle.all_candidates.iter().map(|c| c.id.as_str()).collect();
    if all_ids.len() != bundle.all_candidates.len() {
        return Err(TriageError::InvariantViolation(
            "duplicate ids in canonical population".into(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cascade::{apply_cascade, CascadeParams};

    fn cand(id: &str, score: f64) -> Candidate {
        Candidate {
            id: id.to_string(),
            urgency: 0.5,
            confidence: 0.5,
            impact: 0.5,
            cost: 0.5,
            case_type: "base".to_string(),
            logit: 0.0,
            score,
        }
    }

    #[test]
    fn test_validate_accepts_clean_population() {
        let pop = vec![cand("A", 0.3), cand("B", 0.7)];
        assert!(validate_population(&pop).is_ok());
    }

    #[test]
    fn test_validate_accepts_empty_population() {
        assert!(validate_population(&[]).is_ok());
    }

    #[test]
    fn test_validate_rejects_duplicate_id() {
        let pop = vec![cand("A", 0.3), cand("A", 0.7)];
        let err = validate_population(&pop).unwrap_err();
        assert!(matches!(err, TriageError::InvalidInput { field: "id", .. }));
    }

    #[test]
    fn test_validate_rejects_empty_id() {
        let pop = vec![cand("", 0.3)];
        assert!(validate_population(&pop).is_err());
    }

    #[test]
    fn test_validate_rejects_score_at_closed_bounds() {
        // The interval is open: exactly 0 or 1 is out of contract.
        assert!(validate_population(&[cand("A", 0.0)]).is_err());
        assert!(validate_population(&[cand("A", 1.0)]).is_err());
    }

    #[test]
    fn test_validate_rejects_non_finite_score() {
        let err = validate_population(&[cand("A", f64::NAN)]).unwrap_err();
        assert!(matches!(
            err,
            TriageError::InvalidInput { field: "score", .. }
        ));
        assert!(validate_population(&[cand("A", f64::INFINITY)]).is_err());
    }

    #[test]
    fn test_check_invariants_accepts_real_bundle() {
        let pop = vec![cand("A", 0.9), cand("B", 0.8), cand("C", 0.6), cand("D", 0.3)];
        let params = CascadeParams::default()
            .with_threshold(0.5)
            .with_top_k(2)
            .with_budget(1);
        let bundle = apply_cascade(&pop, &params).unwrap();
        assert!(check_invariants(&bundle).is_ok());
    }

    #[test]
    fn test_check_invariants_catches_missing_drop() {
        let pop = vec![cand("A", 0.9), cand("B", 0.8), cand("C", 0.6)];
        let params = CascadeParams::default()
            .with_threshold(0.5)
            .with_top_k(2)
            .with_budget(2);
        let mut bundle = apply_cascade(&pop, &params).unwrap();

        // Corrupt the partition: lose a dropped item.
        bundle.dropped.clear();
        let err = check_invariants(&bundle).unwrap_err();
        assert!(matches!(err, TriageError::InvariantViolation(_)));
    }

    #[test]
    fn test_check_invariants_catches_overlap() {
        let pop = vec![cand("A", 0.9), cand("B", 0.8), cand("C", 0.6)];
        let params = CascadeParams::default()
            .with_threshold(0.5)
            .with_top_k(2)
            .with_budget(2);
        let mut bundle = apply_cascade(&pop, &params).unwrap();

        // Corrupt the partition: a shown candidate also appears dropped.
        bundle.shown.push(bundle.dropped[0].candidate.clone());
        bundle.counts.n_shown += 1;
        let err = check_invariants(&bundle).unwrap_err();
        assert!(matches!(err, TriageError::InvariantViolation(_)));
    }

    #[test]
    fn test_check_invariants_catches_count_mismatch() {
        let pop = vec![cand("A", 0.9), cand("B", 0.8)];
        let params = CascadeParams::default().with_threshold(0.5);
        let mut bundle = apply_cascade(&pop, &params).unwrap();

        bundle.counts.n_dropped += 1;
        let err = check_invariants(&bundle).unwrap_err();
        assert!(matches!(err, TriageError::InvariantViolation(_)));
    }

    #[test]
    fn test_check_invariants_catches_negative_margin() {
        let pop = vec![cand("A", 0.9), cand("B", 0.8), cand("C", 0.6)];
        let params = CascadeParams::default()
            .with_threshold(0.5)
            .with_top_k(2)
            .with_budget(2);
        let mut bundle = apply_cascade(&pop, &params).unwrap();

        bundle.dropped[0].inclusion_margin = -0.1;
        let err = check_invariants(&bundle).unwrap_err();
        assert!(matches!(err, TriageError::InvariantViolation(_)));
    }
}
