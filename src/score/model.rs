//! Fixed-coefficient logistic scorer.

use crate::candidate::Candidate;
use crate::error::TriageError;

/// Fixed-coefficient logistic model mapping candidate features to a
/// probability-like score:
///
/// `logit = intercept + b_u*urgency + b_c*confidence + b_i*impact + b_k*cost`,
/// `score = sigmoid(logit)`.
///
/// The default coefficients are fixed for determinism and
/// interpretability, never fitted to data: urgency carries the largest
/// weight (time-sensitive decisions dominate), confidence is the unit
/// reference, impact sits slightly below it, and cost is the only
/// penalty. The intercept calibrates a roughly 50% pass rate at the
/// default threshold of 0.5 for feature means near 0.5.
///
/// ```
/// use triage_cascade::score::ScoreModel;
///
/// let model = ScoreModel::default();
/// assert!((model.intercept - -1.2).abs() < 1e-10);
/// assert!((model.urgency - 1.5).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoreModel {
    /// Intercept term.
    pub intercept: f64,
    /// Weight on urgency.
    pub urgency: f64,
    /// Weight on confidence.
    pub confidence: f64,
    /// Weight on impact.
    pub impact: f64,
    /// Weight on cost (negative: a penalty).
    pub cost: f64,
}

impl Default for ScoreModel {
    fn default() -> Self {
        Self {
            intercept: -1.2,
            urgency: 1.5,
            confidence: 1.0,
            impact: 0.8,
            cost: -0.6,
        }
    }
}

impl ScoreModel {
    /// Computes the linear score for one candidate.
    pub fn logit(&self, candidate: &Candidate) -> f64 {
        self.intercept
            + self.urgency * candidate.urgency
            + self.confidence * candidate.confidence
            + self.impact * candidate.impact
            + self.cost * candidate.cost
    }

    /// Scores a population, returning fresh records with `logit` and
    /// `score` filled in. The input is not mutated.
    ///
    /// # Errors
    ///
    /// [`TriageError::InvalidInput`] when a resulting score is
    /// non-finite or falls outside the open interval (0, 1) — possible
    /// only when features are non-finite or far outside [0, 1], where
    /// the sigmoid saturates.
    pub fn score_candidates(&self, candidates: &[Candidate]) -> Result<Vec<Candidate>, TriageError> {
        candidates
            .iter()
            .map(|candidate| {
                let z = self.logit(candidate);
                let score = sigmoid(z);
                if !score.is_finite() || score <= 0.0 || score >= 1.0 {
                    return Err(TriageError::invalid_input(
                        "score",
                        format!(
                            "scoring {} produced {} (logit {})",
                            candidate.id, score, z
                        ),
                    ));
                }
                let mut scored = candidate.clone();
                scored.logit = z;
                scored.score = score;
                Ok(scored)
            })
            .collect()
    }
}

/// Numerically stable sigmoid: branches on the sign of `z` so `exp`
/// never overflows.
fn sigmoid(z: f64) -> f64 {
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let e = z.exp();
        e / (1.0 + e)
    }
}
