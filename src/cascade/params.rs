//! Cascade parameters.
//!
//! [`CascadeParams`] holds the three numeric knobs that, together with
//! the candidate population, fully determine a cascade invocation.

use crate::error::TriageError;

/// Parameters for one cascade invocation.
///
/// # Defaults
///
/// ```
/// use triage_cascade::cascade::CascadeParams;
///
/// let params = CascadeParams::default();
/// assert_eq!(params.threshold, 0.5);
/// assert_eq!(params.top_k, 20);
/// assert_eq!(params.budget, 10);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use triage_cascade::cascade::CascadeParams;
///
/// let params = CascadeParams::default()
///     .with_threshold(0.65)
///     .with_top_k(30)
///     .with_budget(8);
/// assert!(params.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CascadeParams {
    /// Minimum score to pass the quality gate, in [0, 1]. The boundary is
    /// inclusive: a candidate scoring exactly `threshold` passes.
    pub threshold: f64,

    /// Maximum shortlist size after the threshold (stage 2). At least 1;
    /// values exceeding the eligible population are clamped, not rejected.
    pub top_k: usize,

    /// Maximum number of candidates shown to the reviewer (stage 3).
    /// At least 1; values exceeding the shortlist are clamped.
    pub budget: usize,
}

impl Default for CascadeParams {
    fn default() -> Self {
        Self {
            threshold: 0.5,
            top_k: 20,
            budget: 10,
        }
    }
}

impl CascadeParams {
    /// Sets the score threshold.
    ///
    /// Out-of-range values are carried as-is and rejected by
    /// [`validate`](Self::validate); they are never silently coerced.
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Sets the top-K shortlist size.
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    /// Sets the review budget.
    pub fn with_budget(mut self, budget: usize) -> Self {
        self.budget = budget;
        self
    }

    /// Validates the parameters.
    ///
    /// # Errors
    ///
    /// [`TriageError::InvalidInput`] naming the offending field when
    /// `threshold` is non-finite or outside [0, 1], or when `top_k` or
    /// `budget` is zero.
    pub fn validate(&self) -> Result<(), TriageError> {
        if !self.threshold.is_finite() || !(0.0..=1.0).contains(&self.threshold) {
            return Err(TriageError::invalid_input(
                "threshold",
                format!("must be in [0, 1], got {}", self.threshold),
            ));
        }
        if self.top_k < 1 {
            return Err(TriageError::invalid_input("top_k", "must be at least 1"));
        }
        if self.budget < 1 {
            return Err(TriageError::invalid_input("budget", "must be at least 1"));
        }
        Ok(())
    }
}
