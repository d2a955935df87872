//! Generator configuration.

use crate::error::TriageError;

/// Default fraction of the population drawn from edge-case templates.
pub const DEFAULT_EDGE_FRACTION: f64 = 0.15;

/// Configuration for synthetic candidate generation.
///
/// # Defaults
///
/// ```
/// use triage_cascade::generate::GeneratorConfig;
///
/// let config = GeneratorConfig::default();
/// assert_eq!(config.seed, 42);
/// assert_eq!(config.n_candidates, 120);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use triage_cascade::generate::GeneratorConfig;
///
/// let config = GeneratorConfig::default()
///     .with_seed(7)
///     .with_n_candidates(500)
///     .with_edge_fraction(0.2);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeneratorConfig {
    /// Seed for the local RNG. The same seed and size always produce an
    /// identical population; no global random state is touched.
    pub seed: u64,

    /// Total number of candidates to generate. At least 1.
    pub n_candidates: usize,

    /// Fraction of candidates drawn from the three edge-case templates,
    /// in [0, 1]. The remainder forms the base population.
    pub edge_fraction: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            n_candidates: 120,
            edge_fraction: DEFAULT_EDGE_FRACTION,
        }
    }
}

impl GeneratorConfig {
    /// Sets the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the total population size.
    pub fn with_n_candidates(mut self, n: usize) -> Self {
        self.n_candidates = n;
        self
    }

    /// Sets the edge-case fraction, clamped to [0, 1].
    pub fn with_edge_fraction(mut self, fraction: f64) -> Self {
        self.edge_fraction = fraction.clamp(0.0, 1.0);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), TriageError> {
        if self.n_candidates < 1 {
            return Err(TriageError::invalid_input(
                "n_candidates",
                "must be at least 1",
            ));
        }
        if !self.edge_fraction.is_finite() || !(0.0..=1.0).contains(&self.edge_fraction) {
            return Err(TriageError::invalid_input(
                "edge_fraction",
                format!("must be in [0, 1], got {}", self.edge_fraction),
            ));
        }
        Ok(())
    }
}
