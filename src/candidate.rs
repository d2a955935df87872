//! The candidate record shared by the generator, scorer, and cascade.

/// A candidate for human review.
///
/// Produced by the candidate supply ([`crate::generate`]) and completed
/// by the scorer ([`crate::score`]), which fills in `logit` and `score`.
/// The cascade engine reads only `id` and `score`; every other field is
/// opaque payload carried through unchanged.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Candidate {
    /// Globally unique, non-empty identifier.
    pub id: String,

    /// Time sensitivity, in [0, 1].
    pub urgency: f64,

    /// Signal quality, in [0, 1].
    pub confidence: f64,

    /// Potential value, in [0, 1].
    pub impact: f64,

    /// Resource consumption, in [0, 1].
    pub cost: f64,

    /// Opaque population tag (e.g. `"base"`, `"borderline"`).
    /// Never interpreted by the cascade.
    pub case_type: String,

    /// Linear score before the sigmoid, set by the scorer.
    pub logit: f64,

    /// Probability-like score in the open interval (0, 1), set by the
    /// scorer. The cascade rejects populations whose scores fall outside
    /// this interval or are non-finite.
    pub score: f64,
}
