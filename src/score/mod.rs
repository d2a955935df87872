//! Fixed-coefficient candidate scoring.
//!
//! Maps the four feature attributes to a probability-like score in the
//! open interval (0, 1) via a logistic model with fixed coefficients.
//! The coefficients are never fitted; determinism and interpretability
//! are the point. The cascade consumes only the resulting `score` field
//! and works with any scorer honoring that contract.

mod model;

pub use model::ScoreModel;
