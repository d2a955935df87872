//! Synthetic candidate supply.
//!
//! Produces seeded populations of uniquely-identified candidate records
//! with feature attributes in [0, 1]: a correlated base block plus three
//! edge-case templates (high urgency/low confidence, high impact/high
//! cost, borderline). Used for demos and as a realistic input source in
//! tests and benchmarks; the cascade itself consumes any candidate
//! collection and does not depend on this module.

mod config;
mod generator;

pub use config::{GeneratorConfig, DEFAULT_EDGE_FRACTION};
pub use generator::{
    generate_candidates, CASE_BASE, CASE_BORDERLINE, CASE_HIGH_IMPACT_HIGH_COST,
    CASE_HIGH_URG_LOW_CONF,
};
