//! Synthetic population generation.
//!
//! The population mixes a correlated base block with three edge-case
//! templates, generated in a fixed order with no shuffling so that ids
//! are stable across runs of the same configuration.

use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Beta, Distribution, Normal};

use crate::candidate::Candidate;
use crate::error::TriageError;

use super::config::GeneratorConfig;

/// Case tag for the correlated base population.
pub const CASE_BASE: &str = "base";
/// Case tag for template A: high urgency, low confidence.
pub const CASE_HIGH_URG_LOW_CONF: &str = "high_urg_low_conf";
/// Case tag for template B: high impact, high cost.
pub const CASE_HIGH_IMPACT_HIGH_COST: &str = "high_impact_high_cost";
/// Case tag for template C: borderline cluster near the default threshold.
pub const CASE_BORDERLINE: &str = "borderline";

const EDGE_TEMPLATES: usize = 3;

// Shape/noise parameters below are fixed constants, so construction
// cannot fail at runtime.
fn beta(alpha: f64, shape: f64) -> Beta<f64> {
    Beta::new(alpha, shape).expect("valid beta shape parameters")
}

fn normal(mean: f64, std_dev: f64) -> Normal<f64> {
    Normal::new(mean, std_dev).expect("valid normal parameters")
}

fn unscored(urgency: f64, confidence: f64, impact: f64, cost: f64, case_type: &str) -> Candidate {
    Candidate {
        id: String::new(),
        urgency,
        confidence,
        impact,
        cost,
        case_type: case_type.to_string(),
        logit: 0.0,
        score: 0.0,
    }
}

/// Generates a synthetic candidate population.
///
/// Blocks are generated in a fixed order — base, then edge templates A,
/// B, C — and ids `C0000`, `C0001`, … are assigned in that order with no
/// shuffling. All features land in [0, 1]. Only a local seeded RNG is
/// used, so the same configuration always yields an identical
/// population.
///
/// The base block (the `1 - edge_fraction` share) draws a latent
/// priority from Beta(2, 5) and derives all four features from it with
/// per-feature Gaussian noise, giving realistically correlated records.
/// The edge share is split evenly across the three templates, with the
/// borderline template absorbing the division remainder.
///
/// Candidates come back unscored (`logit` and `score` zeroed); run them
/// through [`ScoreModel::score_candidates`](crate::score::ScoreModel::score_candidates)
/// before feeding the cascade.
///
/// # Errors
///
/// [`TriageError::InvalidInput`] when the configuration fails
/// [`GeneratorConfig::validate`].
pub fn generate_candidates(config: &GeneratorConfig) -> Result<Vec<Candidate>, TriageError> {
    config.validate()?;

    let mut rng = StdRng::seed_from_u64(config.seed);

    let n = config.n_candidates;
    let n_base = (n as f64 * (1.0 - config.edge_fraction)) as usize;
    let n_edge = n - n_base;
    let n_per_template = n_edge / EDGE_TEMPLATES;
    // Template C absorbs the remainder when n_edge is not divisible by 3.
    let n_borderline = n_edge - (EDGE_TEMPLATES - 1) * n_per_template;

    let mut candidates = Vec::with_capacity(n);

    // Base population: latent priority drives all four features.
    // Priority itself is internal and never appears in the output.
    let priority_dist = beta(2.0, 5.0);
    let urgency_noise = normal(0.0, 0.12);
    let confidence_noise = normal(0.0, 0.14);
    let impact_noise = normal(0.0, 0.13);
    let cost_noise = normal(0.0, 0.12);
    for _ in 0..n_base {
        let priority = priority_dist.sample(&mut rng);
        candidates.push(unscored(
            (priority + urgency_noise.sample(&mut rng)).clamp(0.0, 1.0),
            (0.60 * priority + 0.20 + confidence_noise.sample(&mut rng)).clamp(0.0, 1.0),
            (0.70 * priority + 0.10 + impact_noise.sample(&mut rng)).clamp(0.0, 1.0),
            (1.00 - priority + cost_noise.sample(&mut rng)).clamp(0.0, 1.0),
            CASE_BASE,
        ));
    }

    // Template A: high urgency, low confidence.
    let a_urgency = beta(6.0, 2.0);
    let a_confidence = beta(2.0, 6.0);
    let a_other = beta(4.0, 3.0);
    for _ in 0..n_per_template {
        candidates.push(unscored(
            a_urgency.sample(&mut rng),
            a_confidence.sample(&mut rng),
            a_other.sample(&mut rng),
            a_other.sample(&mut rng),
            CASE_HIGH_URG_LOW_CONF,
        ));
    }

    // Template B: high impact, high cost.
    let b_urgency = beta(3.0, 4.0);
    let b_confidence = beta(4.0, 3.0);
    let b_heavy = beta(7.0, 2.0);
    for _ in 0..n_per_template {
        candidates.push(unscored(
            b_urgency.sample(&mut rng),
            b_confidence.sample(&mut rng),
            b_heavy.sample(&mut rng),
            b_heavy.sample(&mut rng),
            CASE_HIGH_IMPACT_HIGH_COST,
        ));
    }

    // Template C: borderline cluster hovering near the default threshold.
    let c_urgency = normal(0.55, 0.08);
    let c_confidence = normal(0.50, 0.10);
    let c_impact = normal(0.55, 0.09);
    let c_cost = normal(0.50, 0.10);
    for _ in 0..n_borderline {
        candidates.push(unscored(
            c_urgency.sample(&mut rng).clamp(0.0, 1.0),
            c_confidence.sample(&mut rng).clamp(0.0, 1.0),
            c_impact.sample(&mut rng).clamp(0.0, 1.0),
            c_cost.sample(&mut rng).clamp(0.0, 1.0),
            CASE_BORDERLINE,
        ));
    }

    // Stable ids in generation order.
    for (i, candidate) in candidates.iter_mut().enumerate() {
        candidate.id = format!("C{i:04}");
    }

    Ok(candidates)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_identical_population() {
        let config = GeneratorConfig::default();
        let first = generate_candidates(&config).unwrap();
        let second = generate_candidates(&config).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_different_seeds_differ() {
        let first = generate_candidates(&GeneratorConfig::default().with_seed(1)).unwrap();
        let second = generate_candidates(&GeneratorConfig::default().with_seed(2)).unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_population_size_and_stable_ids() {
        let pop = generate_candidates(&GeneratorConfig::default()).unwrap();
        assert_eq!(pop.len(), 120);
        for (i, candidate) in pop.iter().enumerate() {
            assert_eq!(candidate.id, format!("C{i:04}"));
        }
    }

    #[test]
    fn test_all_features_within_unit_interval() {
        let config = GeneratorConfig::default().with_n_candidates(300);
        let pop = generate_candidates(&config).unwrap();
        for c in &pop {
            for value in [c.urgency, c.confidence, c.impact, c.cost] {
                assert!((0.0..=1.0).contains(&value), "{}: {value}", c.id);
            }
        }
    }

    #[test]
    fn test_case_type_split() {
        // 120 candidates at 15% edge: 102 base, 18 edge, 6 per template.
        let pop = generate_candidates(&GeneratorConfig::default()).unwrap();
        let count = |tag: &str| pop.iter().filter(|c| c.case_type == tag).count();
        assert_eq!(count(CASE_BASE), 102);
        assert_eq!(count(CASE_HIGH_URG_LOW_CONF), 6);
        assert_eq!(count(CASE_HIGH_IMPACT_HIGH_COST), 6);
        assert_eq!(count(CASE_BORDERLINE), 6);
    }

    #[test]
    fn test_generation_order_is_fixed() {
        let pop = generate_candidates(&GeneratorConfig::default()).unwrap();
        // Base block first, then templates A, B, C with no interleaving.
        assert_eq!(pop[0].case_type, CASE_BASE);
        assert_eq!(pop[101].case_type, CASE_BASE);
        assert_eq!(pop[102].case_type, CASE_HIGH_URG_LOW_CONF);
        assert_eq!(pop[108].case_type, CASE_HIGH_IMPACT_HIGH_COST);
        assert_eq!(pop[114].case_type, CASE_BORDERLINE);
        assert_eq!(pop[119].case_type, CASE_BORDERLINE);
    }

    #[test]
    fn test_remainder_goes_to_borderline() {
        // 100 candidates at 15% edge: 85 base, 15 edge. 15 / 3 = 5 per
        // template, no remainder; with n=101, 85 base (101 * 0.85 = 85.85
        // truncated) leaves 16 edge: 5 + 5 + 6.
        let pop = generate_candidates(&GeneratorConfig::default().with_n_candidates(101)).unwrap();
        let count = |tag: &str| pop.iter().filter(|c| c.case_type == tag).count();
        assert_eq!(count(CASE_BASE), 85);
        assert_eq!(count(CASE_HIGH_URG_LOW_CONF), 5);
        assert_eq!(count(CASE_HIGH_IMPACT_HIGH_COST), 5);
        assert_eq!(count(CASE_BORDERLINE), 6);
    }

    #[test]
    fn test_single_candidate_population() {
        let pop = generate_candidates(&GeneratorConfig::default().with_n_candidates(1)).unwrap();
        assert_eq!(pop.len(), 1);
        assert_eq!(pop[0].id, "C0000");
    }

    #[test]
    fn test_candidates_come_back_unscored() {
        let pop = generate_candidates(&GeneratorConfig::default()).unwrap();
        assert!(pop.iter().all(|c| c.score == 0.0 && c.logit == 0.0));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = GeneratorConfig::default().with_n_candidates(0);
        assert!(generate_candidates(&config).is_err());
    }
}
