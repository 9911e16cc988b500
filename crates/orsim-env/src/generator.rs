//! Randomized case-list generation.
//!
//! Produces a synthetic day of surgical cases by rejection sampling:
//! duration and arrival time are resampled jointly whenever a draw
//! leaves no valid arrival window, rather than clamping arrivals, which
//! would skew the arrival distribution toward the end of the day.
//!
//! Determinism contract: sampling runs on an explicitly passed
//! [`ChaCha8Rng`], so identical seeds produce identical case lists
//! regardless of anything else happening in the process.

use orsim_core::{SurgicalCase, Urgency, TURNOVER_MARGIN};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::config::{ConfigError, GeneratorConfig};

/// Generate a sorted case list for one episode.
///
/// Durations are uniform in `[min_duration, max_duration]`, arrivals
/// uniform over the feasible window `[0, day_length - duration -
/// TURNOVER_MARGIN]`, and urgency is drawn from the fixed categorical
/// distribution {1: 0.30, 2: 0.30, 3: 0.40}. The output is sorted
/// ascending by arrival time.
///
/// # Errors
///
/// Returns [`ConfigError`] if the generator configuration is invalid for
/// `day_length`. Validation happens before any sampling, so this
/// function can never loop forever on a misconfigured range.
pub fn generate_cases(
    config: &GeneratorConfig,
    day_length: u32,
    rng: &mut ChaCha8Rng,
) -> Result<Vec<SurgicalCase>, ConfigError> {
    config.validate(day_length)?;
    Ok(sample_cases(config, day_length, rng))
}

/// Sampling loop behind [`generate_cases`].
///
/// Callers must have validated `config` against `day_length` first;
/// [`SchedulingEnv`](crate::env::SchedulingEnv) does so at construction.
pub(crate) fn sample_cases(
    config: &GeneratorConfig,
    day_length: u32,
    rng: &mut ChaCha8Rng,
) -> Vec<SurgicalCase> {
    let mut cases = Vec::with_capacity(config.num_cases);
    while cases.len() < config.num_cases {
        let duration = rng.random_range(config.min_duration..=config.max_duration);
        // Joint resample when the draw leaves no arrival window.
        // Unreachable for validated configs, where even max_duration
        // leaves room for the turnover margin.
        let Some(latest_arrival) = day_length
            .checked_sub(duration)
            .and_then(|slack| slack.checked_sub(TURNOVER_MARGIN))
        else {
            continue;
        };
        let arrival_time = rng.random_range(0..=latest_arrival);
        cases.push(SurgicalCase {
            duration,
            arrival_time,
            urgency: sample_urgency(rng),
        });
    }
    // Stable sort keeps equal-arrival cases in draw order.
    cases.sort_by_key(|case| case.arrival_time);
    cases
}

/// Draw an urgency from the fixed {0.30, 0.30, 0.40} distribution.
fn sample_urgency(rng: &mut ChaCha8Rng) -> Urgency {
    let draw: f64 = rng.random();
    if draw < 0.30 {
        Urgency::Routine
    } else if draw < 0.60 {
        Urgency::Elevated
    } else {
        Urgency::Critical
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;

    fn rng(seed: u64) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(seed)
    }

    #[test]
    fn same_seed_same_cases() {
        let cfg = GeneratorConfig::default();
        let a = generate_cases(&cfg, 480, &mut rng(7)).unwrap();
        let b = generate_cases(&cfg, 480, &mut rng(7)).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), cfg.num_cases);
    }

    #[test]
    fn different_seeds_differ() {
        let cfg = GeneratorConfig::default();
        let a = generate_cases(&cfg, 480, &mut rng(7)).unwrap();
        let b = generate_cases(&cfg, 480, &mut rng(8)).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn unsatisfiable_range_fails_fast() {
        let cfg = GeneratorConfig::default();
        match generate_cases(&cfg, 80, &mut rng(0)) {
            Err(ConfigError::DurationRangeUnsatisfiable { .. }) => {}
            other => panic!("expected DurationRangeUnsatisfiable, got {other:?}"),
        }
    }

    #[test]
    fn critical_fraction_near_forty_percent() {
        let cfg = GeneratorConfig {
            num_cases: 2000,
            ..GeneratorConfig::default()
        };
        let cases = generate_cases(&cfg, 480, &mut rng(42)).unwrap();
        let critical = cases
            .iter()
            .filter(|c| c.urgency.is_critical())
            .count() as f64;
        let fraction = critical / cases.len() as f64;
        assert!(
            (0.35..0.45).contains(&fraction),
            "critical fraction {fraction} far from 0.40"
        );
    }

    proptest! {
        #[test]
        fn every_case_leaves_turnover_margin(
            seed in any::<u64>(),
            num_cases in 1usize..40,
            min_duration in 1u32..60,
            extra in 0u32..60,
            day_slack in 1u32..200,
        ) {
            let max_duration = min_duration + extra;
            let day_length = max_duration + TURNOVER_MARGIN + day_slack;
            let cfg = GeneratorConfig { num_cases, min_duration, max_duration };
            let cases = generate_cases(&cfg, day_length, &mut rng(seed)).unwrap();

            prop_assert_eq!(cases.len(), num_cases);
            for case in &cases {
                prop_assert!(case.fits_in_day(day_length));
                prop_assert!(case.duration >= min_duration);
                prop_assert!(case.duration <= max_duration);
            }
        }

        #[test]
        fn output_sorted_by_arrival(seed in any::<u64>()) {
            let cfg = GeneratorConfig::default();
            let cases = generate_cases(&cfg, 480, &mut rng(seed)).unwrap();
            for pair in cases.windows(2) {
                prop_assert!(pair[0].arrival_time <= pair[1].arrival_time);
            }
        }
    }
}
