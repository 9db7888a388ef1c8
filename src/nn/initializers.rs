//! Weight generators for `Network::initialize`.

use rand::{rngs::StdRng, SeedableRng};
use rand_distr::{Distribution, Uniform};

use crate::error::{NetworkError, Result};

pub fn constant(value: f64) -> impl FnMut() -> f64 {
    move || value
}

/// Draws uniformly from [low, high] with a seeded generator, so runs are reproducible.
pub fn uniform(low: f64, high: f64, seed: u64) -> Result<impl FnMut() -> f64> {
    if !(low.is_finite() && high.is_finite() && low <= high) {
        let message = format!("invalid uniform bounds [{low}, {high}]");
        return Err(NetworkError::InvalidArgument(message));
    }

    let distribution = Uniform::new_inclusive(low, high);
    let mut rng = StdRng::seed_from_u64(seed);

    Ok(move || distribution.sample(&mut rng))
}

/// Uniform in ±sqrt(6 / fan_in).
pub fn xavier_uniform(fan_in: usize, seed: u64) -> Result<impl FnMut() -> f64> {
    if fan_in == 0 {
        return Err(NetworkError::InvalidArgument("fan-in must be at least 1".to_string()));
    }

    let term = (6. / (fan_in as f64)).sqrt();
    uniform(-term, term, seed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_is_bounded_and_seeded() {
        let mut first = uniform(-0.1, 0.1, 7).unwrap();
        let mut second = uniform(-0.1, 0.1, 7).unwrap();

        for _ in 0..1000 {
            let value = first();
            assert!((-0.1..=0.1).contains(&value));
            assert_eq!(value, second());
        }
    }

    #[test]
    fn test_uniform_rejects_bad_bounds() {
        assert!(uniform(1.0, -1.0, 0).is_err());
        assert!(uniform(f64::NEG_INFINITY, 1.0, 0).is_err());
    }

    #[test]
    fn test_xavier_bounds() {
        let mut generator = xavier_uniform(6, 1).unwrap();
        for _ in 0..1000 {
            assert!((-1.0..=1.0).contains(&generator()));
        }

        assert!(xavier_uniform(0, 1).is_err());
    }
}
