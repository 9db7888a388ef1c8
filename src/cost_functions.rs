use crate::error::{NetworkError, Result};

/// Mean of the squared differences. Empty inputs cost nothing.
pub fn mean_square_error(lhs: &[f64], rhs: &[f64]) -> Result<f64> {
    if lhs.len() != rhs.len() {
        return Err(NetworkError::DimensionMismatch { expected: lhs.len(), actual: rhs.len() });
    }

    if lhs.is_empty() {
        return Ok(0.0);
    }

    let mse = lhs.iter()
        .zip(rhs)
        .map(|(a, b)| (a - b).powi(2))
        .sum::<f64>() / (lhs.len() as f64);

    Ok(mse)
}
