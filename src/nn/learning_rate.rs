use crate::error::{NetworkError, Result};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LearningRate {
    rate: f64
}

impl LearningRate {
    /// Constant rate; must be finite and positive.
    pub fn new(rate: f64) -> Result<Self> {
        if !rate.is_finite() || rate <= 0.0 {
            let message = format!("learning rate must be finite and positive, found {rate}");
            return Err(NetworkError::InvalidArgument(message));
        }

        Ok(Self { rate })
    }

    /// Return the current learning rate.
    pub fn rate(&self) -> f64 {
        self.rate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_learning_rate() {
        let learning_rate = LearningRate::new(0.1).unwrap();
        assert_eq!(learning_rate.rate(), 0.1);
    }

    #[test]
    fn test_rejects_invalid() {
        assert!(LearningRate::new(0.0).is_err());
        assert!(LearningRate::new(-0.5).is_err());
        assert!(LearningRate::new(f64::NAN).is_err());
        assert!(LearningRate::new(f64::INFINITY).is_err());
    }
}
