/// How a unit turns its weighted input into output, and how error is scaled on the way back.
/// Threshold has no usable derivative, so error through it is left unscaled.
/// Backpropagating through Threshold units is therefore not true gradient descent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Activation {
    /// Pass-through, used by the input layer.
    Identity,
    /// Step function: 1 when the input is strictly above the threshold, else 0.
    Threshold(f64),
    /// Logistic function.
    Sigmoid,
}

impl Activation {
    pub fn function(&self, x: f64) -> f64 {
        match *self {
            Activation::Identity => x,
            Activation::Threshold(threshold) => if x > threshold { 1.0 } else { 0.0 },
            Activation::Sigmoid => 1.0 / (1.0 + (-x).exp()),
        }
    }

    /// Derivative written in terms of the unit's output, when the variant defines one.
    pub fn derivative(&self, output: f64) -> Option<f64> {
        match self {
            Activation::Identity => Some(1.0),
            Activation::Sigmoid => Some(output * (1.0 - output)),
            Activation::Threshold(_) => None,
        }
    }

    /// Applies the derivative to a raw error. No derivative means no scaling.
    pub fn scale_error(&self, raw_error: f64, output: f64) -> f64 {
        match self.derivative(output) {
            Some(derivative) => derivative * raw_error,
            None => raw_error,
        }
    }

    pub fn is_differentiable(&self) -> bool {
        self.derivative(0.0).is_some()
    }
}
