use nalgebra::DVector;
use serde::{
    Deserialize,
    Serialize
};

/// Exponent arguments beyond this magnitude are clipped before `exp`.
pub const SIGMOID_CLIP: f64 = 500.0;

pub const LEAKY_RELU_ALPHA: f64 = 0.1;

pub const ELU_ALPHA: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ActivationFunction {
    Sigmoid,
    Tanh,
    Relu,
    LeakyRelu { alpha: f64 },
    Swish,
    Gelu,
    Elu { alpha: f64 }
}

pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x.clamp(-SIGMOID_CLIP, SIGMOID_CLIP)).exp())
}

pub fn relu(x: f64) -> f64 {
    x.max(0.0)
}

pub fn leaky_relu(x: f64, alpha: f64) -> f64 {
    if x > 0.0 { x } else { alpha * x }
}

pub fn swish(x: f64) -> f64 {
    x * sigmoid(x)
}

/// Tanh approximation of the Gaussian error linear unit.
pub fn gelu(x: f64) -> f64 {
    let k = (2.0 / std::f64::consts::PI).sqrt();
    0.5 * x * (1.0 + (k * (x + 0.044715 * x.powi(3))).tanh())
}

pub fn elu(x: f64, alpha: f64) -> f64 {
    // exp only on the negative branch, large positive x never reaches it
    if x > 0.0 { x } else { alpha * x.exp_m1() }
}

impl ActivationFunction {
    pub fn leaky_relu() -> ActivationFunction {
        ActivationFunction::LeakyRelu { alpha: LEAKY_RELU_ALPHA }
    }

    pub fn elu() -> ActivationFunction {
        ActivationFunction::Elu { alpha: ELU_ALPHA }
    }

    pub fn value(&self, x: f64) -> f64 {
        match self {
            ActivationFunction::Sigmoid => sigmoid(x),
            ActivationFunction::Tanh => x.tanh(),
            ActivationFunction::Relu => relu(x),
            ActivationFunction::LeakyRelu { alpha } => leaky_relu(x, *alpha),
            ActivationFunction::Swish => swish(x),
            ActivationFunction::Gelu => gelu(x),
            ActivationFunction::Elu { alpha } => elu(x, *alpha)
        }
    }

    /// Elementwise application over a whole grid.
    pub fn values(&self, xs: &DVector<f64>) -> DVector<f64> {
        xs.map(|x| self.value(x))
    }
}
