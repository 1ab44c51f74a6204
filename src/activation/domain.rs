use nalgebra::DVector;
use serde::Serialize;

/// Closed interval an activation function is plotted over.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Domain {
    min: f64,
    max: f64
}

impl Domain {
    pub const fn new(min: f64, max: f64) -> Domain {
        Domain { min, max }
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn contains(&self, x: f64) -> bool {
        self.min <= x && x <= self.max
    }

    /// `n` evenly spaced points; the end points are `min` and `max` exactly.
    pub fn linspace(&self, n: usize) -> DVector<f64> {
        match n {
            0 => DVector::zeros(0),
            1 => DVector::from_element(1, self.min),
            _ => {
                let step = (self.max - self.min) / (n - 1) as f64;
                DVector::from_fn(n, |i, _| {
                    if i == n - 1 {
                        self.max
                    } else {
                        self.min + step * i as f64
                    }
                })
            }
        }
    }
}
