use nalgebra::DVector;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point2D {
    x: f64,
    y: f64
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Point2D {
        Point2D { x, y }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }
}

/// Sampled `(x, y)` pairs of one function, ordered by `x`.
#[derive(Debug, Clone)]
pub struct Curve {
    xs: DVector<f64>,
    ys: DVector<f64>
}

impl Curve {
    /// `xs` and `ys` must have the same length.
    pub fn new(xs: DVector<f64>, ys: DVector<f64>) -> Curve {
        debug_assert_eq!(xs.len(), ys.len());
        Curve { xs, ys }
    }

    pub fn len(&self) -> usize {
        self.xs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    pub fn xs(&self) -> &DVector<f64> {
        &self.xs
    }

    pub fn ys(&self) -> &DVector<f64> {
        &self.ys
    }

    pub fn points(&self) -> impl Iterator<Item = Point2D> + '_ {
        self.xs.iter().zip(self.ys.iter()).map(|(&x, &y)| Point2D::new(x, y))
    }

    pub fn min_x(&self) -> f64 {
        self.xs.min()
    }

    pub fn max_x(&self) -> f64 {
        self.xs.max()
    }

    /// Finite y range, for sizing plot axes.
    pub fn y_bounds(&self) -> Option<(f64, f64)> {
        self.ys
            .iter()
            .copied()
            .filter(|y| y.is_finite())
            .fold(None, |acc, y| match acc {
                None => Some((y, y)),
                Some((lo, hi)) => Some((lo.min(y), hi.max(y)))
            })
    }
}
