/// A range of real values, used for ray parameters and channel clamping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f64,
    pub max: f64,
}

impl Interval {
    /// Create a new interval given min and max values.
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Returns true if x is within the half-open interval [min, max).
    ///
    /// Nearest-hit searches shrink `max` to the closest distance seen so far;
    /// the open upper end keeps the first object found at a distance.
    pub fn admits(&self, x: f64) -> bool {
        self.min <= x && x < self.max
    }

    /// Returns a copy of the interval with a new upper bound.
    pub fn with_max(&self, max: f64) -> Interval {
        Interval::new(self.min, max)
    }

    /// Clamps x to be within the interval [min, max].
    pub fn clamp(&self, x: f64) -> f64 {
        x.clamp(self.min, self.max)
    }

    /// The unit interval [0, 1] that display channels are clamped to.
    pub const UNIT: Interval = Interval { min: 0.0, max: 1.0 };
}
