/// Smallest and largest escape values seen in a frame. Colour maps normalise
/// against it so contrast stays stable however deep the view is.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct EscapeRange {
    min: f64,
    max: f64,
}

impl EscapeRange {
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Tracks the extremes of `values`. `None` for an empty frame.
    pub fn observe(values: impl IntoIterator<Item = f64>) -> Option<Self> {
        values.into_iter().fold(None, |range, value| {
            Some(match range {
                None => Self::new(value, value),
                Some(Self { min, max }) => Self::new(min.min(value), max.max(value)),
            })
        })
    }

    #[must_use]
    pub fn min(&self) -> f64 {
        self.min
    }

    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }

    #[must_use]
    pub fn is_flat(&self) -> bool {
        !(self.max > self.min)
    }

    /// Position of `value` within the range, clamped to `[0, 1]`. A flat range
    /// maps everything to 0.
    #[must_use]
    pub fn normalise(&self, value: f64) -> f64 {
        if self.is_flat() {
            return 0.0;
        }

        let t = (value - self.min) / (self.max - self.min);
        if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) }
    }
}
