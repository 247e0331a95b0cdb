/// Outcome of evaluating one pixel. Lives only for the two passes of a frame.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PixelSample {
    /// Continuous escape time in `[0, max_iterations]`.
    pub escape_value: f64,
    pub in_set: bool,
}

impl PixelSample {
    #[must_use]
    pub fn member(max_iterations: u32) -> Self {
        Self {
            escape_value: max_iterations as f64,
            in_set: true,
        }
    }

    #[must_use]
    pub fn escaped(escape_value: f64) -> Self {
        Self {
            escape_value,
            in_set: false,
        }
    }
}
