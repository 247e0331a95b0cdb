use crate::core::fractals::mandelbrot::errors::MandelbrotError;

/// Headroom kept between the slowest-escaping pixel's count and the budget.
pub const DELTA_ITERATIONS: u32 = 500;

/// Iteration budget carried from one scan to the next.
///
/// After every scan the budget becomes `DELTA_ITERATIONS + floor(min_observed)`,
/// so it follows the deepest structure in view instead of staying fixed.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct IterationBudget {
    max_iterations: u32,
}

impl Default for IterationBudget {
    fn default() -> Self {
        Self {
            max_iterations: DELTA_ITERATIONS,
        }
    }
}

impl IterationBudget {
    pub fn new(max_iterations: u32) -> Result<Self, MandelbrotError> {
        if max_iterations == 0 {
            return Err(MandelbrotError::ZeroMaxIterationsError);
        }

        Ok(Self { max_iterations })
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    /// Budget for the scan after one whose smallest escape value was `min_observed`.
    #[must_use]
    pub fn adapted(min_observed: f64) -> Self {
        let floor = if min_observed.is_finite() && min_observed > 0.0 {
            min_observed.floor().min(u32::MAX as f64) as u32
        } else {
            0
        };

        Self {
            max_iterations: DELTA_ITERATIONS.saturating_add(floor),
        }
    }
}
