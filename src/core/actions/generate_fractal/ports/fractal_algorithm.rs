use std::error::Error;
use crate::core::data::point::Point;

/// Per-pixel evaluator driven by [`generate_fractal`](crate::core::actions::generate_fractal::generate_fractal::generate_fractal).
pub trait FractalAlgorithm {
    type Success;
    type Failure: Error;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure>;
}
