use std::convert::Infallible;
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::data::view::View;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use crate::core::fractals::mandelbrot::sample::PixelSample;
use crate::core::util::pixel_to_complex_coords::pixel_to_complex_coords;

/// Squared magnitude past which an orbit counts as escaped. Far larger than the
/// minimal 4.0 so the smooth-colouring estimate is accurate.
pub const BAILOUT_RADIUS: f64 = (1u32 << 16) as f64;

/// Evaluates the orbit of `z -> z² + c` from `z = 0` with a budget of
/// `max_iterations` steps.
///
/// Points in the main cardioid or the period-2 bulb are classified without
/// iterating. An orbit that lands exactly on a fixed point stops early as a
/// member. Escaping orbits get a fractional escape time; members report exactly
/// `max_iterations`.
#[must_use]
pub fn escape_time(c: Complex, max_iterations: u32) -> PixelSample {
    if in_main_cardioid(c) || in_period_two_bulb(c) {
        return PixelSample::member(max_iterations);
    }

    let mut z = Complex::ZERO;
    let mut iteration = 0;

    while z.magnitude_squared() < BAILOUT_RADIUS && iteration < max_iterations {
        let next = z * z + c;

        if next == z {
            return PixelSample::member(max_iterations);
        }

        z = next;
        iteration += 1;
    }

    if iteration >= max_iterations {
        return PixelSample::member(max_iterations);
    }

    let log_zn = z.magnitude_squared().ln() / 2.0;
    let nu = (log_zn / std::f64::consts::LN_2).ln() / std::f64::consts::LN_2;
    let smoothed = iteration as f64 + 1.0 - nu;

    PixelSample::escaped(smoothed.max(0.0))
}

#[inline]
fn in_main_cardioid(c: Complex) -> bool {
    let x = c.real - 0.25;
    let y_squared = c.imag * c.imag;
    let q = x * x + y_squared;

    q * (q + x) < 0.25 * y_squared
}

#[inline]
fn in_period_two_bulb(c: Complex) -> bool {
    let x = c.real + 1.0;

    x * x + c.imag * c.imag < 0.0625
}

/// Per-frame escape-time evaluator: a snapshot of the view and the frame's
/// iteration budget.
#[derive(Debug, Clone, PartialEq)]
pub struct MandelbrotAlgorithm {
    view: View,
    max_iterations: u32,
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    type Success = PixelSample;
    type Failure = Infallible;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
        let c = pixel_to_complex_coords(pixel, &self.view);

        Ok(escape_time(c, self.max_iterations))
    }
}

impl MandelbrotAlgorithm {
    pub fn new(view: View, max_iterations: u32) -> Result<Self, MandelbrotError> {
        if max_iterations == 0 {
            return Err(MandelbrotError::ZeroMaxIterationsError);
        }

        Ok(Self { view, max_iterations })
    }

    #[must_use]
    pub fn view(&self) -> View {
        self.view
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }
}
