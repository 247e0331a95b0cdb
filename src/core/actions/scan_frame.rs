use crate::core::actions::generate_fractal::generate_fractal::generate_fractal;
use crate::core::actions::render_frame::ports::drawing_surface::DrawingSurface;
use crate::core::actions::render_frame::render_frame::{RenderFrameError, render_frame};
use crate::core::data::view::View;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::mandelbrot::budget::IterationBudget;
use crate::core::fractals::mandelbrot::colour_mapping::factory::mandelbrot_colour_map_factory;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKind;
use crate::core::fractals::mandelbrot::colour_mapping::range::EscapeRange;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use log::debug;
use std::error::Error;
use std::fmt;

#[derive(Debug, PartialEq)]
pub enum ScanFrameError<E> {
    Algorithm(MandelbrotError),
    Render(RenderFrameError<E>),
}

impl<E: fmt::Display> fmt::Display for ScanFrameError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Algorithm(err) => write!(f, "could not set up scan: {}", err),
            Self::Render(err) => write!(f, "could not render scan: {}", err),
        }
    }
}

impl<E: Error + 'static> Error for ScanFrameError<E> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Algorithm(err) => Some(err),
            Self::Render(err) => Some(err),
        }
    }
}

impl<E> From<MandelbrotError> for ScanFrameError<E> {
    fn from(err: MandelbrotError) -> Self {
        Self::Algorithm(err)
    }
}

impl<E> From<RenderFrameError<E>> for ScanFrameError<E> {
    fn from(err: RenderFrameError<E>) -> Self {
        Self::Render(err)
    }
}

/// What one scan measured, and the budget it hands to the next one.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrameStats {
    pub escape_range: EscapeRange,
    pub max_iterations: u32,
    pub next_budget: IterationBudget,
    pub in_set_pixels: u64,
}

/// Scans the whole view in two passes and draws it onto `surface`.
///
/// The first pass evaluates every pixel with `budget` and records the escape
/// range; the second maps the cached samples through the `colour_map_kind`
/// palette. Callers carry [`FrameStats::next_budget`] into the following scan.
pub fn scan_frame<S: DrawingSurface>(
    view: &View,
    budget: IterationBudget,
    colour_map_kind: MandelbrotColourMapKind,
    surface: &mut S,
) -> Result<FrameStats, ScanFrameError<S::Failure>> {
    let region = view.region();
    let algorithm = MandelbrotAlgorithm::new(*view, budget.max_iterations())?;

    debug!(
        "scanning {}x{} at magnification {} with {} iterations",
        region.width(),
        region.height(),
        view.magnification(),
        budget.max_iterations()
    );

    let Ok(samples) = generate_fractal(region, &algorithm);

    let escape_range = EscapeRange::observe(samples.iter().map(|sample| sample.escape_value))
        .unwrap_or(EscapeRange::new(0.0, 0.0));
    let next_budget = IterationBudget::adapted(escape_range.min());
    let in_set_pixels = samples.iter().filter(|sample| sample.in_set).count() as u64;

    let colour_map = mandelbrot_colour_map_factory(colour_map_kind, escape_range);
    render_frame(&samples, &colour_map, region, surface)?;

    Ok(FrameStats {
        escape_range,
        max_iterations: budget.max_iterations(),
        next_budget,
        in_set_pixels,
    })
}
