use crate::core::data::region::{Region, RegionError};
use crate::core::data::view::{ASPECT_RATIO, View};
use crate::core::fractals::mandelbrot::budget::IterationBudget;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKind;

pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 600;

/// Zoom factor applied per click or wheel notch.
pub const MAGNIFICATION_STEP: f64 = 1.5;

/// Start-up settings for a viewer session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MandelbrotConfig {
    pub region: Region,
    pub initial_budget: IterationBudget,
    pub colour_map_kind: MandelbrotColourMapKind,
}

impl Default for MandelbrotConfig {
    fn default() -> Self {
        Self {
            region: Region::fit_within(DEFAULT_WIDTH, DEFAULT_HEIGHT, ASPECT_RATIO)
                .expect("default canvas size is non-zero"),
            initial_budget: IterationBudget::default(),
            colour_map_kind: MandelbrotColourMapKind::default(),
        }
    }
}

impl MandelbrotConfig {
    /// Config whose region is fitted inside a `width` x `height` canvas.
    pub fn for_canvas(
        width: u32,
        height: u32,
        colour_map_kind: MandelbrotColourMapKind,
    ) -> Result<Self, RegionError> {
        Ok(Self {
            region: Region::fit_within(width, height, ASPECT_RATIO)?,
            colour_map_kind,
            ..Self::default()
        })
    }

    #[must_use]
    pub fn initial_view(&self) -> View {
        View::new(self.region)
    }
}
