use std::error::Error;
use std::fmt;
use crate::core::data::complex::Complex;
use crate::core::data::region::{Region, RegionError};
use crate::core::util::pixel_to_complex_coords::plane_delta;

/// Real-axis extent of the plane visible at magnification 1 (-2.5..1.0).
pub const SCALE_X: f64 = 3.5;
/// Imaginary-axis extent of the plane visible at magnification 1 (-1.0..1.0).
pub const SCALE_Y: f64 = 2.0;
pub const ASPECT_RATIO: f64 = SCALE_X / SCALE_Y;
pub const INITIAL_OFFSET: Complex = Complex::new(-2.5, -1.0);
pub const INITIAL_MAGNIFICATION: f64 = 1.0;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewError {
    NonPositiveMultiplier { multiplier: f64 },
    NonPositiveMagnification { magnification: f64 },
    Region(RegionError),
}

impl fmt::Display for ViewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveMultiplier { multiplier } => {
                write!(f, "zoom multiplier must be positive and finite: {}", multiplier)
            }
            Self::NonPositiveMagnification { magnification } => {
                write!(f, "magnification must be positive and finite: {}", magnification)
            }
            Self::Region(err) => write!(f, "invalid region: {}", err),
        }
    }
}

impl Error for ViewError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Region(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RegionError> for ViewError {
    fn from(err: RegionError) -> Self {
        Self::Region(err)
    }
}

/// Navigation state: which part of the complex plane is mapped onto the region.
///
/// `offset` is the plane coordinate under pixel (0, 0). Every mutation either
/// succeeds completely or leaves the view untouched.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct View {
    offset: Complex,
    magnification: f64,
    region: Region,
}

impl View {
    #[must_use]
    pub fn new(region: Region) -> Self {
        Self {
            offset: INITIAL_OFFSET,
            magnification: INITIAL_MAGNIFICATION,
            region,
        }
    }

    pub fn with_parts(offset: Complex, magnification: f64, region: Region) -> Result<Self, ViewError> {
        if !is_valid_magnification(magnification) {
            return Err(ViewError::NonPositiveMagnification { magnification });
        }

        Ok(Self {
            offset,
            magnification,
            region,
        })
    }

    #[must_use]
    pub fn offset(&self) -> Complex {
        self.offset
    }

    #[must_use]
    pub fn magnification(&self) -> f64 {
        self.magnification
    }

    #[must_use]
    pub fn region(&self) -> Region {
        self.region
    }

    /// Moves the view by a pixel displacement. A fixed drag covers the same
    /// visual distance at every zoom level.
    pub fn pan(&mut self, dx: i32, dy: i32) {
        self.shift(dx as f64, dy as f64);
    }

    /// Scales the view by `multiplier`, keeping the plane point under pixel
    /// (`px`, `py`) fixed on screen.
    pub fn zoom_at(&mut self, multiplier: f64, px: u32, py: u32) -> Result<(), ViewError> {
        if !(multiplier > 0.0 && multiplier.is_finite()) {
            return Err(ViewError::NonPositiveMultiplier { multiplier });
        }

        let magnification = self.magnification * multiplier;
        if !is_valid_magnification(magnification) {
            return Err(ViewError::NonPositiveMagnification { magnification });
        }

        let (px, py) = (px as f64, py as f64);

        // Order matters: shift at the old scale, rescale, shift back at the new one.
        self.shift(px, py);
        self.magnification = magnification;
        self.shift(-px, -py);

        Ok(())
    }

    pub fn zoom_centre(&mut self, multiplier: f64) -> Result<(), ViewError> {
        let centre = self.region.centre();
        self.zoom_at(multiplier, centre.x, centre.y)
    }

    /// Resizes the region to the largest box inside the target that keeps the
    /// plane's aspect ratio, so the image is never stretched.
    pub fn fit(&mut self, target_width: u32, target_height: u32) -> Result<(), ViewError> {
        self.region = Region::fit_within(target_width, target_height, ASPECT_RATIO)?;
        Ok(())
    }

    /// Restores the initial offset and magnification. The region is kept, since
    /// it tracks the size of the surface being drawn to.
    pub fn reset(&mut self) {
        self.offset = INITIAL_OFFSET;
        self.magnification = INITIAL_MAGNIFICATION;
    }

    fn shift(&mut self, dx: f64, dy: f64) {
        self.offset = self.offset + plane_delta(dx, dy, self);
    }
}

fn is_valid_magnification(magnification: f64) -> bool {
    magnification > 0.0 && magnification.is_finite()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::util::pixel_to_complex_coords::to_plane;

    const TOLERANCE: f64 = 1e-12;

    fn create_view() -> View {
        View::new(Region::new(700, 400).unwrap())
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= TOLERANCE * expected.abs().max(1.0),
            "expected {} got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_new_uses_initial_constants() {
        let view = create_view();

        assert_eq!(view.offset(), Complex::new(-2.5, -1.0));
        assert_eq!(view.magnification(), 1.0);
        assert_eq!(view.region(), Region::new(700, 400).unwrap());
    }

    #[test]
    fn test_with_parts_rejects_non_positive_magnification() {
        let region = Region::new(10, 10).unwrap();

        assert!(View::with_parts(Complex::ZERO, 0.0, region).is_err());
        assert!(View::with_parts(Complex::ZERO, -2.0, region).is_err());
        assert!(View::with_parts(Complex::ZERO, f64::NAN, region).is_err());
        assert!(View::with_parts(Complex::ZERO, 3.0, region).is_ok());
    }

    #[test]
    fn test_pan_moves_offset_by_scaled_delta() {
        let mut view = create_view();
        view.pan(100, -40);

        assert_close(view.offset().real, -2.5 + 100.0 * 3.5 / 700.0);
        assert_close(view.offset().imag, -1.0 - 40.0 * 2.0 / 400.0);
    }

    #[test]
    fn test_pan_then_inverse_pan_is_identity() {
        let mut view = create_view();
        view.zoom_at(3.0, 120, 80).unwrap();
        let before = view;

        view.pan(37, -91);
        view.pan(-37, 91);

        assert_close(view.offset().real, before.offset().real);
        assert_close(view.offset().imag, before.offset().imag);
        assert_eq!(view.magnification(), before.magnification());
    }

    #[test]
    fn test_pan_distance_scales_inversely_with_magnification() {
        let mut unzoomed = create_view();
        let mut zoomed = create_view();
        zoomed.zoom_at(8.0, 0, 0).unwrap();
        let unzoomed_start = unzoomed.offset();
        let zoomed_start = zoomed.offset();

        unzoomed.pan(50, 50);
        zoomed.pan(50, 50);

        let unzoomed_moved = unzoomed.offset().real - unzoomed_start.real;
        let zoomed_moved = zoomed.offset().real - zoomed_start.real;
        assert_close(unzoomed_moved / zoomed_moved, 8.0);
    }

    #[test]
    fn test_zoom_at_keeps_point_under_cursor_fixed() {
        let mut view = create_view();
        let (px, py) = (213, 97);
        let before = to_plane(px as f64, py as f64, &view);

        view.zoom_at(1.5, px, py).unwrap();
        let after = to_plane(px as f64, py as f64, &view);

        assert_close(after.real, before.real);
        assert_close(after.imag, before.imag);
        assert_eq!(view.magnification(), 1.5);
    }

    #[test]
    fn test_zoom_at_round_trip_restores_view() {
        let mut view = create_view();
        view.pan(-30, 12);
        let before = view;

        view.zoom_at(2.5, 410, 33).unwrap();
        view.zoom_at(1.0 / 2.5, 410, 33).unwrap();

        assert_close(view.offset().real, before.offset().real);
        assert_close(view.offset().imag, before.offset().imag);
        assert_close(view.magnification(), before.magnification());
    }

    #[test]
    fn test_repeated_zoom_round_trips_stay_consistent() {
        let mut view = create_view();
        let before = view;

        for step in 0..10 {
            view.zoom_at(1.5, 100 + step * 7, 50 + step * 3).unwrap();
        }
        for step in (0..10).rev() {
            view.zoom_at(1.0 / 1.5, 100 + step * 7, 50 + step * 3).unwrap();
        }

        assert!((view.offset().real - before.offset().real).abs() < 1e-9);
        assert!((view.offset().imag - before.offset().imag).abs() < 1e-9);
        assert!((view.magnification() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_zoom_out_with_fractional_multiplier() {
        let mut view = create_view();
        view.zoom_at(0.5, 350, 200).unwrap();

        assert_eq!(view.magnification(), 0.5);
    }

    #[test]
    fn test_zoom_at_rejects_non_positive_multiplier_and_leaves_view_unchanged() {
        let mut view = create_view();
        view.pan(5, 5);
        let before = view;

        for multiplier in [0.0, -1.5, f64::NAN, f64::INFINITY] {
            let result = view.zoom_at(multiplier, 10, 10);

            assert!(matches!(result, Err(ViewError::NonPositiveMultiplier { .. })));
            assert_eq!(view, before);
        }
    }

    #[test]
    fn test_zoom_at_rejects_magnification_underflow() {
        let mut view = View::with_parts(INITIAL_OFFSET, 1e-300, Region::new(10, 10).unwrap()).unwrap();
        let before = view;

        let result = view.zoom_at(1e-300, 0, 0);

        assert!(matches!(result, Err(ViewError::NonPositiveMagnification { .. })));
        assert_eq!(view, before);
    }

    #[test]
    fn test_zoom_centre_zooms_about_region_centre() {
        let mut view = create_view();
        let centre = to_plane(350.0, 200.0, &view);

        view.zoom_centre(4.0).unwrap();
        let after = to_plane(350.0, 200.0, &view);

        assert_close(after.real, centre.real);
        assert_close(after.imag, centre.imag);
    }

    #[test]
    fn test_fit_preserves_aspect_ratio() {
        let mut view = create_view();
        view.fit(1024, 768).unwrap();

        assert_eq!(view.region(), Region::new(1024, 585).unwrap());
    }

    #[test]
    fn test_fit_rejects_empty_target_and_keeps_region() {
        let mut view = create_view();
        let result = view.fit(0, 768);

        assert!(matches!(result, Err(ViewError::Region(_))));
        assert_eq!(view.region(), Region::new(700, 400).unwrap());
    }

    #[test]
    fn test_reset_restores_navigation_but_keeps_region() {
        let mut view = create_view();
        view.zoom_at(7.0, 3, 3).unwrap();
        view.pan(11, 13);
        view.fit(350, 200).unwrap();

        view.reset();

        assert_eq!(view.offset(), INITIAL_OFFSET);
        assert_eq!(view.magnification(), INITIAL_MAGNIFICATION);
        assert_eq!(view.region(), Region::new(350, 200).unwrap());
    }
}
