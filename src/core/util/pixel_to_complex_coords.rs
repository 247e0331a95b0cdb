use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::data::view::{SCALE_X, SCALE_Y, View};

/// Plane-space distance covered by a pixel-space displacement at the view's
/// current magnification and region size.
///
/// This is the only place the pixel-to-plane scale is computed; [`to_plane`]
/// and every [`View`] mutation go through it so that pan and zoom compose.
#[must_use]
pub fn plane_delta(dx: f64, dy: f64, view: &View) -> Complex {
    let region = view.region();

    Complex {
        real: dx * SCALE_X / view.magnification() / region.width() as f64,
        imag: dy * SCALE_Y / view.magnification() / region.height() as f64,
    }
}

/// Maps a (possibly fractional, possibly out-of-region) pixel position to the
/// complex plane.
#[must_use]
pub fn to_plane(px: f64, py: f64, view: &View) -> Complex {
    plane_delta(px, py, view) + view.offset()
}

#[must_use]
pub fn pixel_to_complex_coords(pixel: Point, view: &View) -> Complex {
    to_plane(pixel.x as f64, pixel.y as f64, view)
}
