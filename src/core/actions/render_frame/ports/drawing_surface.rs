use std::error::Error;
use crate::core::data::colour::Colour;
use crate::core::data::region::Region;

/// Anything a frame can be drawn onto.
///
/// A render calls [`clear`](Self::clear) once with the frame's region, then
/// [`set_pixel`](Self::set_pixel) exactly once for every pixel inside it.
pub trait DrawingSurface {
    type Failure: Error;

    fn clear(&mut self, region: Region) -> Result<(), Self::Failure>;

    fn set_pixel(&mut self, x: u32, y: u32, colour: Colour) -> Result<(), Self::Failure>;
}
