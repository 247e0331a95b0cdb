use crate::core::fractals::mandelbrot::colour_mapping::{
    kinds::MandelbrotColourMapKind,
    map::MandelbrotColourMap,
    maps::{grayscale::MandelbrotGrayscale, twilight::MandelbrotTwilight},
    range::EscapeRange,
};

#[must_use]
pub fn mandelbrot_colour_map_factory(
    kind: MandelbrotColourMapKind,
    range: EscapeRange,
) -> Box<dyn MandelbrotColourMap> {
    match kind {
        MandelbrotColourMapKind::Twilight => Box::new(MandelbrotTwilight::new(range)),
        MandelbrotColourMapKind::Grayscale => Box::new(MandelbrotGrayscale::new(range)),
    }
}
