use crate::core::actions::render_frame::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKind;
use crate::core::fractals::mandelbrot::colour_mapping::map::MandelbrotColourMap;
use crate::core::fractals::mandelbrot::colour_mapping::range::EscapeRange;
use crate::core::fractals::mandelbrot::sample::PixelSample;

/// Square-root grey ramp: dark for fast escapes, brightening toward the set.
#[derive(Debug)]
pub struct MandelbrotGrayscale {
    range: EscapeRange,
}

impl ColourMap<PixelSample> for MandelbrotGrayscale {
    fn map(&self, sample: PixelSample) -> Colour {
        let t = self.range.normalise(sample.escape_value);
        let hue = (t.sqrt() * 255.0).floor() as u8;

        Colour::grey(hue)
    }

    fn display_name(&self) -> &str {
        self.kind().display_name()
    }
}

impl MandelbrotColourMap for MandelbrotGrayscale {
    fn kind(&self) -> MandelbrotColourMapKind {
        MandelbrotColourMapKind::Grayscale
    }
}

impl MandelbrotGrayscale {
    #[must_use]
    pub fn new(range: EscapeRange) -> Self {
        Self { range }
    }
}
