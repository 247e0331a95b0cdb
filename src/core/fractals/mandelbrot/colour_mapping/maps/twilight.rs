use crate::core::actions::render_frame::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKind;
use crate::core::fractals::mandelbrot::colour_mapping::map::MandelbrotColourMap;
use crate::core::fractals::mandelbrot::colour_mapping::range::EscapeRange;
use crate::core::fractals::mandelbrot::sample::PixelSample;

const BLUE_TINT: Colour = Colour { r: 32, g: 64, b: 160 };

/// Equal-width segments: black, blue, white and back to black, so the set
/// itself (top of the range) renders black.
const STOPS: [Colour; 4] = [Colour::BLACK, BLUE_TINT, Colour::WHITE, Colour::BLACK];

#[derive(Debug)]
pub struct MandelbrotTwilight {
    range: EscapeRange,
}

impl ColourMap<PixelSample> for MandelbrotTwilight {
    fn map(&self, sample: PixelSample) -> Colour {
        let t = self.range.normalise(sample.escape_value);
        let segments = STOPS.len() - 1;
        let scaled = t * segments as f64;
        let segment = (scaled.floor() as usize).min(segments - 1);
        let local_t = scaled - segment as f64;

        lerp(STOPS[segment], STOPS[segment + 1], local_t)
    }

    fn display_name(&self) -> &str {
        self.kind().display_name()
    }
}

impl MandelbrotColourMap for MandelbrotTwilight {
    fn kind(&self) -> MandelbrotColourMapKind {
        MandelbrotColourMapKind::Twilight
    }
}

impl MandelbrotTwilight {
    #[must_use]
    pub fn new(range: EscapeRange) -> Self {
        Self { range }
    }
}

fn lerp(from: Colour, to: Colour, t: f64) -> Colour {
    let channel = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;

    Colour {
        r: channel(from.r, to.r),
        g: channel(from.g, to.g),
        b: channel(from.b, to.b),
    }
}
