use crate::core::actions::render_frame::ports::drawing_surface::DrawingSurface;
use crate::core::data::colour::Colour;
use crate::core::data::point::Point;
use crate::core::data::region::Region;
use std::error::Error;
use std::fmt;

fn region_to_buffer_size(region: Region) -> usize {
    region.size() as usize * 3
}

#[derive(Debug, Clone, PartialEq)]
pub enum PixelBufferError {
    PixelOutsideBounds {
        pixel: Point,
        region: Region,
    },
    BoundsMismatch {
        region_size: usize,
        buffer_size: usize,
    },
}

impl fmt::Display for PixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsMismatch {
                region_size,
                buffer_size,
            } => {
                write!(
                    f,
                    "region size {} does not match buffer size {}",
                    region_size, buffer_size
                )
            }
            Self::PixelOutsideBounds { pixel, region } => {
                write!(
                    f,
                    "pixel at x:{}, y:{} outside of {}x{} region",
                    pixel.x,
                    pixel.y,
                    region.width(),
                    region.height()
                )
            }
        }
    }
}

impl Error for PixelBufferError {}

pub type PixelBufferData = Vec<u8>;

/// Packed RGB frame, row-major, three bytes per pixel.
#[derive(Debug, Clone)]
pub struct PixelBuffer {
    region: Region,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    #[must_use]
    pub fn new(region: Region) -> Self {
        Self {
            region,
            buffer: vec![0; region_to_buffer_size(region)],
        }
    }

    pub fn from_data(region: Region, buffer: PixelBufferData) -> Result<Self, PixelBufferError> {
        let region_size = region_to_buffer_size(region);

        if region_size != buffer.len() {
            return Err(PixelBufferError::BoundsMismatch {
                region_size,
                buffer_size: buffer.len(),
            });
        }

        Ok(Self { region, buffer })
    }

    #[must_use]
    pub fn region(&self) -> Region {
        self.region
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBufferData {
        &self.buffer
    }

    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn pixel(&self, pixel: Point) -> Option<Colour> {
        if !self.region.contains_point(pixel) {
            return None;
        }

        let index = self.index_of(pixel);
        Some(Colour {
            r: self.buffer[index],
            g: self.buffer[index + 1],
            b: self.buffer[index + 2],
        })
    }

    pub fn set_pixel(&mut self, pixel: Point, colour: Colour) -> Result<(), PixelBufferError> {
        if !self.region.contains_point(pixel) {
            return Err(PixelBufferError::PixelOutsideBounds {
                pixel,
                region: self.region,
            });
        }

        let index = self.index_of(pixel);
        self.buffer[index] = colour.r;
        self.buffer[index + 1] = colour.g;
        self.buffer[index + 2] = colour.b;

        Ok(())
    }

    /// Blanks the buffer, reallocating it first if `region` differs from the current one.
    pub fn clear_to(&mut self, region: Region) {
        if region != self.region {
            self.region = region;
            self.buffer = vec![0; region_to_buffer_size(region)];
        } else {
            self.buffer.fill(0);
        }
    }

    fn index_of(&self, pixel: Point) -> usize {
        (pixel.y as usize * self.region.width() as usize + pixel.x as usize) * 3
    }
}

impl DrawingSurface for PixelBuffer {
    type Failure = PixelBufferError;

    fn clear(&mut self, region: Region) -> Result<(), Self::Failure> {
        self.clear_to(region);
        Ok(())
    }

    fn set_pixel(&mut self, x: u32, y: u32, colour: Colour) -> Result<(), Self::Failure> {
        PixelBuffer::set_pixel(self, Point { x, y }, colour)
    }
}
