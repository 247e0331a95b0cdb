use crate::core::actions::render_frame::ports::drawing_surface::DrawingSurface;
use crate::core::data::colour::Colour;
use crate::core::data::point::Point;
use crate::core::data::region::Region;
use pixels::{Pixels, SurfaceTexture, TextureError};
use std::error::Error;
use std::fmt;
use winit::window::Window;

const BYTES_PER_PIXEL: usize = 4;

#[derive(Debug)]
pub enum PixelsSurfaceError {
    Texture(TextureError),
    PixelOutsideBounds { pixel: Point, region: Region },
}

impl fmt::Display for PixelsSurfaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Texture(err) => write!(f, "could not resize frame buffer: {}", err),
            Self::PixelOutsideBounds { pixel, region } => write!(
                f,
                "pixel at x:{}, y:{} outside of {}x{} frame",
                pixel.x,
                pixel.y,
                region.width(),
                region.height()
            ),
        }
    }
}

impl Error for PixelsSurfaceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Texture(err) => Some(err),
            Self::PixelOutsideBounds { .. } => None,
        }
    }
}

impl From<TextureError> for PixelsSurfaceError {
    fn from(err: TextureError) -> Self {
        Self::Texture(err)
    }
}

/// The window's RGBA frame buffer as a drawing surface. The buffer always has
/// the size of the scanned region; pixels scales it onto the window.
pub struct PixelsSurface {
    pixels: Pixels<'static>,
    region: Region,
}

impl PixelsSurface {
    pub fn new(window: &'static Window, region: Region) -> Result<Self, pixels::Error> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);
        let pixels = Pixels::new(region.width(), region.height(), surface_texture)?;

        Ok(Self { pixels, region })
    }

    /// Follows the window size. Zero-sized windows (minimised) are ignored.
    pub fn resize_window(&mut self, width: u32, height: u32) -> Result<(), TextureError> {
        if width == 0 || height == 0 {
            return Ok(());
        }

        self.pixels.resize_surface(width, height)
    }

    /// Maps a physical window position onto the frame, clamping positions
    /// that fall in the letterbox around it.
    #[must_use]
    pub fn window_pos_to_pixel(&self, x: f64, y: f64) -> Point {
        let (px, py) = self
            .pixels
            .window_pos_to_pixel((x as f32, y as f32))
            .unwrap_or_else(|outside| self.pixels.clamp_pixel_pos(outside));

        Point {
            x: px as u32,
            y: py as u32,
        }
    }

    pub fn present(&self) -> Result<(), pixels::Error> {
        self.pixels.render()
    }
}

impl DrawingSurface for PixelsSurface {
    type Failure = PixelsSurfaceError;

    fn clear(&mut self, region: Region) -> Result<(), Self::Failure> {
        if region != self.region {
            self.pixels.resize_buffer(region.width(), region.height())?;
            self.region = region;
        }

        for pixel in self.pixels.frame_mut().chunks_exact_mut(BYTES_PER_PIXEL) {
            pixel.copy_from_slice(&[0, 0, 0, 255]);
        }

        Ok(())
    }

    fn set_pixel(&mut self, x: u32, y: u32, colour: Colour) -> Result<(), Self::Failure> {
        let pixel = Point { x, y };
        if !self.region.contains_point(pixel) {
            return Err(PixelsSurfaceError::PixelOutsideBounds {
                pixel,
                region: self.region,
            });
        }

        let index = (y as usize * self.region.width() as usize + x as usize) * BYTES_PER_PIXEL;
        self.pixels.frame_mut()[index..index + BYTES_PER_PIXEL]
            .copy_from_slice(&[colour.r, colour.g, colour.b, 255]);

        Ok(())
    }
}
