use std::error::Error;
use std::fmt;
use crate::core::data::point::Point;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RegionError {
    InvalidSize { width: u32, height: u32 },
}

impl fmt::Display for RegionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(f, "region size must be positive: {}x{}", width, height)
            }
        }
    }
}

impl Error for RegionError {}

/// The pixel area the fractal is scanned over. Both dimensions are always non-zero.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Region {
    width: u32,
    height: u32,
}

impl Region {
    pub fn new(width: u32, height: u32) -> Result<Self, RegionError> {
        if width == 0 || height == 0 {
            return Err(RegionError::InvalidSize { width, height });
        }

        Ok(Self { width, height })
    }

    /// Largest region inside `target_width` x `target_height` whose width/height
    /// ratio is `aspect`. Each side is floored, so the result never overflows the
    /// target and is off the exact ratio by less than one pixel.
    pub fn fit_within(target_width: u32, target_height: u32, aspect: f64) -> Result<Self, RegionError> {
        if target_width == 0 || target_height == 0 {
            return Err(RegionError::InvalidSize {
                width: target_width,
                height: target_height,
            });
        }

        let target_aspect = target_width as f64 / target_height as f64;

        let (width, height) = if target_aspect > aspect {
            let width = (target_height as f64 * aspect).floor() as u32;
            (width.clamp(1, target_width), target_height)
        } else {
            let height = (target_width as f64 / aspect).floor() as u32;
            (target_width, height.clamp(1, target_height))
        };

        Self::new(width, height)
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn size(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    #[must_use]
    pub fn centre(&self) -> Point {
        Point {
            x: self.width / 2,
            y: self.height / 2,
        }
    }

    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        point.x < self.width && point.y < self.height
    }

    /// Row-major iterator over every pixel in the region.
    pub fn points(&self) -> impl Iterator<Item = Point> + use<> {
        let width = self.width;
        (0..self.height).flat_map(move |y| (0..width).map(move |x| Point { x, y }))
    }
}
