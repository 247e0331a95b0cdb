use crate::core::actions::render_frame::ports::colour_map::ColourMap;
use crate::core::actions::render_frame::ports::drawing_surface::DrawingSurface;
use crate::core::data::region::Region;
use std::error::Error;
use std::fmt;

#[derive(Debug, PartialEq)]
pub enum RenderFrameError<E> {
    SampleCountMismatch {
        region_size: u64,
        sample_count: usize,
    },
    Surface(E),
}

impl<E: fmt::Display> fmt::Display for RenderFrameError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SampleCountMismatch {
                region_size,
                sample_count,
            } => write!(
                f,
                "region holds {} pixels but {} samples were supplied",
                region_size, sample_count
            ),
            Self::Surface(err) => write!(f, "drawing surface error: {}", err),
        }
    }
}

impl<E: Error + 'static> Error for RenderFrameError<E> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::SampleCountMismatch { .. } => None,
            Self::Surface(err) => Some(err),
        }
    }
}

/// Clears `surface` to `region` and writes one colour per sample.
///
/// `samples` are row-major over `region`; every pixel is written exactly once.
/// Nothing is drawn if the sample count does not match the region.
pub fn render_frame<T, CMap, S>(
    samples: &[T],
    mapper: &CMap,
    region: Region,
    surface: &mut S,
) -> Result<(), RenderFrameError<S::Failure>>
where
    T: Copy,
    CMap: ColourMap<T>,
    S: DrawingSurface,
{
    if samples.len() as u64 != region.size() {
        return Err(RenderFrameError::SampleCountMismatch {
            region_size: region.size(),
            sample_count: samples.len(),
        });
    }

    surface.clear(region).map_err(RenderFrameError::Surface)?;

    for (pixel, &sample) in region.points().zip(samples) {
        surface
            .set_pixel(pixel.x, pixel.y, mapper.map(sample))
            .map_err(RenderFrameError::Surface)?;
    }

    Ok(())
}
