use std::path::Path;

use crate::controllers::interactive::{ControllerError, FrameData, InteractiveController, ViewerCommand};
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;

/// Headless session: replays commands against an in-memory frame and hands
/// the last frame to a file presenter.
pub struct CliRenderController<P: FilePresenterPort> {
    presenter: P,
    controller: InteractiveController<PixelBuffer>,
}

impl<P: FilePresenterPort> CliRenderController<P> {
    pub fn new(config: MandelbrotConfig, presenter: P) -> Self {
        Self {
            presenter,
            controller: InteractiveController::new(config, PixelBuffer::new(config.region)),
        }
    }

    /// Draws the initial view, then applies `commands` in order with one scan
    /// each. Stops at the first rejected command.
    pub fn generate(
        &mut self,
        commands: &[ViewerCommand],
    ) -> Result<FrameData, ControllerError<PixelBufferError>> {
        let mut frame = self.controller.render()?;

        for &command in commands {
            frame = self.controller.handle(command)?;
        }

        Ok(frame)
    }

    #[must_use]
    pub fn frame(&self) -> &PixelBuffer {
        self.controller.surface()
    }

    pub fn write(&self, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        self.presenter.present(self.frame(), filepath)
    }
}
