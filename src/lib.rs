pub mod controllers;
pub mod core;
#[cfg(feature = "gui")]
pub mod input;
pub mod presenters;

pub use crate::controllers::cli::render::CliRenderController;
pub use crate::controllers::interactive::{
    ControllerError, FrameData, InteractiveController, ParseCommandError, ViewerCommand,
};
pub use crate::core::actions::scan_frame::{FrameStats, scan_frame};
pub use crate::core::data::pixel_buffer::PixelBuffer;
pub use crate::core::data::region::Region;
pub use crate::core::data::view::View;
pub use crate::core::fractals::mandelbrot::algorithm::escape_time;
pub use crate::core::fractals::mandelbrot::budget::IterationBudget;
pub use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKind;
pub use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;
pub use crate::presenters::file::ppm::PpmFilePresenter;

#[cfg(feature = "gui")]
pub use crate::input::gui::app::run_gui;
