//! Interactive controller for navigating the Mandelbrot set.
//!
//! The controller owns the navigation state and the adaptive iteration
//! budget, and redraws a [`DrawingSurface`] after every accepted command.
//!
//! # Architecture
//!
//! - **Input**: [`ViewerCommand`] values, built by the GUI or parsed from text
//! - **Output**: any [`DrawingSurface`] implementation
//! - **Core**: the two-pass scan in `core::actions::scan_frame`
//!
//! [`DrawingSurface`]: crate::core::actions::render_frame::ports::drawing_surface::DrawingSurface

pub mod command;
mod controller;
pub mod data;
pub mod errors;

pub use command::{ParseCommandError, ViewerCommand};
pub use controller::InteractiveController;
pub use data::frame_data::FrameData;
pub use errors::ControllerError;
