//! Main GUI application loop.

use crate::controllers::interactive::{ControllerError, InteractiveController, ViewerCommand};
use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKind;
use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;
use crate::input::gui::keys::key_command;
use crate::input::gui::pointer::{PointerButton, PointerTracker};
use crate::presenters::pixels::surface::PixelsSurface;
use log::{error, info};
use std::error::Error;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, Event, KeyEvent, MouseButton, MouseScrollDelta, WindowEvent};
use winit::event_loop::EventLoop;
use winit::keyboard::PhysicalKey;
use winit::window::{Window, WindowBuilder};

/// Touchpad scroll distance treated as one wheel notch.
const PIXELS_PER_LINE: f64 = 40.0;

fn pointer_button(button: MouseButton) -> Option<PointerButton> {
    match button {
        MouseButton::Left => Some(PointerButton::Primary),
        MouseButton::Right => Some(PointerButton::Secondary),
        _ => None,
    }
}

/// Viewer state behind the window: the controller drawing into the window's
/// frame buffer and the pointer gesture in progress.
pub struct GuiApp {
    controller: InteractiveController<PixelsSurface>,
    pointer: PointerTracker,
}

impl GuiApp {
    pub fn new(controller: InteractiveController<PixelsSurface>) -> Self {
        Self {
            controller,
            pointer: PointerTracker::default(),
        }
    }

    /// Runs `command` through the controller. Returns whether a new frame
    /// was drawn; rejected commands are logged by the controller and skipped.
    fn dispatch(&mut self, command: Option<ViewerCommand>) -> Result<bool, Box<dyn Error>> {
        let Some(command) = command else {
            return Ok(false);
        };

        match self.controller.handle(command) {
            Ok(_) => Ok(true),
            Err(ControllerError::Rejected(_)) => Ok(false),
            Err(ControllerError::Scan(err)) => Err(err.into()),
        }
    }

    /// Translates a window event into at most one command.
    pub fn handle_window_event(&mut self, event: &WindowEvent) -> Result<bool, Box<dyn Error>> {
        match event {
            WindowEvent::Resized(size) => {
                self.controller
                    .surface_mut()
                    .resize_window(size.width, size.height)?;
                self.dispatch(Some(ViewerCommand::Resize {
                    width: size.width,
                    height: size.height,
                }))
            }
            WindowEvent::CursorMoved { position, .. } => {
                let pixel = self
                    .controller
                    .surface()
                    .window_pos_to_pixel(position.x, position.y);
                self.pointer.moved(pixel);
                Ok(false)
            }
            WindowEvent::CursorLeft { .. } => {
                self.pointer.left_window();
                Ok(false)
            }
            WindowEvent::MouseInput { state, button, .. } => {
                let Some(button) = pointer_button(*button) else {
                    return Ok(false);
                };

                match state {
                    ElementState::Pressed => {
                        self.pointer.pressed(button);
                        Ok(false)
                    }
                    ElementState::Released => {
                        let command = self.pointer.released(button);
                        self.dispatch(command)
                    }
                }
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let lines = match delta {
                    MouseScrollDelta::LineDelta(_, y) => *y as f64,
                    MouseScrollDelta::PixelDelta(position) => position.y / PIXELS_PER_LINE,
                };
                let command = self.pointer.scrolled(lines);
                self.dispatch(command)
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(key_code),
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => {
                let command = key_command(*key_code, self.controller.colour_map_kind());
                self.dispatch(command)
            }
            _ => Ok(false),
        }
    }

    pub fn present(&self) -> Result<(), pixels::Error> {
        self.controller.surface().present()
    }
}

/// Opens the viewer window and runs until it is closed.
pub fn run_gui(
    width: u32,
    height: u32,
    colour_map_kind: MandelbrotColourMapKind,
) -> Result<(), Box<dyn Error>> {
    let event_loop = EventLoop::new()?;

    // Leak the window to get a 'static reference for pixels
    let window: &'static Window = Box::leak(Box::new(
        WindowBuilder::new()
            .with_title("Mandelbrot Viewer")
            .with_inner_size(LogicalSize::new(width as f64, height as f64))
            .with_min_inner_size(LogicalSize::new(200.0, 200.0))
            .build(&event_loop)?,
    ));

    let size = window.inner_size();
    let config = MandelbrotConfig::for_canvas(size.width, size.height, colour_map_kind)?;
    let surface = PixelsSurface::new(window, config.region)?;
    let mut controller = InteractiveController::new(config, surface);
    controller.render()?;

    info!(
        "viewer open at {}x{}, palette {}",
        size.width, size.height, colour_map_kind
    );

    let mut app = GuiApp::new(controller);
    window.request_redraw();

    event_loop.run(move |event, elwt| {
        if let Event::WindowEvent { event, window_id } = event {
            if window_id != window.id() {
                return;
            }

            match event {
                WindowEvent::CloseRequested => elwt.exit(),
                WindowEvent::RedrawRequested => {
                    if let Err(err) = app.present() {
                        error!("could not present frame: {}", err);
                        elwt.exit();
                    }
                }
                other => match app.handle_window_event(&other) {
                    Ok(true) => window.request_redraw(),
                    Ok(false) => {}
                    Err(err) => {
                        error!("{}", err);
                        elwt.exit();
                    }
                },
            }
        }
    })?;

    Ok(())
}
