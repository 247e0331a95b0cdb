use crate::controllers::interactive::ViewerCommand;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKind;
use crate::core::fractals::mandelbrot::mandelbrot_config::MAGNIFICATION_STEP;
use winit::keyboard::KeyCode;

/// Command bound to a key press, if any. `P` cycles away from `current`.
#[must_use]
pub fn key_command(key_code: KeyCode, current: MandelbrotColourMapKind) -> Option<ViewerCommand> {
    match key_code {
        KeyCode::Equal | KeyCode::NumpadAdd => Some(ViewerCommand::ZoomCentre(MAGNIFICATION_STEP)),
        KeyCode::Minus | KeyCode::NumpadSubtract => {
            Some(ViewerCommand::ZoomCentre(1.0 / MAGNIFICATION_STEP))
        }
        KeyCode::KeyR => Some(ViewerCommand::Reset),
        KeyCode::KeyP => Some(ViewerCommand::SetPalette(current.next())),
        _ => None,
    }
}
