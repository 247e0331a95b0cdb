use crate::controllers::interactive::ViewerCommand;
use crate::core::data::point::Point;
use crate::core::fractals::mandelbrot::mandelbrot_config::MAGNIFICATION_STEP;

/// Movement (in frame pixels) after which a held button counts as a drag.
pub const DRAG_THRESHOLD: u32 = 3;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
struct Press {
    button: PointerButton,
    origin: Point,
    dragging: bool,
}

/// Turns raw pointer activity into viewer commands.
///
/// A click zooms about the cursor (in with the primary button, out with the
/// secondary one). A drag pans on release so that the plane follows the
/// pointer. Wheel notches zoom about the cursor.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PointerTracker {
    cursor: Option<Point>,
    press: Option<Press>,
}

impl PointerTracker {
    pub fn moved(&mut self, to: Point) {
        self.cursor = Some(to);

        if let Some(press) = &mut self.press {
            if press.origin.x.abs_diff(to.x) > DRAG_THRESHOLD
                || press.origin.y.abs_diff(to.y) > DRAG_THRESHOLD
            {
                press.dragging = true;
            }
        }
    }

    pub fn pressed(&mut self, button: PointerButton) {
        if let Some(origin) = self.cursor {
            self.press = Some(Press {
                button,
                origin,
                dragging: false,
            });
        }
    }

    pub fn released(&mut self, button: PointerButton) -> Option<ViewerCommand> {
        let press = self.press.filter(|press| press.button == button)?;
        self.press = None;
        let cursor = self.cursor?;

        if press.dragging {
            return Some(ViewerCommand::Pan {
                dx: press.origin.x as i32 - cursor.x as i32,
                dy: press.origin.y as i32 - cursor.y as i32,
            });
        }

        let multiplier = match button {
            PointerButton::Primary => MAGNIFICATION_STEP,
            PointerButton::Secondary => 1.0 / MAGNIFICATION_STEP,
        };

        Some(ViewerCommand::ZoomAt {
            multiplier,
            px: cursor.x,
            py: cursor.y,
        })
    }

    /// Positive `lines` zoom in, negative zoom out.
    pub fn scrolled(&self, lines: f64) -> Option<ViewerCommand> {
        if lines == 0.0 || !lines.is_finite() {
            return None;
        }

        let cursor = self.cursor?;

        Some(ViewerCommand::ZoomAt {
            multiplier: MAGNIFICATION_STEP.powf(lines),
            px: cursor.x,
            py: cursor.y,
        })
    }

    pub fn left_window(&mut self) {
        self.cursor = None;
        self.press = None;
    }
}
