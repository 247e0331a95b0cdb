use crate::controllers::interactive::command::ViewerCommand;
use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::errors::ControllerError;
use crate::core::actions::render_frame::ports::drawing_surface::DrawingSurface;
use crate::core::actions::scan_frame::scan_frame;
use crate::core::data::view::View;
use crate::core::fractals::mandelbrot::budget::IterationBudget;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKind;
use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;
use log::{debug, info, warn};
use std::time::Instant;

/// Single-threaded viewer session: applies commands to the view and redraws
/// synchronously, so one scan always completes before the next command.
pub struct InteractiveController<S: DrawingSurface> {
    config: MandelbrotConfig,
    view: View,
    budget: IterationBudget,
    colour_map_kind: MandelbrotColourMapKind,
    surface: S,
    generation: u64,
}

impl<S: DrawingSurface> InteractiveController<S> {
    pub fn new(config: MandelbrotConfig, surface: S) -> Self {
        Self {
            view: config.initial_view(),
            budget: config.initial_budget,
            colour_map_kind: config.colour_map_kind,
            config,
            surface,
            generation: 0,
        }
    }

    #[must_use]
    pub fn view(&self) -> View {
        self.view
    }

    #[must_use]
    pub fn budget(&self) -> IterationBudget {
        self.budget
    }

    #[must_use]
    pub fn colour_map_kind(&self) -> MandelbrotColourMapKind {
        self.colour_map_kind
    }

    /// Number of frames drawn so far.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Applies `command` and redraws once. A rejected command leaves the view
    /// as it was and draws nothing.
    pub fn handle(&mut self, command: ViewerCommand) -> Result<FrameData, ControllerError<S::Failure>> {
        debug!("handling {:?}", command);

        let mut view = self.view;
        let mut budget = self.budget;
        let mut colour_map_kind = self.colour_map_kind;

        let applied = match command {
            ViewerCommand::Pan { dx, dy } => {
                view.pan(dx, dy);
                Ok(())
            }
            ViewerCommand::ZoomAt { multiplier, px, py } => view.zoom_at(multiplier, px, py),
            ViewerCommand::ZoomCentre(multiplier) => view.zoom_centre(multiplier),
            ViewerCommand::Resize { width, height } => view.fit(width, height),
            ViewerCommand::Reset => {
                view.reset();
                budget = self.config.initial_budget;
                Ok(())
            }
            ViewerCommand::SetPalette(kind) => {
                colour_map_kind = kind;
                Ok(())
            }
        };

        if let Err(err) = applied {
            warn!("rejected {:?}: {}", command, err);
            return Err(ControllerError::Rejected(err));
        }

        self.view = view;
        self.budget = budget;
        self.colour_map_kind = colour_map_kind;

        self.render()
    }

    /// Redraws the current view with the current budget, then carries the
    /// adapted budget forward.
    pub fn render(&mut self) -> Result<FrameData, ControllerError<S::Failure>> {
        let start = Instant::now();
        let stats = scan_frame(&self.view, self.budget, self.colour_map_kind, &mut self.surface)?;
        let render_duration = start.elapsed();

        self.budget = stats.next_budget;
        self.generation += 1;

        info!(
            "frame {}: {}x{} in {:?}, escape range {:.3}..{:.3}, {} in set, budget {} -> {}",
            self.generation,
            self.view.region().width(),
            self.view.region().height(),
            render_duration,
            stats.escape_range.min(),
            stats.escape_range.max(),
            stats.in_set_pixels,
            stats.max_iterations,
            stats.next_budget.max_iterations()
        );

        Ok(FrameData {
            generation: self.generation,
            stats,
            render_duration,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Colour;
    use crate::core::data::pixel_buffer::PixelBuffer;
    use crate::core::data::region::Region;
    use crate::core::data::view::ViewError;
    use std::convert::Infallible;

    #[derive(Debug, Default)]
    struct CountingSurface {
        clears: usize,
        writes: usize,
        region: Option<Region>,
    }

    impl DrawingSurface for CountingSurface {
        type Failure = Infallible;

        fn clear(&mut self, region: Region) -> Result<(), Self::Failure> {
            self.clears += 1;
            self.region = Some(region);
            Ok(())
        }

        fn set_pixel(&mut self, _: u32, _: u32, _: Colour) -> Result<(), Self::Failure> {
            self.writes += 1;
            Ok(())
        }
    }

    fn create_config() -> MandelbrotConfig {
        MandelbrotConfig::for_canvas(70, 40, MandelbrotColourMapKind::default()).unwrap()
    }

    fn create_controller() -> InteractiveController<CountingSurface> {
        InteractiveController::new(create_config(), CountingSurface::default())
    }

    #[test]
    fn test_new_starts_from_config() {
        let controller = create_controller();

        assert_eq!(controller.view(), create_config().initial_view());
        assert_eq!(controller.budget(), IterationBudget::default());
        assert_eq!(controller.generation(), 0);
        assert_eq!(controller.surface().clears, 0);
    }

    #[test]
    fn test_each_accepted_command_renders_exactly_once() {
        let mut controller = create_controller();
        let commands = [
            ViewerCommand::Pan { dx: 5, dy: -3 },
            ViewerCommand::ZoomAt {
                multiplier: 1.5,
                px: 10,
                py: 10,
            },
            ViewerCommand::ZoomCentre(0.5),
            ViewerCommand::SetPalette(MandelbrotColourMapKind::Grayscale),
            ViewerCommand::Reset,
        ];

        for (index, command) in commands.into_iter().enumerate() {
            let frame = controller.handle(command).unwrap();

            assert_eq!(frame.generation, index as u64 + 1);
            assert_eq!(controller.surface().clears, index + 1);
            assert_eq!(controller.surface().writes, (index + 1) * 70 * 40);
        }
    }

    #[test]
    fn test_rejected_command_leaves_view_unchanged_and_skips_scan() {
        let mut controller = create_controller();
        controller.handle(ViewerCommand::Pan { dx: 1, dy: 1 }).unwrap();
        let view = controller.view();
        let budget = controller.budget();

        let result = controller.handle(ViewerCommand::ZoomCentre(0.0));

        assert_eq!(
            result,
            Err(ControllerError::Rejected(ViewError::NonPositiveMultiplier {
                multiplier: 0.0
            }))
        );
        assert_eq!(controller.view(), view);
        assert_eq!(controller.budget(), budget);
        assert_eq!(controller.generation(), 1);
        assert_eq!(controller.surface().clears, 1);
    }

    #[test]
    fn test_rejected_resize_skips_scan() {
        let mut controller = create_controller();

        let result = controller.handle(ViewerCommand::Resize { width: 0, height: 10 });

        assert!(matches!(result, Err(ControllerError::Rejected(ViewError::Region(_)))));
        assert_eq!(controller.surface().clears, 0);
    }

    #[test]
    fn test_resize_fits_region_and_redraws_at_new_size() {
        let mut controller = create_controller();

        controller
            .handle(ViewerCommand::Resize {
                width: 350,
                height: 300,
            })
            .unwrap();

        let region = Region::new(350, 200).unwrap();
        assert_eq!(controller.view().region(), region);
        assert_eq!(controller.surface().region, Some(region));
        assert_eq!(controller.surface().writes, 350 * 200);
    }

    #[test]
    fn test_budget_carries_over_between_frames() {
        let mut controller = create_controller();

        let first = controller.render().unwrap();
        let second = controller.render().unwrap();

        assert_eq!(first.stats.max_iterations, 500);
        assert_eq!(second.stats.max_iterations, first.stats.next_budget.max_iterations());
        assert_eq!(controller.budget(), second.stats.next_budget);
    }

    #[test]
    fn test_reset_restores_initial_budget_and_navigation() {
        let mut controller = create_controller();
        controller.handle(ViewerCommand::ZoomCentre(50.0)).unwrap();
        controller.handle(ViewerCommand::Pan { dx: 7, dy: 7 }).unwrap();

        let frame = controller.handle(ViewerCommand::Reset).unwrap();

        assert_eq!(frame.stats.max_iterations, 500);
        assert_eq!(controller.view(), create_config().initial_view());
    }

    #[test]
    fn test_set_palette_switches_colours() {
        let config = create_config();
        let mut controller = InteractiveController::new(config, PixelBuffer::new(config.region));
        controller.render().unwrap();
        let twilight = controller.surface().buffer().clone();

        controller
            .handle(ViewerCommand::SetPalette(MandelbrotColourMapKind::Grayscale))
            .unwrap();

        assert_eq!(controller.colour_map_kind(), MandelbrotColourMapKind::Grayscale);
        assert_ne!(controller.surface().buffer(), &twilight);
    }
}
