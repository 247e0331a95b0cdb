use std::path::PathBuf;

use clap::Parser;
use log::info;
use mandelbrot_viewer::core::fractals::mandelbrot::mandelbrot_config::{DEFAULT_HEIGHT, DEFAULT_WIDTH};
use mandelbrot_viewer::{
    CliRenderController, MandelbrotColourMapKind, MandelbrotConfig, PpmFilePresenter, ViewerCommand,
};

/// Renders the Mandelbrot set to a PPM image, optionally after replaying
/// navigation commands.
///
/// Example:
///   mandelbrot_viewer --width 1024 --height 768 --command zoom:4,300,180 --command palette:grayscale
#[derive(Parser, Debug)]
#[command(name = "mandelbrot_viewer", about = "Headless Mandelbrot set renderer", version)]
struct Cli {
    /// Canvas width in pixels; the image keeps a 3.5:2 aspect ratio inside it
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    width: u32,

    /// Canvas height in pixels
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    height: u32,

    /// Colour map (twilight, grayscale)
    #[arg(long, default_value_t = MandelbrotColourMapKind::default())]
    palette: MandelbrotColourMapKind,

    /// Where to write the final frame
    #[arg(long, default_value = "output/mandelbrot.ppm")]
    output: PathBuf,

    /// Command to replay, in order: pan:DX,DY  zoom:M,PX,PY  zoom-centre:M  resize:W,H  reset  palette:NAME
    #[arg(long = "command", value_name = "COMMAND")]
    commands: Vec<ViewerCommand>,
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = MandelbrotConfig::for_canvas(cli.width, cli.height, cli.palette)?;
    let mut controller = CliRenderController::new(config, PpmFilePresenter::new());

    let frame = controller.generate(&cli.commands)?;
    info!(
        "rendered {} frame(s), last took {:?} with {} iterations",
        frame.generation, frame.render_duration, frame.stats.max_iterations
    );

    controller.write(&cli.output)?;

    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    run(&Cli::parse())
}
