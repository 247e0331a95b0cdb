use clap::Parser;
use mandelbrot_viewer::MandelbrotColourMapKind;
use mandelbrot_viewer::core::fractals::mandelbrot::mandelbrot_config::{DEFAULT_HEIGHT, DEFAULT_WIDTH};

/// Interactive Mandelbrot viewer.
///
/// Left click zooms in, right click zooms out, drag pans, the wheel zooms
/// about the cursor, +/- zoom about the centre, R resets and P cycles palettes.
#[derive(Parser, Debug)]
#[command(name = "gui", about = "Interactive Mandelbrot set viewer", version)]
struct Args {
    /// Initial window width
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    width: u32,

    /// Initial window height
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    height: u32,

    /// Colour map (twilight, grayscale)
    #[arg(long, default_value_t = MandelbrotColourMapKind::default())]
    palette: MandelbrotColourMapKind,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args = Args::parse();
    mandelbrot_viewer::run_gui(args.width, args.height, args.palette)
}
