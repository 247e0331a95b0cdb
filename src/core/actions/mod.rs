pub mod generate_fractal;
pub mod render_frame;
pub mod scan_frame;
