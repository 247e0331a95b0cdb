pub mod grayscale;
pub mod twilight;
