pub mod colour_map;
pub mod drawing_surface;
