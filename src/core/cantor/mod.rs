pub mod colour_scale;
pub mod shapes;
