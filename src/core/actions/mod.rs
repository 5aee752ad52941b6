pub mod derive_statistics;
pub mod generate_construction;
pub mod rasterize_construction;
