pub mod colour;
pub mod construction_history;
pub mod interval;
pub mod pixel_buffer;
