pub mod actions;
pub mod cantor;
pub mod data;
pub mod playback;
