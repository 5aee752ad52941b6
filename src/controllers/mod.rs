pub mod cli;
pub mod playback;
pub mod ports;
